//! Migration documents: the frozen description of a process instance migration
//!
//! A document is immutable once built. The per-activity variable table is
//! always derived from the mappings, never supplied from outside.

use crate::{
    validator, ActivityId, ActivityMapping, ActivityVariables, MigrationDocumentBuilder,
    MigrationError, MigrationResult, VariableMap,
};

// ── Definition Locator ───────────────────────────────────────────────

/// Names the process definition an instance migrates to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefinitionLocator {
    /// A concrete deployed definition
    Id(String),
    /// A definition key; without a version the engine picks the latest
    Key {
        key: String,
        version: Option<u32>,
        tenant_id: Option<String>,
    },
}

impl DefinitionLocator {
    pub fn id(id: impl Into<String>) -> Self {
        DefinitionLocator::Id(id.into())
    }

    pub fn key(key: impl Into<String>) -> Self {
        DefinitionLocator::Key {
            key: key.into(),
            version: None,
            tenant_id: None,
        }
    }

    pub fn key_version(key: impl Into<String>, version: u32) -> Self {
        DefinitionLocator::Key {
            key: key.into(),
            version: Some(version),
            tenant_id: None,
        }
    }

    /// Attach a tenant; has no effect on an id-based locator
    pub fn with_tenant_id(self, tenant: impl Into<String>) -> Self {
        match self {
            DefinitionLocator::Key { key, version, .. } => DefinitionLocator::Key {
                key,
                version,
                tenant_id: Some(tenant.into()),
            },
            id @ DefinitionLocator::Id(_) => id,
        }
    }

    /// Assemble a locator from loose fields
    ///
    /// Id and key are mutually exclusive. Version and tenant id require a
    /// key. With no fields at all there is no locator.
    pub fn from_parts(
        id: Option<String>,
        key: Option<String>,
        version: Option<u32>,
        tenant_id: Option<String>,
    ) -> MigrationResult<Option<Self>> {
        match (id, key) {
            (Some(_), Some(_)) => Err(MigrationError::ConflictingDefinitionLocator),
            (None, Some(key)) => Ok(Some(DefinitionLocator::Key {
                key,
                version,
                tenant_id,
            })),
            (id, None) => {
                if version.is_some() {
                    return Err(MigrationError::LocatorFieldWithoutKey("version"));
                }
                if tenant_id.is_some() {
                    return Err(MigrationError::LocatorFieldWithoutKey("tenant id"));
                }
                Ok(id.map(DefinitionLocator::Id))
            }
        }
    }
}

// ── Migration Document ───────────────────────────────────────────────

/// The validated, immutable description of a migration
#[derive(Clone, Debug, PartialEq)]
pub struct MigrationDocument {
    target: Option<DefinitionLocator>,
    activity_mappings: Vec<ActivityMapping>,
    activity_local_variables: ActivityVariables,
    process_instance_variables: VariableMap,
}

impl MigrationDocument {
    /// Validate the parts and freeze them into a document
    pub fn new(
        target: Option<DefinitionLocator>,
        activity_mappings: Vec<ActivityMapping>,
        process_instance_variables: VariableMap,
    ) -> MigrationResult<Self> {
        validator::validate(target.as_ref(), &activity_mappings)?;
        let activity_local_variables = derive_activity_local_variables(&activity_mappings);

        tracing::debug!(
            mappings = activity_mappings.len(),
            target_activities = activity_local_variables.len(),
            instance_variables = process_instance_variables.len(),
            "Migration document frozen"
        );

        Ok(Self {
            target,
            activity_mappings,
            activity_local_variables,
            process_instance_variables,
        })
    }

    pub fn builder() -> MigrationDocumentBuilder {
        MigrationDocumentBuilder::new()
    }

    /// A builder pre-filled with copies of this document's contents
    pub fn to_builder(&self) -> MigrationDocumentBuilder {
        let builder = MigrationDocumentBuilder::new();
        let builder = match &self.target {
            Some(DefinitionLocator::Id(id)) => builder.migrate_to_process_definition_id(id),
            Some(DefinitionLocator::Key {
                key,
                version,
                tenant_id,
            }) => {
                let builder = match version {
                    Some(version) => {
                        builder.migrate_to_process_definition_key_version(key, *version)
                    }
                    None => builder.migrate_to_process_definition_key(key),
                };
                match tenant_id {
                    Some(tenant) => builder.with_tenant_id(tenant),
                    None => builder,
                }
            }
            None => builder,
        };
        builder
            .add_activity_mappings(self.activity_mappings.iter().cloned())
            .with_process_instance_variables(self.process_instance_variables.clone())
    }

    pub fn target(&self) -> Option<&DefinitionLocator> {
        self.target.as_ref()
    }

    pub fn migrate_to_process_definition_id(&self) -> Option<&str> {
        match &self.target {
            Some(DefinitionLocator::Id(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn migrate_to_process_definition_key(&self) -> Option<&str> {
        match &self.target {
            Some(DefinitionLocator::Key { key, .. }) => Some(key.as_str()),
            _ => None,
        }
    }

    pub fn migrate_to_process_definition_version(&self) -> Option<u32> {
        match &self.target {
            Some(DefinitionLocator::Key { version, .. }) => *version,
            _ => None,
        }
    }

    pub fn migrate_to_process_definition_tenant_id(&self) -> Option<&str> {
        match &self.target {
            Some(DefinitionLocator::Key { tenant_id, .. }) => tenant_id.as_deref(),
            _ => None,
        }
    }

    /// Mappings in insertion order
    pub fn activity_mappings(&self) -> &[ActivityMapping] {
        &self.activity_mappings
    }

    /// The mapping claiming `source`, if any
    pub fn mapping_for_source(&self, source: &str) -> Option<&ActivityMapping> {
        self.activity_mappings
            .iter()
            .find(|m| m.source_activity_ids().iter().any(|s| s.as_str() == source))
    }

    /// Effective variables for every target activity
    pub fn activity_local_variables(&self) -> &ActivityVariables {
        &self.activity_local_variables
    }

    pub fn local_variables_for_activity(&self, activity: &str) -> Option<&VariableMap> {
        self.activity_local_variables.get(activity)
    }

    pub fn process_instance_variables(&self) -> &VariableMap {
        &self.process_instance_variables
    }

    /// All target activities, each listed once, in order of first appearance
    pub fn target_activity_ids(&self) -> Vec<&ActivityId> {
        let mut seen = std::collections::HashSet::new();
        self.activity_mappings
            .iter()
            .flat_map(|m| m.target_activity_ids())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

/// Replay every mapping's variables against its targets
///
/// Within a mapping, per-activity variables override shared ones. Across
/// mappings, later mappings override earlier ones for the same activity.
fn derive_activity_local_variables(mappings: &[ActivityMapping]) -> ActivityVariables {
    let mut table = ActivityVariables::new();
    for mapping in mappings {
        for target in mapping.target_activity_ids() {
            let vars = table.entry(target.clone()).or_default();
            vars.extend(
                mapping
                    .shared_local_variables()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
            if let Some(scoped) = mapping.local_variables_for_activity(target.as_str()) {
                vars.extend(scoped.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
    }
    table
}
