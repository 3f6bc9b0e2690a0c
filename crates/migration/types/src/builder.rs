//! Migration Document Builder
//!
//! Accumulates the target definition, activity mappings and process
//! instance variables, then validates and freezes a `MigrationDocument`.

use crate::variables::merge_into;
use crate::{ActivityMapping, DefinitionLocator, MigrationDocument, MigrationResult, VariableMap};
use serde_json::Value;

/// Builder for MigrationDocument
///
/// Setters consume and return the builder. `build` borrows it, so a builder
/// whose contents fail validation can be corrected and built again.
#[derive(Clone, Debug, Default)]
pub struct MigrationDocumentBuilder {
    definition_id: Option<String>,
    definition_key: Option<String>,
    definition_version: Option<u32>,
    tenant_id: Option<String>,
    activity_mappings: Vec<ActivityMapping>,
    process_instance_variables: VariableMap,
}

impl MigrationDocumentBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a concrete process definition; replaces any key, version and tenant
    pub fn migrate_to_process_definition_id(mut self, id: impl Into<String>) -> Self {
        self.definition_id = Some(id.into());
        self.definition_key = None;
        self.definition_version = None;
        self.tenant_id = None;
        self
    }

    /// Target the latest version of a process definition key; replaces any id
    pub fn migrate_to_process_definition_key(mut self, key: impl Into<String>) -> Self {
        self.definition_id = None;
        self.definition_key = Some(key.into());
        self.definition_version = None;
        self
    }

    /// Target one version of a process definition key; replaces any id
    pub fn migrate_to_process_definition_key_version(
        mut self,
        key: impl Into<String>,
        version: u32,
    ) -> Self {
        self.definition_id = None;
        self.definition_key = Some(key.into());
        self.definition_version = Some(version);
        self
    }

    /// Tenant of the keyed definition
    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Append a mapping; insertion order is kept
    pub fn add_activity_mapping(mut self, mapping: ActivityMapping) -> Self {
        self.activity_mappings.push(mapping);
        self
    }

    /// Append several mappings
    pub fn add_activity_mappings(
        mut self,
        mappings: impl IntoIterator<Item = ActivityMapping>,
    ) -> Self {
        self.activity_mappings.extend(mappings);
        self
    }

    pub fn with_process_instance_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.process_instance_variables
            .insert(name.into(), value.into());
        self
    }

    pub fn with_process_instance_variables<K, V>(
        mut self,
        vars: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        merge_into(&mut self.process_instance_variables, vars);
        self
    }

    /// Mappings added so far
    pub fn activity_mappings(&self) -> &[ActivityMapping] {
        &self.activity_mappings
    }

    /// Validate and freeze the document
    ///
    /// The document receives copies of the builder's data. On failure nothing
    /// is produced and the builder is left as it was.
    pub fn build(&self) -> MigrationResult<MigrationDocument> {
        let result = DefinitionLocator::from_parts(
            self.definition_id.clone(),
            self.definition_key.clone(),
            self.definition_version,
            self.tenant_id.clone(),
        )
        .and_then(|target| {
            MigrationDocument::new(
                target,
                self.activity_mappings.clone(),
                self.process_instance_variables.clone(),
            )
        });

        if let Err(err) = &result {
            tracing::warn!(error = %err, "Rejected migration document");
        }
        result
    }
}
