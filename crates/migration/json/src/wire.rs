//! Wire shapes of the JSON document
//!
//! These mirror the JSON layout field for field. They carry no invariants;
//! the decoder turns them into validated domain types.

use process_migration_types::{ActivityId, ActivityVariables, VariableMap};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_process_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_process_definition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_process_definition_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_process_definition_tenant_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity_mappings: Vec<WireMapping>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "VariableMap::is_empty"
    )]
    pub process_instance_variables: VariableMap,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_activity_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_activity_ids: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_activity_id: Option<OneOrMany>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_activity_ids: Option<OneOrMany>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "ActivityVariables::is_empty"
    )]
    pub with_local_variables: ActivityVariables,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "VariableMap::is_empty"
    )]
    pub with_local_variable: VariableMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_activity_id: Option<ActivityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_activity_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_parent_process_of_call_activity: Option<bool>,
}

/// A single activity id or a list of them; both spellings mean the same
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(ActivityId),
    Many(Vec<ActivityId>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<ActivityId> {
        match self {
            OneOrMany::One(id) => vec![id],
            OneOrMany::Many(ids) => ids,
        }
    }
}

/// An explicit `null` reads as an absent collection
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
