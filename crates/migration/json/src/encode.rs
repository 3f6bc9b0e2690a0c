//! Encoder: domain document to wire shape

use crate::wire::{OneOrMany, WireDocument, WireMapping};
use process_migration_types::{
    ActivityMapping, CallActivityScope, DefinitionLocator, MappingActivities, MigrationDocument,
};

pub(crate) fn encode_document(document: &MigrationDocument) -> WireDocument {
    let mut wire = WireDocument {
        activity_mappings: document
            .activity_mappings()
            .iter()
            .map(encode_mapping)
            .collect(),
        process_instance_variables: document.process_instance_variables().clone(),
        ..WireDocument::default()
    };

    match document.target() {
        Some(DefinitionLocator::Id(id)) => {
            wire.migrate_to_process_definition_id = Some(id.clone());
        }
        Some(DefinitionLocator::Key {
            key,
            version,
            tenant_id,
        }) => {
            wire.migrate_to_process_definition_key = Some(key.clone());
            wire.migrate_to_process_definition_version = *version;
            wire.migrate_to_process_definition_tenant_id = tenant_id.clone();
        }
        None => {}
    }

    wire
}

fn encode_mapping(mapping: &ActivityMapping) -> WireMapping {
    let mut wire = WireMapping {
        with_local_variables: mapping.activity_local_variables().clone(),
        with_local_variable: mapping.shared_local_variables().clone(),
        new_assignee_id: mapping.new_assignee_id().map(str::to_string),
        ..WireMapping::default()
    };

    match mapping.activities() {
        MappingActivities::OneToOne { from, to } => {
            wire.from_activity_id = Some(OneOrMany::One(from.clone()));
            wire.to_activity_id = Some(OneOrMany::One(to.clone()));
        }
        MappingActivities::OneToMany { from, to } => {
            wire.from_activity_id = Some(OneOrMany::One(from.clone()));
            wire.to_activity_ids = Some(OneOrMany::Many(to.clone()));
        }
        MappingActivities::ManyToOne { from, to } => {
            wire.from_activity_ids = Some(OneOrMany::Many(from.clone()));
            wire.to_activity_id = Some(OneOrMany::One(to.clone()));
        }
    }

    if let Some(context) = mapping.call_activity_context() {
        wire.call_activity_id = Some(context.call_activity_id().clone());
        wire.call_activity_index = context.instance_index();
        if context.scope() == CallActivityScope::ParentProcessOf {
            wire.in_parent_process_of_call_activity = Some(true);
        }
    }

    wire
}
