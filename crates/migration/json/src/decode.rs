//! Decoder: wire shape to validated domain document
//!
//! The per-activity variable table is rebuilt from each mapping's variables;
//! nothing derived is read from the input. The document validator runs last,
//! so decoded documents obey the same rules as built ones.

use crate::errors::{CodecError, CodecResult};
use crate::wire::{OneOrMany, WireDocument, WireMapping};
use process_migration_types::{
    ActivityId, ActivityMapping, CallActivityContext, CallActivityScope, DefinitionLocator,
    MigrationDocument,
};

pub(crate) fn decode_document(wire: WireDocument) -> CodecResult<MigrationDocument> {
    let target = DefinitionLocator::from_parts(
        wire.migrate_to_process_definition_id,
        wire.migrate_to_process_definition_key,
        wire.migrate_to_process_definition_version,
        wire.migrate_to_process_definition_tenant_id,
    )?;

    let mappings = wire
        .activity_mappings
        .into_iter()
        .enumerate()
        .map(|(index, mapping)| decode_mapping(index, mapping))
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(MigrationDocument::new(
        target,
        mappings,
        wire.process_instance_variables,
    )?)
}

fn decode_mapping(index: usize, wire: WireMapping) -> CodecResult<ActivityMapping> {
    let from = pick_side(
        index,
        wire.from_activity_id,
        wire.from_activity_ids,
        ("fromActivityId", "fromActivityIds"),
    )?;
    let to = pick_side(
        index,
        wire.to_activity_id,
        wire.to_activity_ids,
        ("toActivityId", "toActivityIds"),
    )?;

    let invalid = |source| CodecError::InvalidMapping { index, source };

    let mut mapping = ActivityMapping::new(from, to)
        .map_err(invalid)?
        .with_local_variables(wire.with_local_variable);

    for (activity, vars) in wire.with_local_variables {
        mapping = mapping
            .with_local_variables_for_activity(activity, vars)
            .map_err(invalid)?;
    }

    if let Some(assignee) = wire.new_assignee_id {
        mapping = mapping.with_new_assignee(assignee);
    }

    if let Some(context) = decode_call_activity(
        index,
        wire.call_activity_id,
        wire.call_activity_index,
        wire.in_parent_process_of_call_activity,
    )? {
        mapping = mapping.with_call_activity_context(context);
    }

    Ok(mapping)
}

fn pick_side(
    index: usize,
    single: Option<OneOrMany>,
    plural: Option<OneOrMany>,
    (single_name, plural_name): (&'static str, &'static str),
) -> CodecResult<Vec<ActivityId>> {
    match (single, plural) {
        (Some(ids), None) | (None, Some(ids)) => Ok(ids.into_vec()),
        (Some(_), Some(_)) => Err(CodecError::UnrecognizedMapping {
            index,
            reason: format!("both '{}' and '{}' are present", single_name, plural_name),
        }),
        (None, None) => Err(CodecError::MissingField {
            index,
            field: plural_name,
        }),
    }
}

fn decode_call_activity(
    index: usize,
    call_activity_id: Option<ActivityId>,
    call_activity_index: Option<u32>,
    in_parent_process: Option<bool>,
) -> CodecResult<Option<CallActivityContext>> {
    let in_parent_process = in_parent_process.unwrap_or(false);
    match call_activity_id {
        Some(id) => {
            let scope = if in_parent_process {
                CallActivityScope::ParentProcessOf
            } else {
                CallActivityScope::SubProcessOf
            };
            Ok(Some(CallActivityContext::new(scope, id, call_activity_index)))
        }
        None if call_activity_index.is_some() || in_parent_process => {
            Err(CodecError::UnrecognizedMapping {
                index,
                reason: "call activity fields require 'callActivityId'".into(),
            })
        }
        None => Ok(None),
    }
}
