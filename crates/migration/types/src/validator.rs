//! Validator: checks the parts of a migration document before it is frozen
//!
//! Runs for documents assembled by the builder and for documents decoded
//! from JSON, so both paths reject the same input with the same message.

use crate::{ActivityId, ActivityMapping, DefinitionLocator, MigrationError, MigrationResult};
use std::collections::BTreeMap;

/// Validate everything a document is made of
pub fn validate(
    locator: Option<&DefinitionLocator>,
    mappings: &[ActivityMapping],
) -> MigrationResult<()> {
    if let Some(locator) = locator {
        validate_locator(locator)?;
    }
    validate_unique_sources(mappings)?;
    Ok(())
}

/// Every source activity may be claimed by at most one mapping
pub fn validate_unique_sources(mappings: &[ActivityMapping]) -> MigrationResult<()> {
    let duplicates = duplicate_source_activities(mappings);
    if duplicates.is_empty() {
        return Ok(());
    }
    Err(MigrationError::DuplicateSourceActivities(duplicates))
}

/// Source activities listed by more than one mapping, sorted ascending
pub fn duplicate_source_activities(mappings: &[ActivityMapping]) -> Vec<ActivityId> {
    let mut counts: BTreeMap<&ActivityId, usize> = BTreeMap::new();
    for mapping in mappings {
        for source in mapping.source_activity_ids() {
            *counts.entry(source).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.clone())
        .collect()
}

/// A locator must name its definition with a non-empty id or key
pub fn validate_locator(locator: &DefinitionLocator) -> MigrationResult<()> {
    match locator {
        DefinitionLocator::Id(id) if id.trim().is_empty() => Err(MigrationError::ValidationError(
            "Process definition id must not be empty".into(),
        )),
        DefinitionLocator::Key { key, .. } if key.trim().is_empty() => {
            Err(MigrationError::ValidationError(
                "Process definition key must not be empty".into(),
            ))
        }
        DefinitionLocator::Key {
            tenant_id: Some(tenant),
            ..
        } if tenant.trim().is_empty() => Err(MigrationError::ValidationError(
            "Process definition tenant id must not be empty".into(),
        )),
        _ => Ok(()),
    }
}
