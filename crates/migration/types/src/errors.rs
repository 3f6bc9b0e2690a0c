//! Error types for migration documents

use crate::ActivityId;

/// Errors raised while constructing or validating a migration document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error("From activity '{}' is mapped more than once", render_activity_list(.0))]
    DuplicateSourceActivities(Vec<ActivityId>),

    #[error("Activity mapping requires at least one {0} activity")]
    EmptyActivitySet(MappingSide),

    #[error("Activity '{activity}' is listed more than once as a {side} activity of the same mapping")]
    DuplicateActivityInMapping {
        side: MappingSide,
        activity: ActivityId,
    },

    #[error("Many-to-many activity mappings are not supported ({sources} sources, {targets} targets)")]
    ManyToManyMapping { sources: usize, targets: usize },

    #[error("Activity '{activity}' is not a target of this mapping (targets: {})", render_activity_list(.targets))]
    ActivityNotATarget {
        activity: ActivityId,
        targets: Vec<ActivityId>,
    },

    #[error("Process definition id and key are mutually exclusive")]
    ConflictingDefinitionLocator,

    #[error("Process definition {0} is only meaningful together with a process definition key")]
    LocatorFieldWithoutKey(&'static str),

    #[error("Migration document validation error: {0}")]
    ValidationError(String),
}

/// Which side of a mapping an activity belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingSide {
    Source,
    Target,
}

impl std::fmt::Display for MappingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingSide::Source => write!(f, "source"),
            MappingSide::Target => write!(f, "target"),
        }
    }
}

/// Renders ids as a bracketed, comma separated list: `[a, b]`
pub fn render_activity_list(ids: &[ActivityId]) -> String {
    let joined = ids
        .iter()
        .map(ActivityId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Result type alias for migration document operations
pub type MigrationResult<T> = Result<T, MigrationError>;
