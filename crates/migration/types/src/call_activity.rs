//! Call-activity context for mappings inside nested processes
//!
//! A call activity spawns a sub-process instance. A mapping may apply either
//! inside that sub-process or inside the parent process containing the call
//! activity. The two framings are mutually exclusive.

use crate::ActivityId;

/// Which process a call-activity scoped mapping applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallActivityScope {
    /// Inside the sub-process instantiated by the call activity
    SubProcessOf,
    /// Inside the process that contains the call activity
    ParentProcessOf,
}

/// Call activity a mapping is scoped to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallActivityContext {
    scope: CallActivityScope,
    call_activity_id: ActivityId,
    instance_index: Option<u32>,
}

impl CallActivityContext {
    pub fn new(
        scope: CallActivityScope,
        call_activity_id: impl Into<ActivityId>,
        instance_index: Option<u32>,
    ) -> Self {
        Self {
            scope,
            call_activity_id: call_activity_id.into(),
            instance_index,
        }
    }

    /// Applies within the sub-process of any occurrence of the call activity
    pub fn sub_process_of(call_activity_id: impl Into<ActivityId>) -> Self {
        Self::new(CallActivityScope::SubProcessOf, call_activity_id, None)
    }

    /// Applies within the sub-process of one multi-instance occurrence
    pub fn sub_process_of_instance(call_activity_id: impl Into<ActivityId>, index: u32) -> Self {
        Self::new(CallActivityScope::SubProcessOf, call_activity_id, Some(index))
    }

    /// Applies within the process containing the call activity
    pub fn parent_process_of(call_activity_id: impl Into<ActivityId>) -> Self {
        Self::new(CallActivityScope::ParentProcessOf, call_activity_id, None)
    }

    pub fn with_instance_index(mut self, index: u32) -> Self {
        self.instance_index = Some(index);
        self
    }

    pub fn scope(&self) -> CallActivityScope {
        self.scope
    }

    pub fn call_activity_id(&self) -> &ActivityId {
        &self.call_activity_id
    }

    pub fn instance_index(&self) -> Option<u32> {
        self.instance_index
    }

    pub fn is_sub_process(&self) -> bool {
        self.scope == CallActivityScope::SubProcessOf
    }

    pub fn is_parent_process(&self) -> bool {
        self.scope == CallActivityScope::ParentProcessOf
    }
}
