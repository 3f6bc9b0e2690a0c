//! Activity mappings: which source activities move to which target activities
//!
//! The shape of a mapping is fixed at construction and picked from the
//! cardinality of its inputs. Everything else (variables, assignee, call
//! activity context) is set through consuming `with_*` methods where the
//! last write wins.

use crate::variables::merge_into;
use crate::{
    ActivityId, ActivityVariables, CallActivityContext, MappingSide, MigrationError,
    MigrationResult, VariableMap,
};
use serde_json::Value;
use std::collections::HashSet;

// ── Mapping shape ────────────────────────────────────────────────────

/// Discriminant of an activity mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingKind {
    OneToOne,
    OneToMany,
    ManyToOne,
}

/// Source and target activities of a mapping
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MappingActivities {
    /// One source activity becomes one target activity
    OneToOne { from: ActivityId, to: ActivityId },
    /// One source activity fans out into several target activities
    OneToMany { from: ActivityId, to: Vec<ActivityId> },
    /// Several source activities collapse into one target activity
    ManyToOne { from: Vec<ActivityId>, to: ActivityId },
}

impl MappingActivities {
    /// Pick the shape from the number of sources and targets
    ///
    /// Both sides must be non-empty and free of repeats. A single source and
    /// a single target always yield `OneToOne`, whichever constructor the
    /// caller used.
    pub fn from_sets(from: Vec<ActivityId>, to: Vec<ActivityId>) -> MigrationResult<Self> {
        ensure_unique(&from, MappingSide::Source)?;
        ensure_unique(&to, MappingSide::Target)?;

        let (mut from, mut to) = (from, to);
        match (from.len(), to.len()) {
            (1, 1) => Ok(MappingActivities::OneToOne {
                from: from.remove(0),
                to: to.remove(0),
            }),
            (1, _) => Ok(MappingActivities::OneToMany {
                from: from.remove(0),
                to,
            }),
            (_, 1) => Ok(MappingActivities::ManyToOne {
                from,
                to: to.remove(0),
            }),
            (sources, targets) => Err(MigrationError::ManyToManyMapping { sources, targets }),
        }
    }

    pub fn kind(&self) -> MappingKind {
        match self {
            MappingActivities::OneToOne { .. } => MappingKind::OneToOne,
            MappingActivities::OneToMany { .. } => MappingKind::OneToMany,
            MappingActivities::ManyToOne { .. } => MappingKind::ManyToOne,
        }
    }

    /// Source activities in declaration order
    pub fn sources(&self) -> &[ActivityId] {
        match self {
            MappingActivities::OneToOne { from, .. } | MappingActivities::OneToMany { from, .. } => {
                std::slice::from_ref(from)
            }
            MappingActivities::ManyToOne { from, .. } => from,
        }
    }

    /// Target activities in declaration order
    pub fn targets(&self) -> &[ActivityId] {
        match self {
            MappingActivities::OneToOne { to, .. } | MappingActivities::ManyToOne { to, .. } => {
                std::slice::from_ref(to)
            }
            MappingActivities::OneToMany { to, .. } => to,
        }
    }
}

fn ensure_unique(ids: &[ActivityId], side: MappingSide) -> MigrationResult<()> {
    if ids.is_empty() {
        return Err(MigrationError::EmptyActivitySet(side));
    }
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(MigrationError::DuplicateActivityInMapping {
                side,
                activity: id.clone(),
            });
        }
    }
    Ok(())
}

// ── Activity Mapping ─────────────────────────────────────────────────

/// A rule moving source activities of a running instance onto target
/// activities of the new process definition
///
/// Mappings are values: adding one to a builder moves (or clones) it, so a
/// caller's own copy never leaks into a frozen document.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityMapping {
    activities: MappingActivities,
    shared_local_variables: VariableMap,
    activity_local_variables: ActivityVariables,
    new_assignee_id: Option<String>,
    call_activity_context: Option<CallActivityContext>,
}

impl ActivityMapping {
    fn from_activities(activities: MappingActivities) -> Self {
        Self {
            activities,
            shared_local_variables: VariableMap::new(),
            activity_local_variables: ActivityVariables::new(),
            new_assignee_id: None,
            call_activity_context: None,
        }
    }

    /// Map any number of sources onto any number of targets, as long as one
    /// side holds a single activity
    pub fn new<F, T>(
        from: impl IntoIterator<Item = F>,
        to: impl IntoIterator<Item = T>,
    ) -> MigrationResult<Self>
    where
        F: Into<ActivityId>,
        T: Into<ActivityId>,
    {
        let from: Vec<ActivityId> = from.into_iter().map(Into::into).collect();
        let to: Vec<ActivityId> = to.into_iter().map(Into::into).collect();
        Ok(Self::from_activities(MappingActivities::from_sets(from, to)?))
    }

    /// Map one source activity onto one target activity
    pub fn one_to_one(from: impl Into<ActivityId>, to: impl Into<ActivityId>) -> Self {
        Self::from_activities(MappingActivities::OneToOne {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Map one source activity onto several target activities
    pub fn one_to_many<T: Into<ActivityId>>(
        from: impl Into<ActivityId>,
        to: impl IntoIterator<Item = T>,
    ) -> MigrationResult<Self> {
        let from: ActivityId = from.into();
        Self::new([from], to)
    }

    /// Map several source activities onto one target activity
    pub fn many_to_one<F: Into<ActivityId>>(
        from: impl IntoIterator<Item = F>,
        to: impl Into<ActivityId>,
    ) -> MigrationResult<Self> {
        let to: ActivityId = to.into();
        Self::new(from, [to])
    }

    // ── Variables ────────────────────────────────────────────────────

    /// Set a variable on every target activity of this mapping
    pub fn with_local_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.shared_local_variables.insert(name.into(), value.into());
        self
    }

    /// Set several variables on every target activity of this mapping
    pub fn with_local_variables<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        merge_into(&mut self.shared_local_variables, vars);
        self
    }

    /// Set a variable on a single target activity
    ///
    /// Fails when `activity` is not one of this mapping's targets.
    pub fn with_local_variable_for_activity(
        self,
        activity: impl Into<ActivityId>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> MigrationResult<Self> {
        let name: String = name.into();
        let value: Value = value.into();
        self.with_local_variables_for_activity(activity, [(name, value)])
    }

    /// Set several variables on a single target activity
    ///
    /// Fails when `activity` is not one of this mapping's targets. Values set
    /// here override shared variables of the same name for that activity.
    pub fn with_local_variables_for_activity<K, V>(
        mut self,
        activity: impl Into<ActivityId>,
        vars: impl IntoIterator<Item = (K, V)>,
    ) -> MigrationResult<Self>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let activity = activity.into();
        if !self.activities.targets().contains(&activity) {
            return Err(MigrationError::ActivityNotATarget {
                activity,
                targets: self.activities.targets().to_vec(),
            });
        }
        merge_into(self.activity_local_variables.entry(activity).or_default(), vars);
        Ok(self)
    }

    // ── Assignee and call activity ───────────────────────────────────

    pub fn with_new_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.new_assignee_id = Some(assignee_id.into());
        self
    }

    /// Replace any previous call-activity context
    pub fn with_call_activity_context(mut self, context: CallActivityContext) -> Self {
        self.call_activity_context = Some(context);
        self
    }

    pub fn in_sub_process_of_call_activity(self, call_activity_id: impl Into<ActivityId>) -> Self {
        self.with_call_activity_context(CallActivityContext::sub_process_of(call_activity_id))
    }

    pub fn in_sub_process_of_call_activity_instance(
        self,
        call_activity_id: impl Into<ActivityId>,
        index: u32,
    ) -> Self {
        self.with_call_activity_context(CallActivityContext::sub_process_of_instance(
            call_activity_id,
            index,
        ))
    }

    pub fn in_parent_process_of_call_activity(
        self,
        call_activity_id: impl Into<ActivityId>,
    ) -> Self {
        self.with_call_activity_context(CallActivityContext::parent_process_of(call_activity_id))
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn activities(&self) -> &MappingActivities {
        &self.activities
    }

    pub fn kind(&self) -> MappingKind {
        self.activities.kind()
    }

    pub fn source_activity_ids(&self) -> &[ActivityId] {
        self.activities.sources()
    }

    pub fn target_activity_ids(&self) -> &[ActivityId] {
        self.activities.targets()
    }

    /// Variables applied to every target
    pub fn shared_local_variables(&self) -> &VariableMap {
        &self.shared_local_variables
    }

    /// Variables scoped to individual targets
    pub fn activity_local_variables(&self) -> &ActivityVariables {
        &self.activity_local_variables
    }

    pub fn local_variables_for_activity(&self, activity: &str) -> Option<&VariableMap> {
        self.activity_local_variables.get(activity)
    }

    /// Variables a target ends up with from this mapping alone
    ///
    /// Returns `None` when `activity` is not a target of this mapping.
    pub fn effective_local_variables(&self, activity: &str) -> Option<VariableMap> {
        if !self.target_activity_ids().iter().any(|t| t.as_str() == activity) {
            return None;
        }
        let mut vars = self.shared_local_variables.clone();
        if let Some(scoped) = self.activity_local_variables.get(activity) {
            vars.extend(scoped.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Some(vars)
    }

    pub fn new_assignee_id(&self) -> Option<&str> {
        self.new_assignee_id.as_deref()
    }

    pub fn call_activity_context(&self) -> Option<&CallActivityContext> {
        self.call_activity_context.as_ref()
    }
}
