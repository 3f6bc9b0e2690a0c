//! Variable maps attached to activities and process instances
//!
//! Values are plain JSON values. `serde_json::Value` keeps the integer vs
//! floating-point distinction, so `9876` and `9876.0` are different values.

use crate::ActivityId;
use serde_json::Value;
use std::collections::BTreeMap;

/// Variable name to JSON value
pub type VariableMap = BTreeMap<String, Value>;

/// Target activity id to the variables it receives
pub type ActivityVariables = BTreeMap<ActivityId, VariableMap>;

/// Insert every pair from `vars`, overwriting same-named entries
pub(crate) fn merge_into<K, V>(target: &mut VariableMap, vars: impl IntoIterator<Item = (K, V)>)
where
    K: Into<String>,
    V: Into<Value>,
{
    for (name, value) in vars {
        target.insert(name.into(), value.into());
    }
}
