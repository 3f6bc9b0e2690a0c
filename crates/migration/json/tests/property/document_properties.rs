//! Property tests: codec fidelity and duplicate detection over generated documents

use process_migration_json::{from_json_str, to_json_string, to_json_string_pretty};
use process_migration_types::{
    ActivityMapping, CallActivityContext, MigrationDocumentBuilder, MigrationError,
};
use proptest::prelude::*;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Generate a JSON leaf value of every primitive kind.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

fn arb_variables() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec(("[a-z]{1,6}", arb_value()), 0..4)
}

fn arb_context() -> impl Strategy<Value = Option<CallActivityContext>> {
    prop_oneof![
        Just(None),
        "[a-z]{1,6}".prop_map(|id| Some(CallActivityContext::sub_process_of(id))),
        ("[a-z]{1,6}", 0u32..8)
            .prop_map(|(id, i)| Some(CallActivityContext::sub_process_of_instance(id, i))),
        "[a-z]{1,6}".prop_map(|id| Some(CallActivityContext::parent_process_of(id))),
    ]
}

/// Generate a mapping whose sources are tagged with `slot` so that mappings
/// from different slots never share a source.
fn arb_mapping(slot: usize) -> impl Strategy<Value = ActivityMapping> {
    (
        1usize..4,
        1usize..4,
        any::<bool>(),
        arb_variables(),
        arb_variables(),
        prop::option::of("[a-z]{1,8}"),
        arb_context(),
    )
        .prop_map(
            move |(sources, targets, fan_out, shared, scoped, assignee, context)| {
                let (sources, targets) = if fan_out { (1, targets) } else { (sources, 1) };
                let from: Vec<String> = (0..sources).map(|i| format!("src{}_{}", slot, i)).collect();
                let to: Vec<String> = (0..targets).map(|i| format!("dst{}", i)).collect();

                let mut mapping = ActivityMapping::new(from, to.clone())
                    .expect("one side holds a single activity")
                    .with_local_variables(shared);
                if !scoped.is_empty() {
                    mapping = mapping
                        .with_local_variables_for_activity(to[0].clone(), scoped)
                        .expect("first target belongs to the mapping");
                }
                if let Some(assignee) = assignee {
                    mapping = mapping.with_new_assignee(assignee);
                }
                if let Some(context) = context {
                    mapping = mapping.with_call_activity_context(context);
                }
                mapping
            },
        )
}

fn arb_mappings() -> impl Strategy<Value = Vec<ActivityMapping>> {
    (0usize..5).prop_flat_map(|count| (0..count).map(arb_mapping).collect::<Vec<_>>())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Decoding an encoded document yields an equal document.
    #[test]
    fn encoded_documents_decode_to_equal_documents(
        mappings in arb_mappings(),
        instance_vars in arb_variables(),
        by_key in any::<bool>(),
        pretty in any::<bool>(),
    ) {
        let builder = if by_key {
            MigrationDocumentBuilder::new()
                .migrate_to_process_definition_key_version("MyProcessKey", 5)
                .with_tenant_id("admin")
        } else {
            MigrationDocumentBuilder::new().migrate_to_process_definition_id("someProcessId")
        };
        let document = builder
            .add_activity_mappings(mappings)
            .with_process_instance_variables(instance_vars)
            .build()
            .unwrap();

        let json = if pretty {
            to_json_string_pretty(&document).unwrap()
        } else {
            to_json_string(&document).unwrap()
        };
        let decoded = from_json_str(&json).unwrap();
        prop_assert_eq!(decoded, document);
    }

    /// Repeating any source activity in a second mapping is always rejected,
    /// by the builder and by the decoder alike.
    #[test]
    fn repeated_sources_are_always_rejected(
        mappings in arb_mappings().prop_filter("need a mapping", |m| !m.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let valid = MigrationDocumentBuilder::new()
            .add_activity_mappings(mappings.clone())
            .build()
            .unwrap();
        let json = to_json_string(&valid).unwrap();

        let victim = &mappings[pick.index(mappings.len())];
        let repeated = victim.source_activity_ids()[0].clone();
        let built = MigrationDocumentBuilder::new()
            .add_activity_mappings(mappings.clone())
            .add_activity_mapping(ActivityMapping::one_to_one(repeated.clone(), "elsewhere"))
            .build()
            .unwrap_err();
        prop_assert_eq!(
            &built,
            &MigrationError::DuplicateSourceActivities(vec![repeated.clone()])
        );

        let mut value: Value = serde_json::from_str(&json).unwrap();
        value["activityMappings"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({"fromActivityId": repeated.as_str(), "toActivityId": "elsewhere"}));
        let decoded = from_json_str(&value.to_string()).unwrap_err();
        prop_assert_eq!(decoded.to_string(), built.to_string());
    }
}
