//! Encoding built documents and decoding them back

use process_migration_json::{from_json_str, to_json_string, to_json_value, MigrationDocumentJsonExt};
use process_migration_types::{ActivityMapping, MigrationDocument, MigrationDocumentBuilder};
use serde_json::json;

fn vars(pairs: &[(&str, serde_json::Value)]) -> Vec<(String, serde_json::Value)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_round_trip_for_definition_id() {
    let one_to_one = ActivityMapping::one_to_one("originalActivity1", "newActivity1")
        .with_local_variable("varForNewActivity1", "varValue")
        .with_new_assignee("kermit");
    let many_to_one =
        ActivityMapping::many_to_one(["originalActivity3", "originalActivity4"], "newActivity3")
            .unwrap()
            .with_local_variable("varForNewActivity3", 9876);
    let one_to_many =
        ActivityMapping::one_to_many("originalActivity2", ["newActivity2.1", "newActivity2.2"])
            .unwrap()
            .with_local_variables_for_activity(
                "newActivity2.1",
                vars(&[
                    ("var1ForNewActivity2.1", json!("varValue")),
                    ("var2ForNewActivity2.1", json!(1234.567)),
                ]),
            )
            .unwrap()
            .with_local_variables_for_activity(
                "newActivity2.2",
                vars(&[
                    ("var1ForNewActivity2.2", json!("varValue")),
                    ("var2ForNewActivity2.2", json!(1234.567)),
                ]),
            )
            .unwrap();

    let document = MigrationDocumentBuilder::new()
        .migrate_to_process_definition_id("someProcessId")
        .add_activity_mapping(one_to_one.clone())
        .add_activity_mapping(one_to_many.clone())
        .add_activity_mapping(many_to_one.clone())
        .with_process_instance_variable("processVar1", "varValue1")
        .with_process_instance_variable("processVar2", 456.789)
        .build()
        .unwrap();

    let decoded = from_json_str(&document.as_json_string().unwrap()).unwrap();

    assert_eq!(decoded.migrate_to_process_definition_id(), Some("someProcessId"));
    assert_eq!(decoded.migrate_to_process_definition_key(), None);
    assert_eq!(decoded.migrate_to_process_definition_version(), None);
    assert_eq!(decoded.migrate_to_process_definition_tenant_id(), None);
    assert_eq!(decoded.activity_mappings(), &[one_to_one, one_to_many, many_to_one]);
    assert_eq!(
        decoded.local_variables_for_activity("newActivity2.2").unwrap()["var2ForNewActivity2.2"],
        json!(1234.567)
    );
    assert_eq!(decoded, document);
}

#[test]
fn test_round_trip_for_definition_key_version() {
    let document = MigrationDocumentBuilder::new()
        .migrate_to_process_definition_key_version("MyProcessKey", 5)
        .with_tenant_id("admin")
        .add_activity_mapping(ActivityMapping::one_to_one("originalActivity1", "newActivity1"))
        .add_activity_mapping(ActivityMapping::one_to_one("originalActivity2", "newActivity2"))
        .build()
        .unwrap();

    let decoded = from_json_str(&to_json_string(&document).unwrap()).unwrap();

    assert_eq!(decoded.migrate_to_process_definition_id(), None);
    assert_eq!(decoded.migrate_to_process_definition_key(), Some("MyProcessKey"));
    assert_eq!(decoded.migrate_to_process_definition_version(), Some(5));
    assert_eq!(decoded.migrate_to_process_definition_tenant_id(), Some("admin"));
    assert_eq!(
        decoded.activity_mappings(),
        &[
            ActivityMapping::one_to_one("originalActivity1", "newActivity1"),
            ActivityMapping::one_to_one("originalActivity2", "newActivity2"),
        ]
    );
}

#[test]
fn test_round_trip_with_variables() {
    let document = MigrationDocumentBuilder::new()
        .migrate_to_process_definition_key_version("MyProcessKey", 5)
        .with_tenant_id("admin")
        .add_activity_mapping(
            ActivityMapping::one_to_one("originalActivity1", "newActivity1")
                .with_local_variables([("variableString", "variableValue")]),
        )
        .add_activity_mapping(
            ActivityMapping::one_to_one("originalActivity2", "newActivity2")
                .with_local_variable("variableDouble", 12345.6789),
        )
        .with_process_instance_variable("instanceVar1", "stringValue")
        .with_process_instance_variable("instanceVar2", 12345.6789)
        .build()
        .unwrap();

    let decoded = MigrationDocument::from_json(&document.as_json_string().unwrap()).unwrap();

    assert_eq!(decoded.activity_local_variables().len(), 2);
    assert_eq!(
        decoded.local_variables_for_activity("newActivity1").unwrap()["variableString"],
        json!("variableValue")
    );
    assert_eq!(
        decoded.local_variables_for_activity("newActivity2").unwrap()["variableDouble"],
        json!(12345.6789)
    );
    assert_eq!(decoded.process_instance_variables(), document.process_instance_variables());
}

#[test]
fn test_shared_variables_reach_every_target() {
    let document = MigrationDocumentBuilder::new()
        .add_activity_mapping(
            ActivityMapping::one_to_many("originalActivity2", ["newActivity2.1", "newActivity2.2"])
                .unwrap()
                .with_local_variable("var1ForNewActivity2.x", "varValue")
                .with_local_variable("var2ForNewActivity2.x", 1234.567),
        )
        .build()
        .unwrap();

    let decoded = from_json_str(&to_json_string(&document).unwrap()).unwrap();
    let first = decoded.local_variables_for_activity("newActivity2.1").unwrap();
    let second = decoded.local_variables_for_activity("newActivity2.2").unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn test_last_call_activity_context_survives() {
    let document = MigrationDocumentBuilder::new()
        .add_activity_mapping(
            ActivityMapping::one_to_one("a", "b")
                .in_sub_process_of_call_activity_instance("first", 1)
                .in_parent_process_of_call_activity("second"),
        )
        .add_activity_mapping(
            ActivityMapping::one_to_one("c", "d")
                .in_parent_process_of_call_activity("third")
                .in_sub_process_of_call_activity_instance("fourth", 3),
        )
        .build()
        .unwrap();

    let value = to_json_value(&document).unwrap();
    assert_eq!(value["activityMappings"][0]["callActivityId"], json!("second"));
    assert_eq!(value["activityMappings"][0]["inParentProcessOfCallActivity"], json!(true));
    assert_eq!(value["activityMappings"][1]["callActivityId"], json!("fourth"));
    assert_eq!(value["activityMappings"][1]["callActivityIndex"], json!(3));

    let decoded = from_json_str(&value.to_string()).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn test_shared_target_scenario() {
    let document = MigrationDocumentBuilder::new()
        .migrate_to_process_definition_id("someProcessId")
        .add_activity_mapping(
            ActivityMapping::one_to_one("originalActivity1", "newActivity1")
                .with_local_variable("first", 1),
        )
        .add_activity_mapping(
            ActivityMapping::one_to_one("originalActivity2", "newActivity1")
                .with_local_variable("second", 2.5),
        )
        .build()
        .unwrap();

    let decoded = from_json_str(&to_json_string(&document).unwrap()).unwrap();
    let merged = decoded.local_variables_for_activity("newActivity1").unwrap();
    assert_eq!(merged["first"], json!(1));
    assert_eq!(merged["second"], json!(2.5));
}

#[test]
fn test_large_integers_stay_integers() {
    let document = MigrationDocumentBuilder::new()
        .with_process_instance_variable("max", u64::MAX)
        .with_process_instance_variable("min", i64::MIN)
        .with_process_instance_variable("tiny", 5e-324)
        .with_process_instance_variable("nested", json!({"list": [1, 2.0, null, "x"]}))
        .build()
        .unwrap();

    let decoded = from_json_str(&to_json_string(&document).unwrap()).unwrap();
    let vars = decoded.process_instance_variables();
    assert_eq!(vars["max"].as_u64(), Some(u64::MAX));
    assert_eq!(vars["min"].as_i64(), Some(i64::MIN));
    assert!(vars["tiny"].is_f64());
    assert_eq!(vars["nested"]["list"][1], json!(2.0));
    assert_ne!(vars["nested"]["list"][1], json!(2));
    assert_eq!(decoded, document);
}

#[test]
fn test_integers_beyond_u64_become_floats() {
    let document = from_json_str(
        r#"{"processInstanceVariables": {"huge": 18446744073709551616}}"#,
    )
    .unwrap();
    assert!(document.process_instance_variables()["huge"].is_f64());
}

#[test]
fn test_empty_document_round_trip() {
    let document = MigrationDocumentBuilder::new().build().unwrap();
    let json = to_json_string(&document).unwrap();
    assert_eq!(json, r#"{"activityMappings":[]}"#);
    assert_eq!(from_json_str(&json).unwrap(), document);
}
