use super::*;

fn relation_row(name: &str) -> ActionRow {
    serde_json::from_value(serde_json::json!({
        "target": { "database": "db", "schema": "analytics", "name": name },
        "relation": {
            "select_query": "SELECT 1",
            "tags": ["daily"],
            "dependency_targets": [{ "name": "upstream" }]
        }
    }))
    .unwrap()
}

#[test]
fn test_relation_row_converts() {
    let action = action_from_row(relation_row("orders")).unwrap();
    match action {
        CompilationAction::Relation(r) => {
            assert_eq!(r.target.name, "orders");
            assert!(r.tags.contains("daily"));
            assert_eq!(r.dependency_targets, vec![Target::bare("upstream")]);
        }
        other => panic!("expected relation, got {:?}", other),
    }
}

#[test]
fn test_assertion_row_converts() {
    let row: ActionRow = serde_json::from_value(serde_json::json!({
        "target": { "name": "check_orders" },
        "assertion": { "parent_target": { "name": "orders" } }
    }))
    .unwrap();

    let action = action_from_row(row).unwrap();
    match action {
        CompilationAction::Assertion(a) => {
            assert_eq!(a.target.name, "check_orders");
            assert_eq!(a.parent, Target::bare("orders"));
        }
        other => panic!("expected assertion, got {:?}", other),
    }
}

#[test]
fn test_empty_row_is_dropped() {
    let row: ActionRow = serde_json::from_value(serde_json::json!({
        "target": { "name": "mystery" }
    }))
    .unwrap();
    assert!(action_from_row(row).is_none());
}

#[test]
fn test_double_bodied_row_is_dropped() {
    let row: ActionRow = serde_json::from_value(serde_json::json!({
        "target": { "name": "both" },
        "relation": { "select_query": "SELECT 1" },
        "assertion": { "parent_target": { "name": "orders" } }
    }))
    .unwrap();
    assert!(action_from_row(row).is_none());
}
