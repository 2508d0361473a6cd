use super::*;
use wl_core::Target;

#[test]
fn test_empty_selection_carries_no_selection_object() {
    let request = plan("memory/compilationResults/1", InvocationSelection::default());
    assert_eq!(request.compilation, "memory/compilationResults/1");
    assert!(request.selection.is_none());
}

#[test]
fn test_flags_alone_do_not_create_a_selection() {
    let selection = InvocationSelection {
        transitive_dependents_included: true,
        fully_refresh_incremental_tables: true,
        ..Default::default()
    };
    let request = plan("memory/compilationResults/1", selection);
    assert!(request.selection.is_none());
}

#[test]
fn test_single_bare_target_with_default_flags() {
    let selection = InvocationSelection {
        included_targets: vec![Target::bare("t")],
        ..Default::default()
    };
    let request = plan("memory/compilationResults/1", selection);

    let selection = request.selection.unwrap();
    assert_eq!(selection.included_targets, vec![Target::bare("t")]);
    assert!(selection.included_targets[0].is_bare());
    assert!(selection.transitive_dependencies_included);
    assert!(!selection.transitive_dependents_included);
    assert!(!selection.fully_refresh_incremental_tables);
}

#[test]
fn test_qualified_target_preserved() {
    let selection = InvocationSelection {
        included_targets: vec![Target::qualified("acme", "analytics", "orders")],
        ..Default::default()
    };
    let request = plan("memory/compilationResults/1", selection);

    let targets = &request.selection.unwrap().included_targets;
    assert_eq!(targets[0].database.as_deref(), Some("acme"));
    assert_eq!(targets[0].schema.as_deref(), Some("analytics"));
}

#[test]
fn test_run_as_alone_creates_a_selection() {
    let selection = InvocationSelection {
        run_as: Some("runner@example.iam".to_string()),
        ..Default::default()
    };
    let request = plan("memory/compilationResults/1", selection);
    assert!(request.selection.is_some());
}
