use super::*;

#[test]
fn test_terminal_states() {
    assert!(!InvocationState::Pending.is_terminal());
    assert!(!InvocationState::Running.is_terminal());
    assert!(InvocationState::Succeeded.is_terminal());
    assert!(InvocationState::Failed.is_terminal());
    assert!(InvocationState::Cancelled.is_terminal());
}

#[test]
fn test_state_wire_format() {
    let json = serde_json::to_string(&InvocationState::Running).unwrap();
    assert_eq!(json, r#""RUNNING""#);

    let state: InvocationState = serde_json::from_str(r#""CANCELLED""#).unwrap();
    assert_eq!(state, InvocationState::Cancelled);
}

#[test]
fn test_selection_defaults() {
    let selection = InvocationSelection::default();
    assert!(selection.transitive_dependencies_included);
    assert!(!selection.transitive_dependents_included);
    assert!(!selection.fully_refresh_incremental_tables);
    assert!(selection.is_empty());
}

#[test]
fn test_selection_is_empty_ignores_flags() {
    // Flipping transitive/refresh flags without naming targets or tags is
    // still "run everything".
    let selection = InvocationSelection {
        transitive_dependents_included: true,
        fully_refresh_incremental_tables: true,
        ..Default::default()
    };
    assert!(selection.is_empty());
}

#[test]
fn test_selection_not_empty_with_criteria() {
    let with_target = InvocationSelection {
        included_targets: vec![Target::bare("orders")],
        ..Default::default()
    };
    assert!(!with_target.is_empty());

    let with_tag = InvocationSelection {
        included_tags: vec!["daily".to_string()],
        ..Default::default()
    };
    assert!(!with_tag.is_empty());

    let with_run_as = InvocationSelection {
        run_as: Some("runner@example.iam".to_string()),
        ..Default::default()
    };
    assert!(!with_run_as.is_empty());
}

#[test]
fn test_request_omits_absent_selection() {
    let request = InvocationRequest {
        compilation: "projects/p/locations/l/repositories/r/compilationResults/1".to_string(),
        selection: None,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("selection").is_none());
}
