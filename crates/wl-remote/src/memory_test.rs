use super::*;
use wl_core::{RelationAction, Target};

fn relation(name: &str) -> CompilationAction {
    CompilationAction::Relation(RelationAction {
        target: Target::qualified("db", "analytics", name),
        select_query: "SELECT 1".to_string(),
        tags: Default::default(),
        dependency_targets: vec![],
    })
}

#[tokio::test]
async fn test_listing_preserves_seeded_order() {
    let remote = InMemoryService::new();
    let newest = remote.seed_compilation("main", CompilationConfig::default(), vec![]);
    let older = remote.seed_compilation("main", CompilationConfig::default(), vec![]);

    let listed = remote.list_compilations(1000).await.unwrap();
    assert_eq!(listed[0].name, newest);
    assert_eq!(listed[1].name, older);
    assert_eq!(remote.calls().list_compilations, 1);
}

#[tokio::test]
async fn test_create_compilation_carries_compiled_actions() {
    let remote = InMemoryService::new();
    remote.set_compiled_actions(vec![relation("orders")]);

    let summary = remote
        .create_compilation("main", &CompilationConfig::default())
        .await
        .unwrap();
    let actions = remote
        .query_compilation_actions(&summary.name, 1000)
        .await
        .unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].target().name, "orders");
}

#[tokio::test]
async fn test_invocation_script_advances_per_poll() {
    let remote = InMemoryService::new();
    remote.script_invocation(vec![
        InvocationState::Pending,
        InvocationState::Running,
        InvocationState::Succeeded,
    ]);

    let request = InvocationRequest {
        compilation: "memory/compilationResults/1".to_string(),
        selection: None,
    };
    let created = remote.create_workflow_invocation(&request).await.unwrap();
    assert_eq!(created.state, InvocationState::Pending);

    let first = remote.get_workflow_invocation(&created.name).await.unwrap();
    assert_eq!(first.state, InvocationState::Running);

    let second = remote.get_workflow_invocation(&created.name).await.unwrap();
    assert_eq!(second.state, InvocationState::Succeeded);

    // Final state repeats once the script is exhausted
    let third = remote.get_workflow_invocation(&created.name).await.unwrap();
    assert_eq!(third.state, InvocationState::Succeeded);
}

#[tokio::test]
async fn test_injected_failure_fires_once() {
    let remote = InMemoryService::new();
    remote.seed_compilation("main", CompilationConfig::default(), vec![]);
    remote.fail_next(500, "boom");

    let err = remote.list_compilations(1000).await.unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 500, .. }));

    // Subsequent calls recover
    assert_eq!(remote.list_compilations(1000).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_compilation_is_api_error() {
    let remote = InMemoryService::new();
    let err = remote
        .query_compilation_actions("memory/compilationResults/404", 1000)
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 404, .. }));
}
