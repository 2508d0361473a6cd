use super::*;
use wl_remote::InMemoryService;

fn prefixed_config() -> CompilationConfig {
    CompilationConfig {
        table_prefix: Some("adhoc".to_string()),
        ..Default::default()
    }
}

fn scoped_config(schema: &str) -> CompilationConfig {
    CompilationConfig {
        default_schema: Some(schema.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_first_matching_snapshot_wins() {
    let remote = Arc::new(InMemoryService::new());
    let newest = remote.seed_compilation("dev", CompilationConfig::default(), vec![]);
    remote.seed_compilation("dev", CompilationConfig::default(), vec![]);

    let resolver = CompilationResolver::new(remote, "dev");
    let found = resolver.find_latest().await.unwrap().unwrap();
    assert_eq!(found.name, newest);
}

#[tokio::test]
async fn test_other_environments_are_skipped() {
    let remote = Arc::new(InMemoryService::new());
    remote.seed_compilation("main", CompilationConfig::default(), vec![]);
    let dev = remote.seed_compilation("dev", CompilationConfig::default(), vec![]);

    let resolver = CompilationResolver::new(remote, "dev");
    let found = resolver.find_latest().await.unwrap().unwrap();
    assert_eq!(found.name, dev);
}

#[tokio::test]
async fn test_prefixed_snapshots_never_match_by_default() {
    let remote = Arc::new(InMemoryService::new());
    remote.seed_compilation("dev", prefixed_config(), vec![]);
    let canonical = remote.seed_compilation("dev", CompilationConfig::default(), vec![]);

    let resolver = CompilationResolver::new(remote.clone(), "dev");
    let found = resolver.find_latest().await.unwrap().unwrap();
    assert_eq!(found.name, canonical);

    // Opting in surfaces the ad-hoc snapshot again
    let resolver = CompilationResolver::new(remote, "dev").with_filter(ScopeFilter {
        include_prefixed: true,
        ..Default::default()
    });
    let found = resolver.find_latest().await.unwrap().unwrap();
    assert_ne!(found.name, canonical);
}

#[tokio::test]
async fn test_set_filter_field_requires_exact_match() {
    let remote = Arc::new(InMemoryService::new());
    remote.seed_compilation("dev", scoped_config("staging"), vec![]);
    let analytics = remote.seed_compilation("dev", scoped_config("analytics"), vec![]);

    let resolver = CompilationResolver::new(remote, "dev").with_filter(ScopeFilter {
        schema: Some("analytics".to_string()),
        ..Default::default()
    });
    let found = resolver.find_latest().await.unwrap().unwrap();
    assert_eq!(found.name, analytics);
}

#[tokio::test]
async fn test_set_filter_field_reads_unset_snapshot_field_as_empty() {
    let remote = Arc::new(InMemoryService::new());
    remote.seed_compilation("dev", CompilationConfig::default(), vec![]);

    let resolver = CompilationResolver::new(remote, "dev").with_filter(ScopeFilter {
        schema: Some("analytics".to_string()),
        ..Default::default()
    });
    assert!(resolver.find_latest().await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_list_is_not_found_not_error() {
    let remote = Arc::new(InMemoryService::new());
    let resolver = CompilationResolver::new(remote, "dev");
    assert!(resolver.find_latest().await.unwrap().is_none());
}

#[tokio::test]
async fn test_require_latest_is_fatal_when_missing() {
    let remote = Arc::new(InMemoryService::new());
    let resolver = CompilationResolver::new(remote, "dev");

    let err = resolver.require_latest().await.unwrap_err();
    match err {
        CatalogError::MissingCompilation { environment } => assert_eq!(environment, "dev"),
        other => panic!("expected MissingCompilation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_requests_fresh_compilation() {
    let remote = Arc::new(InMemoryService::new());
    let resolver = CompilationResolver::new(remote.clone(), "dev");

    let summary = resolver.create().await.unwrap();
    assert_eq!(summary.git_ref, "dev");
    assert_eq!(remote.calls().create_compilation, 1);
}

#[tokio::test]
async fn test_create_propagates_rejection() {
    let remote = Arc::new(InMemoryService::new());
    remote.fail_next(400, "unknown git reference");

    let resolver = CompilationResolver::new(remote, "no-such-branch");
    let err = resolver.create().await.unwrap_err();
    assert!(matches!(err, wl_remote::RemoteError::Api { status: 400, .. }));
}
