use super::*;
use clap::Parser;

#[test]
fn test_parse_compile() {
    let cli = Cli::parse_from(["wl", "compile", "--with-actions"]);
    match cli.command {
        Commands::Compile(args) => assert!(args.with_actions),
        other => panic!("expected compile, got {:?}", other),
    }
}

#[test]
fn test_parse_catalog_defaults() {
    let cli = Cli::parse_from(["wl", "catalog"]);
    match cli.command {
        Commands::Catalog(args) => {
            assert!(!args.fresh);
            assert!(!args.checks);
            assert_eq!(args.format, OutputFormat::Summary);
        }
        other => panic!("expected catalog, got {:?}", other),
    }
}

#[test]
fn test_parse_run_selection_flags() {
    let cli = Cli::parse_from([
        "wl",
        "run",
        "--select",
        "orders,analytics.staging.customers",
        "--tags",
        "daily",
        "--downstream",
        "--no-upstream",
        "--dry-run",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.select.as_deref(), Some("orders,analytics.staging.customers"));
            assert_eq!(args.tags.as_deref(), Some("daily"));
            assert!(args.downstream);
            assert!(args.no_upstream);
            assert!(args.dry_run);
            assert!(!args.full_refresh);
            assert_eq!(args.poll_secs, 10);
            assert_eq!(args.timeout_secs, 3600);
        }
        other => panic!("expected run, got {:?}", other),
    }
}

#[test]
fn test_global_flags_are_global() {
    let cli = Cli::parse_from(["wl", "catalog", "--verbose", "-p", "/tmp/project"]);
    assert!(cli.global.verbose);
    assert_eq!(cli.global.project_dir, "/tmp/project");
}
