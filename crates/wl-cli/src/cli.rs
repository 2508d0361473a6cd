//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Warpline - adapter CLI for a remote SQL-transformation service
#[derive(Parser, Debug)]
#[command(name = "wl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (must contain warpline.yml)
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request a fresh compilation of the configured environment
    Compile(CompileArgs),

    /// Build and print the asset catalog
    Catalog(CatalogArgs),

    /// Plan and execute a (selective) workflow invocation
    Run(RunArgs),

    /// Show one workflow invocation and its per-action states
    Status(StatusArgs),

    /// List recent workflow invocations
    Invocations(InvocationsArgs),
}

/// Arguments for the compile command
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Also fetch and report the compiled action count
    #[arg(long)]
    pub with_actions: bool,
}

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Compile the environment fresh instead of resolving the latest
    /// existing compilation
    #[arg(long)]
    pub fresh: bool,

    /// Print checks instead of assets
    #[arg(long)]
    pub checks: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub format: OutputFormat,
}

/// Catalog output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One line per record
    Summary,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Targets to run (comma-separated; `name`, `schema.name`, or
    /// `database.schema.name`)
    #[arg(short, long)]
    pub select: Option<String>,

    /// Tags to run (comma-separated)
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Exclude transitive upstream dependencies of the selection
    #[arg(long)]
    pub no_upstream: bool,

    /// Include transitive downstream dependents of the selection
    #[arg(long)]
    pub downstream: bool,

    /// Force a full refresh of incremental tables
    #[arg(long)]
    pub full_refresh: bool,

    /// Service account to run the workflow as
    #[arg(long)]
    pub run_as: Option<String>,

    /// Execute this compilation instead of resolving the latest one
    #[arg(long)]
    pub compilation: Option<String>,

    /// Print the planned request without submitting it
    #[arg(long)]
    pub dry_run: bool,

    /// Seconds between status polls
    #[arg(long, default_value_t = 10)]
    pub poll_secs: u64,

    /// Seconds to wait before giving up (the invocation keeps running
    /// remotely)
    #[arg(long, default_value_t = 3600)]
    pub timeout_secs: u64,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Invocation resource handle
    pub name: String,
}

/// Arguments for the invocations command
#[derive(Args, Debug)]
pub struct InvocationsArgs {
    /// How many minutes back to list
    #[arg(long, default_value_t = 60)]
    pub since_mins: i64,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
