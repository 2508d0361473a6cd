//! Run command implementation

use anyhow::{bail, Result};
use std::time::Duration;

use wl_core::{InvocationSelection, InvocationState, Target};
use wl_run::{plan, InvocationMonitor};

use crate::cli::{GlobalArgs, RunArgs};
use crate::context::RuntimeContext;

/// Execute the run command
pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let compilation = match &args.compilation {
        Some(name) => name.clone(),
        None => ctx.resolver().require_latest().await?.name,
    };
    ctx.verbose(&format!("running against compilation {}", compilation));

    let selection = build_selection(args)?;
    let request = plan(&compilation, selection);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let monitor = InvocationMonitor::new(ctx.remote.clone())
        .with_poll_interval(Duration::from_secs(args.poll_secs))
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let invocation = monitor.submit_and_await(&request).await?;
    println!("Invocation {} finished: {}", invocation.name, invocation.state);
    for action in &invocation.actions {
        println!("  {} {}", action.state, action.target);
    }

    match invocation.state {
        InvocationState::Succeeded => Ok(()),
        state => bail!("invocation ended in state '{}'", state),
    }
}

fn build_selection(args: &RunArgs) -> Result<InvocationSelection> {
    let included_targets = match &args.select {
        Some(select) => select
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Target::parse)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let included_tags = match &args.tags {
        Some(tags) => tags
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    };

    Ok(InvocationSelection {
        included_targets,
        included_tags,
        transitive_dependencies_included: !args.no_upstream,
        transitive_dependents_included: args.downstream,
        fully_refresh_incremental_tables: args.full_refresh,
        run_as: args.run_as.clone(),
    })
}
