//! Compile command implementation

use anyhow::Result;

use crate::cli::{CompileArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the compile command
pub async fn execute(args: &CompileArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "compiling environment '{}' in {}",
        ctx.config.environment,
        ctx.config.parent()
    ));

    let summary = ctx.resolver().create().await?;
    println!("Created compilation: {}", summary.name);

    if args.with_actions {
        let actions = ctx.fetcher().fetch(&summary.name).await?;
        let assertions = actions.iter().filter(|a| a.is_assertion()).count();
        println!(
            "Compiled {} actions ({} relations, {} assertions)",
            actions.len(),
            actions.len() - assertions,
            assertions
        );
    }

    Ok(())
}
