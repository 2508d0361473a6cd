//! Catalog command implementation

use anyhow::Result;

use wl_catalog::AssetCatalog;

use crate::cli::{CatalogArgs, GlobalArgs, OutputFormat};
use crate::context::RuntimeContext;

/// Execute the catalog command
pub async fn execute(args: &CatalogArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let mut catalog = if args.fresh {
        ctx.verbose("building eager catalog from a fresh compilation");
        AssetCatalog::eager(ctx.resolver(), ctx.fetcher(), ctx.builder()).await?
    } else {
        ctx.verbose("building lazy catalog from the latest existing compilation");
        AssetCatalog::lazy(ctx.resolver(), ctx.fetcher(), ctx.builder())
    };

    if args.checks {
        let checks = catalog.checks().await?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(checks)?),
            OutputFormat::Summary => {
                for check in checks {
                    println!("{} -> {}", check.name, check.asset);
                }
                println!("\n{} checks", checks.len());
            }
        }
    } else {
        let assets = catalog.assets().await?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(assets)?),
            OutputFormat::Summary => {
                for asset in assets {
                    let deps: Vec<&str> = asset.deps.iter().map(String::as_str).collect();
                    println!("{} [{}] deps: {}", asset.key, asset.group, deps.join(", "));
                }
                println!("\n{} assets", assets.len());
            }
        }
    }

    Ok(())
}
