//! Network definition export

use std::path::Path;

use transit_core::bail_usage;
use transit_core::error::Result;

use super::dispatch::CommandContext;

/// Execute the network command
pub fn execute(ctx: &CommandContext, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) if path.is_dir() => {
            bail_usage!(format!("--output must name a file, got directory {}", path.display()))
        }
        Some(path) => {
            ctx.network.save(path)?;
            if !ctx.cli.quiet {
                eprintln!("Wrote network to {}", path.display());
            }
        }
        None => print!("{}", ctx.network.to_toml_string()?),
    }
    Ok(())
}
