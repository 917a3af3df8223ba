//! Check command
//!
//! Usage: grove check <FILE> [--json]

use clap::Args;
use grove_core::ExError;
use grove_engine::commands::document::check_document;

use super::InputArgs;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let document = args.input.load()?;
    let report = check_document(&document).map_err(ExError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "✓ valid: {} edges ({} active), {} roots",
            report.edge_count, report.active_edge_count, report.root_count
        );
    }
    Ok(())
}
