//! Render command
//!
//! Usage: grove render <FILE> [--legacy --root <ID> --root-type <CTOR>] [-o FILE]

use clap::Args;
use grove_core::ExError;
use grove_engine::commands::document::render_document;
use std::path::PathBuf;

use super::{emit, InputArgs};
use crate::config::RenderOptions;

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub render: RenderOptions,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: RenderArgs) -> anyhow::Result<()> {
    let config = args.render.resolve()?;
    let document = args.input.load()?;

    let html = render_document(&document, &config).map_err(ExError::from)?;

    emit(&html, args.output.as_ref())
}
