//! Digest command
//!
//! Usage: grove digest <FILE>

use clap::Args;
use grove_core::ExError;
use grove_engine::commands::document::digest_document;

use super::InputArgs;

#[derive(Debug, Args)]
pub struct DigestArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn execute(args: DigestArgs) -> anyhow::Result<()> {
    let document = args.input.load()?;
    println!("{}", digest_document(&document).map_err(ExError::from)?);
    Ok(())
}
