pub mod check;
pub mod demo;
pub mod digest;
pub mod render;

use anyhow::{bail, Context};
use clap::Args;
use grove_core::schema::SchemaRegistry;
use grove_core::{ExError, NodeId};
use grove_engine::commands::document::{load_document, Document, DocumentSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Input file selection shared by render, check and digest
#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON edge log, or a legacy edge list with --legacy
    pub file: PathBuf,

    /// Read the legacy linked-list 7-tuple format
    #[arg(long, requires = "root_type")]
    pub legacy: bool,

    /// Root node id (`node3` or `3`; the legacy id with --legacy)
    #[arg(long)]
    pub root: Option<String>,

    /// Constructor of the legacy root, e.g. `<body>`
    #[arg(long)]
    pub root_type: Option<String>,
}

impl InputArgs {
    pub fn load(&self) -> anyhow::Result<Document> {
        let json = std::fs::read_to_string(&self.file)
            .with_context(|| format!("reading {}", self.file.display()))?;

        let source = if self.legacy {
            let (Some(root_id), Some(root_constructor)) = (&self.root, &self.root_type) else {
                bail!("--legacy needs both --root and --root-type");
            };
            DocumentSource::Legacy {
                json,
                root_id: root_id.clone(),
                root_constructor: root_constructor.clone(),
            }
        } else {
            let root = self
                .root
                .as_deref()
                .map(str::parse::<NodeId>)
                .transpose()
                .map_err(ExError::from)?;
            DocumentSource::EdgeLog { json, root }
        };

        Ok(load_document(source, Arc::new(SchemaRegistry::html())).map_err(ExError::from)?)
    }
}

/// Write to a file, or stdout when no path is given
pub fn emit(text: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("✓ Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
