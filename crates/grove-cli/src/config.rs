//! Render configuration from file and flags
//!
//! File format (every key optional):
//!
//! ```toml
//! [render]
//! escape = "html"   # or "none"
//! max_depth = 256
//! strict = true
//! ```
//!
//! Flags override the file; the file overrides the defaults.

use anyhow::Context;
use clap::Args;
use grove_core::{EscapePolicy, RenderConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    render: RenderConfig,
}

#[derive(Debug, Args)]
pub struct RenderOptions {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit literals without HTML escaping (unsafe for untrusted text)
    #[arg(long)]
    pub no_escape: bool,

    /// Emit constructor tokens for unrenderable nodes instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Maximum nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    pub fn resolve(&self) -> anyhow::Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_file(path)?,
            None => RenderConfig::default(),
        };

        if self.no_escape {
            config.escape = EscapePolicy::None;
        }
        if self.lenient {
            config.strict = false;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        Ok(config)
    }
}

fn load_file(path: &Path) -> anyhow::Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let file: FileConfig =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(file.render)
}
