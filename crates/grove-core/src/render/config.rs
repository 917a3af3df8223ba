use serde::{Deserialize, Serialize};

/// Escaping applied to literal text on its way into markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapePolicy {
    /// Escape `& < >` in text and `& < > " '` in attribute values
    #[default]
    Html,
    /// Emit literals verbatim. Unsafe: a literal containing markup or a
    /// quote changes the structure of the output.
    None,
}

/// Renderer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub escape: EscapePolicy,
    /// Maximum nesting depth before `DepthExceeded`; sibling chains do not
    /// count towards it
    pub max_depth: usize,
    /// Fail with `UnrenderableNode` instead of emitting the raw
    /// constructor token
    pub strict: bool,
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            escape: EscapePolicy::Html,
            max_depth: DEFAULT_MAX_DEPTH,
            strict: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"escape":"none"}"#).unwrap();
        assert_eq!(config.escape, EscapePolicy::None);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.strict);
    }
}
