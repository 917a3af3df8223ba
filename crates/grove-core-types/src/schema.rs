//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the core, the engine
//! and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Grove identifiers
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_EDGE_ID: &str = "edge_id";
pub const FIELD_POSITION: &str = "position";
pub const FIELD_ROOT_ID: &str = "root_id";

// Collection sizes
pub const FIELD_EDGE_COUNT: &str = "edge_count";
pub const FIELD_OUTPUT_LEN: &str = "output_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_NODE_ID: &str = "err.node_id";
pub const FIELD_ERR_EDGE_ID: &str = "err.edge_id";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_are_namespaced() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
