//! Core types shared across the grove facilities
//!
//! Holds the canonical schema constants (field keys and event names) used
//! by the logging macros and by anything asserting on captured events.

pub mod schema;
