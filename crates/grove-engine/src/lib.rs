//! Grove Engine - Orchestration layer
//!
//! Owns the process-level concerns around a grove: a shared session many
//! threads can write to, snapshot isolation for readers, document loading,
//! and the start/end/error boundary logging for every public operation.

pub mod commands;
pub mod session;

pub use session::SharedGrove;
