//! Structured logging for grove
//!
//! One initialization point, `init(profile)`, plus three boundary macros:
//!
//! - `log_op_start!(op, ...)` at the start of a public operation
//! - `log_op_end!(op, duration_ms = ...)` on success
//! - `log_op_error!(op, err, duration_ms = ...)` on failure
//!
//! Only the outermost layer (the engine session or the CLI) emits
//! boundary events. Core code logs at `debug`/`warn` without them.
//!
//! ```rust
//! use grove_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
