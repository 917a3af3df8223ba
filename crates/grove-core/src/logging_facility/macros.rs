//! Boundary logging macros
//!
//! All three expand through `__grove_op_event!`, so every boundary event
//! carries `component`, `op` and `event` in the same order. Callers need
//! `tracing` and `grove-core-types` in their dependencies.

/// Shared expansion for boundary events
#[doc(hidden)]
#[macro_export]
macro_rules! __grove_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = grove_core_types::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use grove_core::log_op_start;
/// log_op_start!("render");
/// log_op_start!("render", root_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__grove_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is required; anything after it is passed through.
///
/// ```
/// # use grove_core::log_op_end;
/// log_op_end!("render", duration_ms = 2);
/// log_op_end!("render", duration_ms = 2, output_len = 40);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__grove_op_event!(
            info,
            $op,
            EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation
///
/// The error is converted to [`ExError`](crate::errors::ExError) and its
/// stable code, kind and any node or edge it names are attached as
/// `err.*` fields. Absent ids are left out of the event.
///
/// ```
/// # use grove_core::{log_op_error, errors::GroveError, model::EdgeId};
/// let err = GroveError::UnknownEdge { edge_id: EdgeId::new(9) };
/// log_op_error!("retire_edge", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__grove_op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.node_id = ex_err.node_id().map(tracing::field::display),
            err.edge_id = ex_err.edge_id().map(tracing::field::display)
            $(, $($field)*)?
        );
    }};
}
