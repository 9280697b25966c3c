//! Structured log events emitted while building comparison tables.
//!
//! Every event goes to target "runcmp" with an `event` and a `component`
//! field. No subscriber is installed here.
//!
//! | event | level | component | fields |
//! |---|---|---|---|
//! | `comparison_table_built` | debug | `table` | `runs`, `keys` |
//! | `entries_misaligned` | warn | `table` | `runs`, `entries` |
//! | `metric_skipped` | debug | `extract` | `run`, `metric` |
//! | `workflows_misaligned` | warn | `compare` | `runs`, `workflows` |

/// Target for all runcmp log events.
pub(crate) const RUNCMP_TARGET: &str = "runcmp";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "table",
///     event = "comparison_table_built",
///     runs = runs.len(),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::RUNCMP_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::RUNCMP_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
