#![deny(missing_docs)]
//! Comparison tables for side-by-side run display.
//!
//! Given a set of runs and each run's sparse key/value data (workflow input
//! parameters or reported metrics), runcmp builds a dense grid: columns are
//! runs, rows are the distinct keys ordered by how many runs report them.
//!
//! ```
//! use runcmp::{metrics_compare_table, Run, RunMetric};
//!
//! let runs = vec![
//!     Run::new("a", "run1").with_metrics(vec![RunMetric::new("some-metric", 0.33)]),
//!     Run::new("b", "run2").with_metrics(vec![RunMetric::new("another-metric", 0.66)]),
//! ];
//! let table = metrics_compare_table(&runs);
//! assert_eq!(table.y_labels, ["some-metric", "another-metric"]);
//! assert_eq!(table.rows, [["0.330", ""], ["", "0.660"]]);
//! ```

mod observability;

/// Parameter and metric comparison entry points.
pub mod compare;
/// Error types.
pub mod error;
/// Per-run entry extraction.
pub mod extract;
/// Extraction options.
pub mod option;
/// Run and workflow input models.
pub mod run;
/// Table construction.
pub mod table;

pub use crate::{
    compare::{
        metrics_compare_table, metrics_compare_table_with_options, params_compare_table,
        try_params_compare_table,
    },
    error::CompareError,
    option::CompareOptions,
    run::{MetricFormat, Parameter, Run, RunId, RunMetric, Workflow},
    table::{build_table, try_build_table, ComparisonTable, KeyValueEntry, RunEntries},
};
