//! Per-run entry extraction.
//!
//! Extractors turn the caller's run objects into ordered key/value entries
//! ready for [`crate::table::build_table`]. Metric values are formatted here,
//! so the table never re-formats cells.

mod extractors;
mod fixed;
mod traits;

pub use extractors::{format_metric, format_metric_value, MetricExtractor, ParamExtractor};
pub use traits::EntryExtractor;
