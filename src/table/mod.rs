//! Dense comparison tables built from sparse per-run key/value entries.
//!
//! Columns are runs in input order. Rows are the distinct keys found across
//! all runs, ordered by how many runs report them (most first), with ties
//! kept in the order keys were first discovered. Cells a run has no value for
//! hold the empty string.

mod keys;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::CompareError,
    observability::{log_debug, log_warn},
    run::Run,
};

/// A single `(key, value)` pair extracted from one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueEntry {
    /// Row key, a parameter or metric name.
    pub key: String,
    /// Cell value as displayed.
    pub value: String,
}

impl KeyValueEntry {
    /// Create an entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Extracted entries for every run, indexed like the runs they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunEntries {
    per_run: Vec<Vec<KeyValueEntry>>,
}

impl RunEntries {
    /// Number of per-run entry lists.
    pub fn len(&self) -> usize {
        self.per_run.len()
    }

    /// Whether no entry lists are held.
    pub fn is_empty(&self) -> bool {
        self.per_run.is_empty()
    }

    /// Entries of the run at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&[KeyValueEntry]> {
        self.per_run.get(idx).map(Vec::as_slice)
    }

    /// Iterate per-run entry lists in run order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[KeyValueEntry]> {
        self.per_run.iter().map(Vec::as_slice)
    }

    /// Append the entry list of the next run.
    pub fn push(&mut self, entries: Vec<KeyValueEntry>) {
        self.per_run.push(entries);
    }
}

impl From<Vec<Vec<KeyValueEntry>>> for RunEntries {
    fn from(per_run: Vec<Vec<KeyValueEntry>>) -> Self {
        Self { per_run }
    }
}

impl FromIterator<Vec<KeyValueEntry>> for RunEntries {
    fn from_iter<I: IntoIterator<Item = Vec<KeyValueEntry>>>(iter: I) -> Self {
        Self {
            per_run: iter.into_iter().collect(),
        }
    }
}

/// Grid of runs (columns) against distinct keys (rows).
///
/// `rows[i][j]` is the value of `y_labels[i]` in run `j`, or `""` when that
/// run has no entry for the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    /// Cell values, one row per entry of `y_labels`.
    pub rows: Vec<Vec<String>>,
    /// Run display names, in input order.
    pub x_labels: Vec<String>,
    /// Distinct keys, most widespread first.
    pub y_labels: Vec<String>,
}

impl ComparisonTable {
    /// Serialize to the `{ rows, xLabels, yLabels }` JSON shape.
    pub fn to_json(&self) -> Result<String, CompareError> {
        serde_json::to_string(self).map_err(CompareError::Serialize)
    }

    /// Value for `key` in column `run`, if both exist.
    pub fn cell(&self, key: &str, run: usize) -> Option<&str> {
        let row = self.y_labels.iter().position(|label| label == key)?;
        self.rows.get(row)?.get(run).map(String::as_str)
    }
}

/// Build a comparison table from `runs` and their aligned `entries`.
///
/// # Panics
///
/// Panics when `runs` is non-empty and `entries` does not hold exactly one
/// list per run; see [`try_build_table`] for a non-panicking variant.
pub fn build_table(runs: &[Run], entries: &RunEntries) -> ComparisonTable {
    if runs.is_empty() {
        return ComparisonTable::default();
    }
    assert_eq!(
        runs.len(),
        entries.len(),
        "per-run entries must be aligned with runs"
    );
    build_aligned(runs, entries)
}

/// Like [`build_table`], but reports misaligned input as an error.
pub fn try_build_table(
    runs: &[Run],
    entries: &RunEntries,
) -> Result<ComparisonTable, CompareError> {
    if runs.is_empty() {
        return Ok(ComparisonTable::default());
    }
    if runs.len() != entries.len() {
        log_warn!(
            component = "table",
            event = "entries_misaligned",
            runs = runs.len(),
            entries = entries.len(),
        );
        return Err(CompareError::MisalignedEntries {
            runs: runs.len(),
            entries: entries.len(),
        });
    }
    Ok(build_aligned(runs, entries))
}

fn build_aligned(runs: &[Run], entries: &RunEntries) -> ComparisonTable {
    let x_labels: Vec<String> = runs.iter().map(|run| run.name.clone()).collect();
    let y_labels = keys::frequency_ordered_keys(entries);

    // Later entries for the same key overwrite earlier ones.
    let lookups: Vec<HashMap<&str, &str>> = entries
        .iter()
        .map(|run_entries| {
            run_entries
                .iter()
                .map(|entry| (entry.key.as_str(), entry.value.as_str()))
                .collect::<HashMap<_, _>>()
        })
        .collect();

    let rows: Vec<Vec<String>> = y_labels
        .iter()
        .map(|key| {
            lookups
                .iter()
                .map(|lookup| {
                    lookup
                        .get(key.as_str())
                        .map(|value| (*value).to_owned())
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
        })
        .collect();

    log_debug!(
        component = "table",
        event = "comparison_table_built",
        runs = x_labels.len(),
        keys = y_labels.len(),
    );

    ComparisonTable {
        rows,
        x_labels,
        y_labels,
    }
}
