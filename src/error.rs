use thiserror::Error;

/// Error returned by the fallible comparison entry points.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Per-run entry lists are not aligned with the runs they describe.
    #[error("entries misaligned with runs: {runs} runs, {entries} entry lists")]
    MisalignedEntries {
        /// Number of runs supplied.
        runs: usize,
        /// Number of per-run entry lists supplied.
        entries: usize,
    },
    /// Workflow objects are not aligned with the runs they belong to.
    #[error("workflows misaligned with runs: {runs} runs, {workflows} workflows")]
    MisalignedWorkflows {
        /// Number of runs supplied.
        runs: usize,
        /// Number of workflow slots supplied.
        workflows: usize,
    },
    /// A workflow manifest could not be parsed.
    #[error("invalid workflow manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    /// A table could not be serialized for display.
    #[error("failed to serialize comparison table: {0}")]
    Serialize(#[source] serde_json::Error),
}
