//! Entry points producing parameter and metric comparison tables.
//!
//! Both variants extract per-run entries and funnel them into the shared
//! [`build_table`] routine; they differ only in where entries come from.

use crate::{
    error::CompareError,
    extract::{EntryExtractor, MetricExtractor, ParamExtractor},
    observability::log_warn,
    option::CompareOptions,
    run::{Run, Workflow},
    table::{build_table, ComparisonTable, RunEntries},
};

/// Compare the workflow input parameters of `runs`.
///
/// `workflows[i]` is the workflow of `runs[i]`; a `None` slot contributes no
/// parameters.
///
/// # Panics
///
/// Panics when `runs` is non-empty and `workflows` is not aligned with it.
pub fn params_compare_table(runs: &[Run], workflows: &[Option<Workflow>]) -> ComparisonTable {
    if runs.is_empty() {
        return ComparisonTable::default();
    }
    assert_eq!(
        runs.len(),
        workflows.len(),
        "workflows must be aligned with runs"
    );
    build_table(runs, &extract_all(&ParamExtractor, workflows))
}

/// Like [`params_compare_table`], but reports misaligned input as an error.
pub fn try_params_compare_table(
    runs: &[Run],
    workflows: &[Option<Workflow>],
) -> Result<ComparisonTable, CompareError> {
    if !runs.is_empty() && runs.len() != workflows.len() {
        log_warn!(
            component = "compare",
            event = "workflows_misaligned",
            runs = runs.len(),
            workflows = workflows.len(),
        );
        return Err(CompareError::MisalignedWorkflows {
            runs: runs.len(),
            workflows: workflows.len(),
        });
    }
    Ok(params_compare_table(runs, workflows))
}

/// Compare the reported metrics of `runs`, three decimal places per value.
pub fn metrics_compare_table(runs: &[Run]) -> ComparisonTable {
    metrics_compare_table_with_options(runs, &CompareOptions::default())
}

/// Compare the reported metrics of `runs`, formatting values per `options`.
pub fn metrics_compare_table_with_options(
    runs: &[Run],
    options: &CompareOptions,
) -> ComparisonTable {
    let extractor = MetricExtractor::new(options);
    build_table(runs, &extract_all(&extractor, runs))
}

fn extract_all<E>(extractor: &E, sources: &[E::Source]) -> RunEntries
where
    E: EntryExtractor,
    E::Source: Sized,
{
    sources
        .iter()
        .map(|source| extractor.extract(source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::{Parameter, RunMetric};

    #[test]
    fn missing_workflow_yields_empty_column() {
        let runs = vec![Run::new("1", "run1"), Run::new("2", "run2")];
        let workflows = vec![
            None,
            Some(Workflow::with_parameters(vec![Parameter::new("p", "v")])),
        ];
        let table = params_compare_table(&runs, &workflows);
        assert_eq!(table.y_labels, vec!["p"]);
        assert_eq!(table.rows, vec![vec!["", "v"]]);
    }

    #[test]
    fn misaligned_workflows_are_reported() {
        let runs = vec![Run::new("1", "run1")];
        let err = try_params_compare_table(&runs, &[]).unwrap_err();
        assert!(matches!(
            err,
            CompareError::MisalignedWorkflows {
                runs: 1,
                workflows: 0
            }
        ));
    }

    #[test]
    #[should_panic(expected = "aligned")]
    fn misaligned_workflows_panic() {
        params_compare_table(&[Run::new("1", "run1")], &[None, None]);
    }

    #[test]
    fn options_control_metric_precision() {
        let runs = vec![Run::new("1", "run1").with_metrics(vec![RunMetric::new("m", 0.125)])];
        let options = CompareOptions::default().decimal_places(1);
        let table = metrics_compare_table_with_options(&runs, &options);
        assert_eq!(table.rows, vec![vec!["0.1"]]);
    }
}
