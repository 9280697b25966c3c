use super::{fixed::to_fixed, EntryExtractor};
use crate::{
    observability::log_debug,
    option::CompareOptions,
    run::{MetricFormat, Run, RunMetric, Workflow},
    table::KeyValueEntry,
};

/// Extracts a workflow's declared input arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamExtractor;

impl EntryExtractor for ParamExtractor {
    type Source = Option<Workflow>;

    fn extract(&self, source: &Option<Workflow>) -> Vec<KeyValueEntry> {
        let Some(workflow) = source else {
            return Vec::new();
        };
        workflow
            .parameters()
            .iter()
            .map(|param| {
                KeyValueEntry::new(param.name.clone(), param.value.clone().unwrap_or_default())
            })
            .collect()
    }
}

/// Extracts a run's reported metrics as formatted strings.
#[derive(Debug, Clone, Copy)]
pub struct MetricExtractor {
    decimal_places: usize,
}

impl MetricExtractor {
    /// Extractor formatting values per `options`.
    pub fn new(options: &CompareOptions) -> Self {
        Self {
            decimal_places: options.decimal_places,
        }
    }
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new(&CompareOptions::default())
    }
}

impl EntryExtractor for MetricExtractor {
    type Source = Run;

    fn extract(&self, run: &Run) -> Vec<KeyValueEntry> {
        let Some(metrics) = run.metrics.as_deref() else {
            return Vec::new();
        };
        metrics
            .iter()
            .filter_map(|metric| {
                let (Some(name), Some(value)) = (metric.name.as_ref(), metric.number_value) else {
                    log_debug!(
                        component = "extract",
                        event = "metric_skipped",
                        run = %run.id,
                        metric = ?metric.name,
                    );
                    return None;
                };
                Some(KeyValueEntry::new(
                    name.clone(),
                    format_metric_value(value, metric.format, self.decimal_places),
                ))
            })
            .collect()
    }
}

/// Display string for `metric` with `decimal_places` digits after the point.
///
/// Returns `None` when the metric has no numeric value.
pub fn format_metric(metric: &RunMetric, decimal_places: usize) -> Option<String> {
    metric
        .number_value
        .map(|value| format_metric_value(value, metric.format, decimal_places))
}

/// Display string for a metric `value` reported with `format`.
///
/// Exact ties round away from zero and `-0.0` renders as zero.
pub fn format_metric_value(value: f64, format: MetricFormat, decimal_places: usize) -> String {
    match format {
        MetricFormat::Percentage => format!("{}%", to_fixed(value * 100.0, decimal_places)),
        MetricFormat::Raw | MetricFormat::Unspecified => to_fixed(value, decimal_places),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::Parameter;

    #[test]
    fn formats_raw_metrics_to_fixed_places() {
        assert_eq!(
            format_metric(&RunMetric::new("m", 0.33), 3).as_deref(),
            Some("0.330")
        );
        assert_eq!(
            format_metric(&RunMetric::new("m", 0.554), 3).as_deref(),
            Some("0.554")
        );
        assert_eq!(
            format_metric(&RunMetric::new("m", 2.0), 1).as_deref(),
            Some("2.0")
        );
    }

    #[test]
    fn ties_round_up_and_negative_zero_is_unsigned() {
        let format = |value| format_metric_value(value, MetricFormat::Raw, 3);
        assert_eq!(format(0.0625), "0.063");
        assert_eq!(format(0.3125), "0.313");
        assert_eq!(format(2.0625), "2.063");
        assert_eq!(format(-0.0), "0.000");
        assert_eq!(
            format_metric_value(0.000625, MetricFormat::Percentage, 3),
            "0.063%"
        );
    }

    #[test]
    fn formats_percentage_metrics() {
        let metric = RunMetric::new("acc", 0.5).with_format(MetricFormat::Percentage);
        assert_eq!(format_metric(&metric, 3).as_deref(), Some("50.000%"));
    }

    #[test]
    fn metric_without_value_is_skipped() {
        let run = Run::new("id", "run1").with_metrics(vec![
            RunMetric {
                name: Some("empty".into()),
                number_value: None,
                format: MetricFormat::Raw,
            },
            RunMetric {
                name: None,
                number_value: Some(1.0),
                format: MetricFormat::Raw,
            },
            RunMetric::new("kept", 1.0),
        ]);
        let entries = MetricExtractor::default().extract(&run);
        assert_eq!(entries, vec![KeyValueEntry::new("kept", "1.000")]);
    }

    #[test]
    fn run_without_metrics_extracts_nothing() {
        assert!(MetricExtractor::default()
            .extract(&Run::new("id", "run1"))
            .is_empty());
    }

    #[test]
    fn params_keep_declaration_order() {
        let workflow = Workflow::with_parameters(vec![
            Parameter::new("b", "2"),
            Parameter::new("a", "1"),
            Parameter {
                name: "c".into(),
                value: None,
            },
        ]);
        let entries = ParamExtractor.extract(&Some(workflow));
        assert_eq!(
            entries,
            vec![
                KeyValueEntry::new("b", "2"),
                KeyValueEntry::new("a", "1"),
                KeyValueEntry::new("c", ""),
            ]
        );
    }

    #[test]
    fn absent_workflow_extracts_nothing() {
        assert!(ParamExtractor.extract(&None).is_empty());
    }
}
