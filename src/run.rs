//! Caller-supplied run and workflow models.
//!
//! These mirror the JSON shapes the run API returns, with every nested level
//! optional: absent data extracts to nothing rather than failing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CompareError;

/// Opaque run identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single executed pipeline run being compared against others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Identifier of the run.
    #[serde(default)]
    pub id: RunId,
    /// Display name, used as the run's column header.
    #[serde(default)]
    pub name: String,
    /// Metrics reported by the run, in reporting order.
    #[serde(default)]
    pub metrics: Option<Vec<RunMetric>>,
}

impl Run {
    /// Create a run with no metrics.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RunId::new(id),
            name: name.into(),
            metrics: None,
        }
    }

    /// Attach reported metrics to the run.
    pub fn with_metrics(self, metrics: Vec<RunMetric>) -> Self {
        Self {
            metrics: Some(metrics),
            ..self
        }
    }
}

/// How a metric value is meant to be displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricFormat {
    /// No format was reported; rendered like [`MetricFormat::Raw`].
    #[default]
    Unspecified,
    /// Plain number.
    Raw,
    /// Fraction rendered as a percentage.
    Percentage,
}

/// A named numeric measurement reported by a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetric {
    /// Metric name.
    #[serde(default)]
    pub name: Option<String>,
    /// Measured value, absent when the run did not report one.
    #[serde(default)]
    pub number_value: Option<f64>,
    /// Display format requested by the reporter.
    #[serde(default)]
    pub format: MetricFormat,
}

impl RunMetric {
    /// A raw metric with a value.
    pub fn new(name: impl Into<String>, number_value: f64) -> Self {
        Self {
            name: Some(name.into()),
            number_value: Some(number_value),
            format: MetricFormat::Raw,
        }
    }

    /// Override the display format.
    pub fn with_format(self, format: MetricFormat) -> Self {
        Self { format, ..self }
    }
}

/// Workflow object associated with a run; only its input arguments matter here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Workflow specification.
    #[serde(default)]
    pub spec: Option<WorkflowSpec>,
}

/// Specification section of a [`Workflow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSpec {
    /// Declared input arguments.
    #[serde(default)]
    pub arguments: Option<Arguments>,
}

/// Declared workflow arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    /// Input parameters in declaration order.
    #[serde(default)]
    pub parameters: Option<Vec<Parameter>>,
}

/// A named workflow input argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Argument name.
    pub name: String,
    /// Raw argument value.
    #[serde(default)]
    pub value: Option<String>,
}

impl Parameter {
    /// A parameter with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

impl Workflow {
    /// Build a workflow whose spec declares exactly `parameters`.
    pub fn with_parameters(parameters: Vec<Parameter>) -> Self {
        Self {
            spec: Some(WorkflowSpec {
                arguments: Some(Arguments {
                    parameters: Some(parameters),
                }),
            }),
        }
    }

    /// Parse the JSON workflow manifest stored alongside a run.
    pub fn from_manifest(manifest: &str) -> Result<Self, CompareError> {
        Ok(serde_json::from_str(manifest)?)
    }

    /// Declared input parameters, or an empty slice when any level is absent.
    pub fn parameters(&self) -> &[Parameter] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.arguments.as_ref())
            .and_then(|args| args.parameters.as_deref())
            .unwrap_or(&[])
    }
}
