//! Common fixtures for integration tests.

use runcmp::{Parameter, Run, Workflow};

/// Runs named `names`, with ids derived from their position.
pub fn runs_named(names: &[&str]) -> Vec<Run> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Run::new(format!("run-id-{idx}"), *name))
        .collect()
}

/// A workflow declaring `(name, value)` input parameters in order.
pub fn workflow(params: &[(&str, &str)]) -> Option<Workflow> {
    Some(Workflow::with_parameters(
        params
            .iter()
            .map(|(name, value)| Parameter::new(*name, *value))
            .collect(),
    ))
}
