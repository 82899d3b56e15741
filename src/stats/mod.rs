use thiserror::Error;
use tracing::info;

use crate::model::{Dataset, Element, ElementValues, Group, Ratios, Sample, Variances};

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("group '{0}' needs at least two samples for a sample variance")]
    InsufficientData(Group),
    #[error("variances for group '{0}' have not been computed")]
    MissingVariances(Group),
}

/// Unbiased sample variance, sum of squared deviations over N-1. `None`
/// below two observations.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq = values
        .iter()
        .map(|v| {
            let dev = v - mean;
            dev * dev
        })
        .sum::<f64>();
    Some(sum_sq / (n - 1) as f64)
}

/// Per-element sample variance across one group's samples.
pub fn group_variances(group: Group, samples: &[Sample]) -> Result<Variances, StatsError> {
    let mut out = ElementValues::default();
    for element in Element::ALL {
        let values: Vec<f64> = samples.iter().map(|s| s.ppm[element]).collect();
        out[element] = sample_variance(&values).ok_or(StatsError::InsufficientData(group))?;
    }
    Ok(out)
}

/// Computes and stores variances for both fixed groups. Fails on the first
/// group with fewer than two samples.
pub fn compute_variances(dataset: &mut Dataset) -> Result<(), StatsError> {
    for group in Group::ALL {
        let variances = group_variances(group, &dataset.samples[group])?;
        dataset.variances[group] = Some(variances);
        info!("computed variances for group '{group}'");
    }
    Ok(())
}

/// Elementwise mine / background. IEEE division is propagated verbatim:
/// a zero background variance yields +inf, and NaN when both are zero.
/// The ratio is a diagnostic number for human interpretation, not an error.
pub fn variance_ratios(mine: Variances, background: Variances) -> Ratios {
    ElementValues::from_fn(|element| mine[element] / background[element])
}

/// Computes and stores the F-distribution ratios. Fails with
/// [`StatsError::MissingVariances`] when either group's variances are
/// absent instead of dividing zero-valued defaults.
pub fn compute_ratios(dataset: &mut Dataset) -> Result<(), StatsError> {
    let mine =
        dataset.variances[Group::Mine].ok_or(StatsError::MissingVariances(Group::Mine))?;
    let background = dataset.variances[Group::Background]
        .ok_or(StatsError::MissingVariances(Group::Background))?;

    dataset.ratios = Some(variance_ratios(mine, background));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/tests.rs"]
mod tests;
