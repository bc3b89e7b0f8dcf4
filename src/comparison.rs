//! Two-group comparison: descriptive statistics and Welch's t-test.
//!
//! The comparison is a pure function over an observation snapshot. It never
//! mutates the store and reports every degenerate input as an error instead
//! of defaulting to NaN.

use std::collections::BTreeMap;

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use thiserror::Error;

use crate::observation::{Group, Observation};

/// Significance threshold applied by [`ComparisonResult::is_significant`].
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Descriptive statistics for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    /// Number of observations in the group.
    pub count: usize,
    /// Arithmetic mean of the group's values.
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected, divisor n - 1).
    pub std_dev: f64,
}

/// Result of comparing the two groups' value distributions.
///
/// Derived purely from the observations passed to [`compute`]; holds no
/// reference back to the store. Fields are unrounded; only
/// [`report`](ComparisonResult::report) rounds, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Welch t statistic for Group A versus Group B.
    pub t_statistic: f64,
    /// Two-sided p-value, always within `[0, 1]`.
    pub p_value: f64,
    /// Welch–Satterthwaite degrees of freedom (generally non-integral).
    pub degrees_of_freedom: f64,
    /// Per-group descriptive statistics.
    pub per_group: BTreeMap<Group, GroupStats>,
    /// Raw values per group, insertion order preserved (box-plot input).
    pub raw_values: BTreeMap<Group, Vec<f64>>,
}

impl ComparisonResult {
    /// True when the two-sided p-value falls below [`SIGNIFICANCE_LEVEL`].
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }

    /// Plain-text summary for the informational panel.
    ///
    /// Group statistics are rounded to two decimals, the test values to four;
    /// the stored fields stay exact.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (group, stats) in &self.per_group {
            out.push_str(&format!(
                "{}: n={}, mean={:.2} s, std dev={:.2} s\n",
                group, stats.count, stats.mean, stats.std_dev
            ));
        }
        out.push_str(&format!(
            "Welch t-test: t={:.4}, p={:.4}, df={:.2}\n",
            self.t_statistic, self.p_value, self.degrees_of_freedom
        ));
        if self.is_significant() {
            out.push_str("Significant difference between groups (p < 0.05)\n");
        } else {
            out.push_str("No significant difference between groups (p >= 0.05)\n");
        }
        out
    }
}

/// The comparison cannot be computed from the observations at hand.
///
/// Every variant is an expected, recoverable condition of incomplete user
/// input; the caller shows an informational message and skips the charts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsufficientDataError {
    #[error("too few observations: need at least 2, got {total}")]
    TooFewObservations { total: usize },

    #[error("no observations recorded for {0}")]
    MissingGroup(Group),

    #[error("{0} has a single observation; sample standard deviation needs at least two")]
    UndersizedGroup(Group),

    #[error("both groups have zero variance; the t statistic is undefined")]
    ZeroVariance,
}

/// Partition observations by group and compare the two distributions.
///
/// Pure and deterministic: the same observation sequence always yields an
/// identical result.
///
/// ```
/// use coldpress::{comparison, store::ObservationStore};
///
/// let mut store = ObservationStore::new();
/// for (group, value) in [
///     ("Group A", 41.0),
///     ("Group A", 55.5),
///     ("Group B", 88.0),
///     ("Group B", 76.25),
/// ] {
///     store.append(group, value).unwrap();
/// }
///
/// let result = comparison::compute(store.snapshot()).unwrap();
/// assert!(result.p_value > 0.0 && result.p_value <= 1.0);
/// ```
pub fn compute(observations: &[Observation]) -> Result<ComparisonResult, InsufficientDataError> {
    let total = observations.len();
    if total < 2 {
        return Err(InsufficientDataError::TooFewObservations { total });
    }

    let mut values_a = Vec::new();
    let mut values_b = Vec::new();
    for obs in observations {
        match obs.group {
            Group::A => values_a.push(obs.value),
            Group::B => values_b.push(obs.value),
        }
    }
    for (group, values) in [(Group::A, &values_a), (Group::B, &values_b)] {
        if values.is_empty() {
            return Err(InsufficientDataError::MissingGroup(group));
        }
        if values.len() == 1 {
            return Err(InsufficientDataError::UndersizedGroup(group));
        }
    }

    let mean_a = mean(&values_a);
    let mean_b = mean(&values_b);
    let var_a = sample_variance(&values_a, mean_a);
    let var_b = sample_variance(&values_b, mean_b);
    if var_a == 0.0 && var_b == 0.0 {
        return Err(InsufficientDataError::ZeroVariance);
    }

    let n_a = values_a.len() as f64;
    let n_b = values_b.len() as f64;

    // Welch's unequal-variance t-test with Welch-Satterthwaite degrees of
    // freedom; no pooled-variance assumption.
    let se_a = var_a / n_a;
    let se_b = var_b / n_b;
    let pooled = se_a + se_b;
    let t_statistic = (mean_a - mean_b) / pooled.sqrt();
    let degrees_of_freedom =
        pooled * pooled / (se_a * se_a / (n_a - 1.0) + se_b * se_b / (n_b - 1.0));
    let p_value = two_sided_p(t_statistic, degrees_of_freedom);

    tracing::debug!(
        t = t_statistic,
        p = p_value,
        df = degrees_of_freedom,
        "comparison computed"
    );

    let per_group = BTreeMap::from([
        (
            Group::A,
            GroupStats {
                count: values_a.len(),
                mean: mean_a,
                std_dev: var_a.sqrt(),
            },
        ),
        (
            Group::B,
            GroupStats {
                count: values_b.len(),
                mean: mean_b,
                std_dev: var_b.sqrt(),
            },
        ),
    ]);
    let raw_values = BTreeMap::from([(Group::A, values_a), (Group::B, values_b)]);

    Ok(ComparisonResult {
        t_statistic,
        p_value,
        degrees_of_freedom,
        per_group,
        raw_values,
    })
}

/// Arithmetic mean. Caller guarantees a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with Bessel's correction. Caller guarantees at least two
/// values.
fn sample_variance(values: &[f64], mean: f64) -> f64 {
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    ss / (values.len() - 1) as f64
}

/// Two-sided tail probability of `|t|` under Student's t distribution.
///
/// `df` is positive and finite whenever both groups hold at least two
/// observations and one variance is non-zero.
fn two_sided_p(t: f64, df: f64) -> f64 {
    let dist = StudentsT::new(0.0, 1.0, df).expect("degrees of freedom must be positive");
    (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0)
}
