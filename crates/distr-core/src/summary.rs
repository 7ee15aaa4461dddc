//! Lookup and summary helpers over decoded distributions.

use serde::{Deserialize, Serialize};

use crate::Distribution;

/// Compact description of a distribution for listings and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Distribution identifier.
    pub name: String,
    /// Polarisation configuration tag.
    pub pol_config: String,
    /// Number of coordinate axes.
    pub dim: usize,
    /// Number of bins.
    pub n_bins: usize,
    /// Integral above the threshold the summary was built with.
    pub integral: f64,
    /// Threshold applied to the integral.
    pub min_value: f64,
}

impl DistributionSummary {
    /// Summarises `distr`, integrating bins above `min_value`.
    pub fn from_distribution(distr: &Distribution, min_value: f64) -> Self {
        Self {
            name: distr.name().to_string(),
            pol_config: distr.pol_config().to_string(),
            dim: distr.dim(),
            n_bins: distr.n_bins(),
            integral: distr.integral(min_value),
            min_value,
        }
    }
}

/// Returns the distributions matching `name` and `pol_config`, in input order.
/// A `None` filter matches everything.
pub fn select<'a>(
    distrs: &'a [Distribution],
    name: Option<&str>,
    pol_config: Option<&str>,
) -> Vec<&'a Distribution> {
    distrs
        .iter()
        .filter(|distr| name.map_or(true, |name| distr.name() == name))
        .filter(|distr| pol_config.map_or(true, |pol| distr.pol_config() == pol))
        .collect()
}
