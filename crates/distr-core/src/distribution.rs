use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{DistrError, ErrorInfo};

/// Threshold used when callers do not want to cut on bin values.
pub const DEFAULT_MIN_VALUE: f64 = 0.0;

/// A single histogram cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    centers: Vec<f64>,
    value: f64,
}

impl Bin {
    /// Creates a bin from its per-axis centers and its weight.
    pub fn new(centers: Vec<f64>, value: f64) -> Self {
        Self { centers, value }
    }

    /// Bin center coordinates, one per axis.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Bin weight.
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Deserialize)]
struct RawDistribution {
    name: String,
    pol_config: String,
    dim: usize,
    n_bins: usize,
    bins: Vec<Bin>,
}

impl TryFrom<RawDistribution> for Distribution {
    type Error = DistrError;

    fn try_from(raw: RawDistribution) -> Result<Self, Self::Error> {
        Distribution::new(raw.name, raw.pol_config, raw.dim, raw.n_bins, raw.bins)
    }
}

/// Decoded distribution of arbitrary dimensionality.
///
/// The bin count and the length of every bin's centers are checked on
/// construction, so `bins().len() == n_bins()` and
/// `bin.centers().len() == dim()` always hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDistribution")]
pub struct Distribution {
    name: String,
    pol_config: String,
    dim: usize,
    n_bins: usize,
    bins: Vec<Bin>,
}

/// Result of [`Distribution::projection`]: ascending axis coordinates and the
/// summed bin values belonging to each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Projection {
    /// Distinct coordinates on the projected axis, sorted ascending.
    pub centers: Vec<f64>,
    /// Summed values, index-aligned with `centers`.
    pub values: Vec<f64>,
}

impl Projection {
    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Whether the projection holds no coordinate at all.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Splits the projection into its two parallel sequences.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.centers, self.values)
    }
}

impl Distribution {
    /// Builds a distribution, validating the declared shape against the bins.
    pub fn new(
        name: impl Into<String>,
        pol_config: impl Into<String>,
        dim: usize,
        n_bins: usize,
        bins: Vec<Bin>,
    ) -> Result<Self, DistrError> {
        let name = name.into();
        if dim == 0 {
            return Err(DistrError::MalformedRecord(
                ErrorInfo::new("dim_zero", "distribution must have at least one axis")
                    .with_context("name", &name),
            ));
        }
        if bins.len() != n_bins {
            return Err(DistrError::MalformedRecord(
                ErrorInfo::new("bin_count_mismatch", "bin count differs from declared NBins")
                    .with_context("name", &name)
                    .with_context("declared", n_bins)
                    .with_context("actual", bins.len()),
            ));
        }
        if let Some(idx) = bins.iter().position(|bin| bin.centers.len() != dim) {
            return Err(DistrError::MalformedRecord(
                ErrorInfo::new("bin_dim_mismatch", "bin centers differ from declared Dim")
                    .with_context("name", &name)
                    .with_context("bin", idx)
                    .with_context("dim", dim)
                    .with_context("centers", bins[idx].centers.len()),
            ));
        }
        Ok(Self {
            name,
            pol_config: pol_config.into(),
            dim,
            n_bins,
            bins,
        })
    }

    /// Distribution identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque polarisation configuration tag.
    pub fn pol_config(&self) -> &str {
        &self.pol_config
    }

    /// Number of coordinate axes.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Declared (and actual) number of bins.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Bins in file order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Collapses every axis except `axis` by summing bin values that share a
    /// coordinate on it.
    ///
    /// Bins with `value <= min_value` contribute nothing, but their coordinate
    /// still shows up in the result (with 0 if no other bin adds to it).
    /// Coordinates are grouped by exact equality.
    pub fn projection(&self, axis: usize, min_value: f64) -> Result<Projection, DistrError> {
        if axis >= self.dim {
            return Err(DistrError::Range(
                ErrorInfo::new("axis_out_of_range", "projection axis out of range")
                    .with_context("axis", axis)
                    .with_context("dim", self.dim)
                    .with_context("name", &self.name)
                    .with_hint(format!("valid axes are 0..{}", self.dim)),
            ));
        }

        let mut sums: HashMap<u64, (f64, f64)> = HashMap::new();
        for bin in &self.bins {
            let center = bin.centers[axis];
            let entry = sums.entry(group_key(center)).or_insert((center, 0.0));
            if bin.value > min_value {
                entry.1 += bin.value;
            }
        }

        let mut grouped: Vec<(f64, f64)> = sums.into_values().collect();
        grouped.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (centers, values) = grouped.into_iter().unzip();
        Ok(Projection { centers, values })
    }

    /// Sums the values of all bins above `min_value`. Bins at or below the
    /// threshold are left out entirely.
    pub fn integral(&self, min_value: f64) -> f64 {
        self.bins
            .iter()
            .map(Bin::value)
            .filter(|value| *value > min_value)
            .sum()
    }
}

// Signed zeros compare equal and must share a group.
fn group_key(center: f64) -> u64 {
    if center == 0.0 {
        0.0f64.to_bits()
    } else {
        center.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_groups_together() {
        let distr = Distribution::new(
            "z",
            "e-p+",
            1,
            2,
            vec![Bin::new(vec![-0.0], 1.0), Bin::new(vec![0.0], 2.0)],
        )
        .unwrap();
        let projection = distr.projection(0, DEFAULT_MIN_VALUE).unwrap();
        assert_eq!(projection.len(), 1);
        assert_eq!(projection.values, vec![3.0]);
    }

    #[test]
    fn empty_distribution_integrates_to_zero() {
        let distr = Distribution::new("empty", "", 2, 0, Vec::new()).unwrap();
        assert_eq!(distr.integral(DEFAULT_MIN_VALUE), 0.0);
        assert!(distr.projection(1, DEFAULT_MIN_VALUE).unwrap().is_empty());
    }
}
