use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use distr_core::{DistributionSummary, DEFAULT_MIN_VALUE};
use distr_reader::{fingerprint, ReaderConfig};
use serde::Serialize;

use super::{load, print_json};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output file of the producing executable.
    pub file: PathBuf,
    /// Threshold applied to the reported integrals.
    #[arg(long = "min-value", default_value_t = DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    pub min_value: f64,
}

#[derive(Debug, Serialize)]
struct ListEntry {
    index: usize,
    #[serde(flatten)]
    summary: DistributionSummary,
    sha256: String,
}

pub fn run(args: &ListArgs, config: &ReaderConfig) -> Result<(), Box<dyn Error>> {
    let distrs = load(&args.file, config)?;
    for (index, distr) in distrs.iter().enumerate() {
        let entry = ListEntry {
            index,
            summary: DistributionSummary::from_distribution(distr, args.min_value),
            sha256: fingerprint(distr)?,
        };
        print_json(&entry)?;
    }
    Ok(())
}
