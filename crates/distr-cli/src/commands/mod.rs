use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use distr_core::{select, Distribution, DEFAULT_MIN_VALUE};
use distr_reader::{load_config, read_with, ReaderConfig};
use tracing::warn;

pub mod export;
pub mod integral;
pub mod list;
pub mod project;
pub mod rewrite;

/// Input file plus the name/configuration filters shared by the query commands.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Output file of the producing executable.
    pub file: PathBuf,
    /// Only use distributions with this name.
    #[arg(long)]
    pub name: Option<String>,
    /// Only use distributions with this polarisation configuration.
    #[arg(long = "pol-config")]
    pub pol_config: Option<String>,
    /// Bins with a value at or below this threshold are cut.
    #[arg(long = "min-value", default_value_t = DEFAULT_MIN_VALUE, allow_hyphen_values = true)]
    pub min_value: f64,
}

pub fn load_reader_config(path: Option<&Path>) -> Result<ReaderConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(ReaderConfig::default()),
    }
}

pub fn load(file: &Path, config: &ReaderConfig) -> Result<Vec<Distribution>, Box<dyn Error>> {
    Ok(read_with(file, config)?)
}

pub fn selected<'a>(distrs: &'a [Distribution], args: &SelectArgs) -> Vec<&'a Distribution> {
    let hits = select(distrs, args.name.as_deref(), args.pol_config.as_deref());
    if hits.is_empty() {
        warn!(
            name = args.name.as_deref().unwrap_or("*"),
            pol_config = args.pol_config.as_deref().unwrap_or("*"),
            "no distribution matches the selection"
        );
    }
    hits
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let bytes = distr_reader::serde::to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(bytes)?);
    Ok(())
}
