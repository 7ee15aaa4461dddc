use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use distr_reader::serde::distributions_to_json;
use distr_reader::ReaderConfig;
use tracing::info;

use super::load;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file of the producing executable.
    pub file: PathBuf,
    /// Destination JSON file.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ExportArgs, config: &ReaderConfig) -> Result<(), Box<dyn Error>> {
    let distrs = load(&args.file, config)?;
    let bytes = distributions_to_json(&distrs)?;
    fs::write(&args.out, bytes)?;
    info!(out = %args.out.display(), distributions = distrs.len(), "exported distributions");
    Ok(())
}
