use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use distr_reader::{write_file, ReaderConfig};

use super::load;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Output file of the producing executable.
    pub file: PathBuf,
    /// Destination text file.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &RewriteArgs, config: &ReaderConfig) -> Result<(), Box<dyn Error>> {
    let distrs = load(&args.file, config)?;
    write_file(&args.out, &distrs, &config.markers)?;
    Ok(())
}
