use std::error::Error;

use clap::Args;
use distr_reader::ReaderConfig;
use serde_json::json;

use super::{load, print_json, selected, SelectArgs};

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub select: SelectArgs,
    /// Axis to project onto (zero based).
    #[arg(long)]
    pub axis: usize,
}

pub fn run(args: &ProjectArgs, config: &ReaderConfig) -> Result<(), Box<dyn Error>> {
    let distrs = load(&args.select.file, config)?;
    for distr in selected(&distrs, &args.select) {
        let projection = distr.projection(args.axis, args.select.min_value)?;
        print_json(&json!({
            "name": distr.name(),
            "pol_config": distr.pol_config(),
            "axis": args.axis,
            "min_value": args.select.min_value,
            "centers": projection.centers,
            "values": projection.values,
        }))?;
    }
    Ok(())
}
