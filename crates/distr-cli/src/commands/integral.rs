use std::error::Error;

use clap::Args;
use distr_reader::ReaderConfig;
use serde_json::json;

use super::{load, print_json, selected, SelectArgs};

#[derive(Args, Debug)]
pub struct IntegralArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}

pub fn run(args: &IntegralArgs, config: &ReaderConfig) -> Result<(), Box<dyn Error>> {
    let distrs = load(&args.select.file, config)?;
    for distr in selected(&distrs, &args.select) {
        print_json(&json!({
            "name": distr.name(),
            "pol_config": distr.pol_config(),
            "min_value": args.select.min_value,
            "integral": distr.integral(args.select.min_value),
        }))?;
    }
    Ok(())
}
