use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    export::{self, ExportArgs},
    integral::{self, IntegralArgs},
    list::{self, ListArgs},
    project::{self, ProjectArgs},
    rewrite::{self, RewriteArgs},
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "distr", version, about = "Inspect distributions in simulation output files")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML reader configuration (record markers).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one JSON summary line per distribution.
    List(ListArgs),
    /// Print the integral of the selected distributions.
    Integral(IntegralArgs),
    /// Print the projection of the selected distributions onto one axis.
    Project(ProjectArgs),
    /// Write all distributions as canonical JSON.
    Export(ExportArgs),
    /// Re-emit all distributions in the text record format.
    Rewrite(RewriteArgs),
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    let config = commands::load_reader_config(cli.config.as_deref())?;
    match cli.command {
        Command::List(args) => list::run(&args, &config),
        Command::Integral(args) => integral::run(&args, &config),
        Command::Project(args) => project::run(&args, &config),
        Command::Export(args) => export::run(&args, &config),
        Command::Rewrite(args) => rewrite::run(&args, &config),
    }
}
