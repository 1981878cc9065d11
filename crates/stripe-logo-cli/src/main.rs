//! stripe-logo - cut a logo into coloured stripes
//!
//! Usage:
//!   stripe-logo generate <stripes> <height>   Render logo.svg from base.poly, clip.poly, colours.txt, outline.svg
//!   stripe-logo generate --config job.yaml    Same, with settings from a YAML file
//!   stripe-logo inspect <file>                Describe a .poly file or a rendered SVG

mod cli;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cli::{GenerateArgs, InspectArgs, cmd_generate, cmd_inspect};

#[derive(Parser, Debug)]
#[command(name = "stripe-logo", version, about = "Cut a polygon into coloured stripes and render them as SVG")]
struct Args {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clip the base shape into stripes and write the SVG (or JSON)
    Generate(GenerateArgs),
    /// Print a summary of a vertex file or SVG document
    Inspect(InspectArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Command::Generate(args) => cmd_generate(&args),
        Command::Inspect(args) => cmd_inspect(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
