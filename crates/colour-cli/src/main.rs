//! colour - RGB/CMYK/HSV conversion CLI
//!
//! Converts and range-checks single colour values.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colour_core::ModelId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "colour")]
#[command(author, version, about = "Convert colour values between RGB, CMYK and HSV")]
#[command(long_about = "
Converts and validates single colour values.

Channel ranges: RGB 0-255, CMYK 0-100, HSV hue 0-360 with saturation and
value 0-100. Values are given in the model's channel order.

Examples:
  colour convert rgb 255 0 0 --to hsv       # HSV(h=0 s=1 v=1)
  colour convert cmyk 0 0 0 50 --to rgb     # RGB(r=127.5 g=127.5 b=127.5)
  colour convert hsv 120 1 1 --to rgb --json
  colour check cmyk 0 0 0 101               # fails: k out of range
  colour models                             # list channel ranges
  RUST_LOG=trace colour convert rgb 1 1 1 --to cmyk
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a colour to another model
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Check that a colour is within its model's ranges
    Check(CheckArgs),

    /// List models and their channel ranges
    #[command(visible_alias = "m")]
    Models,
}

#[derive(Args)]
struct ConvertArgs {
    /// Source model: rgb, cmyk, hsv
    from: ModelId,

    /// Channel values in the source model's order
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Target model: rgb, cmyk, hsv
    #[arg(short, long)]
    to: ModelId,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Model: rgb, cmyk, hsv
    model: ModelId,

    /// Channel values in the model's order
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Models => commands::models::run(),
    }
}
