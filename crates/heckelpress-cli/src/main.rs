use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use heckelpress_cli::commands::{calc, curve, materials};
use heckelpress_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Heckel compaction press tonnage utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full tonnage calculation and optionally export CSV/PNG artifacts.
    Calc(calc::CalcArgs),
    /// Print pressure/tonnage curve samples for a material and geometry.
    Curve(curve::CurveArgs),
    /// List materials available from the built-in table or a catalog file.
    Materials(materials::MaterialsArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Calc(args) => calc::handle_calc(args, cli.format),
        Command::Curve(args) => curve::handle_curve(args, cli.format),
        Command::Materials(args) => materials::handle_list_materials(args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
