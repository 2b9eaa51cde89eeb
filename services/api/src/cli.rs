use crate::commands::{run_import, run_inspect, run_validate, ImportArgs, InspectArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use listing_flow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Listing Flow",
    about = "Detect listing flows, validate wizard steps, and render property details",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the detected flow and display view for a property record
    Inspect(InspectArgs),
    /// Validate one wizard step of a form submission
    Validate(ValidateArgs),
    /// Summarize every record in a listing table export
    Import(ImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Inspect(args) => run_inspect(args),
        Command::Validate(args) => run_validate(args),
        Command::Import(args) => run_import(args),
    }
}
