use crate::render::{run_assess, run_stats, AssessArgs, StatsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use daylight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Daylight Assessment Service",
    about = "Estimate daylighting metrics for a window from the reference dataset",
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
    /// Run a one-shot assessment and print the result
    Assess(AssessArgs),
    /// Print statistics for the reference dataset
    Stats(StatsArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Stats(args) => run_stats(args),
    }
}
