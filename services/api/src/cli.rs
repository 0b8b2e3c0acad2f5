use crate::commands::{run_estimate, run_mortgage, EstimateArgs, MortgageArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use realty_calc::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Brokerage Calculators",
    about = "Serve or run the mortgage calculator and home-value estimator from the command line",
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
    /// Compute a monthly payment breakdown for a fixed-rate loan
    Mortgage(MortgageArgs),
    /// Estimate a home's market value from its address and details
    Estimate(EstimateArgs),
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
        Command::Mortgage(args) => run_mortgage(args),
        Command::Estimate(args) => run_estimate(args),
    }
}
