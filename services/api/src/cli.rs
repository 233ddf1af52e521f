use crate::commands::{run_reconcile, run_solve, ReconcileArgs, SolveArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use leasing_solver::config::AppConfig;
use leasing_solver::error::AppError;
use leasing_solver::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Leasing Solver",
    about = "Resolve rent gaps and sweep stale availability listings",
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
    /// Pick the amenity adjustments that best close a rent gap
    Solve(SolveArgs),
    /// Classify availability listings against tenancy records
    Reconcile(ReconcileArgs),
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

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Solve(args) => run_solve(&config, args),
        Command::Reconcile(args) => run_reconcile(args),
    }
}
