use crate::demo::{run_check, run_demo, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loanbridge::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loanbridge Lead Funnel",
    about = "Run the loan eligibility lead funnel as an HTTP service or from the command line",
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
    /// Run a one-shot eligibility check and print the verdict as JSON
    Check(CheckArgs),
    /// Walk through classification, suggestions, and eligibility end to end
    Demo(DemoArgs),
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
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
    }
}
