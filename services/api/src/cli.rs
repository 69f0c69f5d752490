use crate::demo::{run_demo, run_seed, DemoArgs, SeedArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_track::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Track",
    about = "Run the interview pipeline service and its demo tooling from the command line",
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
    /// Seed an in-memory store with the demo hiring dataset and print counts
    Seed(SeedArgs),
    /// Run an end-to-end CLI demo covering the board and a stage move
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
    /// Seed the demo hiring dataset before serving
    #[arg(long)]
    pub(crate) seed: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Seed(args) => run_seed(args),
        Command::Demo(args) => run_demo(args),
    }
}
