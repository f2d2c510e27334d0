use super::demo::{run_committees, run_demo, run_lookup, run_suggest, DemoArgs, QueryArgs};
use super::server;
use crate::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Noordwijk MUN Student Portal",
    about = "Serve and query the conference student portal from the command line",
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
    /// Resolve an email or full name to its committee assignments
    Lookup(QueryArgs),
    /// Show the suggestions offered while typing a query
    Suggest(QueryArgs),
    /// List committees, or show one committee's delegations
    Committees(CommitteesArgs),
    /// Replay a keystroke script through the suggestion list
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
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct RosterArgs {
    /// Roster CSV export to load instead of the built-in rosters
    /// (format: data/rosters.sample.csv)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CommitteesArgs {
    /// Committee code such as UNSC or WHO
    pub(crate) code: Option<String>,
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lookup(args) => run_lookup(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Committees(args) => run_committees(args),
        Command::Demo(args) => run_demo(args),
    }
}
