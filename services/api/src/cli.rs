use crate::report::{run_events_report, EventsArgs};
use crate::server;
use campus_events::config::AppConfig;
use campus_events::error::AppError;
use campus_events::telemetry;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Campus Events",
    about = "Serve and inspect role-aware activity listings for the campus activity board",
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
    /// Render an event listing from exported activity and application JSON
    Events(EventsArgs),
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
        Command::Events(args) => {
            let config = AppConfig::load()?;
            telemetry::init(&config.telemetry)?;
            run_events_report(args)
        }
    }
}
