use crate::demo::{run_demo, DemoArgs};
use crate::screen::{run_screen, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use resume_screener::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "resume-screener",
    about = "Score and rank resumes against a job description",
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
    /// Screen a candidate pool against a job description file
    Screen(ScreenArgs),
    /// Rank the built-in sample resumes against the sample job description
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
        Command::Screen(args) => run_screen(args),
        Command::Demo(args) => run_demo(args),
    }
}
