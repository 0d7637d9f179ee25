mod cli;
mod demo;
mod infra;
mod routes;
mod screen;
mod server;

use resume_screener::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
