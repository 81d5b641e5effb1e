mod cli;
mod infra;
mod routes;
mod server;
mod text;

use happylens::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
