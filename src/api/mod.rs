//! HTTP and command-line entry points for the portal.

mod cli;
mod demo;
mod infra;
pub mod routes;
mod server;

use crate::error::AppError;

pub use routes::with_portal_routes;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
