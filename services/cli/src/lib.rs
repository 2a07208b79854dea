mod cli;
mod commands;
mod infra;

use parcel_exchange::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
