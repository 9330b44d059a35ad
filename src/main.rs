//! sol-transfer
//!
//! Performs the one transfer described in `config.toml`.
//!
//! # Flow
//!
//! ```text
//!   config.toml ──▶ loader ──▶ validator ──▶ balance check ──▶ blockhash
//!                                                                 │
//!   stdout ◀── "Transaction successful" ◀── submit ◀── sign ◀── build
//! ```
//!
//! Any failure prints one `error:` line on stderr and exits with the code
//! chosen by [`AppError::exit_code`].

use std::path::Path;
use std::process::ExitCode;

use sol_transfer::config::DEFAULT_CONFIG_PATH;
use sol_transfer::lifecycle;
use sol_transfer::observability::logging::init_logging;
use sol_transfer::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    tracing::info!("sol-transfer v{} starting", env!("CARGO_PKG_VERSION"));

    match lifecycle::run(Path::new(DEFAULT_CONFIG_PATH)).await {
        Ok(signature) => {
            println!("Transaction Signature: {}", signature);
            println!("Transaction successful");
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn report(err: AppError) -> ExitCode {
    let code = err.exit_code();
    tracing::debug!(exit_code = code, error = ?err, "Transfer aborted");
    eprintln!("error: {}", err);
    ExitCode::from(code)
}
