//! # FoodExpress Terminal Library
//!
//! Console checkout built on foodexpress-core.
//!
//! ## Module Organization
//! ```text
//! foodexpress_terminal_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Defaults, terminal.toml, FOODEXPRESS_* env
//! ├── console.rs      ◄─── Prompts, selection parsing, rendering
//! ├── kitchen.rs      ◄─── Preparation task + oneshot status handoff
//! ├── checkout.rs     ◄─── The flow and its error boundary
//! └── error.rs        ◄─── AppError
//! ```

pub mod checkout;
pub mod config;
pub mod console;
pub mod error;
pub mod kitchen;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::checkout::run_session;
use crate::config::TerminalConfig;
use crate::error::AppResult;

/// Runs one interactive checkout on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration (defaults → terminal.toml → env)
/// 2. Initialize tracing (stderr)
/// 3. Run the checkout session
///
/// Only configuration failures are returned; a failed order is reported on
/// the console and still counts as a normal exit.
pub async fn run() -> AppResult<()> {
    let config = TerminalConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        store = %config.store_name,
        tax_rate = %config.tax_rate,
        prep_delay_ms = config.prep_delay.as_millis() as u64,
        "Starting FoodExpress terminal"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let status = run_session(&config, &mut input, &mut output).await;
    info!(%status, "Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set (e.g. `RUST_LOG=foodexpress_terminal_lib=debug`)
/// - Otherwise the configured filter, `warn` by default
///
/// Logs go to stderr so they never interleave with the receipt.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
