//! # Pedido Storefront
//!
//! Runs one customer's ordering session against `pedido-core`.
//!
//! ## Module Organization
//! ```text
//! pedido_storefront/
//! ├── lib.rs          ◄─── Logging setup & run
//! ├── session.rs      ◄─── stdin command loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── menu.rs     ◄─── Menu loaded from config
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── delivery.rs ◄─── Delivery form + address warning
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── menu.rs     ◄─── Menu listing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── delivery.rs ◄─── Delivery selection and address
//! │   └── checkout.rs ◄─── Checkout gate + order commit
//! ├── clock.rs        ◄─── Local hour source
//! ├── notify.rs       ◄─── Toasts and the address warning
//! ├── messaging.rs    ◄─── Order text and wa.me link
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod clock;
pub mod commands;
pub mod error;
pub mod messaging;
pub mod notify;
pub mod session;
pub mod state;

use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clock::SystemClock;
use error::ApiError;
use notify::ConsoleNotifier;
use session::Session;
use state::ConfigState;

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration (file, then `PEDIDO_*` env overrides)
/// 2. Build the menu and an empty cart
/// 3. Read commands until `quit` or end of input
pub fn run(config_path: Option<PathBuf>) -> Result<(), ApiError> {
    let config = ConfigState::load(config_path)?;
    info!(
        store = %config.store_name,
        menu_items = config.menu.len(),
        combos = config.combos.len(),
        "Starting storefront session"
    );

    let mut session = Session::new(config, SystemClock, ConsoleNotifier::stdout())?;
    let stdin = io::stdin();
    session.run(stdin.lock(), &mut io::stdout())?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=pedido_storefront=trace` - Trace for this crate only
/// - Default: INFO, DEBUG for the storefront
///
/// Logs go to stderr so they never mix with the session output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pedido_storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
