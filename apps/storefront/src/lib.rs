//! # Storefront App Library
//!
//! Wires configuration, logging and the HTTP services to the pure reducer.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── runtime.rs      ◄─── Storefront: dispatch, effects, settle
//! └── error.rs        ◄─── AppError for startup and rendering
//! ```

pub mod error;
pub mod runtime;

use storefront_client::StorefrontConfig;
use storefront_core::Command;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, AppResult};
pub use runtime::Storefront;

/// Runs the headless storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info, storefront crates at debug; RUST_LOG overrides     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → STOREFRONT_* env vars                │
/// │                                                                         │
/// │  3. Mount ────────────────────────────────────────────────────────────► │
/// │     • initial catalog load, then an optional search                     │
/// │                                                                         │
/// │  4. Print the view snapshot as JSON                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(search: Option<String>) -> AppResult<()> {
    init_tracing();

    info!("Starting lesson storefront");

    let config = StorefrontConfig::load(None)?;
    let mut storefront = Storefront::from_config(&config)?;

    storefront.mount();
    storefront.settle().await;

    if let Some(query) = search {
        storefront.dispatch(Command::SetSearchQuery(query));
        storefront.dispatch(Command::Search);
        storefront.settle().await;
    }

    let view = storefront.view();
    info!(
        lessons = view.lessons.len(),
        error = ?view.error,
        "Storefront ready"
    );
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: `info,storefront=debug,reqwest=warn`
///
/// Logs go to stderr so stdout carries only the JSON view.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,reqwest=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
