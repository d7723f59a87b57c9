//! # App Error Type
//!
//! Errors that stop the storefront process. Request failures never get
//! here: they are folded into the view state by the reducer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Startup                         Runtime                                │
//! │  ───────                         ───────                                │
//! │                                                                         │
//! │  StorefrontConfig::load                                                 │
//! │  StorefrontApi::new ──┐          load/search/order failure              │
//! │  (config, HTTP client)│               │                                 │
//! │                       ▼               ▼                                 │
//! │                   AppError       FetchFailure / OrderFailure            │
//! │                       │               │                                 │
//! │                       ▼               ▼                                 │
//! │                 process exits    state.error / checkout message         │
//! │                                                                         │
//! │  Rendering the view as JSON can also fail (AppError::Render).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_client::ClientError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP client could not be built, or config was rejected.
    #[error("Client setup failed: {0}")]
    Client(#[from] ClientError),

    /// View snapshot could not be serialized.
    #[error("Failed to render view: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Client(err) if err.is_config_error() => 78,
            AppError::Client(_) => 69,
            AppError::Render(_) => 70,
        }
    }
}
