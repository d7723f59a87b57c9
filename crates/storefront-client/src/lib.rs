//! # storefront-client: HTTP Services for the Lesson Storefront
//!
//! Everything that leaves the process lives here: the catalog and order
//! services and the configuration that points at them.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Client Layer                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  Runtime (apps/storefront)                       │  │
//! │  │   holds Arc<dyn CatalogService> + Arc<dyn OrderService>          │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ StorefrontApi  │  │ Storefront-    │  │  ClientError           │    │
//! │  │                │  │ Config         │  │                        │    │
//! │  │ reqwest client │  │ defaults, TOML │  │ → FetchFailure         │    │
//! │  │ /lessons       │  │ and env vars   │  │ → OrderFailure         │    │
//! │  │ /search /orders│  │                │  │   (core types)         │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`api`] - `CatalogService`/`OrderService` traits and the reqwest client
//! - [`config`] - Storefront configuration (API URL, timeouts, initial sort)
//! - [`error`] - Client error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_client::{CatalogService, StorefrontApi, StorefrontConfig};
//!
//! let config = StorefrontConfig::load(None)?;
//! let api = StorefrontApi::new(&config.api)?;
//! let lessons = api.load_all().await?;
//! println!("{} lessons", lessons.len());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{CatalogService, OrderService, StorefrontApi};
pub use config::{ApiSettings, CatalogSettings, StorefrontConfig};
pub use error::{ClientError, ClientResult};
