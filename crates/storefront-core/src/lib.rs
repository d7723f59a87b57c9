//! # storefront-core: Pure View-Model Logic for the Lesson Storefront
//!
//! Everything the storefront decides lives here as plain data and pure
//! functions. Network calls happen elsewhere; this crate only describes them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Lesson Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Template / DOM layer                         │   │
//! │  │    Lesson list ──► Sort bar ──► Cart ──► Checkout modal        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command / StorefrontView               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (runtime)                       │   │
//! │  │    dispatch, perform effects, feed completions back             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   state   │  │   sort    │  │   cart    │  │ checkout  │  │   │
//! │  │   │  update() │  │  compare  │  │   Cart    │  │  phases   │  │   │
//! │  │   │  Command  │  │  Asc/Desc │  │ CartLine  │  │ complete  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           storefront-client (HTTP services, config)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The reducer: `update(state, command) -> (state, effects)`
//! - [`types`] - Lessons, cart lines, order wire types
//! - [`money`] - Integer-cent money with decimal wire format
//! - [`sort`] - Catalog ordering
//! - [`cart`] - Duplicate-free cart and its total
//! - [`checkout`] - Checkout modal state machine
//! - [`presentation`] - Icons and availability classes
//! - [`view`] - Flattened snapshot for rendering
//! - [`validation`] - Search and customer form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::state::{update, Command, Effect, StorefrontState};
//!
//! let (state, effects) = update(StorefrontState::default(), Command::LoadLessons);
//! assert!(state.is_loading());
//! assert_eq!(effects, vec![Effect::FetchLessons { generation: 1 }]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod presentation;
pub mod sort;
pub mod state;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use checkout::CheckoutPhase;
pub use error::{CoreError, FetchFailure, OrderFailure, ValidationError};
pub use money::Money;
pub use state::{update, Command, Effect, Notice, NoticeLevel, StorefrontState};
pub use types::*;
pub use view::StorefrontView;
