//! # Storefront Runtime
//!
//! Owns the current [`StorefrontState`] and performs the reducer's effects.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Runtime Event Loop                               │
//! │                                                                         │
//! │   dispatch(cmd) ──► update(state, cmd) ──► (state', effects)           │
//! │                                                  │                      │
//! │                     ┌────────────────────────────┘                      │
//! │                     ▼                                                   │
//! │   JoinSet<Command>: one task per effect                                │
//! │     FetchLessons   ──► catalog.load_all()   ──► LessonsLoaded          │
//! │     SearchLessons  ──► catalog.search(q)    ──► SearchCompleted        │
//! │     PlaceOrder     ──► orders.place_order() ──► OrderCompleted         │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │   settle(): join_next() ──► dispatch(completion) ──► ... until empty   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks may finish in any order. The reducer drops completions whose
//! generation is no longer current; the runtime only logs them.

use std::sync::Arc;

use storefront_client::{CatalogService, ClientError, OrderService, StorefrontApi, StorefrontConfig};
use storefront_core::state::{update, Command, Effect, Notice, StorefrontState};
use storefront_core::StorefrontView;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::AppResult;

/// The running storefront.
pub struct Storefront {
    state: StorefrontState,
    catalog: Arc<dyn CatalogService>,
    orders: Arc<dyn OrderService>,
    in_flight: JoinSet<Command>,
}

impl Storefront {
    /// Creates a storefront with the configured initial sort.
    pub fn new(
        config: &StorefrontConfig,
        catalog: Arc<dyn CatalogService>,
        orders: Arc<dyn OrderService>,
    ) -> Self {
        let (field, direction) = config.default_sort();
        Storefront {
            state: StorefrontState::new(field, direction),
            catalog,
            orders,
            in_flight: JoinSet::new(),
        }
    }

    /// Creates a storefront backed by the HTTP API.
    pub fn from_config(config: &StorefrontConfig) -> AppResult<Self> {
        let api = Arc::new(StorefrontApi::new(&config.api)?);
        info!(base_url = api.base_url(), "Storefront API configured");
        Ok(Self::new(config, api.clone(), api))
    }

    /// Initial catalog load. Call once the view is attached.
    pub fn mount(&mut self) {
        info!("Mounting storefront");
        self.dispatch(Command::LoadLessons);
    }

    /// Applies one command and starts any requests it asks for.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, command: Command) {
        if self.state.is_stale(&command) {
            warn!(?command, "Discarding stale completion");
            return;
        }
        debug!(?command, "Dispatching command");

        let (next, effects) = update(std::mem::take(&mut self.state), command);
        self.state = next;

        for effect in effects {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: Effect) {
        match effect {
            Effect::FetchLessons { generation } => {
                let catalog = Arc::clone(&self.catalog);
                self.in_flight.spawn(async move {
                    let result = catalog
                        .load_all()
                        .await
                        .map_err(ClientError::into_fetch_failure);
                    Command::LessonsLoaded { generation, result }
                });
            }

            Effect::SearchLessons { query, generation } => {
                let catalog = Arc::clone(&self.catalog);
                self.in_flight.spawn(async move {
                    let result = catalog
                        .search(&query)
                        .await
                        .map_err(ClientError::into_fetch_failure);
                    Command::SearchCompleted { generation, result }
                });
            }

            Effect::PlaceOrder { order, generation } => {
                let orders = Arc::clone(&self.orders);
                self.in_flight.spawn(async move {
                    let result = orders
                        .place_order(&order)
                        .await
                        .map_err(ClientError::into_order_failure);
                    Command::OrderCompleted { generation, result }
                });
            }
        }
    }

    /// Waits for the next request to finish and returns its completion.
    ///
    /// `None` once nothing is in flight. Panicked tasks are logged and skipped.
    pub async fn next_completion(&mut self) -> Option<Command> {
        while let Some(joined) = self.in_flight.join_next().await {
            match joined {
                Ok(command) => return Some(command),
                Err(err) => error!(error = %err, "Request task failed"),
            }
        }
        None
    }

    /// Feeds completions back until no request is in flight, including the
    /// ones those completions start (a reload after an order).
    pub async fn settle(&mut self) {
        while let Some(command) = self.next_completion().await {
            self.dispatch(command);
        }
    }

    /// Number of requests still running.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    pub fn view(&self) -> StorefrontView {
        StorefrontView::from_state(&self.state)
    }

    /// Returns queued notices and clears them from the state.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        let notices = self.state.notices().to_vec();
        if !notices.is_empty() {
            self.dispatch(Command::DismissNotices);
        }
        notices
    }
}
