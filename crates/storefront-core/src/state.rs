//! # Storefront State
//!
//! The whole view-model as one value, advanced by [`update`].
//!
//! ## Reducer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command → State → Effects                            │
//! │                                                                         │
//! │   UI event ──► Command ──► update(state, command) ──► (state', effects) │
//! │                                   ▲                          │          │
//! │                                   │                          ▼          │
//! │                       completion Command ◄── runtime performs effect    │
//! │                       (carries generation)     (HTTP, off the reducer)  │
//! │                                                                         │
//! │   Stale completions (generation != current) leave the state untouched. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Generations
//! Each request class (load, search, submit) owns a counter. Issuing a request
//! bumps it and tags the effect; only the completion carrying the latest value
//! is applied. A slow search can no longer overwrite a newer one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::checkout::{CheckoutPhase, CompletionTarget};
use crate::error::{CoreError, FetchFailure, OrderFailure};
use crate::money::Money;
use crate::sort::sort_lessons;
use crate::types::{
    CustomerInfo, Lesson, OrderReceipt, OrderRequest, SortDirection, SortField,
};
use crate::validation::validate_search_query;

// =============================================================================
// User-Facing Messages
// =============================================================================

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load lessons. Please try again later.";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";
pub const DUPLICATE_LESSON_MESSAGE: &str = "This lesson is already in your cart!";

// =============================================================================
// Commands & Effects
// =============================================================================

/// Everything that can happen to the storefront.
///
/// The first group comes from the UI; the `*Loaded`/`*Completed` variants are
/// fed back by the runtime when a request finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the full catalog (on mount, retry, and after an order).
    LoadLessons,
    LessonsLoaded {
        generation: u64,
        result: Result<Vec<Lesson>, FetchFailure>,
    },

    SetSearchQuery(String),
    /// Run the current search query; blank means "show all".
    Search,
    SearchCompleted {
        generation: u64,
        result: Result<Vec<Lesson>, FetchFailure>,
    },

    SetSortField(SortField),
    SetSortDirection(SortDirection),

    AddToCart(Lesson),

    OpenCheckout,
    SetCustomerName(String),
    SetCustomerPhone(String),
    SubmitOrder,
    OrderCompleted {
        generation: u64,
        result: Result<OrderReceipt, OrderFailure>,
    },
    CloseModal,

    /// Drop every pending notice (the UI has shown them).
    DismissNotices,
}

/// Work the runtime must perform on behalf of the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchLessons { generation: u64 },
    SearchLessons { query: String, generation: u64 },
    PlaceOrder { order: OrderRequest, generation: u64 },
}

// =============================================================================
// Notices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A one-shot message for the user (the template shows it as an alert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

// =============================================================================
// Request Generations
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RequestGenerations {
    load: u64,
    search: u64,
    submit: u64,
    /// An order is on the wire. Cleared only by its completion, even when the
    /// modal was closed meanwhile.
    order_pending: bool,
}

impl RequestGenerations {
    fn next(counter: &mut u64) -> u64 {
        *counter += 1;
        *counter
    }
}

// =============================================================================
// State
// =============================================================================

/// Snapshot of the storefront.
///
/// Fields are read through accessors; only [`update`] produces a new state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorefrontState {
    all_lessons: Vec<Lesson>,
    displayed_lessons: Vec<Lesson>,
    loading: bool,
    searching: bool,
    error: Option<String>,
    search_query: String,
    sort_field: SortField,
    sort_direction: SortDirection,
    cart: Cart,
    customer: CustomerInfo,
    checkout: CheckoutPhase,
    notices: Vec<Notice>,
    generations: RequestGenerations,
}

impl StorefrontState {
    /// Empty storefront with the given initial sort.
    pub fn new(sort_field: SortField, sort_direction: SortDirection) -> Self {
        StorefrontState {
            sort_field,
            sort_direction,
            ..Default::default()
        }
    }

    pub fn all_lessons(&self) -> &[Lesson] {
        &self.all_lessons
    }

    pub fn displayed_lessons(&self) -> &[Lesson] {
        &self.displayed_lessons
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn checkout(&self) -> &CheckoutPhase {
        &self.checkout
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// True when `command` is a completion for a request that has since been
    /// superseded. UI commands are never stale.
    pub fn is_stale(&self, command: &Command) -> bool {
        match command {
            Command::LessonsLoaded { generation, .. } => *generation != self.generations.load,
            Command::SearchCompleted { generation, .. } => *generation != self.generations.search,
            Command::OrderCompleted { generation, .. } => *generation != self.generations.submit,
            _ => false,
        }
    }

    fn resort(&mut self) {
        sort_lessons(&mut self.displayed_lessons, self.sort_field, self.sort_direction);
    }

    fn start_load(&mut self) -> Effect {
        self.loading = true;
        self.error = None;
        Effect::FetchLessons {
            generation: RequestGenerations::next(&mut self.generations.load),
        }
    }

    fn order_request(&self) -> OrderRequest {
        OrderRequest {
            name: self.customer.name.clone(),
            phone: self.customer.phone.clone(),
            lessons: self.cart.order_lines(),
            total_amount: self.cart.total(),
        }
    }
}

// =============================================================================
// Derived Values
// =============================================================================

/// Sum of cart line prices, computed on every call.
pub fn cart_total(state: &StorefrontState) -> Money {
    state.cart.total()
}

/// The lessons to render, in display order.
pub fn displayed_lessons(state: &StorefrontState) -> &[Lesson] {
    &state.displayed_lessons
}

/// Whether the submit button should be enabled.
///
/// Advisory: [`Command::SubmitOrder`] does not check the form.
pub fn can_submit(state: &StorefrontState) -> bool {
    !state.generations.order_pending
        && state.checkout.submit().is_ok()
        && state.customer.validate().is_ok()
}

// =============================================================================
// Reducer
// =============================================================================

/// Advances the storefront by one command.
///
/// ## Returns
/// The next state and the effects the runtime must perform, in order.
pub fn update(state: StorefrontState, command: Command) -> (StorefrontState, Vec<Effect>) {
    if state.is_stale(&command) {
        return (state, Vec::new());
    }

    let mut next = state;
    let mut effects = Vec::new();

    match command {
        // ---------------------------------------------------------------------
        // Catalog
        // ---------------------------------------------------------------------
        Command::LoadLessons => {
            effects.push(next.start_load());
        }

        Command::LessonsLoaded { result, .. } => {
            next.loading = false;
            match result {
                Ok(lessons) => {
                    next.displayed_lessons = lessons.clone();
                    next.all_lessons = lessons;
                    next.resort();
                }
                Err(_) => next.error = Some(LOAD_FAILED_MESSAGE.to_string()),
            }
        }

        Command::SetSearchQuery(query) => {
            next.search_query = query;
        }

        Command::Search => {
            // Any search, even a blank one, supersedes the one in flight.
            let generation = RequestGenerations::next(&mut next.generations.search);
            match validate_search_query(&next.search_query) {
                Ok(query) if query.is_empty() => {
                    next.searching = false;
                    next.displayed_lessons = next.all_lessons.clone();
                    next.resort();
                }
                Ok(query) => {
                    next.searching = true;
                    next.error = None;
                    effects.push(Effect::SearchLessons { query, generation });
                }
                Err(err) => {
                    next.searching = false;
                    next.error = Some(err.to_string());
                }
            }
        }

        Command::SearchCompleted { result, .. } => {
            next.searching = false;
            match result {
                Ok(lessons) => {
                    next.displayed_lessons = lessons;
                    next.resort();
                }
                Err(_) => next.error = Some(SEARCH_FAILED_MESSAGE.to_string()),
            }
        }

        Command::SetSortField(field) => {
            next.sort_field = field;
            next.resort();
        }

        Command::SetSortDirection(direction) => {
            next.sort_direction = direction;
            next.resort();
        }

        // ---------------------------------------------------------------------
        // Cart
        // ---------------------------------------------------------------------
        Command::AddToCart(lesson) => {
            if let Err(CoreError::DuplicateLesson { .. }) = next.cart.add_lesson(&lesson) {
                next.notices.push(Notice::warning(DUPLICATE_LESSON_MESSAGE));
            }
        }

        // ---------------------------------------------------------------------
        // Checkout
        // ---------------------------------------------------------------------
        Command::OpenCheckout => {
            if let Ok(phase) = next.checkout.open() {
                next.checkout = phase;
            }
        }

        Command::SetCustomerName(name) => {
            next.customer.name = name;
        }

        Command::SetCustomerPhone(phone) => {
            next.customer.phone = phone;
        }

        Command::SubmitOrder => {
            if next.generations.order_pending {
                return (next, effects);
            }
            if let Ok(phase) = next.checkout.submit() {
                next.checkout = phase;
                next.generations.order_pending = true;
                let generation = RequestGenerations::next(&mut next.generations.submit);
                effects.push(Effect::PlaceOrder {
                    order: next.order_request(),
                    generation,
                });
            }
        }

        Command::OrderCompleted { result, .. } => {
            next.generations.order_pending = false;
            let target = next
                .checkout
                .complete(result.as_ref().map(OrderReceipt::confirmation));

            match (target, &result) {
                (CompletionTarget::Modal(phase), _) => next.checkout = phase,
                (CompletionTarget::Detached, Ok(receipt)) => {
                    let message = match receipt.confirmation() {
                        Some(id) => format!("Order {id} confirmed"),
                        None => "Order confirmed".to_string(),
                    };
                    next.notices.push(Notice::info(message));
                }
                (CompletionTarget::Detached, Err(failure)) => {
                    next.notices.push(Notice::warning(failure.user_message()));
                }
            }

            if result.is_ok() {
                next.cart.clear();
                next.customer = CustomerInfo::default();
                effects.push(next.start_load());
            }
        }

        Command::CloseModal => {
            next.checkout = CheckoutPhase::Idle;
        }

        Command::DismissNotices => {
            next.notices.clear();
        }
    }

    (next, effects)
}

// =============================================================================
// Unit Tests
// =============================================================================
