//! # View Snapshot
//!
//! Flattens [`StorefrontState`] into the plain data a template binds to.
//! Everything here is derived on demand; nothing is cached in the state.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::presentation::{lesson_icon, SpacesClass};
use crate::state::{can_submit, cart_total, displayed_lessons, Notice, StorefrontState};
use crate::types::{CartLine, CustomerInfo, Lesson, SortDirection, SortField};

/// A lesson plus its render hints.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LessonCard {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub icon: String,
    pub spaces_class: SpacesClass,
    pub css_class: String,
    pub in_cart: bool,
}

/// Checkout modal bindings.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutView {
    pub visible: bool,
    pub submitting: bool,
    pub can_submit: bool,
    pub order_success: Option<String>,
    pub order_error: Option<String>,
}

/// Everything the storefront template renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StorefrontView {
    pub lessons: Vec<LessonCard>,
    pub loading: bool,
    pub searching: bool,
    pub error: Option<String>,
    pub search_query: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub cart: Vec<CartLine>,
    pub cart_count: usize,
    #[ts(type = "number")]
    pub cart_total: Money,
    pub customer: CustomerInfo,
    pub checkout: CheckoutView,
    pub notices: Vec<Notice>,
}

impl LessonCard {
    fn new(lesson: &Lesson, state: &StorefrontState) -> Self {
        let spaces_class = SpacesClass::from_spaces(lesson.spaces);
        LessonCard {
            icon: lesson_icon(&lesson.subject).to_string(),
            spaces_class,
            css_class: spaces_class.css_class().to_string(),
            in_cart: state.cart().contains(&lesson.id),
            lesson: lesson.clone(),
        }
    }
}

impl StorefrontView {
    pub fn from_state(state: &StorefrontState) -> Self {
        let checkout = state.checkout();

        StorefrontView {
            lessons: displayed_lessons(state)
                .iter()
                .map(|lesson| LessonCard::new(lesson, state))
                .collect(),
            loading: state.is_loading(),
            searching: state.is_searching(),
            error: state.error().map(str::to_string),
            search_query: state.search_query().to_string(),
            sort_field: state.sort_field(),
            sort_direction: state.sort_direction(),
            cart: state.cart().lines().to_vec(),
            cart_count: state.cart().len(),
            cart_total: cart_total(state),
            customer: state.customer().clone(),
            checkout: CheckoutView {
                visible: checkout.is_modal_visible(),
                submitting: checkout.is_submitting(),
                can_submit: can_submit(state),
                order_success: checkout.order_success().map(str::to_string),
                order_error: checkout.order_error().map(str::to_string),
            },
            notices: state.notices().to_vec(),
        }
    }
}

impl From<&StorefrontState> for StorefrontView {
    fn from(state: &StorefrontState) -> Self {
        StorefrontView::from_state(state)
    }
}
