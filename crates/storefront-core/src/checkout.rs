//! # Checkout Flow
//!
//! The checkout modal as an explicit state machine.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐ open  ┌───────────┐ submit ┌────────────┐                 │
//! │  │   Idle   │──────►│ ModalOpen │───────►│ Submitting │                 │
//! │  └──────────┘       └───────────┘        └─────┬──────┘                 │
//! │       ▲                   ▲          ok ┌──────┴──────┐ err             │
//! │       │                   │             ▼             ▼                 │
//! │       │                   │      ┌───────────┐  ┌──────────┐            │
//! │       │                   │      │ Succeeded │  │  Failed  │── submit ─►│
//! │       │                   │      └─────┬─────┘  └────┬─────┘  (retry)   │
//! │       │                   └────────────┼─────────────┘                  │
//! │       └──────────── close (from any phase) ─────────────────────────────│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Opening does not look at the cart: an empty order can be submitted.

use std::fmt;

use crate::error::{CoreError, CoreResult, OrderFailure};

/// Where the checkout modal currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Modal hidden.
    #[default]
    Idle,

    /// Modal visible, form editable.
    ModalOpen,

    /// Order request in flight.
    Submitting,

    /// Order accepted; `confirmation` is the server's order number, if it sent one.
    Succeeded { confirmation: Option<String> },

    /// Order refused or unreachable; the modal stays open for a retry.
    Failed { message: String },
}

/// Where a finished submission leaves the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionTarget {
    /// The modal was still waiting; the outcome is shown in it.
    Modal(CheckoutPhase),

    /// The modal was closed mid-flight; the outcome becomes a notice.
    Detached,
}

impl CheckoutPhase {
    fn invalid(&self, action: &str) -> CoreError {
        CoreError::InvalidCheckoutTransition {
            phase: self.to_string(),
            action: action.to_string(),
        }
    }

    /// Idle/ModalOpen → ModalOpen. A modal already showing a result is left as is.
    pub fn open(&self) -> CoreResult<CheckoutPhase> {
        match self {
            CheckoutPhase::Idle | CheckoutPhase::ModalOpen => Ok(CheckoutPhase::ModalOpen),
            CheckoutPhase::Succeeded { .. } | CheckoutPhase::Failed { .. } => Ok(self.clone()),
            CheckoutPhase::Submitting => Err(self.invalid("open checkout")),
        }
    }

    /// ModalOpen/Failed → Submitting.
    pub fn submit(&self) -> CoreResult<CheckoutPhase> {
        match self {
            CheckoutPhase::ModalOpen | CheckoutPhase::Failed { .. } => Ok(CheckoutPhase::Submitting),
            _ => Err(self.invalid("submit order")),
        }
    }

    /// Applies the order outcome.
    pub fn complete(&self, outcome: Result<Option<String>, &OrderFailure>) -> CompletionTarget {
        if *self != CheckoutPhase::Submitting {
            return CompletionTarget::Detached;
        }

        CompletionTarget::Modal(match outcome {
            Ok(confirmation) => CheckoutPhase::Succeeded { confirmation },
            Err(failure) => CheckoutPhase::Failed {
                message: failure.user_message(),
            },
        })
    }

    pub fn is_modal_visible(&self) -> bool {
        !matches!(self, CheckoutPhase::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, CheckoutPhase::Submitting)
    }

    /// Confirmation to display, once an order succeeded.
    pub fn order_success(&self) -> Option<&str> {
        match self {
            CheckoutPhase::Succeeded { confirmation } => confirmation.as_deref(),
            _ => None,
        }
    }

    pub fn order_error(&self) -> Option<&str> {
        match self {
            CheckoutPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for CheckoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckoutPhase::Idle => "idle",
            CheckoutPhase::ModalOpen => "open",
            CheckoutPhase::Submitting => "submitting",
            CheckoutPhase::Succeeded { .. } => "succeeded",
            CheckoutPhase::Failed { .. } => "failed",
        };
        f.write_str(name)
    }
}
