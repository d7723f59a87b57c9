//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule rejections (duplicate, phase)    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-client errors (separate crate)                              │
//! │  └── ClientError      - HTTP / config failures                          │
//! │                                                                         │
//! │  Failures the reducer sees (plain data, defined below)                 │
//! │  ├── FetchFailure     - load/search did not produce lessons            │
//! │  └── OrderFailure     - order was not accepted                         │
//! │                                                                         │
//! │  Flow: ClientError → FetchFailure/OrderFailure → Command → ViewState   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (lesson id, field name)
//! 3. Nothing here is fatal: every error ends up as text in the view state

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A cart line for this lesson already exists.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Add to cart" on Math (already in cart)
    ///      │
    ///      ▼
    /// DuplicateLesson { lesson_id: "m1" }
    ///      │
    ///      ▼
    /// UI shows: "This lesson is already in your cart!"
    /// ```
    #[error("Lesson {lesson_id} is already in the cart")]
    DuplicateLesson { lesson_id: String },

    /// Checkout is not in a phase that allows the requested action.
    ///
    /// ## When This Occurs
    /// - Submitting while a previous submission is still in flight
    /// - Submitting with the modal closed
    /// - Opening the modal while an order is being placed
    #[error("Checkout is {phase}, cannot {action}")]
    InvalidCheckoutTransition { phase: String, action: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., letters in a phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Service Failures
// =============================================================================

/// Why a catalog load or search produced no lessons.
///
/// The reducer only needs to know *that* it failed; the detail is kept for
/// logs and never shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// Server answered with a non-2xx status.
    #[error("catalog responded with status {status}")]
    Status { status: u16 },

    /// Request never completed or the body was not a lesson list.
    #[error("catalog request failed: {0}")]
    Transport(String),
}

/// Why an order was not placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderFailure {
    /// Server answered with a non-2xx status, optionally with `{message}`.
    #[error("order rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// Request never completed or the response could not be read.
    #[error("order request failed: {0}")]
    Transport(String),
}

impl OrderFailure {
    /// Text shown in the checkout modal.
    ///
    /// A server-supplied message always wins; otherwise the fallback depends
    /// on whether the server answered at all.
    pub fn user_message(&self) -> String {
        match self {
            OrderFailure::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            OrderFailure::Rejected { .. } => "Failed to place order".to_string(),
            OrderFailure::Transport(_) => "Failed to place order. Please try again.".to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateLesson {
            lesson_id: "m1".to_string(),
        };
        assert_eq!(err.to_string(), "Lesson m1 is already in the cart");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "phone".to_string(),
            max: 20,
        };
        assert_eq!(err.to_string(), "phone must be at most 20 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_order_failure_prefers_server_message() {
        let failure = OrderFailure::Rejected {
            status: 400,
            message: Some("Lesson full".to_string()),
        };
        assert_eq!(failure.user_message(), "Lesson full");
    }

    #[test]
    fn test_order_failure_fallbacks() {
        let rejected = OrderFailure::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(rejected.user_message(), "Failed to place order");

        let blank = OrderFailure::Rejected {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message(), "Failed to place order");

        let transport = OrderFailure::Transport("connection refused".to_string());
        assert_eq!(
            transport.user_message(),
            "Failed to place order. Please try again."
        );
    }
}
