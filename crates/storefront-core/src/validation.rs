//! # Validation Module
//!
//! Input validation for the search box and the checkout form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: DOM template                                                  │
//! │  └── required attributes, immediate feedback                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── search query bounds (blocks the request)                          │
//! │  └── customer form checks (advisory: drives `can_submit`)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order service                                                 │
//! │  └── authoritative; its `{message}` is shown verbatim                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_customer_name, validate_search_query};
//!
//! assert_eq!(validate_search_query("  math ").unwrap(), "math");
//! assert!(validate_customer_name("").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::CustomerInfo;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest search query sent to the catalog service.
pub const MAX_QUERY_LEN: usize = 100;

/// Longest customer name accepted by the form.
pub const MAX_NAME_LEN: usize = 100;

/// Longest phone number accepted by the form.
pub const MAX_PHONE_LEN: usize = 20;

// =============================================================================
// Search
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (means "show all")
/// - Maximum 100 characters after trimming
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Customer Form
// =============================================================================

/// Validates the customer name.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the customer phone number.
///
/// ## Rules
/// - Must not be blank
/// - At most 20 characters
/// - Digits, spaces, `+`, `-`, `(` and `)` only, with at least one digit
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.chars().count() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, +, - and parentheses".to_string(),
        });
    }

    Ok(())
}

impl CustomerInfo {
    /// Runs every form check, reporting the first failure.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_customer_name(&self.name)?;
        validate_phone(&self.phone)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
