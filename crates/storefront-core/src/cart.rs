//! # Cart
//!
//! The shopping cart: one line per lesson, quantity fixed at 1.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Command                 Cart Change            │
//! │  ─────────               ───────                 ───────────            │
//! │                                                                         │
//! │  Click "Add to cart" ──► AddToCart(lesson) ────► lines.push(line)       │
//! │                          (duplicate?) ─────────► rejected, notice       │
//! │                                                                         │
//! │  Order accepted ───────► OrderCompleted(Ok) ───► lines.clear()          │
//! │                                                                         │
//! │  Render total ─────────► cart.total() ─────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Lesson, OrderLine};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `lesson_id`
/// - Lines keep insertion order
/// - The total is never stored; `total()` sums on demand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a lesson, snapshotting its price.
    ///
    /// ## Returns
    /// - `Ok(())` when a new line was appended
    /// - `Err(CoreError::DuplicateLesson)` when the lesson is already present;
    ///   the cart is left untouched
    pub fn add_lesson(&mut self, lesson: &Lesson) -> CoreResult<()> {
        if self.contains(&lesson.id) {
            return Err(CoreError::DuplicateLesson {
                lesson_id: lesson.id.clone(),
            });
        }

        self.lines.push(CartLine::from_lesson(lesson));
        Ok(())
    }

    /// Checks whether a line exists for `lesson_id`.
    pub fn contains(&self, lesson_id: &str) -> bool {
        self.lines.iter().any(|line| line.lesson_id == lesson_id)
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line prices.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .map(|line| line.price.multiply_quantity(line.quantity))
            .sum()
    }

    /// Lines mapped to the order transport shape.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines.iter().map(OrderLine::from).collect()
    }
}
