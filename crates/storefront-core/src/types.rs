//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Lesson      │   │    CartLine     │   │  CustomerInfo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (_id)       │◄──│  lesson_id (FK) │   │  name           │       │
//! │  │  subject        │   │  subject        │   │  phone          │       │
//! │  │  location       │   │  location       │   └─────────────────┘       │
//! │  │  price          │   │  price (frozen) │                             │
//! │  │  spaces         │   │  quantity (1)   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SortField     │   │  SortDirection  │   │  OrderRequest   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Subject        │   │  Asc            │   │  name, phone    │       │
//! │  │  Location       │   │  Desc           │   │  lessons[]      │       │
//! │  │  Price, Spaces  │   └─────────────────┘   │  totalAmount    │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Compatibility
//! Lessons come from a document store, so the identifier arrives as `_id`.
//! Orders go back with a plain `id` per line and a camelCase `totalAmount`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Lesson
// =============================================================================

/// A lesson offered in the catalog.
///
/// Immutable from the client's point of view: the catalog service is the
/// only source, and a reload replaces every instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lesson {
    /// Opaque unique identifier. Numeric ids are kept as their decimal text.
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_lesson_id")]
    pub id: String,

    /// Subject taught, e.g. "Math".
    pub subject: String,

    /// Where the lesson takes place.
    #[serde(default)]
    pub location: String,

    /// Price per place.
    #[ts(type = "number")]
    pub price: Money,

    /// Places still available.
    #[serde(alias = "space")]
    pub spaces: u32,
}

fn deserialize_lesson_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ConfirmationId::deserialize(deserializer).map(|id| id.to_string())
}

// =============================================================================
// Cart Line
// =============================================================================

/// A lesson placed in the cart.
///
/// ## Design Notes
/// - `lesson_id` references the catalog entry; the line does not own it
/// - `subject`, `location` and `price` are a snapshot taken when the lesson
///   was added, so a later catalog reload does not reprice the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub lesson_id: String,
    pub subject: String,
    pub location: String,
    #[ts(type = "number")]
    pub price: Money,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshots a lesson into a cart line with quantity 1.
    pub fn from_lesson(lesson: &Lesson) -> Self {
        CartLine {
            lesson_id: lesson.id.clone(),
            subject: lesson.subject.clone(),
            location: lesson.location.clone(),
            price: lesson.price,
            quantity: 1,
        }
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Checkout form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
}

// =============================================================================
// Sorting
// =============================================================================

/// Lesson attribute the catalog is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortField {
    #[default]
    Subject,
    Location,
    Price,
    Spaces,
}

impl SortField {
    /// Every field, in the order a sort control lists them.
    pub const ALL: [SortField; 4] = [
        SortField::Subject,
        SortField::Location,
        SortField::Price,
        SortField::Spaces,
    ];

    /// Text fields compare case-insensitively; the rest by value.
    pub fn is_textual(&self) -> bool {
        matches!(self, SortField::Subject | SortField::Location)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Subject => "subject",
            SortField::Location => "location",
            SortField::Price => "price",
            SortField::Spaces => "spaces",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subject" => Ok(SortField::Subject),
            "location" => Ok(SortField::Location),
            "price" => Ok(SortField::Price),
            "spaces" | "space" => Ok(SortField::Spaces),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

// =============================================================================
// Order Wire Types
// =============================================================================

/// One cart line as the order service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub subject: String,
    pub location: String,
    pub price: Money,
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        OrderLine {
            id: line.lesson_id.clone(),
            subject: line.subject.clone(),
            location: line.location.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Body of `POST /orders`.
///
/// ## JSON Shape
/// ```json
/// {
///   "name": "Ada",
///   "phone": "07123456789",
///   "lessons": [{ "id": "m1", "subject": "Math", "location": "Hendon", "price": 20, "quantity": 1 }],
///   "totalAmount": 20
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub lessons: Vec<OrderLine>,
    pub total_amount: Money,
}

/// Identifier sent as either a string or a number; used for lesson ids and
/// order confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfirmationId {
    Text(String),
    Number(u64),
}

impl fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmationId::Text(text) => f.write_str(text),
            ConfirmationId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Successful `POST /orders` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<ConfirmationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<ConfirmationId>,
}

impl OrderReceipt {
    /// `orderNumber` wins over `orderId`.
    pub fn confirmation(&self) -> Option<String> {
        self.order_number
            .as_ref()
            .or(self.order_id.as_ref())
            .map(ToString::to_string)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lesson_accepts_document_id() {
        let lesson: Lesson = serde_json::from_value(json!({
            "_id": "65a1",
            "subject": "Math",
            "location": "Hendon",
            "price": 20,
            "spaces": 3,
            "image": "math.png"
        }))
        .unwrap();

        assert_eq!(lesson.id, "65a1");
        assert_eq!(lesson.price, Money::from_cents(2000));
        assert_eq!(lesson.spaces, 3);
    }

    #[test]
    fn test_lesson_accepts_plain_id_and_space_alias() {
        let lesson: Lesson = serde_json::from_value(json!({
            "id": "2",
            "subject": "Art",
            "location": "Colindale",
            "price": 15.5,
            "space": 0
        }))
        .unwrap();

        assert_eq!(lesson.id, "2");
        assert_eq!(lesson.price.cents(), 1550);
        assert_eq!(lesson.spaces, 0);
    }

    #[test]
    fn test_catalog_with_numeric_ids_loads() {
        let lessons: Vec<Lesson> = serde_json::from_str(
            r#"[
                {"id": 1, "subject": "Math", "price": 20, "spaces": 3},
                {"id": 2, "subject": "Art", "price": 15, "spaces": 0}
            ]"#,
        )
        .unwrap();

        assert_eq!(lessons[0].id, "1");
        assert_eq!(lessons[0].location, "");
        assert_eq!(lessons[1].id, "2");
        assert_eq!(lessons[1].price, Money::from_cents(1500));

        let sorted = crate::sort::sorted(lessons.clone(), SortField::Subject, SortDirection::Asc);
        assert_eq!(sorted[0].subject, "Art");
    }

    #[test]
    fn test_lesson_rejects_negative_price() {
        let result = serde_json::from_value::<Lesson>(json!({
            "_id": "x", "subject": "Math", "location": "Hendon", "price": -5, "spaces": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_request_wire_shape() {
        let line = CartLine {
            lesson_id: "m1".to_string(),
            subject: "Math".to_string(),
            location: "Hendon".to_string(),
            price: Money::from_cents(2000),
            quantity: 1,
        };
        let request = OrderRequest {
            name: "Ada".to_string(),
            phone: "0712".to_string(),
            lessons: vec![OrderLine::from(&line)],
            total_amount: Money::from_cents(2000),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Ada",
                "phone": "0712",
                "lessons": [{
                    "id": "m1",
                    "subject": "Math",
                    "location": "Hendon",
                    "price": 20,
                    "quantity": 1
                }],
                "totalAmount": 20
            })
        );
    }

    #[test]
    fn test_receipt_prefers_order_number() {
        let receipt: OrderReceipt =
            serde_json::from_value(json!({ "orderNumber": "ORD-7", "orderId": "abc" })).unwrap();
        assert_eq!(receipt.confirmation().as_deref(), Some("ORD-7"));

        let receipt: OrderReceipt = serde_json::from_value(json!({ "orderId": 42 })).unwrap();
        assert_eq!(receipt.confirmation().as_deref(), Some("42"));

        let receipt: OrderReceipt = serde_json::from_value(json!({})).unwrap();
        assert_eq!(receipt.confirmation(), None);
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("Price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!("space".parse::<SortField>().unwrap(), SortField::Spaces);
        assert!("rating".parse::<SortField>().is_err());

        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_textual_fields() {
        assert!(SortField::Subject.is_textual());
        assert!(SortField::Location.is_textual());
        assert!(!SortField::Price.is_textual());
        assert!(!SortField::Spaces.is_textual());
    }
}
