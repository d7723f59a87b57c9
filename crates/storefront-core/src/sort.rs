//! # Sort Engine
//!
//! Orders the displayed lessons by one field and one direction.
//!
//! ## Comparison Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  field      kind      compared as                                       │
//! │  ─────────  ────────  ───────────────────────────────────────────────   │
//! │  subject    text      lowercase string                                  │
//! │  location   text      lowercase string                                  │
//! │  price      number    cents                                             │
//! │  spaces     number    integer                                           │
//! │                                                                         │
//! │  Desc reverses the three-way result; ties keep no guaranteed order.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole list is re-sorted after every load, search and sort change.
//! Nothing is maintained incrementally.

use std::cmp::Ordering;

use crate::types::{Lesson, SortDirection, SortField};

/// Three-way comparison of two lessons on `field`, ascending.
pub fn compare(a: &Lesson, b: &Lesson, field: SortField) -> Ordering {
    match field {
        SortField::Subject => compare_text(&a.subject, &b.subject),
        SortField::Location => compare_text(&a.location, &b.location),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Spaces => a.spaces.cmp(&b.spaces),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sorts `lessons` in place.
pub fn sort_lessons(lessons: &mut [Lesson], field: SortField, direction: SortDirection) {
    lessons.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Returns `lessons` sorted.
pub fn sorted(mut lessons: Vec<Lesson>, field: SortField, direction: SortDirection) -> Vec<Lesson> {
    sort_lessons(&mut lessons, field, direction);
    lessons
}

/// Checks that every adjacent pair respects the comparison rule.
pub fn is_sorted(lessons: &[Lesson], field: SortField, direction: SortDirection) -> bool {
    lessons.windows(2).all(|pair| {
        let ordering = compare(&pair[0], &pair[1], field);
        match direction {
            SortDirection::Asc => ordering != Ordering::Greater,
            SortDirection::Desc => ordering != Ordering::Less,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn lesson(id: &str, subject: &str, location: &str, price_cents: i64, spaces: u32) -> Lesson {
        Lesson {
            id: id.to_string(),
            subject: subject.to_string(),
            location: location.to_string(),
            price: Money::from_cents(price_cents),
            spaces,
        }
    }

    fn catalog() -> Vec<Lesson> {
        vec![
            lesson("1", "Math", "Hendon", 2000, 3),
            lesson("2", "Art", "colindale", 1500, 0),
            lesson("3", "english", "Brent Cross", 1800, 5),
            lesson("4", "Music", "Golders Green", 2500, 9),
            lesson("5", "drama", "barnet", 1500, 2),
        ]
    }

    fn ids(lessons: &[Lesson]) -> Vec<&str> {
        lessons.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_subject_ascending_puts_art_before_math() {
        let lessons = sorted(
            vec![lesson("1", "Math", "Hendon", 2000, 3), lesson("2", "Art", "Hendon", 1500, 0)],
            SortField::Subject,
            SortDirection::Asc,
        );
        assert_eq!(ids(&lessons), vec!["2", "1"]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let lessons = sorted(catalog(), SortField::Subject, SortDirection::Asc);
        assert_eq!(ids(&lessons), vec!["2", "5", "3", "1", "4"]);

        let lessons = sorted(catalog(), SortField::Location, SortDirection::Asc);
        assert_eq!(ids(&lessons), vec!["5", "3", "2", "4", "1"]);
    }

    #[test]
    fn test_numeric_descending() {
        let lessons = sorted(catalog(), SortField::Spaces, SortDirection::Desc);
        assert_eq!(ids(&lessons), vec!["4", "3", "1", "5", "2"]);

        let lessons = sorted(catalog(), SortField::Price, SortDirection::Desc);
        assert_eq!(lessons[0].id, "4");
        assert_eq!(lessons[4].price, Money::from_cents(1500));
    }

    #[test]
    fn test_every_field_and_direction_is_sorted() {
        for field in SortField::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let lessons = sorted(catalog(), field, direction);
                assert!(
                    is_sorted(&lessons, field, direction),
                    "{field} {direction} not sorted: {:?}",
                    ids(&lessons)
                );
                assert_eq!(lessons.len(), catalog().len());
            }
        }
    }

    #[test]
    fn test_is_sorted_detects_disorder() {
        let lessons = catalog();
        assert!(!is_sorted(&lessons, SortField::Subject, SortDirection::Asc));
        assert!(is_sorted(&[], SortField::Price, SortDirection::Desc));
    }
}
