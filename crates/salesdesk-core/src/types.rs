//! # Domain Types
//!
//! Core domain entities for Salesdesk.
//!
//! ## Entity Relationship
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Domain Entities                              │
//! │                                                                     │
//! │  ┌─────────────────┐            ┌─────────────────┐                 │
//! │  │   Department    │            │     Seller      │                 │
//! │  │  ─────────────  │            │  ─────────────  │                 │
//! │  │  id: Option     │◄───────────│  id: Option     │                 │
//! │  │  name           │  belongs   │  name           │                 │
//! │  └─────────────────┘    to      │  email          │                 │
//! │                                 │  birth_date     │                 │
//! │                                 │  base_salary    │                 │
//! │                                 │  department     │                 │
//! │                                 └─────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! `id` is `None` for a transient (never persisted) entity and `Some` once
//! the storage engine has assigned a key. Inserting through a repository
//! populates `id` as an observable side effect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Department
// =============================================================================

/// A department sellers belong to.
///
/// Value object: two departments are equal when their fields are equal.
/// Loaded sellers carry a department materialized from the joined row, not a
/// live reference to any shared instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Department {
    /// Storage-assigned identity. `None` until inserted.
    pub id: Option<i64>,

    /// Display name. Required, non-empty.
    pub name: String,
}

impl Department {
    /// Creates a transient department (no identity yet).
    pub fn new(name: impl Into<String>) -> Self {
        Department {
            id: None,
            name: name.into(),
        }
    }

    /// Whether this department has been persisted.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Seller
// =============================================================================

/// A seller employed in exactly one department.
///
/// ## Lifecycle
/// ```text
/// Seller::new(...)            id: None          (transient)
///        │
///        ▼  repository insert
/// id: Some(generated)                           (persistent)
///        │
///        ▼  repository update / delete_by_id
/// mutated in place / removed by id
/// ```
///
/// The `department` field must carry `Some(id)` at insert/update time; the
/// repository trusts the caller and the store's foreign-key enforcement, it
/// does not verify the referenced row exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Storage-assigned identity. `None` until inserted.
    pub id: Option<i64>,

    /// Display name. Required, non-empty.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Calendar date of birth (no time-of-day semantics).
    pub birth_date: NaiveDate,

    /// Base salary as a floating-point monetary value.
    pub base_salary: f64,

    /// The owning department (foreign key on the seller row).
    pub department: Department,
}

impl Seller {
    /// Creates a transient seller (no identity yet).
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: f64,
        department: Department,
    ) -> Self {
        Seller {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    /// Whether this seller has been persisted.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_are_transient() {
        let dep = Department::new("Sales");
        assert_eq!(dep.id, None);
        assert!(!dep.is_persisted());

        let seller = Seller::new(
            "Bob",
            "bob@x.com",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            3000.0,
            dep,
        );
        assert_eq!(seller.id, None);
        assert!(!seller.is_persisted());
    }

    #[test]
    fn test_department_value_equality() {
        let a = Department {
            id: Some(1),
            name: "IT".to_string(),
        };
        let b = Department {
            id: Some(1),
            name: "IT".to_string(),
        };
        // Equal by value, object identity does not matter
        assert_eq!(a, b);

        let c = Department {
            id: Some(2),
            name: "IT".to_string(),
        };
        assert_ne!(a, c);
    }
}
