//! # Validation Module
//!
//! Required-field and format rules for Salesdesk entities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Service layer (salesdesk-services)                        │
//! │  └── THIS MODULE: required fields, lengths, formats                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── Foreign key constraints                                        │
//! │                                                                     │
//! │  Repositories themselves stay trusting: they execute what they      │
//! │  are given and let the store enforce referential integrity.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Department, Seller};
use crate::{MAX_EMAIL_LEN, MAX_NAME_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a department or seller name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LEN`] characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a seller email address.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most [`MAX_EMAIL_LEN`] characters
/// - Must contain a single `@` with text on both sides
///
/// Not a full RFC 5322 check; the store does not care and the desktop shell
/// only needs a plausible address to display.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like local@domain".to_string(),
        });
    }

    Ok(())
}

/// Validates a base salary.
///
/// ## Rules
/// - Must be a finite number
/// - Must not be negative (zero is allowed)
pub fn validate_base_salary(salary: f64) -> ValidationResult<()> {
    if !salary.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "base_salary".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if salary < 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: "base_salary".to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a department before it is written.
pub fn validate_department(department: &Department) -> ValidationResult<()> {
    validate_name(&department.name)
}

/// Validates a seller before it is written.
///
/// The department must already be persisted (carry an id); whether that row
/// still exists is left to the store's foreign-key enforcement.
pub fn validate_seller(seller: &Seller) -> ValidationResult<()> {
    validate_name(&seller.name)?;
    validate_email(&seller.email)?;
    validate_base_salary(seller.base_salary)?;

    if seller.department.id.is_none() {
        return Err(ValidationError::TransientReference {
            field: "department".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Sales").is_ok());
        assert!(validate_name("R&D").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("bob@x.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("bob").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("bob@").is_err());
        assert!(validate_email("bob@x@y").is_err());
    }

    #[test]
    fn test_validate_base_salary() {
        assert!(validate_base_salary(3000.0).is_ok());
        assert!(validate_base_salary(0.0).is_ok());

        assert!(validate_base_salary(-1.0).is_err());
        assert!(validate_base_salary(f64::NAN).is_err());
        assert!(validate_base_salary(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_seller_requires_persisted_department() {
        let seller = Seller::new(
            "Bob",
            "bob@x.com",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            3000.0,
            Department::new("IT"),
        );
        assert!(matches!(
            validate_seller(&seller),
            Err(ValidationError::TransientReference { .. })
        ));

        let mut ok = seller.clone();
        ok.department.id = Some(1);
        assert!(validate_seller(&ok).is_ok());
    }
}
