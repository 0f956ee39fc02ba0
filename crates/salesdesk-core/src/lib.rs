//! # salesdesk-core: Pure Domain Model for Salesdesk
//!
//! This crate holds the domain entities and their validation rules as pure
//! code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Salesdesk Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  Desktop Shell (external)                     │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                   salesdesk-services                          │ │
//! │  │    save_or_update, remove, find_all, find_by_department       │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ salesdesk-core (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │   ┌────────────────┐          ┌────────────────┐              │ │
//! │  │   │     types      │          │   validation   │              │ │
//! │  │   │  Department    │          │  name, email,  │              │ │
//! │  │   │  Seller        │          │  salary rules  │              │ │
//! │  │   └────────────────┘          └────────────────┘              │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                 salesdesk-db (Database Layer)                 │ │
//! │  │           SQLite queries, migrations, repositories            │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Department, Seller)
//! - [`error`] - Validation error type
//! - [`validation`] - Required-field and format rules

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use salesdesk_core::Seller` instead of
// `use salesdesk_core::types::Seller`

pub use error::ValidationError;
pub use types::{Department, Seller};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length accepted for department and seller names.
///
/// ## Business Reason
/// Keeps list views and receipts readable; matches the column width the
/// desktop shell renders without truncation.
pub const MAX_NAME_LEN: usize = 60;

/// Maximum length accepted for seller email addresses.
pub const MAX_EMAIL_LEN: usize = 100;
