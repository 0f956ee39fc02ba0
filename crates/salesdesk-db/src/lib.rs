//! # salesdesk-db: Database Layer for Salesdesk
//!
//! This crate provides database access for Salesdesk. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Salesdesk Data Flow                            │
//! │                                                                     │
//! │  Service call (seller_service.save_or_update(...))                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   salesdesk-db (THIS CRATE)                   │ │
//! │  │                                                               │ │
//! │  │  ┌──────────────┐   ┌────────────────┐   ┌────────────────┐  │ │
//! │  │  │   Database   │   │  Repositories  │   │   Migrations   │  │ │
//! │  │  │  (pool.rs)   │   │(department.rs, │   │   (embedded)   │  │ │
//! │  │  │              │   │  seller.rs)    │   │                │  │ │
//! │  │  │ SqlitePool   │◄──│ DepartmentRepo │   │ 001_init.sql   │  │ │
//! │  │  │ Management   │   │ SellerRepo     │   │                │  │ │
//! │  │  └──────────────┘   └────────────────┘   └────────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error type
//! - [`repository`] - Repository implementations (department, seller)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use salesdesk_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/salesdesk.db")).await?;
//!
//! let mut dep = Department::new("Sales");
//! db.departments().insert(&mut dep).await?;
//! assert!(dep.id.is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::department::DepartmentRepository;
pub use repository::seller::SellerRepository;
