//! # salesdesk-services: Service Layer for Salesdesk
//!
//! Thin orchestration over the repositories in [`salesdesk_db`]. The desktop
//! shell talks to these services; it never touches SQL.
//!
//! ## The Identity-Presence Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     save_or_update(entity)                          │
//! │                                                                     │
//! │  validate required fields                                           │
//! │       │                                                             │
//! │       ├── entity.id == None ──► repository insert                   │
//! │       │                         (id assigned as a side effect)      │
//! │       │                                                             │
//! │       └── entity.id == Some ──► repository update                   │
//! │                                 (id unchanged)                      │
//! │                                                                     │
//! │  This is the sole rule distinguishing creation from modification;   │
//! │  there is no optimistic-concurrency check.                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod department;
pub mod error;
pub mod seller;

// =============================================================================
// Re-exports
// =============================================================================

pub use department::DepartmentService;
pub use error::{ServiceError, ServiceResult};
pub use seller::SellerService;
