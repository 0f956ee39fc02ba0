//! # Repository Module
//!
//! Database repository implementations for Salesdesk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Service call                                                       │
//! │       │                                                             │
//! │       │  db.sellers().find_by_department(&dep)                      │
//! │       ▼                                                             │
//! │  SellerRepository                                                   │
//! │  ├── insert(&self, &mut seller)      (assigns generated id)         │
//! │  ├── update(&self, &seller)                                         │
//! │  ├── delete_by_id(&self, id)                                        │
//! │  ├── find_by_id(&self, id)           (JOIN department)              │
//! │  ├── find_all(&self)                 (JOIN + dedup map)             │
//! │  └── find_by_department(&self, &dep)                                │
//! │       │                                                             │
//! │       │  Parameterized SQL                                          │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Row mapping shared via the row module                            │
//! │  • Callers only see domain entities and DbError                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`department::DepartmentRepository`] - Department CRUD
//! - [`seller::SellerRepository`] - Seller CRUD with department joins

pub mod department;
pub mod row;
pub mod seller;
