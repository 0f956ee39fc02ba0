//! # Department Repository
//!
//! Database operations for departments.
//!
//! ## Key Operations
//! - CRUD with generated-key retrieval on insert
//! - Name-ordered listing for the department table view
//!
//! ## Generated Keys
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Insert With Generated Key                         │
//! │                                                                     │
//! │  Department { id: None, name: "Sales" }                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  INSERT INTO department (name) VALUES (?1)                          │
//! │       │                                                             │
//! │       ├── rows_affected == 0 → DbError::NoRowsAffected              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  last_insert_rowid() → Department { id: Some(7), name: "Sales" }    │
//! │                                                                     │
//! │  The caller's entity is mutated in place; a successful insert       │
//! │  always leaves it with Some(id).                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use salesdesk_core::Department;

/// Repository for department database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.departments();
///
/// let mut dep = Department::new("Sales");
/// repo.insert(&mut dep).await?;
/// let found = repo.find_by_id(dep.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: SqlitePool,
}

impl DepartmentRepository {
    /// Creates a new DepartmentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DepartmentRepository { pool }
    }

    /// Inserts a new department and assigns the generated id.
    ///
    /// ## Side Effect
    /// On success the passed entity's `id` is set to the generated key.
    ///
    /// ## Errors
    /// * `DbError::NoRowsAffected` - the driver reported success but zero
    ///   rows were written
    /// * `DbError::Query` - any driver failure
    pub async fn insert(&self, department: &mut Department) -> DbResult<()> {
        debug!(name = %department.name, "Inserting department");

        let result = sqlx::query("INSERT INTO department (name) VALUES (?1)")
            .bind(&department.name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsAffected);
        }

        department.id = Some(result.last_insert_rowid());
        Ok(())
    }

    /// Updates an existing department by id.
    ///
    /// No rows-affected check: updating an id that does not exist silently
    /// succeeds. A transient department (id `None`) binds NULL and matches
    /// no row, which falls under the same rule.
    pub async fn update(&self, department: &Department) -> DbResult<()> {
        debug!(id = ?department.id, "Updating department");

        sqlx::query("UPDATE department SET name = ?1 WHERE id = ?2")
            .bind(&department.name)
            .bind(department.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes a department by id.
    ///
    /// Deleting an id that does not exist is a no-op.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting department");

        sqlx::query("DELETE FROM department WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Gets a department by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Department))` - department found
    /// * `Ok(None)` - no matching row (never an error)
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Department>> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT id, name FROM department WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(department)
    }

    /// Lists all departments ordered by name ascending.
    pub async fn find_all(&self) -> DbResult<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>(
            "SELECT id, name FROM department ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = departments.len(), "Listed departments");
        Ok(departments)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_generated_id() {
        let db = test_db().await;
        let repo = db.departments();

        let mut dep = Department::new("Sales");
        assert_eq!(dep.id, None);

        repo.insert(&mut dep).await.unwrap();
        assert!(dep.id.is_some());

        let mut second = Department::new("IT");
        repo.insert(&mut second).await.unwrap();
        assert_ne!(dep.id, second.id);
    }

    #[tokio::test]
    async fn test_insert_find_by_id_round_trip() {
        let db = test_db().await;
        let repo = db.departments();

        let mut dep = Department::new("Sales");
        repo.insert(&mut dep).await.unwrap();

        let found = repo.find_by_id(dep.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found, dep);
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let db = test_db().await;
        let repo = db.departments();

        let found = repo.find_by_id(9999).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_name() {
        let db = test_db().await;
        let repo = db.departments();

        for name in ["Sales", "Books", "IT"] {
            let mut dep = Department::new(name);
            repo.insert(&mut dep).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Books", "IT", "Sales"]);
    }

    #[tokio::test]
    async fn test_update_changes_row() {
        let db = test_db().await;
        let repo = db.departments();

        let mut dep = Department::new("Salse");
        repo.insert(&mut dep).await.unwrap();

        dep.name = "Sales".to_string();
        repo.update(&dep).await.unwrap();

        let found = repo.find_by_id(dep.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, "Sales");
    }

    #[tokio::test]
    async fn test_update_absent_id_is_silent() {
        let db = test_db().await;
        let repo = db.departments();

        let ghost = Department {
            id: Some(9999),
            name: "Ghost".to_string(),
        };
        // No existence check on update: this succeeds without touching rows
        repo.update(&ghost).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let db = test_db().await;
        let repo = db.departments();

        let mut dep = Department::new("Sales");
        repo.insert(&mut dep).await.unwrap();

        let before = repo.find_all().await.unwrap();
        repo.delete_by_id(9999).await.unwrap();
        let after = repo.find_all().await.unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = test_db().await;
        let repo = db.departments();

        let mut dep = Department::new("Sales");
        repo.insert(&mut dep).await.unwrap();
        let id = dep.id.unwrap();

        repo.delete_by_id(id).await.unwrap();
        assert_eq!(repo.find_by_id(id).await.unwrap(), None);
    }
}
