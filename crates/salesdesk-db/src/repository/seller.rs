//! # Seller Repository
//!
//! Database operations for sellers. Every read joins the department table to
//! materialize the nested entity; every write carries the owning
//! department's id as the foreign key.
//!
//! ## Join + Dedup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Multi-Row Read With Department Dedup                   │
//! │                                                                     │
//! │  SELECT s.*, d.name AS department_name ... ORDER BY d.name          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  row 1: dep_id=2 ── not seen ──► construct Department{2,"IT"}       │
//! │  row 2: dep_id=2 ── seen ──────► reuse the row-1 value              │
//! │  row 3: dep_id=5 ── not seen ──► construct Department{5,"Sales"}    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Sellers sharing a department id carry equal Department values;     │
//! │  equality is by value, not object identity.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::row;
use salesdesk_core::{Department, Seller};

/// Joined projection used by every seller read path.
///
/// Tie-break note: rows are ordered by department name ascending; within
/// equal department names, row order is whatever SQLite returns.
const SELLER_SELECT: &str = "SELECT s.id, s.name, s.email, s.birth_date, s.base_salary, \
     s.department_id, d.name AS department_name \
     FROM seller s \
     JOIN department d ON d.id = s.department_id";

/// Repository for seller database operations.
#[derive(Debug, Clone)]
pub struct SellerRepository {
    pool: SqlitePool,
}

impl SellerRepository {
    /// Creates a new SellerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SellerRepository { pool }
    }

    /// Inserts a new seller and assigns the generated id.
    ///
    /// ## Side Effect
    /// On success the passed entity's `id` is set to the generated key.
    ///
    /// ## Errors
    /// * `DbError::MissingDepartmentId` - the department is transient, so no
    ///   foreign key can be bound
    /// * `DbError::NoRowsAffected` - driver reported success but zero rows
    ///   were written
    /// * `DbError::Query` - any driver failure, including a foreign-key
    ///   violation when the referenced department row does not exist (the
    ///   repository itself does not pre-check existence)
    pub async fn insert(&self, seller: &mut Seller) -> DbResult<()> {
        let department_id = seller.department.id.ok_or(DbError::MissingDepartmentId)?;

        debug!(name = %seller.name, department_id, "Inserting seller");

        let result = sqlx::query(
            "INSERT INTO seller (name, email, birth_date, base_salary, department_id) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary)
        .bind(department_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsAffected);
        }

        seller.id = Some(result.last_insert_rowid());
        Ok(())
    }

    /// Updates all scalar fields plus the foreign key, by id.
    ///
    /// No rows-affected check: updating an id that does not exist silently
    /// succeeds.
    pub async fn update(&self, seller: &Seller) -> DbResult<()> {
        let department_id = seller.department.id.ok_or(DbError::MissingDepartmentId)?;

        debug!(id = ?seller.id, "Updating seller");

        sqlx::query(
            "UPDATE seller \
             SET name = ?1, email = ?2, birth_date = ?3, base_salary = ?4, department_id = ?5 \
             WHERE id = ?6",
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary)
        .bind(department_id)
        .bind(seller.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a seller by id.
    ///
    /// Deleting an id that does not exist is a no-op.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting seller");

        sqlx::query("DELETE FROM seller WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Gets a seller by id with the nested department populated.
    ///
    /// ## Returns
    /// * `Ok(Some(Seller))` - seller found, department joined
    /// * `Ok(None)` - no matching row (never an error)
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Seller>> {
        let sql = format!("{SELLER_SELECT} WHERE s.id = ?1");

        let found = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match found {
            Some(r) => {
                let department = row::department_from_row(&r)?;
                Ok(Some(row::seller_from_row(&r, department)?))
            }
            None => Ok(None),
        }
    }

    /// Lists all sellers ordered by department name ascending.
    ///
    /// Department construction is deduplicated per distinct department id.
    pub async fn find_all(&self) -> DbResult<Vec<Seller>> {
        let sql = format!("{SELLER_SELECT} ORDER BY d.name");

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let sellers = map_joined_rows(&rows)?;
        debug!(count = sellers.len(), "Listed sellers");
        Ok(sellers)
    }

    /// Lists the sellers of one department, ordered by department name.
    ///
    /// Same shape as [`find_all`](Self::find_all) filtered by the
    /// department's id. A transient department (id `None`) binds NULL and
    /// matches no rows.
    pub async fn find_by_department(&self, department: &Department) -> DbResult<Vec<Seller>> {
        let sql = format!("{SELLER_SELECT} WHERE d.id = ?1 ORDER BY d.name");

        let rows = sqlx::query(&sql)
            .bind(department.id)
            .fetch_all(&self.pool)
            .await?;

        map_joined_rows(&rows)
    }
}

/// Maps joined rows to sellers, constructing each department once per
/// distinct id and reusing it by value for subsequent rows.
fn map_joined_rows(rows: &[SqliteRow]) -> DbResult<Vec<Seller>> {
    let mut sellers = Vec::with_capacity(rows.len());
    let mut departments: HashMap<i64, Department> = HashMap::new();

    for r in rows {
        let department_id: i64 = r.try_get("department_id")?;

        let department = match departments.get(&department_id) {
            Some(dep) => dep.clone(),
            None => {
                let dep = row::department_from_row(r)?;
                departments.insert(department_id, dep.clone());
                dep
            }
        };

        sellers.push(row::seller_from_row(r, department)?);
    }

    Ok(sellers)
}

// =============================================================================
// Unit Tests
// =============================================================================
