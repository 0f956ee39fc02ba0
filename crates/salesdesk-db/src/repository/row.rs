//! Row → entity mapping for joined seller reads.
//!
//! The seller queries select the seller columns plus the joined department
//! as `department_id` / `department_name` aliases. Department reads on their
//! own table go through `FromRow` instead; these helpers exist for the join
//! shape, where a derive cannot build the nested entity.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error::DbResult;
use salesdesk_core::{Department, Seller};

/// Builds a department from the joined columns of a seller row.
pub(crate) fn department_from_row(row: &SqliteRow) -> DbResult<Department> {
    Ok(Department {
        id: Some(row.try_get("department_id")?),
        name: row.try_get("department_name")?,
    })
}

/// Builds a seller from a joined row and an already-constructed department.
///
/// The department is passed in (rather than read here) so that multi-row
/// reads can reuse one constructed value per distinct department id.
pub(crate) fn seller_from_row(row: &SqliteRow, department: Department) -> DbResult<Seller> {
    Ok(Seller {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        birth_date: row.try_get("birth_date")?,
        base_salary: row.try_get("base_salary")?,
        department,
    })
}
