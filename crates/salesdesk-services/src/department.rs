//! Department service.

use tracing::debug;

use crate::error::ServiceResult;
use salesdesk_core::{validation, Department};
use salesdesk_db::{Database, DepartmentRepository};

/// Orchestrates department persistence for the desktop shell.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    repo: DepartmentRepository,
}

impl DepartmentService {
    /// Creates a service backed by the given database handle.
    pub fn new(db: &Database) -> Self {
        DepartmentService {
            repo: db.departments(),
        }
    }

    /// Lists all departments ordered by name.
    pub async fn find_all(&self) -> ServiceResult<Vec<Department>> {
        Ok(self.repo.find_all().await?)
    }

    /// Looks up one department for form population.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Department>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Saves a department: insert when transient, update when persisted.
    ///
    /// Identity presence is the sole creation-vs-modification rule. A
    /// successful insert leaves the entity with `Some(id)`.
    pub async fn save_or_update(&self, department: &mut Department) -> ServiceResult<()> {
        validation::validate_department(department)?;

        if department.id.is_none() {
            debug!(name = %department.name, "Saving new department");
            self.repo.insert(department).await?;
        } else {
            debug!(id = ?department.id, "Updating department");
            self.repo.update(department).await?;
        }

        Ok(())
    }

    /// Removes a department by its entity.
    ///
    /// Removing a transient department (id `None`) is a no-op, as is
    /// removing one whose row is already gone.
    pub async fn remove(&self, department: &Department) -> ServiceResult<()> {
        if let Some(id) = department.id {
            self.repo.delete_by_id(id).await?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use salesdesk_core::ValidationError;
    use salesdesk_db::DbConfig;

    async fn service() -> DepartmentService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        DepartmentService::new(&db)
    }

    #[tokio::test]
    async fn test_save_transient_inserts_and_assigns_id() {
        let svc = service().await;

        let mut dep = Department::new("Sales");
        svc.save_or_update(&mut dep).await.unwrap();

        assert!(dep.id.is_some());
        assert_eq!(svc.find_all().await.unwrap(), vec![dep]);
    }

    #[tokio::test]
    async fn test_save_persisted_updates_in_place() {
        let svc = service().await;

        let mut dep = Department::new("Salse");
        svc.save_or_update(&mut dep).await.unwrap();
        let id = dep.id;

        dep.name = "Sales".to_string();
        svc.save_or_update(&mut dep).await.unwrap();

        // Update path: id unchanged, no second row
        assert_eq!(dep.id, id);
        let all = svc.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Sales");
    }

    #[tokio::test]
    async fn test_empty_name_is_refused_before_writing() {
        let svc = service().await;

        let mut dep = Department::new("  ");
        let err = svc.save_or_update(&mut dep).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Required { .. })
        ));

        assert!(dep.id.is_none());
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_deletes_row() {
        let svc = service().await;

        let mut dep = Department::new("Sales");
        svc.save_or_update(&mut dep).await.unwrap();

        svc.remove(&dep).await.unwrap();
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_transient_is_noop() {
        let svc = service().await;

        svc.remove(&Department::new("Sales")).await.unwrap();
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_passthrough() {
        let svc = service().await;

        let mut dep = Department::new("Sales");
        svc.save_or_update(&mut dep).await.unwrap();

        let found = svc.find_by_id(dep.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(dep));
        assert_eq!(svc.find_by_id(9999).await.unwrap(), None);
    }
}
