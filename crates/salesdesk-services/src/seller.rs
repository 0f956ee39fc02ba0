//! Seller service.

use tracing::debug;

use crate::error::ServiceResult;
use salesdesk_core::{validation, Department, Seller};
use salesdesk_db::{Database, SellerRepository};

/// Orchestrates seller persistence for the desktop shell.
#[derive(Debug, Clone)]
pub struct SellerService {
    repo: SellerRepository,
}

impl SellerService {
    /// Creates a service backed by the given database handle.
    pub fn new(db: &Database) -> Self {
        SellerService { repo: db.sellers() }
    }

    /// Lists all sellers ordered by department name.
    pub async fn find_all(&self) -> ServiceResult<Vec<Seller>> {
        Ok(self.repo.find_all().await?)
    }

    /// Looks up one seller for form population.
    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Option<Seller>> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Lists the sellers of one department (the shell's roster filter).
    pub async fn find_by_department(&self, department: &Department) -> ServiceResult<Vec<Seller>> {
        Ok(self.repo.find_by_department(department).await?)
    }

    /// Saves a seller: insert when transient, update when persisted.
    ///
    /// Validation refuses empty names, malformed emails, negative salaries
    /// and transient departments before any statement runs. Identity
    /// presence then decides insert vs update; a successful insert leaves
    /// the entity with `Some(id)`.
    pub async fn save_or_update(&self, seller: &mut Seller) -> ServiceResult<()> {
        validation::validate_seller(seller)?;

        if seller.id.is_none() {
            debug!(name = %seller.name, "Saving new seller");
            self.repo.insert(seller).await?;
        } else {
            debug!(id = ?seller.id, "Updating seller");
            self.repo.update(seller).await?;
        }

        Ok(())
    }

    /// Removes a seller by its entity.
    ///
    /// Removing a transient seller (id `None`) is a no-op, as is removing
    /// one whose row is already gone.
    pub async fn remove(&self, seller: &Seller) -> ServiceResult<()> {
        if let Some(id) = seller.id {
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
    use chrono::NaiveDate;
    use salesdesk_core::ValidationError;
    use salesdesk_db::DbConfig;

    async fn harness() -> (Database, SellerService) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let svc = SellerService::new(&db);
        (db, svc)
    }

    async fn persisted_department(db: &Database, name: &str) -> Department {
        let mut dep = Department::new(name);
        db.departments().insert(&mut dep).await.unwrap();
        dep
    }

    fn bob(department: Department) -> Seller {
        Seller::new(
            "Bob",
            "bob@x.com",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            3000.0,
            department,
        )
    }

    #[tokio::test]
    async fn test_save_transient_inserts_and_assigns_id() {
        let (db, svc) = harness().await;
        let it = persisted_department(&db, "IT").await;

        let mut seller = bob(it);
        svc.save_or_update(&mut seller).await.unwrap();

        assert!(seller.id.is_some());
        assert_eq!(svc.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_persisted_updates_in_place() {
        let (db, svc) = harness().await;
        let it = persisted_department(&db, "IT").await;

        let mut seller = bob(it);
        svc.save_or_update(&mut seller).await.unwrap();
        let id = seller.id;

        seller.base_salary = 4200.0;
        svc.save_or_update(&mut seller).await.unwrap();

        // Update path: id unchanged, no second row
        assert_eq!(seller.id, id);
        let all = svc.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].base_salary, 4200.0);
    }

    #[tokio::test]
    async fn test_transient_department_is_refused_before_writing() {
        let (_db, svc) = harness().await;

        let mut seller = bob(Department::new("IT"));
        let err = svc.save_or_update(&mut seller).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::TransientReference { .. })
        ));

        assert!(seller.id.is_none());
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_email_is_refused() {
        let (db, svc) = harness().await;
        let it = persisted_department(&db, "IT").await;

        let mut seller = bob(it);
        seller.email = "not-an-email".to_string();
        let err = svc.save_or_update(&mut seller).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_deletes_row() {
        let (db, svc) = harness().await;
        let it = persisted_department(&db, "IT").await;

        let mut seller = bob(it);
        svc.save_or_update(&mut seller).await.unwrap();

        svc.remove(&seller).await.unwrap();
        assert!(svc.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_department_passthrough() {
        let (db, svc) = harness().await;
        let it = persisted_department(&db, "IT").await;
        let sales = persisted_department(&db, "Sales").await;

        let mut s1 = bob(it.clone());
        svc.save_or_update(&mut s1).await.unwrap();

        let mut s2 = bob(sales.clone());
        s2.name = "Eve".to_string();
        svc.save_or_update(&mut s2).await.unwrap();

        let in_sales = svc.find_by_department(&sales).await.unwrap();
        assert_eq!(in_sales.len(), 1);
        assert_eq!(in_sales[0].name, "Eve");
    }
}
