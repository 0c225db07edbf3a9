use labguard_core::{ServiceError, new_id};

use super::QcService;
use crate::checklist;
use crate::model::{QcPoint, Sku};

impl QcService {
    pub fn list_skus(&self) -> Result<Vec<Sku>, ServiceError> {
        self.store.list_skus()
    }

    /// Catalog entries whose name or id contains `term` (case-insensitive).
    pub fn search_skus(&self, term: &str) -> Result<Vec<Sku>, ServiceError> {
        Ok(self
            .store
            .list_skus()?
            .into_iter()
            .filter(|s| s.matches(term))
            .collect())
    }

    pub fn get_sku(&self, id: &str) -> Result<Sku, ServiceError> {
        self.store
            .get_sku(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("sku '{}' not found", id)))
    }

    /// Create or update a catalog entry. A blank id gets a fresh one.
    pub fn save_sku(&self, mut sku: Sku) -> Result<Sku, ServiceError> {
        sku.name = sku.name.trim().to_string();
        if sku.name.is_empty() {
            return Err(ServiceError::Validation("sku name is required".into()));
        }
        if sku.id.trim().is_empty() {
            sku.id = new_id();
        }
        self.store.save_sku(sku.clone())?;
        Ok(sku)
    }

    pub fn delete_sku(&self, id: &str) -> Result<(), ServiceError> {
        self.store.delete_sku(id)
    }

    /// Preview the checklist a SKU would produce.
    pub fn checklist(&self, sku_id: &str) -> Result<Vec<QcPoint>, ServiceError> {
        let sku = self.get_sku(sku_id)?;
        checklist::generate(&sku).ok_or_else(|| {
            ServiceError::Validation(format!("{} skus have no checklist", sku.category()))
        })
    }
}
