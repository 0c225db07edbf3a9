use labguard_core::{ServiceError, new_id, now_rfc3339};
use tracing::warn;

use super::{PERM_REPORT_DELETE, QcService, ReportDraft, UNKNOWN_SKU_NAME};
use crate::model::{LabReport, ReportData, ReportType};

impl QcService {
    /// Start a report of `category` for catalog entry `sku_id`.
    pub fn start_report(
        &self,
        category: ReportType,
        sku_id: &str,
    ) -> Result<ReportDraft, ServiceError> {
        if !category.has_checklist() {
            return Err(ServiceError::Validation(format!(
                "{} reports are not supported yet",
                category
            )));
        }
        let sku = self.get_sku(sku_id)?;
        let mut draft = ReportDraft::new(category);
        draft.select_sku(&sku)?;
        Ok(draft)
    }

    /// Validate a draft, snapshot it into a [`LabReport`] and persist it.
    ///
    /// Requires a selected SKU and an invoice number. On error nothing is
    /// written.
    pub fn submit(&self, draft: ReportDraft) -> Result<LabReport, ServiceError> {
        let (category, sku_id, qc_points, info, sack_image) = draft.into_parts();

        let Some(sku_id) = sku_id else {
            return Err(ServiceError::Validation(
                "select an SKU before saving the report".into(),
            ));
        };
        if info.invoice_number.trim().is_empty() {
            return Err(ServiceError::Validation("invoice number is required".into()));
        }

        let sku_name = match self.store.get_sku(&sku_id)? {
            Some(sku) => sku.name,
            None => {
                warn!(
                    "sku {} vanished before submit, recording '{}'",
                    sku_id, UNKNOWN_SKU_NAME
                );
                UNKNOWN_SKU_NAME.to_string()
            }
        };

        let report = LabReport {
            id: new_id(),
            category,
            invoice_number: info.invoice_number.clone(),
            invoice_date: info.invoice_date.clone(),
            created_at: now_rfc3339(),
            created_by: self.operator.clone(),
            data: ReportData {
                unit: info.unit,
                vendor: info.vendor,
                invoice_number: info.invoice_number,
                rolls_supplied: info.rolls_supplied,
                rolls_sampled: info.rolls_sampled,
                invoice_date: info.invoice_date,
                receiving_date_unit: info.receiving_date_unit,
                receiving_date_lab: info.receiving_date_lab,
                reporting_date: info.reporting_date,
                qc_points,
                remarks: info.remarks,
                sack_image: if category == ReportType::Sack {
                    sack_image
                } else {
                    None
                },
                sku_name,
                material_code: info.material_code,
            },
        };

        self.store.save_report(report.clone())?;
        Ok(report)
    }

    pub fn list_reports(&self) -> Result<Vec<LabReport>, ServiceError> {
        self.store.list_reports()
    }

    /// Reports whose invoice number or SKU name contains `term`
    /// (case-insensitive), oldest first.
    pub fn search_reports(&self, term: &str) -> Result<Vec<LabReport>, ServiceError> {
        Ok(self
            .store
            .list_reports()?
            .into_iter()
            .filter(|r| r.matches(term))
            .collect())
    }

    pub fn get_report(&self, id: &str) -> Result<LabReport, ServiceError> {
        self.store
            .get_report(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("report '{}' not found", id)))
    }

    /// Delete a report after the admin gate accepts `passkey`.
    pub fn delete_report(&self, id: &str, passkey: &str) -> Result<(), ServiceError> {
        if let Err(e) = self.auth.check(passkey, PERM_REPORT_DELETE) {
            warn!("report {} deletion rejected: {}", id, e);
            return Err(e);
        }
        self.get_report(id)?;
        self.store.delete_report(id)
    }
}
