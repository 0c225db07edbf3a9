use serde::{Deserialize, Serialize};

use super::category::ReportType;
use super::qc_point::QcPoint;

/// General information plus the checklist snapshot of one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub vendor: String,
    pub invoice_number: String,
    #[serde(default)]
    pub rolls_supplied: String,
    #[serde(default)]
    pub rolls_sampled: String,
    #[serde(default)]
    pub invoice_date: String,
    #[serde(default)]
    pub receiving_date_unit: String,
    #[serde(default)]
    pub receiving_date_lab: String,
    #[serde(default)]
    pub reporting_date: String,

    /// Checklist snapshot, in generation order. Never regenerated.
    pub qc_points: Vec<QcPoint>,
    #[serde(default)]
    pub remarks: String,

    /// Embedded image as a data URL. Sack reports only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sack_image: Option<String>,

    /// SKU name at the time the report was created.
    pub sku_name: String,
    #[serde(default)]
    pub material_code: String,
}

/// One completed inspection. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReport {
    pub id: String,

    #[serde(rename = "type")]
    pub category: ReportType,

    pub invoice_number: String,
    #[serde(default)]
    pub invoice_date: String,

    /// RFC 3339.
    pub created_at: String,
    pub created_by: String,

    pub data: ReportData,
}

impl LabReport {
    /// Case-insensitive match on invoice number or SKU name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.invoice_number.to_lowercase().contains(&term)
            || self.data.sku_name.to_lowercase().contains(&term)
    }
}
