pub mod draft;
mod export;
mod report;
mod sku;

use std::sync::Arc;

use labguard_core::Authenticator;

use crate::store::RecordStore;

pub use draft::{GeneralInfo, ReportDraft};

/// Permission checked before a report is deleted.
pub const PERM_REPORT_DELETE: &str = "qc:report:delete";

/// `skuName` recorded when the selected SKU disappeared before submit.
pub const UNKNOWN_SKU_NAME: &str = "Unknown";

/// The report workflow and catalog management on top of a
/// [`RecordStore`].
pub struct QcService {
    store: Arc<RecordStore>,
    auth: Arc<dyn Authenticator>,
    operator: String,
}

impl QcService {
    /// `operator` is stamped as `createdBy` on submitted reports.
    pub fn new(
        store: Arc<RecordStore>,
        auth: Arc<dyn Authenticator>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            store,
            auth,
            operator: operator.into(),
        }
    }
}
