pub mod category;
pub mod dual;
pub mod qc_point;
pub mod report;
pub mod sku;

pub use category::ReportType;
pub use dual::{DualSide, DualValue};
pub use qc_point::{DUAL_PARAMETERS, InputKind, QcPoint, QcStatus};
pub use report::{LabReport, ReportData};
pub use sku::{LaminateStandards, SackStandards, Sku, Standards};
