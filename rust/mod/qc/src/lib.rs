//! LabGuard quality-control records: the SKU catalog, checklist generation,
//! report drafting and the persistent record store.

pub mod catalog;
pub mod checklist;
pub mod model;
pub mod service;
pub mod store;

pub use service::{GeneralInfo, QcService, ReportDraft};
pub use store::{Backup, RecordStore};
