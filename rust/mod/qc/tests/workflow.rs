//! End-to-end report workflow against an on-disk redb store.

use std::sync::Arc;

use labguard_core::PasskeyAuth;
use labguard_kv::{KVStore, RedbStore};
use labguard_qc::catalog::starter_catalog;
use labguard_qc::model::{DualSide, QcStatus, ReportType};
use labguard_qc::{QcService, RecordStore};

fn open(path: &std::path::Path) -> QcService {
    let kv: Arc<dyn KVStore> = Arc::new(RedbStore::open(path).unwrap());
    let store = Arc::new(RecordStore::new(kv, starter_catalog()));
    QcService::new(store, Arc::new(PasskeyAuth::new("s3cret")), "inspector")
}

#[test]
fn draft_submit_search_delete_export() {
    let tmp = tempfile::tempdir().unwrap();
    let db = tmp.path().join("labguard.redb");

    let report_id = {
        let svc = open(&db);

        let mut draft = svc.start_report(ReportType::Sack, "sku-sack-001").unwrap();
        draft.info.invoice_number = "INV-2026-001".into();
        draft.info.vendor = "Sunrise Polymers".into();
        draft.info.rolls_supplied = "40".into();

        let mesh = draft
            .points()
            .iter()
            .position(|p| p.parameter == "Mesh")
            .unwrap();
        draft.set_dual(mesh, DualSide::Width, "19").unwrap();
        draft.set_dual(mesh, DualSide::Length, "21").unwrap();
        draft.set_status(mesh, QcStatus::Fail).unwrap();

        let coa = draft
            .points()
            .iter()
            .position(|p| p.parameter == "COA")
            .unwrap();
        draft.set_actual(coa, "Yes").unwrap();
        draft.set_status(coa, QcStatus::Pass).unwrap();

        let report = svc.submit(draft).unwrap();
        assert_eq!(report.data.qc_points[mesh].actual, "21 (L) X 19 (W)");
        report.id
    };

    // Reopen: everything survived.
    let svc = open(&db);
    let history = svc.list_reports().unwrap();
    assert_eq!(history.len(), 1);
    let stored = &history[0];
    assert_eq!(stored.id, report_id);
    assert_eq!(stored.created_by, "inspector");
    assert_eq!(stored.data.sku_name, "25KG Woven Sack");
    assert_eq!(stored.data.qc_points.len(), 14);

    assert_eq!(svc.search_reports("2026-001").unwrap().len(), 1);
    assert!(svc.search_reports("laminate").unwrap().is_empty());

    let backup_dir = tmp.path().join("backups");
    let path = svc.export_to(&backup_dir).unwrap();
    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["skus"].as_array().unwrap().len(), 3);
    assert_eq!(raw["reports"][0]["type"], "Sack");
    assert_eq!(raw["reports"][0]["data"]["qcPoints"][10]["parameter"], "Mesh");
    assert!(raw["timestamp"].is_string());

    assert_eq!(
        svc.delete_report(&report_id, "admin").unwrap_err().error_code(),
        "PERMISSION_DENIED"
    );
    svc.delete_report(&report_id, "s3cret").unwrap();
    assert!(svc.list_reports().unwrap().is_empty());

    // The exported file is untouched by later deletes.
    let again: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(again["reports"].as_array().unwrap().len(), 1);
}

#[test]
fn emptied_catalog_is_not_reseeded() {
    let tmp = tempfile::tempdir().unwrap();
    let db = tmp.path().join("labguard.redb");
    {
        let svc = open(&db);
        for sku in svc.list_skus().unwrap() {
            svc.delete_sku(&sku.id).unwrap();
        }
    }
    let svc = open(&db);
    assert!(svc.list_skus().unwrap().is_empty());
}
