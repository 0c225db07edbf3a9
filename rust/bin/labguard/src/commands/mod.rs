//! Command implementations. Each opens the local store through [`open`].

pub mod report;
pub mod sku;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use labguard_core::{PasskeyAuth, ServiceConfig};
use labguard_kv::{KVStore, RedbStore};
use labguard_qc::catalog::starter_catalog;
use labguard_qc::model::{DualSide, DualValue, InputKind, QcPoint};
use labguard_qc::{QcService, RecordStore};
use tracing::debug;

use crate::config::AppConfig;

/// Open the redb database and wire up the service.
pub fn open(app: &AppConfig, storage: &ServiceConfig) -> Result<QcService> {
    let db_path = storage.resolve_db_path();
    debug!("opening {}", db_path.display());
    let kv: Arc<dyn KVStore> = Arc::new(
        RedbStore::open(&db_path)
            .map_err(|e| anyhow::anyhow!("failed to open {}: {}", db_path.display(), e))?,
    );
    let store = Arc::new(RecordStore::new(kv, starter_catalog()));
    let auth = Arc::new(PasskeyAuth::new(app.admin.passkey.clone()));
    Ok(QcService::new(store, auth, app.operator.name.clone()))
}

/// Read one line from stdin after printing `msg` to stderr.
pub fn prompt(msg: &str) -> Result<String> {
    eprint!("{}", msg);
    std::io::stderr().flush()?;
    let mut s = String::new();
    std::io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn confirm(msg: &str) -> Result<bool> {
    Ok(prompt(msg)?.eq_ignore_ascii_case("y"))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Checklist table. Rows are numbered from 1, matching `--set`/`--status`.
pub fn print_points(points: &[QcPoint]) {
    println!(
        "{:>3} {:44} {:28} {:10} {:22} {:6}",
        "#", "PARAMETER", "STANDARD", "TOLERANCE", "ACTUAL", "STATUS"
    );
    for (i, p) in points.iter().enumerate() {
        let status = if p.status.as_str().is_empty() {
            "-"
        } else {
            p.status.as_str()
        };
        println!(
            "{:>3} {:44} {:28} {:10} {:22} {:6}",
            i + 1,
            p.parameter,
            p.standard,
            p.tolerance,
            display_actual(p),
            status
        );
    }
}

/// A checkpoint result for display. Length/width rows are split into their
/// two sides; rows that do not decode are shown as stored.
pub fn display_actual(point: &QcPoint) -> String {
    if point.input_kind() == InputKind::Dual && DualValue::decode(&point.actual).is_some() {
        return format!(
            "L {} / W {}",
            dash_if_empty(&point.dual(DualSide::Length)),
            dash_if_empty(&point.dual(DualSide::Width))
        );
    }
    dash_if_empty(&point.actual).to_string()
}

/// How a checkpoint's result is entered, for `labguard checklist`.
pub fn input_hint(point: &QcPoint) -> String {
    match point.input_kind() {
        InputKind::Text => "text".to_string(),
        InputKind::Dual => "--dual <L>,<W>".to_string(),
        InputKind::Choice(options) => options.join(" | "),
    }
}

pub fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
