//! Lab report commands.

use std::path::Path;

use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use labguard_qc::model::{DualSide, LabReport, QcStatus, ReportType};
use labguard_qc::{GeneralInfo, QcService, ReportDraft};

use super::{dash_if_empty, print_json, print_points};

/// Everything `labguard report new` collects before submitting.
#[derive(Debug)]
pub struct NewReport {
    pub category: String,
    pub sku_id: String,
    pub info: GeneralInfo,
    /// `"<n>=<value>"`
    pub set: Vec<String>,
    /// `"<n>=<status>"`
    pub status: Vec<String>,
    /// `"<n>=<L>,<W>"`
    pub dual: Vec<String>,
    pub image: Option<String>,
}

/// Split `"<n>=<value>"` into a zero-based index and the value.
fn parse_assignment(arg: &str) -> Result<(usize, &str)> {
    let (n, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected <n>=<value>, got \"{}\".", arg))?;
    let n: usize = n
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid checkpoint number in \"{}\".", arg))?;
    let index = n
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Checkpoint numbers start at 1."))?;
    Ok((index, value.trim()))
}

/// Encode an image file as a data URL, with the MIME type taken from the
/// file extension.
fn data_url(path: &Path, bytes: &[u8]) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Apply the command-line edits to a draft.
fn fill(draft: &mut ReportDraft, req: &NewReport) -> Result<()> {
    for arg in &req.set {
        let (i, value) = parse_assignment(arg)?;
        draft.set_actual(i, value)?;
    }
    for arg in &req.dual {
        let (i, value) = parse_assignment(arg)?;
        let (length, width) = value
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("Expected <n>=<L>,<W>, got \"{}\".", arg))?;
        draft.set_dual(i, DualSide::Length, length.trim())?;
        draft.set_dual(i, DualSide::Width, width.trim())?;
    }
    for arg in &req.status {
        let (i, value) = parse_assignment(arg)?;
        let status = QcStatus::parse(value).ok_or_else(|| {
            anyhow::anyhow!("Unknown status \"{}\" (pass, fail, na, blank).", value)
        })?;
        draft.set_status(i, status)?;
    }
    if let Some(path) = &req.image {
        if draft.category() != ReportType::Sack {
            anyhow::bail!("--image only applies to Sack reports.");
        }
        let path = Path::new(path);
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        draft.set_sack_image(Some(data_url(path, &bytes)));
    }
    Ok(())
}

pub fn create(svc: &QcService, req: NewReport, output_json: bool) -> Result<LabReport> {
    let category = ReportType::parse(&req.category)
        .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", req.category))?;

    let mut draft = svc.start_report(category, &req.sku_id)?;
    draft.info = req.info.clone();
    fill(&mut draft, &req)?;
    let report = svc.submit(draft)?;

    if output_json {
        print_json(&report)?;
    } else {
        let failed = report
            .data
            .qc_points
            .iter()
            .filter(|p| p.status == QcStatus::Fail)
            .count();
        println!("report {} saved.", report.id);
        println!(
            "  {} checkpoints, {} failed",
            report.data.qc_points.len(),
            failed
        );
    }
    Ok(report)
}

pub fn list(svc: &QcService, search: Option<&str>, output_json: bool) -> Result<()> {
    let reports = match search {
        Some(term) => svc.search_reports(term)?,
        None => svc.list_reports()?,
    };

    if output_json {
        return print_json(&reports);
    }
    if reports.is_empty() {
        println!("No reports found.");
        return Ok(());
    }

    println!(
        "{:36} {:10} {:16} {:30} {:24}",
        "ID", "TYPE", "INVOICE", "SKU", "CREATED"
    );
    for r in &reports {
        println!(
            "{:36} {:10} {:16} {:30} {:24}",
            r.id, r.category, r.invoice_number, r.data.sku_name, r.created_at
        );
    }
    Ok(())
}

pub fn show(svc: &QcService, id: &str, output_json: bool) -> Result<()> {
    let r = svc.get_report(id)?;
    if output_json {
        return print_json(&r);
    }

    let d = &r.data;
    println!("Report:          {}", r.id);
    println!("Type:            {}", r.category);
    println!("SKU:             {}", d.sku_name);
    println!("Material code:   {}", dash_if_empty(&d.material_code));
    println!("Unit:            {}", dash_if_empty(&d.unit));
    println!("Vendor:          {}", dash_if_empty(&d.vendor));
    println!(
        "Invoice:         {} ({})",
        d.invoice_number,
        dash_if_empty(&d.invoice_date)
    );
    println!(
        "Rolls:           {} supplied, {} sampled",
        dash_if_empty(&d.rolls_supplied),
        dash_if_empty(&d.rolls_sampled)
    );
    println!(
        "Received:        unit {}, lab {}",
        dash_if_empty(&d.receiving_date_unit),
        dash_if_empty(&d.receiving_date_lab)
    );
    println!("Reported:        {}", dash_if_empty(&d.reporting_date));
    println!("Created:         {} by {}", r.created_at, r.created_by);
    if let Some(image) = &d.sack_image {
        println!("Image:           attached ({} bytes encoded)", image.len());
    }
    println!();
    print_points(&d.qc_points);
    if !d.remarks.is_empty() {
        println!();
        println!("Remarks: {}", d.remarks);
    }
    Ok(())
}

/// The passkey given on the command line, or else one read through
/// `read_secret` (a no-echo prompt in the binary).
pub fn resolve_passkey<F>(given: Option<String>, read_secret: F) -> Result<String>
where
    F: FnOnce() -> std::io::Result<String>,
{
    match given {
        Some(p) => Ok(p),
        None => Ok(read_secret()?),
    }
}

pub fn delete(svc: &QcService, id: &str, passkey: &str) -> Result<()> {
    svc.delete_report(id, passkey)?;
    println!("report {} deleted.", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use labguard_core::PasskeyAuth;
    use labguard_kv::{KVStore, MemoryStore};
    use labguard_qc::RecordStore;
    use labguard_qc::catalog::starter_catalog;

    use super::*;

    fn service() -> QcService {
        let kv: Arc<dyn KVStore> = Arc::new(MemoryStore::new());
        let store = Arc::new(RecordStore::new(kv, starter_catalog()));
        QcService::new(store, Arc::new(PasskeyAuth::new("admin")), "cli")
    }

    fn request(category: &str, sku: &str) -> NewReport {
        NewReport {
            category: category.to_string(),
            sku_id: sku.to_string(),
            info: GeneralInfo {
                invoice_number: "INV-42".to_string(),
                ..Default::default()
            },
            set: Vec::new(),
            status: Vec::new(),
            dual: Vec::new(),
            image: None,
        }
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("3=Yes").unwrap(), (2, "Yes"));
        assert_eq!(parse_assignment(" 1 = 151 ").unwrap(), (0, "151"));
        assert_eq!(parse_assignment("2=a=b").unwrap(), (1, "a=b"));
        assert!(parse_assignment("0=x").is_err());
        assert!(parse_assignment("x=1").is_err());
        assert!(parse_assignment("12").is_err());
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url(Path::new("a/sack.PNG"), b"hi"), "data:image/png;base64,aGk=");
        assert!(
            data_url(Path::new("scan"), b"").starts_with("data:application/octet-stream;base64,")
        );
    }

    #[test]
    fn test_resolve_passkey() {
        let given = resolve_passkey(Some("s3cret".to_string()), || {
            panic!("should not prompt when --passkey is given")
        })
        .unwrap();
        assert_eq!(given, "s3cret");

        let typed = resolve_passkey(None, || Ok("typed".to_string())).unwrap();
        assert_eq!(typed, "typed");

        let err = resolve_passkey(None, || {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no tty"))
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_delete_with_passkey() {
        let svc = service();
        let report = create(&svc, request("laminate", "sku-001"), false).unwrap();

        let wrong = resolve_passkey(None, || Ok("guess".to_string())).unwrap();
        assert!(delete(&svc, &report.id, &wrong).is_err());

        let right = resolve_passkey(None, || Ok("admin".to_string())).unwrap();
        delete(&svc, &report.id, &right).unwrap();
        assert!(svc.list_reports().unwrap().is_empty());
    }

    #[test]
    fn test_create_sack_report() {
        let svc = service();
        let tmp = tempfile::tempdir().unwrap();
        let img = tmp.path().join("sack.jpg");
        std::fs::write(&img, [0xff, 0xd8, 0xff]).unwrap();

        let mut req = request("sack", "sku-sack-001");
        req.set = vec!["1=452".to_string(), "14=Yes".to_string()];
        req.status = vec!["11=fail".to_string()];
        req.dual = vec!["11=18, 19".to_string()];
        req.image = Some(img.to_string_lossy().to_string());

        let report = create(&svc, req, false).unwrap();
        let points = &report.data.qc_points;
        assert_eq!(points[0].actual, "452");
        assert_eq!(points[13].actual, "Yes");
        assert_eq!(points[10].actual, "18 (L) X 19 (W)");
        assert_eq!(points[10].status, QcStatus::Fail);
        assert_eq!(report.data.sack_image.as_deref(), Some("data:image/jpeg;base64,/9j/"));
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let svc = service();

        let mut req = request("laminate", "sku-001");
        req.image = Some("/nonexistent.png".to_string());
        assert!(create(&svc, req, false).unwrap_err().to_string().contains("Sack"));

        let mut req = request("laminate", "sku-001");
        req.set = vec!["13=Maybe".to_string()];
        assert!(create(&svc, req, false).is_err());

        let mut req = request("laminate", "sku-001");
        req.status = vec!["1=great".to_string()];
        assert!(create(&svc, req, false).is_err());

        assert!(create(&svc, request("tshirt", "sku-001"), false).is_err());
        assert!(svc.list_reports().unwrap().is_empty());
    }
}
