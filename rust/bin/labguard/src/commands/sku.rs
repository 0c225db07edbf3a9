//! SKU catalog commands.

use anyhow::Result;
use labguard_qc::QcService;
use labguard_qc::model::{ReportType, Sku, Standards};

use super::{dash_if_empty, input_hint, print_json};

pub fn list(svc: &QcService, search: Option<&str>, output_json: bool) -> Result<()> {
    let skus = match search {
        Some(term) => svc.search_skus(term)?,
        None => svc.list_skus()?,
    };

    if output_json {
        return print_json(&skus);
    }
    if skus.is_empty() {
        println!("No SKUs found.");
        return Ok(());
    }

    println!("{:36} {:12} {}", "ID", "TYPE", "NAME");
    for sku in &skus {
        println!("{:36} {:12} {}", sku.id, sku.category(), sku.name);
    }
    Ok(())
}

pub fn show(svc: &QcService, id: &str, output_json: bool) -> Result<()> {
    let sku = svc.get_sku(id)?;
    if output_json {
        return print_json(&sku);
    }

    println!("ID:    {}", sku.id);
    println!("Name:  {}", sku.name);
    println!("Type:  {}", sku.category());

    let value = serde_json::to_value(&sku)?;
    let standards = value
        .get("laminateStandards")
        .or_else(|| value.get("sackStandards"))
        .and_then(|v| v.as_object());
    match standards {
        Some(fields) => {
            println!();
            for (name, v) in fields {
                println!("  {:28} {}", name, dash_if_empty(v.as_str().unwrap_or_default()));
            }
        }
        None => println!("No standards for this category."),
    }
    Ok(())
}

/// Parse a SKU from JSON. A missing `id` is treated as a new SKU.
pub fn parse_sku(body: &str) -> Result<Sku> {
    let mut value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;
    if let Some(obj) = value.as_object_mut() {
        obj.entry("id").or_insert_with(|| serde_json::Value::String(String::new()));
    }
    serde_json::from_value(value).map_err(|e| anyhow::anyhow!("Invalid SKU: {}", e))
}

pub fn save(svc: &QcService, body: &str) -> Result<()> {
    let sku = svc.save_sku(parse_sku(body)?)?;
    println!("sku {} saved.", sku.id);
    Ok(())
}

pub fn template(category: &str) -> Result<()> {
    let category = ReportType::parse(category)
        .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", category))?;
    print_json(&Sku::new("", "", Standards::empty(category)))
}

pub fn delete(svc: &QcService, id: &str) -> Result<()> {
    svc.get_sku(id)?;
    svc.delete_sku(id)?;
    println!("sku {} deleted.", id);
    Ok(())
}

pub fn checklist(svc: &QcService, sku_id: &str, output_json: bool) -> Result<()> {
    let points = svc.checklist(sku_id)?;
    if output_json {
        return print_json(&points);
    }

    println!("{:>3} {:44} {:28} {:10} {}", "#", "PARAMETER", "STANDARD", "TOLERANCE", "INPUT");
    for (i, p) in points.iter().enumerate() {
        println!(
            "{:>3} {:44} {:28} {:10} {}",
            i + 1,
            p.parameter,
            p.standard,
            p.tolerance,
            input_hint(p)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sku_without_id() {
        let sku = parse_sku(
            r#"{"name":"50KG Sack","type":"Sack","sackStandards":{"sackWidth":"600"}}"#,
        )
        .unwrap();
        assert!(sku.id.is_empty());
        assert_eq!(sku.category(), ReportType::Sack);
        match sku.standards {
            Standards::Sack(s) => assert_eq!(s.sack_width, "600"),
            other => panic!("unexpected standards: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sku_rejects_mismatched_payload() {
        let err = parse_sku(r#"{"id":"x","name":"X","type":"Sack","laminateStandards":{}}"#)
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid SKU"));
        assert!(parse_sku("not json").is_err());
    }
}
