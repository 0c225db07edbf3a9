//! Built-in starter catalog, persisted the first time the catalog is read.

use crate::model::{LaminateStandards, SackStandards, Sku, Standards};

pub fn starter_catalog() -> Vec<Sku> {
    vec![
        Sku::new(
            "sku-001",
            "Standard 1KG Laminate Pouch",
            Standards::Laminate(LaminateStandards {
                pouch_width: "150".into(),
                pouch_width_tolerance: "+/- 2mm".into(),
                pouch_height: "220".into(),
                pouch_height_tolerance: "+/- 2mm".into(),
                gsm: "85".into(),
                gsm_tolerance: "+/- 5%".into(),
                pouch_weight: "5.2".into(),
                pouch_weight_tolerance: "+/- 0.2g".into(),
                roll_weight: "25 - 30".into(),
                bond_strength: "Min 1.5".into(),
                seal_strength: "Min 2.5".into(),
                cof: "0.20 - 0.30".into(),
                dart_value: "Min 120".into(),
                eye_mark_dimensions: "10x10mm".into(),
            }),
        ),
        Sku::new(
            "sku-002",
            "Premium 5KG Rice Bag",
            Standards::Laminate(LaminateStandards {
                pouch_width: "300".into(),
                pouch_width_tolerance: "+/- 3mm".into(),
                pouch_height: "450".into(),
                pouch_height_tolerance: "+/- 3mm".into(),
                gsm: "110".into(),
                gsm_tolerance: "+/- 5%".into(),
                pouch_weight: "12.5".into(),
                pouch_weight_tolerance: "+/- 0.5g".into(),
                roll_weight: "30 - 35".into(),
                bond_strength: "Min 2.0".into(),
                seal_strength: "Min 3.0".into(),
                cof: "0.30 - 0.40".into(),
                dart_value: "Min 150".into(),
                eye_mark_dimensions: "15x15mm".into(),
            }),
        ),
        Sku::new(
            "sku-sack-001",
            "25KG Woven Sack",
            Standards::Sack(SackStandards {
                sack_width: "450".into(),
                sack_width_tolerance: "+/- 10mm".into(),
                sack_height: "850".into(),
                sack_height_tolerance: "+/- 10mm".into(),
                sack_weight: "80".into(),
                sack_weight_tolerance: "+/- 5g".into(),
                bale_weight: "500 KG".into(),
            }),
        ),
    ]
}
