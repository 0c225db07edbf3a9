//! Checklist generation: expand a SKU's standards into QC checkpoints.
//!
//! Output is all variable checkpoints (copied from the SKU, declared order)
//! followed by the category's fixed checkpoints. Reports store the result
//! verbatim, so changing either table only affects reports created later.

use crate::model::{LaminateStandards, QcPoint, QcStatus, SackStandards, Sku, Standards};

/// Tolerance shown for rows without one.
pub const NO_TOLERANCE: &str = "-";

const NOT_APPLICABLE: &str = "NOT APPLICABLE";

/// A constant checkpoint. Empty `options` means free text (or dual input,
/// see [`crate::model::DUAL_PARAMETERS`]).
struct FixedParam {
    parameter: &'static str,
    standard: &'static str,
    status: QcStatus,
    options: &'static [&'static str],
}

const fn fixed(
    parameter: &'static str,
    standard: &'static str,
    status: QcStatus,
    options: &'static [&'static str],
) -> FixedParam {
    FixedParam {
        parameter,
        standard,
        status,
        options,
    }
}

const LAMINATE_FIXED: [FixedParam; 9] = [
    fixed(
        "Text matter",
        "As per approved artwork",
        QcStatus::Pass,
        &["readable", "not-readable", NOT_APPLICABLE],
    ),
    fixed(
        "Quality of security text",
        "As per approved sample",
        QcStatus::Pass,
        &["Acceptable", "Not-Acceptable", NOT_APPLICABLE],
    ),
    fixed(
        "Color scheme",
        "As per approved shade card",
        QcStatus::Pass,
        &["Acceptable", "Not-Acceptable", NOT_APPLICABLE],
    ),
    fixed(
        "Scanning and verification of Barcode",
        "Verification min grade C",
        QcStatus::Pass,
        &["readable", "not-readable", NOT_APPLICABLE],
    ),
    fixed(
        "Supplier name and registration number printed on laminate",
        "As per approved shade card",
        QcStatus::Pass,
        &["Present", "not present", NOT_APPLICABLE],
    ),
    fixed(
        "TRIAL of roll on the machine",
        "Available",
        QcStatus::Pass,
        &["Done", "not done", "pending", "it will not received at unit 8", NOT_APPLICABLE],
    ),
    fixed("COA", "Available", QcStatus::Pass, &["Yes", "NO", NOT_APPLICABLE]),
    fixed(
        "Presence of micro perforation",
        "As per SOP",
        QcStatus::Pass,
        &["Yes", "NO", NOT_APPLICABLE],
    ),
    fixed("Spectrophotometer report", "Available", QcStatus::Pass, &["Yes", "NO", NOT_APPLICABLE]),
];

// "Color scheme" and "COA" start unset on sacks but not on laminates.
// Kept as-is until the product owner confirms which is intended.
const SACK_FIXED: [FixedParam; 10] = [
    fixed(
        "Text matter",
        "As per approved artwork",
        QcStatus::Pass,
        &["Matched", "NOT MATCH", NOT_APPLICABLE],
    ),
    fixed("Color scheme", "", QcStatus::Unset, &["Acceptable", "NOT ACCEPTABLE", NOT_APPLICABLE]),
    fixed(
        "Supplier name printed on sacks",
        "Should be present",
        QcStatus::Pass,
        &["Present", "NOT PRESENT", NOT_APPLICABLE],
    ),
    fixed(
        "Presence of gussetts",
        "As per specification",
        QcStatus::Pass,
        &["Non gussetted", "GUSSETTED", NOT_APPLICABLE],
    ),
    fixed(
        "Stitching",
        "As per specification",
        QcStatus::Pass,
        &["Matched", "NOT MATCH", NOT_APPLICABLE],
    ),
    fixed("GSM", "", QcStatus::Pass, &[]),
    fixed("Mesh", "Min 20 (L) X 20 (W)", QcStatus::Pass, &[]),
    fixed("Breaking strength", "Min 380N (L) X 350 N (W)", QcStatus::Pass, &[]),
    fixed(
        "Trial - fill the sack, stitch, pull and drop",
        "Available",
        QcStatus::Pass,
        &["Done", "NOT DONE", NOT_APPLICABLE],
    ),
    fixed("COA", "Available", QcStatus::Unset, &["Yes", "No", NOT_APPLICABLE]),
];

/// Generate the checklist for `sku`.
///
/// Returns None for categories without a checklist (the reserved ones).
pub fn generate(sku: &Sku) -> Option<Vec<QcPoint>> {
    match &sku.standards {
        Standards::Laminate(std) => Some(laminate(std)),
        Standards::Sack(std) => Some(sack(std)),
        Standards::MonoCarton | Standards::TShirt | Standards::CfcBox => None,
    }
}

fn laminate(std: &LaminateStandards) -> Vec<QcPoint> {
    let variable = [
        ("Pouch width (mm)", &std.pouch_width, std.pouch_width_tolerance.as_str()),
        ("Pouch height (mm)", &std.pouch_height, std.pouch_height_tolerance.as_str()),
        ("GSM (g/m²)", &std.gsm, std.gsm_tolerance.as_str()),
        ("Weight of each pouch (g)", &std.pouch_weight, std.pouch_weight_tolerance.as_str()),
        ("Roll weight (kg)", &std.roll_weight, NO_TOLERANCE),
        ("Length and width of the eye mark", &std.eye_mark_dimensions, NO_TOLERANCE),
        ("Bond strength", &std.bond_strength, NO_TOLERANCE),
        ("Seal strength", &std.seal_strength, NO_TOLERANCE),
        ("COF", &std.cof, NO_TOLERANCE),
        ("DART value", &std.dart_value, NO_TOLERANCE),
    ];
    assemble(&variable, &LAMINATE_FIXED)
}

fn sack(std: &SackStandards) -> Vec<QcPoint> {
    let variable = [
        ("Sack width (mm)", &std.sack_width, std.sack_width_tolerance.as_str()),
        ("Sack height (mm)", &std.sack_height, std.sack_height_tolerance.as_str()),
        ("Weight of each sack (g)", &std.sack_weight, std.sack_weight_tolerance.as_str()),
        ("Bale weight and counting", &std.bale_weight, NO_TOLERANCE),
    ];
    assemble(&variable, &SACK_FIXED)
}

fn assemble(variable: &[(&str, &String, &str)], fixed: &[FixedParam]) -> Vec<QcPoint> {
    let mut points = Vec::with_capacity(variable.len() + fixed.len());
    points.extend(
        variable
            .iter()
            .map(|(param, standard, tolerance)| {
                QcPoint::new(*param, standard.as_str(), *tolerance, QcStatus::Pass)
            }),
    );
    points.extend(fixed.iter().map(|f| {
        let point = QcPoint::new(f.parameter, f.standard, NO_TOLERANCE, f.status);
        if f.options.is_empty() {
            point
        } else {
            point.with_options(f.options)
        }
    }));
    points
}
