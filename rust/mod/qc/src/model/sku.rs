use serde::{Deserialize, Serialize};

use super::category::ReportType;

/// Laminate standards. The first four measurements carry a separate
/// tolerance; the rest fold any range or minimum into the value itself
/// (e.g. "25 - 30", "Min 1.5").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LaminateStandards {
    pub pouch_width: String,
    pub pouch_width_tolerance: String,

    pub pouch_height: String,
    pub pouch_height_tolerance: String,

    pub gsm: String,
    pub gsm_tolerance: String,

    pub pouch_weight: String,
    pub pouch_weight_tolerance: String,

    pub roll_weight: String,
    pub bond_strength: String,
    pub seal_strength: String,
    pub cof: String,
    pub dart_value: String,
    pub eye_mark_dimensions: String,
}

/// Woven sack standards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SackStandards {
    pub sack_width: String,
    pub sack_width_tolerance: String,

    pub sack_height: String,
    pub sack_height_tolerance: String,

    pub sack_weight: String,
    pub sack_weight_tolerance: String,

    pub bale_weight: String,
}

/// Category-specific standards payload. The variant *is* the category, so a
/// SKU can never carry a payload that disagrees with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standards {
    Laminate(LaminateStandards),
    Sack(SackStandards),
    MonoCarton,
    TShirt,
    CfcBox,
}

impl Standards {
    pub fn category(&self) -> ReportType {
        match self {
            Self::Laminate(_) => ReportType::Laminate,
            Self::Sack(_) => ReportType::Sack,
            Self::MonoCarton => ReportType::MonoCarton,
            Self::TShirt => ReportType::TShirt,
            Self::CfcBox => ReportType::CfcBox,
        }
    }

    /// Empty payload for a category. Laminate and Sack get all-empty
    /// standards; reserved categories carry nothing.
    pub fn empty(category: ReportType) -> Self {
        match category {
            ReportType::Laminate => Self::Laminate(LaminateStandards::default()),
            ReportType::Sack => Self::Sack(SackStandards::default()),
            ReportType::MonoCarton => Self::MonoCarton,
            ReportType::TShirt => Self::TShirt,
            ReportType::CfcBox => Self::CfcBox,
        }
    }
}

/// A named product profile in the standards catalog.
///
/// Stored as `{id, name, type, laminateStandards?, sackStandards?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SkuRecord", into = "SkuRecord")]
pub struct Sku {
    pub id: String,

    /// Display label, copied into reports as `skuName`.
    pub name: String,

    pub standards: Standards,
}

impl Sku {
    pub fn new(id: impl Into<String>, name: impl Into<String>, standards: Standards) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            standards,
        }
    }

    pub fn category(&self) -> ReportType {
        self.standards.category()
    }

    /// Case-insensitive match on name or id.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.id.to_lowercase().contains(&term)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkuRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    category: ReportType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    laminate_standards: Option<LaminateStandards>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sack_standards: Option<SackStandards>,
}

impl TryFrom<SkuRecord> for Sku {
    type Error = String;

    fn try_from(r: SkuRecord) -> Result<Self, Self::Error> {
        let standards = match (r.category, r.laminate_standards, r.sack_standards) {
            (ReportType::Laminate, Some(std), None) => Standards::Laminate(std),
            (ReportType::Sack, None, Some(std)) => Standards::Sack(std),
            (ReportType::MonoCarton, None, None) => Standards::MonoCarton,
            (ReportType::TShirt, None, None) => Standards::TShirt,
            (ReportType::CfcBox, None, None) => Standards::CfcBox,
            (category, lam, sack) => {
                return Err(format!(
                    "sku '{}': type {} does not match standards payload \
                     (laminateStandards: {}, sackStandards: {})",
                    r.id,
                    category,
                    if lam.is_some() { "present" } else { "absent" },
                    if sack.is_some() { "present" } else { "absent" },
                ));
            }
        };
        Ok(Sku {
            id: r.id,
            name: r.name,
            standards,
        })
    }
}

impl From<Sku> for SkuRecord {
    fn from(sku: Sku) -> Self {
        let category = sku.category();
        let (laminate_standards, sack_standards) = match sku.standards {
            Standards::Laminate(std) => (Some(std), None),
            Standards::Sack(std) => (None, Some(std)),
            Standards::MonoCarton | Standards::TShirt | Standards::CfcBox => (None, None),
        };
        SkuRecord {
            id: sku.id,
            name: sku.name,
            category,
            laminate_standards,
            sack_standards,
        }
    }
}
