use serde::{Deserialize, Deserializer, Serialize};

use super::dual::{DualSide, DualValue};

/// Parameters whose `actual` is a length/width pair.
pub const DUAL_PARAMETERS: [&str; 2] = ["Mesh", "Breaking strength"];

/// Operator verdict for one checkpoint. `Unset` is stored as `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QcStatus {
    Pass,
    Fail,
    #[serde(rename = "NA")]
    Na,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl QcStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Na => "NA",
            Self::Unset => "",
        }
    }

    /// Parse a status. Case-insensitive; `""`, `-` and `blank` mean unset.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Some(Self::Pass),
            "fail" => Some(Self::Fail),
            "na" | "n/a" => Some(Self::Na),
            "" | "-" | "blank" | "unset" => Some(Self::Unset),
            _ => None,
        }
    }
}

impl std::fmt::Display for QcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the operator enters `actual` for a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind<'a> {
    Text,
    Choice(&'a [String]),
    Dual,
}

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QcPoint {
    pub parameter: String,

    /// Approved value, snapshotted from the catalog. Never parsed.
    #[serde(deserialize_with = "string_or_number")]
    pub standard: String,

    #[serde(default)]
    pub tolerance: String,

    #[serde(deserialize_with = "string_or_number")]
    pub actual: String,

    pub status: QcStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_calculated: Option<bool>,

    /// Allowed `actual` values; when present, `actual` is empty or one of these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl QcPoint {
    /// A blank row: empty `actual`, no options.
    pub fn new(
        parameter: impl Into<String>,
        standard: impl Into<String>,
        tolerance: impl Into<String>,
        status: QcStatus,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            standard: standard.into(),
            tolerance: tolerance.into(),
            actual: String::new(),
            status,
            is_auto_calculated: None,
            options: None,
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn input_kind(&self) -> InputKind<'_> {
        if let Some(options) = &self.options {
            InputKind::Choice(options)
        } else if DUAL_PARAMETERS.contains(&self.parameter.as_str()) {
            InputKind::Dual
        } else {
            InputKind::Text
        }
    }

    /// Whether `value` is acceptable as `actual` for this row.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.options {
            Some(options) => value.is_empty() || options.iter().any(|o| o == value),
            None => true,
        }
    }

    /// Read one half of a dual value; empty when `actual` is not canonical.
    pub fn dual(&self, side: DualSide) -> String {
        DualValue::decode_or_empty(&self.actual).get(side).to_string()
    }
}

/// Accept a string or a JSON number (older records stored bare numbers).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
