use serde::{Deserialize, Serialize};

/// Report category. Only Laminate and Sack have standards and a checklist;
/// the other three are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    #[serde(rename = "Laminate")]
    Laminate,
    #[serde(rename = "Sack")]
    Sack,
    #[serde(rename = "Mono Carton")]
    MonoCarton,
    #[serde(rename = "T-Shirt")]
    TShirt,
    #[serde(rename = "CFC Box")]
    CfcBox,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        Self::Laminate,
        Self::Sack,
        Self::MonoCarton,
        Self::TShirt,
        Self::CfcBox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laminate => "Laminate",
            Self::Sack => "Sack",
            Self::MonoCarton => "Mono Carton",
            Self::TShirt => "T-Shirt",
            Self::CfcBox => "CFC Box",
        }
    }

    /// Parse a category name. Case-insensitive; accepts the display form
    /// as well as a compact form without spaces or dashes (`monocarton`).
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = compact(s);
        Self::ALL
            .into_iter()
            .find(|t| compact(t.as_str()) == wanted)
    }

    /// Whether reports of this category can be generated.
    pub fn has_checklist(&self) -> bool {
        matches!(self, Self::Laminate | Self::Sack)
    }
}

fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        for t in ReportType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
        let t: ReportType = serde_json::from_str("\"CFC Box\"").unwrap();
        assert_eq!(t, ReportType::CfcBox);
    }

    #[test]
    fn parse_loose() {
        assert_eq!(ReportType::parse("laminate"), Some(ReportType::Laminate));
        assert_eq!(ReportType::parse("Mono Carton"), Some(ReportType::MonoCarton));
        assert_eq!(ReportType::parse("monocarton"), Some(ReportType::MonoCarton));
        assert_eq!(ReportType::parse("t-shirt"), Some(ReportType::TShirt));
        assert_eq!(ReportType::parse("cfc_box"), Some(ReportType::CfcBox));
        assert_eq!(ReportType::parse("carton"), None);
    }

    #[test]
    fn checklist_categories() {
        assert!(ReportType::Laminate.has_checklist());
        assert!(ReportType::Sack.has_checklist());
        assert!(!ReportType::TShirt.has_checklist());
    }
}
