//! Document identity for the brand knowledge base

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four brand documents served by this system.
///
/// Each variant maps to exactly one JSON file in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Identity,
    Services,
    Tone,
    Rules,
}

impl DocKind {
    /// All documents, in catalog order.
    pub const ALL: [DocKind; 4] = [
        DocKind::Identity,
        DocKind::Services,
        DocKind::Tone,
        DocKind::Rules,
    ];

    /// Logical document name, used as the composite key in `get_all`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Identity => "identity",
            DocKind::Services => "services",
            DocKind::Tone => "tone",
            DocKind::Rules => "rules",
        }
    }

    /// Backing file name within the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            DocKind::Identity => "identity.json",
            DocKind::Services => "services.json",
            DocKind::Tone => "tone.json",
            DocKind::Rules => "rules.json",
        }
    }

    /// Parse a logical document name.
    pub fn from_name(name: &str) -> Option<DocKind> {
        match name {
            "identity" => Some(DocKind::Identity),
            "services" => Some(DocKind::Services),
            "tone" => Some(DocKind::Tone),
            "rules" => Some(DocKind::Rules),
            _ => None,
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_is_stable() {
        let names: Vec<&str> = DocKind::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, vec!["identity", "services", "tone", "rules"]);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(DocKind::Identity.file_name(), "identity.json");
        assert_eq!(DocKind::Services.file_name(), "services.json");
        assert_eq!(DocKind::Tone.file_name(), "tone.json");
        assert_eq!(DocKind::Rules.file_name(), "rules.json");
    }

    #[test]
    fn test_from_name_round_trip() {
        for kind in DocKind::ALL {
            assert_eq!(DocKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(DocKind::from_name("pricing"), None);
        assert_eq!(DocKind::from_name(""), None);
        assert_eq!(DocKind::from_name("Identity"), None);
    }

    #[test]
    fn test_display_matches_as_str() {
        for kind in DocKind::ALL {
            assert_eq!(format!("{}", kind), kind.as_str());
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DocKind::Identity).unwrap();
        assert_eq!(json, "\"identity\"");

        let parsed: DocKind = serde_json::from_str("\"rules\"").unwrap();
        assert_eq!(parsed, DocKind::Rules);
    }
}
