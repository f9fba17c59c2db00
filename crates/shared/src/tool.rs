//! Tool types and the static catalog for seezee-mcp

use crate::document::DocKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP Tool definition (matches @modelcontextprotocol/sdk)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name
    pub name: String,

    /// Tool description
    #[serde(default)]
    pub description: Option<String>,

    /// JSON Schema for input parameters
    #[serde(default)]
    pub input_schema: Value,
}

impl Tool {
    /// Create a new tool with an empty object schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The closed set of operations this server dispatches.
///
/// Four single-document getters plus the composite `get_all`. Matching on
/// this enum rather than on raw strings keeps dispatch exhaustive; anything
/// that fails `from_name` is an unknown tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    GetIdentity,
    GetServices,
    GetTone,
    GetRules,
    GetAll,
}

impl ToolKind {
    /// All tools, in the order the catalog advertises them.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::GetIdentity,
        ToolKind::GetServices,
        ToolKind::GetTone,
        ToolKind::GetRules,
        ToolKind::GetAll,
    ];

    /// Wire name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::GetIdentity => "get_identity",
            ToolKind::GetServices => "get_services",
            ToolKind::GetTone => "get_tone",
            ToolKind::GetRules => "get_rules",
            ToolKind::GetAll => "get_all",
        }
    }

    /// Parse a wire name into a tool kind.
    pub fn from_name(name: &str) -> Option<ToolKind> {
        match name {
            "get_identity" => Some(ToolKind::GetIdentity),
            "get_services" => Some(ToolKind::GetServices),
            "get_tone" => Some(ToolKind::GetTone),
            "get_rules" => Some(ToolKind::GetRules),
            "get_all" => Some(ToolKind::GetAll),
            _ => None,
        }
    }

    /// The single document this tool reads, or `None` for the composite.
    pub fn doc(&self) -> Option<DocKind> {
        match self {
            ToolKind::GetIdentity => Some(DocKind::Identity),
            ToolKind::GetServices => Some(DocKind::Services),
            ToolKind::GetTone => Some(DocKind::Tone),
            ToolKind::GetRules => Some(DocKind::Rules),
            ToolKind::GetAll => None,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ToolKind::GetIdentity => {
                "Get SeeZee Studios company identity, positioning, mission, team, and \
                 differentiators. Use this to understand who SeeZee Studios is and what \
                 makes them unique."
            }
            ToolKind::GetServices => {
                "Get SeeZee Studios canonical service definitions, priorities, audiences, \
                 and pricing models. Use this before writing about services or making \
                 service-related decisions."
            }
            ToolKind::GetTone => {
                "Get SeeZee Studios tone, voice, language guidelines, and communication \
                 rules. Use this before writing any copy, documentation, or communications."
            }
            ToolKind::GetRules => {
                "Get SeeZee Studios hard constraints, positioning rules, and agent behavior \
                 guidelines. Use this to understand boundaries and absolute constraints."
            }
            ToolKind::GetAll => {
                "Get all SeeZee Studios MCP data at once (identity, services, tone, rules). \
                 Use this for comprehensive context when starting a new task."
            }
        }
    }

    /// The catalog entry advertised for this tool.
    pub fn describe(&self) -> Tool {
        Tool::new(self.name()).with_description(self.description())
    }
}

/// The static tool catalog, same five entries in the same order on every call.
pub fn catalog() -> Vec<Tool> {
    ToolKind::ALL.iter().map(|kind| kind.describe()).collect()
}

/// Wire names of every catalog entry, in catalog order.
pub fn catalog_names() -> Vec<String> {
    ToolKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}
