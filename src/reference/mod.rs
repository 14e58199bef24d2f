use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Platform;
use crate::error::Result;

mod builtin;

pub use builtin::builtin_table;

/// Command grouping shown in the reference filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandCategory {
    Basic,
    Cheat,
    Admin,
    Technical,
}

/// Selected command category, or every category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandFilter {
    #[default]
    All,
    #[serde(untagged)]
    Only(CommandCategory),
}

impl CommandFilter {
    pub fn admits(self, category: CommandCategory) -> bool {
        match self {
            CommandFilter::All => true,
            CommandFilter::Only(wanted) => wanted == category,
        }
    }
}

/// How a command looks on one platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDetail {
    pub syntax: String,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_syntax: Option<String>,
}

impl VersionDetail {
    pub fn new(syntax: impl Into<String>) -> Self {
        Self {
            syntax: syntax.into(),
            deprecated: false,
            deprecation_reason: None,
            version_range: None,
            permission_level: None,
            requirements: Vec::new(),
            legacy_syntax: None,
        }
    }
}

/// One entry of the static command reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRecord {
    pub name: String,
    pub description: String,
    pub category: CommandCategory,
    pub details: BTreeMap<Platform, VersionDetail>,
}

impl CommandRecord {
    /// A record is only listed for platforms it has a detail for.
    pub fn detail(&self, platform: Platform) -> Option<&VersionDetail> {
        self.details.get(&platform)
    }
}

/// Parse a command table from JSON (an array of records).
pub fn parse_table(json: &str) -> Result<Vec<CommandRecord>> {
    Ok(serde_json::from_str(json)?)
}
