// SPDX-License-Identifier: MIT

//! Dependency node definitions
//!
//! One variant per supported rule kind. The wire tag of each variant is the
//! vendor's kind name (`_Bios`, `_Driver`, ...); anything else becomes
//! [`DependencyNode::Unknown`] so that the evaluator can answer
//! `Indeterminate` instead of failing the load.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single declarative machine condition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind")]
pub enum DependencyNode {
    #[serde(rename = "_Bios")]
    Bios(BiosRule),
    #[serde(rename = "_CPUAddressWidth")]
    CpuAddressWidth(CpuAddressWidthRule),
    #[serde(rename = "_Driver")]
    Driver(DriverRule),
    #[serde(rename = "_EmbeddedControllerVersion")]
    EmbeddedControllerVersion(VersionRule),
    #[serde(rename = "_ExternalDetection")]
    ExternalDetection(ExternalDetectionRule),
    #[serde(rename = "_FileExists")]
    FileExists(FileExistsRule),
    #[serde(rename = "_FileVersion")]
    FileVersion(FileVersionRule),
    #[serde(rename = "_OS")]
    Os(OsRule),
    #[serde(rename = "_OSLang")]
    OsLang(OsLangRule),
    #[serde(rename = "_PnPID")]
    PnpId(PnpIdRule),
    #[serde(rename = "_RegistryKey")]
    RegistryKey(RegistryKeyRule),
    #[serde(rename = "_RegistryKeyValue")]
    RegistryKeyValue(RegistryKeyValueRule),
    #[serde(rename = "_WindowsBuildVersion")]
    WindowsBuildVersion(VersionRule),
    /// A kind tag this crate does not know how to evaluate
    #[serde(skip)]
    Unknown { kind: String },
}

/// Wire tags of every kind the evaluator understands
pub const KNOWN_KINDS: &[&str] = &[
    "_Bios",
    "_CPUAddressWidth",
    "_Driver",
    "_EmbeddedControllerVersion",
    "_ExternalDetection",
    "_FileExists",
    "_FileVersion",
    "_OS",
    "_OSLang",
    "_PnPID",
    "_RegistryKey",
    "_RegistryKeyValue",
    "_WindowsBuildVersion",
];

impl DependencyNode {
    /// The wire tag of this node
    pub fn kind(&self) -> &str {
        match self {
            DependencyNode::Bios(_) => "_Bios",
            DependencyNode::CpuAddressWidth(_) => "_CPUAddressWidth",
            DependencyNode::Driver(_) => "_Driver",
            DependencyNode::EmbeddedControllerVersion(_) => "_EmbeddedControllerVersion",
            DependencyNode::ExternalDetection(_) => "_ExternalDetection",
            DependencyNode::FileExists(_) => "_FileExists",
            DependencyNode::FileVersion(_) => "_FileVersion",
            DependencyNode::Os(_) => "_OS",
            DependencyNode::OsLang(_) => "_OSLang",
            DependencyNode::PnpId(_) => "_PnPID",
            DependencyNode::RegistryKey(_) => "_RegistryKey",
            DependencyNode::RegistryKeyValue(_) => "_RegistryKeyValue",
            DependencyNode::WindowsBuildVersion(_) => "_WindowsBuildVersion",
            DependencyNode::Unknown { kind } => kind,
        }
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        DependencyNode::Unknown { kind: kind.into() }
    }

    pub fn is_known_kind(kind: &str) -> bool {
        KNOWN_KINDS.contains(&kind)
    }
}

/// Accepted BIOS level prefixes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BiosRule {
    #[serde(alias = "level", deserialize_with = "one_or_many")]
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CpuAddressWidthRule {
    pub address_width: String,
}

/// Driver requirement.
///
/// Child elements other than HardwareID, Version, Date and File end up in
/// `unrecognized`; their presence makes the whole node indeterminate.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct DriverRule {
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hardware_ids: Vec<String>,
    /// Minimum driver date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, Value>,
}

impl DriverRule {
    pub fn for_hardware_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hardware_ids: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_unrecognized(mut self, name: impl Into<String>) -> Self {
        self.unrecognized.insert(name.into(), Value::Null);
        self
    }
}

/// Minimum version of a single platform fact
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VersionRule {
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExternalDetectionRule {
    pub command: String,
    /// Comma-separated list of accepted exit codes
    pub rc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileExistsRule {
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileVersionRule {
    pub file: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OsRule {
    #[serde(deserialize_with = "one_or_many")]
    pub os: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OsLangRule {
    /// Three-letter Windows language code, e.g. `ENU`
    pub lang: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PnpIdRule {
    pub hardware_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegistryKeyRule {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegistryKeyValueRule {
    pub key: String,
    pub value_name: String,
    /// Declared registry type; only `REG_SZ` can be evaluated
    #[serde(rename = "type", alias = "value_type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// String or list of strings
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Single(String),
    Multiple(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Single(s) => vec![s],
        OneOrMany::Multiple(v) => v,
    })
}
