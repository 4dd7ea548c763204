// SPDX-License-Identifier: MIT

//! Rule loader - YAML file loading and parsing
//!
//! Reads a YAML list of dependency nodes. Kind tags the evaluator does not
//! know are kept as [`DependencyNode::Unknown`] rather than rejected.

use super::node::DependencyNode;
use crate::error::LoadError;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Loads dependency nodes from YAML files
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load dependency nodes from a YAML file
    pub fn load_rules<P: AsRef<Path>>(&self, path: P) -> Result<Vec<DependencyNode>, LoadError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse dependency nodes from a YAML string
    pub fn parse_yaml(content: &str) -> Result<Vec<DependencyNode>, LoadError> {
        let entries: Vec<Value> = serde_yaml::from_str(content)?;
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_node(index, entry))
            .collect()
    }

    fn parse_node(index: usize, entry: Value) -> Result<DependencyNode, LoadError> {
        let kind = entry
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(LoadError::MissingKind { index })?;

        if !DependencyNode::is_known_kind(kind) {
            tracing::debug!("Node #{} has unsupported kind '{}'", index, kind);
            return Ok(DependencyNode::unknown(kind));
        }

        Ok(serde_yaml::from_value(entry)?)
    }
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new()
    }
}
