// SPDX-License-Identifier: MIT

//! Path variable resolver port

use std::collections::HashMap;
use std::path::PathBuf;

/// Token name for the OS installation directory
pub const WINDOWS_TOKEN: &str = "WINDOWS";
/// Token name for the temporary directory
pub const TEMP_TOKEN: &str = "TEMP";

/// Expands placeholder tokens such as `%WINDOWS%` in a rule path
pub trait PathResolver: Send + Sync {
    fn resolve(&self, template: &str, tokens: &HashMap<String, String>) -> PathBuf;
}
