// SPDX-License-Identifier: MIT

//! Registry reader port

use crate::error::HostError;

/// Read access to the registry.
///
/// Keys are full paths including the hive, e.g. `HKLM\SOFTWARE\Vendor`.
pub trait RegistryReader: Send + Sync {
    /// Whether the key exists as a container
    fn key_exists(&self, key: &str) -> bool;

    /// Read a string value; `Ok(None)` when the key or value is absent or
    /// cannot be read as a string
    fn read_string(&self, key: &str, value_name: &str) -> Result<Option<String>, HostError>;
}
