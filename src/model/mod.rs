// SPDX-License-Identifier: MIT

//! Rule and machine data
//!
//! This module provides:
//! - `DependencyNode` - one declarative rule, tagged by kind
//! - `HardwareSnapshot` - read-only machine facts shared by all evaluations
//! - `RuleLoader` / `MachineProfile` - YAML and JSON loading of both

mod loader;
mod node;
mod profile;
mod snapshot;

pub use loader::RuleLoader;
pub use node::{
    BiosRule, CpuAddressWidthRule, DependencyNode, DriverRule, ExternalDetectionRule,
    FileExistsRule, FileVersionRule, OsLangRule, OsRule, PnpIdRule, RegistryKeyRule,
    RegistryKeyValueRule, VersionRule, KNOWN_KINDS,
};
pub use profile::MachineProfile;
pub use snapshot::{
    DeviceRecord, DriverProperties, FileVersionInfo, HardwareSnapshot, CM_PROB_FAILED_INSTALL,
};
