// SPDX-License-Identifier: MIT

//! Read-only facts about the machine under evaluation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Device manager problem code for a device whose driver failed to install
pub const CM_PROB_FAILED_INSTALL: u32 = 28;

/// Precomputed hardware facts, built once per applicability run.
///
/// Evaluations only ever see `&HardwareSnapshot`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HardwareSnapshot {
    /// BIOS identifier string, e.g. `N2HET70W (1.53 )`
    #[serde(default)]
    pub bios: Option<String>,
    /// CPU address width, e.g. `64`
    #[serde(default)]
    pub cpu_address_width: Option<String>,
    #[serde(default)]
    pub embedded_controller_version: Option<String>,
    /// OS identifier, e.g. `WIN10`
    #[serde(default)]
    pub os: Option<String>,
    /// Three-letter Windows language name of the active UI culture
    #[serde(default)]
    pub os_language: Option<String>,
    /// Build and revision, e.g. `19045.3693`
    #[serde(default)]
    pub windows_build_version: Option<String>,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

impl HardwareSnapshot {
    pub fn with_bios(mut self, bios: impl Into<String>) -> Self {
        self.bios = Some(bios.into());
        self
    }

    pub fn with_cpu_address_width(mut self, width: impl Into<String>) -> Self {
        self.cpu_address_width = Some(width.into());
        self
    }

    pub fn with_embedded_controller_version(mut self, version: impl Into<String>) -> Self {
        self.embedded_controller_version = Some(version.into());
        self
    }

    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    pub fn with_os_language(mut self, lang: impl Into<String>) -> Self {
        self.os_language = Some(lang.into());
        self
    }

    pub fn with_windows_build_version(mut self, version: impl Into<String>) -> Self {
        self.windows_build_version = Some(version.into());
        self
    }

    pub fn with_device(mut self, device: DeviceRecord) -> Self {
        self.devices.push(device);
        self
    }

    /// Every hardware identifier of every device, in enumeration order
    pub fn hardware_ids(&self) -> impl Iterator<Item = &str> {
        self.devices
            .iter()
            .flat_map(|d| d.hardware_ids.iter().map(String::as_str))
    }
}

/// One enumerated device
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceRecord {
    /// Device instance path; the key used to fetch driver properties lazily
    pub instance_id: String,
    #[serde(default)]
    pub hardware_ids: Vec<String>,
    #[serde(default)]
    pub problem_code: Option<u32>,
}

impl DeviceRecord {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            hardware_ids: Vec::new(),
            problem_code: None,
        }
    }

    pub fn with_hardware_id(mut self, id: impl Into<String>) -> Self {
        self.hardware_ids.push(id.into());
        self
    }

    pub fn with_problem_code(mut self, code: u32) -> Self {
        self.problem_code = Some(code);
        self
    }

    /// Whether device manager reports that no driver is installed
    pub fn lacks_driver(&self) -> bool {
        self.problem_code == Some(CM_PROB_FAILED_INSTALL)
    }
}

/// Driver properties of one device, read on demand
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DriverProperties {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Raw `DEVPKEY_Device_DriverRank` value
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Version resource of a file on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileVersionInfo {
    #[serde(default)]
    pub product_version: Option<String>,
    #[serde(default)]
    pub file_version: Option<String>,
}
