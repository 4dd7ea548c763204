// SPDX-License-Identifier: MIT

//! Captured machine profile for offline evaluation
//!
//! A profile bundles a hardware snapshot with everything the device, file and
//! registry ports would otherwise read from a live machine. Lookups follow
//! Windows rules and ignore ASCII case.

use super::snapshot::{DriverProperties, FileVersionInfo, HardwareSnapshot};
use super::DeviceRecord;
use crate::error::{HostError, LoadError};
use crate::ports::{DevicePropertyReader, FileInspector, RegistryReader};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MachineProfile {
    #[serde(default)]
    pub snapshot: HardwareSnapshot,
    /// Driver properties keyed by device instance id
    #[serde(default)]
    pub drivers: BTreeMap<String, DriverProperties>,
    /// Registry string values: key path -> value name -> data
    #[serde(default)]
    pub registry: BTreeMap<String, BTreeMap<String, String>>,
    /// Files present on the machine, keyed by absolute path
    #[serde(default)]
    pub files: BTreeMap<String, FileVersionInfo>,
}

impl MachineProfile {
    /// Load a profile; `.json` files are read as JSON, anything else as YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::parse_yaml(&content)
        }
    }

    pub fn parse_yaml(content: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn registry_key(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        let key = trim_key(key);
        self.registry
            .iter()
            .find(|(k, _)| trim_key(k).eq_ignore_ascii_case(key))
            .map(|(_, values)| values)
    }

    fn file_entry(&self, path: &Path) -> Option<&FileVersionInfo> {
        let wanted = path.to_string_lossy();
        self.files
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(&wanted))
            .map(|(_, info)| info)
    }
}

fn trim_key(key: &str) -> &str {
    key.trim_end_matches('\\')
}

impl DevicePropertyReader for MachineProfile {
    fn driver_properties(&self, device: &DeviceRecord) -> Result<DriverProperties, HostError> {
        if !self
            .snapshot
            .devices
            .iter()
            .any(|d| d.instance_id == device.instance_id)
        {
            return Err(HostError::DeviceNotFound(device.instance_id.clone()));
        }

        Ok(self
            .drivers
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(&device.instance_id))
            .map(|(_, props)| props.clone())
            .unwrap_or_default())
    }
}

impl RegistryReader for MachineProfile {
    fn key_exists(&self, key: &str) -> bool {
        let key = trim_key(key);
        if key.is_empty() {
            return false;
        }
        // A parent of any captured key exists as well
        let prefix = format!("{}\\", key.to_ascii_lowercase());
        self.registry.keys().any(|k| {
            let k = trim_key(k);
            k.eq_ignore_ascii_case(key) || k.to_ascii_lowercase().starts_with(&prefix)
        })
    }

    fn read_string(&self, key: &str, value_name: &str) -> Result<Option<String>, HostError> {
        Ok(self.registry_key(key).and_then(|values| {
            values
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(value_name))
                .map(|(_, data)| data.clone())
        }))
    }
}

impl FileInspector for MachineProfile {
    fn is_file(&self, path: &Path) -> bool {
        self.file_entry(path).is_some()
    }

    fn version_info(&self, path: &Path) -> Result<FileVersionInfo, HostError> {
        self.file_entry(path).cloned().ok_or_else(|| {
            HostError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not in the machine profile", path.display()),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const PROFILE: &str = r#"
snapshot:
  os: WIN10
  devices:
    - instance_id: 'PCI\VEN_8086&DEV_15F3\01'
      hardware_ids: ['PCI\VEN_8086&DEV_15F3']
drivers:
  'pci\ven_8086&dev_15f3\01':
    version: "1.0.2"
    date: 2021-03-01
    rank: 16711680
registry:
  'HKLM\SOFTWARE\Vendor\Tool':
    Version: "4.1"
files:
  'C:\Windows\System32\drivers\e1d.sys':
    product_version: "12.19.1.37"
"#;

    fn profile() -> MachineProfile {
        MachineProfile::parse_yaml(PROFILE).unwrap()
    }

    #[test]
    fn test_driver_properties_case_insensitive() {
        let profile = profile();
        let device = profile.snapshot.devices[0].clone();
        let props = profile.driver_properties(&device).unwrap();
        assert_eq!(props.version.as_deref(), Some("1.0.2"));
        assert_eq!(props.date, NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(props.rank, Some(0x00FF_0000));
    }

    #[test]
    fn test_unknown_device_is_an_error() {
        let profile = profile();
        let err = profile
            .driver_properties(&DeviceRecord::new("ROOT\\NOPE"))
            .unwrap_err();
        assert!(matches!(err, HostError::DeviceNotFound(_)));
    }

    #[test]
    fn test_registry_parents_exist() {
        let profile = profile();
        assert!(profile.key_exists("HKLM\\SOFTWARE\\Vendor\\Tool"));
        assert!(profile.key_exists("hklm\\software\\vendor"));
        assert!(profile.key_exists("HKLM\\SOFTWARE\\Vendor\\"));
        assert!(!profile.key_exists("HKLM\\SOFTWARE\\Vend"));
        assert!(!profile.key_exists(""));
    }

    #[test]
    fn test_registry_read_string() {
        let profile = profile();
        assert_eq!(
            profile
                .read_string("HKLM\\SOFTWARE\\Vendor\\Tool", "version")
                .unwrap(),
            Some("4.1".to_string())
        );
        assert_eq!(
            profile
                .read_string("HKLM\\SOFTWARE\\Vendor\\Tool", "Missing")
                .unwrap(),
            None
        );
        let other = profile.read_string("HKLM\\SOFTWARE\\Other", "Version");
        assert_eq!(other.unwrap(), None);
    }

    #[test]
    fn test_files() {
        let profile = profile();
        let path = Path::new("c:\\windows\\system32\\drivers\\E1D.sys");
        assert!(profile.is_file(path));
        let info = profile.version_info(path).unwrap();
        assert_eq!(info.product_version.as_deref(), Some("12.19.1.37"));
        assert!(!profile.is_file(Path::new("C:\\nope.sys")));
        assert!(profile.version_info(Path::new("C:\\nope.sys")).is_err());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machine.json");
        fs::write(&path, r#"{"snapshot": {"bios": "N2HET70W"}}"#).unwrap();

        let profile = MachineProfile::load(&path).unwrap();
        assert_eq!(profile.snapshot.bios.as_deref(), Some("N2HET70W"));
        assert!(profile.files.is_empty());
    }
}
