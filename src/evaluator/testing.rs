// SPDX-License-Identifier: MIT

//! In-memory host used by the evaluator unit tests

use super::DependencyEvaluator;
use crate::adapters::{DottedVersionComparator, TokenPathResolver};
use crate::config::HostEnvironment;
use crate::error::{EvaluationError, HostError, ProbeError};
use crate::model::{
    DependencyNode, DeviceRecord, DriverProperties, FileVersionInfo, HardwareSnapshot,
};
use crate::ports::{
    DevicePropertyReader, FileInspector, HostServices, ProbeOutcome, ProbeRunner, RegistryReader,
};
use crate::verdict::Verdict;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub(crate) const SYSTEM_ROOT: &str = "C:\\Windows";
pub(crate) const TEMP_DIR: &str = "C:\\Temp";

/// Fake implementation of every host port.
///
/// Clones share their call counters, so the copy handed to the evaluator
/// reports back to the test.
#[derive(Clone, Default)]
pub(crate) struct FakeHost {
    drivers: HashMap<String, DriverProperties>,
    files: HashMap<String, FileVersionInfo>,
    registry: HashMap<String, HashMap<String, String>>,
    denied_keys: HashSet<String>,
    probes: HashMap<String, Option<i32>>,
    file_checks: Arc<AtomicUsize>,
    probe_runs: Arc<AtomicUsize>,
}

impl FakeHost {
    pub fn with_driver(
        mut self,
        instance_id: &str,
        version: Option<&str>,
        date: Option<&str>,
        rank: Option<u32>,
    ) -> Self {
        let props = DriverProperties {
            version: version.map(str::to_string),
            date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            rank,
        };
        self.drivers.insert(instance_id.to_string(), props);
        self
    }

    pub fn with_file(mut self, path: &str, product: Option<&str>, file: Option<&str>) -> Self {
        self.files.insert(
            path.to_string(),
            FileVersionInfo {
                product_version: product.map(str::to_string),
                file_version: file.map(str::to_string),
            },
        );
        self
    }

    pub fn with_registry_key(mut self, key: &str) -> Self {
        self.registry.entry(key.to_string()).or_default();
        self
    }

    pub fn with_registry_value(mut self, key: &str, name: &str, data: &str) -> Self {
        self.registry
            .entry(key.to_string())
            .or_default()
            .insert(name.to_string(), data.to_string());
        self
    }

    pub fn with_denied_key(mut self, key: &str) -> Self {
        self.denied_keys.insert(key.to_string());
        self.with_registry_key(key)
    }

    /// Register a probe command; `None` simulates a run without exit code
    pub fn with_probe(mut self, command: &str, exit_code: Option<i32>) -> Self {
        self.probes.insert(command.to_string(), exit_code);
        self
    }

    pub fn file_checks(&self) -> usize {
        self.file_checks.load(Ordering::SeqCst)
    }

    pub fn probe_runs(&self) -> usize {
        self.probe_runs.load(Ordering::SeqCst)
    }

    pub fn services(&self) -> HostServices {
        let shared = Arc::new(self.clone());
        HostServices::new(
            Arc::new(DottedVersionComparator::new()),
            Arc::new(TokenPathResolver::new()),
            shared.clone(),
            shared.clone(),
            shared.clone(),
            shared,
        )
    }

    pub fn environment(&self) -> HostEnvironment {
        HostEnvironment::new(SYSTEM_ROOT, TEMP_DIR).unwrap()
    }

    pub fn evaluate(
        &self,
        snapshot: &HardwareSnapshot,
        node: &DependencyNode,
    ) -> Result<Verdict, EvaluationError> {
        let services = self.services();
        let env = self.environment();
        DependencyEvaluator::new(snapshot, &services, &env).evaluate(node)
    }
}

impl DevicePropertyReader for FakeHost {
    fn driver_properties(&self, device: &DeviceRecord) -> Result<DriverProperties, HostError> {
        self.drivers
            .get(&device.instance_id)
            .cloned()
            .ok_or_else(|| HostError::DeviceNotFound(device.instance_id.clone()))
    }
}

impl FileInspector for FakeHost {
    fn is_file(&self, path: &Path) -> bool {
        self.file_checks.fetch_add(1, Ordering::SeqCst);
        self.files.contains_key(path.to_string_lossy().as_ref())
    }

    fn version_info(&self, path: &Path) -> Result<FileVersionInfo, HostError> {
        self.files
            .get(path.to_string_lossy().as_ref())
            .cloned()
            .ok_or_else(|| HostError::Unsupported(path.display().to_string()))
    }
}

impl RegistryReader for FakeHost {
    fn key_exists(&self, key: &str) -> bool {
        self.registry.contains_key(key)
    }

    fn read_string(&self, key: &str, value_name: &str) -> Result<Option<String>, HostError> {
        if self.denied_keys.contains(key) {
            return Err(HostError::AccessDenied(key.to_string()));
        }
        Ok(self
            .registry
            .get(key)
            .and_then(|values| values.get(value_name))
            .cloned())
    }
}

impl ProbeRunner for FakeHost {
    fn run(&self, command: &str, working_dir: &Path) -> Result<ProbeOutcome, ProbeError> {
        assert_eq!(working_dir, Path::new(TEMP_DIR));
        self.probe_runs.fetch_add(1, Ordering::SeqCst);
        match self.probes.get(command) {
            Some(Some(exit_code)) => Ok(ProbeOutcome {
                exit_code: *exit_code,
            }),
            Some(None) => Err(ProbeError::NoExitCode {
                command: command.to_string(),
            }),
            None => Err(ProbeError::launch(command, "not found")),
        }
    }
}
