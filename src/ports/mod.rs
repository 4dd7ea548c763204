// SPDX-License-Identifier: MIT

//! Port definitions (trait abstractions) for the machine under evaluation.
//!
//! The evaluator never touches the OS directly. Everything it needs beyond
//! the hardware snapshot comes through one of these traits, which keeps every
//! rule kind testable with in-memory fakes.

mod device;
mod files;
mod paths;
mod probe;
mod registry;
mod version;

use std::sync::Arc;

pub use device::DevicePropertyReader;
pub use files::FileInspector;
pub use paths::{PathResolver, TEMP_TOKEN, WINDOWS_TOKEN};
pub use probe::{ProbeOutcome, ProbeRunner};
pub use registry::RegistryReader;
pub use version::{VersionComparator, VersionOrdering};

/// Container for all port trait objects.
///
/// Cloning is cheap; every handle is reference counted and stateless from
/// the evaluator's point of view, so one container can be shared by many
/// threads evaluating independent nodes.
#[derive(Clone)]
pub struct HostServices {
    pub versions: Arc<dyn VersionComparator>,
    pub paths: Arc<dyn PathResolver>,
    pub probes: Arc<dyn ProbeRunner>,
    pub devices: Arc<dyn DevicePropertyReader>,
    pub files: Arc<dyn FileInspector>,
    pub registry: Arc<dyn RegistryReader>,
}

impl HostServices {
    pub fn new(
        versions: Arc<dyn VersionComparator>,
        paths: Arc<dyn PathResolver>,
        probes: Arc<dyn ProbeRunner>,
        devices: Arc<dyn DevicePropertyReader>,
        files: Arc<dyn FileInspector>,
        registry: Arc<dyn RegistryReader>,
    ) -> Self {
        Self {
            versions,
            paths,
            probes,
            devices,
            files,
            registry,
        }
    }
}
