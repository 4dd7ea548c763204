// SPDX-License-Identifier: MIT

//! Dependency evaluation
//!
//! [`DependencyEvaluator`] answers one question per call: does this machine
//! satisfy this dependency node? The answer is a [`Verdict`]; an `Err` is
//! reserved for a host port that failed outright.
//!
//! Each evaluation runs inside a `dependency` tracing span carrying the node
//! kind, so the sub-checks logged by the individual procedures nest under the
//! node that triggered them.

mod driver;
mod file;
mod platform;
mod probe;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::HostEnvironment;
use crate::error::EvaluationError;
use crate::model::{DependencyNode, HardwareSnapshot};
use crate::ports::{HostServices, VersionOrdering};
use crate::verdict::Verdict;
use std::path::PathBuf;

/// Evaluates dependency nodes against one machine.
///
/// Holds only shared references, so it is `Copy` and can be handed to as
/// many threads as the snapshot and services outlive.
#[derive(Clone, Copy)]
pub struct DependencyEvaluator<'a> {
    snapshot: &'a HardwareSnapshot,
    services: &'a HostServices,
    env: &'a HostEnvironment,
}

impl<'a> DependencyEvaluator<'a> {
    pub fn new(
        snapshot: &'a HardwareSnapshot,
        services: &'a HostServices,
        env: &'a HostEnvironment,
    ) -> Self {
        Self {
            snapshot,
            services,
            env,
        }
    }

    /// Evaluate a single node
    pub fn evaluate(&self, node: &DependencyNode) -> Result<Verdict, EvaluationError> {
        let span = tracing::debug_span!("dependency", kind = node.kind());
        let _guard = span.enter();

        let verdict = match node {
            DependencyNode::Bios(rule) => platform::bios(self, rule),
            DependencyNode::CpuAddressWidth(rule) => platform::cpu_address_width(self, rule),
            DependencyNode::Driver(rule) => driver::evaluate(self, rule)?,
            DependencyNode::EmbeddedControllerVersion(rule) => {
                platform::embedded_controller(self, rule)
            }
            DependencyNode::ExternalDetection(rule) => probe::external_detection(self, rule)?,
            DependencyNode::FileExists(rule) => file::file_exists(self, rule),
            DependencyNode::FileVersion(rule) => file::file_version(self, rule)?,
            DependencyNode::Os(rule) => platform::os(self, rule),
            DependencyNode::OsLang(rule) => platform::os_language(self, rule),
            DependencyNode::PnpId(rule) => platform::pnp_id(self, rule),
            DependencyNode::RegistryKey(rule) => registry::key(self, rule),
            DependencyNode::RegistryKeyValue(rule) => registry::key_value(self, rule)?,
            DependencyNode::WindowsBuildVersion(rule) => platform::windows_build(self, rule),
            DependencyNode::Unknown { kind } => {
                tracing::warn!("Unsupported dependency kind '{}'", kind);
                Verdict::Indeterminate
            }
        };

        tracing::debug!(verdict = %verdict, code = verdict.code(), "Dependency evaluated");
        Ok(verdict)
    }

    fn compare_versions(&self, required: &str, actual: &str) -> VersionOrdering {
        let ordering = self.services.versions.compare(required, actual);
        tracing::debug!(required, actual, ?ordering, "Version comparison");
        ordering
    }

    fn resolve_path(&self, template: &str) -> PathBuf {
        let path = self
            .services
            .paths
            .resolve(template, &self.env.path_tokens());
        tracing::debug!("Resolved '{}' to {}", template, path.display());
        path
    }
}

/// ASCII case-insensitive `starts_with`
fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// ASCII case-insensitive `contains`; `*` and `?` are ordinary characters
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
