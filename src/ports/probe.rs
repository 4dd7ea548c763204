// SPDX-License-Identifier: MIT

//! External probe runner port

use crate::error::ProbeError;
use std::path::Path;

/// Result of a probe that was launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub exit_code: i32,
}

/// Runs an external detection command and reports its exit code.
///
/// Implementations return [`ProbeError::Launch`] when the command could not
/// be started; bounding a hung command is up to the implementation.
pub trait ProbeRunner: Send + Sync {
    fn run(&self, command: &str, working_dir: &Path) -> Result<ProbeOutcome, ProbeError>;
}
