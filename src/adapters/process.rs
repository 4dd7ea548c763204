// SPDX-License-Identifier: MIT

//! External probe execution through the platform shell

use crate::error::ProbeError;
use crate::ports::{ProbeOutcome, ProbeRunner};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs probe commands with `cmd /C` on Windows and `sh -c` elsewhere.
///
/// Output is discarded; only the exit code matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProbeRunner;

impl CommandProbeRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl ProbeRunner for CommandProbeRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<ProbeOutcome, ProbeError> {
        tracing::debug!("Running probe '{}' in {}", command, working_dir.display());

        let status = Self::shell_command(command)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ProbeError::launch(command, e.to_string()))?;

        status
            .code()
            .map(|exit_code| ProbeOutcome { exit_code })
            .ok_or_else(|| ProbeError::NoExitCode {
                command: command.to_string(),
            })
    }
}
