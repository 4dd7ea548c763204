// SPDX-License-Identifier: MIT

//! Host environment configuration
//!
//! The evaluator needs two host paths: the OS installation directory, which
//! backs the `%WINDOWS%` placeholder, and a temporary directory, which backs
//! `%TEMP%` and is the working directory of external probes.

use crate::error::ConfigError;
use crate::ports::{TEMP_TOKEN, WINDOWS_TOKEN};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_SYSTEM_ROOT: &str = "C:\\Windows";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    system_root: PathBuf,
    temp_dir: PathBuf,
}

impl HostEnvironment {
    pub fn new(
        system_root: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            system_root: non_empty(system_root.into(), "system root")?,
            temp_dir: non_empty(temp_dir.into(), "temp dir")?,
        })
    }

    /// Read `SystemRoot` (or `WINDIR`) and `TEMP` (or `TMP`).
    ///
    /// Unset variables fall back to `C:\Windows` and the platform temp dir;
    /// variables that are set but empty are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        let system_root = first_var(&["SystemRoot", "WINDIR"])?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_ROOT));
        let temp_dir = first_var(&["TEMP", "TMP"])?
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        Self::new(system_root, temp_dir)
    }

    pub fn with_system_root(
        mut self,
        system_root: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        self.system_root = non_empty(system_root.into(), "system root")?;
        Ok(self)
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        self.temp_dir = non_empty(temp_dir.into(), "temp dir")?;
        Ok(self)
    }

    pub fn system_root(&self) -> &Path {
        &self.system_root
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Placeholder values handed to the path resolver
    pub fn path_tokens(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                WINDOWS_TOKEN.to_string(),
                self.system_root.to_string_lossy().into_owned(),
            ),
            (
                TEMP_TOKEN.to_string(),
                self.temp_dir.to_string_lossy().into_owned(),
            ),
        ])
    }
}

fn non_empty(path: PathBuf, what: &str) -> Result<PathBuf, ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyValue(what.to_string()));
    }
    Ok(path)
}

fn first_var(names: &[&str]) -> Result<Option<String>, ConfigError> {
    for name in names {
        if let Ok(value) = env::var(name) {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(name.to_string()));
            }
            return Ok(Some(value));
        }
    }
    Ok(None)
}
