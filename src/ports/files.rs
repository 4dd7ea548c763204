// SPDX-License-Identifier: MIT

//! File inspection port

use crate::error::HostError;
use crate::model::FileVersionInfo;
use std::path::Path;

pub trait FileInspector: Send + Sync {
    /// Whether `path` exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read the version resource of an existing file
    fn version_info(&self, path: &Path) -> Result<FileVersionInfo, HostError>;
}
