// SPDX-License-Identifier: MIT

//! Reference implementations of the ports
//!
//! Device, file and registry access for offline runs is provided by
//! [`crate::model::MachineProfile`].

mod paths;
mod process;
mod version;

pub use paths::TokenPathResolver;
pub use process::CommandProbeRunner;
pub use version::DottedVersionComparator;
