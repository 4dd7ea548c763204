// SPDX-License-Identifier: MIT

//! depcheck-rs: leaf evaluator for package applicability rules
//!
//! A [`DependencyNode`] describes one condition a machine must meet before a
//! vendor update package applies to it: a BIOS level, an installed driver, a
//! file version, a registry value and so on. [`DependencyEvaluator`] decides
//! that condition against an immutable [`HardwareSnapshot`] and returns a
//! three-state [`Verdict`].
//!
//! Everything the evaluator reads beyond the snapshot goes through the ports
//! in [`ports`], bundled as [`HostServices`]. Reference adapters live in
//! [`adapters`]; [`MachineProfile`] serves the device, file and registry ports
//! from a captured profile.

pub mod adapters;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod ports;
pub mod verdict;

pub use config::HostEnvironment;
pub use error::{DepcheckError, EvaluationError};
pub use evaluator::DependencyEvaluator;
pub use model::{DependencyNode, HardwareSnapshot, MachineProfile, RuleLoader};
pub use ports::HostServices;
pub use verdict::Verdict;
