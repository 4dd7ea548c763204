// SPDX-License-Identifier: MIT

//! Typed error handling for depcheck-rs
//!
//! Verdicts never travel through these types. An `Err` always means the
//! evaluator could not talk to the machine at all; a rule that simply does not
//! hold is `Verdict::NotSatisfied`, and a rule that cannot be judged is
//! `Verdict::Indeterminate`.

use thiserror::Error;

/// Top-level error type for depcheck-rs
#[derive(Debug, Error)]
pub enum DepcheckError {
    /// Infrastructure failure while evaluating a node
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    /// Rule or machine profile could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Environment configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Failure of an evaluation that must not be folded into a verdict
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// A collaborator (device, file or registry reader) failed
    #[error("{port} failed: {source}")]
    Host {
        port: &'static str,
        #[source]
        source: HostError,
    },

    /// The external probe runner failed after the command was launched
    #[error("External probe failed: {0}")]
    Probe(#[from] ProbeError),
}

impl EvaluationError {
    /// Wrap a port failure with the name of the port that produced it
    pub fn host(port: &'static str, source: HostError) -> Self {
        Self::Host { port, source }
    }
}

/// Errors reported by host ports
#[derive(Debug, Error)]
pub enum HostError {
    /// The device referenced by a snapshot record is no longer known
    #[error("Device '{0}' not found")]
    DeviceNotFound(String),

    /// The host denied access to a resource
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The port does not support this operation on the current platform
    #[error("Unsupported on this host: {0}")]
    Unsupported(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// External probe errors
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The command could not be started at all
    #[error("Failed to launch '{command}': {reason}")]
    Launch { command: String, reason: String },

    /// The command started but its status could not be collected
    #[error("Probe '{command}' ended without an exit code")]
    NoExitCode { command: String },
}

impl ProbeError {
    /// Create a launch error
    pub fn launch(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Launch {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

/// Errors while loading rules or machine profiles
#[derive(Debug, Error)]
pub enum LoadError {
    /// A node entry carries no `kind` tag
    #[error("Dependency node #{index} has no 'kind' tag")]
    MissingKind { index: usize },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Host environment configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured path is empty
    #[error("Environment value '{0}' is empty")]
    EmptyValue(String),
}
