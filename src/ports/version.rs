// SPDX-License-Identifier: MIT

//! Version comparator port

use crate::verdict::Verdict;

/// How a system-reported version relates to a required one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    /// The system version is older than required
    Less,
    Equal,
    /// The system version is newer than required
    Greater,
    /// One of the strings is not in a format the comparator understands
    UnsupportedFormat,
}

impl VersionOrdering {
    /// Equal or newer than required
    pub fn meets_requirement(self) -> bool {
        matches!(self, VersionOrdering::Equal | VersionOrdering::Greater)
    }

    /// Map to a verdict; an unsupported format cannot be judged
    pub fn to_verdict(self) -> Verdict {
        match self {
            VersionOrdering::Equal | VersionOrdering::Greater => Verdict::Satisfied,
            VersionOrdering::Less => Verdict::NotSatisfied,
            VersionOrdering::UnsupportedFormat => Verdict::Indeterminate,
        }
    }
}

/// Compares a vendor-formatted version string against a system-reported one.
pub trait VersionComparator: Send + Sync {
    /// Order `actual` (reported by the machine) relative to `required`
    /// (taken from the dependency node).
    fn compare(&self, required: &str, actual: &str) -> VersionOrdering;
}
