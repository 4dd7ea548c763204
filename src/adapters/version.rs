// SPDX-License-Identifier: MIT

//! Plain dotted-numeric version comparison

use crate::ports::{VersionComparator, VersionOrdering};
use std::cmp::Ordering;

/// Compares versions such as `1.2.30` component by component.
///
/// Missing trailing components count as zero. Anything that is not a
/// dot-separated list of unsigned integers is `UnsupportedFormat`, which makes
/// the file probes fall back to the secondary version field.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedVersionComparator;

impl DottedVersionComparator {
    pub fn new() -> Self {
        Self
    }

    fn parse(version: &str) -> Option<Vec<u64>> {
        let version = version.trim();
        if version.is_empty() {
            return None;
        }
        version
            .split('.')
            .map(|part| part.trim().parse::<u64>().ok())
            .collect()
    }
}

impl VersionComparator for DottedVersionComparator {
    fn compare(&self, required: &str, actual: &str) -> VersionOrdering {
        let (Some(required), Some(actual)) = (Self::parse(required), Self::parse(actual)) else {
            return VersionOrdering::UnsupportedFormat;
        };

        let len = required.len().max(actual.len());
        let component = |parts: &[u64], i: usize| parts.get(i).copied().unwrap_or(0);

        for i in 0..len {
            match component(&actual, i).cmp(&component(&required, i)) {
                Ordering::Less => return VersionOrdering::Less,
                Ordering::Greater => return VersionOrdering::Greater,
                Ordering::Equal => {}
            }
        }
        VersionOrdering::Equal
    }
}
