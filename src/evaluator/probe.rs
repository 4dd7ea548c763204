// SPDX-License-Identifier: MIT

//! External detection commands

use super::DependencyEvaluator;
use crate::error::{EvaluationError, ProbeError};
use crate::model::ExternalDetectionRule;
use crate::verdict::Verdict;

pub(super) fn external_detection(
    ctx: &DependencyEvaluator<'_>,
    rule: &ExternalDetectionRule,
) -> Result<Verdict, EvaluationError> {
    let accepted = accepted_codes(&rule.rc);

    let outcome = match ctx.services.probes.run(&rule.command, ctx.env.temp_dir()) {
        Ok(outcome) => outcome,
        Err(ProbeError::Launch { command, reason }) => {
            tracing::warn!("Probe '{}' could not be launched: {}", command, reason);
            return Ok(Verdict::NotSatisfied);
        }
        Err(e) => return Err(e.into()),
    };

    let ok = accepted.contains(&outcome.exit_code);
    tracing::debug!(exit_code = outcome.exit_code, ?accepted, ok, "Probe finished");
    Ok(Verdict::from_bool(ok))
}

/// Parse the comma-separated exit code list, dropping entries that are not integers
fn accepted_codes(rc: &str) -> Vec<i32> {
    rc.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<i32>() {
            Ok(code) => Some(code),
            Err(_) => {
                tracing::warn!("Ignoring exit code '{}' in accepted list", entry);
                None
            }
        })
        .collect()
}
