// SPDX-License-Identifier: MIT

//! Registry key and registry value checks

use super::DependencyEvaluator;
use crate::error::{EvaluationError, HostError};
use crate::model::{RegistryKeyRule, RegistryKeyValueRule};
use crate::verdict::Verdict;

/// The only registry value type that can be compared
const STRING_VALUE_TYPE: &str = "REG_SZ";

pub(super) fn key(ctx: &DependencyEvaluator<'_>, rule: &RegistryKeyRule) -> Verdict {
    let exists = ctx.services.registry.key_exists(&rule.key);
    tracing::debug!(exists, "Registry key '{}'", rule.key);
    Verdict::from_bool(exists)
}

pub(super) fn key_value(
    ctx: &DependencyEvaluator<'_>,
    rule: &RegistryKeyValueRule,
) -> Result<Verdict, EvaluationError> {
    let value_type = rule.value_type.trim();
    if !value_type.eq_ignore_ascii_case(STRING_VALUE_TYPE) {
        tracing::info!(
            "Registry value type '{}' is not supported, only {}",
            rule.value_type,
            STRING_VALUE_TYPE
        );
        return Ok(Verdict::Indeterminate);
    }

    let registry = &ctx.services.registry;
    if !registry.key_exists(&rule.key) {
        tracing::debug!("Registry key '{}' does not exist", rule.key);
        return Ok(Verdict::NotSatisfied);
    }

    let actual = match registry.read_string(&rule.key, &rule.value_name) {
        Ok(Some(actual)) => actual,
        Ok(None) => {
            tracing::debug!(
                "Registry value '{}\\{}' is missing",
                rule.key,
                rule.value_name
            );
            return Ok(Verdict::NotSatisfied);
        }
        Err(HostError::AccessDenied(what)) => {
            tracing::warn!("Registry value '{}' cannot be read: access denied", what);
            return Ok(Verdict::NotSatisfied);
        }
        Err(e) => return Err(EvaluationError::host("registry reader", e)),
    };

    let Some(required) = rule.version.as_deref().or(rule.value.as_deref()) else {
        tracing::info!("Registry value rule names neither a version nor a value");
        return Ok(Verdict::Indeterminate);
    };

    Ok(ctx.compare_versions(required, &actual).to_verdict())
}
