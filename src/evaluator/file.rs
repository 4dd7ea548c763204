// SPDX-License-Identifier: MIT

//! File existence and file version checks

use super::DependencyEvaluator;
use crate::error::EvaluationError;
use crate::model::{FileExistsRule, FileVersionRule};
use crate::ports::VersionOrdering;
use crate::verdict::Verdict;

pub(super) fn file_exists(ctx: &DependencyEvaluator<'_>, rule: &FileExistsRule) -> Verdict {
    let path = ctx.resolve_path(&rule.file);
    Verdict::from_bool(ctx.services.files.is_file(&path))
}

pub(super) fn file_version(
    ctx: &DependencyEvaluator<'_>,
    rule: &FileVersionRule,
) -> Result<Verdict, EvaluationError> {
    check_file_version(ctx, &rule.file, &rule.version)
}

/// Compare a file's ProductVersion against `required`, retrying with its
/// FileVersion when the comparator cannot read the former.
pub(super) fn check_file_version(
    ctx: &DependencyEvaluator<'_>,
    template: &str,
    required: &str,
) -> Result<Verdict, EvaluationError> {
    let path = ctx.resolve_path(template);
    if !ctx.services.files.is_file(&path) {
        tracing::debug!("{} does not exist or is not a file", path.display());
        return Ok(Verdict::NotSatisfied);
    }

    let info = ctx
        .services
        .files
        .version_info(&path)
        .map_err(|e| EvaluationError::host("file inspector", e))?;

    let product = match info.product_version.as_deref() {
        Some(actual) => ctx.compare_versions(required, actual),
        None => VersionOrdering::UnsupportedFormat,
    };
    if product != VersionOrdering::UnsupportedFormat {
        return Ok(product.to_verdict());
    }

    tracing::debug!(
        "ProductVersion of {} unusable, trying FileVersion",
        path.display()
    );
    Ok(match info.file_version.as_deref() {
        Some(actual) => ctx.compare_versions(required, actual).to_verdict(),
        None => Verdict::Indeterminate,
    })
}
