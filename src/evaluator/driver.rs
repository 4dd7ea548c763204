// SPDX-License-Identifier: MIT

//! Driver matcher
//!
//! A driver rule names the device by hardware id and/or names a driver file.
//! The device path is tried first: a matching device whose installed driver
//! passes every date and version sub-check satisfies the rule. When that
//! path does not produce a pass, a rule that also carries a file and a
//! version gets a second chance through the file version check. A device that
//! matches but has no driver installed fails the rule outright.

use super::{contains_ignore_case, file, DependencyEvaluator};
use crate::error::EvaluationError;
use crate::model::{DeviceRecord, DriverRule, HardwareSnapshot};
use crate::verdict::Verdict;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Driver ranks at or above this value come from generic or inbox INFs
const GENERIC_DRIVER_RANK: u32 = 0x00FF_0000;

pub(super) fn evaluate(
    ctx: &DependencyEvaluator<'_>,
    rule: &DriverRule,
) -> Result<Verdict, EvaluationError> {
    if !rule.unrecognized.is_empty() {
        let children: Vec<&str> = rule.unrecognized.keys().map(String::as_str).collect();
        tracing::warn!(?children, "Driver rule has unrecognized child elements");
        return Ok(Verdict::Indeterminate);
    }

    let wanted: Vec<&str> = rule
        .hardware_ids
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect();

    if !wanted.is_empty() {
        match find_device(ctx.snapshot, &wanted) {
            Some(device) => {
                if device.lacks_driver() {
                    tracing::info!(
                        "Device {} matches but has no driver installed",
                        device.instance_id
                    );
                    return Ok(Verdict::NotSatisfied);
                }
                if installed_driver_passes(ctx, device, rule)? {
                    return Ok(Verdict::Satisfied);
                }
            }
            None => tracing::debug!("No device matches {:?}", rule.hardware_ids),
        }
    }

    if let (Some(file), Some(version)) = (rule.file.as_deref(), rule.version.as_deref()) {
        tracing::debug!("Falling back to file version check of '{}'", file);
        return file::check_file_version(ctx, file, version);
    }

    Ok(Verdict::NotSatisfied)
}

/// First device with a hardware id containing any of `wanted`
fn find_device<'s>(snapshot: &'s HardwareSnapshot, wanted: &[&str]) -> Option<&'s DeviceRecord> {
    let mut matches = snapshot.devices.iter().filter(|device| {
        device
            .hardware_ids
            .iter()
            .any(|id| wanted.iter().any(|w| contains_ignore_case(id, w)))
    });

    let first = matches.next()?;
    let others: Vec<&str> = matches.map(|d| d.instance_id.as_str()).collect();
    if !others.is_empty() {
        tracing::warn!(
            ?others,
            "Hardware ids match more than one device, using {}",
            first.instance_id
        );
    }
    Some(first)
}

/// Run the date and version sub-checks against the installed driver.
///
/// A sub-check whose input is missing or malformed is skipped, so a device
/// with no usable sub-checks passes on the hardware id match alone.
fn installed_driver_passes(
    ctx: &DependencyEvaluator<'_>,
    device: &DeviceRecord,
    rule: &DriverRule,
) -> Result<bool, EvaluationError> {
    let props = ctx
        .services
        .devices
        .driver_properties(device)
        .map_err(|e| EvaluationError::host("device property reader", e))?;

    if props.rank.is_some_and(|rank| rank >= GENERIC_DRIVER_RANK) {
        tracing::debug!(
            "Device {} appears to use a generic or inbox driver",
            device.instance_id
        );
    }

    let mut passed = true;

    if let Some(date) = rule.date.as_deref() {
        match (
            NaiveDate::parse_from_str(date.trim(), DATE_FORMAT),
            props.date,
        ) {
            (Err(e), _) => {
                tracing::warn!("Skipping date check, cannot parse '{}': {}", date, e);
            }
            (Ok(_), None) => {
                tracing::debug!("Skipping date check, device reports no driver date");
            }
            (Ok(required), Some(installed)) => {
                let ok = installed >= required;
                tracing::debug!(%installed, %required, ok, "Driver date check");
                passed &= ok;
            }
        }
    }

    if let Some(required) = rule.version.as_deref() {
        match props.version.as_deref() {
            Some(installed) => {
                let ordering = ctx.compare_versions(required, installed);
                let ok = ordering.meets_requirement();
                tracing::debug!(installed, required, ok, "Driver version check");
                passed &= ok;
            }
            None => tracing::debug!("Skipping version check, device reports no driver version"),
        }
    }

    Ok(passed)
}
