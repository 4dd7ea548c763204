// SPDX-License-Identifier: MIT

//! Checks answered from the hardware snapshot alone

use super::{contains_ignore_case, starts_with_ignore_case, DependencyEvaluator};
use crate::model::{BiosRule, CpuAddressWidthRule, OsLangRule, OsRule, PnpIdRule, VersionRule};
use crate::verdict::Verdict;

/// Embedded controller version reported by machines whose EC firmware
/// cannot be updated in the field
const EC_NOT_UPGRADABLE: &str = "255.255";

fn any_prefix(value: Option<&str>, prefixes: &[String], fact: &str) -> Verdict {
    let Some(value) = value else {
        tracing::debug!("Snapshot has no {} value", fact);
        return Verdict::NotSatisfied;
    };
    let matched = prefixes
        .iter()
        .find(|prefix| starts_with_ignore_case(value, prefix));
    tracing::debug!(?matched, "{} '{}' checked against {:?}", fact, value, prefixes);
    Verdict::from_bool(matched.is_some())
}

pub(super) fn bios(ctx: &DependencyEvaluator<'_>, rule: &BiosRule) -> Verdict {
    any_prefix(ctx.snapshot.bios.as_deref(), &rule.levels, "BIOS")
}

pub(super) fn os(ctx: &DependencyEvaluator<'_>, rule: &OsRule) -> Verdict {
    any_prefix(ctx.snapshot.os.as_deref(), &rule.os, "OS")
}

pub(super) fn cpu_address_width(
    ctx: &DependencyEvaluator<'_>,
    rule: &CpuAddressWidthRule,
) -> Verdict {
    match ctx.snapshot.cpu_address_width.as_deref() {
        Some(width) => Verdict::from_bool(starts_with_ignore_case(width, &rule.address_width)),
        None => Verdict::NotSatisfied,
    }
}

pub(super) fn embedded_controller(ctx: &DependencyEvaluator<'_>, rule: &VersionRule) -> Verdict {
    let Some(actual) = ctx.snapshot.embedded_controller_version.as_deref() else {
        tracing::debug!("Machine reports no embedded controller version");
        return Verdict::NotSatisfied;
    };
    if actual.trim() == EC_NOT_UPGRADABLE {
        tracing::warn!(
            "Embedded controller version is {}, the EC firmware is not field-upgradable",
            EC_NOT_UPGRADABLE
        );
    }
    ctx.compare_versions(&rule.version, actual).to_verdict()
}

pub(super) fn windows_build(ctx: &DependencyEvaluator<'_>, rule: &VersionRule) -> Verdict {
    match ctx.snapshot.windows_build_version.as_deref() {
        Some(actual) => ctx.compare_versions(&rule.version, actual).to_verdict(),
        None => Verdict::NotSatisfied,
    }
}

pub(super) fn os_language(ctx: &DependencyEvaluator<'_>, rule: &OsLangRule) -> Verdict {
    match ctx.snapshot.os_language.as_deref() {
        Some(lang) => Verdict::from_bool(lang.trim().eq_ignore_ascii_case(rule.lang.trim())),
        None => Verdict::NotSatisfied,
    }
}

pub(super) fn pnp_id(ctx: &DependencyEvaluator<'_>, rule: &PnpIdRule) -> Verdict {
    let found = ctx
        .snapshot
        .hardware_ids()
        .find(|id| contains_ignore_case(id, &rule.hardware_id));
    tracing::debug!(?found, "PnP id '{}' lookup", rule.hardware_id);
    Verdict::from_bool(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeHost;
    use crate::model::{
        BiosRule, CpuAddressWidthRule, DependencyNode, DeviceRecord, HardwareSnapshot, OsLangRule,
        OsRule, PnpIdRule, VersionRule,
    };
    use crate::verdict::Verdict;

    fn eval(snapshot: &HardwareSnapshot, node: DependencyNode) -> Verdict {
        FakeHost::default().evaluate(snapshot, &node).unwrap()
    }

    fn bios(levels: &[&str]) -> DependencyNode {
        DependencyNode::Bios(BiosRule {
            levels: levels.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_bios_prefix_case_insensitive() {
        let snapshot = HardwareSnapshot::default().with_bios("N2HET70W (1.53 )");
        assert_eq!(eval(&snapshot, bios(&["R0X", "n2het"])), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, bios(&["N2HEU"])), Verdict::NotSatisfied);
        assert_eq!(eval(&snapshot, bios(&[])), Verdict::NotSatisfied);
    }

    #[test]
    fn test_bios_missing_fact() {
        assert_eq!(
            eval(&HardwareSnapshot::default(), bios(&["N2HET"])),
            Verdict::NotSatisfied
        );
    }

    #[test]
    fn test_os_prefix() {
        let snapshot = HardwareSnapshot::default().with_os("WIN10ENTERPRISE");
        let node = |entries: &[&str]| {
            DependencyNode::Os(OsRule {
                os: entries.iter().map(|s| s.to_string()).collect(),
            })
        };
        assert_eq!(eval(&snapshot, node(&["WIN10"])), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node(&["win10"])), Verdict::Satisfied);
        assert_eq!(
            eval(&snapshot, node(&["WIN11", "WIN7"])),
            Verdict::NotSatisfied
        );
        assert_eq!(
            eval(&snapshot, node(&["WIN10ENTERPRISELTSC"])),
            Verdict::NotSatisfied
        );
    }

    #[test]
    fn test_cpu_address_width() {
        let snapshot = HardwareSnapshot::default().with_cpu_address_width("64");
        let node = |w: &str| {
            DependencyNode::CpuAddressWidth(CpuAddressWidthRule {
                address_width: w.to_string(),
            })
        };
        assert_eq!(eval(&snapshot, node("64")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("32")), Verdict::NotSatisfied);
        assert_eq!(
            eval(&HardwareSnapshot::default(), node("64")),
            Verdict::NotSatisfied
        );
    }

    #[test]
    fn test_embedded_controller() {
        let node = |v: &str| {
            DependencyNode::EmbeddedControllerVersion(VersionRule {
                version: v.to_string(),
            })
        };
        let snapshot = HardwareSnapshot::default().with_embedded_controller_version("1.20");
        assert_eq!(eval(&snapshot, node("1.15")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("1.20")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("1.21")), Verdict::NotSatisfied);
        assert_eq!(eval(&snapshot, node("v1")), Verdict::Indeterminate);
        assert_eq!(
            eval(&HardwareSnapshot::default(), node("1.0")),
            Verdict::NotSatisfied
        );
    }

    #[test]
    fn test_embedded_controller_not_upgradable_still_compared() {
        let snapshot = HardwareSnapshot::default().with_embedded_controller_version("255.255");
        let node = |v: &str| {
            DependencyNode::EmbeddedControllerVersion(VersionRule {
                version: v.to_string(),
            })
        };
        assert_eq!(eval(&snapshot, node("1.30")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("256.0")), Verdict::NotSatisfied);
    }

    #[test]
    fn test_windows_build() {
        let snapshot = HardwareSnapshot::default().with_windows_build_version("19045.3693");
        let node = |v: &str| {
            DependencyNode::WindowsBuildVersion(VersionRule {
                version: v.to_string(),
            })
        };
        assert_eq!(eval(&snapshot, node("19041")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("22000")), Verdict::NotSatisfied);
        assert_eq!(
            eval(&HardwareSnapshot::default(), node("19041")),
            Verdict::NotSatisfied
        );
    }

    #[test]
    fn test_os_language() {
        let snapshot = HardwareSnapshot::default().with_os_language("ENU");
        let node = |l: &str| DependencyNode::OsLang(OsLangRule { lang: l.to_string() });
        assert_eq!(eval(&snapshot, node("ENU")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("enu")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("DEU")), Verdict::NotSatisfied);
        assert_eq!(
            eval(&HardwareSnapshot::default(), node("ENU")),
            Verdict::NotSatisfied
        );
    }

    #[test]
    fn test_pnp_id_substring() {
        let snapshot = HardwareSnapshot::default()
            .with_device(DeviceRecord::new("a").with_hardware_id("ACPI\\LEN0071"))
            .with_device(
                DeviceRecord::new("b")
                    .with_hardware_id("USB\\VID_17EF&PID_3082&REV_3100")
                    .with_hardware_id("USB\\VID_17EF&PID_3082"),
            );
        let node = |id: &str| {
            DependencyNode::PnpId(PnpIdRule {
                hardware_id: id.to_string(),
            })
        };
        assert_eq!(eval(&snapshot, node("PID_3082")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("acpi\\len0071")), Verdict::Satisfied);
        assert_eq!(eval(&snapshot, node("PID_9999")), Verdict::NotSatisfied);
        assert_eq!(eval(&snapshot, node("VID_17EF*")), Verdict::NotSatisfied);
    }
}
