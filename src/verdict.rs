// SPDX-License-Identifier: MIT

//! Tri-state result of a single dependency evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating one dependency node against the machine.
///
/// `Indeterminate` is a first-class answer: the composition layer must be able
/// to tell "the machine fails this rule" apart from "this rule could not be
/// judged", so it is never collapsed into `NotSatisfied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The machine meets the rule
    Satisfied,
    /// The machine definitively fails the rule
    NotSatisfied,
    /// The rule kind or one of its inputs is not understood
    Indeterminate,
}

impl Verdict {
    /// Conventional integer encoding: `0`, `-1`, `-2`
    pub fn code(self) -> i32 {
        match self {
            Verdict::Satisfied => 0,
            Verdict::NotSatisfied => -1,
            Verdict::Indeterminate => -2,
        }
    }

    pub fn is_satisfied(self) -> bool {
        self == Verdict::Satisfied
    }

    /// `Satisfied` when `cond` holds, `NotSatisfied` otherwise
    pub fn from_bool(cond: bool) -> Self {
        if cond {
            Verdict::Satisfied
        } else {
            Verdict::NotSatisfied
        }
    }
}

impl TryFrom<i32> for Verdict {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Verdict::Satisfied),
            -1 => Ok(Verdict::NotSatisfied),
            -2 => Ok(Verdict::Indeterminate),
            other => Err(other),
        }
    }
}

impl From<Verdict> for i32 {
    fn from(verdict: Verdict) -> Self {
        verdict.code()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Satisfied => write!(f, "satisfied"),
            Verdict::NotSatisfied => write!(f, "not satisfied"),
            Verdict::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Verdict::Satisfied.code(), 0);
        assert_eq!(Verdict::NotSatisfied.code(), -1);
        assert_eq!(Verdict::Indeterminate.code(), -2);
    }

    #[test]
    fn test_only_three_codes_convert() {
        for code in [0, -1, -2] {
            let verdict = Verdict::try_from(code).unwrap();
            assert_eq!(verdict.code(), code);
        }
        assert_eq!(Verdict::try_from(1), Err(1));
        assert_eq!(Verdict::try_from(-3), Err(-3));
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Verdict::from_bool(true), Verdict::Satisfied);
        assert_eq!(Verdict::from_bool(false), Verdict::NotSatisfied);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Verdict::Indeterminate), "indeterminate");
    }
}
