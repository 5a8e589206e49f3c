// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use std::fmt;

/// Verdict on whether an instruction may appear in sandboxed code,
/// ordered from least to most severe.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyLevel {
    #[default]
    MayBeSafe,
    /// Architecturally unspecified result; policy decides.
    Unknown,
    /// Raises the undefined-instruction exception.
    Undefined,
    Unpredictable,
    /// The word does not belong to the class it was routed to.
    DecoderError,
    /// The class is allowed but this operand combination is not.
    ForbiddenOperands,
    Forbidden,
}

impl SafetyLevel {
    pub const ALL: [SafetyLevel; 7] = [
        SafetyLevel::MayBeSafe,
        SafetyLevel::Unknown,
        SafetyLevel::Undefined,
        SafetyLevel::Unpredictable,
        SafetyLevel::DecoderError,
        SafetyLevel::ForbiddenOperands,
        SafetyLevel::Forbidden,
    ];

    pub fn worst(self, other: SafetyLevel) -> SafetyLevel {
        self.max(other)
    }

    pub fn is_safe(self) -> bool {
        self == SafetyLevel::MayBeSafe
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SafetyLevel::MayBeSafe => "MAY_BE_SAFE",
            SafetyLevel::Unknown => "UNKNOWN",
            SafetyLevel::Undefined => "UNDEFINED",
            SafetyLevel::Unpredictable => "UNPREDICTABLE",
            SafetyLevel::DecoderError => "DECODER_ERROR",
            SafetyLevel::ForbiddenOperands => "FORBIDDEN_OPERANDS",
            SafetyLevel::Forbidden => "FORBIDDEN",
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluates an ordered safety list: the verdict of the first condition that
/// holds, or `MAY_BE_SAFE` when none does.
pub fn first_match<const N: usize>(checks: [(bool, SafetyLevel); N]) -> SafetyLevel {
    checks
        .into_iter()
        .find_map(|(hit, level)| hit.then_some(level))
        .unwrap_or(SafetyLevel::MayBeSafe)
}
