// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::ClassDecoder;
use crate::instruction::Instruction;
use crate::register::RegisterList;
use crate::safety::{first_match, SafetyLevel};

/// Barriers, reserved space and the instructions sandboxed code may never
/// contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    Forbidden,            // SVC, coprocessor transfers, CPS, ...
    UnnamedUnpredictable, // reserved hint and barrier encodings
    UnnamedUndefined,     // reserved multiply and coprocessor encodings
    Dmb,                  // DMB/DSB option
    Isb,                  // ISB option
}

impl System {
    pub const ALL: [System; 5] = [
        System::Forbidden,
        System::UnnamedUnpredictable,
        System::UnnamedUndefined,
        System::Dmb,
        System::Isb,
    ];
}

impl ClassDecoder for System {
    fn name(&self) -> &'static str {
        match self {
            Self::Forbidden => "Forbidden",
            Self::UnnamedUnpredictable => "UnnamedUnpredictable",
            Self::UnnamedUndefined => "UnnamedUndefined",
            Self::Dmb => "Dmb",
            Self::Isb => "Isb",
        }
    }

    fn defs(&self, _i: Instruction) -> RegisterList {
        RegisterList::EMPTY
    }

    fn uses(&self, _i: Instruction) -> RegisterList {
        RegisterList::EMPTY
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        let option = i.bits(3, 0);
        match self {
            Self::Forbidden => SafetyLevel::Forbidden,
            Self::UnnamedUnpredictable => SafetyLevel::Unpredictable,
            Self::UnnamedUndefined => SafetyLevel::Undefined,
            // SY, ST, ISH, ISHST, NSH, NSHST, OSH, OSHST
            Self::Dmb => first_match([(
                !matches!(
                    option,
                    0b1111 | 0b1110 | 0b1011 | 0b1010 | 0b0111 | 0b0110 | 0b0011 | 0b0010
                ),
                SafetyLevel::ForbiddenOperands,
            )]),
            Self::Isb => first_match([(option != 0b1111, SafetyLevel::ForbiddenOperands)]),
        }
    }
}
