// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{Capabilities, ClassDecoder};
use crate::instruction::{sign_extend, Instruction};
use crate::register::{Register, RegisterList};
use crate::safety::{first_match, SafetyLevel};

/// `BKPT 0x7BE0`: marks the start of a literal pool bundle.
pub const LITERAL_POOL_HEAD: u32 = 0xE125_BE70;

/// `BKPT 0x7777`: fill for unused bytes after the end of code.
pub const HALT_FILL: u32 = 0xE127_7777;

/// Branches and the breakpoint forms sandboxed code may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    B,              // B label
    BlBlxImmediate, // BL label
    BlxRegister,    // BLX Rm
    Bx,             // BX Rm
    Bkpt,           // BKPT #imm16
}

impl Branch {
    pub const ALL: [Branch; 5] = [
        Branch::B,
        Branch::BlBlxImmediate,
        Branch::BlxRegister,
        Branch::Bx,
        Branch::Bkpt,
    ];
}

impl ClassDecoder for Branch {
    fn name(&self) -> &'static str {
        match self {
            Self::B => "B",
            Self::BlBlxImmediate => "BlBlxImmediate",
            Self::BlxRegister => "BlxRegister",
            Self::Bx => "Bx",
            Self::Bkpt => "Bkpt",
        }
    }

    fn defs(&self, _i: Instruction) -> RegisterList {
        match self {
            Self::B | Self::Bx => RegisterList::from(Register::PC),
            Self::BlBlxImmediate | Self::BlxRegister => {
                RegisterList::from([Register::PC, Register::LR])
            }
            Self::Bkpt => RegisterList::EMPTY,
        }
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        match self {
            Self::B | Self::BlBlxImmediate => RegisterList::from(Register::PC),
            Self::BlxRegister | Self::Bx => RegisterList::from(i.reg(0)),
            Self::Bkpt => RegisterList::EMPTY,
        }
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        match self {
            Self::B | Self::BlBlxImmediate => SafetyLevel::MayBeSafe,
            Self::BlxRegister | Self::Bx => {
                first_match([(i.reg(0) == Register::PC, SafetyLevel::ForbiddenOperands)])
            }
            Self::Bkpt => first_match([
                (i.cond() != 0b1110, SafetyLevel::Unpredictable),
                (
                    i.word() != LITERAL_POOL_HEAD && i.word() != HALT_FILL,
                    SafetyLevel::ForbiddenOperands,
                ),
            ]),
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Self::B | Self::BlBlxImmediate => Capabilities::RELATIVE_BRANCH,
            Self::BlxRegister | Self::Bx => Capabilities::BRANCH_TARGET_REGISTER,
            Self::Bkpt => Capabilities::LITERAL_POOL_HEAD,
        }
    }

    fn branch_target_register(&self, i: Instruction) -> Option<Register> {
        match self {
            Self::BlxRegister | Self::Bx => Some(i.reg(0)),
            _ => None,
        }
    }

    fn is_relative_branch(&self, _i: Instruction) -> bool {
        matches!(self, Self::B | Self::BlBlxImmediate)
    }

    fn branch_target_offset(&self, i: Instruction) -> Option<i32> {
        match self {
            Self::B | Self::BlBlxImmediate => Some(sign_extend(i.bits(23, 0) << 2, 26)),
            _ => None,
        }
    }

    fn is_literal_pool_head(&self, i: Instruction) -> bool {
        matches!(self, Self::Bkpt) && i.word() == LITERAL_POOL_HEAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_offsets() {
        // B .+8 (imm24 = 0)
        let i = Instruction::new(0xEA00_0000);
        assert_eq!(Branch::B.branch_target_offset(i), Some(0));
        // B . (imm24 = -2)
        let i = Instruction::new(0xEAFF_FFFE);
        assert_eq!(Branch::B.branch_target_offset(i), Some(-8));
        // BL with imm24 = 0x7FFFFF, the largest forward offset
        let i = Instruction::new(0xEB7F_FFFF);
        assert_eq!(Branch::BlBlxImmediate.branch_target_offset(i), Some(0x01FF_FFFC));
        assert!(Branch::BlBlxImmediate.is_relative_branch(i));
        assert_eq!(
            Branch::BlBlxImmediate.defs(i),
            RegisterList::from([Register::PC, Register::LR])
        );
    }

    #[test]
    fn test_register_branches() {
        // BX lr
        let i = Instruction::new(0xE12F_FF1E);
        assert_eq!(Branch::Bx.branch_target_register(i), Some(Register::LR));
        assert_eq!(Branch::Bx.safety(i), SafetyLevel::MayBeSafe);
        assert!(!Branch::Bx.is_relative_branch(i));
        // BX pc
        let i = Instruction::new(0xE12F_FF1F);
        assert_eq!(Branch::Bx.safety(i), SafetyLevel::ForbiddenOperands);
    }

    #[test]
    fn test_breakpoints() {
        let head = Instruction::new(LITERAL_POOL_HEAD);
        assert!(Branch::Bkpt.is_literal_pool_head(head));
        assert_eq!(Branch::Bkpt.safety(head), SafetyLevel::MayBeSafe);
        assert_eq!(Branch::Bkpt.safety(Instruction::new(HALT_FILL)), SafetyLevel::MayBeSafe);
        assert!(!Branch::Bkpt.is_literal_pool_head(Instruction::new(HALT_FILL)));
        // BKPT #0
        assert_eq!(
            Branch::Bkpt.safety(Instruction::new(0xE120_0070)),
            SafetyLevel::ForbiddenOperands
        );
        // Conditional breakpoint
        assert_eq!(
            Branch::Bkpt.safety(Instruction::new(0x0125_BE70)),
            SafetyLevel::Unpredictable
        );
    }
}
