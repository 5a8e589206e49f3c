// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::ClassDecoder;
use crate::instruction::{Instruction, ARCH_VERSION};
use crate::register::{Register, RegisterList};
use crate::safety::{first_match, SafetyLevel};

/// Multiply and multiply-accumulate classes.
///
/// Register fields sit in different places than in data processing:
/// Rd (or RdHi) is 19:16, Ra (or RdLo) is 15:12, Rm is 11:8 and Rn is 3:0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiply {
    MlaA1,   // MLA Rd, Rn, Rm, Ra
    MlsA1,   // MLS Rd, Rn, Rm, Ra
    MulA1,   // MUL Rd, Rn, Rm
    Sdiv,    // SDIV Rd, Rn, Rm
    Smlad,   // SMLAD Rd, Rn, Rm, Ra
    SmlalXy, // SMLALBB RdLo, RdHi, Rn, Rm
    SmlalA1, // SMLAL RdLo, RdHi, Rn, Rm
    SmulXy,  // SMULBB Rd, Rn, Rm
    SmullA1, // SMULL RdLo, RdHi, Rn, Rm
}

impl Multiply {
    pub const ALL: [Multiply; 9] = [
        Multiply::MlaA1,
        Multiply::MlsA1,
        Multiply::MulA1,
        Multiply::Sdiv,
        Multiply::Smlad,
        Multiply::SmlalXy,
        Multiply::SmlalA1,
        Multiply::SmulXy,
        Multiply::SmullA1,
    ];
}

/// Rules that only applied before ARMv6 (Rd overlapping Rn).
const fn pre_v6() -> bool {
    ARCH_VERSION < 6
}

impl ClassDecoder for Multiply {
    fn name(&self) -> &'static str {
        match self {
            Self::MlaA1 => "MlaA1",
            Self::MlsA1 => "MlsA1",
            Self::MulA1 => "MulA1",
            Self::Sdiv => "Sdiv",
            Self::Smlad => "Smlad",
            Self::SmlalXy => "SmlalXy",
            Self::SmlalA1 => "SmlalA1",
            Self::SmulXy => "SmulXy",
            Self::SmullA1 => "SmullA1",
        }
    }

    fn defs(&self, i: Instruction) -> RegisterList {
        let (hi, lo) = (i.reg(16), i.reg(12));
        let flags = Register::conditions_if(i.bit(20));
        match self {
            Self::MlaA1 | Self::MulA1 => RegisterList::from([hi, flags]),
            Self::MlsA1 | Self::Sdiv | Self::Smlad | Self::SmulXy => RegisterList::from(hi),
            Self::SmlalXy => RegisterList::from([lo, hi]),
            Self::SmlalA1 | Self::SmullA1 => RegisterList::from([lo, hi, flags]),
        }
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        let (hi, lo, m, n) = (i.reg(16), i.reg(12), i.reg(8), i.reg(0));
        match self {
            Self::MlaA1 | Self::MlsA1 | Self::Smlad => RegisterList::from([n, m, lo]),
            Self::MulA1 | Self::Sdiv | Self::SmulXy | Self::SmullA1 => RegisterList::from([m, n]),
            Self::SmlalXy | Self::SmlalA1 => RegisterList::from([lo, hi, n, m]),
        }
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        let (d, a, m, n) = (i.reg(16), i.reg(12), i.reg(8), i.reg(0));
        let pc = Register::PC;
        match self {
            Self::MlaA1 => first_match([
                (pre_v6() && d == n, SafetyLevel::Unpredictable),
                (
                    d == pc || n == pc || m == pc || a == pc,
                    SafetyLevel::Unpredictable,
                ),
            ]),
            Self::MlsA1 => first_match([(
                d == pc || n == pc || m == pc || a == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::MulA1 => first_match([
                (pre_v6() && d == n, SafetyLevel::Unpredictable),
                (d == pc || n == pc || m == pc, SafetyLevel::Unpredictable),
            ]),
            Self::Sdiv | Self::SmulXy => first_match([(
                d == pc || m == pc || n == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::Smlad => first_match([
                // Ra == pc selects the non-accumulating form
                (a == pc, SafetyLevel::DecoderError),
                (d == pc || n == pc || m == pc, SafetyLevel::Unpredictable),
            ]),
            Self::SmlalXy => {
                let (hi, lo) = (d, a);
                first_match([
                    (
                        lo == pc || hi == pc || n == pc || m == pc,
                        SafetyLevel::Unpredictable,
                    ),
                    (lo == hi, SafetyLevel::Unpredictable),
                ])
            }
            Self::SmlalA1 | Self::SmullA1 => {
                let (hi, lo) = (d, a);
                first_match([
                    (pre_v6() && (hi == n || lo == n), SafetyLevel::Unpredictable),
                    (
                        lo == pc || hi == pc || n == pc || m == pc,
                        SafetyLevel::Unpredictable,
                    ),
                    (lo == hi, SafetyLevel::Unpredictable),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_sets_flags_only_with_s() {
        // MUL r0, r1, r2: cccc 0000000 S=0 Rd=0000 0000 Rm=0010 1001 Rn=0001
        let i = Instruction::new(0xE000_0291);
        assert_eq!(Multiply::MulA1.defs(i), RegisterList::from(Register::R0));
        assert_eq!(
            Multiply::MulA1.uses(i),
            RegisterList::from([Register::R1, Register::R2])
        );
        assert_eq!(Multiply::MulA1.safety(i), SafetyLevel::MayBeSafe);
        // MULS
        let i = Instruction::new(0xE010_0291);
        assert!(Multiply::MulA1.defs(i).contains(Register::CONDITIONS));
    }

    #[test]
    fn test_mul_overlap_allowed_on_v7() {
        // MUL r1, r1, r2: Rd == Rn was only a problem before ARMv6
        let i = Instruction::new(0xE001_0291);
        assert_eq!(Multiply::MulA1.safety(i), SafetyLevel::MayBeSafe);
    }

    #[test]
    fn test_mla_uses_accumulator() {
        // MLA r0, r1, r2, r3
        let i = Instruction::new(0xE020_3291);
        assert_eq!(
            Multiply::MlaA1.uses(i),
            RegisterList::from([Register::R1, Register::R2, Register::R3])
        );
        // Ra = pc
        let i = Instruction::new(0xE020_F291);
        assert_eq!(Multiply::MlaA1.safety(i), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_smlad_without_accumulator_is_smuad() {
        // SMLAD r0, r1, r2, pc -> Ra=1111
        let i = Instruction::new(0xE700_F211);
        assert_eq!(Multiply::Smlad.safety(i), SafetyLevel::DecoderError);
        let i = Instruction::new(0xE700_3211);
        assert_eq!(Multiply::Smlad.safety(i), SafetyLevel::MayBeSafe);
    }

    #[test]
    fn test_long_multiply_same_halves() {
        // UMULL r0, r1, r2, r3: RdHi=1, RdLo=0, Rm=3, Rn=2
        let i = Instruction::new(0xE081_0392);
        let k = Multiply::SmullA1;
        assert_eq!(k.defs(i), RegisterList::from([Register::R0, Register::R1]));
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        // RdHi == RdLo
        let i = Instruction::new(0xE081_1392);
        assert_eq!(k.safety(i), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_smlal_reads_both_halves() {
        // SMLAL r0, r1, r2, r3
        let i = Instruction::new(0xE0E1_0392);
        assert_eq!(
            Multiply::SmlalA1.uses(i),
            RegisterList::from([Register::R0, Register::R1, Register::R2, Register::R3])
        );
    }
}
