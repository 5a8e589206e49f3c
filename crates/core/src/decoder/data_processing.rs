// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{Capabilities, ClassDecoder};
use crate::instruction::{arm_expand_imm, Instruction};
use crate::register::{Register, RegisterList};
use crate::safety::{first_match, SafetyLevel};

/// Data-processing, status-register and media-instruction classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataProcessing {
    AdcImmediate,               // ADC Rd, Rn, #imm
    AdcRegister,                // ADC Rd, Rn, Rm{, shift}
    AdcRegisterShiftedRegister, // ADC Rd, Rn, Rm, type Rs
    AddImmediate,               // ADD Rd, Rn, #imm
    Adr,                        // ADR Rd, label
    AsrImmediate,               // ASR Rd, Rm, #imm
    AsrRegister,                // ASR Rd, Rn, Rm
    LslImmediate,               // LSL Rd, Rm, #imm
    Bfc,                        // BFC Rd, #lsb, #width
    Bfi,                        // BFI Rd, Rn, #lsb, #width
    BicImmediate,               // BIC Rd, Rn, #imm
    Clz,                        // CLZ Rd, Rm
    CmnImmediate,               // CMN Rn, #imm
    CmnRegister,                // CMN Rn, Rm{, shift}
    CmnRegisterShiftedRegister, // CMN Rn, Rm, type Rs
    TstImmediate,               // TST Rn, #imm
    Movt,                       // MOVT Rd, #imm16
    MovImmediate,               // MOV Rd, #imm
    OrrImmediate,               // ORR Rd, Rn, #imm
    Mrs,                        // MRS Rd, APSR
    MsrImmediate,               // MSR APSR_nzcvq, #imm
    MsrRegister,                // MSR APSR_nzcvq, Rn
    Nop,                        // NOP
    Pkh,                        // PKHBT Rd, Rn, Rm
    Sbfx,                       // SBFX Rd, Rn, #lsb, #width
    Sxtab16,                    // SXTAB16 Rd, Rn, Rm
}

impl DataProcessing {
    pub const ALL: [DataProcessing; 26] = [
        DataProcessing::AdcImmediate,
        DataProcessing::AdcRegister,
        DataProcessing::AdcRegisterShiftedRegister,
        DataProcessing::AddImmediate,
        DataProcessing::Adr,
        DataProcessing::AsrImmediate,
        DataProcessing::AsrRegister,
        DataProcessing::LslImmediate,
        DataProcessing::Bfc,
        DataProcessing::Bfi,
        DataProcessing::BicImmediate,
        DataProcessing::Clz,
        DataProcessing::CmnImmediate,
        DataProcessing::CmnRegister,
        DataProcessing::CmnRegisterShiftedRegister,
        DataProcessing::TstImmediate,
        DataProcessing::Movt,
        DataProcessing::MovImmediate,
        DataProcessing::OrrImmediate,
        DataProcessing::Mrs,
        DataProcessing::MsrImmediate,
        DataProcessing::MsrRegister,
        DataProcessing::Nop,
        DataProcessing::Pkh,
        DataProcessing::Sbfx,
        DataProcessing::Sxtab16,
    ];
}

/// Destination is PC: with S set the encoding belongs to another class
/// (the exception-return forms), otherwise it is a forbidden operand.
fn pc_destination(i: Instruction) -> SafetyLevel {
    let d = i.reg(12);
    first_match([
        (d == Register::PC && i.bit(20), SafetyLevel::DecoderError),
        (d == Register::PC, SafetyLevel::ForbiddenOperands),
    ])
}

impl ClassDecoder for DataProcessing {
    fn name(&self) -> &'static str {
        match self {
            Self::AdcImmediate => "AdcImmediate",
            Self::AdcRegister => "AdcRegister",
            Self::AdcRegisterShiftedRegister => "AdcRegisterShiftedRegister",
            Self::AddImmediate => "AddImmediate",
            Self::Adr => "Adr",
            Self::AsrImmediate => "AsrImmediate",
            Self::AsrRegister => "AsrRegister",
            Self::LslImmediate => "LslImmediate",
            Self::Bfc => "Bfc",
            Self::Bfi => "Bfi",
            Self::BicImmediate => "BicImmediate",
            Self::Clz => "Clz",
            Self::CmnImmediate => "CmnImmediate",
            Self::CmnRegister => "CmnRegister",
            Self::CmnRegisterShiftedRegister => "CmnRegisterShiftedRegister",
            Self::TstImmediate => "TstImmediate",
            Self::Movt => "Movt",
            Self::MovImmediate => "MovImmediate",
            Self::OrrImmediate => "OrrImmediate",
            Self::Mrs => "Mrs",
            Self::MsrImmediate => "MsrImmediate",
            Self::MsrRegister => "MsrRegister",
            Self::Nop => "Nop",
            Self::Pkh => "Pkh",
            Self::Sbfx => "Sbfx",
            Self::Sxtab16 => "Sxtab16",
        }
    }

    fn defs(&self, i: Instruction) -> RegisterList {
        let d = i.reg(12);
        let flags = Register::conditions_if(i.bit(20));
        match self {
            Self::AdcImmediate
            | Self::AdcRegister
            | Self::AdcRegisterShiftedRegister
            | Self::AddImmediate
            | Self::AsrImmediate
            | Self::AsrRegister
            | Self::LslImmediate
            | Self::BicImmediate
            | Self::Movt
            | Self::MovImmediate
            | Self::OrrImmediate => RegisterList::from([d, flags]),
            Self::Adr
            | Self::Bfc
            | Self::Bfi
            | Self::Clz
            | Self::Mrs
            | Self::Pkh
            | Self::Sbfx
            | Self::Sxtab16 => RegisterList::from(d),
            Self::CmnImmediate | Self::CmnRegisterShiftedRegister | Self::TstImmediate => {
                RegisterList::from(Register::CONDITIONS)
            }
            Self::CmnRegister => RegisterList::from(flags),
            // Writing the nzcvq bits of APSR.
            Self::MsrImmediate | Self::MsrRegister => {
                RegisterList::from(Register::conditions_if(i.bit(19)))
            }
            Self::Nop => RegisterList::EMPTY,
        }
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        let (d, n, m, s) = (i.reg(12), i.reg(16), i.reg(0), i.reg(8));
        match self {
            Self::AdcImmediate
            | Self::AddImmediate
            | Self::BicImmediate
            | Self::OrrImmediate
            | Self::CmnImmediate
            | Self::TstImmediate => RegisterList::from(n),
            Self::AdcRegister | Self::CmnRegister | Self::Pkh | Self::Sxtab16 => {
                RegisterList::from([n, m])
            }
            Self::AdcRegisterShiftedRegister | Self::CmnRegisterShiftedRegister => {
                RegisterList::from([n, m, s])
            }
            Self::Adr => RegisterList::from(Register::PC),
            Self::AsrImmediate
            | Self::LslImmediate
            | Self::Clz
            | Self::Sbfx
            | Self::MsrRegister => RegisterList::from(m),
            Self::AsrRegister => RegisterList::from([m, s]),
            Self::Bfc => RegisterList::from(d),
            Self::Bfi => RegisterList::from([m, d]),
            Self::Movt | Self::MovImmediate | Self::Mrs | Self::MsrImmediate | Self::Nop => {
                RegisterList::EMPTY
            }
        }
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        let (d, n, m, s) = (i.reg(12), i.reg(16), i.reg(0), i.reg(8));
        let pc = Register::PC;
        let set_flags = i.bit(20);
        let msb = i.bits(20, 16);
        let lsb = i.bits(11, 7);
        match self {
            Self::AdcImmediate
            | Self::AdcRegister
            | Self::AsrImmediate
            | Self::BicImmediate
            | Self::MovImmediate
            | Self::OrrImmediate => pc_destination(i),
            Self::AdcRegisterShiftedRegister => first_match([(
                n == pc || d == pc || m == pc || s == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::AddImmediate => first_match([
                (d == pc && set_flags, SafetyLevel::DecoderError),
                // ADR encodings
                (n == pc && !set_flags, SafetyLevel::DecoderError),
                (d == pc, SafetyLevel::ForbiddenOperands),
            ]),
            Self::Adr => first_match([(d == pc, SafetyLevel::ForbiddenOperands)]),
            Self::AsrRegister => first_match([(
                d == pc || m == pc || s == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::LslImmediate => first_match([
                (d == pc && set_flags, SafetyLevel::DecoderError),
                // imm5 == 0 is MOV (register) or RRX
                (i.bits(11, 7) == 0, SafetyLevel::DecoderError),
                (d == pc, SafetyLevel::ForbiddenOperands),
            ]),
            Self::Bfc => first_match([
                (d == pc, SafetyLevel::Unpredictable),
                (msb < lsb, SafetyLevel::Unpredictable),
            ]),
            Self::Bfi => first_match([
                (d == pc, SafetyLevel::Unpredictable),
                (m == pc, SafetyLevel::DecoderError),
                (msb < lsb, SafetyLevel::Unpredictable),
            ]),
            Self::Clz => first_match([(d == pc || m == pc, SafetyLevel::Unpredictable)]),
            Self::CmnImmediate | Self::CmnRegister | Self::TstImmediate | Self::Nop => {
                SafetyLevel::MayBeSafe
            }
            Self::CmnRegisterShiftedRegister => first_match([(
                n == pc || m == pc || s == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::Movt => first_match([(d == pc, SafetyLevel::Unpredictable)]),
            Self::Mrs => first_match([
                (d == pc, SafetyLevel::Unpredictable),
                // SPSR access
                (i.bit(22), SafetyLevel::ForbiddenOperands),
            ]),
            Self::MsrImmediate => first_match([(i.bits(19, 18) == 0, SafetyLevel::DecoderError)]),
            Self::MsrRegister => first_match([
                (m == pc, SafetyLevel::Unpredictable),
                (i.bits(19, 18) == 0, SafetyLevel::Unpredictable),
            ]),
            Self::Pkh => first_match([(
                d == pc || n == pc || m == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::Sbfx => first_match([
                (d == pc || m == pc, SafetyLevel::Unpredictable),
                (lsb + i.bits(20, 16) > 31, SafetyLevel::Unpredictable),
            ]),
            Self::Sxtab16 => first_match([
                (d == pc || m == pc, SafetyLevel::Unpredictable),
                // SXTB16 and friends
                (n == pc, SafetyLevel::DecoderError),
            ]),
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Self::BicImmediate => Capabilities::CLEARS_BITS,
            Self::TstImmediate => Capabilities::SETS_Z_IF_BITS_CLEAR,
            Self::Movt | Self::MovImmediate | Self::OrrImmediate => Capabilities::CODE_REPLACEMENT,
            _ => Capabilities::empty(),
        }
    }

    fn clears_bits(&self, i: Instruction, mask: u32) -> bool {
        match self {
            Self::BicImmediate => arm_expand_imm(i.bits(11, 0)) & mask == mask,
            _ => false,
        }
    }

    fn sets_z_if_bits_clear(&self, i: Instruction, reg: Register, mask: u32) -> bool {
        match self {
            Self::TstImmediate => i.reg(16) == reg && arm_expand_imm(i.bits(11, 0)) & mask == mask,
            _ => false,
        }
    }

    fn dynamic_code_replacement_sentinel(&self, i: Instruction) -> Instruction {
        match self {
            // imm4 and imm12
            Self::Movt => i.clear_bits(0x000F_0FFF),
            Self::MovImmediate | Self::OrrImmediate => i.clear_bits(0x0000_0FFF),
            _ => i,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs(list: &[Register]) -> RegisterList {
        list.iter().copied().collect()
    }

    #[test]
    fn test_adc_immediate_plain() {
        // cond=1110 0010101 S=0 Rn=0001 Rd=0000 imm12=0x005
        let i = Instruction::new(0xE2A1_0005);
        let k = DataProcessing::AdcImmediate;
        assert_eq!(k.defs(i), regs(&[Register::R0]));
        assert_eq!(k.uses(i), regs(&[Register::R1]));
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
    }

    #[test]
    fn test_adc_immediate_pc_destination() {
        // Rd=1111, S=0
        let i = Instruction::new(0xE2A1_F005);
        assert_eq!(DataProcessing::AdcImmediate.safety(i), SafetyLevel::ForbiddenOperands);
        // Rd=1111, S=1 is checked first
        let i = Instruction::new(0xE2B1_F005);
        assert_eq!(DataProcessing::AdcImmediate.safety(i), SafetyLevel::DecoderError);
        assert!(DataProcessing::AdcImmediate.defs(i).contains(Register::CONDITIONS));
    }

    #[test]
    fn test_add_immediate_with_pc_source_is_adr() {
        // ADD r0, pc, #4 (S=0, Rn=1111)
        let i = Instruction::new(0xE28F_0004);
        assert_eq!(DataProcessing::AddImmediate.safety(i), SafetyLevel::DecoderError);
        // ADDS r0, pc, #4 is fine
        let i = Instruction::new(0xE29F_0004);
        assert_eq!(DataProcessing::AddImmediate.safety(i), SafetyLevel::MayBeSafe);
    }

    #[test]
    fn test_lsl_zero_shift_belongs_to_mov() {
        // LSL r0, r1, #0 == MOV r0, r1
        let i = Instruction::new(0xE1A0_0001);
        assert_eq!(DataProcessing::LslImmediate.safety(i), SafetyLevel::DecoderError);
        // LSL r0, r1, #2
        let i = Instruction::new(0xE1A0_0101);
        assert_eq!(DataProcessing::LslImmediate.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(DataProcessing::LslImmediate.uses(i), regs(&[Register::R1]));
    }

    #[test]
    fn test_register_shifted_register_rejects_pc_anywhere() {
        // ADD r0, r1, r2, LSL r3
        let i = Instruction::new(0xE081_0312);
        let k = DataProcessing::AdcRegisterShiftedRegister;
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(
            k.uses(i),
            regs(&[Register::R1, Register::R2, Register::R3])
        );
        // Rs = pc
        let i = Instruction::new(0xE081_0F12);
        assert_eq!(k.safety(i), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_bic_clears_bits() {
        // BIC r0, r0, #0xC000000F -> imm12 = 0x13F
        let i = Instruction::new(0xE3C0_013F);
        let k = DataProcessing::BicImmediate;
        assert!(k.clears_bits(i, 0xC000_000F));
        assert!(k.clears_bits(i, 0xC000_0000));
        assert!(!k.clears_bits(i, 0xF000_000F));
        assert!(k.capabilities().contains(Capabilities::CLEARS_BITS));
    }

    #[test]
    fn test_tst_sets_z() {
        // TST r1, #0xC0000000 -> imm12 = 0x103
        let i = Instruction::new(0xE311_0103);
        let k = DataProcessing::TstImmediate;
        assert!(k.sets_z_if_bits_clear(i, Register::R1, 0xC000_0000));
        assert!(!k.sets_z_if_bits_clear(i, Register::R2, 0xC000_0000));
        assert_eq!(k.defs(i), regs(&[Register::CONDITIONS]));
    }

    #[test]
    fn test_bitfield_bounds() {
        // BFC r0, #8, #8: msb=15, lsb=8
        let i = Instruction::new(0xE7CF_041F);
        assert_eq!(DataProcessing::Bfc.safety(i), SafetyLevel::MayBeSafe);
        // msb=3 < lsb=8
        let i = Instruction::new(0xE7C3_041F);
        assert_eq!(DataProcessing::Bfc.safety(i), SafetyLevel::Unpredictable);
        // BFI with Rn=pc is BFC
        assert_eq!(DataProcessing::Bfi.safety(Instruction::new(0xE7CF_041F)), SafetyLevel::DecoderError);
    }

    #[test]
    fn test_sbfx_width_overflow() {
        // SBFX r0, r1, #16, #16: widthm1=15, lsb=16
        let i = Instruction::new(0xE7AF_0851);
        assert_eq!(DataProcessing::Sbfx.safety(i), SafetyLevel::MayBeSafe);
        // widthm1=16, lsb=16 -> 32 > 31
        let i = Instruction::new(0xE7B0_0851);
        assert_eq!(DataProcessing::Sbfx.safety(i), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_movw_sentinel() {
        // MOVW r0, #0x1234 -> imm4=1, imm12=0x234
        let i = Instruction::new(0xE301_0234);
        let sentinel = DataProcessing::Movt.dynamic_code_replacement_sentinel(i);
        assert_eq!(sentinel.word(), 0xE300_0000);
        // MOV r1, #0xFF
        let i = Instruction::new(0xE3A0_10FF);
        assert_eq!(
            DataProcessing::MovImmediate
                .dynamic_code_replacement_sentinel(i)
                .word(),
            0xE3A0_1000
        );
        assert_eq!(DataProcessing::Clz.dynamic_code_replacement_sentinel(i), i);
    }

    #[test]
    fn test_mrs_spsr_forbidden() {
        // MRS r0, APSR
        assert_eq!(DataProcessing::Mrs.safety(Instruction::new(0xE10F_0000)), SafetyLevel::MayBeSafe);
        // MRS r0, SPSR
        assert_eq!(
            DataProcessing::Mrs.safety(Instruction::new(0xE14F_0000)),
            SafetyLevel::ForbiddenOperands
        );
    }

    #[test]
    fn test_msr_flags() {
        // MSR APSR_nzcvq, r0 (mask=10)
        let i = Instruction::new(0xE128_F000);
        assert_eq!(DataProcessing::MsrRegister.defs(i), regs(&[Register::CONDITIONS]));
        assert_eq!(DataProcessing::MsrRegister.safety(i), SafetyLevel::MayBeSafe);
        // MSR APSR_g, r0 (mask=01) leaves the flags alone
        let i = Instruction::new(0xE124_F000);
        assert!(DataProcessing::MsrRegister.defs(i).is_empty());
    }
}
