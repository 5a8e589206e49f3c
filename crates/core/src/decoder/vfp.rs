// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::ClassDecoder;
use crate::instruction::Instruction;
use crate::register::{Register, RegisterList};
use crate::safety::{first_match, SafetyLevel};

/// Floating-point data processing and the transfers between core and
/// extension registers.
///
/// Core register fields: Rt = 15:12, and Rt2 = 19:16 for the two-register
/// moves. VDUP also keeps its Rt at 15:12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vfp {
    VfpMiscellaneous,   // VABS, VCMP, VCVTB, VMOV (register/immediate), VNEG, VSQRT
    VaddFloatingPoint,  // VADD, VSUB, VMUL, VDIV, VMLA, VNMLA, VFMA ...
    VcvtFloatInteger,   // VCVT{R}.S32.F64 Sd, Dm
    VcvtFixedPointVfp,  // VCVT.S32.F32 Sd, Sd, #fbits
    VdupCore,           // VDUP.32 Qd, Rt
    VmovCoreToScalar,   // VMOV.32 Dd[x], Rt
    MoveScalarToCore,   // VMOV.S8 Rt, Dn[x]
    VmovCoreSingle,     // VMOV Sn, Rt / VMOV Rt, Sn
    VmovTwoCoreDouble,  // VMOV Dm, Rt, Rt2 / VMOV Rt, Rt2, Dm
    VmovTwoCoreSingles, // VMOV Sm, Sm1, Rt, Rt2 / VMOV Rt, Rt2, Sm, Sm1
    Vmrs,               // VMRS Rt, FPSCR
    Vmsr,               // VMSR FPSCR, Rt
}

impl Vfp {
    pub const ALL: [Vfp; 12] = [
        Vfp::VfpMiscellaneous,
        Vfp::VaddFloatingPoint,
        Vfp::VcvtFloatInteger,
        Vfp::VcvtFixedPointVfp,
        Vfp::VdupCore,
        Vfp::VmovCoreToScalar,
        Vfp::MoveScalarToCore,
        Vfp::VmovCoreSingle,
        Vfp::VmovTwoCoreDouble,
        Vfp::VmovTwoCoreSingles,
        Vfp::Vmrs,
        Vfp::Vmsr,
    ];
}

impl ClassDecoder for Vfp {
    fn name(&self) -> &'static str {
        match self {
            Self::VfpMiscellaneous => "VfpMiscellaneous",
            Self::VaddFloatingPoint => "VaddFloatingPoint",
            Self::VcvtFloatInteger => "VcvtFloatInteger",
            Self::VcvtFixedPointVfp => "VcvtFixedPointVfp",
            Self::VdupCore => "VdupCore",
            Self::VmovCoreToScalar => "VmovCoreToScalar",
            Self::MoveScalarToCore => "MoveScalarToCore",
            Self::VmovCoreSingle => "VmovCoreSingle",
            Self::VmovTwoCoreDouble => "VmovTwoCoreDouble",
            Self::VmovTwoCoreSingles => "VmovTwoCoreSingles",
            Self::Vmrs => "Vmrs",
            Self::Vmsr => "Vmsr",
        }
    }

    fn defs(&self, i: Instruction) -> RegisterList {
        let t = i.reg(12);
        let to_core = i.bit(20);
        match self {
            Self::MoveScalarToCore => RegisterList::from(t),
            Self::VmovCoreSingle => RegisterList::from(t.when(to_core)),
            Self::VmovTwoCoreDouble | Self::VmovTwoCoreSingles if to_core => {
                RegisterList::from([t, i.reg(16)])
            }
            // VMRS APSR_nzcv, FPSCR copies the floating-point flags.
            Self::Vmrs if t == Register::PC => RegisterList::from(Register::CONDITIONS),
            Self::Vmrs => RegisterList::from(t),
            _ => RegisterList::EMPTY,
        }
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        let t = i.reg(12);
        let to_core = i.bit(20);
        match self {
            Self::VdupCore | Self::VmovCoreToScalar | Self::Vmsr => RegisterList::from(t),
            Self::VmovCoreSingle => RegisterList::from(t.when(!to_core)),
            Self::VmovTwoCoreDouble | Self::VmovTwoCoreSingles if !to_core => {
                RegisterList::from([t, i.reg(16)])
            }
            _ => RegisterList::EMPTY,
        }
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        let t = i.reg(12);
        let pc = Register::PC;
        match self {
            Self::VfpMiscellaneous | Self::Vmrs => SafetyLevel::MayBeSafe,
            Self::VaddFloatingPoint => first_match([(i.cond() == 0b1111, SafetyLevel::DecoderError)]),
            Self::VcvtFloatInteger => {
                let opc2 = i.bits(18, 16);
                first_match([(opc2 != 0b000 && opc2 >> 1 != 0b10, SafetyLevel::DecoderError)])
            }
            Self::VcvtFixedPointVfp => {
                let size: i32 = if i.bit(7) { 32 } else { 16 };
                let imm = ((i.bits(3, 0) << 1) | i.bits(5, 5)) as i32;
                first_match([(size - imm < 0, SafetyLevel::Unpredictable)])
            }
            Self::VdupCore => first_match([
                (t == pc, SafetyLevel::Unpredictable),
                // Q set needs an even Vd
                (i.bit(21) && i.bit(16), SafetyLevel::Undefined),
                // B:E == 11 has no element size
                (i.bit(22) && i.bit(5), SafetyLevel::Undefined),
            ]),
            Self::VmovCoreToScalar => {
                let sel = (i.bits(22, 21) << 2) | i.bits(6, 5);
                first_match([
                    (t == pc, SafetyLevel::Unpredictable),
                    (sel & 0b1011 == 0b0010, SafetyLevel::Undefined),
                ])
            }
            Self::MoveScalarToCore => {
                let sel = (i.bits(23, 23) << 4) | (i.bits(22, 21) << 2) | i.bits(6, 5);
                first_match([
                    (t == pc, SafetyLevel::Unpredictable),
                    // 10x00 and x0x10 are reserved
                    (
                        sel & 0b11011 == 0b10000 || sel & 0b01011 == 0b00010,
                        SafetyLevel::Undefined,
                    ),
                ])
            }
            Self::VmovCoreSingle | Self::Vmsr => {
                first_match([(t == pc, SafetyLevel::Unpredictable)])
            }
            Self::VmovTwoCoreDouble => {
                let t2 = i.reg(16);
                first_match([
                    (t == pc || t2 == pc, SafetyLevel::Unpredictable),
                    (i.bit(20) && t == t2, SafetyLevel::Unpredictable),
                ])
            }
            Self::VmovTwoCoreSingles => {
                let t2 = i.reg(16);
                // Vm:M == 31 has no following single register
                let m = (i.bits(3, 0) << 1) | i.bits(5, 5);
                first_match([
                    (t == pc || t2 == pc || m == 31, SafetyLevel::Unpredictable),
                    (i.bit(20) && t == t2, SafetyLevel::Unpredictable),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_register_transfer_direction() {
        // VMOV r0, s0
        let i = Instruction::new(0xEE10_0A10);
        assert_eq!(Vfp::VmovCoreSingle.defs(i), RegisterList::from(Register::R0));
        assert!(Vfp::VmovCoreSingle.uses(i).is_empty());
        // VMOV s0, r0
        let i = Instruction::new(0xEE00_0A10);
        assert!(Vfp::VmovCoreSingle.defs(i).is_empty());
        assert_eq!(Vfp::VmovCoreSingle.uses(i), RegisterList::from(Register::R0));
        // VMOV pc, s0
        assert_eq!(
            Vfp::VmovCoreSingle.safety(Instruction::new(0xEE10_FA10)),
            SafetyLevel::Unpredictable
        );
    }

    #[test]
    fn test_two_register_transfers() {
        // VMOV r0, r1, d0
        let i = Instruction::new(0xEC51_0B10);
        assert_eq!(
            Vfp::VmovTwoCoreDouble.defs(i),
            RegisterList::from([Register::R0, Register::R1])
        );
        assert_eq!(Vfp::VmovTwoCoreDouble.safety(i), SafetyLevel::MayBeSafe);
        // VMOV r0, r0, d0
        assert_eq!(
            Vfp::VmovTwoCoreDouble.safety(Instruction::new(0xEC50_0B10)),
            SafetyLevel::Unpredictable
        );
        // VMOV d0, r0, r1
        let i = Instruction::new(0xEC41_0B10);
        assert!(Vfp::VmovTwoCoreDouble.defs(i).is_empty());
        assert_eq!(
            Vfp::VmovTwoCoreDouble.uses(i),
            RegisterList::from([Register::R0, Register::R1])
        );
        // VMOV r0, r1, s31, s32
        assert_eq!(
            Vfp::VmovTwoCoreSingles.safety(Instruction::new(0xEC51_0A3F)),
            SafetyLevel::Unpredictable
        );
    }

    #[test]
    fn test_status_register_moves() {
        // VMRS r0, FPSCR
        let i = Instruction::new(0xEEF1_0A10);
        assert_eq!(Vfp::Vmrs.defs(i), RegisterList::from(Register::R0));
        // VMRS APSR_nzcv, FPSCR
        let i = Instruction::new(0xEEF1_FA10);
        assert_eq!(Vfp::Vmrs.defs(i), RegisterList::from(Register::CONDITIONS));
        assert_eq!(Vfp::Vmrs.safety(i), SafetyLevel::MayBeSafe);
        // VMSR FPSCR, r0
        let i = Instruction::new(0xEEE1_0A10);
        assert_eq!(Vfp::Vmsr.uses(i), RegisterList::from(Register::R0));
        assert_eq!(
            Vfp::Vmsr.safety(Instruction::new(0xEEE1_FA10)),
            SafetyLevel::Unpredictable
        );
    }

    #[test]
    fn test_scalar_moves() {
        // VMOV.32 r0, d0[0]
        let i = Instruction::new(0xEE10_0B10);
        assert_eq!(Vfp::MoveScalarToCore.defs(i), RegisterList::from(Register::R0));
        assert_eq!(Vfp::MoveScalarToCore.safety(i), SafetyLevel::MayBeSafe);
        // U set on a 32-bit move
        assert_eq!(
            Vfp::MoveScalarToCore.safety(Instruction::new(0xEE90_0B10)),
            SafetyLevel::Undefined
        );
        // VMOV.32 d0[0], r0
        let i = Instruction::new(0xEE00_0B10);
        assert_eq!(Vfp::VmovCoreToScalar.uses(i), RegisterList::from(Register::R0));
        assert_eq!(Vfp::VmovCoreToScalar.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(
            Vfp::VmovCoreToScalar.safety(Instruction::new(0xEE00_0B50)),
            SafetyLevel::Undefined
        );
    }

    #[test]
    fn test_vdup() {
        // VDUP.32 d0, r0
        let i = Instruction::new(0xEE80_0B10);
        assert_eq!(Vfp::VdupCore.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(Vfp::VdupCore.uses(i), RegisterList::from(Register::R0));
        // B:E == 11
        assert_eq!(Vfp::VdupCore.safety(Instruction::new(0xEEC0_0B30)), SafetyLevel::Undefined);
        // Q set with odd Vd
        assert_eq!(Vfp::VdupCore.safety(Instruction::new(0xEEA1_0B10)), SafetyLevel::Undefined);
        assert_eq!(
            Vfp::VdupCore.safety(Instruction::new(0xEE80_FB10)),
            SafetyLevel::Unpredictable
        );
    }

    #[test]
    fn test_conversions() {
        // VCVT.F32.S32 s0, s0
        assert_eq!(
            Vfp::VcvtFloatInteger.safety(Instruction::new(0xEEB8_0AC0)),
            SafetyLevel::MayBeSafe
        );
        // VCVT.S32.F32 s0, s0
        assert_eq!(
            Vfp::VcvtFloatInteger.safety(Instruction::new(0xEEBD_0AC0)),
            SafetyLevel::MayBeSafe
        );
        assert_eq!(
            Vfp::VcvtFloatInteger.safety(Instruction::new(0xEEB9_0AC0)),
            SafetyLevel::DecoderError
        );
        // 16-bit fixed point with 31 fraction bits requested
        assert_eq!(
            Vfp::VcvtFixedPointVfp.safety(Instruction::new(0xEEBA_0A6F)),
            SafetyLevel::Unpredictable
        );
        assert_eq!(
            Vfp::VcvtFixedPointVfp.safety(Instruction::new(0xEEBA_0AEF)),
            SafetyLevel::MayBeSafe
        );
    }

    #[test]
    fn test_arithmetic_needs_condition() {
        // VADD.F32 s0, s0, s0
        assert_eq!(
            Vfp::VaddFloatingPoint.safety(Instruction::new(0xEE30_0A00)),
            SafetyLevel::MayBeSafe
        );
        assert_eq!(
            Vfp::VaddFloatingPoint.safety(Instruction::new(0xFE30_0A00)),
            SafetyLevel::DecoderError
        );
    }
}
