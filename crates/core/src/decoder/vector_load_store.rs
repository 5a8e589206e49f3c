// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{Capabilities, ClassDecoder};
use crate::instruction::{Instruction, VFP_SMALL_REGISTER_BANK};
use crate::register::{Register, RegisterList};
use crate::safety::{first_match, SafetyLevel};

/// Extension-register loads and stores: the Advanced SIMD element and
/// structure transfers plus the VFP block transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorLoadStore {
    Vld1Multiple, // VLD1/VST1 {list}, [Rn]
    Vld1AllLanes, // VLD1 {Dd[]}, [Rn]
    Vld1OneLane,  // VLD1/VST1 {Dd[x]}, [Rn]
    Vld2Multiple, // VLD2/VST2 {list}, [Rn]
    Vld2AllLanes, // VLD2 {Dd[], Dd2[]}, [Rn]
    Vld2OneLane,  // VLD2/VST2 {Dd[x], Dd2[x]}, [Rn]
    Vld3Multiple, // VLD3/VST3 {list}, [Rn]
    Vld3AllLanes, // VLD3 {Dd[], Dd2[], Dd3[]}, [Rn]
    Vld3OneLane,  // VLD3/VST3 {Dd[x], Dd2[x], Dd3[x]}, [Rn]
    Vld4Multiple, // VLD4/VST4 {list}, [Rn]
    Vld4AllLanes, // VLD4 {Dd[] .. Dd4[]}, [Rn]
    Vld4OneLane,  // VLD4/VST4 {Dd[x] .. Dd4[x]}, [Rn]
    VldmSingle,   // VLDM Rn{!}, {Sd-Sd+n}
    VldmDouble,   // VLDM Rn{!}, {Dd-Dd+n}
    VstmSingle,   // VSTM Rn{!}, {Sd-Sd+n}
    VstmDouble,   // VSTM Rn{!}, {Dd-Dd+n}
    VpopSingle,   // VPOP/VPUSH {Sd-Sd+n}
    VpopDouble,   // VPOP/VPUSH {Dd-Dd+n}
    Vldr,         // VLDR Dd, [Rn, #imm]
    Vstr,         // VSTR Dd, [Rn, #imm]
}

impl VectorLoadStore {
    pub const ALL: [VectorLoadStore; 20] = [
        VectorLoadStore::Vld1Multiple,
        VectorLoadStore::Vld1AllLanes,
        VectorLoadStore::Vld1OneLane,
        VectorLoadStore::Vld2Multiple,
        VectorLoadStore::Vld2AllLanes,
        VectorLoadStore::Vld2OneLane,
        VectorLoadStore::Vld3Multiple,
        VectorLoadStore::Vld3AllLanes,
        VectorLoadStore::Vld3OneLane,
        VectorLoadStore::Vld4Multiple,
        VectorLoadStore::Vld4AllLanes,
        VectorLoadStore::Vld4OneLane,
        VectorLoadStore::VldmSingle,
        VectorLoadStore::VldmDouble,
        VectorLoadStore::VstmSingle,
        VectorLoadStore::VstmDouble,
        VectorLoadStore::VpopSingle,
        VectorLoadStore::VpopDouble,
        VectorLoadStore::Vldr,
        VectorLoadStore::Vstr,
    ];

    /// The element and structure forms, which share Rm-based writeback.
    fn is_element_transfer(self) -> bool {
        matches!(
            self,
            Self::Vld1Multiple
                | Self::Vld1AllLanes
                | Self::Vld1OneLane
                | Self::Vld2Multiple
                | Self::Vld2AllLanes
                | Self::Vld2OneLane
                | Self::Vld3Multiple
                | Self::Vld3AllLanes
                | Self::Vld3OneLane
                | Self::Vld4Multiple
                | Self::Vld4AllLanes
                | Self::Vld4OneLane
        )
    }

    fn is_block_transfer(self) -> bool {
        matches!(
            self,
            Self::VldmSingle | Self::VldmDouble | Self::VstmSingle | Self::VstmDouble
        )
    }
}

/// D:Vd, the first doubleword register.
fn first_double(i: Instruction) -> u32 {
    (i.bits(22, 22) << 4) | i.bits(15, 12)
}

/// Vd:D, the first single register.
fn first_single(i: Instruction) -> u32 {
    (i.bits(15, 12) << 1) | i.bits(22, 22)
}

/// Register stride for the all-lanes forms (T bit).
fn all_lanes_stride(i: Instruction) -> u32 {
    if i.bit(5) {
        2
    } else {
        1
    }
}

/// Register stride for the one-lane forms, taken from index_align.
fn one_lane_stride(i: Instruction) -> u32 {
    match i.bits(11, 10) {
        0b00 => 1,
        0b01 if i.bit(5) => 2,
        0b01 => 1,
        0b10 if i.bit(6) => 2,
        0b10 => 1,
        _ => 0,
    }
}

/// Register count for VLD1/VST1 multiple, or 0 for another type.
fn vld1_regs(kind: u32) -> u32 {
    match kind {
        0b0111 => 1,
        0b1010 => 2,
        0b0110 => 3,
        0b0010 => 4,
        _ => 0,
    }
}

impl ClassDecoder for VectorLoadStore {
    fn name(&self) -> &'static str {
        match self {
            Self::Vld1Multiple => "Vld1Multiple",
            Self::Vld1AllLanes => "Vld1AllLanes",
            Self::Vld1OneLane => "Vld1OneLane",
            Self::Vld2Multiple => "Vld2Multiple",
            Self::Vld2AllLanes => "Vld2AllLanes",
            Self::Vld2OneLane => "Vld2OneLane",
            Self::Vld3Multiple => "Vld3Multiple",
            Self::Vld3AllLanes => "Vld3AllLanes",
            Self::Vld3OneLane => "Vld3OneLane",
            Self::Vld4Multiple => "Vld4Multiple",
            Self::Vld4AllLanes => "Vld4AllLanes",
            Self::Vld4OneLane => "Vld4OneLane",
            Self::VldmSingle => "VldmSingle",
            Self::VldmDouble => "VldmDouble",
            Self::VstmSingle => "VstmSingle",
            Self::VstmDouble => "VstmDouble",
            Self::VpopSingle => "VpopSingle",
            Self::VpopDouble => "VpopDouble",
            Self::Vldr => "Vldr",
            Self::Vstr => "Vstr",
        }
    }

    fn defs(&self, i: Instruction) -> RegisterList {
        let n = i.reg(16);
        if self.is_element_transfer() {
            // Rm == pc means no writeback
            return RegisterList::from(n.when(i.reg(0) != Register::PC));
        }
        match self {
            Self::VldmSingle | Self::VldmDouble | Self::VstmSingle | Self::VstmDouble => {
                RegisterList::from(n.when(i.bit(21)))
            }
            Self::VpopSingle | Self::VpopDouble => RegisterList::from(Register::SP),
            _ => RegisterList::EMPTY,
        }
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        let n = i.reg(16);
        if self.is_element_transfer() {
            let m = i.reg(0);
            return RegisterList::from([m.when(m != Register::PC), n]);
        }
        match self {
            Self::VpopSingle | Self::VpopDouble => RegisterList::from(Register::SP),
            _ => RegisterList::from(n),
        }
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        use SafetyLevel::{DecoderError, Undefined, Unpredictable};

        let base_is_pc = i.reg(16) == Register::PC;
        let kind = i.bits(11, 8);
        // size for the multiple and all-lanes forms
        let size = i.bits(7, 6);
        let lane_size = i.bits(11, 10);
        let align = i.bits(5, 4);
        let d = first_double(i);

        match self {
            Self::Vld1Multiple => first_match([
                (base_is_pc || d + vld1_regs(kind) > 32, Unpredictable),
                (kind == 0b0110 && i.bit(5), Undefined),
                (kind == 0b0111 && i.bit(5), Undefined),
                (kind == 0b1010 && align == 0b11, Undefined),
                (vld1_regs(kind) == 0, DecoderError),
            ]),
            Self::Vld1AllLanes => first_match([
                (base_is_pc || d + all_lanes_stride(i) > 32, Unpredictable),
                (size == 0b11 || (size == 0b00 && i.bit(4)), Undefined),
            ]),
            Self::Vld1OneLane => first_match([
                (base_is_pc, Unpredictable),
                (lane_size == 0b00 && i.bit(4), Undefined),
                (lane_size == 0b01 && i.bit(5), Undefined),
                (lane_size == 0b10 && align != 0b00 && align != 0b11, Undefined),
                (lane_size == 0b10 && i.bit(6), Undefined),
                (lane_size == 0b11, Undefined),
            ]),
            Self::Vld2Multiple => {
                let pair_type = kind == 0b1000 || kind == 0b1001;
                let inc = if kind == 0b1000 { 1 } else { 2 };
                let regs = if pair_type { 1 } else { 2 };
                first_match([
                    (base_is_pc || d + inc + regs > 32, Unpredictable),
                    (pair_type && align == 0b11, Undefined),
                    (size == 0b11, Undefined),
                    (!pair_type && kind != 0b0011, DecoderError),
                ])
            }
            Self::Vld2AllLanes => first_match([
                (base_is_pc || d + all_lanes_stride(i) > 31, Unpredictable),
                (size == 0b11, Undefined),
            ]),
            Self::Vld2OneLane => first_match([
                (base_is_pc || d + one_lane_stride(i) > 31, Unpredictable),
                (lane_size == 0b10 && i.bit(5), Undefined),
                (lane_size == 0b11, Undefined),
            ]),
            Self::Vld3Multiple => {
                let inc = if kind == 0b0100 { 1 } else { 2 };
                first_match([
                    (base_is_pc || d + 2 * inc > 31, Unpredictable),
                    (size == 0b11 || i.bit(5), Undefined),
                    (kind != 0b0100 && kind != 0b0101, DecoderError),
                ])
            }
            Self::Vld3AllLanes => first_match([
                (base_is_pc || d + 2 * all_lanes_stride(i) > 31, Unpredictable),
                (size == 0b11 || i.bit(4), Undefined),
            ]),
            Self::Vld3OneLane => first_match([
                (base_is_pc || d + 2 * one_lane_stride(i) > 31, Unpredictable),
                (lane_size == 0b00 && i.bit(4), Undefined),
                (lane_size == 0b01 && i.bit(4), Undefined),
                (lane_size == 0b10 && align != 0b00, Undefined),
                (lane_size == 0b11, Undefined),
            ]),
            Self::Vld4Multiple => {
                let inc = if kind == 0b0000 { 1 } else { 2 };
                first_match([
                    (base_is_pc || d + 3 * inc > 31, Unpredictable),
                    (size == 0b11, Undefined),
                    (kind != 0b0000 && kind != 0b0001, DecoderError),
                ])
            }
            Self::Vld4AllLanes => first_match([
                (base_is_pc || d + 3 * all_lanes_stride(i) > 31, Unpredictable),
                (size == 0b11 && !i.bit(4), Undefined),
            ]),
            Self::Vld4OneLane => first_match([
                (base_is_pc || d + 3 * one_lane_stride(i) > 31, Unpredictable),
                (lane_size == 0b10 && align == 0b11, Undefined),
                (lane_size == 0b11, Undefined),
            ]),
            Self::VldmSingle | Self::VldmDouble | Self::VstmSingle | Self::VstmDouble => {
                self.block_safety(i)
            }
            Self::VpopSingle => {
                let regs = i.bits(7, 0);
                first_match([(regs == 0 || first_single(i) + regs > 32, Unpredictable)])
            }
            Self::VpopDouble => {
                let regs = i.bits(7, 0) / 2;
                first_match([
                    (regs == 0 || regs > 16 || d + regs > 32, Unpredictable),
                    (VFP_SMALL_REGISTER_BANK && d + regs > 16, Unpredictable),
                ])
            }
            Self::Vldr => SafetyLevel::MayBeSafe,
            Self::Vstr => first_match([(base_is_pc, SafetyLevel::ForbiddenOperands)]),
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Self::Vldr => Capabilities::BASE_ADDRESS | Capabilities::LITERAL_LOAD,
            Self::Vstr => Capabilities::BASE_ADDRESS,
            _ => Capabilities::BASE_ADDRESS | Capabilities::WRITEBACK_SMALL_IMMEDIATE,
        }
    }

    fn base_address_register(&self, i: Instruction) -> Option<Register> {
        match self {
            Self::VpopSingle | Self::VpopDouble => Some(Register::SP),
            _ => Some(i.reg(16)),
        }
    }

    fn base_address_register_writeback_small_immediate(&self, i: Instruction) -> bool {
        if self.is_element_transfer() {
            // Rm == sp advances the base by the transfer size
            let m = i.reg(0);
            return m == Register::PC || m == Register::SP;
        }
        if self.is_block_transfer() {
            return i.bit(21);
        }
        matches!(self, Self::VpopSingle | Self::VpopDouble)
    }

    fn is_literal_load(&self, i: Instruction) -> bool {
        matches!(self, Self::Vldr) && i.reg(16) == Register::PC
    }
}

impl VectorLoadStore {
    /// Shared checks for VLDM and VSTM.
    fn block_safety(self, i: Instruction) -> SafetyLevel {
        use SafetyLevel::{DecoderError, Undefined, Unpredictable};

        let (p, u, w) = (i.bit(24), i.bit(23), i.bit(21));
        let n = i.reg(16);
        let double = matches!(self, Self::VldmDouble | Self::VstmDouble);
        let (d, regs) = if double {
            (first_double(i), i.bits(7, 0) / 2)
        } else {
            (first_single(i), i.bits(7, 0))
        };
        let bad_range = if double {
            regs == 0 || regs > 16 || d + regs > 32
        } else {
            regs == 0 || d + regs > 32
        };
        // P:U:W forms that belong to VPOP/VPUSH and VLDR/VSTR
        let stack_form = if matches!(self, Self::VldmSingle | Self::VldmDouble) {
            !p && u && w && n == Register::SP
        } else {
            p && !u && w && n == Register::SP
        };
        first_match([
            (bad_range, Unpredictable),
            (n == Register::PC && w, Unpredictable),
            (double && VFP_SMALL_REGISTER_BANK && d + regs > 16, Unpredictable),
            (p == u && w, Undefined),
            (!p && !u && !w, DecoderError),
            (stack_form, DecoderError),
            (p && !w, DecoderError),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_writeback_forms() {
        let k = VectorLoadStore::Vld1Multiple;
        // VLD1.8 {d0}, [r0]: Rm == pc, no writeback
        let i = Instruction::new(0xF420_070F);
        assert!(k.defs(i).is_empty());
        assert_eq!(k.uses(i), RegisterList::from(Register::R0));
        assert!(k.base_address_register_writeback_small_immediate(i));
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        // VLD1.8 {d0}, [r0]!
        let i = Instruction::new(0xF420_070D);
        assert_eq!(k.defs(i), RegisterList::from(Register::R0));
        assert!(k.base_address_register_writeback_small_immediate(i));
        // VLD1.8 {d0}, [r0], r1
        let i = Instruction::new(0xF420_0701);
        assert_eq!(k.uses(i), RegisterList::from([Register::R0, Register::R1]));
        assert!(!k.base_address_register_writeback_small_immediate(i));
        assert_eq!(k.base_address_register(i), Some(Register::R0));
    }

    #[test]
    fn test_element_register_range() {
        let k = VectorLoadStore::Vld1Multiple;
        // VLD1 with four registers starting at d29
        assert_eq!(k.safety(Instruction::new(0xF460_D20F)), SafetyLevel::Unpredictable);
        // Four registers starting at d28 end at d31
        assert_eq!(k.safety(Instruction::new(0xF460_C20F)), SafetyLevel::MayBeSafe);
        // Base pc
        assert_eq!(k.safety(Instruction::new(0xF42F_070F)), SafetyLevel::Unpredictable);
        // type 1011 is not VLD1
        assert_eq!(k.safety(Instruction::new(0xF420_0B0F)), SafetyLevel::DecoderError);
    }

    #[test]
    fn test_one_lane_alignment() {
        let k = VectorLoadStore::Vld1OneLane;
        // VLD1.8 {d0[0]}, [r0]
        assert_eq!(k.safety(Instruction::new(0xF4A0_000F)), SafetyLevel::MayBeSafe);
        // size 00 with index_align(0) set
        assert_eq!(k.safety(Instruction::new(0xF4A0_001F)), SafetyLevel::Undefined);
        // VLD1.32 {d0[0]}, [r0:32]: index_align = 0011
        assert_eq!(k.safety(Instruction::new(0xF4A0_083F)), SafetyLevel::MayBeSafe);
        // index_align = 0001
        assert_eq!(k.safety(Instruction::new(0xF4A0_081F)), SafetyLevel::Undefined);
    }

    #[test]
    fn test_block_transfers() {
        let k = VectorLoadStore::VldmDouble;
        // VLDMIA r0!, {d0-d1}
        let i = Instruction::new(0xECB0_0B04);
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(k.defs(i), RegisterList::from(Register::R0));
        assert!(k.base_address_register_writeback_small_immediate(i));
        // VLDMIA r0, {d0-d1}
        let i = Instruction::new(0xEC90_0B04);
        assert!(k.defs(i).is_empty());
        assert!(!k.base_address_register_writeback_small_immediate(i));
        // Empty list
        assert_eq!(k.safety(Instruction::new(0xECB0_0B00)), SafetyLevel::Unpredictable);
        // VLDMIA sp!, ... is VPOP
        assert_eq!(k.safety(Instruction::new(0xECBD_0B04)), SafetyLevel::DecoderError);
        // VSTMDB sp!, ... is VPUSH
        assert_eq!(
            VectorLoadStore::VstmDouble.safety(Instruction::new(0xED2D_0B04)),
            SafetyLevel::DecoderError
        );
        // VSTMDB r0!, {d0-d1}
        assert_eq!(
            VectorLoadStore::VstmDouble.safety(Instruction::new(0xED20_0B04)),
            SafetyLevel::MayBeSafe
        );
        // VLDMDB r0, ... without writeback is undefined space (VLDR)
        assert_eq!(k.safety(Instruction::new(0xED10_0B04)), SafetyLevel::DecoderError);
    }

    #[test]
    fn test_vpop_uses_stack_pointer() {
        // VPOP {s0-s3}
        let i = Instruction::new(0xECBD_0A04);
        let k = VectorLoadStore::VpopSingle;
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(k.base_address_register(i), Some(Register::SP));
        assert_eq!(k.defs(i), RegisterList::from(Register::SP));
        assert!(k.base_address_register_writeback_small_immediate(i));
        // VPOP {s31-s34}
        assert_eq!(k.safety(Instruction::new(0xECFD_FA04)), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_vldr_and_vstr() {
        // VLDR d0, [pc, #8]
        let i = Instruction::new(0xED9F_0B02);
        assert!(VectorLoadStore::Vldr.is_literal_load(i));
        assert_eq!(VectorLoadStore::Vldr.uses(i), RegisterList::from(Register::PC));
        // VLDR d0, [r0]
        assert!(!VectorLoadStore::Vldr.is_literal_load(Instruction::new(0xED90_0B00)));
        // VSTR d0, [pc]
        assert_eq!(
            VectorLoadStore::Vstr.safety(Instruction::new(0xED8F_0B00)),
            SafetyLevel::ForbiddenOperands
        );
        assert_eq!(
            VectorLoadStore::Vstr.base_address_register(Instruction::new(0xED80_0B00)),
            Some(Register::R0)
        );
    }
}
