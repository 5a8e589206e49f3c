// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Advanced SIMD data-processing classes.
//!
//! None of these touch core registers or memory, so `defs` and `uses` are
//! always empty and safety only rejects encodings the architecture leaves
//! undefined or that belong to a different instruction.

use super::ClassDecoder;
use crate::instruction::Instruction;
use crate::register::RegisterList;
use crate::safety::{first_match, SafetyLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Simd {
    CvtHalfSingle,             // VCVT.F16.F32 Dd, Qm
    Vaba,                      // VABA, VABD, VCEQ, VCGE, VHADD, VMAX, VMLA (integer) ...
    Vabal,                     // VABAL, VABDL, VMLAL, VMULL (integer, long)
    VabdFloatingPoint,         // VABD.F32, VACGE, VADD.F32, VFMA, VMAX.F32, VRECPS ...
    VabsInteger,               // VABS.S8, VCEQ #0, VCLS, VCLZ, VNEG, VPADAL, VQABS ...
    VabsFloatingPoint,         // VABS.F32, VCEQ.F32 #0, VCVT, VRECPE, VRSQRTE ...
    Vaddhn,                    // VADDHN, VRADDHN, VSUBHN, VRSUBHN
    VaddlVaddw,                // VADDL, VADDW, VSUBL, VSUBW
    VaddInteger,               // VADD.I8, VAND, VBSL, VEOR, VORR, VQADD, VSHL ...
    VbicImmediate,             // VBIC, VORR (immediate)
    Vcnt,                      // VCNT, VMVN (register)
    VcvtFixedPoint,            // VCVT.F32.S32 Qd, Qm, #fbits
    VmlalByScalar,             // VMLAL, VMLSL, VMULL, VQDMLAL, VQDMULL (by scalar)
    VmlaByScalarFloatingPoint, // VMLA.F32, VMLS.F32, VMUL.F32 (by scalar)
    VmlaByScalarInteger,       // VMLA.I16, VMUL.I16, VQDMULH, VQRDMULH (by scalar)
    Vmovn,                     // VMOVN
    VmovImmediate,             // VMOV (immediate)
    VmullPolynomial,           // VMULL.P8
    VmulPolynomial,            // VMUL.P8
    VmvnImmediate,             // VMVN (immediate)
    VpaddFloatingPoint,        // VPADD.F32, VPMAX.F32, VPMIN.F32
    VpaddInteger,              // VPADD.I8, VPMAX.S8, VPMIN.S8
    Vqdmlal,                   // VQDMLAL, VQDMLSL, VQDMULL
    Vqdmulh,                   // VQDMULH, VQRDMULH
    Vqmovn,                    // VQMOVN, VQMOVUN
    Vqrshrn,                   // VQSHRN, VQRSHRN, VQSHRUN, VQRSHRUN
    VqshlImmediate,            // VQSHL, VQSHLU (immediate)
    Vrev,                      // VREV16, VREV32, VREV64
    Vrshrn,                    // VSHRN, VRSHRN
    Vrshr,                     // VSHR, VSRA, VRSHR, VRSRA, VSHL, VSLI, VSRI (immediate)
    VshllA1,                   // VSHLL, VMOVL
    VshllA2,                   // VSHLL (maximum shift)
    Vswp,                      // VSWP
    Vtrn,                      // VTRN
    Vuzp,                      // VUZP, VZIP
}

impl Simd {
    pub const ALL: [Simd; 35] = [
        Simd::CvtHalfSingle,
        Simd::Vaba,
        Simd::Vabal,
        Simd::VabdFloatingPoint,
        Simd::VabsInteger,
        Simd::VabsFloatingPoint,
        Simd::Vaddhn,
        Simd::VaddlVaddw,
        Simd::VaddInteger,
        Simd::VbicImmediate,
        Simd::Vcnt,
        Simd::VcvtFixedPoint,
        Simd::VmlalByScalar,
        Simd::VmlaByScalarFloatingPoint,
        Simd::VmlaByScalarInteger,
        Simd::Vmovn,
        Simd::VmovImmediate,
        Simd::VmullPolynomial,
        Simd::VmulPolynomial,
        Simd::VmvnImmediate,
        Simd::VpaddFloatingPoint,
        Simd::VpaddInteger,
        Simd::Vqdmlal,
        Simd::Vqdmulh,
        Simd::Vqmovn,
        Simd::Vqrshrn,
        Simd::VqshlImmediate,
        Simd::Vrev,
        Simd::Vrshrn,
        Simd::Vrshr,
        Simd::VshllA1,
        Simd::VshllA2,
        Simd::Vswp,
        Simd::Vtrn,
        Simd::Vuzp,
    ];
}

/// Low bits of the Vd/Vn/Vm fields. A set bit names an odd D register,
/// which cannot be the first half of a Q register.
#[derive(Debug, Clone, Copy)]
struct Operands {
    q: bool,
    vd_odd: bool,
    vn_odd: bool,
    vm_odd: bool,
}

impl Operands {
    fn of(i: Instruction) -> Self {
        Operands {
            q: i.bit(6),
            vd_odd: i.bit(12),
            vn_odd: i.bit(16),
            vm_odd: i.bit(0),
        }
    }

    /// Three registers of the same length: Qd and Qn must be even.
    fn misaligned_dn(&self) -> bool {
        self.q && (self.vd_odd || self.vn_odd)
    }

    /// Two registers of the same length: Qd and Qm must be even.
    fn misaligned_dm(&self) -> bool {
        self.q && (self.vd_odd || self.vm_odd)
    }
}

/// imm6 == 000xxx: the encoding is a one-register-immediate instruction.
fn shift_is_immediate_space(i: Instruction) -> bool {
    i.bits(21, 19) == 0
}

/// Same as [`shift_is_immediate_space`] for the L:imm6 forms.
fn long_shift_is_immediate_space(i: Instruction) -> bool {
    !i.bit(7) && shift_is_immediate_space(i)
}

impl ClassDecoder for Simd {
    fn name(&self) -> &'static str {
        match self {
            Self::CvtHalfSingle => "CvtHalfSingle",
            Self::Vaba => "Vaba",
            Self::Vabal => "Vabal",
            Self::VabdFloatingPoint => "VabdFloatingPoint",
            Self::VabsInteger => "VabsInteger",
            Self::VabsFloatingPoint => "VabsFloatingPoint",
            Self::Vaddhn => "Vaddhn",
            Self::VaddlVaddw => "VaddlVaddw",
            Self::VaddInteger => "VaddInteger",
            Self::VbicImmediate => "VbicImmediate",
            Self::Vcnt => "Vcnt",
            Self::VcvtFixedPoint => "VcvtFixedPoint",
            Self::VmlalByScalar => "VmlalByScalar",
            Self::VmlaByScalarFloatingPoint => "VmlaByScalarFloatingPoint",
            Self::VmlaByScalarInteger => "VmlaByScalarInteger",
            Self::Vmovn => "Vmovn",
            Self::VmovImmediate => "VmovImmediate",
            Self::VmullPolynomial => "VmullPolynomial",
            Self::VmulPolynomial => "VmulPolynomial",
            Self::VmvnImmediate => "VmvnImmediate",
            Self::VpaddFloatingPoint => "VpaddFloatingPoint",
            Self::VpaddInteger => "VpaddInteger",
            Self::Vqdmlal => "Vqdmlal",
            Self::Vqdmulh => "Vqdmulh",
            Self::Vqmovn => "Vqmovn",
            Self::Vqrshrn => "Vqrshrn",
            Self::VqshlImmediate => "VqshlImmediate",
            Self::Vrev => "Vrev",
            Self::Vrshrn => "Vrshrn",
            Self::Vrshr => "Vrshr",
            Self::VshllA1 => "VshllA1",
            Self::VshllA2 => "VshllA2",
            Self::Vswp => "Vswp",
            Self::Vtrn => "Vtrn",
            Self::Vuzp => "Vuzp",
        }
    }

    fn defs(&self, _i: Instruction) -> RegisterList {
        RegisterList::EMPTY
    }

    fn uses(&self, _i: Instruction) -> RegisterList {
        RegisterList::EMPTY
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        use SafetyLevel::{DecoderError, Undefined, Unknown};

        let ops = Operands::of(i);
        // size for three-register forms, and for two-register forms
        let size = i.bits(21, 20);
        let size2 = i.bits(19, 18);
        let cmode = i.bits(11, 8);
        // D:Vd and M:Vm
        let d = (i.bits(22, 22) << 4) | i.bits(15, 12);
        let m = (i.bits(5, 5) << 4) | i.bits(3, 0);

        match self {
            Self::CvtHalfSingle => {
                let half_to_single = i.bit(8);
                first_match([
                    (size2 != 0b01, Undefined),
                    (half_to_single && ops.vd_odd, Undefined),
                    (!half_to_single && ops.vm_odd, Undefined),
                ])
            }
            Self::Vaba => first_match([
                (size == 0b11, Undefined),
                (ops.misaligned_dn(), Undefined),
            ]),
            Self::Vabal => first_match([(ops.vd_odd, Undefined), (size == 0b11, DecoderError)]),
            Self::VabdFloatingPoint => first_match([
                // sz == 1 would be F16 or F64
                (i.bit(20), Undefined),
                (ops.misaligned_dn(), Undefined),
            ]),
            Self::VabsInteger => first_match([
                (size2 == 0b11, Undefined),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::VabsFloatingPoint => first_match([
                (size2 != 0b10, Undefined),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::Vaddhn => first_match([
                (ops.vn_odd || ops.vm_odd, Undefined),
                (size == 0b11, DecoderError),
            ]),
            Self::VaddlVaddw => first_match([
                // op(8) selects the wide form, where Vn is a Q register
                (ops.vd_odd || (i.bit(8) && ops.vn_odd), Undefined),
                (size == 0b11, DecoderError),
            ]),
            Self::VaddInteger => first_match([(ops.misaligned_dn(), Undefined)]),
            Self::VbicImmediate => first_match([
                (cmode & 1 == 0 || cmode >> 2 == 0b11, DecoderError),
                (ops.q && ops.vd_odd, Undefined),
            ]),
            Self::Vcnt => first_match([
                (size2 != 0b00, Undefined),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::VcvtFixedPoint => first_match([
                (shift_is_immediate_space(i), DecoderError),
                // fraction bits above 32
                (!i.bit(21), Undefined),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::VmlalByScalar => first_match([
                (size == 0b00 || ops.vd_odd, Undefined),
                (size == 0b11, DecoderError),
            ]),
            Self::VmlaByScalarFloatingPoint => first_match([
                (size == 0b00 || size == 0b01, Undefined),
                (size == 0b11, DecoderError),
                // Q lives in bit 24 for the by-scalar forms
                (i.bit(24) && (ops.vd_odd || ops.vn_odd), Undefined),
            ]),
            Self::VmlaByScalarInteger => first_match([
                (size == 0b00, Undefined),
                (size == 0b11, DecoderError),
                (i.bit(24) && (ops.vd_odd || ops.vn_odd), Undefined),
            ]),
            Self::Vmovn => first_match([(size2 == 0b11, Undefined), (ops.vm_odd, Undefined)]),
            Self::VmovImmediate => {
                let op = i.bit(5);
                first_match([
                    (!op && cmode & 1 == 1 && cmode >> 2 != 0b11, DecoderError),
                    (op && cmode != 0b1110, DecoderError),
                    (ops.q && ops.vd_odd, Undefined),
                ])
            }
            Self::VmullPolynomial => first_match([
                (ops.vd_odd, Undefined),
                (size == 0b11, DecoderError),
                (i.bit(24) || size != 0b00, Undefined),
            ]),
            Self::VmulPolynomial => first_match([
                (size != 0b00, Undefined),
                (ops.misaligned_dn(), Undefined),
            ]),
            Self::VmvnImmediate => first_match([
                (
                    (cmode & 1 == 1 && cmode >> 2 != 0b11) || cmode >> 1 == 0b111,
                    DecoderError,
                ),
                (ops.q && ops.vd_odd, Undefined),
            ]),
            Self::VpaddFloatingPoint => first_match([(i.bit(20) || ops.q, Undefined)]),
            Self::VpaddInteger => first_match([(size == 0b11, Undefined), (ops.q, Undefined)]),
            Self::Vqdmlal => first_match([
                (size == 0b00 || ops.vd_odd, Undefined),
                (size == 0b11, DecoderError),
            ]),
            Self::Vqdmulh => first_match([
                (size == 0b11 || size == 0b00, Undefined),
                (ops.misaligned_dn(), Undefined),
            ]),
            Self::Vqmovn => first_match([
                (size2 == 0b11 || ops.vm_odd, Undefined),
                // op == 00 is VMOVN
                (i.bits(7, 6) == 0b00, DecoderError),
            ]),
            Self::Vqrshrn => first_match([
                (shift_is_immediate_space(i), DecoderError),
                // U == 0 && op == 0 is VSHRN/VRSHRN
                (!i.bit(24) && !i.bit(8), DecoderError),
                (ops.vm_odd, Undefined),
            ]),
            Self::VqshlImmediate => first_match([
                (!i.bit(24) && !i.bit(8), Undefined),
                (ops.misaligned_dm(), Undefined),
                (long_shift_is_immediate_space(i), DecoderError),
            ]),
            Self::Vrev => first_match([
                (i.bits(8, 7) + size2 >= 3, Undefined),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::Vrshrn => first_match([
                (shift_is_immediate_space(i), DecoderError),
                (ops.vm_odd, Undefined),
            ]),
            Self::Vrshr => first_match([
                (ops.misaligned_dm(), Undefined),
                (long_shift_is_immediate_space(i), DecoderError),
            ]),
            Self::VshllA1 => first_match([
                (ops.vd_odd, Undefined),
                (shift_is_immediate_space(i), DecoderError),
            ]),
            Self::VshllA2 => first_match([(size2 == 0b11 || ops.vd_odd, Undefined)]),
            Self::Vswp => first_match([
                (size2 != 0b00, Undefined),
                (d == m, Unknown),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::Vtrn => first_match([
                (size2 == 0b11, Undefined),
                (d == m, Unknown),
                (ops.misaligned_dm(), Undefined),
            ]),
            Self::Vuzp => first_match([
                // 32-bit elements only exist in the quadword form
                (size2 == 0b11 || (!ops.q && size2 == 0b10), Undefined),
                (d == m, Unknown),
                (ops.misaligned_dm(), Undefined),
            ]),
        }
    }
}
