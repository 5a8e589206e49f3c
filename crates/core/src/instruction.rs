// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::register::Register;
use std::fmt;

/// Architecture version the classifier models (ARMv7-A).
pub const ARCH_VERSION: u32 = 7;

/// Whether the modelled VFP unit only has d0-d15 (VFPv3-D16).
pub const VFP_SMALL_REGISTER_BANK: bool = false;

/// A raw 32-bit A32 instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Instruction(u32);

impl Instruction {
    pub const fn new(word: u32) -> Self {
        Self(word)
    }

    pub const fn word(self) -> u32 {
        self.0
    }

    /// Value of the closed bit range `[hi:lo]`.
    ///
    /// Callers pass ranges taken from the fixed encoding diagrams, so
    /// `hi >= lo` and `hi <= 31` always hold.
    pub const fn bits(self, hi: u32, lo: u32) -> u32 {
        let width = hi - lo + 1;
        if width >= 32 {
            self.0
        } else {
            (self.0 >> lo) & ((1 << width) - 1)
        }
    }

    pub const fn bit(self, n: u32) -> bool {
        (self.0 >> n) & 1 == 1
    }

    /// Four-bit register field starting at bit `lo`.
    pub const fn reg(self, lo: u32) -> Register {
        Register::new(self.bits(lo + 3, lo))
    }

    /// Condition field, bits 31:28.
    pub const fn cond(self) -> u32 {
        self.bits(31, 28)
    }

    /// True for words in the unconditional (cond = 1111) encoding space.
    pub const fn is_unconditional(self) -> bool {
        self.cond() == 0b1111
    }

    pub const fn clear_bits(self, mask: u32) -> Self {
        Self(self.0 & !mask)
    }
}

impl From<u32> for Instruction {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Instruction> for u32 {
    fn from(inst: Instruction) -> Self {
        inst.0
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// `ARMExpandImm`: an 8-bit value rotated right by twice the 4-bit rotate field.
pub const fn arm_expand_imm(imm12: u32) -> u32 {
    let imm8 = imm12 & 0xFF;
    let rotation = ((imm12 >> 8) & 0xF) * 2;
    imm8.rotate_right(rotation)
}

/// Sign-extends the low `width` bits of `value`.
pub const fn sign_extend(value: u32, width: u32) -> i32 {
    let shift = 32 - width;
    ((value << shift) as i32) >> shift
}
