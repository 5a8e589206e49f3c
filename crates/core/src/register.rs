// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A register index.
///
/// 0..=15 are the general purpose registers, 16 is the NZCV flags
/// pseudo-register and 32 is the "no register" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(u8);

impl Register {
    pub const R0: Register = Register(0);
    pub const R1: Register = Register(1);
    pub const R2: Register = Register(2);
    pub const R3: Register = Register(3);
    pub const R4: Register = Register(4);
    pub const R5: Register = Register(5);
    pub const R6: Register = Register(6);
    pub const R7: Register = Register(7);
    pub const R8: Register = Register(8);
    pub const R9: Register = Register(9);
    pub const R10: Register = Register(10);
    pub const R11: Register = Register(11);
    pub const R12: Register = Register(12);
    pub const SP: Register = Register(13);
    pub const LR: Register = Register(14);
    pub const PC: Register = Register(15);
    /// Holds the thread pointer in sandboxed code.
    pub const TP: Register = Register(9);
    pub const CONDITIONS: Register = Register(16);
    pub const NONE: Register = Register(32);

    /// Builds a register from a decoded field. Anything past the flags
    /// register collapses to [`Register::NONE`].
    pub const fn new(index: u32) -> Self {
        if index <= 16 {
            Register(index as u8)
        } else {
            Register::NONE
        }
    }

    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    /// The register numbered one above this one, as used by the second half
    /// of doubleword transfers. `pc.next()` is the flags register.
    pub const fn next(self) -> Self {
        Register::new(self.0 as u32 + 1)
    }

    pub const fn is_gpr(self) -> bool {
        self.0 < 16
    }

    /// The flags register when `set` holds, otherwise [`Register::NONE`].
    pub const fn conditions_if(set: bool) -> Self {
        if set {
            Register::CONDITIONS
        } else {
            Register::NONE
        }
    }

    /// `self` when `cond` holds, otherwise [`Register::NONE`].
    pub const fn when(self, cond: bool) -> Self {
        if cond {
            self
        } else {
            Register::NONE
        }
    }

    pub const fn is_odd(self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            13 => write!(f, "sp"),
            14 => write!(f, "lr"),
            15 => write!(f, "pc"),
            16 => write!(f, "nzcv"),
            32 => write!(f, "none"),
            n => write!(f, "r{}", n),
        }
    }
}

/// An immutable set of registers, stored as a bitset over indices 0..=16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegisterList(u32);

impl RegisterList {
    pub const EMPTY: RegisterList = RegisterList(0);

    /// Decodes a 16-bit register list field: bit i set means ri is a member.
    pub const fn from_mask(mask: u16) -> Self {
        RegisterList(mask as u32)
    }

    /// Adds `reg`. Adding [`Register::NONE`] leaves the set unchanged.
    pub const fn add(self, reg: Register) -> Self {
        if reg.0 < 32 {
            RegisterList(self.0 | (1 << reg.0))
        } else {
            self
        }
    }

    pub const fn union(self, other: RegisterList) -> Self {
        RegisterList(self.0 | other.0)
    }

    pub const fn contains(self, reg: Register) -> bool {
        reg.0 < 32 && self.0 & (1 << reg.0) != 0
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of members among r0..r15.
    pub const fn num_gprs(self) -> u32 {
        (self.0 & 0xFFFF).count_ones()
    }

    /// Lowest-numbered member among r0..r15.
    pub const fn smallest_gpr(self) -> Option<Register> {
        let gprs = self.0 & 0xFFFF;
        if gprs == 0 {
            None
        } else {
            Some(Register(gprs.trailing_zeros() as u8))
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Register> {
        (0..32u8)
            .filter(move |i| self.0 & (1u32 << *i) != 0)
            .map(Register)
    }
}

impl From<Register> for RegisterList {
    fn from(reg: Register) -> Self {
        RegisterList::EMPTY.add(reg)
    }
}

impl<const N: usize> From<[Register; N]> for RegisterList {
    fn from(regs: [Register; N]) -> Self {
        regs.into_iter().collect()
    }
}

impl FromIterator<Register> for RegisterList {
    fn from_iter<I: IntoIterator<Item = Register>>(iter: I) -> Self {
        iter.into_iter().fold(RegisterList::EMPTY, RegisterList::add)
    }
}

impl BitOr for RegisterList {
    type Output = RegisterList;

    fn bitor(self, rhs: RegisterList) -> RegisterList {
        self.union(rhs)
    }
}

impl BitOr<Register> for RegisterList {
    type Output = RegisterList;

    fn bitor(self, rhs: Register) -> RegisterList {
        self.add(rhs)
    }
}

impl BitOrAssign for RegisterList {
    fn bitor_assign(&mut self, rhs: RegisterList) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for RegisterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, reg) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", reg)?;
        }
        write!(f, "}}")
    }
}

impl serde::Serialize for Register {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl serde::Serialize for RegisterList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|r| r.to_string()))
    }
}
