// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Instruction-class decoders.
//!
//! Every kind answers the same three questions about a word (which
//! registers it writes, which it reads, and how safe it is) plus a set of
//! optional queries that only some classes can answer. Kinds are grouped by
//! encoding area; [`DecoderKind`] is the closed union the dispatch table
//! stores.

pub mod branch;
pub mod data_processing;
pub mod load_store;
pub mod multiply;
pub mod simd;
pub mod system;
pub mod vector_load_store;
pub mod vfp;

use crate::instruction::Instruction;
use crate::register::{Register, RegisterList};
use crate::safety::SafetyLevel;
use bitflags::bitflags;
use std::fmt;

pub use branch::Branch;
pub use data_processing::DataProcessing;
pub use load_store::LoadStore;
pub use multiply::Multiply;
pub use simd::Simd;
pub use system::System;
pub use vector_load_store::VectorLoadStore;
pub use vfp::Vfp;

bitflags! {
    /// Which optional [`ClassDecoder`] queries carry meaning for a class.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        const BASE_ADDRESS              = 1 << 0;
        const WRITEBACK_SMALL_IMMEDIATE = 1 << 1;
        const LITERAL_LOAD              = 1 << 2;
        const LITERAL_POOL_HEAD         = 1 << 3;
        const THREAD_ADDRESS_POINTER    = 1 << 4;
        const BRANCH_TARGET_REGISTER    = 1 << 5;
        const RELATIVE_BRANCH           = 1 << 6;
        const CLEARS_BITS               = 1 << 7;
        const SETS_Z_IF_BITS_CLEAR      = 1 << 8;
        const CODE_REPLACEMENT          = 1 << 9;
    }
}

impl Capabilities {
    /// Flag names joined with `|`, or `-` when empty.
    pub fn names(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        self.iter_names()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Decoding logic shared by every instruction word of one encoding class.
///
/// All methods are total over the full 32-bit domain: a word that does not
/// belong to the class still yields a defined answer.
pub trait ClassDecoder: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Registers written, including the flags pseudo-register.
    fn defs(&self, i: Instruction) -> RegisterList;

    /// Registers read, including any addressing base.
    fn uses(&self, i: Instruction) -> RegisterList;

    fn safety(&self, i: Instruction) -> SafetyLevel;

    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// Base register of the memory address, for classes that access memory.
    fn base_address_register(&self, _i: Instruction) -> Option<Register> {
        None
    }

    /// True when the base register is written back by a small, statically
    /// bounded displacement.
    fn base_address_register_writeback_small_immediate(&self, _i: Instruction) -> bool {
        false
    }

    fn is_literal_load(&self, _i: Instruction) -> bool {
        false
    }

    fn is_literal_pool_head(&self, _i: Instruction) -> bool {
        false
    }

    fn is_load_thread_address_pointer(&self, _i: Instruction) -> bool {
        false
    }

    fn branch_target_register(&self, _i: Instruction) -> Option<Register> {
        None
    }

    fn is_relative_branch(&self, _i: Instruction) -> bool {
        false
    }

    /// Byte offset of a relative branch from the branch's PC value.
    fn branch_target_offset(&self, _i: Instruction) -> Option<i32> {
        None
    }

    /// True when the instruction clears every bit of `mask` in its result.
    fn clears_bits(&self, _i: Instruction, _mask: u32) -> bool {
        false
    }

    /// True when the instruction sets Z iff `reg & mask` is zero.
    fn sets_z_if_bits_clear(&self, _i: Instruction, _reg: Register, _mask: u32) -> bool {
        false
    }

    /// The word with every bit that dynamic code replacement may rewrite
    /// cleared.
    fn dynamic_code_replacement_sentinel(&self, i: Instruction) -> Instruction {
        i
    }
}

/// The closed set of decoder kinds, one variant per encoding group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoderKind {
    DataProcessing(DataProcessing),
    Multiply(Multiply),
    Branch(Branch),
    System(System),
    LoadStore(LoadStore),
    Simd(Simd),
    Vfp(Vfp),
    VectorLoadStore(VectorLoadStore),
}

impl DecoderKind {
    /// Every kind, group by group.
    pub fn all() -> impl Iterator<Item = DecoderKind> {
        DataProcessing::ALL
            .into_iter()
            .map(DecoderKind::from)
            .chain(Multiply::ALL.into_iter().map(DecoderKind::from))
            .chain(Branch::ALL.into_iter().map(DecoderKind::from))
            .chain(System::ALL.into_iter().map(DecoderKind::from))
            .chain(LoadStore::ALL.into_iter().map(DecoderKind::from))
            .chain(Simd::ALL.into_iter().map(DecoderKind::from))
            .chain(Vfp::ALL.into_iter().map(DecoderKind::from))
            .chain(VectorLoadStore::ALL.into_iter().map(DecoderKind::from))
    }

    /// Encoding group the kind belongs to.
    pub fn group(&self) -> &'static str {
        match self {
            DecoderKind::DataProcessing(_) => "data-processing",
            DecoderKind::Multiply(_) => "multiply",
            DecoderKind::Branch(_) => "branch",
            DecoderKind::System(_) => "system",
            DecoderKind::LoadStore(_) => "load-store",
            DecoderKind::Simd(_) => "simd",
            DecoderKind::Vfp(_) => "vfp",
            DecoderKind::VectorLoadStore(_) => "vector-load-store",
        }
    }

    fn inner(&self) -> &dyn ClassDecoder {
        match self {
            DecoderKind::DataProcessing(k) => k,
            DecoderKind::Multiply(k) => k,
            DecoderKind::Branch(k) => k,
            DecoderKind::System(k) => k,
            DecoderKind::LoadStore(k) => k,
            DecoderKind::Simd(k) => k,
            DecoderKind::Vfp(k) => k,
            DecoderKind::VectorLoadStore(k) => k,
        }
    }
}

impl From<DataProcessing> for DecoderKind {
    fn from(k: DataProcessing) -> Self {
        DecoderKind::DataProcessing(k)
    }
}

impl From<Multiply> for DecoderKind {
    fn from(k: Multiply) -> Self {
        DecoderKind::Multiply(k)
    }
}

impl From<Branch> for DecoderKind {
    fn from(k: Branch) -> Self {
        DecoderKind::Branch(k)
    }
}

impl From<System> for DecoderKind {
    fn from(k: System) -> Self {
        DecoderKind::System(k)
    }
}

impl From<LoadStore> for DecoderKind {
    fn from(k: LoadStore) -> Self {
        DecoderKind::LoadStore(k)
    }
}

impl From<Simd> for DecoderKind {
    fn from(k: Simd) -> Self {
        DecoderKind::Simd(k)
    }
}

impl From<Vfp> for DecoderKind {
    fn from(k: Vfp) -> Self {
        DecoderKind::Vfp(k)
    }
}

impl From<VectorLoadStore> for DecoderKind {
    fn from(k: VectorLoadStore) -> Self {
        DecoderKind::VectorLoadStore(k)
    }
}

impl fmt::Display for DecoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ClassDecoder for DecoderKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn defs(&self, i: Instruction) -> RegisterList {
        self.inner().defs(i)
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        self.inner().uses(i)
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        self.inner().safety(i)
    }

    fn capabilities(&self) -> Capabilities {
        self.inner().capabilities()
    }

    fn base_address_register(&self, i: Instruction) -> Option<Register> {
        self.inner().base_address_register(i)
    }

    fn base_address_register_writeback_small_immediate(&self, i: Instruction) -> bool {
        self.inner().base_address_register_writeback_small_immediate(i)
    }

    fn is_literal_load(&self, i: Instruction) -> bool {
        self.inner().is_literal_load(i)
    }

    fn is_literal_pool_head(&self, i: Instruction) -> bool {
        self.inner().is_literal_pool_head(i)
    }

    fn is_load_thread_address_pointer(&self, i: Instruction) -> bool {
        self.inner().is_load_thread_address_pointer(i)
    }

    fn branch_target_register(&self, i: Instruction) -> Option<Register> {
        self.inner().branch_target_register(i)
    }

    fn is_relative_branch(&self, i: Instruction) -> bool {
        self.inner().is_relative_branch(i)
    }

    fn branch_target_offset(&self, i: Instruction) -> Option<i32> {
        self.inner().branch_target_offset(i)
    }

    fn clears_bits(&self, i: Instruction, mask: u32) -> bool {
        self.inner().clears_bits(i, mask)
    }

    fn sets_z_if_bits_clear(&self, i: Instruction, reg: Register, mask: u32) -> bool {
        self.inner().sets_z_if_bits_clear(i, reg, mask)
    }

    fn dynamic_code_replacement_sentinel(&self, i: Instruction) -> Instruction {
        self.inner().dynamic_code_replacement_sentinel(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_names_are_unique() {
        let mut seen = HashSet::new();
        for kind in DecoderKind::all() {
            assert!(seen.insert(kind.name()), "duplicate kind name {}", kind.name());
        }
    }

    #[test]
    fn test_capability_names() {
        assert_eq!(Capabilities::empty().names(), "-");
        let caps = Capabilities::BASE_ADDRESS | Capabilities::LITERAL_LOAD;
        assert_eq!(caps.names(), "BASE_ADDRESS|LITERAL_LOAD");
    }

    #[test]
    fn test_default_queries() {
        // 1110 0001 1010 0000 0000 0000 0000 0001 (MOV r0, r1)
        let i = Instruction::new(0xE1A0_0001);
        let kind = DecoderKind::from(DataProcessing::AsrImmediate);
        assert_eq!(kind.base_address_register(i), None);
        assert_eq!(kind.branch_target_offset(i), None);
        assert!(!kind.is_literal_pool_head(i));
        assert_eq!(kind.dynamic_code_replacement_sentinel(i), i);
    }
}
