// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use super::{Capabilities, ClassDecoder};
use crate::instruction::{Instruction, ARCH_VERSION};
use crate::register::{Register, RegisterList};
use crate::safety::{first_match, SafetyLevel};

/// Integer loads, stores, exclusives and preloads.
///
/// Unless noted otherwise the fields are Rn = 19:16, Rt = 15:12 and
/// Rm = 3:0, with P = 24, U = 23 and W = 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStore {
    LdmDa,               // LDM{DA,DB,IB,IA} Rn{!}, <list>
    StmDa,               // STM{DA,DB,IB,IA} Rn{!}, <list>
    LdrbImmediate,       // LDRB Rt, [Rn, #imm]
    LdrbLiteral,         // LDRB Rt, label
    LdrbRegister,        // LDRB Rt, [Rn], Rm
    LdrdImmediate,       // LDRD Rt, Rt2, [Rn, #imm]
    LdrdLiteral,         // LDRD Rt, Rt2, label
    LdrdRegister,        // LDRD Rt, Rt2, [Rn], Rm
    Ldrexb,              // LDREX{B,H} Rt, [Rn]
    Ldrexd,              // LDREXD Rt, Rt2, [Rn]
    LdrhImmediate,       // LDR{H,SB,SH} Rt, [Rn, #imm]
    LdrhLiteral,         // LDR{H,SB,SH} Rt, label
    LdrhRegister,        // LDR{H,SB,SH} Rt, [Rn], Rm
    LdrImmediate,        // LDR Rt, [Rn, #imm]
    LdrLiteral,          // LDR Rt, label
    LdrRegister,         // LDR Rt, [Rn], Rm
    StrbImmediate,       // STRB Rt, [Rn, #imm]
    StrbRegister,        // STR{B} Rt, [Rn], Rm
    StrdImmediate,       // STRD Rt, Rt2, [Rn, #imm]
    StrdRegister,        // STRD Rt, Rt2, [Rn], Rm
    Strexb,              // STREX{B,H} Rd, Rt, [Rn]
    Strexd,              // STREXD Rd, Rt, Rt2, [Rn]
    StrhImmediate,       // STRH Rt, [Rn, #imm]
    StrhRegister,        // STRH Rt, [Rn], Rm
    StrImmediate,        // STR Rt, [Rn, #imm]
    PldImmediate,        // PLD{W} [Rn, #imm]
    PldRegister,         // PLD{W} [Rn, Rm]
    PldLiteral,          // PLD label
    PliImmediateLiteral, // PLI [Rn, #imm]
    PliRegister,         // PLI [Rn, Rm]
}

impl LoadStore {
    pub const ALL: [LoadStore; 30] = [
        LoadStore::LdmDa,
        LoadStore::StmDa,
        LoadStore::LdrbImmediate,
        LoadStore::LdrbLiteral,
        LoadStore::LdrbRegister,
        LoadStore::LdrdImmediate,
        LoadStore::LdrdLiteral,
        LoadStore::LdrdRegister,
        LoadStore::Ldrexb,
        LoadStore::Ldrexd,
        LoadStore::LdrhImmediate,
        LoadStore::LdrhLiteral,
        LoadStore::LdrhRegister,
        LoadStore::LdrImmediate,
        LoadStore::LdrLiteral,
        LoadStore::LdrRegister,
        LoadStore::StrbImmediate,
        LoadStore::StrbRegister,
        LoadStore::StrdImmediate,
        LoadStore::StrdRegister,
        LoadStore::Strexb,
        LoadStore::Strexd,
        LoadStore::StrhImmediate,
        LoadStore::StrhRegister,
        LoadStore::StrImmediate,
        LoadStore::PldImmediate,
        LoadStore::PldRegister,
        LoadStore::PldLiteral,
        LoadStore::PliImmediateLiteral,
        LoadStore::PliRegister,
    ];

    fn is_literal(self) -> bool {
        matches!(
            self,
            Self::LdrbLiteral
                | Self::LdrdLiteral
                | Self::LdrhLiteral
                | Self::LdrLiteral
                | Self::PldLiteral
        )
    }
}

/// Addressing-mode fields shared by the single-register transfers.
#[derive(Debug, Clone, Copy)]
struct Fields {
    n: Register,
    t: Register,
    m: Register,
    /// P == 1: offset or pre-indexed addressing.
    index: bool,
    /// P == 0 && W == 1: the unprivileged (LDRT-style) encodings.
    unprivileged: bool,
    /// The base is written back (P == 0 || W == 1).
    wback: bool,
}

impl Fields {
    fn of(i: Instruction) -> Self {
        let index = i.bit(24);
        let w = i.bit(21);
        Fields {
            n: i.reg(16),
            t: i.reg(12),
            m: i.reg(0),
            index,
            unprivileged: !index && w,
            wback: !index || w,
        }
    }

    /// Rn == Rm with writeback was only a problem before ARMv6.
    fn old_base_overlap(&self) -> bool {
        ARCH_VERSION < 6 && self.wback && self.m == self.n
    }
}

impl ClassDecoder for LoadStore {
    fn name(&self) -> &'static str {
        match self {
            Self::LdmDa => "LdmDa",
            Self::StmDa => "StmDa",
            Self::LdrbImmediate => "LdrbImmediate",
            Self::LdrbLiteral => "LdrbLiteral",
            Self::LdrbRegister => "LdrbRegister",
            Self::LdrdImmediate => "LdrdImmediate",
            Self::LdrdLiteral => "LdrdLiteral",
            Self::LdrdRegister => "LdrdRegister",
            Self::Ldrexb => "Ldrexb",
            Self::Ldrexd => "Ldrexd",
            Self::LdrhImmediate => "LdrhImmediate",
            Self::LdrhLiteral => "LdrhLiteral",
            Self::LdrhRegister => "LdrhRegister",
            Self::LdrImmediate => "LdrImmediate",
            Self::LdrLiteral => "LdrLiteral",
            Self::LdrRegister => "LdrRegister",
            Self::StrbImmediate => "StrbImmediate",
            Self::StrbRegister => "StrbRegister",
            Self::StrdImmediate => "StrdImmediate",
            Self::StrdRegister => "StrdRegister",
            Self::Strexb => "Strexb",
            Self::Strexd => "Strexd",
            Self::StrhImmediate => "StrhImmediate",
            Self::StrhRegister => "StrhRegister",
            Self::StrImmediate => "StrImmediate",
            Self::PldImmediate => "PldImmediate",
            Self::PldRegister => "PldRegister",
            Self::PldLiteral => "PldLiteral",
            Self::PliImmediateLiteral => "PliImmediateLiteral",
            Self::PliRegister => "PliRegister",
        }
    }

    fn defs(&self, i: Instruction) -> RegisterList {
        let f = Fields::of(i);
        let base_wb = f.n.when(f.wback);
        match self {
            Self::LdmDa => {
                RegisterList::from_mask(i.bits(15, 0) as u16).add(f.n.when(i.bit(21)))
            }
            Self::StmDa => RegisterList::from(f.n.when(i.bit(21))),
            Self::LdrbImmediate
            | Self::LdrbRegister
            | Self::LdrhImmediate
            | Self::LdrhRegister
            | Self::LdrImmediate
            | Self::LdrRegister => RegisterList::from([f.t, base_wb]),
            Self::LdrbLiteral | Self::LdrhLiteral | Self::LdrLiteral | Self::Ldrexb => {
                RegisterList::from(f.t)
            }
            Self::LdrdImmediate | Self::LdrdRegister => {
                RegisterList::from([f.t, f.t.next(), base_wb])
            }
            Self::LdrdLiteral | Self::Ldrexd => RegisterList::from([f.t, f.t.next()]),
            Self::StrbImmediate
            | Self::StrbRegister
            | Self::StrdImmediate
            | Self::StrdRegister
            | Self::StrhImmediate
            | Self::StrhRegister
            | Self::StrImmediate => RegisterList::from(base_wb),
            // Status result register
            Self::Strexb | Self::Strexd => RegisterList::from(i.reg(12)),
            Self::PldImmediate
            | Self::PldRegister
            | Self::PldLiteral
            | Self::PliImmediateLiteral
            | Self::PliRegister => RegisterList::EMPTY,
        }
    }

    fn uses(&self, i: Instruction) -> RegisterList {
        let f = Fields::of(i);
        match self {
            Self::LdmDa => RegisterList::from(f.n),
            Self::StmDa => RegisterList::from_mask(i.bits(15, 0) as u16).add(f.n),
            Self::LdrbImmediate
            | Self::LdrdImmediate
            | Self::Ldrexb
            | Self::Ldrexd
            | Self::LdrhImmediate
            | Self::LdrImmediate
            | Self::PldImmediate
            | Self::PliImmediateLiteral => RegisterList::from(f.n),
            Self::LdrbLiteral
            | Self::LdrdLiteral
            | Self::LdrhLiteral
            | Self::LdrLiteral
            | Self::PldLiteral => RegisterList::from(Register::PC),
            Self::LdrbRegister
            | Self::LdrdRegister
            | Self::LdrhRegister
            | Self::LdrRegister
            | Self::PldRegister
            | Self::PliRegister => RegisterList::from([f.m, f.n]),
            Self::StrbImmediate | Self::StrhImmediate | Self::StrImmediate => {
                RegisterList::from([f.n, f.t])
            }
            Self::StrbRegister | Self::StrhRegister => RegisterList::from([f.m, f.n, f.t]),
            Self::StrdImmediate => RegisterList::from([f.t, f.t.next(), f.n]),
            Self::StrdRegister => RegisterList::from([f.t, f.t.next(), f.n, f.m]),
            Self::Strexb => RegisterList::from([f.n, f.m]),
            Self::Strexd => RegisterList::from([f.n, f.m, f.m.next()]),
        }
    }

    fn safety(&self, i: Instruction) -> SafetyLevel {
        let f = Fields::of(i);
        let Fields { n, t, m, .. } = f;
        let pc = Register::PC;
        match self {
            Self::LdmDa => {
                let list = RegisterList::from_mask(i.bits(15, 0) as u16);
                first_match([
                    (n == pc || list.num_gprs() < 1, SafetyLevel::Unpredictable),
                    (list.contains(pc), SafetyLevel::ForbiddenOperands),
                    (i.bit(21) && list.contains(n), SafetyLevel::Unknown),
                ])
            }
            Self::StmDa => {
                let list = RegisterList::from_mask(i.bits(15, 0) as u16);
                first_match([
                    (n == pc || list.num_gprs() < 1, SafetyLevel::Unpredictable),
                    // Storing the written-back base is only defined when it
                    // is the lowest register in the list.
                    (
                        i.bit(21) && list.contains(n) && list.smallest_gpr() != Some(n),
                        SafetyLevel::Unknown,
                    ),
                ])
            }
            Self::LdrbImmediate => first_match([
                (t == pc, SafetyLevel::Unpredictable),
                (n == pc, SafetyLevel::DecoderError),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && t == n, SafetyLevel::Unpredictable),
            ]),
            Self::LdrbLiteral => first_match([(t == pc, SafetyLevel::Unpredictable)]),
            Self::LdrbRegister => first_match([
                (t == pc || m == pc, SafetyLevel::Unpredictable),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::LdrdImmediate => first_match([
                (f.wback && (t == n || t.next() == n), SafetyLevel::Unpredictable),
                (t.next() == pc, SafetyLevel::Unpredictable),
                (t.is_odd(), SafetyLevel::Unpredictable),
                (n == pc, SafetyLevel::DecoderError),
                (f.unprivileged, SafetyLevel::Unpredictable),
            ]),
            Self::LdrdLiteral => first_match([
                (t.next() == pc, SafetyLevel::Unpredictable),
                (t.is_odd(), SafetyLevel::Unpredictable),
            ]),
            Self::LdrdRegister => first_match([
                (
                    f.wback && (n == pc || t == n || t.next() == n),
                    SafetyLevel::Unpredictable,
                ),
                (
                    t.next() == pc || m == pc || m == t || m == t.next(),
                    SafetyLevel::Unpredictable,
                ),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (t.is_odd(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::Unpredictable),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::Ldrexb => first_match([(t == pc || n == pc, SafetyLevel::Unpredictable)]),
            Self::Ldrexd => first_match([(
                t.is_odd() || t == Register::LR || n == pc,
                SafetyLevel::Unpredictable,
            )]),
            Self::LdrhImmediate => first_match([
                (t == pc, SafetyLevel::ForbiddenOperands),
                (t == pc || (f.wback && t == n), SafetyLevel::Unpredictable),
                (n == pc, SafetyLevel::DecoderError),
                (f.unprivileged, SafetyLevel::DecoderError),
            ]),
            Self::LdrhLiteral => first_match([
                (t == pc, SafetyLevel::Unpredictable),
                (i.bit(21) == i.bit(24), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
            ]),
            Self::LdrhRegister => first_match([
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
                (t == pc || m == pc, SafetyLevel::Unpredictable),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::LdrImmediate => first_match([
                (t == pc, SafetyLevel::ForbiddenOperands),
                (n == pc, SafetyLevel::DecoderError),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && t == n, SafetyLevel::Unpredictable),
            ]),
            Self::LdrLiteral | Self::PldLiteral | Self::PliImmediateLiteral => {
                SafetyLevel::MayBeSafe
            }
            Self::LdrRegister => first_match([
                (t == pc, SafetyLevel::ForbiddenOperands),
                (m == pc, SafetyLevel::Unpredictable),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::StrbImmediate => first_match([
                (t == pc, SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
            ]),
            Self::StrbRegister => first_match([
                (m == pc, SafetyLevel::Unpredictable),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::StrdImmediate => first_match([
                (
                    f.wback && (n == pc || t == n || t.next() == n),
                    SafetyLevel::Unpredictable,
                ),
                (t.next() == pc, SafetyLevel::Unpredictable),
                (t.is_odd(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::Unpredictable),
            ]),
            Self::StrdRegister => first_match([
                (
                    f.wback && (n == pc || t == n || t.next() == n),
                    SafetyLevel::Unpredictable,
                ),
                (t.next() == pc || m == pc, SafetyLevel::Unpredictable),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (t.is_odd(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::Unpredictable),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::Strexb => {
                let d = i.reg(12);
                first_match([
                    (d == pc || m == pc || n == pc, SafetyLevel::Unpredictable),
                    (d == n || d == m, SafetyLevel::Unpredictable),
                ])
            }
            Self::Strexd => {
                let d = i.reg(12);
                first_match([
                    (
                        d == pc || m.is_odd() || m == Register::LR || n == pc,
                        SafetyLevel::Unpredictable,
                    ),
                    (d == n || d == m || d == m.next(), SafetyLevel::Unpredictable),
                ])
            }
            Self::StrhImmediate => first_match([
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
                (t == pc, SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
            ]),
            Self::StrhRegister => first_match([
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
                (t == pc || m == pc, SafetyLevel::Unpredictable),
                (f.old_base_overlap(), SafetyLevel::Unpredictable),
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.index, SafetyLevel::Forbidden),
            ]),
            Self::StrImmediate => first_match([
                (f.unprivileged, SafetyLevel::DecoderError),
                (f.wback && (n == pc || t == n), SafetyLevel::Unpredictable),
            ]),
            Self::PldImmediate => first_match([(n == pc, SafetyLevel::DecoderError)]),
            Self::PldRegister => first_match([
                (m == pc || (n == pc && i.bit(22)), SafetyLevel::Unpredictable),
                (true, SafetyLevel::ForbiddenOperands),
            ]),
            Self::PliRegister => first_match([
                (m == pc, SafetyLevel::Unpredictable),
                (true, SafetyLevel::ForbiddenOperands),
            ]),
        }
    }

    fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::BASE_ADDRESS;
        if matches!(
            self,
            Self::LdmDa
                | Self::StmDa
                | Self::LdrbImmediate
                | Self::LdrdImmediate
                | Self::LdrhImmediate
                | Self::LdrImmediate
                | Self::StrbImmediate
                | Self::StrdImmediate
                | Self::StrhImmediate
                | Self::StrImmediate
        ) {
            caps |= Capabilities::WRITEBACK_SMALL_IMMEDIATE;
        }
        if self.is_literal() || matches!(self, Self::PliImmediateLiteral) {
            caps |= Capabilities::LITERAL_LOAD;
        }
        if matches!(self, Self::LdrImmediate) {
            caps |= Capabilities::THREAD_ADDRESS_POINTER;
        }
        caps
    }

    fn base_address_register(&self, i: Instruction) -> Option<Register> {
        if self.is_literal() {
            Some(Register::PC)
        } else {
            Some(i.reg(16))
        }
    }

    fn base_address_register_writeback_small_immediate(&self, i: Instruction) -> bool {
        match self {
            Self::LdmDa | Self::StmDa => true,
            Self::LdrbImmediate
            | Self::LdrdImmediate
            | Self::LdrhImmediate
            | Self::LdrImmediate
            | Self::StrbImmediate
            | Self::StrdImmediate
            | Self::StrhImmediate
            | Self::StrImmediate => Fields::of(i).wback,
            _ => false,
        }
    }

    fn is_literal_load(&self, i: Instruction) -> bool {
        match self {
            Self::PliImmediateLiteral => i.reg(16) == Register::PC,
            _ => self.is_literal(),
        }
    }

    /// `LDR Rt, [r9]` and `LDR Rt, [r9, #4]` read the two thread pointers.
    fn is_load_thread_address_pointer(&self, i: Instruction) -> bool {
        if !matches!(self, Self::LdrImmediate) {
            return false;
        }
        let f = Fields::of(i);
        let imm12 = i.bits(11, 0);
        f.n == Register::TP && f.index && !f.wback && i.bit(23) && (imm12 == 0 || imm12 == 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ldr_thread_pointer() {
        // LDR r0, [r9]: 1110 0101 1001 1001 0000 0000 0000 0000
        let i = Instruction::new(0xE599_0000);
        assert!(LoadStore::LdrImmediate.is_load_thread_address_pointer(i));
        assert_eq!(LoadStore::LdrImmediate.safety(i), SafetyLevel::MayBeSafe);
        // LDR r0, [r9, #4]
        assert!(LoadStore::LdrImmediate.is_load_thread_address_pointer(Instruction::new(0xE599_0004)));
        // LDR r0, [r9, #8]
        assert!(!LoadStore::LdrImmediate.is_load_thread_address_pointer(Instruction::new(0xE599_0008)));
        // LDR r0, [r9, #-4]
        assert!(!LoadStore::LdrImmediate.is_load_thread_address_pointer(Instruction::new(0xE519_0004)));
        // LDR r0, [r9, #4]!
        assert!(!LoadStore::LdrImmediate.is_load_thread_address_pointer(Instruction::new(0xE5B9_0004)));
    }

    #[test]
    fn test_ldr_immediate_writeback() {
        // LDR r0, [r1], #4 (post-indexed)
        let i = Instruction::new(0xE491_0004);
        let k = LoadStore::LdrImmediate;
        assert_eq!(k.defs(i), RegisterList::from([Register::R0, Register::R1]));
        assert_eq!(k.uses(i), RegisterList::from(Register::R1));
        assert_eq!(k.base_address_register(i), Some(Register::R1));
        assert!(k.base_address_register_writeback_small_immediate(i));
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        // LDR r1, [r1, #4]!
        assert_eq!(k.safety(Instruction::new(0xE5B1_1004)), SafetyLevel::Unpredictable);
        // LDR pc, [r0]
        assert_eq!(k.safety(Instruction::new(0xE590_F000)), SafetyLevel::ForbiddenOperands);
        // LDR r0, [r1, #4] without writeback
        let i = Instruction::new(0xE591_0004);
        assert_eq!(k.defs(i), RegisterList::from(Register::R0));
        assert!(!k.base_address_register_writeback_small_immediate(i));
    }

    #[test]
    fn test_literal_loads() {
        // LDR r0, [pc, #4]
        let i = Instruction::new(0xE59F_0004);
        let k = LoadStore::LdrLiteral;
        assert!(k.is_literal_load(i));
        assert_eq!(k.base_address_register(i), Some(Register::PC));
        assert_eq!(k.uses(i), RegisterList::from(Register::PC));
        assert!(k.capabilities().contains(Capabilities::LITERAL_LOAD));
        // PLI [pc, #0] is a literal load, PLI [r0] is not
        assert!(LoadStore::PliImmediateLiteral.is_literal_load(Instruction::new(0xF4DF_F000)));
        assert!(!LoadStore::PliImmediateLiteral.is_literal_load(Instruction::new(0xF4D0_F000)));
    }

    #[test]
    fn test_register_offset_needs_post_index() {
        // LDR r0, [r1, r2]
        assert_eq!(
            LoadStore::LdrRegister.safety(Instruction::new(0xE791_0002)),
            SafetyLevel::Forbidden
        );
        // LDR r0, [r1], r2
        let i = Instruction::new(0xE691_0002);
        assert_eq!(LoadStore::LdrRegister.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(
            LoadStore::LdrRegister.uses(i),
            RegisterList::from([Register::R1, Register::R2])
        );
        assert!(!LoadStore::LdrRegister.base_address_register_writeback_small_immediate(i));
    }

    #[test]
    fn test_load_multiple() {
        let k = LoadStore::LdmDa;
        // LDM r0!, {r0, r1}
        assert_eq!(k.safety(Instruction::new(0xE8B0_0003)), SafetyLevel::Unknown);
        // LDM r0, {pc}
        assert_eq!(k.safety(Instruction::new(0xE890_8000)), SafetyLevel::ForbiddenOperands);
        // LDM r0, {}
        assert_eq!(k.safety(Instruction::new(0xE890_0000)), SafetyLevel::Unpredictable);
        // LDM r2!, {r0, r1}
        let i = Instruction::new(0xE8B2_0003);
        assert_eq!(
            k.defs(i),
            RegisterList::from([Register::R0, Register::R1, Register::R2])
        );
        assert!(k.base_address_register_writeback_small_immediate(i));
    }

    #[test]
    fn test_store_multiple() {
        let k = LoadStore::StmDa;
        // PUSH {r4, lr} == STMDB sp!, {r4, lr}
        let i = Instruction::new(0xE92D_4010);
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(k.defs(i), RegisterList::from(Register::SP));
        assert_eq!(
            k.uses(i),
            RegisterList::from([Register::SP, Register::R4, Register::LR])
        );
        // STM r0!, {r0, r1}: base is the lowest register
        assert_eq!(k.safety(Instruction::new(0xE8A0_0003)), SafetyLevel::MayBeSafe);
        // STM r1!, {r0, r1}
        assert_eq!(k.safety(Instruction::new(0xE8A1_0003)), SafetyLevel::Unknown);
    }

    #[test]
    fn test_doubleword_pairs() {
        let k = LoadStore::LdrdImmediate;
        // LDRD r0, r1, [r2]
        let i = Instruction::new(0xE1C2_00D0);
        assert_eq!(k.defs(i), RegisterList::from([Register::R0, Register::R1]));
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        // Odd first register
        assert_eq!(k.safety(Instruction::new(0xE1C2_10D0)), SafetyLevel::Unpredictable);
        // LDRD r14, pc, [r2]
        assert_eq!(k.safety(Instruction::new(0xE1C2_E0D0)), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_store_exclusive_overlap() {
        // STREX r0, r1, [r2]
        let i = Instruction::new(0xE182_0F91);
        let k = LoadStore::Strexb;
        assert_eq!(k.safety(i), SafetyLevel::MayBeSafe);
        assert_eq!(k.defs(i), RegisterList::from(Register::R0));
        assert_eq!(k.uses(i), RegisterList::from([Register::R1, Register::R2]));
        // STREX r2, r1, [r2]
        assert_eq!(k.safety(Instruction::new(0xE182_2F91)), SafetyLevel::Unpredictable);
    }

    #[test]
    fn test_preloads() {
        // PLD [r0]
        assert_eq!(
            LoadStore::PldImmediate.safety(Instruction::new(0xF5D0_F000)),
            SafetyLevel::MayBeSafe
        );
        // PLD [r0, r1]
        assert_eq!(
            LoadStore::PldRegister.safety(Instruction::new(0xF7D0_F001)),
            SafetyLevel::ForbiddenOperands
        );
        assert!(LoadStore::PldRegister.defs(Instruction::new(0xF7D0_F001)).is_empty());
    }
}
