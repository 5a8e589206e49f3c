// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Pattern-driven dispatch from instruction words to decoder kinds.
//!
//! Each rule row carries a 32-character pattern where `0`/`1` are fixed bits
//! and any other character is a wildcard. A pattern whose top nibble reads
//! `cccc` additionally excludes the unconditional (cond = 1111) space.
//! Rows are tried from most to least specific and the first match wins.

mod arm32;

use crate::decoder::{Capabilities, ClassDecoder, DecoderKind};
use crate::instruction::Instruction;
use crate::register::{Register, RegisterList};
use crate::safety::SafetyLevel;
use crate::{CODE_ADDRESS_MASK, DATA_ADDRESS_MASK};
use std::cmp::Reverse;

/// Rule name shared by the reserved encodings carved out of admitted space.
pub const UNNAMED: &str = "Unnamed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern {pattern:?} has {len} characters, expected 32")]
    Length { pattern: String, len: usize },
    #[error("Pattern {pattern:?} contains non-ASCII character {ch:?}")]
    Character { pattern: String, ch: char },
}

/// Compiled form of a rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    mask: u32,
    expected: u32,
    conditional: bool,
}

impl Pattern {
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
            return Err(PatternError::Character {
                pattern: text.to_string(),
                ch,
            });
        }
        if text.len() != 32 {
            return Err(PatternError::Length {
                pattern: text.to_string(),
                len: text.len(),
            });
        }
        Ok(Self::from_text(text))
    }

    /// Compiles a pattern without validating it. Callers check the length
    /// first; characters past the 32nd are ignored.
    pub(crate) const fn from_text(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut mask: u32 = 0;
        let mut expected: u32 = 0;
        let mut i = 0;
        while i < bytes.len() && i < 32 {
            let bit = 1u32 << (31 - i);
            match bytes[i] {
                b'0' => mask |= bit,
                b'1' => {
                    mask |= bit;
                    expected |= bit;
                }
                _ => {}
            }
            i += 1;
        }
        let conditional = bytes.len() >= 4
            && bytes[0] == b'c'
            && bytes[1] == b'c'
            && bytes[2] == b'c'
            && bytes[3] == b'c';
        Self {
            mask,
            expected,
            conditional,
        }
    }

    pub const fn mask(self) -> u32 {
        self.mask
    }

    pub const fn expected(self) -> u32 {
        self.expected
    }

    /// True when the pattern excludes the unconditional space.
    pub const fn is_conditional(self) -> bool {
        self.conditional
    }

    pub const fn fixed_bits(self) -> u32 {
        self.mask.count_ones()
    }

    pub const fn matches(self, i: Instruction) -> bool {
        i.word() & self.mask == self.expected && !(self.conditional && i.is_unconditional())
    }
}

/// One rule of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub rule: &'static str,
    /// The pattern as written, for listings.
    pub text: &'static str,
    pub pattern: Pattern,
    pub kind: DecoderKind,
}

impl Row {
    pub const fn new(
        rule: &'static str,
        text: &'static str,
        pattern: Pattern,
        kind: DecoderKind,
    ) -> Self {
        Self {
            rule,
            text,
            pattern,
            kind,
        }
    }

    /// Reserved rows sit inside otherwise admitted encodings and take
    /// precedence over every named row.
    pub fn is_reserved(&self) -> bool {
        self.rule == UNNAMED
    }
}

/// Bits 27:20 and 7:4, the primary A32 decode fields.
const BUCKET_BITS: u32 = 0x0FF0_00F0;
const BUCKETS: usize = 1 << 12;

fn bucket_index(word: u32) -> usize {
    (((word >> 4) & 0x00F) | ((word >> 16) & 0xFF0)) as usize
}

/// The rule table plus a lookup index over the primary decode bits.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    rows: Vec<Row>,
    buckets: Vec<Vec<usize>>,
}

impl DecodeTable {
    /// Every A32 encoding admitted in sandboxed code.
    pub fn arm32() -> Self {
        Self::build(arm32::rows())
    }

    /// Builds a table from `(rule, pattern, kind)` triples.
    pub fn from_rows(rows: &[(&'static str, &'static str, DecoderKind)]) -> Result<Self, PatternError> {
        let rows = rows
            .iter()
            .map(|&(rule, text, kind)| Ok(Row::new(rule, text, Pattern::parse(text)?, kind)))
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(Self::build(rows))
    }

    fn build(mut rows: Vec<Row>) -> Self {
        // Stable, so ties keep their listing order.
        rows.sort_by_key(|row| (!row.is_reserved(), Reverse(row.pattern.fixed_bits())));

        let mut buckets = vec![Vec::new(); BUCKETS];
        for (idx, row) in rows.iter().enumerate() {
            let mask = row.pattern.mask() & BUCKET_BITS;
            let expected = row.pattern.expected() & BUCKET_BITS;
            for (slot, bucket) in buckets.iter_mut().enumerate() {
                let slot = slot as u32;
                let word = ((slot & 0xF) << 4) | (((slot >> 4) & 0xFF) << 20);
                if word & mask == expected {
                    bucket.push(idx);
                }
            }
        }

        tracing::debug!("Built decode table with {} rows", rows.len());
        Self { rows, buckets }
    }

    /// Rows in lookup order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row matching `i`, if any.
    pub fn lookup(&self, i: Instruction) -> Option<&Row> {
        self.buckets[bucket_index(i.word())]
            .iter()
            .map(|&idx| &self.rows[idx])
            .find(|row| row.pattern.matches(i))
    }

    pub fn classify(&self, i: Instruction) -> Classification {
        let classification = match self.lookup(i) {
            Some(row) => Classification::from_row(row, i),
            None => Classification::unmatched(i),
        };
        tracing::trace!(
            "{} -> {} ({})",
            i,
            classification.rule.unwrap_or("-"),
            classification.safety
        );
        classification
    }
}

impl Default for DecodeTable {
    fn default() -> Self {
        Self::arm32()
    }
}

/// Everything the table knows about one instruction word.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Classification {
    pub word: Instruction,
    /// Matched rule, `None` when no row admits the word.
    pub rule: Option<&'static str>,
    pub kind: Option<&'static str>,
    pub group: Option<&'static str>,
    pub safety: SafetyLevel,
    pub defs: RegisterList,
    pub uses: RegisterList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_address_register: Option<Register>,
    #[serde(skip_serializing_if = "is_false")]
    pub writeback_small_immediate: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub literal_load: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub literal_pool_head: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub thread_address_pointer_load: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_target_register: Option<Register>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_target_offset: Option<i32>,
    /// Result has every bit of [`CODE_ADDRESS_MASK`] cleared.
    #[serde(skip_serializing_if = "is_false")]
    pub clears_code_mask: bool,
    /// Result has every bit of [`DATA_ADDRESS_MASK`] cleared.
    #[serde(skip_serializing_if = "is_false")]
    pub clears_data_mask: bool,
    /// Register whose [`DATA_ADDRESS_MASK`] bits the word tests into Z.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_test_register: Option<Register>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_replacement_sentinel: Option<Instruction>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Classification {
    fn from_row(row: &Row, i: Instruction) -> Self {
        let kind = row.kind;
        let caps = kind.capabilities();
        let clears = |mask| caps.contains(Capabilities::CLEARS_BITS) && kind.clears_bits(i, mask);
        let z_test_register = if caps.contains(Capabilities::SETS_Z_IF_BITS_CLEAR) {
            (0..15)
                .map(Register::new)
                .find(|&r| kind.sets_z_if_bits_clear(i, r, DATA_ADDRESS_MASK))
        } else {
            None
        };

        Self {
            word: i,
            rule: Some(row.rule),
            kind: Some(kind.name()),
            group: Some(kind.group()),
            safety: kind.safety(i),
            defs: kind.defs(i),
            uses: kind.uses(i),
            base_address_register: kind.base_address_register(i),
            writeback_small_immediate: kind.base_address_register_writeback_small_immediate(i),
            literal_load: kind.is_literal_load(i),
            literal_pool_head: kind.is_literal_pool_head(i),
            thread_address_pointer_load: kind.is_load_thread_address_pointer(i),
            branch_target_register: kind.branch_target_register(i),
            branch_target_offset: kind.branch_target_offset(i),
            clears_code_mask: clears(CODE_ADDRESS_MASK),
            clears_data_mask: clears(DATA_ADDRESS_MASK),
            z_test_register,
            code_replacement_sentinel: caps
                .contains(Capabilities::CODE_REPLACEMENT)
                .then(|| kind.dynamic_code_replacement_sentinel(i)),
        }
    }

    fn unmatched(i: Instruction) -> Self {
        Self {
            word: i,
            rule: None,
            kind: None,
            group: None,
            safety: SafetyLevel::Forbidden,
            defs: RegisterList::EMPTY,
            uses: RegisterList::EMPTY,
            base_address_register: None,
            writeback_small_immediate: false,
            literal_load: false,
            literal_pool_head: false,
            thread_address_pointer_load: false,
            branch_target_register: None,
            branch_target_offset: None,
            clears_code_mask: false,
            clears_data_mask: false,
            z_test_register: None,
            code_replacement_sentinel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{DataProcessing, LoadStore, System};

    fn classify(word: u32) -> Classification {
        DecodeTable::arm32().classify(Instruction::new(word))
    }

    #[test]
    fn test_pattern_parse() {
        let p = Pattern::parse("10xxxxxxxxxxxxxxxxxxxxxxxxxxxxxx").unwrap();
        assert_eq!(p.mask(), 0xC000_0000);
        assert_eq!(p.expected(), 0x8000_0000);
        assert!(!p.is_conditional());
        assert_eq!(p.fixed_bits(), 2);
    }

    #[test]
    fn test_pattern_errors() {
        assert_eq!(
            Pattern::parse("0101"),
            Err(PatternError::Length {
                pattern: "0101".to_string(),
                len: 4
            })
        );
        let err = Pattern::parse("cccc0010101snnnnddddiiiiiiiiiiiié").unwrap_err();
        assert!(matches!(err, PatternError::Character { ch: 'é', .. }));
    }

    #[test]
    fn test_conditional_pattern_excludes_unconditional_space() {
        let p = Pattern::parse("cccc1010iiiiiiiiiiiiiiiiiiiiiiii").unwrap();
        assert!(p.is_conditional());
        assert!(p.matches(Instruction::new(0xEA00_0000)));
        assert!(!p.matches(Instruction::new(0xFA00_0000)));
    }

    #[test]
    fn test_rows_are_ordered_by_specificity() {
        let table = DecodeTable::arm32();
        let rows = table.rows();
        let first_named = rows.iter().position(|r| !r.is_reserved()).unwrap();
        assert!(rows[..first_named].iter().all(Row::is_reserved));
        assert!(rows[first_named..].iter().all(|r| !r.is_reserved()));
        for pair in rows[first_named..].windows(2) {
            assert!(pair[0].pattern.fixed_bits() >= pair[1].pattern.fixed_bits());
        }
    }

    #[test]
    fn test_every_row_pattern_round_trips() {
        for row in DecodeTable::arm32().rows() {
            assert_eq!(Pattern::parse(row.text), Ok(row.pattern), "{}", row.rule);
        }
    }

    #[test]
    fn test_lookup_picks_most_specific_row() {
        // 1110 0001 1010 0000 0000 0000 0000 0001: MOV r0, r1 also fits LSL_immediate
        let c = classify(0xE1A0_0001);
        assert_eq!(c.rule, Some("MOV_register"));
        assert_eq!(c.kind, Some("AsrImmediate"));

        // 1110 0011 0010 0000 1111 0000 0000 0000: NOP, inside the MSR space
        assert_eq!(classify(0xE320_F000).rule, Some("NOP"));
        // hint 0x10 is unallocated
        assert_eq!(classify(0xE320_F010).rule, Some("Unallocated_hint"));
        assert_eq!(classify(0xE320_F010).safety, SafetyLevel::Forbidden);
    }

    #[test]
    fn test_reserved_rows_win() {
        // 1111 0101 0001 0000 1111 0000 0000 0000: PLDW [r0]
        let c = classify(0xF510_F000);
        assert_eq!(c.rule, Some(UNNAMED));
        assert_eq!(c.safety, SafetyLevel::Unpredictable);

        // PLD [r0] is admitted
        let c = classify(0xF5D0_F000);
        assert_eq!(c.rule, Some("PLD_PLDW_immediate"));
        assert_eq!(c.safety, SafetyLevel::MayBeSafe);

        // 1110 1100 0001 0000 0000 1010 0000 0010: VLDM with P=U=W=0
        let c = classify(0xEC10_0A02);
        assert_eq!(c.kind, Some("UnnamedUndefined"));
        assert_eq!(c.safety, SafetyLevel::Undefined);
    }

    #[test]
    fn test_unmatched_word_is_forbidden() {
        // UDF #0: permanently undefined, not listed
        let c = classify(0xE7F0_00F0);
        assert_eq!(c.rule, None);
        assert_eq!(c.kind, None);
        assert_eq!(c.safety, SafetyLevel::Forbidden);
        assert!(c.defs.is_empty());
    }

    #[test]
    fn test_from_rows_keeps_listing_order_on_ties() {
        let table = DecodeTable::from_rows(&[
            ("wide", "cccc0000xxxxxxxxxxxxxxxxxxxxxxxx", DataProcessing::AdcRegister.into()),
            ("first", "cccc00000000xxxxxxxxxxxxxxxxxxxx", DataProcessing::Nop.into()),
            ("second", "cccc0000xxxx0000xxxxxxxxxxxxxxxx", System::Forbidden.into()),
        ])
        .unwrap();
        let rules: Vec<_> = table.rows().iter().map(|r| r.rule).collect();
        assert_eq!(rules, ["first", "second", "wide"]);
        assert_eq!(table.lookup(Instruction::new(0xE000_0000)).unwrap().rule, "first");
        assert_eq!(table.lookup(Instruction::new(0xE010_0000)).unwrap().rule, "second");
        assert_eq!(table.lookup(Instruction::new(0xE011_1000)).unwrap().rule, "wide");
        assert!(table.lookup(Instruction::new(0xF000_0000)).is_none());
    }

    #[test]
    fn test_from_rows_rejects_bad_pattern() {
        let err = DecodeTable::from_rows(&[("short", "0101", LoadStore::LdrImmediate.into())])
            .unwrap_err();
        assert!(err.to_string().contains("4 characters"));
    }

    #[test]
    fn test_mask_queries() {
        // BIC r0, r0, #0xC000000F
        let c = classify(0xE3C0_013F);
        assert_eq!(c.rule, Some("BIC_immediate"));
        assert!(c.clears_code_mask);
        assert!(c.clears_data_mask);

        // BIC r0, r0, #0xC0000000
        let c = classify(0xE3C0_0103);
        assert!(!c.clears_code_mask);
        assert!(c.clears_data_mask);

        // TST r1, #0xC0000000
        let c = classify(0xE311_0103);
        assert_eq!(c.rule, Some("TST_immediate"));
        assert_eq!(c.z_test_register, Some(Register::R1));
    }

    #[test]
    fn test_memory_queries() {
        // LDR r0, [r9, #4]
        let c = classify(0xE599_0004);
        assert!(c.thread_address_pointer_load);
        assert_eq!(c.base_address_register, Some(Register::TP));

        // LDR r0, [pc, #8]
        let c = classify(0xE59F_0008);
        assert_eq!(c.rule, Some("LDR_literal"));
        assert!(c.literal_load);
        assert_eq!(c.base_address_register, Some(Register::PC));
    }

    #[test]
    fn test_sentinel_only_for_code_replacement_kinds() {
        // MOVW r0, #0x1234
        let c = classify(0xE301_0234);
        assert_eq!(c.code_replacement_sentinel, Some(Instruction::new(0xE300_0000)));
        // ADD r0, r0, #1
        assert_eq!(classify(0xE280_0001).code_replacement_sentinel, None);
    }

    #[test]
    fn test_classification_serializes() {
        let json = serde_json::to_value(classify(0xE125_BE70)).unwrap();
        assert_eq!(json["rule"], "BKPT");
        assert_eq!(json["safety"], "MAY_BE_SAFE");
        assert_eq!(json["literal_pool_head"], true);
        assert!(json.get("branch_target_offset").is_none());
    }
}
