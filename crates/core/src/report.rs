// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::instruction::Instruction;
use crate::safety::SafetyLevel;
use crate::table::DecodeTable;
use armval_config::ValidationPolicy;
use std::collections::BTreeMap;

/// Instructions are validated in aligned groups of this many bytes. A
/// literal-pool head at the start of a bundle makes the rest of it data.
pub const BUNDLE_SIZE: u32 = 16;

/// Whether `level` rejects an image under `policy`.
pub fn rejects(policy: &ValidationPolicy, level: SafetyLevel) -> bool {
    match level {
        SafetyLevel::MayBeSafe => false,
        SafetyLevel::Unknown => policy.reject_unknown,
        SafetyLevel::Undefined => policy.reject_undefined,
        SafetyLevel::Unpredictable => policy.reject_unpredictable,
        SafetyLevel::DecoderError | SafetyLevel::ForbiddenOperands | SafetyLevel::Forbidden => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    pub address: u32,
    pub word: Instruction,
    pub rule: Option<&'static str>,
    pub safety: SafetyLevel,
}

/// Outcome of classifying a word stream in program order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub base_address: u32,
    /// Words classified, excluding literal-pool data.
    pub classified: usize,
    /// Words skipped as literal-pool data.
    pub pool_words: usize,
    pub counts: BTreeMap<SafetyLevel, usize>,
    pub worst: SafetyLevel,
    pub literal_pool_heads: usize,
    /// Every rejected word, including those past the listing cap.
    pub violation_count: usize,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn build(
        table: &DecodeTable,
        policy: &ValidationPolicy,
        base_address: u32,
        words: &[u32],
    ) -> Self {
        let mut report = Report {
            base_address,
            classified: 0,
            pool_words: 0,
            counts: BTreeMap::new(),
            worst: SafetyLevel::MayBeSafe,
            literal_pool_heads: 0,
            violation_count: 0,
            violations: Vec::new(),
        };
        let limit = policy.max_reported_violations.unwrap_or(usize::MAX);
        // First address past the current literal pool, if one is open.
        let mut pool_end: Option<u32> = None;

        for (idx, &word) in words.iter().enumerate() {
            let address = base_address.wrapping_add((idx as u32).wrapping_mul(4));
            if let Some(end) = pool_end {
                if address < end {
                    report.pool_words += 1;
                    continue;
                }
                pool_end = None;
            }

            let c = table.classify(Instruction::new(word));
            report.classified += 1;
            *report.counts.entry(c.safety).or_insert(0) += 1;
            report.worst = report.worst.worst(c.safety);

            // A head anywhere else is an ordinary breakpoint; what follows is code.
            if c.literal_pool_head && address % BUNDLE_SIZE == 0 {
                report.literal_pool_heads += 1;
                pool_end = Some(address.wrapping_add(BUNDLE_SIZE));
            }

            if rejects(policy, c.safety) {
                if c.safety == SafetyLevel::DecoderError {
                    tracing::error!(
                        "Decoder error at {:#010x}: {} routed to {}",
                        address,
                        c.word,
                        c.rule.unwrap_or("-")
                    );
                } else {
                    tracing::warn!(
                        "Rejected {} at {:#010x} ({}): {}",
                        c.word,
                        address,
                        c.rule.unwrap_or("no rule"),
                        c.safety
                    );
                }
                report.violation_count += 1;
                if report.violations.len() < limit {
                    report.violations.push(Violation {
                        address,
                        word: c.word,
                        rule: c.rule,
                        safety: c.safety,
                    });
                }
            }
        }

        tracing::debug!(
            "Classified {} words at {:#010x}, {} pool words, worst {}",
            report.classified,
            base_address,
            report.pool_words,
            report.worst
        );
        report
    }

    /// True when no word was rejected.
    pub fn accepted(&self) -> bool {
        self.violation_count == 0
    }

    /// True when any word landed in a class that does not describe it, which
    /// means the table itself cannot be trusted for this input.
    pub fn has_decoder_error(&self) -> bool {
        self.count(SafetyLevel::DecoderError) > 0
    }

    pub fn count(&self, level: SafetyLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }
}
