// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Classification of A32 instruction words for a software-fault-isolation
//! validator.
//!
//! [`DecodeTable`] routes a word to the class decoder that owns its encoding,
//! and the decoder reports the registers it touches and a [`SafetyLevel`].
//! [`Report`] runs a table over a word stream under a validation policy.

pub mod decoder;
pub mod instruction;
pub mod register;
pub mod report;
pub mod safety;
pub mod table;

pub use decoder::{Capabilities, ClassDecoder, DecoderKind};
pub use instruction::{Instruction, ARCH_VERSION, VFP_SMALL_REGISTER_BANK};
pub use register::{Register, RegisterList};
pub use report::{Report, Violation};
pub use safety::SafetyLevel;
pub use table::{Classification, DecodeTable, Pattern, PatternError, Row};

/// Bits a sandboxed indirect branch target must have clear: the top 1GB
/// boundary and the 16-byte bundle offset.
pub const CODE_ADDRESS_MASK: u32 = 0xC000_000F;

/// Bits a sandboxed data address must have clear.
pub const DATA_ADDRESS_MASK: u32 = 0xC000_0000;
