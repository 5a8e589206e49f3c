// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The A32 rule rows admitted in sandboxed code.

use super::{Pattern, Row};
use crate::decoder::{
    Branch, DataProcessing, DecoderKind, LoadStore, Multiply, Simd, System, VectorLoadStore, Vfp,
};

/// Builds a row whose pattern is parsed at compile time. A pattern of the
/// wrong length fails the build.
macro_rules! row {
    ($rule:literal, $pattern:literal, $group:ident::$kind:ident) => {{
        const _: () = assert!($pattern.len() == 32, "rule patterns are 32 characters");
        const PATTERN: Pattern = Pattern::from_text($pattern);
        Row::new($rule, $pattern, PATTERN, DecoderKind::$group($group::$kind))
    }};
}

pub(super) fn rows() -> Vec<Row> {
    vec![
        // Data processing and miscellaneous
        row!("ADC_immediate", "cccc0010101snnnnddddiiiiiiiiiiii", DataProcessing::AdcImmediate),
        row!("AND_immediate", "cccc0010000snnnnddddiiiiiiiiiiii", DataProcessing::AdcImmediate),
        row!("EOR_immediate", "cccc0010001snnnnddddiiiiiiiiiiii", DataProcessing::AdcImmediate),
        row!("RSB_immediate", "cccc0010011snnnnddddiiiiiiiiiiii", DataProcessing::AdcImmediate),
        row!("RSC_immediate", "cccc0010111snnnnddddiiiiiiiiiiii", DataProcessing::AdcImmediate),
        row!("SBC_immediate", "cccc0010110snnnnddddiiiiiiiiiiii", DataProcessing::AdcImmediate),
        row!("ADC_register", "cccc0000101snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("ADD_register", "cccc0000100snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("AND_register", "cccc0000000snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("BIC_register", "cccc0001110snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("EOR_register", "cccc0000001snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("ORR_register", "cccc0001100snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("RSB_register", "cccc0000011snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("RSC_register", "cccc0000111snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("SBC_register", "cccc0000110snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("SUB_register", "cccc0000010snnnnddddiiiiitt0mmmm", DataProcessing::AdcRegister),
        row!("ADC_register_shifted_register", "cccc0000101snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("ADD_register_shifted_register", "cccc0000100snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("AND_register_shifted_register", "cccc0000000snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("BIC_register_shifted_register", "cccc0001110snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("EOR_register_shifted_register", "cccc0000001snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("ORR_register_shifted_register", "cccc0001100snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("RSB_register_shifted_register", "cccc0000011snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("RSC_register_shifted_register", "cccc0000111snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("SBC_register_shifted_register", "cccc0000110snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("SUB_register_shifted_register", "cccc0000010snnnnddddssss0tt1mmmm", DataProcessing::AdcRegisterShiftedRegister),
        row!("ADD_immediate", "cccc0010100snnnnddddiiiiiiiiiiii", DataProcessing::AddImmediate),
        row!("SUB_immediate", "cccc0010010snnnnddddiiiiiiiiiiii", DataProcessing::AddImmediate),
        row!("ADR_A1", "cccc001010001111ddddiiiiiiiiiiii", DataProcessing::Adr),
        row!("ADR_A2", "cccc001001001111ddddiiiiiiiiiiii", DataProcessing::Adr),
        row!("ASR_immediate", "cccc0001101s0000ddddiiiii100mmmm", DataProcessing::AsrImmediate),
        row!("LSR_immediate", "cccc0001101s0000ddddiiiii010mmmm", DataProcessing::AsrImmediate),
        row!("MOV_register", "cccc0001101s0000dddd00000000mmmm", DataProcessing::AsrImmediate),
        row!("MVN_register", "cccc0001111s0000ddddiiiiitt0mmmm", DataProcessing::AsrImmediate),
        row!("RRX", "cccc0001101s0000dddd00000110mmmm", DataProcessing::AsrImmediate),
        row!("ASR_register", "cccc0001101s0000ddddmmmm0101nnnn", DataProcessing::AsrRegister),
        row!("LSL_register", "cccc0001101s0000ddddmmmm0001nnnn", DataProcessing::AsrRegister),
        row!("LSR_register", "cccc0001101s0000ddddmmmm0011nnnn", DataProcessing::AsrRegister),
        row!("MVN_register_shifted_register", "cccc0001111s0000ddddssss0tt1mmmm", DataProcessing::AsrRegister),
        row!("ROR_register", "cccc0001101s0000ddddmmmm0111nnnn", DataProcessing::AsrRegister),
        row!("BFC", "cccc0111110mmmmmddddlllll0011111", DataProcessing::Bfc),
        row!("BFI", "cccc0111110mmmmmddddlllll001nnnn", DataProcessing::Bfi),
        row!("BIC_immediate", "cccc0011110snnnnddddiiiiiiiiiiii", DataProcessing::BicImmediate),
        row!("CLZ", "cccc000101101111dddd11110001mmmm", DataProcessing::Clz),
        row!("RBIT", "cccc011011111111dddd11110011mmmm", DataProcessing::Clz),
        row!("REV16", "cccc011010111111dddd11111011mmmm", DataProcessing::Clz),
        row!("REVSH", "cccc011011111111dddd11111011mmmm", DataProcessing::Clz),
        row!("REV", "cccc011010111111dddd11110011mmmm", DataProcessing::Clz),
        row!("SSAT16", "cccc01101010iiiidddd11110011nnnn", DataProcessing::Clz),
        row!("SSAT", "cccc0110101iiiiiddddiiiiis01nnnn", DataProcessing::Clz),
        row!("SXTB16", "cccc011010001111ddddrr000111mmmm", DataProcessing::Clz),
        row!("SXTB", "cccc011010101111ddddrr000111mmmm", DataProcessing::Clz),
        row!("SXTH", "cccc011010111111ddddrr000111mmmm", DataProcessing::Clz),
        row!("USAT16", "cccc01101110iiiidddd11110011nnnn", DataProcessing::Clz),
        row!("USAT", "cccc0110111iiiiiddddiiiiis01nnnn", DataProcessing::Clz),
        row!("UXTB16", "cccc011011001111ddddrr000111mmmm", DataProcessing::Clz),
        row!("UXTB", "cccc011011101111ddddrr000111mmmm", DataProcessing::Clz),
        row!("UXTH", "cccc011011111111ddddrr000111mmmm", DataProcessing::Clz),
        row!("CMN_immediate", "cccc00110111nnnn0000iiiiiiiiiiii", DataProcessing::CmnImmediate),
        row!("CMP_immediate", "cccc00110101nnnn0000iiiiiiiiiiii", DataProcessing::CmnImmediate),
        row!("TEQ_immediate", "cccc00110011nnnn0000iiiiiiiiiiii", DataProcessing::CmnImmediate),
        row!("CMN_register", "cccc00010111nnnn0000iiiiitt0mmmm", DataProcessing::CmnRegister),
        row!("CMP_register", "cccc00010101nnnn0000iiiiitt0mmmm", DataProcessing::CmnRegister),
        row!("TEQ_register", "cccc00010011nnnn0000iiiiitt0mmmm", DataProcessing::CmnRegister),
        row!("TST_register", "cccc00010001nnnn0000iiiiitt0mmmm", DataProcessing::CmnRegister),
        row!("CMN_register_shifted_register", "cccc00010111nnnn0000ssss0tt1mmmm", DataProcessing::CmnRegisterShiftedRegister),
        row!("CMP_register_shifted_register", "cccc00010101nnnn0000ssss0tt1mmmm", DataProcessing::CmnRegisterShiftedRegister),
        row!("TEQ_register_shifted_register", "cccc00010011nnnn0000ssss0tt1mmmm", DataProcessing::CmnRegisterShiftedRegister),
        row!("TST_register_shifted_register", "cccc00010001nnnn0000ssss0tt1mmmm", DataProcessing::CmnRegisterShiftedRegister),
        row!("LSL_immediate", "cccc0001101s0000ddddiiiii000mmmm", DataProcessing::LslImmediate),
        row!("ROR_immediate", "cccc0001101s0000ddddiiiii110mmmm", DataProcessing::LslImmediate),
        row!("MOVT", "cccc00110100iiiiddddiiiiiiiiiiii", DataProcessing::Movt),
        row!("MOVW", "cccc00110000iiiiddddiiiiiiiiiiii", DataProcessing::Movt),
        row!("MOV_immediate_A1", "cccc0011101s0000ddddiiiiiiiiiiii", DataProcessing::MovImmediate),
        row!("MVN_immediate", "cccc0011111s0000ddddiiiiiiiiiiii", DataProcessing::MovImmediate),
        row!("MRS", "cccc00010r001111dddd000000000000", DataProcessing::Mrs),
        row!("MSR_immediate", "cccc00110010mm001111iiiiiiiiiiii", DataProcessing::MsrImmediate),
        row!("MSR_register", "cccc00010010mm00111100000000nnnn", DataProcessing::MsrRegister),
        row!("NOP", "cccc0011001000001111000000000000", DataProcessing::Nop),
        row!("YIELD", "cccc0011001000001111000000000001", DataProcessing::Nop),
        row!("ORR_immediate", "cccc0011100snnnnddddiiiiiiiiiiii", DataProcessing::OrrImmediate),
        row!("PKH", "cccc01101000nnnnddddiiiiit01mmmm", DataProcessing::Pkh),
        row!("QADD16", "cccc01100010nnnndddd11110001mmmm", DataProcessing::Pkh),
        row!("QADD8", "cccc01100010nnnndddd11111001mmmm", DataProcessing::Pkh),
        row!("QADD", "cccc00010000nnnndddd00000101mmmm", DataProcessing::Pkh),
        row!("QASX", "cccc01100010nnnndddd11110011mmmm", DataProcessing::Pkh),
        row!("QDADD", "cccc00010100nnnndddd00000101mmmm", DataProcessing::Pkh),
        row!("QDSUB", "cccc00010110nnnndddd00000101mmmm", DataProcessing::Pkh),
        row!("QSAX", "cccc01100010nnnndddd11110101mmmm", DataProcessing::Pkh),
        row!("QSUB16", "cccc01100010nnnndddd11110111mmmm", DataProcessing::Pkh),
        row!("QSUB8", "cccc01100010nnnndddd11111111mmmm", DataProcessing::Pkh),
        row!("QSUB", "cccc00010010nnnndddd00000101mmmm", DataProcessing::Pkh),
        row!("SADD16", "cccc01100001nnnndddd11110001mmmm", DataProcessing::Pkh),
        row!("SADD8", "cccc01100001nnnndddd11111001mmmm", DataProcessing::Pkh),
        row!("SASX", "cccc01100001nnnndddd11110011mmmm", DataProcessing::Pkh),
        row!("SEL", "cccc01101000nnnndddd11111011mmmm", DataProcessing::Pkh),
        row!("SHADD16", "cccc01100011nnnndddd11110001mmmm", DataProcessing::Pkh),
        row!("SHADD8", "cccc01100011nnnndddd11111001mmmm", DataProcessing::Pkh),
        row!("SHASX", "cccc01100011nnnndddd11110011mmmm", DataProcessing::Pkh),
        row!("SHSAX", "cccc01100011nnnndddd11110101mmmm", DataProcessing::Pkh),
        row!("SHSUB16", "cccc01100011nnnndddd11110111mmmm", DataProcessing::Pkh),
        row!("SHSUB8", "cccc01100011nnnndddd11111111mmmm", DataProcessing::Pkh),
        row!("SSAX", "cccc01100001nnnndddd11110101mmmm", DataProcessing::Pkh),
        row!("SSUB16", "cccc01100001nnnndddd11110111mmmm", DataProcessing::Pkh),
        row!("SSUB8", "cccc01100001nnnndddd11111111mmmm", DataProcessing::Pkh),
        row!("UADD16", "cccc01100101nnnndddd11110001mmmm", DataProcessing::Pkh),
        row!("UADD8", "cccc01100101nnnndddd11111001mmmm", DataProcessing::Pkh),
        row!("UASX", "cccc01100101nnnndddd11110011mmmm", DataProcessing::Pkh),
        row!("UHADD16", "cccc01100111nnnndddd11110001mmmm", DataProcessing::Pkh),
        row!("UHADD8", "cccc01100111nnnndddd11111001mmmm", DataProcessing::Pkh),
        row!("UHASX", "cccc01100111nnnndddd11110011mmmm", DataProcessing::Pkh),
        row!("UHSAX", "cccc01100111nnnndddd11110101mmmm", DataProcessing::Pkh),
        row!("UHSUB16", "cccc01100111nnnndddd11110111mmmm", DataProcessing::Pkh),
        row!("UHSUB8", "cccc01100111nnnndddd11111111mmmm", DataProcessing::Pkh),
        row!("UQADD16", "cccc01100110nnnndddd11110001mmmm", DataProcessing::Pkh),
        row!("UQADD8", "cccc01100110nnnndddd11111001mmmm", DataProcessing::Pkh),
        row!("UQASX", "cccc01100110nnnndddd11110011mmmm", DataProcessing::Pkh),
        row!("UQSAX", "cccc01100110nnnndddd11110101mmmm", DataProcessing::Pkh),
        row!("UQSUB16", "cccc01100110nnnndddd11110111mmmm", DataProcessing::Pkh),
        row!("UQSUB8", "cccc01100110nnnndddd11111111mmmm", DataProcessing::Pkh),
        row!("USAX", "cccc01100101nnnndddd11110101mmmm", DataProcessing::Pkh),
        row!("USUB16", "cccc01100101nnnndddd11110111mmmm", DataProcessing::Pkh),
        row!("USUB8", "cccc01100101nnnndddd11111111mmmm", DataProcessing::Pkh),
        row!("SBFX", "cccc0111101wwwwwddddlllll101nnnn", DataProcessing::Sbfx),
        row!("UBFX", "cccc0111111mmmmmddddlllll101nnnn", DataProcessing::Sbfx),
        row!("SXTAB16", "cccc01101000nnnnddddrr000111mmmm", DataProcessing::Sxtab16),
        row!("SXTAB", "cccc01101010nnnnddddrr000111mmmm", DataProcessing::Sxtab16),
        row!("SXTAH", "cccc01101011nnnnddddrr000111mmmm", DataProcessing::Sxtab16),
        row!("UXTAB16", "cccc01101100nnnnddddrr000111mmmm", DataProcessing::Sxtab16),
        row!("UXTAB", "cccc01101110nnnnddddrr000111mmmm", DataProcessing::Sxtab16),
        row!("UXTAH", "cccc01101111nnnnddddrr000111mmmm", DataProcessing::Sxtab16),
        row!("TST_immediate", "cccc00110001nnnn0000iiiiiiiiiiii", DataProcessing::TstImmediate),

        // Multiply and multiply-accumulate
        row!("MLA_A1", "cccc0000001sddddaaaammmm1001nnnn", Multiply::MlaA1),
        row!("MLS_A1", "cccc00000110ddddaaaammmm1001nnnn", Multiply::MlsA1),
        row!("SMLABB_SMLABT_SMLATB_SMLATT", "cccc00010000ddddaaaammmm1xx0nnnn", Multiply::MlsA1),
        row!("SMLAWB_SMLAWT", "cccc00010010ddddaaaammmm1x00nnnn", Multiply::MlsA1),
        row!("MUL_A1", "cccc0000000sdddd0000mmmm1001nnnn", Multiply::MulA1),
        row!("SDIV", "cccc01110001dddd1111mmmm0001nnnn", Multiply::Sdiv),
        row!("SMMUL", "cccc01110101dddd1111mmmm00r1nnnn", Multiply::Sdiv),
        row!("SMUAD", "cccc01110000dddd1111mmmm00m1nnnn", Multiply::Sdiv),
        row!("SMUSD", "cccc01110000dddd1111mmmm01m1nnnn", Multiply::Sdiv),
        row!("UDIV", "cccc01110011dddd1111mmmm0001nnnn", Multiply::Sdiv),
        row!("SMLAD", "cccc01110000ddddaaaammmm00m1nnnn", Multiply::Smlad),
        row!("SMLSD", "cccc01110000ddddaaaammmm01m1nnnn", Multiply::Smlad),
        row!("SMMLA", "cccc01110101ddddaaaammmm00r1nnnn", Multiply::Smlad),
        row!("SMMLS", "cccc01110101ddddaaaammmm11r1nnnn", Multiply::Smlad),
        row!("USADA8", "cccc01111000ddddaaaammmm0001nnnn", Multiply::Smlad),
        row!("SMLALBB_SMLALBT_SMLALTB_SMLALTT", "cccc00010100hhhhllllmmmm1xx0nnnn", Multiply::SmlalXy),
        row!("UMAAL_A1", "cccc00000100hhhhllllmmmm1001nnnn", Multiply::SmlalXy),
        row!("SMLALD", "cccc01110100hhhhllllmmmm00m1nnnn", Multiply::SmlalXy),
        row!("SMLSLD", "cccc01110100hhhhllllmmmm01m1nnnn", Multiply::SmlalXy),
        row!("SMLAL_A1", "cccc0000111shhhhllllmmmm1001nnnn", Multiply::SmlalA1),
        row!("UMLAL_A1", "cccc0000101shhhhllllmmmm1001nnnn", Multiply::SmlalA1),
        row!("SMULBB_SMULBT_SMULTB_SMULTT", "cccc00010110dddd0000mmmm1xx0nnnn", Multiply::SmulXy),
        row!("SMULWB_SMULWT", "cccc00010010dddd0000mmmm1x10nnnn", Multiply::SmulXy),
        row!("USAD8", "cccc01111000dddd1111mmmm0001nnnn", Multiply::SmulXy),
        row!("SMULL_A1", "cccc0000110shhhhllllmmmm1001nnnn", Multiply::SmullA1),
        row!("UMULL_A1", "cccc0000100shhhhllllmmmm1001nnnn", Multiply::SmullA1),

        // Branches and breakpoints
        row!("BKPT", "cccc00010010iiiiiiiiiiii0111iiii", Branch::Bkpt),
        row!("BLX_register", "cccc000100101111111111110011mmmm", Branch::BlxRegister),
        row!("BL_BLX_immediate", "cccc1011iiiiiiiiiiiiiiiiiiiiiiii", Branch::BlBlxImmediate),
        row!("B", "cccc1010iiiiiiiiiiiiiiiiiiiiiiii", Branch::B),
        row!("Bx", "cccc000100101111111111110001mmmm", Branch::Bx),

        // Forbidden system space, barriers and reserved encodings
        row!("BLX_immediate", "1111101hiiiiiiiiiiiiiiiiiiiiiiii", System::Forbidden),
        row!("CDP2", "11111110iiiiiiiiiiiiiiiiiii0iiii", System::Forbidden),
        row!("CDP", "cccc1110oooonnnnddddccccooo0mmmm", System::Forbidden),
        row!("CLREX", "11110101011111111111000000011111", System::Forbidden),
        row!("CPS", "111100010000iii00000000iii0iiiii", System::Forbidden),
        row!("DBG", "cccc001100100000111100001111iiii", System::Forbidden),
        row!("LDC2_immediate", "1111110pudw1nnnniiiiiiiiiiiiiiii", System::Forbidden),
        row!("LDC2_literal", "1111110pudw11111iiiiiiiiiiiiiiii", System::Forbidden),
        row!("LDC_immediate", "cccc110pudw1nnnnddddcccciiiiiiii", System::Forbidden),
        row!("LDC_literal", "cccc110pudw11111ddddcccciiiiiiii", System::Forbidden),
        row!("MCR2", "11111110iii0iiiittttiiiiiii1iiii", System::Forbidden),
        row!("MCRR2", "111111000100ssssttttiiiiiiiiiiii", System::Forbidden),
        row!("MCRR", "cccc11000100ttttttttccccoooommmm", System::Forbidden),
        row!("MCR", "cccc1110ooo0nnnnttttccccooo1mmmm", System::Forbidden),
        row!("MRC2", "11111110iii1iiiittttiiiiiii1iiii", System::Forbidden),
        row!("MRC", "cccc1110ooo1nnnnttttccccooo1mmmm", System::Forbidden),
        row!("MRRC2", "111111000101ssssttttiiiiiiiiiiii", System::Forbidden),
        row!("MRRC", "cccc11000101ttttttttccccoooommmm", System::Forbidden),
        row!("MSR_immediate", "cccc00110r10mmmm1111iiiiiiiiiiii", System::Forbidden),
        row!("RFE", "1111100pu0w1nnnn0000101000000000", System::Forbidden),
        row!("SETEND", "1111000100000001000000i000000000", System::Forbidden),
        row!("SEV", "cccc0011001000001111000000000100", System::Forbidden),
        row!("SRS", "1111100pu1w0110100000101000iiiii", System::Forbidden),
        row!("STC2", "1111110pudw0nnnniiiiiiiiiiiiiiii", System::Forbidden),
        row!("STC", "cccc110pudw0nnnnddddcccciiiiiiii", System::Forbidden),
        row!("SVC", "cccc1111iiiiiiiiiiiiiiiiiiiiiiii", System::Forbidden),
        row!("Unnamed", "11110100x001xxxxxxxxxxxxxxxxxxxx", System::Forbidden),
        row!("Unnamed", "11110110x001xxxxxxxxxxxxxxx0xxxx", System::Forbidden),
        row!("WFE", "cccc0011001000001111000000000010", System::Forbidden),
        row!("WFI", "cccc0011001000001111000000000011", System::Forbidden),
        row!("DMB", "1111010101111111111100000101xxxx", System::Dmb),
        row!("DSB", "1111010101111111111100000100xxxx", System::Dmb),
        row!("ISB", "1111010101111111111100000110xxxx", System::Isb),
        row!("Unnamed", "11110100xx11xxxxxxxxxxxxxxxxxxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "111101010011xxxxxxxxxxxxxxxxxxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "111101010111xxxxxxxxxxxx0000xxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "111101010111xxxxxxxxxxxx001xxxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "111101010111xxxxxxxxxxxx0111xxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "111101010111xxxxxxxxxxxx1xxxxxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "111101011x11xxxxxxxxxxxxxxxxxxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "11110101x001xxxxxxxxxxxxxxxxxxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "1111011xxx11xxxxxxxxxxxxxxx0xxxx", System::UnnamedUnpredictable),
        row!("Unnamed", "cccc00000101xxxxxxxxxxxx1001xxxx", System::UnnamedUndefined),
        row!("Unnamed", "cccc00000111xxxxxxxxxxxx1001xxxx", System::UnnamedUndefined),
        row!("Unnamed", "cccc1100000xnnnnxxxxccccxxxoxxxx", System::UnnamedUndefined),
        row!("Unallocated_hint", "cccc0011001000001111xxxxxxxxxxxx", System::Forbidden),

        // Loads and stores
        row!("LDMDA_LDMFA", "cccc100000w1nnnnrrrrrrrrrrrrrrrr", LoadStore::LdmDa),
        row!("LDMDB_LDMEA", "cccc100100w1nnnnrrrrrrrrrrrrrrrr", LoadStore::LdmDa),
        row!("LDMIB_LDMED", "cccc100110w1nnnnrrrrrrrrrrrrrrrr", LoadStore::LdmDa),
        row!("LDM_LDMIA_LDMFD", "cccc100010w1nnnnrrrrrrrrrrrrrrrr", LoadStore::LdmDa),
        row!("LDRB_immediate", "cccc010pu1w1nnnnttttiiiiiiiiiiii", LoadStore::LdrbImmediate),
        row!("LDRB_literal", "cccc0101u1011111ttttiiiiiiiiiiii", LoadStore::LdrbLiteral),
        row!("LDRB_register", "cccc011pu1w1nnnnttttiiiiitt0mmmm", LoadStore::LdrbRegister),
        row!("LDRD_immediate", "cccc000pu1w0nnnnttttiiii1101iiii", LoadStore::LdrdImmediate),
        row!("LDRD_literal", "cccc0001u1001111ttttiiii1101iiii", LoadStore::LdrdLiteral),
        row!("LDRD_register", "cccc000pu0w0nnnntttt00001101mmmm", LoadStore::LdrdRegister),
        row!("LDREXB", "cccc00011101nnnntttt111110011111", LoadStore::Ldrexb),
        row!("LDREX", "cccc00011001nnnntttt111110011111", LoadStore::Ldrexb),
        row!("STREXH", "cccc00011111nnnntttt111110011111", LoadStore::Ldrexb),
        row!("LDREXD", "cccc00011011nnnntttt111110011111", LoadStore::Ldrexd),
        row!("LDRH_immediate", "cccc000pu1w1nnnnttttiiii1011iiii", LoadStore::LdrhImmediate),
        row!("LDRSB_immediate", "cccc000pu1w1nnnnttttiiii1101iiii", LoadStore::LdrhImmediate),
        row!("LDRSH_immediate", "cccc000pu1w1nnnnttttiiii1111iiii", LoadStore::LdrhImmediate),
        row!("LDRH_literal", "cccc000pu1w11111ttttiiii1011iiii", LoadStore::LdrhLiteral),
        row!("LDRSB_literal", "cccc0001u1011111ttttiiii1101iiii", LoadStore::LdrhLiteral),
        row!("LDRSH_literal", "cccc0001u1011111ttttiiii1111iiii", LoadStore::LdrhLiteral),
        row!("LDRH_register", "cccc000pu0w1nnnntttt00001011mmmm", LoadStore::LdrhRegister),
        row!("LDRSB_register", "cccc000pu0w1nnnntttt00001101mmmm", LoadStore::LdrhRegister),
        row!("LDRSH_register", "cccc000pu0w1nnnntttt00001111mmmm", LoadStore::LdrhRegister),
        row!("LDR_immediate", "cccc010pu0w1nnnnttttiiiiiiiiiiii", LoadStore::LdrImmediate),
        row!("LDR_literal", "cccc0101u0011111ttttiiiiiiiiiiii", LoadStore::LdrLiteral),
        row!("LDR_register", "cccc011pu0w1nnnnttttiiiiitt0mmmm", LoadStore::LdrRegister),
        row!("PLD_PLDW_immediate", "11110101ur01nnnn1111iiiiiiiiiiii", LoadStore::PldImmediate),
        row!("PLD_PLDW_register", "11110111u001nnnn1111iiiiitt0mmmm", LoadStore::PldRegister),
        row!("PLD_PLDW_register", "11110111u101nnnn1111iiiiitt0mmmm", LoadStore::PldRegister),
        row!("PLD_literal", "11110101u10111111111iiiiiiiiiiii", LoadStore::PldLiteral),
        row!("PLI_immediate_literal", "11110100u101nnnn1111iiiiiiiiiiii", LoadStore::PliImmediateLiteral),
        row!("PLI_register", "11110110u101nnnn1111iiiiitt0mmmm", LoadStore::PliRegister),
        row!("STMDA_STMED", "cccc100000w0nnnnrrrrrrrrrrrrrrrr", LoadStore::StmDa),
        row!("STMDB_STMFD", "cccc100100w0nnnnrrrrrrrrrrrrrrrr", LoadStore::StmDa),
        row!("STMIB_STMFA", "cccc100110w0nnnnrrrrrrrrrrrrrrrr", LoadStore::StmDa),
        row!("STM_STMIA_STMEA", "cccc100010w0nnnnrrrrrrrrrrrrrrrr", LoadStore::StmDa),
        row!("STRB_immediate", "cccc010pu1w0nnnnttttiiiiiiiiiiii", LoadStore::StrbImmediate),
        row!("STRB_register", "cccc011pu1w0nnnnttttiiiiitt0mmmm", LoadStore::StrbRegister),
        row!("STR_register", "cccc011pd0w0nnnnttttiiiiitt0mmmm", LoadStore::StrbRegister),
        row!("STRD_immediate", "cccc000pu1w0nnnnttttiiii1111iiii", LoadStore::StrdImmediate),
        row!("STRD_register", "cccc000pu0w0nnnntttt00001111mmmm", LoadStore::StrdRegister),
        row!("STREXB", "cccc00011100nnnndddd11111001tttt", LoadStore::Strexb),
        row!("STREXH", "cccc00011110nnnndddd11111001tttt", LoadStore::Strexb),
        row!("STREX", "cccc00011000nnnndddd11111001tttt", LoadStore::Strexb),
        row!("STREXD", "cccc00011010nnnndddd11111001tttt", LoadStore::Strexd),
        row!("STRH_immediate", "cccc000pu1w0nnnnttttiiii1011iiii", LoadStore::StrhImmediate),
        row!("STRH_register", "cccc000pu0w0nnnntttt00001011mmmm", LoadStore::StrhRegister),
        row!("STR_immediate", "cccc010pu0w0nnnnttttiiiiiiiiiiii", LoadStore::StrImmediate),

        // Extension register and element loads/stores
        row!("VLD1_multiple_single_elements", "111101000d10nnnndddd0111ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VLD1_multiple_single_elements", "111101000d10nnnndddd1010ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VLD1_multiple_single_elements", "111101000d10nnnndddd0110ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VLD1_multiple_single_elements", "111101000d10nnnndddd0010ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VST1_multiple_single_elements", "111101000d00nnnndddd0111ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VST1_multiple_single_elements", "111101000d00nnnndddd1010ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VST1_multiple_single_elements", "111101000d00nnnndddd0110ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VST1_multiple_single_elements", "111101000d00nnnndddd0010ssaammmm", VectorLoadStore::Vld1Multiple),
        row!("VLD1_single_element_to_all_lanes", "111101001d10nnnndddd1100sstammmm", VectorLoadStore::Vld1AllLanes),
        row!("VLD1_single_element_to_one_lane", "111101001d10nnnnddddss00aaaammmm", VectorLoadStore::Vld1OneLane),
        row!("VST1_single_element_from_one_lane", "111101001d00nnnnddddss00aaaammmm", VectorLoadStore::Vld1OneLane),
        row!("VLD2_multiple_2_element_structures", "111101000d10nnnndddd1000ssaammmm", VectorLoadStore::Vld2Multiple),
        row!("VLD2_multiple_2_element_structures", "111101000d10nnnndddd1001ssaammmm", VectorLoadStore::Vld2Multiple),
        row!("VLD2_multiple_2_element_structures", "111101000d10nnnndddd0011ssaammmm", VectorLoadStore::Vld2Multiple),
        row!("VST2_multiple_2_element_structures", "111101000d00nnnndddd1000ssaammmm", VectorLoadStore::Vld2Multiple),
        row!("VST2_multiple_2_element_structures", "111101000d00nnnndddd1001ssaammmm", VectorLoadStore::Vld2Multiple),
        row!("VST2_multiple_2_element_structures", "111101000d00nnnndddd0011ssaammmm", VectorLoadStore::Vld2Multiple),
        row!("VLD2_single_2_element_structure_to_all_lanes", "111101001d10nnnndddd1101sstammmm", VectorLoadStore::Vld2AllLanes),
        row!("VLD2_single_2_element_structure_to_one_lane", "111101001d10nnnnddddss01aaaammmm", VectorLoadStore::Vld2OneLane),
        row!("VST2_single_2_element_structure_from_one_lane", "111101001d00nnnnddddss01aaaammmm", VectorLoadStore::Vld2OneLane),
        row!("VLD3_multiple_3_element_structures", "111101000d10nnnndddd0100ssaammmm", VectorLoadStore::Vld3Multiple),
        row!("VLD3_multiple_3_element_structures", "111101000d10nnnndddd0101ssaammmm", VectorLoadStore::Vld3Multiple),
        row!("VST3_multiple_3_element_structures", "111101000d00nnnndddd0100ssaammmm", VectorLoadStore::Vld3Multiple),
        row!("VST3_multiple_3_element_structures", "111101000d00nnnndddd0101ssaammmm", VectorLoadStore::Vld3Multiple),
        row!("VLD3_single_3_element_structure_to_all_lanes", "111101001d10nnnndddd1110sstammmm", VectorLoadStore::Vld3AllLanes),
        row!("VLD3_single_3_element_structure_to_one_lane", "111101001d10nnnnddddss10aaaammmm", VectorLoadStore::Vld3OneLane),
        row!("VST3_single_3_element_structure_from_one_lane", "111101001d00nnnnddddss10aaaammmm", VectorLoadStore::Vld3OneLane),
        row!("VLD4_multiple_4_element_structures", "111101000d10nnnndddd0000ssaammmm", VectorLoadStore::Vld4Multiple),
        row!("VLD4_multiple_4_element_structures", "111101000d10nnnndddd0001ssaammmm", VectorLoadStore::Vld4Multiple),
        row!("VST4_multiple_4_element_structures", "111101000d00nnnndddd0000ssaammmm", VectorLoadStore::Vld4Multiple),
        row!("VST4_multiple_4_element_structures", "111101000d00nnnndddd0001ssaammmm", VectorLoadStore::Vld4Multiple),
        row!("VLD4_single_4_element_structure_to_all_lanes", "111101001d10nnnndddd1111sstammmm", VectorLoadStore::Vld4AllLanes),
        row!("VLD4_single_4_element_structure_to_one_lane", "111101001d10nnnnddddss11aaaammmm", VectorLoadStore::Vld4OneLane),
        row!("VST4_single_4_element_structure_form_one_lane", "111101001d00nnnnddddss11aaaammmm", VectorLoadStore::Vld4OneLane),
        row!("VLDM", "cccc110pudw1nnnndddd1010iiiiiiii", VectorLoadStore::VldmSingle),
        row!("VLDM", "cccc110pudw1nnnndddd1011iiiiiiii", VectorLoadStore::VldmDouble),
        row!("VLDR", "cccc1101ud01nnnndddd1010iiiiiiii", VectorLoadStore::Vldr),
        row!("VLDR", "cccc1101ud01nnnndddd1011iiiiiiii", VectorLoadStore::Vldr),
        row!("VPOP", "cccc11001d111101dddd1010iiiiiiii", VectorLoadStore::VpopSingle),
        row!("VPUSH", "cccc11010d101101dddd1010iiiiiiii", VectorLoadStore::VpopSingle),
        row!("VPOP", "cccc11001d111101dddd1011iiiiiiii", VectorLoadStore::VpopDouble),
        row!("VPUSH", "cccc11010d101101dddd1011iiiiiiii", VectorLoadStore::VpopDouble),
        row!("VSTM", "cccc110pudw0nnnndddd1010iiiiiiii", VectorLoadStore::VstmSingle),
        row!("VSTM", "cccc110pudw0nnnndddd1011iiiiiiii", VectorLoadStore::VstmDouble),
        row!("VSTR", "cccc1101ud00nnnndddd1010iiiiiiii", VectorLoadStore::Vstr),
        row!("VSTR", "cccc1101ud00nnnndddd1011iiiiiiii", VectorLoadStore::Vstr),

        // VFP data processing and core transfers
        row!("MOVE_scalar_to_ARM_core_register", "cccc1110iii1nnnntttt1011nii10000", Vfp::MoveScalarToCore),
        row!("VABS", "cccc11101d110000dddd101s11m0mmmm", Vfp::VfpMiscellaneous),
        row!("VCMP_VCMPE", "cccc11101d110100dddd101se1m0mmmm", Vfp::VfpMiscellaneous),
        row!("VCMP_VCMPE", "cccc11101d110101dddd101se1000000", Vfp::VfpMiscellaneous),
        row!("VCVTB_VCVTT", "cccc11101d11001odddd1010t1m0mmmm", Vfp::VfpMiscellaneous),
        row!("VCVT_between_double_precision_and_single_precision", "cccc11101d110111dddd101s11m0mmmm", Vfp::VfpMiscellaneous),
        row!("VMOV_immediate", "cccc11101d11iiiidddd101s0000iiii", Vfp::VfpMiscellaneous),
        row!("VMOV_register", "cccc11101d110000dddd101s01m0mmmm", Vfp::VfpMiscellaneous),
        row!("VNEG", "cccc11101d110001dddd101s01m0mmmm", Vfp::VfpMiscellaneous),
        row!("VSQRT", "cccc11101d110001dddd101s11m0mmmm", Vfp::VfpMiscellaneous),
        row!("VADD_floating_point", "cccc11100d11nnnndddd101sn0m0mmmm", Vfp::VaddFloatingPoint),
        row!("VDIV", "cccc11101d00nnnndddd101sn0m0mmmm", Vfp::VaddFloatingPoint),
        row!("VFMA_VFMS", "cccc11101d10nnnndddd101snom0mmmm", Vfp::VaddFloatingPoint),
        row!("VFNMA_VFNMS", "cccc11101d01nnnndddd101snom0mmmm", Vfp::VaddFloatingPoint),
        row!("VMLA_VMLS_floating_point", "cccc11100d00nnnndddd101snom0mmmm", Vfp::VaddFloatingPoint),
        row!("VMUL_floating_point", "cccc11100d10nnnndddd101sn0m0mmmm", Vfp::VaddFloatingPoint),
        row!("VNMLA_VNMLS", "cccc11100d01nnnndddd101snom0mmmm", Vfp::VaddFloatingPoint),
        row!("VNMUL", "cccc11100d10nnnndddd101sn1m0mmmm", Vfp::VaddFloatingPoint),
        row!("VSUB_floating_point", "cccc11100d11nnnndddd101sn1m0mmmm", Vfp::VaddFloatingPoint),
        row!("VCVT_VCVTR_between_floating_point_and_integer_Floating_point", "cccc11101d111ooodddd101sp1m0mmmm", Vfp::VcvtFloatInteger),
        row!("VCVT_between_floating_point_and_fixed_point_Floating_point", "cccc11101d111o1udddd101fx1i0iiii", Vfp::VcvtFixedPointVfp),
        row!("VDUP_arm_core_register", "cccc11101bq0ddddtttt1011d0e10000", Vfp::VdupCore),
        row!("VMOV_ARM_core_register_to_scalar", "cccc11100ii0ddddtttt1011dii10000", Vfp::VmovCoreToScalar),
        row!("VMOV_between_ARM_core_register_and_single_precision_register", "cccc1110000onnnntttt1010n0010000", Vfp::VmovCoreSingle),
        row!("VMOV_between_two_ARM_core_registers_and_a_doubleword_extension_register", "cccc1100010otttttttt101100m1mmmm", Vfp::VmovTwoCoreDouble),
        row!("VMOV_between_two_ARM_core_registers_and_two_single_precision_registers", "cccc1100010otttttttt101000m1mmmm", Vfp::VmovTwoCoreSingles),
        row!("VMRS", "cccc111011110001tttt101000010000", Vfp::Vmrs),
        row!("VMSR", "cccc111011100001tttt101000010000", Vfp::Vmsr),

        // Advanced SIMD
        row!("CVT_between_half_precision_and_single_precision", "111100111d11ss10dddd011p00m0mmmm", Simd::CvtHalfSingle),
        row!("VABAL_A2", "1111001u1dssnnnndddd0101n0m0mmmm", Simd::Vabal),
        row!("VABDL_integer_A2", "1111001u1dssnnnndddd0111n0m0mmmm", Simd::Vabal),
        row!("VMLAL_VMLSL_integer_A2", "1111001u1dssnnnndddd10p0n0m0mmmm", Simd::Vabal),
        row!("VMULL_integer_A2", "1111001u1dssnnnndddd1100n0m0mmmm", Simd::Vabal),
        row!("VABA", "1111001u0dssnnnndddd0111nqm1mmmm", Simd::Vaba),
        row!("VABD", "1111001u0dssnnnndddd0111nqm0mmmm", Simd::Vaba),
        row!("VCEQ_register_A1", "111100110dssnnnndddd1000nqm1mmmm", Simd::Vaba),
        row!("VCGE_register_A1", "1111001u0dssnnnndddd0011nqm1mmmm", Simd::Vaba),
        row!("VCGT_register_A1", "1111001u0dssnnnndddd0011nqm0mmmm", Simd::Vaba),
        row!("VHADD", "1111001u0dssnnnndddd0000nqm0mmmm", Simd::Vaba),
        row!("VHSUB", "1111001u0dssnnnndddd0010nqm0mmmm", Simd::Vaba),
        row!("VMAX", "1111001u0dssnnnndddd0110nqm0mmmm", Simd::Vaba),
        row!("VMIN", "1111001u0dssnnnndddd0110nqm1mmmm", Simd::Vaba),
        row!("VMLA_integer_A1", "111100100dssnnnndddd1001nqm0mmmm", Simd::Vaba),
        row!("VMLS_integer_A1", "111100110dssnnnndddd1001nqm0mmmm", Simd::Vaba),
        row!("VMUL_integer_A1", "111100100dssnnnndddd1001nqm1mmmm", Simd::Vaba),
        row!("VRHADD", "1111001u0dssnnnndddd0001nqm0mmmm", Simd::Vaba),
        row!("VTST", "111100100dssnnnndddd1000nqm1mmmm", Simd::Vaba),
        row!("VABD_floating_point", "111100110d1snnnndddd1101nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VACGE", "111100110d0snnnndddd1110nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VACGT", "111100110d1snnnndddd1110nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VADD_floating_point_A1", "111100100d0snnnndddd1101nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VCEQ_register_A2", "111100100d0snnnndddd1110nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VCGE_register_A2", "111100110d0snnnndddd1110nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VCGT_register_A2", "111100110d1snnnndddd1110nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VFMA_A1", "111100100d00nnnndddd1100nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VFMS_A1", "111100100d10nnnndddd1100nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VMAX_floating_point", "111100100d0snnnndddd1111nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VMIN_floating_point", "111100100d1snnnndddd1111nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VMLA_floating_point_A1", "111100100d0snnnndddd1101nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VMLS_floating_point_A1", "111100100d1snnnndddd1101nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VMUL_floating_point_A1", "111100110d0snnnndddd1101nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VRECPS", "111100100d0snnnndddd1111nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VRSQRTS", "111100100d1snnnndddd1111nqm1mmmm", Simd::VabdFloatingPoint),
        row!("VSUB_floating_point_A1", "111100100d1snnnndddd1101nqm0mmmm", Simd::VabdFloatingPoint),
        row!("VABS_A1", "111100111d11ss01dddd00110qm0mmmm", Simd::VabsInteger),
        row!("VCEQ_immediate_0", "111100111d11ss01dddd00010qm0mmmm", Simd::VabsInteger),
        row!("VCGE_immediate_0", "111100111d11ss01dddd00001qm0mmmm", Simd::VabsInteger),
        row!("VCGT_immediate_0", "111100111d11ss01dddd00000qm0mmmm", Simd::VabsInteger),
        row!("VCLE_immediate_0", "111100111d11ss01dddd00011qm0mmmm", Simd::VabsInteger),
        row!("VCLS", "111100111d11ss00dddd01000qm0mmmm", Simd::VabsInteger),
        row!("VCLT_immediate_0", "111100111d11ss01dddd00100qm0mmmm", Simd::VabsInteger),
        row!("VCLZ", "111100111d11ss00dddd01001qm0mmmm", Simd::VabsInteger),
        row!("VNEG", "111100111d11ss01dddd00111qm0mmmm", Simd::VabsInteger),
        row!("VPADAL", "111100111d11ss00dddd0110pqm0mmmm", Simd::VabsInteger),
        row!("VPADDL", "111100111d11ss00dddd0010pqm0mmmm", Simd::VabsInteger),
        row!("VQABS", "111100111d11ss00dddd01110qm0mmmm", Simd::VabsInteger),
        row!("VQNEG", "111100111d11ss00dddd01111qm0mmmm", Simd::VabsInteger),
        row!("VABS_A1", "111100111d11ss01dddd01110qm0mmmm", Simd::VabsFloatingPoint),
        row!("VCEQ_immediate_0", "111100111d11ss01dddd01010qm0mmmm", Simd::VabsFloatingPoint),
        row!("VCGE_immediate_0", "111100111d11ss01dddd01001qm0mmmm", Simd::VabsFloatingPoint),
        row!("VCGT_immediate_0", "111100111d11ss01dddd01000qm0mmmm", Simd::VabsFloatingPoint),
        row!("VCLE_immediate_0", "111100111d11ss01dddd01011qm0mmmm", Simd::VabsFloatingPoint),
        row!("VCLT_immediate_0", "111100111d11ss01dddd01100qm0mmmm", Simd::VabsFloatingPoint),
        row!("VCVT", "111100111d11ss11dddd011ppqm0mmmm", Simd::VabsFloatingPoint),
        row!("VNEG", "111100111d11ss01dddd01111qm0mmmm", Simd::VabsFloatingPoint),
        row!("VRECPE", "111100111d11ss11dddd010f0qm0mmmm", Simd::VabsFloatingPoint),
        row!("VRSQRTE", "111100111d11ss11dddd010f1qm0mmmm", Simd::VabsFloatingPoint),
        row!("VADDHN", "111100101dssnnnndddd0100n0m0mmmm", Simd::Vaddhn),
        row!("VRADDHN", "111100111dssnnnndddd0100n0m0mmmm", Simd::Vaddhn),
        row!("VRSUBHN", "111100111dssnnnndddd0110n0m0mmmm", Simd::Vaddhn),
        row!("VSUBHN", "111100101dssnnnndddd0110n0m0mmmm", Simd::Vaddhn),
        row!("VADDL_VADDW", "1111001u1dssnnnndddd000pn0m0mmmm", Simd::VaddlVaddw),
        row!("VSUBL_VSUBW", "1111001u1dssnnnndddd001pn0m0mmmm", Simd::VaddlVaddw),
        row!("VADD_integer", "111100100dssnnnndddd1000nqm0mmmm", Simd::VaddInteger),
        row!("VAND_register", "111100100d00nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VBIC_register", "111100100d01nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VBIF", "111100110d11nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VBIT", "111100110d10nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VBSL", "111100110d01nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VEOR", "111100110d00nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VORN_register", "111100100d11nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VORR_register_or_VMOV_register_A1", "111100100d10nnnndddd0001nqm1mmmm", Simd::VaddInteger),
        row!("VQADD", "1111001u0dssnnnndddd0000nqm1mmmm", Simd::VaddInteger),
        row!("VQRSHL", "1111001u0dssnnnndddd0101nqm1mmmm", Simd::VaddInteger),
        row!("VQSHL_register", "1111001u0dssnnnndddd0100nqm1mmmm", Simd::VaddInteger),
        row!("VQSUB", "1111001u0dssnnnndddd0010nqm1mmmm", Simd::VaddInteger),
        row!("VRSHL", "1111001u0dssnnnndddd0101nqm0mmmm", Simd::VaddInteger),
        row!("VSHL_register", "1111001u0dssnnnndddd0100nqm0mmmm", Simd::VaddInteger),
        row!("VSUB_integer", "111100110dssnnnndddd1000nqm0mmmm", Simd::VaddInteger),
        row!("VBIC_immediate", "1111001i1d000mmmdddd0xx10q11mmmm", Simd::VbicImmediate),
        row!("VBIC_immediate", "1111001i1d000mmmdddd10x10q11mmmm", Simd::VbicImmediate),
        row!("VORR_immediate", "1111001i1d000mmmdddd0xx10q01mmmm", Simd::VbicImmediate),
        row!("VORR_immediate", "1111001i1d000mmmdddd10x10q01mmmm", Simd::VbicImmediate),
        row!("VCNT", "111100111d11ss00dddd01010qm0mmmm", Simd::Vcnt),
        row!("VMVN_register", "111100111d11ss00dddd01011qm0mmmm", Simd::Vcnt),
        row!("VCVT_between_floating_point_and_fixed_point", "1111001u1diiiiiidddd111p0qm1mmmm", Simd::VcvtFixedPoint),
        row!("VMLAL_by_scalar_A2", "1111001u1dssnnnndddd0010n1m0mmmm", Simd::VmlalByScalar),
        row!("VMLSL_by_scalar_A2", "1111001u1dssnnnndddd0110n1m0mmmm", Simd::VmlalByScalar),
        row!("VMULL_by_scalar_A2", "1111001u1dssnnnndddd1010n1m0mmmm", Simd::VmlalByScalar),
        row!("VQDMLAL_A1", "111100101dssnnnndddd0011n1m0mmmm", Simd::VmlalByScalar),
        row!("VQDMLSL_A1", "111100101dssnnnndddd0111n1m0mmmm", Simd::VmlalByScalar),
        row!("VQDMULL_A2", "111100101dssnnnndddd1011n1m0mmmm", Simd::VmlalByScalar),
        row!("VMLA_by_scalar_A1", "1111001q1dssnnnndddd0001n1m0mmmm", Simd::VmlaByScalarFloatingPoint),
        row!("VMLS_by_scalar_A1", "1111001q1dssnnnndddd0101n1m0mmmm", Simd::VmlaByScalarFloatingPoint),
        row!("VMUL_by_scalar_A1", "1111001q1dssnnnndddd1001n1m0mmmm", Simd::VmlaByScalarFloatingPoint),
        row!("VMLA_by_scalar_A1", "1111001q1dssnnnndddd0000n1m0mmmm", Simd::VmlaByScalarInteger),
        row!("VMLS_by_scalar_A1", "1111001q1dssnnnndddd0100n1m0mmmm", Simd::VmlaByScalarInteger),
        row!("VMUL_by_scalar_A1", "1111001q1dssnnnndddd1000n1m0mmmm", Simd::VmlaByScalarInteger),
        row!("VQDMULH_A2", "1111001q1dssnnnndddd1100n1m0mmmm", Simd::VmlaByScalarInteger),
        row!("VQRDMULH", "1111001q1dssnnnndddd1101n1m0mmmm", Simd::VmlaByScalarInteger),
        row!("VMOVN", "111100111d11ss10dddd001000m0mmmm", Simd::Vmovn),
        row!("VMOV_immediate_A1", "1111001m1d000mmmdddd0xx00q01mmmm", Simd::VmovImmediate),
        row!("VMOV_immediate_A1", "1111001m1d000mmmdddd10x00q01mmmm", Simd::VmovImmediate),
        row!("VMOV_immediate_A1", "1111001m1d000mmmdddd11xx0q01mmmm", Simd::VmovImmediate),
        row!("VMOV_immediate_A1", "1111001m1d000mmmdddd11100q11mmmm", Simd::VmovImmediate),
        row!("VMULL_polynomial_A2", "1111001u1dssnnnndddd1110n0m0mmmm", Simd::VmullPolynomial),
        row!("VMUL_polynomial_A1", "111100110dssnnnndddd1001nqm1mmmm", Simd::VmulPolynomial),
        row!("VMVN_immediate", "1111001i1d000mmmdddd0xx00q11mmmm", Simd::VmvnImmediate),
        row!("VMVN_immediate", "1111001i1d000mmmdddd10x00q11mmmm", Simd::VmvnImmediate),
        row!("VMVN_immediate", "1111001i1d000mmmdddd110x0q11mmmm", Simd::VmvnImmediate),
        row!("VPADD_floating_point", "111100110d0snnnndddd1101nqm0mmmm", Simd::VpaddFloatingPoint),
        row!("VPMAX", "111100110d0snnnndddd1111nqm0mmmm", Simd::VpaddFloatingPoint),
        row!("VPMIN", "111100110d1snnnndddd1111nqm0mmmm", Simd::VpaddFloatingPoint),
        row!("VPADD_integer", "111100100dssnnnndddd1011nqm1mmmm", Simd::VpaddInteger),
        row!("VPMAX", "1111001u0dssnnnndddd1010nqm0mmmm", Simd::VpaddInteger),
        row!("VPMIN", "1111001u0dssnnnndddd1010nqm1mmmm", Simd::VpaddInteger),
        row!("VQDMLAL_VQDMLSL_A1", "111100101dssnnnndddd10p1n0m0mmmm", Simd::Vqdmlal),
        row!("VQDMULL_A1", "111100101dssnnnndddd1101n0m0mmmm", Simd::Vqdmlal),
        row!("VQDMULH_A1", "111100100dssnnnndddd1011nqm0mmmm", Simd::Vqdmulh),
        row!("VQRDMULH_A1", "111100110dssnnnndddd1011nqm0mmmm", Simd::Vqdmulh),
        row!("VQMOVN", "111100111d11ss10dddd00101pm0mmmm", Simd::Vqmovn),
        row!("VQMOVUN", "111100111d11ss10dddd001001m0mmmm", Simd::Vqmovn),
        row!("VQRSHRN", "1111001u1diiiiiidddd100101m1mmmm", Simd::Vqrshrn),
        row!("VQRSHRUN", "111100111diiiiiidddd100001m1mmmm", Simd::Vqrshrn),
        row!("VQSHRN", "1111001u1diiiiiidddd100100m1mmmm", Simd::Vqrshrn),
        row!("VQSHRUN", "111100111diiiiiidddd100000m1mmmm", Simd::Vqrshrn),
        row!("VQSHL_VQSHLU_immediate", "1111001u1diiiiiidddd011plqm1mmmm", Simd::VqshlImmediate),
        row!("VREV16", "111100111d11ss00dddd00010qm0mmmm", Simd::Vrev),
        row!("VREV32", "111100111d11ss00dddd00001qm0mmmm", Simd::Vrev),
        row!("VREV64", "111100111d11ss00dddd00000qm0mmmm", Simd::Vrev),
        row!("VRSHRN", "111100101diiiiiidddd100001m1mmmm", Simd::Vrshrn),
        row!("VSHRN", "111100101diiiiiidddd100000m1mmmm", Simd::Vrshrn),
        row!("VRSHR", "1111001u1diiiiiidddd0010lqm1mmmm", Simd::Vrshr),
        row!("VRSRA", "1111001u1diiiiiidddd0011lqm1mmmm", Simd::Vrshr),
        row!("VSHL_immediate", "111100101diiiiiidddd0101lqm1mmmm", Simd::Vrshr),
        row!("VSHR", "1111001u1diiiiiidddd0000lqm1mmmm", Simd::Vrshr),
        row!("VSLI", "111100111diiiiiidddd0101lqm1mmmm", Simd::Vrshr),
        row!("VSRA", "1111001u1diiiiiidddd0001lqm1mmmm", Simd::Vrshr),
        row!("VSRI", "111100111diiiiiidddd0100lqm1mmmm", Simd::Vrshr),
        row!("VSHLL_A1_or_VMOVL", "1111001u1diiiiiidddd101000m1mmmm", Simd::VshllA1),
        row!("VSHLL_A2", "111100111d11ss10dddd001100m0mmmm", Simd::VshllA2),
        row!("VSWP", "111100111d11ss10dddd00000qm0mmmm", Simd::Vswp),
        row!("VTRN", "111100111d11ss10dddd00001qm0mmmm", Simd::Vtrn),
        row!("VUZP", "111100111d11ss10dddd00010qm0mmmm", Simd::Vuzp),
        row!("VZIP", "111100111d11ss10dddd00011qm0mmmm", Simd::Vuzp),
    ]
}
