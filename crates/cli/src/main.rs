// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{bail, Context, Result};
use armval_config::ValidationPolicy;
use armval_core::{
    report, ClassDecoder, Classification, DecodeTable, Instruction, Report, SafetyLevel,
};
use armval_loader::CodeImage;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{error, info};

const EXIT_ACCEPTED: u8 = 0;
const EXIT_REJECTED: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_DECODER_ERROR: u8 = 3;

fn parse_u32_addr(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex address '{}': {}", s, e))
    } else {
        u32::from_str(trimmed).map_err(|e| format!("Invalid address '{}': {}", s, e))
    }
}

/// Instruction words are always hex; the `0x` prefix and `_` separators are
/// optional.
fn parse_word(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .replace('_', "");
    u32::from_str_radix(&digits, 16).map_err(|e| format!("Invalid instruction word '{}': {}", s, e))
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ArmVal: classify A32 instructions for sandboxed execution",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify individual instruction words.
    Decode(DecodeArgs),

    /// Classify every executable word of an ELF or raw image.
    Scan(ScanArgs),

    /// List the decode table rows in lookup order with their capabilities.
    Rules(RulesArgs),
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Instruction words in hex (e.g. e1a00001 or 0xE1A0_0001)
    #[arg(required = true, value_parser = parse_word)]
    words: Vec<u32>,

    /// Validation policy (YAML or JSON)
    #[arg(short, long)]
    policy: Option<PathBuf>,

    /// Print a JSON array instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ScanArgs {
    /// Path to the image
    path: PathBuf,

    /// Treat the image as a flat little-endian word stream
    #[arg(long)]
    raw: bool,

    /// Load address of a raw image
    #[arg(long, value_parser = parse_u32_addr, default_value = "0")]
    base: u32,

    /// Validation policy (YAML or JSON)
    #[arg(short, long)]
    policy: Option<PathBuf>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RulesArgs {
    /// Print the rows as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SegmentReport<'a> {
    segment: &'a str,
    address: u32,
    #[serde(flatten)]
    report: &'a Report,
}

#[derive(Debug, Serialize)]
struct RuleRow {
    rule: &'static str,
    pattern: &'static str,
    kind: &'static str,
    group: &'static str,
    capabilities: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays machine readable.
    let level = if cli.trace {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Decode(args) => run_decode(args),
        Commands::Scan(args) => run_scan(args),
        Commands::Rules(args) => run_rules(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn load_policy(path: Option<&Path>) -> Result<ValidationPolicy> {
    match path {
        Some(path) => ValidationPolicy::from_file(path),
        None => Ok(ValidationPolicy::default()),
    }
}

fn run_decode(args: DecodeArgs) -> Result<u8> {
    let policy = load_policy(args.policy.as_deref())?;
    let table = DecodeTable::arm32();
    let classified: Vec<Classification> = args
        .words
        .iter()
        .map(|&w| table.classify(Instruction::new(w)))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
    } else {
        for c in &classified {
            println!("{}", describe(c));
        }
    }

    let levels: Vec<SafetyLevel> = classified.iter().map(|c| c.safety).collect();
    Ok(exit_code_for(&policy, &levels))
}

fn run_scan(args: ScanArgs) -> Result<u8> {
    let policy = load_policy(args.policy.as_deref())?;
    let limit = policy.max_image_bytes()?;
    let bytes = armval_loader::read_image(&args.path, limit)?;
    let image: CodeImage = if args.raw {
        armval_loader::load_raw_bytes(&bytes, args.base)
    } else {
        armval_loader::load_elf_bytes(&bytes)
            .with_context(|| format!("Failed to load {:?}", args.path))?
    };
    if image.word_count() == 0 {
        bail!("{:?} contains no executable code", args.path);
    }
    info!(
        "Loaded {:?}: {} segments, {} words",
        args.path,
        image.segments.len(),
        image.word_count()
    );

    let table = DecodeTable::arm32();
    let reports: Vec<Report> = image
        .segments
        .iter()
        .map(|s| Report::build(&table, &policy, s.address, &s.words))
        .collect();

    if args.json {
        let out: Vec<SegmentReport> = image
            .segments
            .iter()
            .zip(&reports)
            .map(|(s, r)| SegmentReport {
                segment: &s.name,
                address: s.address,
                report: r,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (segment, r) in image.segments.iter().zip(&reports) {
            print_summary(&segment.name, r);
        }
    }

    let code = if reports.iter().any(Report::has_decoder_error) {
        EXIT_DECODER_ERROR
    } else if reports.iter().all(Report::accepted) {
        EXIT_ACCEPTED
    } else {
        EXIT_REJECTED
    };
    Ok(code)
}

fn run_rules(args: RulesArgs) -> Result<u8> {
    let table = DecodeTable::arm32();
    let rows: Vec<RuleRow> = table
        .rows()
        .iter()
        .map(|row| RuleRow {
            rule: row.rule,
            pattern: row.text,
            kind: row.kind.name(),
            group: row.kind.group(),
            capabilities: row.kind.capabilities().names(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "{:<40} {} {:<28} {}",
                row.rule, row.pattern, row.kind, row.capabilities
            );
        }
    }
    Ok(EXIT_ACCEPTED)
}

fn exit_code_for(policy: &ValidationPolicy, levels: &[SafetyLevel]) -> u8 {
    if levels.contains(&SafetyLevel::DecoderError) {
        EXIT_DECODER_ERROR
    } else if levels.iter().any(|&l| report::rejects(policy, l)) {
        EXIT_REJECTED
    } else {
        EXIT_ACCEPTED
    }
}

/// One line per word: `word rule kind safety defs uses` then whichever
/// optional facts hold.
fn describe(c: &Classification) -> String {
    let mut line = format!(
        "{} {} {} {} defs={} uses={}",
        c.word,
        c.rule.unwrap_or("-"),
        c.kind.unwrap_or("-"),
        c.safety,
        c.defs,
        c.uses
    );
    let mut push = |s: String| {
        line.push(' ');
        line.push_str(&s);
    };
    if let Some(r) = c.base_address_register {
        push(format!("base={}", r));
    }
    if c.writeback_small_immediate {
        push("writeback".to_string());
    }
    if c.literal_load {
        push("literal-load".to_string());
    }
    if c.literal_pool_head {
        push("pool-head".to_string());
    }
    if c.thread_address_pointer_load {
        push("tp-load".to_string());
    }
    if let Some(r) = c.branch_target_register {
        push(format!("target={}", r));
    }
    if let Some(off) = c.branch_target_offset {
        push(format!("offset={:+}", off));
    }
    if c.clears_code_mask {
        push("clears-code-mask".to_string());
    }
    if c.clears_data_mask {
        push("clears-data-mask".to_string());
    }
    if let Some(r) = c.z_test_register {
        push(format!("z-test={}", r));
    }
    if let Some(s) = c.code_replacement_sentinel {
        push(format!("sentinel={}", s));
    }
    line
}

fn print_summary(name: &str, r: &Report) {
    let verdict = if r.accepted() { "ACCEPTED" } else { "REJECTED" };
    println!(
        "{} @ {:#010x}: {} ({} words, {} pool words, worst {})",
        name, r.base_address, verdict, r.classified, r.pool_words, r.worst
    );
    for (level, count) in &r.counts {
        println!("  {:<20} {}", level.as_str(), count);
    }
    for v in &r.violations {
        println!(
            "  {:#010x}: {} {} {}",
            v.address,
            v.word,
            v.rule.unwrap_or("-"),
            v.safety
        );
    }
    let hidden = r.violation_count - r.violations.len();
    if hidden > 0 {
        println!("  ... {} more violations", hidden);
    }
}
