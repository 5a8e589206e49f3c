// ArmVal - ARM32 Sandbox Instruction Classifier
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{anyhow, bail, Context, Result};
use goblin::elf::header::EM_ARM;
use goblin::elf::program_header::{PF_X, PT_LOAD};
use goblin::elf::section_header::{SHF_EXECINSTR, SHT_NOBITS};
use goblin::elf::Elf;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// A run of instruction words at a fixed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSegment {
    pub name: String,
    pub address: u32,
    pub words: Vec<u32>,
}

/// Every executable region of an image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeImage {
    pub entry: u32,
    pub segments: Vec<CodeSegment>,
}

impl CodeImage {
    pub fn word_count(&self) -> usize {
        self.segments.iter().map(|s| s.words.len()).sum()
    }
}

/// Reads an image file, refusing anything larger than `limit` bytes.
pub fn read_image(path: &Path, limit: Option<u64>) -> Result<Vec<u8>> {
    if let Some(limit) = limit {
        let len = fs::metadata(path)
            .with_context(|| format!("Failed to stat image: {:?}", path))?
            .len();
        if len > limit {
            bail!("Image {:?} is {} bytes, limit is {} bytes", path, len, limit);
        }
    }
    fs::read(path).with_context(|| format!("Failed to read image: {:?}", path))
}

pub fn load_elf(path: &Path) -> Result<CodeImage> {
    let buffer = read_image(path, None)?;
    load_elf_bytes(&buffer)
}

pub fn load_elf_bytes(buffer: &[u8]) -> Result<CodeImage> {
    let elf = Elf::parse(buffer).context("Failed to parse ELF binary")?;

    if elf.header.e_machine != EM_ARM {
        bail!("Not an ARM ELF (e_machine = {})", elf.header.e_machine);
    }
    if elf.is_64 {
        bail!("Expected a 32-bit ELF, found ELF64");
    }
    if !elf.little_endian {
        bail!("Big-endian ARM images are not supported");
    }

    info!("ELF Entry Point: {:#x}", elf.entry);
    let mut image = CodeImage {
        entry: elf.entry as u32,
        segments: Vec::new(),
    };

    for sh in &elf.section_headers {
        if sh.sh_flags & u64::from(SHF_EXECINSTR) == 0 || sh.sh_type == SHT_NOBITS {
            continue;
        }
        let name = elf
            .shdr_strtab
            .get_at(sh.sh_name)
            .unwrap_or("<unnamed>")
            .to_string();
        let data = slice(buffer, sh.sh_offset, sh.sh_size)
            .with_context(|| format!("Section {} out of bounds in ELF file", name))?;
        debug!(
            "Found executable section {}: Addr={:#x}, Size={} bytes",
            name, sh.sh_addr, sh.sh_size
        );
        image.segments.push(CodeSegment {
            words: words_of(&name, data),
            name,
            address: sh.sh_addr as u32,
        });
    }

    if elf.section_headers.is_empty() {
        for (idx, ph) in elf.program_headers.iter().enumerate() {
            if ph.p_type != PT_LOAD || ph.p_flags & PF_X == 0 || ph.p_filesz == 0 {
                continue;
            }
            let name = format!("segment{}", idx);
            let data = slice(buffer, ph.p_offset, ph.p_filesz)
                .with_context(|| format!("Segment {} out of bounds in ELF file", idx))?;
            debug!(
                "Found executable segment: Addr={:#x}, Size={} bytes",
                ph.p_vaddr, ph.p_filesz
            );
            image.segments.push(CodeSegment {
                words: words_of(&name, data),
                name,
                address: ph.p_vaddr as u32,
            });
        }
    }

    if image.segments.is_empty() {
        warn!("No executable code found in ELF file");
    }
    Ok(image)
}

/// Loads a flat little-endian word stream starting at `base`.
pub fn load_raw(path: &Path, base: u32) -> Result<CodeImage> {
    let buffer = read_image(path, None)?;
    Ok(load_raw_bytes(&buffer, base))
}

pub fn load_raw_bytes(buffer: &[u8], base: u32) -> CodeImage {
    CodeImage {
        entry: base,
        segments: vec![CodeSegment {
            name: "raw".to_string(),
            address: base,
            words: words_of("raw", buffer),
        }],
    }
}

fn slice(buffer: &[u8], offset: u64, size: u64) -> Result<&[u8]> {
    let start = usize::try_from(offset)?;
    let end = start
        .checked_add(usize::try_from(size)?)
        .ok_or_else(|| anyhow!("size overflow"))?;
    buffer
        .get(start..end)
        .ok_or_else(|| anyhow!("range {:#x}..{:#x} past end of file", start, end))
}

fn words_of(name: &str, data: &[u8]) -> Vec<u32> {
    let chunks = data.chunks_exact(4);
    let tail = chunks.remainder().len();
    if tail != 0 {
        warn!("Ignoring {} trailing bytes in {}", tail, name);
    }
    chunks
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CODE: [u32; 3] = [0xE280_0001, 0xE12F_FF1E, 0xE127_7777];

    fn code_bytes(extra: &[u8]) -> Vec<u8> {
        let mut out: Vec<u8> = CODE.iter().flat_map(|w| w.to_le_bytes()).collect();
        out.extend_from_slice(extra);
        out
    }

    fn header(machine: u16, phnum: u16, shoff: u32, shnum: u16, shstrndx: u16) -> Vec<u8> {
        let mut h = vec![0x7F, b'E', b'L', b'F', 1, 1, 1, 0];
        h.resize(16, 0);
        h.extend_from_slice(&2u16.to_le_bytes()); // ET_EXEC
        h.extend_from_slice(&machine.to_le_bytes());
        h.extend_from_slice(&1u32.to_le_bytes());
        h.extend_from_slice(&0x8000u32.to_le_bytes()); // entry
        h.extend_from_slice(&(if phnum > 0 { 52u32 } else { 0 }).to_le_bytes());
        h.extend_from_slice(&shoff.to_le_bytes());
        h.extend_from_slice(&0x0500_0000u32.to_le_bytes());
        h.extend_from_slice(&52u16.to_le_bytes());
        h.extend_from_slice(&32u16.to_le_bytes());
        h.extend_from_slice(&phnum.to_le_bytes());
        h.extend_from_slice(&40u16.to_le_bytes());
        h.extend_from_slice(&shnum.to_le_bytes());
        h.extend_from_slice(&shstrndx.to_le_bytes());
        h
    }

    fn section(fields: [u32; 10]) -> Vec<u8> {
        fields.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    /// ELF32 with `.text` at 0x8000 and a section string table.
    fn elf_with_sections(machine: u16, code: &[u8]) -> Vec<u8> {
        let strtab = b"\0.text\0.shstrtab\0";
        let code_off = 52u32;
        let str_off = code_off + code.len() as u32;
        let mut shoff = str_off + strtab.len() as u32;
        shoff = (shoff + 3) & !3;

        let mut elf = header(machine, 0, shoff, 3, 2);
        elf.extend_from_slice(code);
        elf.extend_from_slice(strtab);
        elf.resize(shoff as usize, 0);
        elf.extend(section([0; 10]));
        // .text: PROGBITS, ALLOC | EXECINSTR
        elf.extend(section([1, 1, 6, 0x8000, code_off, code.len() as u32, 0, 0, 4, 0]));
        // .shstrtab
        elf.extend(section([7, 3, 0, 0, str_off, strtab.len() as u32, 0, 0, 1, 0]));
        elf
    }

    /// ELF32 with one executable PT_LOAD and no section headers.
    fn elf_with_segment(code: &[u8]) -> Vec<u8> {
        let mut elf = header(EM_ARM, 1, 0, 0, 0);
        let code_off = 52u32 + 32;
        let n = code.len() as u32;
        for f in [1, code_off, 0x9000, 0x9000, n, n, 0x5, 0x1000] {
            elf.extend_from_slice(&f.to_le_bytes());
        }
        elf.extend_from_slice(code);
        elf
    }

    #[test]
    fn test_load_elf_sections() {
        let elf = elf_with_sections(EM_ARM, &code_bytes(&[]));
        let image = load_elf_bytes(&elf).unwrap();
        assert_eq!(image.entry, 0x8000);
        assert_eq!(image.segments.len(), 1);
        assert_eq!(image.segments[0].name, ".text");
        assert_eq!(image.segments[0].address, 0x8000);
        assert_eq!(image.segments[0].words, CODE.to_vec());
    }

    #[test]
    fn test_trailing_bytes_are_dropped() {
        let elf = elf_with_sections(EM_ARM, &code_bytes(&[0xAA, 0xBB]));
        let image = load_elf_bytes(&elf).unwrap();
        assert_eq!(image.word_count(), 3);
    }

    #[test]
    fn test_rejects_other_machines() {
        // EM_386
        let elf = elf_with_sections(3, &code_bytes(&[]));
        let err = load_elf_bytes(&elf).unwrap_err();
        assert!(err.to_string().contains("Not an ARM ELF"));
    }

    #[test]
    fn test_segment_fallback() {
        let image = load_elf_bytes(&elf_with_segment(&code_bytes(&[]))).unwrap();
        assert_eq!(image.segments.len(), 1);
        assert_eq!(image.segments[0].address, 0x9000);
        assert_eq!(image.segments[0].words, CODE.to_vec());
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(load_elf_bytes(b"not an elf at all").is_err());
    }

    #[test]
    fn test_load_raw_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&code_bytes(&[0x01])).unwrap();

        let image = load_raw(file.path(), 0x1_0000).unwrap();
        assert_eq!(image.entry, 0x1_0000);
        assert_eq!(image.segments[0].words, CODE.to_vec());
    }

    #[test]
    fn test_read_image_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&code_bytes(&[])).unwrap();

        assert!(read_image(file.path(), Some(12)).is_ok());
        let err = read_image(file.path(), Some(8)).unwrap_err();
        assert!(err.to_string().contains("limit is 8 bytes"));
    }
}
