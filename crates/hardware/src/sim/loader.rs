//! Hex Image Loader.
//!
//! This module reads memory images from text. It performs:
//! 1. **Parsing:** One hexadecimal word per line, optional `0x`/`0X` prefix, whitespace trimmed.
//! 2. **Capacity checking:** Rejects images larger than the target memory before anything is written.
//! 3. **File loading:** Wraps the parser with path-aware I/O errors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::common::error::{LoadError, MemoryRegion};

/// Parses a single line into a word.
///
/// # Errors
///
/// Returns [`LoadError::MalformedInput`] for blank lines, non-hex digits, or
/// values wider than 32 bits.
pub fn parse_hex_word(line: usize, text: &str) -> Result<u32, LoadError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).map_err(|source| LoadError::MalformedInput {
        line,
        text: trimmed.to_string(),
        source,
    })
}

/// Parses an image from any buffered reader.
///
/// Once the image grows past `capacity` the remaining lines are counted but
/// not parsed, and [`LoadError::CapacityExceeded`] is returned.
///
/// # Errors
///
/// - [`LoadError::MalformedInput`] on the first bad line.
/// - [`LoadError::CapacityExceeded`] when more than `capacity` lines are supplied.
/// - [`LoadError::Io`] when reading fails; `source_name` is used as the path.
pub fn parse_hex_words<R: BufRead>(
    reader: R,
    region: MemoryRegion,
    capacity: usize,
    source_name: &Path,
) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    let mut lines = reader.lines();
    let mut line_no = 0;
    while let Some(line) = lines.next() {
        line_no += 1;
        let line = line.map_err(|source| LoadError::Io {
            path: source_name.to_path_buf(),
            source,
        })?;
        if words.len() == capacity {
            // Count the rest without parsing it so the error reports the full size.
            let supplied = line_no + lines.count();
            return Err(LoadError::CapacityExceeded {
                region,
                supplied,
                capacity,
            });
        }
        words.push(parse_hex_word(line_no, &line)?);
    }
    Ok(words)
}

/// Reads a hex image file for the given memory.
///
/// # Errors
///
/// See [`parse_hex_words`]; opening the file can also fail with [`LoadError::Io`].
pub fn load_hex_file(
    path: impl AsRef<Path>,
    region: MemoryRegion,
    capacity: usize,
) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex_words(BufReader::new(file), region, capacity, path)?;
    info!(
        path = %path.display(),
        %region,
        words = words.len(),
        "loaded memory image"
    );
    Ok(words)
}
