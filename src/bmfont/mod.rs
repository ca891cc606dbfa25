//! Core BMFont descriptor reader module

pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

use std::io::Read;

pub use format::line::{decode, DecodedLine, RawValue, RecordTag};
pub use format::records::{apply_line, assemble, assemble_into};
pub use iter::LineIterator;
pub use reader::BmFontReader;
pub use types::error::{BmFontError, LineError, Result, ValueError};
pub use types::models::*;

/// Parses a decoded descriptor with default options.
pub fn parse_str(text: &str) -> Result<FontDescriptor> {
    BmFontReader::new().parse_str(text)
}

/// Parses a UTF-8 byte source with default options.
pub fn parse_reader<R: Read>(source: R) -> Result<FontDescriptor> {
    BmFontReader::new().parse(source)
}

/// Parses a UTF-8 byte source into an existing descriptor, clearing its
/// glyphs, kernings and pages first.
pub fn parse_reader_into<R: Read>(source: R, target: &mut FontDescriptor) -> Result<()> {
    BmFontReader::new().parse_into(source, target)
}
