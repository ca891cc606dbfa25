use std::io::{BufRead, BufReader, Read};
use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};

use super::format::records;
use super::iter::LineIterator;
use super::types::error::Result;
use super::types::models::FontDescriptor;
use super::utils;

/// Parser for BMFont text descriptors.
///
/// Holds the parse options; the parse itself keeps no state between calls,
/// so one reader can be shared and reused freely.
///
/// ```
/// use bmfont_reader::BmFontReader;
///
/// let text = "page id=0 file=\"font_0.png\"\nchar id=65 x=1 y=2 width=3 height=4 xoffset=0 yoffset=0 xadvance=5 page=0 chnl=15\n";
/// let font = BmFontReader::new().parse(text.as_bytes()).unwrap();
/// assert_eq!(font.page(0), Some("font_0.png"));
/// assert_eq!(font.glyph_for('A').map(|g| g.x_advance), Some(5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BmFontReader {
    encoding: &'static Encoding,
}

impl Default for BmFontReader {
    fn default() -> Self {
        Self { encoding: UTF_8 }
    }
}

impl BmFontReader {
    /// Creates a reader that decodes byte sources as UTF-8.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text encoding of byte sources from an encoding label.
    ///
    /// BMFont generators write descriptors in the system code page unless
    /// told otherwise, so non-unicode fonts are often `windows-1252` or
    /// similar. Unknown or non-ASCII-compatible labels fall back to UTF-8.
    pub fn with_encoding(mut self, label: &str) -> Self {
        self.encoding = utils::parse_encoding(label);
        debug!("Descriptor encoding set to {}", self.encoding.name());
        self
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Reads a descriptor from a byte source into a new [`FontDescriptor`].
    pub fn parse<R: Read>(&self, source: R) -> Result<FontDescriptor> {
        let mut font = FontDescriptor::new();
        self.parse_buffered_into(BufReader::new(source), &mut font)?;
        Ok(font)
    }

    /// Reads a descriptor from a byte source into an existing descriptor.
    ///
    /// The target's glyphs, kernings and pages are cleared first. Its metadata
    /// keeps its values until the source's `info` and `common` records
    /// overwrite them.
    pub fn parse_into<R: Read>(&self, source: R, target: &mut FontDescriptor) -> Result<()> {
        self.parse_buffered_into(BufReader::new(source), target)
    }

    /// Like [`parse_into`](Self::parse_into) for sources that are already buffered.
    ///
    /// The source is consumed by the call and dropped when it returns,
    /// whether or not parsing succeeded.
    pub fn parse_buffered_into<R: BufRead>(
        &self,
        source: R,
        target: &mut FontDescriptor,
    ) -> Result<()> {
        info!("Parsing BMFont descriptor ({})", self.encoding.name());
        target.reset_collections();

        let mut lines = self.lines(source);
        for line in lines.by_ref() {
            let (line_number, text) = line?;
            records::apply_line(target, line_number, &text)?;
        }

        info!(
            "BMFont descriptor parsed: {} lines, face='{}', {} glyphs, {} kernings, {} pages",
            lines.line_number(),
            target.face,
            target.glyph_count(),
            target.kerning_count(),
            target.pages().len()
        );
        Ok(())
    }

    /// Parses an already decoded descriptor.
    ///
    /// The configured encoding does not apply; a leading byte order mark is
    /// ignored.
    pub fn parse_str(&self, text: &str) -> Result<FontDescriptor> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        records::assemble(text.lines(), None)
    }

    /// Returns the decoded lines of a byte source without interpreting them.
    pub fn lines<R: BufRead>(&self, source: R) -> LineIterator<R> {
        LineIterator::new(source, self.encoding)
    }
}
