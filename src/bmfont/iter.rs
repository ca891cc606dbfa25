//! Streaming line source for byte input.
//!
//! [`LineIterator`] reads one line at a time from any [`BufRead`], so a
//! descriptor is never held in memory as a whole. Each line is decoded with
//! the reader's configured encoding.
//!
//! # Example
//! ```
//! # use bmfont_reader::BmFontReader;
//! let source = "info face=\"Arial\"\r\ncommon lineHeight=32\n".as_bytes();
//! let lines: Vec<_> = BmFontReader::new()
//!     .lines(source)
//!     .map(|line| line.unwrap())
//!     .collect();
//! assert_eq!(lines[1], (2, "common lineHeight=32".to_string()));
//! ```

use std::io::BufRead;
use encoding_rs::Encoding;
use log::warn;

use super::types::error::Result;
use super::utils::UTF8_BOM;

/// Iterator over `(line_number, text)` pairs of a byte source.
///
/// Line numbers start at 1. Line terminators (`\n` or `\r\n`) are removed.
/// Bytes that are invalid in the configured encoding are replaced with
/// U+FFFD and a warning is logged. After an I/O error the iterator is
/// exhausted.
pub struct LineIterator<R: BufRead> {
    source: R,
    encoding: &'static Encoding,
    line_number: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> LineIterator<R> {
    pub(super) fn new(source: R, encoding: &'static Encoding) -> Self {
        Self {
            source,
            encoding,
            line_number: 0,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn decode_current(&self) -> String {
        let mut bytes = self.buf.as_slice();
        if let Some(stripped) = bytes.strip_suffix(b"\n") {
            bytes = stripped;
        }
        if let Some(stripped) = bytes.strip_suffix(b"\r") {
            bytes = stripped;
        }
        if self.line_number == 0
            && let Some(stripped) = bytes.strip_prefix(UTF8_BOM)
        {
            bytes = stripped;
        }

        let (text, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        if had_errors {
            warn!(
                "Line {}: invalid {} byte sequence replaced",
                self.line_number + 1,
                self.encoding.name()
            );
        }
        text.into_owned()
    }
}

impl<R: BufRead> Iterator for LineIterator<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buf.clear();
        match self.source.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                let text = self.decode_current();
                self.line_number += 1;
                Some(Ok((self.line_number, text)))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.into()))
            }
        }
    }
}
