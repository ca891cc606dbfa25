//! Text encoding helpers

use encoding_rs::{Encoding, UTF_8};
use log::warn;

/// UTF-8 byte order mark, stripped from the first line of byte sources.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Resolves an encoding label such as `"windows-1252"` or `"latin1"`.
///
/// Lines are split on `\n` bytes before decoding, so only ASCII-compatible
/// encodings are accepted. Unknown or incompatible labels fall back to UTF-8.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    match Encoding::for_label(label.trim().as_bytes()) {
        Some(encoding) if encoding.is_ascii_compatible() => encoding,
        Some(encoding) => {
            warn!(
                "Encoding '{}' is not ASCII-compatible and cannot be read line by line; using UTF-8",
                encoding.name()
            );
            UTF_8
        }
        None => {
            warn!("Unknown encoding label '{}'; using UTF-8", label);
            UTF_8
        }
    }
}
