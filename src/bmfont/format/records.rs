//! Record assembly: turns decoded lines into font data.
//!
//! Each recognized tag maps to one record builder. A builder reads every field
//! it needs first and only then writes to the [`FontDescriptor`], so a line that
//! fails to convert leaves the descriptor as it was before that line.

use std::num::ParseIntError;
use std::str::FromStr;
use log::{debug, info, trace, warn};

use super::line::{self, DecodedLine, RawValue, RecordTag};
use crate::bmfont::types::error::{BmFontError, LineError, Result, ValueError};
use crate::bmfont::types::models::{
    ChannelMask, Coordinates, Dimensions, FontDescriptor, Glyph, Kerning, Padding, Spacing,
};

/// Separator used by the `padding` and `spacing` arrays.
const ARRAY_SEPARATOR: char = ',';

/// Builds a descriptor from a sequence of lines.
///
/// With `target` set, its glyphs, kernings and pages are cleared first and its
/// metadata is overwritten by whatever `info` and `common` records follow.
/// Line numbers in errors count from 1.
pub fn assemble<I, S>(lines: I, target: Option<FontDescriptor>) -> Result<FontDescriptor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut font = target.unwrap_or_default();
    assemble_into(lines, &mut font)?;
    Ok(font)
}

/// Like [`assemble`], but fills a borrowed descriptor in place.
pub fn assemble_into<I, S>(lines: I, font: &mut FontDescriptor) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    info!("Assembling BMFont descriptor from text lines");
    font.reset_collections();

    let mut line_count = 0;
    for (index, line) in lines.into_iter().enumerate() {
        line_count = index + 1;
        apply_line(font, line_count, line.as_ref())?;
    }

    info!(
        "BMFont descriptor assembled: {} lines, face='{}', {} glyphs, {} kernings, {} pages",
        line_count,
        font.face,
        font.glyph_count(),
        font.kerning_count(),
        font.pages().len()
    );
    Ok(())
}

/// Decodes one line and applies its record to `font`.
///
/// Blank lines and unknown tags leave `font` untouched.
pub fn apply_line(font: &mut FontDescriptor, line_number: usize, text: &str) -> Result<()> {
    let decoded = match line::decode(text) {
        Ok(Some(decoded)) => decoded,
        Ok(None) => return Ok(()),
        Err(LineError::MissingFields { .. }) => {
            return Err(BmFontError::MalformedLine {
                line_number,
                line: text.to_string(),
            });
        }
    };

    let tag = decoded.tag();
    trace!("Line {}: '{}' record with {} fields", line_number, tag, decoded.len());

    let decoded = &decoded;
    let record = |header: &'static str| RecordFields {
        header,
        decoded,
        line_number,
        text,
    };
    match tag {
        RecordTag::Info => apply_info(&record("info"), font),
        RecordTag::Common => apply_common(&record("common"), font),
        RecordTag::Page => apply_page(&record("page"), font),
        RecordTag::Char => apply_char(&record("char"), font),
        RecordTag::Kerning => apply_kerning(&record("kerning"), font),
        RecordTag::Other(name) => {
            trace!("Line {}: skipping unrecognized record '{}'", line_number, name);
            Ok(())
        }
    }
}

fn apply_info(fields: &RecordFields<'_, '_>, font: &mut FontDescriptor) -> Result<()> {
    let face = fields.string("face")?;
    let size = fields.int("size")?;
    let bold = fields.flag("bold")?;
    let italic = fields.flag("italic")?;
    let charset = fields.string("charset")?;
    let unicode = fields.flag("unicode")?;
    let stretch_h = fields.int("stretchH")?;
    let smooth = fields.flag("smooth")?;
    let anti_aliased = fields.flag("aa")?;
    let padding: [i32; 4] = fields.int_array("padding")?;
    let spacing: [i32; 2] = fields.int_array("spacing")?;

    debug!(
        "Font info: face='{}', size={}, charset='{}', unicode={}",
        face, size, charset, unicode
    );

    font.face = face;
    font.size = size;
    font.bold = bold;
    font.italic = italic;
    font.charset = charset;
    font.unicode = unicode;
    font.stretch_h = stretch_h;
    font.smooth = smooth;
    font.anti_aliased = anti_aliased;
    font.padding = Padding::from(padding);
    font.spacing = Spacing::from(spacing);
    Ok(())
}

fn apply_common(fields: &RecordFields<'_, '_>, font: &mut FontDescriptor) -> Result<()> {
    let line_height = fields.int("lineHeight")?;
    let base = fields.int("base")?;
    let scale = Dimensions::new(fields.int("scaleW")?, fields.int("scaleH")?);
    let packed = fields.flag("packed")?;

    debug!(
        "Font common: lineHeight={}, base={}, scale={}x{}, packed={}",
        line_height, base, scale.width, scale.height, packed
    );

    font.line_height = line_height;
    font.base = base;
    font.scale = scale;
    font.packed = packed;
    Ok(())
}

fn apply_page(fields: &RecordFields<'_, '_>, font: &mut FontDescriptor) -> Result<()> {
    let id = fields.int("id")?;
    let file = fields.string("file")?;

    debug!("Page {}: '{}'", id, file);
    font.add_page(id, file);
    Ok(())
}

fn apply_char(fields: &RecordFields<'_, '_>, font: &mut FontDescriptor) -> Result<()> {
    let glyph = Glyph {
        id: fields.int("id")?,
        texture_position: Coordinates::new(fields.int("x")?, fields.int("y")?),
        texture_size: Dimensions::new(fields.int("width")?, fields.int("height")?),
        offset: Coordinates::new(fields.int("xoffset")?, fields.int("yoffset")?),
        x_advance: fields.int("xadvance")?,
        page: fields.int("page")?,
        channel: ChannelMask(fields.int("chnl")?),
    };

    if !glyph.channel.is_valid() {
        warn!(
            "Line {}: glyph {} has channel mask {} outside 0-15",
            fields.line_number, glyph.id, glyph.channel.0
        );
    }
    if font.add_glyph(glyph).is_some() {
        trace!("Line {}: replaced an earlier glyph with the same id", fields.line_number);
    }
    Ok(())
}

fn apply_kerning(fields: &RecordFields<'_, '_>, font: &mut FontDescriptor) -> Result<()> {
    let kerning = Kerning::new(
        fields.int("first")?,
        fields.int("second")?,
        fields.int("amount")?,
    );

    if let Some(previous) = font.add_kerning(kerning) {
        trace!(
            "Line {}: kerning ({}, {}) changed from {} to {}",
            fields.line_number, kerning.first, kerning.second, previous, kerning.amount
        );
    }
    Ok(())
}

/// Typed, error-reporting access to the fields of one recognized record.
struct RecordFields<'l, 'a> {
    header: &'static str,
    decoded: &'l DecodedLine<'a>,
    line_number: usize,
    text: &'l str,
}

impl RecordFields<'_, '_> {
    fn raw(&self, field: &'static str) -> Result<&RawValue> {
        self.decoded.get(field).ok_or_else(|| BmFontError::MissingField {
            header: self.header,
            field,
            line_number: self.line_number,
            line: self.text.to_string(),
        })
    }

    fn string(&self, field: &'static str) -> Result<String> {
        Ok(self.raw(field)?.as_str().to_string())
    }

    fn int<T>(&self, field: &'static str) -> Result<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let raw = self.raw(field)?;
        raw.as_int().map_err(|source| self.conversion_error(field, raw, source))
    }

    fn flag(&self, field: &'static str) -> Result<bool> {
        let raw = self.raw(field)?;
        raw.as_flag().map_err(|source| self.conversion_error(field, raw, source))
    }

    fn int_array<T, const N: usize>(&self, field: &'static str) -> Result<[T; N]>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let raw = self.raw(field)?;
        raw.as_int_array(ARRAY_SEPARATOR)
            .map_err(|source| self.conversion_error(field, raw, source))
    }

    fn conversion_error(
        &self,
        field: &'static str,
        raw: &RawValue,
        source: ValueError,
    ) -> BmFontError {
        BmFontError::TypeConversion {
            header: self.header,
            field,
            value: raw.as_str().to_string(),
            line_number: self.line_number,
            line: self.text.to_string(),
            source,
        }
    }
}
