//! Core data structures for BMFont descriptors.
//!
//! This module defines the font data model built by the assembler:
//! - Font-wide metadata from the `info` and `common` records
//! - Texture pages, glyphs and kerning pairs
//! - Small value types for coordinates, dimensions, padding and spacing

use std::collections::BTreeMap;
use std::fmt;
use log::warn;

/// A point in pixels, used for texture positions and render offsets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Padding around each glyph, in the order the `info` record lists it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    pub up: i32,
    pub right: i32,
    pub down: i32,
    pub left: i32,
}

impl From<[i32; 4]> for Padding {
    fn from([up, right, down, left]: [i32; 4]) -> Self {
        Self { up, right, down, left }
    }
}

/// Spacing between glyphs in the texture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub horizontal: i32,
    pub vertical: i32,
}

impl From<[i32; 2]> for Spacing {
    fn from([horizontal, vertical]: [i32; 2]) -> Self {
        Self { horizontal, vertical }
    }
}

/// Texture channels holding a glyph's image.
///
/// Bit 0x1: blue, 0x2: green, 0x4: red, 0x8: alpha. A value of 15 means
/// the glyph is present in all channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelMask(pub u8);

impl ChannelMask {
    pub const BLUE: u8 = 0x1;
    pub const GREEN: u8 = 0x2;
    pub const RED: u8 = 0x4;
    pub const ALPHA: u8 = 0x8;
    pub const ALL: ChannelMask = ChannelMask(0xF);

    pub fn blue(self) -> bool {
        self.0 & Self::BLUE != 0
    }

    pub fn green(self) -> bool {
        self.0 & Self::GREEN != 0
    }

    pub fn red(self) -> bool {
        self.0 & Self::RED != 0
    }

    pub fn alpha(self) -> bool {
        self.0 & Self::ALPHA != 0
    }

    /// Whether only the four defined channel bits are set.
    pub fn is_valid(self) -> bool {
        self.0 <= Self::ALL.0
    }
}

/// A single character in the font.
///
/// Describes where the character's image sits in its texture page and how
/// the cursor moves when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Character code (Unicode scalar value for unicode fonts). Generators
    /// write the fallback glyph for missing characters as `-1`.
    pub id: i32,
    /// Top-left corner of the image in the texture.
    pub texture_position: Coordinates,
    /// Size of the image in the texture.
    pub texture_size: Dimensions,
    /// Offset from the cursor to the top-left corner when rendering.
    pub offset: Coordinates,
    /// How far the cursor advances after this character.
    pub x_advance: i32,
    /// Index of the texture page holding the image.
    pub page: u32,
    pub channel: ChannelMask,
}

impl Glyph {
    /// Creates an empty glyph for the given character code.
    pub fn new(id: i32) -> Self {
        Self {
            id,
            texture_position: Coordinates::default(),
            texture_size: Dimensions::default(),
            offset: Coordinates::default(),
            x_advance: 0,
            page: 0,
            channel: ChannelMask::default(),
        }
    }

    pub fn x(&self) -> i32 {
        self.texture_position.x
    }

    pub fn y(&self) -> i32 {
        self.texture_position.y
    }

    pub fn width(&self) -> i32 {
        self.texture_size.width
    }

    pub fn height(&self) -> i32 {
        self.texture_size.height
    }

    pub fn x_offset(&self) -> i32 {
        self.offset.x
    }

    pub fn y_offset(&self) -> i32 {
        self.offset.y
    }

    /// The character this glyph renders, if its id is a valid scalar value.
    pub fn as_char(&self) -> Option<char> {
        u32::try_from(self.id).ok().and_then(char::from_u32)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Glyph [id={}, x={}, y={}, width={}, height={}, xoffset={}, yoffset={}, xadvance={}, page={}, chnl={}]",
            self.id,
            self.x(),
            self.y(),
            self.width(),
            self.height(),
            self.x_offset(),
            self.y_offset(),
            self.x_advance,
            self.page,
            self.channel.0
        )
    }
}

/// An ordered pair of characters whose spacing is adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KerningPair {
    pub first: i32,
    pub second: i32,
}

/// A kerning record: the adjustment applied to the advance of `first` when it
/// is followed by `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kerning {
    pub first: i32,
    pub second: i32,
    pub amount: i32,
}

impl Kerning {
    pub fn new(first: i32, second: i32, amount: i32) -> Self {
        Self { first, second, amount }
    }

    pub fn pair(&self) -> KerningPair {
        KerningPair {
            first: self.first,
            second: self.second,
        }
    }
}

impl fmt::Display for Kerning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kerning [first={}, second={}, amount={}]",
            self.first, self.second, self.amount
        )
    }
}

/// A texture page backing some of the font's glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Page {
    pub id: u32,
    /// Texture file name, relative to the descriptor.
    pub file: String,
}

/// A parsed BMFont descriptor.
///
/// Scalar metadata is public and plain; the glyph table, kerning set and page
/// list are kept behind methods because they carry invariants (unique codes,
/// unique pairs, id-ordered pages).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    pub face: String,
    /// Nominal size. Negative values mean the size was matched to cell height.
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
    pub charset: String,
    pub unicode: bool,
    /// Horizontal stretch in percent.
    pub stretch_h: i32,
    pub smooth: bool,
    pub anti_aliased: bool,
    pub padding: Padding,
    pub spacing: Spacing,

    pub line_height: i32,
    /// Distance from the top of a line to the baseline.
    pub base: i32,
    /// Size of each texture page.
    pub scale: Dimensions,
    pub packed: bool,

    glyphs: BTreeMap<i32, Glyph>,
    kernings: BTreeMap<KerningPair, i32>,
    pages: Vec<Page>,
}

impl FontDescriptor {
    /// Creates an empty descriptor with default metadata.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_w(&self) -> i32 {
        self.scale.width
    }

    pub fn scale_h(&self) -> i32 {
        self.scale.height
    }

    // Glyphs

    pub fn glyph(&self, code: i32) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    /// Looks up the glyph for a `char`.
    pub fn glyph_for(&self, c: char) -> Option<&Glyph> {
        i32::try_from(u32::from(c))
            .ok()
            .and_then(|code| self.glyphs.get(&code))
    }

    pub fn has_glyph(&self, code: i32) -> bool {
        self.glyphs.contains_key(&code)
    }

    /// Character codes in ascending order.
    pub fn glyph_codes(&self) -> impl ExactSizeIterator<Item = i32> + '_ {
        self.glyphs.keys().copied()
    }

    /// Glyphs in ascending order of character code.
    pub fn glyphs(&self) -> impl ExactSizeIterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Adds a glyph, replacing any glyph with the same code.
    ///
    /// Returns the replaced glyph, if any.
    pub fn add_glyph(&mut self, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(glyph.id, glyph)
    }

    pub fn remove_glyph(&mut self, code: i32) -> Option<Glyph> {
        self.glyphs.remove(&code)
    }

    pub fn clear_glyphs(&mut self) {
        self.glyphs.clear();
    }

    // Kernings

    /// Returns the kerning amount for a pair, if one is defined.
    pub fn kerning(&self, first: i32, second: i32) -> Option<i32> {
        self.kernings.get(&KerningPair { first, second }).copied()
    }

    /// Kerning records ordered by `(first, second)`.
    pub fn kernings(&self) -> impl ExactSizeIterator<Item = Kerning> + '_ {
        self.kernings
            .iter()
            .map(|(pair, &amount)| Kerning::new(pair.first, pair.second, amount))
    }

    pub fn kerning_count(&self) -> usize {
        self.kernings.len()
    }

    /// Adds a kerning record. A record for the same pair is replaced; the
    /// previous amount is returned.
    pub fn add_kerning(&mut self, kerning: Kerning) -> Option<i32> {
        self.kernings.insert(kerning.pair(), kerning.amount)
    }

    pub fn remove_kerning(&mut self, first: i32, second: i32) -> Option<Kerning> {
        self.kernings
            .remove(&KerningPair { first, second })
            .map(|amount| Kerning::new(first, second, amount))
    }

    pub fn clear_kernings(&mut self) {
        self.kernings.clear();
    }

    // Pages

    /// Returns the texture file of the page with the given id.
    pub fn page(&self, id: u32) -> Option<&str> {
        self.pages
            .iter()
            .find(|page| page.id == id)
            .map(|page| page.file.as_str())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Inserts a page at the position given by its id.
    ///
    /// Page ids are expected to be dense and start at 0, so inserting them in
    /// any order yields an id-ordered list. An id beyond the current length
    /// violates that contract; such a page is appended at the end and a warning
    /// is logged, leaving the list's order unspecified.
    pub fn add_page(&mut self, id: u32, file: impl Into<String>) {
        let page = Page { id, file: file.into() };
        let index = id as usize;
        if index <= self.pages.len() {
            self.pages.insert(index, page);
        } else {
            warn!(
                "Page id {} is beyond the current page count {}; appending '{}' at the end",
                id,
                self.pages.len(),
                page.file
            );
            self.pages.push(page);
        }
    }

    /// Removes the page with the given id.
    pub fn remove_page(&mut self, id: u32) -> Option<Page> {
        let index = self.pages.iter().position(|page| page.id == id)?;
        Some(self.pages.remove(index))
    }

    /// Removes the first page with the given texture file name.
    pub fn remove_page_file(&mut self, file: &str) -> Option<Page> {
        let index = self.pages.iter().position(|page| page.file == file)?;
        Some(self.pages.remove(index))
    }

    pub fn clear_pages(&mut self) {
        self.pages.clear();
    }

    /// Clears the glyph table, kerning set and page list ahead of a re-parse.
    ///
    /// Scalar metadata is left as is; it is overwritten field by field when the
    /// next `info` and `common` records are read.
    pub fn reset_collections(&mut self) {
        self.clear_glyphs();
        self.clear_kernings();
        self.clear_pages();
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages: Vec<&str> = self.pages.iter().map(|page| page.file.as_str()).collect();
        write!(
            f,
            "BmFont [glyphs={}, kernings={}, pages={:?}, face={}, charset={}, size={}, \
             scaleW={}, scaleH={}, stretchH={}, lineHeight={}, base={}, \
             padding=[{}, {}, {}, {}], spacing=[{}, {}], bold={}, italic={}, unicode={}, \
             smooth={}, antiAliased={}, packed={}]",
            self.glyphs.len(),
            self.kernings.len(),
            pages,
            self.face,
            self.charset,
            self.size,
            self.scale.width,
            self.scale.height,
            self.stretch_h,
            self.line_height,
            self.base,
            self.padding.up,
            self.padding.right,
            self.padding.down,
            self.padding.left,
            self.spacing.horizontal,
            self.spacing.vertical,
            self.bold,
            self.italic,
            self.unicode,
            self.smooth,
            self.anti_aliased,
            self.packed
        )
    }
}
