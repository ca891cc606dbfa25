//! # bmfont-reader
//!
//! A reader for AngelCode BMFont text descriptors (`.fnt`).
//!
//! The descriptor is decoded line by line into a [`FontDescriptor`] holding
//! the font metadata, texture page names, glyph table and kerning pairs.
//! Texture images are not loaded and nothing is rendered.
//!
//! ```
//! let text = r#"
//! info face="Times New Roman" size=32 bold=0 italic=0 charset="" unicode=1 stretchH=100 smooth=1 aa=1 padding=0,0,0,0 spacing=1,1
//! common lineHeight=37 base=29 scaleW=256 scaleH=256 pages=1 packed=0
//! page id=0 file="times_0.png"
//! char id=65 x=10 y=20 width=18 height=21 xoffset=0 yoffset=8 xadvance=19 page=0 chnl=15
//! kerning first=65 second=86 amount=-2
//! "#;
//!
//! let font = bmfont_reader::parse_str(text).unwrap();
//! assert_eq!(font.face, "Times New Roman");
//! assert_eq!(font.glyph(65).map(|g| g.width()), Some(18));
//! assert_eq!(font.kerning(65, 86), Some(-2));
//! ```
pub mod bmfont;

// Re-export the main types for convenience
pub use bmfont::{
    BmFontReader,
    BmFontError,
    Result,
    parse_str,
    parse_reader,
    parse_reader_into,
    types::models::{
        FontDescriptor,
        Glyph,
        Kerning,
        Page,
        ChannelMask,
        Coordinates,
        Dimensions,
        Padding,
        Spacing,
    },
};
