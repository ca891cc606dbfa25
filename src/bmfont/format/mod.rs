//! Text format layer for BMFont descriptors.
//!
//! This module sits between the raw line source and the high-level
//! [`BmFontReader`](crate::bmfont::reader::BmFontReader).
//!
//! # Module Organization
//!
//! - [`line`]: Splits one line into a header tag and raw `key=value` fields
//! - [`records`]: Converts the fields of known records and builds the font
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │  text line               │
//! ├──────────────────────────┤
//! │  tag + raw fields        │ ← line::decode()
//! ├──────────────────────────┤
//! │  typed record            │ ← records::apply_line()
//! │  (info, common, page,    │
//! │   char, kerning)         │
//! ├──────────────────────────┤
//! │  FontDescriptor          │
//! └──────────────────────────┘
//! ```

pub mod line;
pub mod records;
