//! Line tokenizer for the BMFont text format.
//!
//! Every line of a BMFont text descriptor has the shape
//!
//! ```text
//! <tag> key=value key="quoted value" key=1,2,3 ...
//! ```
//!
//! [`decode`] splits a line into its tag and an ordered list of fields. Values
//! stay untyped ([`RawValue`]) until a consumer asks for a concrete type, so the
//! tokenizer knows nothing about which fields a record carries.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::bmfont::types::error::{LineError, ValueError};

/// The record type selected by a line's first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordTag<'a> {
    Info,
    Common,
    Page,
    Char,
    Kerning,
    /// Any tag this crate does not interpret, e.g. `chars` or `kernings`.
    Other(&'a str),
}

impl<'a> RecordTag<'a> {
    pub fn from_header(header: &'a str) -> Self {
        match header {
            "info" => RecordTag::Info,
            "common" => RecordTag::Common,
            "page" => RecordTag::Page,
            "char" => RecordTag::Char,
            "kerning" => RecordTag::Kerning,
            other => RecordTag::Other(other),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            RecordTag::Info => "info",
            RecordTag::Common => "common",
            RecordTag::Page => "page",
            RecordTag::Char => "char",
            RecordTag::Kerning => "kerning",
            RecordTag::Other(name) => name,
        }
    }
}

impl fmt::Display for RecordTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unconverted field value with typed views.
///
/// Quotes have already been stripped; everything else is the text exactly as
/// it appeared in the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue(String);

impl RawValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Views the value as a decimal integer.
    pub fn as_int<T>(&self) -> Result<T, ValueError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        parse_int(&self.0)
    }

    /// Views the value as an integer flag where any nonzero value is `true`.
    pub fn as_flag(&self) -> Result<bool, ValueError> {
        self.as_int::<i64>().map(|n| n != 0)
    }

    /// Views the value as exactly `N` integers separated by `separator`.
    ///
    /// A different element count is an error; missing elements are never
    /// filled with defaults.
    pub fn as_int_array<T, const N: usize>(&self, separator: char) -> Result<[T; N], ValueError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let parts: Vec<&str> = self.0.split(separator).collect();
        if parts.len() != N {
            return Err(ValueError::ElementCount {
                expected: N,
                found: parts.len(),
                separator,
            });
        }

        let values = parts
            .into_iter()
            .map(parse_int::<T>)
            .collect::<Result<Vec<T>, ValueError>>()?;

        values.try_into().map_err(|values: Vec<T>| ValueError::ElementCount {
            expected: N,
            found: values.len(),
            separator,
        })
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_int<T>(text: &str) -> Result<T, ValueError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|source| ValueError::InvalidInteger {
        text: text.to_string(),
        source,
    })
}

/// A tokenized line: its header tag plus fields in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine<'a> {
    header: &'a str,
    fields: Vec<(String, RawValue)>,
}

impl<'a> DecodedLine<'a> {
    /// The raw first token of the line.
    pub fn header(&self) -> &'a str {
        self.header
    }

    pub fn tag(&self) -> RecordTag<'a> {
        RecordTag::from_header(self.header)
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Fields in the order their keys first appeared.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // A repeated key keeps its first position but takes the new value.
    fn insert(&mut self, key: String, value: String) {
        if key.is_empty() {
            return;
        }
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = RawValue(value),
            None => self.fields.push((key, RawValue(value))),
        }
    }
}

/// Splits one line into its header tag and `key=value` fields.
///
/// Returns `Ok(None)` for a line holding only whitespace. A line with a tag
/// but nothing after it is a [`LineError::MissingFields`].
///
/// Values may be wrapped in double quotes to include spaces. Quote characters
/// are dropped and their pairing is not checked, so an unclosed quote runs to
/// the end of the line. A trailing `key=` is recorded with an empty value.
pub fn decode(line: &str) -> Result<Option<DecodedLine<'_>>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some((header, body)) = line.split_once(char::is_whitespace) else {
        return Err(LineError::MissingFields {
            header: line.to_string(),
        });
    };

    let mut decoded = DecodedLine {
        header,
        fields: Vec::new(),
    };
    let mut key = String::new();
    let mut value = String::new();
    let mut in_quotes = false;
    let mut reading_value = false;

    for c in body.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' | '\t' if !in_quotes => {
                // A space inside a bare key is dropped; keys never contain spaces.
                if reading_value {
                    decoded.insert(std::mem::take(&mut key), std::mem::take(&mut value));
                    reading_value = false;
                }
            }
            '=' if !in_quotes && !reading_value => reading_value = true,
            _ if reading_value => value.push(c),
            _ => key.push(c),
        }
    }

    if reading_value {
        decoded.insert(key, value);
    }

    Ok(Some(decoded))
}
