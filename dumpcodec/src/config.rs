//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Dump format configuration
//!
//! A [`DumpFormatConfig`] describes how a dump was produced: its layout
//! ([`DumpStyle`]), how each word was rendered ([`Encoding`]), the byte order of
//! multi-byte words and the number of bytes per row. The word width and numeric
//! base are derived from the encoding and cannot be set independently.
//!
//! # Examples
//!
//! ```
//! use hexkit_dumpcodec::{DumpFormatConfig, DumpStyle, Encoding, Endian};
//!
//! let config = DumpFormatConfig::new(DumpStyle::Od, Encoding::HexShorts)
//!     .with_endian(Endian::Big)
//!     .with_segment_length(32)
//!     .unwrap();
//! assert_eq!(config.word_width(), 2);
//! assert_eq!(config.numeric_base(), 16);
//! ```
//!
//! Raw string options, as a caller would collect them from a command line, are
//! validated with [`DumpFormatConfig::from_options`]:
//!
//! ```
//! use hexkit_dumpcodec::{DumpFormatConfig, DumpOptions};
//!
//! let options = DumpOptions::default()
//!     .with_dump_style("od")
//!     .with_encoding("octal_shorts")
//!     .with_endian("network");
//! let config = DumpFormatConfig::from_options(&options).unwrap();
//! assert_eq!(config.address_base(), 8);
//! ```

use crate::consts::{DEFAULT_MAX_SQUEEZE_LENGTH, DEFAULT_SEGMENT_LENGTH};
use crate::{DumpError, DumpResult};
use hexkit_textcodec::Endian;
use std::fmt;
use std::str::FromStr;

/// Overall textual layout of a dump.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DumpStyle {
    /// `od` output: octal offsets by default, no preview column
    Od,
    /// `hexdump` output: hex offsets, optional `|...|` preview column
    #[default]
    Hexdump,
}

impl DumpStyle {
    /// Canonical option name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DumpStyle::Od => "od",
            DumpStyle::Hexdump => "hexdump",
        }
    }

    /// Radix the tool prints offsets in unless told otherwise.
    pub fn default_address_base(&self) -> u32 {
        match self {
            DumpStyle::Od => 8,
            DumpStyle::Hexdump => 16,
        }
    }
}

impl FromStr for DumpStyle {
    type Err = DumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "od" => Ok(DumpStyle::Od),
            "hexdump" => Ok(DumpStyle::Hexdump),
            other => Err(DumpError::invalid_configuration("dump_style", other)),
        }
    }
}

impl fmt::Display for DumpStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a word's text is turned back into bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// Unsigned (or, in decimal, signed) integer literal
    Integer,
    /// Decimal floating point literal
    Float,
    /// Printable character, C escape, or octal fallback (`od -c`)
    Char,
    /// `od -a` mnemonic or printable character
    Named,
}

/// Numeric base and word type used to render each group of bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    Binary,
    Octal,
    OctalBytes,
    OctalShorts,
    OctalInts,
    OctalQuads,
    Decimal,
    DecimalBytes,
    DecimalShorts,
    DecimalInts,
    DecimalQuads,
    #[default]
    Hex,
    HexChars,
    HexBytes,
    HexShorts,
    HexInts,
    HexQuads,
    NamedChars,
    Floats,
    Doubles,
}

impl Encoding {
    /// Every encoding, in option-name order.
    pub const ALL: [Encoding; 20] = [
        Encoding::Binary,
        Encoding::Octal,
        Encoding::OctalBytes,
        Encoding::OctalShorts,
        Encoding::OctalInts,
        Encoding::OctalQuads,
        Encoding::Decimal,
        Encoding::DecimalBytes,
        Encoding::DecimalShorts,
        Encoding::DecimalInts,
        Encoding::DecimalQuads,
        Encoding::Hex,
        Encoding::HexChars,
        Encoding::HexBytes,
        Encoding::HexShorts,
        Encoding::HexInts,
        Encoding::HexQuads,
        Encoding::NamedChars,
        Encoding::Floats,
        Encoding::Doubles,
    ];

    /// Canonical option name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Octal => "octal",
            Encoding::OctalBytes => "octal_bytes",
            Encoding::OctalShorts => "octal_shorts",
            Encoding::OctalInts => "octal_ints",
            Encoding::OctalQuads => "octal_quads",
            Encoding::Decimal => "decimal",
            Encoding::DecimalBytes => "decimal_bytes",
            Encoding::DecimalShorts => "decimal_shorts",
            Encoding::DecimalInts => "decimal_ints",
            Encoding::DecimalQuads => "decimal_quads",
            Encoding::Hex => "hex",
            Encoding::HexChars => "hex_chars",
            Encoding::HexBytes => "hex_bytes",
            Encoding::HexShorts => "hex_shorts",
            Encoding::HexInts => "hex_ints",
            Encoding::HexQuads => "hex_quads",
            Encoding::NamedChars => "named_chars",
            Encoding::Floats => "floats",
            Encoding::Doubles => "doubles",
        }
    }

    // (numeric base, word width in bytes, word kind)
    fn params(&self) -> (u32, usize, WordKind) {
        use WordKind::*;
        match self {
            Encoding::Binary => (2, 1, Integer),
            Encoding::Octal => (8, 2, Integer),
            Encoding::OctalBytes => (8, 1, Integer),
            Encoding::OctalShorts => (8, 2, Integer),
            Encoding::OctalInts => (8, 4, Integer),
            Encoding::OctalQuads => (8, 8, Integer),
            Encoding::Decimal => (10, 2, Integer),
            Encoding::DecimalBytes => (10, 1, Integer),
            Encoding::DecimalShorts => (10, 2, Integer),
            Encoding::DecimalInts => (10, 4, Integer),
            Encoding::DecimalQuads => (10, 8, Integer),
            Encoding::Hex => (16, 2, Integer),
            Encoding::HexChars => (16, 1, Char),
            Encoding::HexBytes => (16, 1, Integer),
            Encoding::HexShorts => (16, 2, Integer),
            Encoding::HexInts => (16, 4, Integer),
            Encoding::HexQuads => (16, 8, Integer),
            Encoding::NamedChars => (8, 1, Named),
            Encoding::Floats => (10, 4, Float),
            Encoding::Doubles => (10, 8, Float),
        }
    }

    /// Radix of numeric words: 2, 8, 10 or 16.
    pub fn numeric_base(&self) -> u32 {
        self.params().0
    }

    /// Bytes produced per word: 1, 2, 4 or 8.
    pub fn word_width(&self) -> usize {
        self.params().1
    }

    /// How words of this encoding are decoded.
    pub fn word_kind(&self) -> WordKind {
        self.params().2
    }
}

impl FromStr for Encoding {
    type Err = DumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .iter()
            .copied()
            .find(|encoding| encoding.as_str() == s)
            .ok_or_else(|| DumpError::invalid_configuration("encoding", s))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated decode options with their documented defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    /// `"od"` or `"hexdump"`
    pub dump_style: String,
    /// One of the [`Encoding`] option names
    pub encoding: String,
    /// `"little"`, `"big"` or `"network"`
    pub endian: String,
    /// Bytes per row; must be positive
    pub segment_length: usize,
    /// Radix of the offset column; `None` uses the style's default
    pub address_base: Option<u32>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            dump_style: DumpStyle::Hexdump.as_str().to_string(),
            encoding: Encoding::Hex.as_str().to_string(),
            endian: Endian::Little.as_str().to_string(),
            segment_length: DEFAULT_SEGMENT_LENGTH,
            address_base: None,
        }
    }
}

impl DumpOptions {
    /// Set the dump style name
    pub fn with_dump_style(mut self, dump_style: impl Into<String>) -> Self {
        self.dump_style = dump_style.into();
        self
    }

    /// Set the encoding name
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Set the endian name
    pub fn with_endian(mut self, endian: impl Into<String>) -> Self {
        self.endian = endian.into();
        self
    }

    /// Set the segment length
    pub fn with_segment_length(mut self, segment_length: usize) -> Self {
        self.segment_length = segment_length;
        self
    }

    /// Set the offset column radix
    pub fn with_address_base(mut self, address_base: Option<u32>) -> Self {
        self.address_base = address_base;
        self
    }
}

/// Validated, immutable description of a dump's format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpFormatConfig {
    dump_style: DumpStyle,
    encoding: Encoding,
    endian: Endian,
    segment_length: usize,
    address_base: u32,
    max_squeeze_length: usize,
}

impl DumpFormatConfig {
    /// Creates a configuration with little-endian words, 16-byte rows and the
    /// style's default offset radix.
    pub fn new(dump_style: DumpStyle, encoding: Encoding) -> Self {
        Self {
            dump_style,
            encoding,
            endian: Endian::Little,
            segment_length: DEFAULT_SEGMENT_LENGTH,
            address_base: dump_style.default_address_base(),
            max_squeeze_length: DEFAULT_MAX_SQUEEZE_LENGTH,
        }
    }

    /// Validates raw string options.
    pub fn from_options(options: &DumpOptions) -> DumpResult<Self> {
        let dump_style: DumpStyle = options.dump_style.parse()?;
        let encoding: Encoding = options.encoding.parse()?;
        let endian: Endian = options
            .endian
            .parse()
            .map_err(|_| DumpError::invalid_configuration("endian", &options.endian))?;

        let config = Self::new(dump_style, encoding)
            .with_endian(endian)
            .with_segment_length(options.segment_length)?;
        match options.address_base {
            Some(base) => config.with_address_base(base),
            None => Ok(config),
        }
    }

    /// Set the byte order of multi-byte words
    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Set the number of bytes per row; zero is rejected
    pub fn with_segment_length(mut self, segment_length: usize) -> DumpResult<Self> {
        if segment_length == 0 {
            return Err(DumpError::invalid_configuration(
                "segment_length",
                segment_length,
            ));
        }
        self.segment_length = segment_length;
        Ok(self)
    }

    /// Set the radix of the offset column: 8, 10 or 16
    pub fn with_address_base(mut self, address_base: u32) -> DumpResult<Self> {
        if !matches!(address_base, 8 | 10 | 16) {
            return Err(DumpError::invalid_configuration(
                "address_base",
                address_base,
            ));
        }
        self.address_base = address_base;
        Ok(self)
    }

    /// Set the most bytes one `*` run may expand to; longer runs are rejected
    pub fn with_max_squeeze_length(mut self, max_squeeze_length: usize) -> Self {
        self.max_squeeze_length = max_squeeze_length;
        self
    }

    pub fn dump_style(&self) -> DumpStyle {
        self.dump_style
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn segment_length(&self) -> usize {
        self.segment_length
    }

    pub fn address_base(&self) -> u32 {
        self.address_base
    }

    pub fn max_squeeze_length(&self) -> usize {
        self.max_squeeze_length
    }

    /// Bytes per word, derived from the encoding.
    pub fn word_width(&self) -> usize {
        self.encoding.word_width()
    }

    /// Radix of numeric words, derived from the encoding.
    pub fn numeric_base(&self) -> u32 {
        self.encoding.numeric_base()
    }

    pub fn word_kind(&self) -> WordKind {
        self.encoding.word_kind()
    }

    /// Most words a single row can hold; later columns are annotations.
    pub fn words_per_row(&self) -> usize {
        (self.segment_length / self.word_width()).max(1)
    }
}

impl Default for DumpFormatConfig {
    fn default() -> Self {
        Self::new(DumpStyle::default(), Encoding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DumpFormatConfig::from_options(&DumpOptions::default()).unwrap();
        assert_eq!(config, DumpFormatConfig::default());
        assert_eq!(config.dump_style(), DumpStyle::Hexdump);
        assert_eq!(config.encoding(), Encoding::Hex);
        assert_eq!(config.endian(), Endian::Little);
        assert_eq!(config.segment_length(), 16);
        assert_eq!(config.address_base(), 16);
        assert_eq!(config.words_per_row(), 8);
        assert_eq!(config.max_squeeze_length(), DEFAULT_MAX_SQUEEZE_LENGTH);
    }

    #[test]
    fn test_encoding_names_round_trip() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.as_str().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_derived_widths_and_bases() {
        assert_eq!(Encoding::Binary.numeric_base(), 2);
        assert_eq!(Encoding::OctalQuads.word_width(), 8);
        assert_eq!(Encoding::DecimalInts.word_width(), 4);
        assert_eq!(Encoding::HexShorts.word_width(), 2);
        assert_eq!(Encoding::HexShorts.numeric_base(), 16);
        assert_eq!(Encoding::Floats.word_width(), 4);
        assert_eq!(Encoding::Doubles.word_width(), 8);
        assert_eq!(Encoding::NamedChars.word_kind(), WordKind::Named);
        assert_eq!(Encoding::HexChars.word_kind(), WordKind::Char);
        for encoding in Encoding::ALL {
            assert!(matches!(encoding.word_width(), 1 | 2 | 4 | 8));
            assert!(matches!(encoding.numeric_base(), 2 | 8 | 10 | 16));
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let options = DumpOptions::default()
            .with_dump_style("od")
            .with_encoding("decimal_quads")
            .with_endian("big");
        let first = DumpFormatConfig::from_options(&options).unwrap();
        let second = DumpFormatConfig::from_options(&options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.word_width(), second.word_width());
        assert_eq!(first.numeric_base(), second.numeric_base());
    }

    #[test]
    fn test_network_is_big_endian() {
        let options = DumpOptions::default().with_endian("network");
        let config = DumpFormatConfig::from_options(&options).unwrap();
        assert_eq!(config.endian(), Endian::Big);
    }

    #[test]
    fn test_invalid_values_are_named() {
        let cases = [
            (DumpOptions::default().with_dump_style("xxd"), "dump_style", "xxd"),
            (DumpOptions::default().with_encoding("hex_nibbles"), "encoding", "hex_nibbles"),
            (DumpOptions::default().with_endian("middle"), "endian", "middle"),
            (DumpOptions::default().with_endian("le"), "endian", "le"),
            (DumpOptions::default().with_segment_length(0), "segment_length", "0"),
            (DumpOptions::default().with_address_base(Some(2)), "address_base", "2"),
        ];
        for (options, expected_field, expected_value) in cases {
            match DumpFormatConfig::from_options(&options) {
                Err(DumpError::InvalidConfiguration { field, value }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(value, expected_value);
                }
                other => panic!("expected InvalidConfiguration, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_words_per_row_never_zero() {
        let config = DumpFormatConfig::new(DumpStyle::Od, Encoding::HexQuads)
            .with_segment_length(4)
            .unwrap();
        assert_eq!(config.words_per_row(), 1);
    }
}
