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

use crate::DumpResult;
use crate::config::{DumpFormatConfig, WordKind};
use crate::consts::{char_escape, named_char};
use crate::tokenizer::{Token, TokenKind};
use bytes::BytesMut;
use hexkit_textcodec::{Endian, fits_in_width, pack_uint_into};

/// Turns word tokens back into the bytes they were printed from.
#[derive(Clone, Debug)]
pub struct WordDecoder {
    kind: WordKind,
    base: u32,
    width: usize,
    endian: Endian,
}

impl WordDecoder {
    pub fn new(config: &DumpFormatConfig) -> Self {
        Self {
            kind: config.word_kind(),
            base: config.numeric_base(),
            width: config.word_width(),
            endian: config.endian(),
        }
    }

    /// Bytes produced by each numeric word.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Decodes `token` and appends its bytes to `dst`.
    ///
    /// Nothing is appended when an error is returned.
    pub fn decode_into(&self, token: &Token<'_>, dst: &mut BytesMut) -> DumpResult<()> {
        match (token.kind, self.kind) {
            (TokenKind::Char, _) => self.decode_char(token, false, dst),
            (TokenKind::Named, _) => self.decode_char(token, true, dst),
            (TokenKind::Numeric, WordKind::Float) => self.decode_float(token, dst),
            (TokenKind::Numeric, _) => {
                let value = self.parse_integer(token, self.width)?;
                self.pack(token, value, self.width, dst)
            }
        }
    }

    fn pack(
        &self,
        token: &Token<'_>,
        value: u64,
        width: usize,
        dst: &mut BytesMut,
    ) -> DumpResult<()> {
        pack_uint_into(value, self.endian, width, dst).map_err(|_| token.overflow(width))
    }

    fn parse_integer(&self, token: &Token<'_>, width: usize) -> DumpResult<u64> {
        let (negative, digits) = match token.text.strip_prefix('-') {
            Some(rest) if self.base == 10 => (true, rest),
            _ => (false, token.text),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(self.base)) {
            return Err(token.malformed(format!("expected a base {} integer", self.base)));
        }
        // Digits are already checked, so the only failure left is overflow.
        let magnitude =
            u64::from_str_radix(digits, self.base).map_err(|_| token.overflow(width))?;

        let value = if negative {
            let limit = 1u64 << (width * 8 - 1);
            if magnitude > limit {
                return Err(token.overflow(width));
            }
            let mask = if width >= 8 {
                u64::MAX
            } else {
                (1u64 << (width * 8)) - 1
            };
            magnitude.wrapping_neg() & mask
        } else {
            magnitude
        };

        if !fits_in_width(value, width) {
            return Err(token.overflow(width));
        }
        Ok(value)
    }

    fn decode_float(&self, token: &Token<'_>, dst: &mut BytesMut) -> DumpResult<()> {
        let (bits, infinite) = if self.width == 4 {
            token
                .text
                .parse::<f32>()
                .map(|value| (u64::from(value.to_bits()), value.is_infinite()))
        } else {
            token
                .text
                .parse::<f64>()
                .map(|value| (value.to_bits(), value.is_infinite()))
        }
        .map_err(|_| token.malformed("expected a decimal floating point number"))?;
        // Only a spelled-out infinity may decode to one; finite text that
        // rounds to infinity does not fit the word.
        if infinite && !is_infinity_literal(token.text) {
            return Err(token.overflow(self.width));
        }
        self.pack(token, bits, self.width, dst)
    }

    fn decode_char(&self, token: &Token<'_>, named: bool, dst: &mut BytesMut) -> DumpResult<()> {
        let text = token.text;
        if named {
            if let Some(byte) = named_char(text) {
                dst.extend_from_slice(&[byte]);
                return Ok(());
            }
        }

        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            let mut utf8 = [0u8; 4];
            dst.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            return Ok(());
        }

        if let Some(byte) = char_escape(text) {
            dst.extend_from_slice(&[byte]);
            return Ok(());
        }

        // od -c prints non-printable bytes as three octal digits.
        if text.len() == 3 && text.chars().all(|c| c.is_digit(8)) {
            return match u8::from_str_radix(text, 8) {
                Ok(byte) => {
                    dst.extend_from_slice(&[byte]);
                    Ok(())
                }
                Err(_) => Err(token.overflow(1)),
            };
        }

        if text.chars().all(|c| c.is_digit(self.base)) {
            let value = self.parse_integer(token, 1)?;
            return self.pack(token, value, 1, dst);
        }

        Err(token.malformed(if named {
            "expected a character, a mnemonic or an octal byte"
        } else {
            "expected a character, an escape or an octal byte"
        }))
    }
}

fn is_infinity_literal(text: &str) -> bool {
    let magnitude = text.trim_start_matches(['+', '-']);
    magnitude.eq_ignore_ascii_case("inf") || magnitude.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DumpError;
    use crate::config::{DumpStyle, Encoding};

    fn token(text: &str, kind: TokenKind) -> Token<'_> {
        Token {
            text,
            line: 1,
            column: 9,
            kind,
        }
    }

    fn decode(encoding: Encoding, endian: Endian, text: &str) -> DumpResult<Vec<u8>> {
        let config = DumpFormatConfig::new(DumpStyle::Od, encoding).with_endian(endian);
        let kind = match encoding.word_kind() {
            WordKind::Char => TokenKind::Char,
            WordKind::Named => TokenKind::Named,
            _ => TokenKind::Numeric,
        };
        let mut dst = BytesMut::new();
        WordDecoder::new(&config).decode_into(&token(text, kind), &mut dst)?;
        Ok(dst.to_vec())
    }

    #[test]
    fn test_endian_order() {
        assert_eq!(
            decode(Encoding::HexShorts, Endian::Little, "0001").unwrap(),
            vec![0x01, 0x00]
        );
        assert_eq!(
            decode(Encoding::HexShorts, Endian::Big, "0001").unwrap(),
            vec![0x00, 0x01]
        );
        assert_eq!(
            decode(Encoding::HexInts, Endian::Little, "6c6c6568").unwrap(),
            b"hell".to_vec()
        );
        assert_eq!(
            decode(Encoding::OctalShorts, Endian::Little, "062550").unwrap(),
            b"he".to_vec()
        );
    }

    #[test]
    fn test_width_matches_encoding() {
        for encoding in Encoding::ALL {
            if encoding.word_kind() != WordKind::Integer {
                continue;
            }
            let bytes = decode(encoding, Endian::Little, "1").unwrap();
            assert_eq!(bytes.len(), encoding.word_width(), "{}", encoding);
        }
    }

    #[test]
    fn test_overflow() {
        match decode(Encoding::DecimalBytes, Endian::Little, "256") {
            Err(DumpError::WordOverflow { width, token, .. }) => {
                assert_eq!(width, 1);
                assert_eq!(token, "256");
            }
            other => panic!("expected WordOverflow, got {:?}", other),
        }
        assert!(decode(Encoding::HexQuads, Endian::Little, "10000000000000000").is_err());
        assert_eq!(
            decode(Encoding::HexQuads, Endian::Big, "ffffffffffffffff").unwrap(),
            vec![0xff; 8]
        );
    }

    #[test]
    fn test_malformed_digits() {
        assert!(matches!(
            decode(Encoding::HexBytes, Endian::Little, "zz"),
            Err(DumpError::MalformedToken { .. })
        ));
        assert!(matches!(
            decode(Encoding::Binary, Endian::Little, "102"),
            Err(DumpError::MalformedToken { .. })
        ));
    }

    #[test]
    fn test_negative_decimal() {
        assert_eq!(
            decode(Encoding::DecimalInts, Endian::Little, "-1").unwrap(),
            vec![0xff; 4]
        );
        assert_eq!(
            decode(Encoding::DecimalShorts, Endian::Big, "-32768").unwrap(),
            vec![0x80, 0x00]
        );
        assert!(decode(Encoding::DecimalShorts, Endian::Big, "-32769").is_err());
        assert!(decode(Encoding::HexShorts, Endian::Big, "-1").is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(
            decode(Encoding::Floats, Endian::Little, "1").unwrap(),
            1.0f32.to_le_bytes().to_vec()
        );
        assert_eq!(
            decode(Encoding::Doubles, Endian::Big, "-2.5").unwrap(),
            (-2.5f64).to_be_bytes().to_vec()
        );
        assert_eq!(
            decode(Encoding::Floats, Endian::Little, "inf").unwrap(),
            f32::INFINITY.to_le_bytes().to_vec()
        );
        assert_eq!(
            decode(Encoding::Doubles, Endian::Little, "-Infinity").unwrap(),
            f64::NEG_INFINITY.to_le_bytes().to_vec()
        );
    }

    #[test]
    fn test_float_out_of_range_overflows() {
        match decode(Encoding::Floats, Endian::Little, "1e40") {
            Err(DumpError::WordOverflow { token, width, .. }) => {
                assert_eq!(token, "1e40");
                assert_eq!(width, 4);
            }
            other => panic!("expected WordOverflow, got {:?}", other),
        }
        assert!(matches!(
            decode(Encoding::Doubles, Endian::Big, "-1e400"),
            Err(DumpError::WordOverflow { width: 8, .. })
        ));
        assert_eq!(
            decode(Encoding::Doubles, Endian::Little, "1e40").unwrap(),
            1e40f64.to_le_bytes().to_vec()
        );
    }

    #[test]
    fn test_chars() {
        assert_eq!(decode(Encoding::HexChars, Endian::Little, "h").unwrap(), b"h");
        assert_eq!(decode(Encoding::HexChars, Endian::Little, "\\n").unwrap(), b"\n");
        assert_eq!(decode(Encoding::HexChars, Endian::Little, "\\0").unwrap(), b"\0");
        assert_eq!(decode(Encoding::HexChars, Endian::Little, "377").unwrap(), vec![0xff]);
        assert_eq!(decode(Encoding::HexChars, Endian::Little, "ff").unwrap(), vec![0xff]);
        assert_eq!(
            decode(Encoding::HexChars, Endian::Little, "\u{e9}").unwrap(),
            "\u{e9}".as_bytes().to_vec()
        );
        assert!(decode(Encoding::HexChars, Endian::Little, "\\q").is_err());
    }

    #[test]
    fn test_named_chars() {
        assert_eq!(decode(Encoding::NamedChars, Endian::Little, "nul").unwrap(), vec![0]);
        assert_eq!(decode(Encoding::NamedChars, Endian::Little, "sp").unwrap(), b" ");
        assert_eq!(decode(Encoding::NamedChars, Endian::Little, "del").unwrap(), vec![0x7f]);
        assert_eq!(decode(Encoding::NamedChars, Endian::Little, "A").unwrap(), b"A");
        assert_eq!(decode(Encoding::NamedChars, Endian::Little, "12").unwrap(), vec![0o12]);
        assert!(decode(Encoding::NamedChars, Endian::Little, "bogus").is_err());
    }
}
