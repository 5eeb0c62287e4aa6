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

//! Hex escaping of byte strings.

use crate::TextCodecResult;
use std::fmt::Write;

/// Escapes every byte of `data` as `\xNN`.
///
/// ```
/// use hexkit_textcodec::hex_escape;
///
/// assert_eq!(hex_escape(b"hello"), "\\x68\\x65\\x6c\\x6c\\x6f");
/// ```
pub fn hex_escape(data: &[u8]) -> String {
    let mut escaped = String::with_capacity(data.len() * 4);
    for byte in data {
        // Writing to a String cannot fail
        let _ = write!(escaped, "\\x{:02x}", byte);
    }
    escaped
}

fn take_digits(input: &[u8], radix: u32, max: usize) -> (u32, usize) {
    let mut value = 0u32;
    let mut count = 0;
    while count < max && count < input.len() {
        match (input[count] as char).to_digit(radix) {
            Some(digit) => {
                value = value * radix + digit;
                count += 1;
            }
            None => break,
        }
    }
    (value, count)
}

/// Reverses C-style and hex escapes in `text`.
///
/// Understands `\xNN`, octal `\NNN`, `\uXXXX`, and the single character escapes
/// `\0 \a \b \t \n \v \f \r \e \\ \" \'`. An unknown escape yields the escaped
/// character itself. Unescaped text passes through as its UTF-8 bytes.
pub fn hex_unescape(text: &str) -> Vec<u8> {
    let input = text.as_bytes();
    let mut output = Vec::with_capacity(input.len());
    let mut index = 0;

    while index < input.len() {
        let byte = input[index];
        if byte != b'\\' || index + 1 == input.len() {
            output.push(byte);
            index += 1;
            continue;
        }

        let escape = input[index + 1];
        let rest = &input[index + 2..];
        match escape {
            b'x' => {
                let (value, count) = take_digits(rest, 16, 2);
                if count == 0 {
                    output.push(b'x');
                } else {
                    output.push(value as u8);
                }
                index += 2 + count;
            }
            b'u' => {
                let (value, count) = take_digits(rest, 16, 4);
                if count == 0 {
                    output.push(b'u');
                } else {
                    let ch = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
                    let mut buf = [0u8; 4];
                    output.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                }
                index += 2 + count;
            }
            b'0'..=b'7' => {
                let (value, count) = take_digits(&input[index + 1..], 8, 3);
                output.push((value & 0xff) as u8);
                index += 1 + count;
            }
            _ => {
                output.push(match escape {
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b't' => b'\t',
                    b'n' => b'\n',
                    b'v' => 0x0b,
                    b'f' => 0x0c,
                    b'r' => b'\r',
                    b'e' => 0x1b,
                    other => other,
                });
                index += 2;
            }
        }
    }

    output
}

/// Encodes `data` as a plain lowercase hex string.
pub fn hex_encode(data: &[u8]) -> String {
    ::hex::encode(data)
}

/// Decodes a plain hex string.
pub fn hex_decode(text: &str) -> TextCodecResult<Vec<u8>> {
    Ok(::hex::decode(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextCodecError;

    #[test]
    fn test_hex_escape() {
        assert_eq!(hex_escape(b"hello"), "\\x68\\x65\\x6c\\x6c\\x6f");
        assert_eq!(hex_escape(&[0x00, 0xff]), "\\x00\\xff");
        assert_eq!(hex_escape(b""), "");
    }

    #[test]
    fn test_hex_unescape_hex_bytes() {
        assert_eq!(hex_unescape("\\x68\\x65\\x6c\\x6c\\x6f"), b"hello".to_vec());
        assert_eq!(hex_unescape("\\xFF\\x0"), vec![0xff, 0x00]);
    }

    #[test]
    fn test_hex_unescape_c_escapes() {
        assert_eq!(
            hex_unescape("a\\tb\\nc\\r\\0\\\\\\\""),
            b"a\tb\nc\r\0\\\"".to_vec()
        );
        assert_eq!(hex_unescape("\\a\\b\\v\\f\\e"), vec![0x07, 0x08, 0x0b, 0x0c, 0x1b]);
    }

    #[test]
    fn test_hex_unescape_octal_and_unicode() {
        assert_eq!(hex_unescape("\\101\\102"), b"AB".to_vec());
        assert_eq!(hex_unescape("\\377"), vec![0xff]);
        assert_eq!(hex_unescape("\\u00e9"), "\u{e9}".as_bytes().to_vec());
    }

    #[test]
    fn test_hex_unescape_passthrough() {
        assert_eq!(hex_unescape("plain"), b"plain".to_vec());
        assert_eq!(hex_unescape("trailing\\"), b"trailing\\".to_vec());
        assert_eq!(hex_unescape("\\q\\xZZ"), b"qxZZ".to_vec());
    }

    #[test]
    fn test_plain_hex() {
        assert_eq!(hex_encode(b"\x01\xab"), "01ab");
        assert_eq!(hex_decode("01ab\n").unwrap(), vec![0x01, 0xab]);
        assert!(matches!(hex_decode("0g"), Err(TextCodecError::Hex(_))));
    }
}
