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

//! JavaScript string escaping.
//!
//! Escaping keeps printable ASCII, backslashes the JavaScript specials and
//! formats everything else as `\xNN` or `\uNNNN`. Unescaping also accepts the
//! URL-ish `%XX` and `%uXXXX` forms produced by the legacy `escape()` function.

use std::fmt::Write;

fn backslashed(ch: char) -> Option<&'static str> {
    match ch {
        '\u{08}' => Some("\\b"),
        '\t' => Some("\\t"),
        '\n' => Some("\\n"),
        '\u{0c}' => Some("\\f"),
        '\r' => Some("\\r"),
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

fn unbackslashed(byte: u8) -> Option<char> {
    match byte {
        b'b' => Some('\u{08}'),
        b't' => Some('\t'),
        b'n' => Some('\n'),
        b'f' => Some('\u{0c}'),
        b'r' => Some('\r'),
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        _ => None,
    }
}

fn write_js_char(out: &mut String, ch: char) {
    let code = ch as u32;
    if code < 0x100 {
        let _ = write!(out, "\\x{:02X}", code);
    } else {
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{:04X}", unit);
        }
    }
}

/// Formats a single character as `\xNN` or `\uNNNN`.
///
/// Characters outside the Basic Multilingual Plane become a surrogate pair.
pub fn format_js_char(ch: char) -> String {
    let mut out = String::with_capacity(12);
    write_js_char(&mut out, ch);
    out
}

/// Formats every character of `text` for JavaScript.
pub fn format_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for ch in text.chars() {
        write_js_char(&mut out, ch);
    }
    out
}

/// Escapes `text` for inclusion in a JavaScript string literal.
///
/// ```
/// use hexkit_textcodec::js_escape;
///
/// assert_eq!(js_escape("hello\nworld\n"), "hello\\nworld\\n");
/// ```
pub fn js_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(special) = backslashed(ch) {
            out.push_str(special);
        } else if (' '..='~').contains(&ch) {
            out.push(ch);
        } else {
            write_js_char(&mut out, ch);
        }
    }
    out
}

/// Accumulates decoded UTF-16 code units, pairing surrogates as they arrive.
struct Utf16Sink {
    out: String,
    high: Option<u16>,
}

impl Utf16Sink {
    fn flush(&mut self) {
        if self.high.take().is_some() {
            self.out.push(char::REPLACEMENT_CHARACTER);
        }
    }

    fn push_char(&mut self, ch: char) {
        self.flush();
        self.out.push(ch);
    }

    fn push_unit(&mut self, unit: u32) {
        match unit {
            0xD800..=0xDBFF => {
                self.flush();
                self.high = Some(unit as u16);
            }
            0xDC00..=0xDFFF => match self.high.take() {
                Some(high) => {
                    let pair = [high, unit as u16];
                    let ch = char::decode_utf16(pair)
                        .next()
                        .and_then(Result::ok)
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    self.out.push(ch);
                }
                None => self.out.push(char::REPLACEMENT_CHARACTER),
            },
            _ => self.push_char(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)),
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}

fn hex_run(input: &[u8], max: usize) -> (u32, usize) {
    let mut value = 0u32;
    let mut count = 0;
    while count < max && count < input.len() && input[count].is_ascii_hexdigit() {
        value = value * 16 + (input[count] as char).to_digit(16).unwrap_or(0);
        count += 1;
    }
    (value, count)
}

/// Reverses JavaScript escaping.
///
/// Decodes `\uXXXX` and `%uXXXX` (one to four hex digits), `\xXX`, `\XX` and
/// `%XX` (one or two hex digits) and the backslashed specials. Adjacent
/// surrogate halves combine into one character; a lone half becomes U+FFFD.
///
/// ```
/// use hexkit_textcodec::js_unescape;
///
/// assert_eq!(js_unescape("\\u0068\\u0065\\u006C\\u006C\\u006F world"), "hello world");
/// ```
pub fn js_unescape(text: &str) -> String {
    let input = text.as_bytes();
    let mut sink = Utf16Sink {
        out: String::with_capacity(text.len()),
        high: None,
    };
    let mut index = 0;

    while index < input.len() {
        let lead = input[index];
        if lead == b'\\' || lead == b'%' {
            let rest = &input[index + 1..];

            if rest.first() == Some(&b'u') {
                let (unit, count) = hex_run(&rest[1..], 4);
                if count > 0 {
                    sink.push_unit(unit);
                    index += 2 + count;
                    continue;
                }
            }

            if lead == b'\\' {
                if let Some(ch) = rest.first().copied().and_then(unbackslashed) {
                    sink.push_char(ch);
                    index += 2;
                    continue;
                }
                if rest.first() == Some(&b'x') {
                    let (byte, count) = hex_run(&rest[1..], 2);
                    if count > 0 {
                        sink.push_unit(byte);
                        index += 2 + count;
                        continue;
                    }
                }
            }

            let (byte, count) = hex_run(rest, 2);
            if count > 0 {
                sink.push_unit(byte);
                index += 1 + count;
                continue;
            }
        }

        // Copy one whole character through unchanged.
        let ch = text[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        sink.push_char(ch);
        index += ch.len_utf8();
    }

    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_escape_specials() {
        assert_eq!(js_escape("hello\nworld\n"), "hello\\nworld\\n");
        assert_eq!(js_escape("say \"hi\"\\"), "say \\\"hi\\\"\\\\");
        assert_eq!(js_escape("A"), "A");
    }

    #[test]
    fn test_js_escape_non_printable() {
        assert_eq!(js_escape("\u{1}\u{7f}"), "\\x01\\x7F");
        assert_eq!(js_escape("\u{e9}"), "\\xE9");
        assert_eq!(js_escape("\u{d556}"), "\\uD556");
        assert_eq!(js_escape("\u{1F600}"), "\\uD83D\\uDE00");
    }

    #[test]
    fn test_format_js() {
        assert_eq!(format_js_char('&'), "\\x26");
        assert_eq!(format_js_char('\u{d556}'), "\\uD556");
        assert_eq!(format_js("hi"), "\\x68\\x69");
    }

    #[test]
    fn test_js_unescape() {
        assert_eq!(
            js_unescape("\\u0068\\u0065\\u006C\\u006C\\u006F world"),
            "hello world"
        );
        assert_eq!(js_unescape("%68%65%u006c%6C\\x6f"), "hello");
        assert_eq!(js_unescape("\\b\\t\\n\\f\\r\\\"\\\\"), "\u{08}\t\n\u{0c}\r\"\\");
        assert_eq!(js_unescape("\\41"), "A");
    }

    #[test]
    fn test_js_unescape_surrogates() {
        assert_eq!(js_unescape("\\uD83D\\uDE00"), "\u{1F600}");
        assert_eq!(js_unescape("\\uD83Dx"), "\u{FFFD}x");
        assert_eq!(js_unescape("\\uDE00"), "\u{FFFD}");
    }

    #[test]
    fn test_js_unescape_passthrough() {
        assert_eq!(js_unescape("100% \u{e9}"), "100% \u{e9}");
        assert_eq!(js_unescape("\\q"), "\\q");
    }

    #[test]
    fn test_js_round_trip() {
        let text = "line one\n\t\"quoted\" \u{e9}\u{d556}\u{1F600}\\";
        assert_eq!(js_unescape(&js_escape(text)), text);
        assert_eq!(js_unescape(&format_js(text)), text);
    }
}
