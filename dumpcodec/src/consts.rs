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

/// Number of bytes per dump row when none is configured.
pub const DEFAULT_SEGMENT_LENGTH: usize = 16;

/// Width in columns of one character cell in `od -c`, `od -a` and `hexdump -c`
/// output.
pub const CHAR_CELL_WIDTH: usize = 4;

/// Largest number of bytes a single squeezed run may expand to unless
/// configured otherwise.
pub const DEFAULT_MAX_SQUEEZE_LENGTH: usize = 16 * 1024 * 1024;

/// Offset field that marks a run of rows identical to the previous one.
pub const SQUEEZE_MARKER: &str = "*";

/// Opening delimiter of the printable preview column in `hexdump -C` output.
pub const PREVIEW_DELIMITER: char = '|';

/// Opening delimiter of the printable preview column in `od -z` output.
pub const OD_PREVIEW_DELIMITER: char = '>';

/// Mnemonics printed by `od -a`, indexed by the byte they stand for.
pub const NAMED_CHARS: [(&str, u8); 34] = [
    ("nul", 0x00),
    ("soh", 0x01),
    ("stx", 0x02),
    ("etx", 0x03),
    ("eot", 0x04),
    ("enq", 0x05),
    ("ack", 0x06),
    ("bel", 0x07),
    ("bs", 0x08),
    ("ht", 0x09),
    ("nl", 0x0a),
    ("vt", 0x0b),
    ("ff", 0x0c),
    ("cr", 0x0d),
    ("so", 0x0e),
    ("si", 0x0f),
    ("dle", 0x10),
    ("dc1", 0x11),
    ("dc2", 0x12),
    ("dc3", 0x13),
    ("dc4", 0x14),
    ("nak", 0x15),
    ("syn", 0x16),
    ("etb", 0x17),
    ("can", 0x18),
    ("em", 0x19),
    ("sub", 0x1a),
    ("esc", 0x1b),
    ("fs", 0x1c),
    ("gs", 0x1d),
    ("rs", 0x1e),
    ("us", 0x1f),
    ("sp", 0x20),
    ("del", 0x7f),
];

/// Backslash escapes printed by `od -c` and `hexdump -c`.
pub const CHAR_ESCAPES: [(&str, u8); 9] = [
    ("\\0", 0x00),
    ("\\a", 0x07),
    ("\\b", 0x08),
    ("\\t", 0x09),
    ("\\n", 0x0a),
    ("\\v", 0x0b),
    ("\\f", 0x0c),
    ("\\r", 0x0d),
    ("\\\\", b'\\'),
];

/// Looks up an `od -a` mnemonic, ignoring ASCII case.
pub fn named_char(name: &str) -> Option<u8> {
    NAMED_CHARS
        .iter()
        .find(|(mnemonic, _)| mnemonic.eq_ignore_ascii_case(name))
        .map(|&(_, byte)| byte)
}

/// Looks up a backslash escape exactly as printed.
pub fn char_escape(text: &str) -> Option<u8> {
    CHAR_ESCAPES
        .iter()
        .find(|(escape, _)| *escape == text)
        .map(|&(_, byte)| byte)
}
