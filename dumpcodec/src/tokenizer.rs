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

use crate::config::{DumpFormatConfig, DumpStyle, WordKind};
use crate::consts::{CHAR_CELL_WIDTH, OD_PREVIEW_DELIMITER, PREVIEW_DELIMITER};
use crate::{DumpError, DumpResult};

/// How a token's text is interpreted by the word decoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer or floating point literal
    Numeric,
    /// `od -c` / `hexdump -c` character cell
    Char,
    /// `od -a` character cell
    Named,
}

/// A single field of a dump line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Field text with surrounding whitespace removed
    pub text: &'a str,
    /// 1-based line number
    pub line: usize,
    /// 1-based character column of the first character of the field
    pub column: usize,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Builds a [`DumpError::MalformedToken`] pointing at this token.
    pub fn malformed(&self, reason: impl Into<String>) -> DumpError {
        DumpError::MalformedToken {
            line: self.line,
            column: self.column,
            token: self.text.to_string(),
            reason: reason.into(),
        }
    }

    /// Builds a [`DumpError::WordOverflow`] pointing at this token.
    pub fn overflow(&self, width: usize) -> DumpError {
        DumpError::WordOverflow {
            line: self.line,
            column: self.column,
            token: self.text.to_string(),
            width,
        }
    }
}

/// Scanner position within a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// The offset column has not been read yet.
    ScanningOffset,
    /// Data words are being produced.
    ScanningWords,
    /// The row is complete; everything left on the line is ignored.
    Done,
}

/// Lazily splits one dump line into its offset and data words.
///
/// The first whitespace-delimited field is always the offset column. Numeric
/// encodings then read whitespace-delimited fields; character encodings read
/// fixed-width cells. No more than [`DumpFormatConfig::words_per_row`] words
/// are produced, anything past that is an annotation column and is skipped
/// without being looked at.
pub struct Tokenizer<'a> {
    line: &'a str,
    line_number: usize,
    style: DumpStyle,
    kind: WordKind,
    base: u32,
    max_words: usize,
    words: usize,
    cursor: usize,
    offset: Option<Token<'a>>,
    state: ScanState,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `line`, which is line `line_number` (1-based)
    /// of the dump.
    pub fn new(line: &'a str, line_number: usize, config: &DumpFormatConfig) -> Self {
        // Whitespace at the end of a line is never a character cell.
        Self {
            line: line.trim_end(),
            line_number,
            style: config.dump_style(),
            kind: config.word_kind(),
            base: config.numeric_base(),
            max_words: config.words_per_row(),
            words: 0,
            cursor: 0,
            offset: None,
            state: ScanState::ScanningOffset,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The offset column of this line, or `None` for a blank line.
    pub fn offset(&mut self) -> Option<Token<'a>> {
        if self.state == ScanState::ScanningOffset {
            self.scan_offset();
        }
        self.offset
    }

    fn scan_offset(&mut self) {
        match self.next_field() {
            Some(token) => {
                self.offset = Some(token);
                self.state = ScanState::ScanningWords;
            }
            None => self.state = ScanState::Done,
        }
    }

    fn column_of(&self, index: usize) -> usize {
        self.line[..index].chars().count() + 1
    }

    // Next whitespace-delimited field starting at or after the cursor.
    fn next_field(&mut self) -> Option<Token<'a>> {
        let rest = &self.line[self.cursor..];
        let start = self.cursor + (rest.len() - rest.trim_start().len());
        if start >= self.line.len() {
            self.cursor = self.line.len();
            return None;
        }
        let end = self.line[start..]
            .find(char::is_whitespace)
            .map_or(self.line.len(), |len| start + len);
        self.cursor = end;
        Some(Token {
            text: &self.line[start..end],
            line: self.line_number,
            column: self.column_of(start),
            kind: TokenKind::Numeric,
        })
    }

    // Next non-empty fixed-width cell starting at the cursor.
    fn next_cell(&mut self) -> Option<Token<'a>> {
        let kind = match self.kind {
            WordKind::Named => TokenKind::Named,
            _ => TokenKind::Char,
        };
        while self.cursor < self.line.len() {
            let start = self.cursor;
            let mut chars = self.line[start..].char_indices();
            let (end, count) = match chars.nth(CHAR_CELL_WIDTH) {
                Some((len, _)) => (start + len, CHAR_CELL_WIDTH),
                None => (self.line.len(), self.line[start..].chars().count()),
            };
            self.cursor = end;

            let cell = &self.line[start..end];
            let text = cell.trim();
            if !text.is_empty() {
                let leading = cell.len() - cell.trim_start().len();
                return Some(Token {
                    text,
                    line: self.line_number,
                    column: self.column_of(start + leading),
                    kind,
                });
            }
            // A full blank cell is a space character, padding otherwise.
            if count == CHAR_CELL_WIDTH && kind == TokenKind::Char {
                return Some(Token {
                    text: " ",
                    line: self.line_number,
                    column: self.column_of(start) + CHAR_CELL_WIDTH - 1,
                    kind,
                });
            }
        }
        None
    }

    fn is_numeric_literal(&self, text: &str) -> bool {
        match self.kind {
            WordKind::Float => text.parse::<f64>().is_ok(),
            _ => {
                let digits = match text.strip_prefix('-') {
                    Some(rest) if self.base == 10 => rest,
                    _ => text,
                };
                !digits.is_empty() && digits.chars().all(|c| c.is_digit(self.base))
            }
        }
    }

    fn next_word(&mut self) -> Option<DumpResult<Token<'a>>> {
        match self.kind {
            WordKind::Char | WordKind::Named => self.next_cell().map(Ok),
            WordKind::Integer | WordKind::Float => {
                let token = self.next_field()?;
                let preview = match self.style {
                    DumpStyle::Hexdump => PREVIEW_DELIMITER,
                    DumpStyle::Od => OD_PREVIEW_DELIMITER,
                };
                if token.text.starts_with(preview) {
                    return None;
                }
                if self.is_numeric_literal(token.text) {
                    Some(Ok(token))
                } else {
                    let reason = match self.kind {
                        WordKind::Float => "expected a decimal floating point number".to_string(),
                        _ => format!("expected a base {} integer", self.base),
                    };
                    Some(Err(token.malformed(reason)))
                }
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = DumpResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == ScanState::ScanningOffset {
            self.scan_offset();
        }
        if self.state != ScanState::ScanningWords || self.words >= self.max_words {
            self.state = ScanState::Done;
            return None;
        }
        match self.next_word() {
            Some(Ok(token)) => {
                self.words += 1;
                Some(Ok(token))
            }
            Some(Err(error)) => {
                self.state = ScanState::Done;
                Some(Err(error))
            }
            None => {
                self.state = ScanState::Done;
                None
            }
        }
    }
}
