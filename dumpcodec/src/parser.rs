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

use crate::config::DumpFormatConfig;
use crate::consts::SQUEEZE_MARKER;
use crate::tokenizer::{Token, Tokenizer};
use crate::word::WordDecoder;
use crate::DumpResult;
use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

/// Assembles decoded rows into the output byte stream, one line at a time.
///
/// Besides concatenating words, the parser understands the two row-level
/// conventions shared by `od` and `hexdump`:
///
/// - a `*` line means the previous row repeats until the next offset;
/// - a trailing offset-only line gives the true length of the data, which
///   trims the padding of a final partial word.
///
/// The most recent row is held back until the next line proves it is not
/// followed by a length line, so [`HexdumpParser::take_ready`] only ever
/// returns bytes that are final.
pub struct HexdumpParser {
    config: DumpFormatConfig,
    words: WordDecoder,
    /// Number of lines fed so far.
    line_number: usize,
    /// Offset of the first data row.
    first_offset: Option<u64>,
    /// Offset of the most recent data row.
    last_offset: Option<u64>,
    /// Offset of a trailing line that carried no words.
    summary_offset: Option<u64>,
    /// A `*` line has been seen since the last data row.
    squeezed: bool,
    /// Bytes of the most recent data row.
    last_row: Bytes,
    /// Final bytes not yet taken.
    ready: BytesMut,
    /// Held-back copy of the most recent row, possibly a squeeze repetition.
    pending: BytesMut,
    /// Total bytes ever moved into `ready`.
    released: u64,
}

impl HexdumpParser {
    pub fn new(config: DumpFormatConfig) -> Self {
        let words = WordDecoder::new(&config);
        Self {
            config,
            words,
            line_number: 0,
            first_offset: None,
            last_offset: None,
            summary_offset: None,
            squeezed: false,
            last_row: Bytes::new(),
            ready: BytesMut::new(),
            pending: BytesMut::new(),
            released: 0,
        }
    }

    pub fn config(&self) -> &DumpFormatConfig {
        &self.config
    }

    /// Number of lines fed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Decodes one line of dump text, without its line terminator.
    pub fn feed_line(&mut self, line: &str) -> DumpResult<()> {
        self.line_number += 1;
        let mut tokenizer = Tokenizer::new(line, self.line_number, &self.config);

        let Some(offset_token) = tokenizer.offset() else {
            trace!(line = self.line_number, "blank line");
            return Ok(());
        };
        if offset_token.text == SQUEEZE_MARKER {
            trace!(line = self.line_number, "squeeze marker");
            self.squeezed = true;
            return Ok(());
        }
        let offset = self.parse_offset(&offset_token)?;

        let mut row = BytesMut::with_capacity(self.config.segment_length());
        for token in tokenizer {
            self.words.decode_into(&token?, &mut row)?;
        }
        row.truncate(self.config.segment_length());

        if self.squeezed {
            self.expand_squeeze(&offset_token, offset)?;
        }

        if row.is_empty() {
            trace!(line = self.line_number, offset, "offset-only line");
            self.summary_offset = Some(offset);
            return Ok(());
        }

        trace!(line = self.line_number, offset, len = row.len(), "row");
        self.first_offset.get_or_insert(offset);
        self.last_offset = Some(offset);
        self.summary_offset = None;
        self.last_row = row.clone().freeze();
        self.push_row(&row);
        Ok(())
    }

    /// Returns every byte that can no longer change.
    pub fn take_ready(&mut self) -> Bytes {
        self.ready.split().freeze()
    }

    /// Flushes the held-back row, applying a trailing length line if one was
    /// seen, and resets the parser for a new dump.
    pub fn finish(&mut self) -> Bytes {
        if let (Some(first), Some(summary)) = (self.first_offset, self.summary_offset) {
            self.truncate_to(summary.saturating_sub(first));
        }
        self.release_pending();
        let output = self.take_ready();
        self.clear();
        output
    }

    /// Forgets all state, including bytes that were not taken.
    pub fn clear(&mut self) {
        self.line_number = 0;
        self.first_offset = None;
        self.last_offset = None;
        self.summary_offset = None;
        self.squeezed = false;
        self.last_row = Bytes::new();
        self.ready.clear();
        self.pending.clear();
        self.released = 0;
    }

    fn parse_offset(&self, token: &Token<'_>) -> DumpResult<u64> {
        let base = self.config.address_base();
        u64::from_str_radix(token.text, base)
            .map_err(|_| token.malformed(format!("expected a base {} offset", base)))
    }

    fn push_row(&mut self, row: &[u8]) {
        self.release_pending();
        self.pending.extend_from_slice(row);
    }

    fn release_pending(&mut self) {
        self.released += self.pending.len() as u64;
        let pending = self.pending.split();
        self.ready.unsplit(pending);
    }

    // Repeats the previous row to fill the gap up to `offset`.
    fn expand_squeeze(&mut self, token: &Token<'_>, offset: u64) -> DumpResult<()> {
        self.squeezed = false;
        let Some(previous) = self.last_offset else {
            return Ok(());
        };
        if offset < previous {
            return Err(token.malformed(format!(
                "offset goes backwards after a squeezed run (previous row at {})",
                previous
            )));
        }
        let row_len = self.last_row.len() as u64;
        if row_len == 0 {
            return Ok(());
        }
        let repeats = ((offset - previous) / row_len).saturating_sub(1);
        let limit = self.config.max_squeeze_length() as u64;
        let expanded = repeats.saturating_mul(row_len);
        if expanded > limit {
            return Err(token.malformed(format!(
                "squeezed run of {} bytes exceeds the {} byte limit",
                expanded, limit
            )));
        }
        debug!(line = self.line_number, previous, offset, repeats, "expanding squeezed rows");
        let row = self.last_row.clone();
        for _ in 0..repeats {
            self.push_row(&row);
        }
        self.last_offset = Some(previous + repeats * row_len);
        Ok(())
    }

    // Caps the total output at `len` bytes, trimming only the held-back row.
    fn truncate_to(&mut self, len: u64) {
        let total = self.released + self.pending.len() as u64;
        if len >= total {
            return;
        }
        let keep = len.saturating_sub(self.released) as usize;
        debug!(
            total,
            len,
            trimmed = self.pending.len() - keep,
            "truncating to final offset"
        );
        self.pending.truncate(keep);
    }
}
