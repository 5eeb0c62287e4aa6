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
use crate::parser::HexdumpParser;
use crate::{DumpError, DumpResult};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::Decoder;
use tracing::instrument;

/// Streaming hexdump decoder for use with tokio's framed I/O.
///
/// Each call to [`Decoder::decode`] consumes every complete line in the buffer
/// and yields the bytes that are final so far. The last row is only released
/// by `decode_eof`, once it is known whether a trailing length line trims it.
/// The concatenated chunks equal [`crate::HexdumpDecoder::decode`] on the same
/// text.
pub struct HexdumpCodec {
    parser: HexdumpParser,
}

impl HexdumpCodec {
    pub fn new(config: DumpFormatConfig) -> Self {
        Self {
            parser: HexdumpParser::new(config),
        }
    }

    pub fn config(&self) -> &DumpFormatConfig {
        self.parser.config()
    }

    fn feed(&mut self, line: &[u8]) -> DumpResult<()> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        match std::str::from_utf8(line) {
            Ok(text) => self.parser.feed_line(text),
            Err(err) => Err(DumpError::MalformedToken {
                line: self.parser.line_number() + 1,
                column: 1,
                token: String::from_utf8_lossy(line).into_owned(),
                reason: format!("line is not valid UTF-8: {}", err),
            }),
        }
    }

    fn chunk(bytes: Bytes) -> Option<Bytes> {
        if bytes.is_empty() { None } else { Some(bytes) }
    }
}

impl Decoder for HexdumpCodec {
    type Item = Bytes;
    type Error = DumpError;

    #[instrument(skip_all)]
    fn decode(&mut self, src: &mut BytesMut) -> DumpResult<Option<Bytes>> {
        while let Some(newline) = src.iter().position(|&b| b == b'\n') {
            let line = src.split_to(newline + 1);
            self.feed(&line[..newline])?;
        }
        Ok(Self::chunk(self.parser.take_ready()))
    }

    #[instrument(skip_all)]
    fn decode_eof(&mut self, src: &mut BytesMut) -> DumpResult<Option<Bytes>> {
        if let Some(chunk) = self.decode(src)? {
            return Ok(Some(chunk));
        }
        if !src.is_empty() {
            let line = src.split();
            self.feed(&line)?;
        }
        Ok(Self::chunk(self.parser.finish()))
    }
}
