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

use crate::config::{DumpFormatConfig, DumpOptions};
use crate::parser::HexdumpParser;
use crate::DumpResult;
use bytes::Bytes;
use tracing::{debug, instrument};

/// Reconstructs the bytes behind a complete dump.
///
/// The decoder itself is immutable; every call to [`HexdumpDecoder::decode`]
/// builds its own parser, so one decoder may be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct HexdumpDecoder {
    config: DumpFormatConfig,
}

impl HexdumpDecoder {
    pub fn new(config: DumpFormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DumpFormatConfig {
        &self.config
    }

    /// Decodes `text` line by line.
    ///
    /// Either the whole dump decodes or an error naming the first bad line is
    /// returned.
    #[instrument(skip_all, fields(style = %self.config.dump_style(), encoding = %self.config.encoding()))]
    pub fn decode(&self, text: &str) -> DumpResult<Bytes> {
        let mut parser = HexdumpParser::new(self.config.clone());
        for line in text.lines() {
            parser.feed_line(line)?;
        }
        let lines = parser.line_number();
        let output = parser.finish();
        debug!(lines, bytes = output.len(), "decoded dump");
        Ok(output)
    }
}

/// Validates `options` and decodes `text` in one step.
pub fn decode_hexdump(text: &str, options: &DumpOptions) -> DumpResult<Bytes> {
    let config = DumpFormatConfig::from_options(options)?;
    HexdumpDecoder::new(config).decode(text)
}
