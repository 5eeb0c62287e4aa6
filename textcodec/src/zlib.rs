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

//! zlib (RFC 1950) wrapping of DEFLATE streams.

use crate::TextCodecResult;
use flate2::Compression;
use flate2::read::{ZlibDecoder, ZlibEncoder};
use std::io::Read;
use tracing::trace;

/// Compresses `data` into a zlib stream at the default level.
pub fn zlib_deflate(data: &[u8]) -> TextCodecResult<Vec<u8>> {
    zlib_deflate_with_level(data, Compression::default().level())
}

/// Compresses `data` into a zlib stream at `level` (0 through 9).
pub fn zlib_deflate_with_level(data: &[u8], level: u32) -> TextCodecResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(data, Compression::new(level.min(9)));
    let mut output = Vec::new();
    encoder.read_to_end(&mut output)?;
    trace!("Deflated {} bytes -> {} bytes", data.len(), output.len());
    Ok(output)
}

/// Decompresses a zlib stream.
pub fn zlib_inflate(data: &[u8]) -> TextCodecResult<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output)?;
    trace!("Inflated {} bytes -> {} bytes", data.len(), output.len());
    Ok(output)
}
