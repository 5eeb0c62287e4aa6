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

//! XOR over a repeating key.
//!
//! [`xor`] encodes a whole buffer at once. [`XorCipher`] keeps its key position
//! between calls so a stream can be processed in arbitrary chunks, and plugs into
//! `tokio_util` framed I/O as both an [`Encoder`] and a [`Decoder`].
//!
//! ```
//! use hexkit_textcodec::xor;
//!
//! assert_eq!(xor(b"hello", 0x41u8).unwrap(), b")$--.");
//! ```

use crate::{TextCodecError, TextCodecResult};
use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Key bytes for an XOR operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorKey(Vec<u8>);

impl XorKey {
    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<u8> for XorKey {
    fn from(byte: u8) -> Self {
        XorKey(vec![byte])
    }
}

impl From<&[u8]> for XorKey {
    fn from(bytes: &[u8]) -> Self {
        XorKey(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for XorKey {
    fn from(bytes: &[u8; N]) -> Self {
        XorKey(bytes.to_vec())
    }
}

impl From<Vec<u8>> for XorKey {
    fn from(bytes: Vec<u8>) -> Self {
        XorKey(bytes)
    }
}

impl From<&str> for XorKey {
    fn from(text: &str) -> Self {
        XorKey(text.as_bytes().to_vec())
    }
}

/// XOR encodes `data` against a repeating `key`.
///
/// XOR is its own inverse, so the same call decodes.
pub fn xor(data: &[u8], key: impl Into<XorKey>) -> TextCodecResult<Vec<u8>> {
    let mut cipher = XorCipher::new(key)?;
    let mut output = data.to_vec();
    cipher.apply(&mut output);
    Ok(output)
}

/// Streaming XOR cipher.
///
/// The key position advances by one for every byte processed, across calls.
/// Use one instance per direction when framing a duplex stream.
#[derive(Clone, Debug)]
pub struct XorCipher {
    key: Vec<u8>,
    index: usize,
}

impl XorCipher {
    /// Creates a cipher starting at the first key byte.
    pub fn new(key: impl Into<XorKey>) -> TextCodecResult<Self> {
        let XorKey(key) = key.into();
        if key.is_empty() {
            return Err(TextCodecError::EmptyKey);
        }
        Ok(Self { key, index: 0 })
    }

    /// XORs `data` in place, continuing from the current key position.
    pub fn apply(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.key[self.index];
            self.index = (self.index + 1) % self.key.len();
        }
    }

    /// Index of the key byte that will be used next.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Rewinds to the first key byte.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Encoder<&[u8]> for XorCipher {
    type Error = TextCodecError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> TextCodecResult<()> {
        let start = dst.len();
        dst.extend_from_slice(item);
        self.apply(&mut dst[start..]);
        Ok(())
    }
}

impl Decoder for XorCipher {
    type Item = Bytes;
    type Error = TextCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> TextCodecResult<Option<Self::Item>> {
        if src.is_empty() {
            return Ok(None);
        }
        let mut chunk = src.split();
        self.apply(&mut chunk);
        Ok(Some(chunk.freeze()))
    }
}
