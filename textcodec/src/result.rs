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

//! Error types and result aliases for the text codecs

/// Result type for text codec operations
pub type TextCodecResult<T> = Result<T, TextCodecError>;

/// Errors that can occur while encoding or decoding with the text codecs
#[derive(Debug, thiserror::Error)]
pub enum TextCodecError {
    /// An XOR key with no bytes was supplied
    #[error("XOR key must not be empty")]
    EmptyKey,

    /// A word width outside of 1 through 8 bytes was requested
    #[error("Invalid word width {0} (expected 1 through 8 bytes)")]
    InvalidWidth(usize),

    /// A value does not fit in the requested word width
    #[error("Value {value:#x} does not fit in {width} byte(s)")]
    ValueOverflow {
        /// The value that was being packed
        value: u64,
        /// The word width in bytes
        width: usize,
    },

    /// Not enough bytes were supplied to unpack a word
    #[error("Insufficient data (required: {required}, available: {available})")]
    InsufficientData {
        /// Number of bytes required
        required: usize,
        /// Number of bytes available
        available: usize,
    },

    /// An unrecognized endianness name
    #[error("Invalid endian {0:?} (expected little, big or network)")]
    InvalidEndian(String),

    /// An unrecognized Base64 mode name
    #[error("Invalid Base64 mode {0:?} (expected normal, strict, url or urlsafe)")]
    InvalidBase64Mode(String),

    /// Plain hex decoding failed
    #[error("Hex error: {0}")]
    Hex(#[from] ::hex::FromHexError),

    /// Base64 decoding failed
    #[error("Base64 error: {0}")]
    Base64(#[from] ::base64::DecodeError),

    /// An I/O error, raised by zlib streams and the tokio-util codec contract
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
