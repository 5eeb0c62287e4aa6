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

//! # Hexkit Dump Codec
//!
//! Reconstructs raw bytes from the text printed by `od` and `hexdump`.
//!
//! A dump is described by a [`DumpFormatConfig`]: the [`DumpStyle`] that
//! produced it, the [`Encoding`] of each word, the [`Endian`] of multi-byte
//! words and the number of bytes per row. Each line is split by a
//! [`Tokenizer`] into an offset column and data words, and each word is turned
//! back into bytes by a [`WordDecoder`]. Squeezed (`*`) rows are expanded and
//! a trailing length line trims the padding of the last word.
//!
//! ## Usage Example
//!
//! ```rust
//! use hexkit_dumpcodec::{DumpFormatConfig, DumpStyle, Encoding, HexdumpDecoder};
//!
//! let dump = "\
//! 00000000  68 65 6c 6c 6f 0a                                 |hello.|
//! 00000006
//! ";
//! let config = DumpFormatConfig::new(DumpStyle::Hexdump, Encoding::HexBytes);
//! let bytes = HexdumpDecoder::new(config).decode(dump).unwrap();
//! assert_eq!(&bytes[..], b"hello\n");
//! ```
//!
//! For streams, [`HexdumpCodec`] implements `tokio_util::codec::Decoder` and
//! yields byte chunks as lines arrive.

mod codec;
mod config;
mod consts;
mod decoder;
mod parser;
mod result;
mod tokenizer;
mod word;

pub use self::codec::HexdumpCodec;
pub use self::config::{DumpFormatConfig, DumpOptions, DumpStyle, Encoding, WordKind};
pub use self::consts::{DEFAULT_MAX_SQUEEZE_LENGTH, DEFAULT_SEGMENT_LENGTH, NAMED_CHARS};
pub use self::decoder::{HexdumpDecoder, decode_hexdump};
pub use self::parser::HexdumpParser;
pub use self::result::{DumpError, DumpResult};
pub use self::tokenizer::{ScanState, Token, TokenKind, Tokenizer};
pub use self::word::WordDecoder;
pub use hexkit_textcodec::Endian;
