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

//! # Hexkit Text Codecs
//!
//! Small binary/text transformations used around the hexdump decoder:
//!
//! - **XOR** over a repeating key, one-shot ([`xor`]) or streaming ([`XorCipher`])
//! - **Hex escaping**: [`hex_escape`], [`hex_unescape`], plain [`hex_encode`]/[`hex_decode`]
//! - **JavaScript escaping**: [`js_escape`], [`format_js`], [`js_unescape`]
//! - **Base64** in [`Base64Mode::Normal`], [`Base64Mode::Strict`] and [`Base64Mode::UrlSafe`]
//! - **zlib**: [`zlib_deflate`], [`zlib_inflate`]
//! - **Integer packing** by [`Endian`]: [`pack_uint`], [`depack`]
//!
//! ## Usage Example
//!
//! ```rust
//! use hexkit_textcodec::{Base64Mode, base64_decode, base64_encode, xor};
//!
//! let secret = xor(b"hello", "key").unwrap();
//! let wire = base64_encode(&secret, Base64Mode::Strict);
//! let back = xor(&base64_decode(&wire, Base64Mode::Strict).unwrap(), "key").unwrap();
//! assert_eq!(back, b"hello");
//! ```

mod base64;
mod hex;
mod js;
mod pack;
mod result;
mod xor;
mod zlib;

pub use self::base64::{BASE64_LINE_LENGTH, Base64Mode, base64_decode, base64_encode};
pub use self::hex::{hex_decode, hex_encode, hex_escape, hex_unescape};
pub use self::js::{format_js, format_js_char, js_escape, js_unescape};
pub use self::pack::{Endian, MAX_WORD_WIDTH, depack, fits_in_width, pack_uint, pack_uint_into};
pub use self::result::{TextCodecError, TextCodecResult};
pub use self::xor::{XorCipher, XorKey, xor};
pub use self::zlib::{zlib_deflate, zlib_deflate_with_level, zlib_inflate};
