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

//! Base64 with selectable flavour.
//!
//! | Mode      | Encoding                               | Decoding                       |
//! |-----------|----------------------------------------|--------------------------------|
//! | `Normal`  | standard alphabet, 60 column lines     | whitespace ignored, lax padding |
//! | `Strict`  | standard alphabet, single line         | canonical input only           |
//! | `UrlSafe` | URL alphabet, padded                   | URL alphabet, lax padding      |

use crate::{TextCodecError, TextCodecResult};
use ::base64::Engine;
use ::base64::alphabet;
use ::base64::engine::general_purpose::{STANDARD, URL_SAFE};
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use std::fmt;
use std::str::FromStr;

/// Line width of the MIME-style `Normal` encoding.
pub const BASE64_LINE_LENGTH: usize = 60;

const LAX_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

const LAX_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 flavour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Base64Mode {
    /// Line-wrapped standard alphabet
    #[default]
    Normal,
    /// Single-line standard alphabet, canonical decoding
    Strict,
    /// URL and filename safe alphabet
    UrlSafe,
}

impl Base64Mode {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Base64Mode::Normal => "normal",
            Base64Mode::Strict => "strict",
            Base64Mode::UrlSafe => "urlsafe",
        }
    }
}

impl FromStr for Base64Mode {
    type Err = TextCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Base64Mode::Normal),
            "strict" => Ok(Base64Mode::Strict),
            "url" | "urlsafe" => Ok(Base64Mode::UrlSafe),
            other => Err(TextCodecError::InvalidBase64Mode(other.to_string())),
        }
    }
}

impl fmt::Display for Base64Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base64 encodes `data`.
///
/// ```
/// use hexkit_textcodec::{Base64Mode, base64_encode};
///
/// assert_eq!(base64_encode(b"hello", Base64Mode::Normal), "aGVsbG8=\n");
/// ```
pub fn base64_encode(data: &[u8], mode: Base64Mode) -> String {
    match mode {
        Base64Mode::Normal => {
            let encoded = STANDARD.encode(data);
            let mut wrapped =
                String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_LENGTH + 1);
            // The alphabet is ASCII, so splitting on byte boundaries is safe
            for line in encoded.as_bytes().chunks(BASE64_LINE_LENGTH) {
                wrapped.extend(line.iter().map(|&b| b as char));
                wrapped.push('\n');
            }
            wrapped
        }
        Base64Mode::Strict => STANDARD.encode(data),
        Base64Mode::UrlSafe => URL_SAFE.encode(data),
    }
}

/// Base64 decodes `text`.
pub fn base64_decode(text: &str, mode: Base64Mode) -> TextCodecResult<Vec<u8>> {
    let decoded = match mode {
        Base64Mode::Normal => {
            let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            LAX_STANDARD.decode(compact)?
        }
        Base64Mode::Strict => STANDARD.decode(text)?,
        Base64Mode::UrlSafe => LAX_URL_SAFE.decode(text.trim())?,
    };
    Ok(decoded)
}
