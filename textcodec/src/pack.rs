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

//! Integer packing and unpacking by byte order.
//!
//! Words of 1 through 8 bytes are packed into, and unpacked from, raw bytes in
//! either little-endian or big-endian (network) order.
//!
//! ```
//! use hexkit_textcodec::{Endian, depack, pack_uint};
//!
//! assert_eq!(pack_uint(0x41, Endian::Little, 4).unwrap(), b"A\0\0\0");
//! assert_eq!(depack(b"A\0", Endian::Big, 2).unwrap(), 0x4100);
//! ```

use crate::{TextCodecError, TextCodecResult};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::BytesMut;
use std::fmt;
use std::str::FromStr;

/// Largest supported word width in bytes.
pub const MAX_WORD_WIDTH: usize = 8;

/// Byte order of a multi-byte word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

impl Endian {
    /// Network byte order, which is big-endian.
    pub const NETWORK: Endian = Endian::Big;

    /// Byte order of the host this code was compiled for.
    pub fn native() -> Endian {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }
}

impl FromStr for Endian {
    type Err = TextCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" => Ok(Endian::Little),
            "big" | "network" => Ok(Endian::Big),
            other => Err(TextCodecError::InvalidEndian(other.to_string())),
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_width(width: usize) -> TextCodecResult<()> {
    if width == 0 || width > MAX_WORD_WIDTH {
        return Err(TextCodecError::InvalidWidth(width));
    }
    Ok(())
}

/// Returns `true` if `value` can be represented in `width` bytes.
pub fn fits_in_width(value: u64, width: usize) -> bool {
    width >= MAX_WORD_WIDTH || value >> (width * 8) == 0
}

/// Appends `value` to `dst` as a `width`-byte word in the given byte order.
pub fn pack_uint_into(
    value: u64,
    endian: Endian,
    width: usize,
    dst: &mut BytesMut,
) -> TextCodecResult<()> {
    check_width(width)?;
    if !fits_in_width(value, width) {
        return Err(TextCodecError::ValueOverflow { value, width });
    }
    let mut word = [0u8; MAX_WORD_WIDTH];
    match endian {
        Endian::Little => LittleEndian::write_uint(&mut word[..width], value, width),
        Endian::Big => BigEndian::write_uint(&mut word[..width], value, width),
    }
    dst.extend_from_slice(&word[..width]);
    Ok(())
}

/// Packs `value` into a `width`-byte word in the given byte order.
pub fn pack_uint(value: u64, endian: Endian, width: usize) -> TextCodecResult<Vec<u8>> {
    let mut buf = BytesMut::with_capacity(width);
    pack_uint_into(value, endian, width, &mut buf)?;
    Ok(buf.to_vec())
}

/// Unpacks the first `width` bytes of `bytes` into an integer.
///
/// Bytes beyond `width` are ignored.
pub fn depack(bytes: &[u8], endian: Endian, width: usize) -> TextCodecResult<u64> {
    check_width(width)?;
    if bytes.len() < width {
        return Err(TextCodecError::InsufficientData {
            required: width,
            available: bytes.len(),
        });
    }
    Ok(match endian {
        Endian::Little => LittleEndian::read_uint(bytes, width),
        Endian::Big => BigEndian::read_uint(bytes, width),
    })
}
