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

//! Property tests for the text codecs

use bytes::BytesMut;
use hexkit_textcodec::{
    Base64Mode, Endian, XorCipher, base64_decode, base64_encode, depack, format_js, hex_escape,
    hex_unescape, js_escape, js_unescape, pack_uint, xor, zlib_deflate, zlib_inflate,
};
use proptest::prelude::*;
use tokio_util::codec::{Decoder, Encoder};

fn endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Little), Just(Endian::Big)]
}

proptest! {
    #[test]
    fn xor_is_an_involution(data in prop::collection::vec(any::<u8>(), 0..256),
                            key in prop::collection::vec(any::<u8>(), 1..16)) {
        let once = xor(&data, key.clone()).unwrap();
        prop_assert_eq!(xor(&once, key).unwrap(), data);
    }

    #[test]
    fn xor_stream_matches_one_shot(data in prop::collection::vec(any::<u8>(), 0..256),
                                   key in prop::collection::vec(any::<u8>(), 1..16),
                                   split in 0usize..256) {
        let split = split.min(data.len());
        let mut cipher = XorCipher::new(key.clone()).unwrap();
        let mut wire = BytesMut::new();
        cipher.encode(&data[..split], &mut wire).unwrap();
        cipher.encode(&data[split..], &mut wire).unwrap();
        prop_assert_eq!(wire.to_vec(), xor(&data, key.clone()).unwrap());

        let mut decoder = XorCipher::new(key).unwrap();
        let plain = decoder.decode(&mut wire).unwrap().unwrap_or_default();
        prop_assert_eq!(plain.to_vec(), data);
    }

    #[test]
    fn hex_escape_reverses(data in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(hex_unescape(&hex_escape(&data)), data);
    }

    #[test]
    fn js_escape_reverses(text in "[^%]{0,64}") {
        prop_assert_eq!(js_unescape(&js_escape(&text)), text.clone());
        prop_assert_eq!(js_unescape(&format_js(&text)), text);
    }

    #[test]
    fn base64_modes_reverse(data in prop::collection::vec(any::<u8>(), 0..200)) {
        for mode in [Base64Mode::Normal, Base64Mode::Strict, Base64Mode::UrlSafe] {
            let encoded = base64_encode(&data, mode);
            prop_assert_eq!(base64_decode(&encoded, mode).unwrap(), data.clone());
        }
    }

    #[test]
    fn zlib_reverses(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(zlib_inflate(&zlib_deflate(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn pack_then_depack(value in any::<u64>(), width in 1usize..=8, endian in endian()) {
        let value = if width == 8 { value } else { value & ((1u64 << (width * 8)) - 1) };
        let packed = pack_uint(value, endian, width).unwrap();
        prop_assert_eq!(packed.len(), width);
        prop_assert_eq!(depack(&packed, endian, width).unwrap(), value);
    }
}

#[test]
fn big_endian_is_reverse_of_little() {
    let little = pack_uint(0x0102_0304, Endian::Little, 4).unwrap();
    let mut big = pack_uint(0x0102_0304, Endian::Big, 4).unwrap();
    big.reverse();
    assert_eq!(little, big);
}
