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

//! Property tests: decoding a dump printed the way `od` prints it gives back
//! the original bytes, and the streaming codec agrees with the one-shot decoder.

use bytes::BytesMut;
use hexkit_dumpcodec::{
    DumpFormatConfig, DumpStyle, Encoding, Endian, HexdumpCodec, HexdumpDecoder, WordKind,
};
use hexkit_textcodec::depack;
use proptest::prelude::*;
use tokio_util::codec::Decoder;

fn integer_encoding() -> impl Strategy<Value = Encoding> {
    let encodings: Vec<Encoding> = Encoding::ALL
        .into_iter()
        .filter(|e| e.word_kind() == WordKind::Integer)
        .collect();
    prop::sample::select(encodings)
}

fn endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Little), Just(Endian::Big)]
}

fn format_word(value: u64, base: u32) -> String {
    match base {
        2 => format!("{:b}", value),
        8 => format!("{:o}", value),
        10 => format!("{}", value),
        _ => format!("{:x}", value),
    }
}

// Prints `data` in od layout: octal offsets, zero-padded final word, trailing
// length line.
fn dump(data: &[u8], config: &DumpFormatConfig) -> String {
    let width = config.word_width();
    let mut text = String::new();
    for (index, row) in data.chunks(config.segment_length()).enumerate() {
        text.push_str(&format!("{:07o}", index * config.segment_length()));
        for word in row.chunks(width) {
            let mut padded = word.to_vec();
            padded.resize(width, 0);
            let value = depack(&padded, config.endian(), width).unwrap();
            text.push(' ');
            text.push_str(&format_word(value, config.numeric_base()));
        }
        text.push('\n');
    }
    text.push_str(&format!("{:07o}\n", data.len()));
    text
}

fn stream(text: &str, config: DumpFormatConfig, split: usize) -> Vec<u8> {
    let mut codec = HexdumpCodec::new(config);
    let mut output = Vec::new();
    let split = split.min(text.len());
    let mut src = BytesMut::new();
    for part in [&text.as_bytes()[..split], &text.as_bytes()[split..]] {
        src.extend_from_slice(part);
        while let Some(chunk) = codec.decode(&mut src).unwrap() {
            output.extend_from_slice(&chunk);
        }
    }
    while let Some(chunk) = codec.decode_eof(&mut src).unwrap() {
        output.extend_from_slice(&chunk);
    }
    output
}

proptest! {
    #[test]
    fn od_dumps_decode_to_original(data in prop::collection::vec(any::<u8>(), 0..200),
                                   encoding in integer_encoding(),
                                   endian in endian(),
                                   rows in 1usize..4) {
        let config = DumpFormatConfig::new(DumpStyle::Od, encoding)
            .with_endian(endian)
            .with_segment_length(rows * 8)
            .unwrap();
        let text = dump(&data, &config);
        let decoded = HexdumpDecoder::new(config).decode(&text).unwrap();
        prop_assert_eq!(decoded.to_vec(), data);
    }

    #[test]
    fn codec_matches_one_shot(data in prop::collection::vec(any::<u8>(), 0..200),
                              encoding in integer_encoding(),
                              split in 0usize..2000) {
        let config = DumpFormatConfig::new(DumpStyle::Od, encoding);
        let text = dump(&data, &config);
        let one_shot = HexdumpDecoder::new(config.clone()).decode(&text).unwrap();
        prop_assert_eq!(stream(&text, config, split), one_shot.to_vec());
    }

    #[test]
    fn decoding_is_deterministic(text in "[0-9a-f \n*]{0,200}") {
        let decoder = HexdumpDecoder::new(
            DumpFormatConfig::new(DumpStyle::Hexdump, Encoding::HexBytes),
        );
        let first = decoder.decode(&text).map(|b| b.to_vec()).map_err(|e| e.to_string());
        let second = decoder.decode(&text).map(|b| b.to_vec()).map_err(|e| e.to_string());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_codec_without_trailing_newline() {
    let config = DumpFormatConfig::new(DumpStyle::Od, Encoding::HexShorts);
    let text = "0000000 6568 6c6c 006f\n0000005";
    assert_eq!(stream(text, config, 10), b"hello");
}
