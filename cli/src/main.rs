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

//! Hexkit command line: turns `od`/`hexdump` output back into bytes and runs
//! the text codecs over files or standard input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use hexkit_dumpcodec::{DumpFormatConfig, DumpOptions, HexdumpCodec};
use hexkit_textcodec::{
    Base64Mode, XorCipher, base64_decode, base64_encode, hex_escape, hex_unescape, js_escape,
    js_unescape, zlib_deflate, zlib_deflate_with_level, zlib_inflate,
};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio_util::codec::{Decoder, FramedRead};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexkit")]
#[command(author, version, about = "Hexdump reversal and binary/text codecs")]
#[command(long_about = "
Reads a file, or standard input when no file is given, and writes the result
to standard output. Set RUST_LOG=debug to see what the decoder is doing.

Examples:
  hexkit unhexdump --encoding hex_bytes firmware.hex > firmware.bin
  od -x data.bin | hexkit unhexdump --format od --encoding hex_shorts
  hexkit xor --key secret payload.bin
  hexkit base64 --mode strict --decode token.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct raw bytes from od or hexdump output
    Unhexdump {
        /// Tool that produced the dump (od, hexdump)
        #[arg(short, long, default_value = "hexdump")]
        format: String,

        /// Word encoding (hex_bytes, octal_shorts, named_chars, floats, ...)
        #[arg(short, long, default_value = "hex")]
        encoding: String,

        /// Byte order of multi-byte words (little, big, network)
        #[arg(long, default_value = "little")]
        endian: String,

        /// Bytes per dump row
        #[arg(short, long, default_value_t = hexkit_dumpcodec::DEFAULT_SEGMENT_LENGTH)]
        segment: usize,

        /// Radix of the offset column (8, 10, 16)
        #[arg(short, long)]
        address_base: Option<u32>,

        /// Most bytes a single `*` line may expand to
        #[arg(long, default_value_t = hexkit_dumpcodec::DEFAULT_MAX_SQUEEZE_LENGTH)]
        max_squeeze: usize,

        /// Dump file to read
        file: Option<PathBuf>,
    },

    /// XOR data with a repeating key
    Xor {
        /// Key text
        #[arg(short, long)]
        key: String,

        /// File to read
        file: Option<PathBuf>,
    },

    /// Escape every byte as \xNN
    HexEscape {
        /// File to read
        file: Option<PathBuf>,
    },

    /// Decode \xNN, octal, \uXXXX and C escapes
    HexUnescape {
        /// File to read
        file: Option<PathBuf>,
    },

    /// Escape text as a JavaScript string body
    JsEscape {
        /// File to read
        file: Option<PathBuf>,
    },

    /// Decode JavaScript \x, \u and % escapes
    JsUnescape {
        /// File to read
        file: Option<PathBuf>,
    },

    /// Base64 encode or decode
    Base64 {
        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        /// Variant (normal, strict, url)
        #[arg(short, long, default_value = "normal")]
        mode: String,

        /// File to read
        file: Option<PathBuf>,
    },

    /// zlib compress or decompress
    Zlib {
        /// Decompress instead of compress
        #[arg(short, long)]
        decompress: bool,

        /// Compression level (0-9)
        #[arg(short, long)]
        level: Option<u32>,

        /// File to read
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Unhexdump {
            format,
            encoding,
            endian,
            segment,
            address_base,
            max_squeeze,
            file,
        } => {
            let options = DumpOptions::default()
                .with_dump_style(format)
                .with_encoding(encoding)
                .with_endian(endian)
                .with_segment_length(segment)
                .with_address_base(address_base);
            let config =
                DumpFormatConfig::from_options(&options)?.with_max_squeeze_length(max_squeeze);
            info!(style = %config.dump_style(), encoding = %config.encoding(), "unhexdump");
            let written = stream(file.as_deref(), HexdumpCodec::new(config)).await?;
            debug!(bytes = written, "unhexdump complete");
        }
        Commands::Xor { key, file } => {
            let cipher = XorCipher::new(key.as_str())?;
            stream(file.as_deref(), cipher).await?;
        }
        Commands::HexEscape { file } => {
            let data = read_input(file.as_deref()).await?;
            write_output(hex_escape(&data).as_bytes()).await?;
        }
        Commands::HexUnescape { file } => {
            let text = read_text(file.as_deref()).await?;
            write_output(&hex_unescape(&text)).await?;
        }
        Commands::JsEscape { file } => {
            let text = read_text(file.as_deref()).await?;
            write_output(js_escape(&text).as_bytes()).await?;
        }
        Commands::JsUnescape { file } => {
            let text = read_text(file.as_deref()).await?;
            write_output(js_unescape(&text).as_bytes()).await?;
        }
        Commands::Base64 { decode, mode, file } => {
            let mode: Base64Mode = mode.parse()?;
            if decode {
                let text = read_text(file.as_deref()).await?;
                write_output(&base64_decode(text.trim_end(), mode)?).await?;
            } else {
                let data = read_input(file.as_deref()).await?;
                write_output(base64_encode(&data, mode).as_bytes()).await?;
            }
        }
        Commands::Zlib {
            decompress,
            level,
            file,
        } => {
            let data = read_input(file.as_deref()).await?;
            let output = match (decompress, level) {
                (true, _) => zlib_inflate(&data)?,
                (false, Some(level)) => zlib_deflate_with_level(&data, level)?,
                (false, None) => zlib_deflate(&data)?,
            };
            write_output(&output).await?;
        }
    }

    Ok(())
}

async fn open_input(path: Option<&Path>) -> Result<Box<dyn AsyncRead + Unpin>> {
    match path {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(tokio::io::stdin())),
    }
}

async fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut input = open_input(path).await?;
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .await
        .context("failed to read input")?;
    Ok(data)
}

async fn read_text(path: Option<&Path>) -> Result<String> {
    let data = read_input(path).await?;
    String::from_utf8(data).context("input is not valid UTF-8")
}

async fn write_output(data: &[u8]) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(data).await?;
    stdout.flush().await?;
    Ok(())
}

// Pipes the input through `codec`, writing each chunk as soon as it is decoded.
async fn stream<C>(path: Option<&Path>, codec: C) -> Result<usize>
where
    C: Decoder<Item = tokio_util::bytes::Bytes> + Unpin,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    let input = open_input(path).await?;
    let mut frames = FramedRead::new(input, codec);
    let mut stdout = tokio::io::stdout();
    let mut written = 0;
    while let Some(chunk) = frames.next().await {
        let chunk = chunk?;
        written += chunk.len();
        stdout.write_all(&chunk).await?;
    }
    stdout.flush().await?;
    Ok(written)
}
