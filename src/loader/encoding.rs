//! CSVの文字コード判定
//!
//! 候補の文字コードを順に試し、最初にデコードできたものを採用する。

use crate::error::{CpnError, Result};
use std::fmt;

/// 既定の候補順
pub const DEFAULT_ENCODINGS: &[TextEncoding] = &[
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

const UTF8_BOM: &str = "\u{feff}";

/// 対応する文字コード
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// ISO-8859-1（1バイト = 1コードポイント）
    Latin1,
    Windows1252,
}

impl TextEncoding {
    /// デコードする。不正なバイト列なら `None`
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => encoding_rs::UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.strip_prefix(UTF8_BOM).unwrap_or(&*text).to_string()),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

/// 候補を順に試してデコードする
pub fn decode_with_fallback(
    bytes: &[u8],
    candidates: &[TextEncoding],
    source: &str,
) -> Result<(String, TextEncoding)> {
    for &encoding in candidates {
        match encoding.decode(bytes) {
            Some(text) => {
                tracing::debug!(%source, %encoding, "decoded");
                return Ok((text, encoding));
            }
            None => tracing::debug!(%source, %encoding, "decode failed, trying next"),
        }
    }

    Err(CpnError::Decoding(source.to_string()))
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
            "cp1252" | "windows-1252" | "win1252" => Ok(TextEncoding::Windows1252),
            _ => Err(format!("Unknown encoding: {}. Use utf-8, latin1, or cp1252", s)),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "latin1"),
            TextEncoding::Windows1252 => write!(f, "cp1252"),
        }
    }
}
