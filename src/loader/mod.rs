//! 表ファイルの読み込み
//!
//! - `.csv`: 文字コードを順に試してから区切りテキストとして解析
//! - `.xlsx` / `.xls` / `.xlsm` / `.ods`: 先頭シートを読み込み
//!
//! どちらも1行目をヘッダーとして扱う。

mod delimited;
pub mod encoding;
mod spreadsheet;

pub use delimited::parse_delimited;
pub use encoding::{decode_with_fallback, TextEncoding, DEFAULT_ENCODINGS};

use crate::error::{CpnError, Result};
use cpn_common::Table;
use std::path::Path;

/// 読み込みオプション
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// 試す文字コード（順番通り）
    pub encodings: Vec<TextEncoding>,
    /// CSVの区切り文字
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encodings: DEFAULT_ENCODINGS.to_vec(),
            delimiter: b',',
        }
    }
}

/// ファイル形式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Delimited,
    Spreadsheet,
}

const DELIMITED_EXTENSIONS: &[&str] = &["csv"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "ods"];

impl TableFormat {
    /// ファイル名の拡張子から形式を判定
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())?;

        if DELIMITED_EXTENSIONS.contains(&ext.as_str()) {
            Some(TableFormat::Delimited)
        } else if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            Some(TableFormat::Spreadsheet)
        } else {
            None
        }
    }
}

/// ファイルを読み込む
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    if !path.exists() {
        return Err(CpnError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    load_table_from_bytes(bytes, &name, options)
}

/// 読み込み済みのバイト列と宣言されたファイル名から表を作る
pub fn load_table_from_bytes(bytes: Vec<u8>, name: &str, options: &LoadOptions) -> Result<Table> {
    let format = TableFormat::from_name(name)
        .ok_or_else(|| CpnError::UnsupportedFormat(name.to_string()))?;

    let table = match format {
        TableFormat::Delimited => {
            let (text, encoding) = decode_with_fallback(&bytes, &options.encodings, name)?;
            tracing::info!(file = %name, %encoding, "loading delimited text");
            parse_delimited(&text, options.delimiter, name)?
        }
        TableFormat::Spreadsheet => {
            tracing::info!(file = %name, "loading spreadsheet");
            spreadsheet::parse_spreadsheet(bytes, name)?
        }
    };

    tracing::debug!(
        file = %name,
        columns = table.width(),
        rows = table.len(),
        "table loaded"
    );

    Ok(table)
}
