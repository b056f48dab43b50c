//! 表データとPF行の型定義
//!
//! - Table: 読み込んだ表（1行目はヘッダー）
//! - PairingRow: PFの1行（Réf. interne, Réf. client, Réf. interne）
//! - InvalidRow: 8桁検証に失敗した行

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// セル値（`None` は空セル）
pub type Cell = Option<String>;

/// 読み込み済みの表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// 各行をヘッダー幅に揃えて表を作成
    ///
    /// 短い行は空セルで埋め、長い行は切り詰める。
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// 列数
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// データ行数（ヘッダー除く）
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(|h| h.as_str())
    }

    /// 0始まりの列を取り出す
    pub fn column(&self, index: usize) -> Result<Vec<Cell>> {
        if index >= self.width() {
            return Err(Error::ColumnOutOfRange {
                index,
                width: self.width(),
            });
        }

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().flatten())
            .collect())
    }
}

/// PFの1行
///
/// 1列目と3列目は常に同じ Réf. interne なので、値は2つだけ持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRow {
    pub internal_ref: String,
    pub client_ref: String,
}

impl PairingRow {
    pub fn new(internal_ref: impl Into<String>, client_ref: impl Into<String>) -> Self {
        Self {
            internal_ref: internal_ref.into(),
            client_ref: client_ref.into(),
        }
    }

    /// 出力用の3列
    pub fn as_record(&self) -> [&str; 3] {
        [&self.internal_ref, &self.client_ref, &self.internal_ref]
    }
}

/// 8桁検証に失敗した行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    /// 1始まりのデータ行番号（ヘッダー除く）
    pub row: usize,
    /// trim済みのセル値（空セルは空文字）
    pub value: String,
}
