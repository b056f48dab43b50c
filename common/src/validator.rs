//! Réf. interne の検証
//!
//! Réf. interne は数字8桁ちょうど（前後の文字なし）でなければならない。
//! 1件でも不正があれば、PF生成前に処理を止める。

use crate::error::{Error, Result};
use crate::types::{Cell, InvalidRow};
use regex::Regex;

/// 数字8桁ちょうどか判定する（trimはしない）
pub fn is_valid_internal_ref(value: &str) -> bool {
    lazy_static::lazy_static! {
        // \d はUnicode数字にも一致するためASCIIに限定
        static ref INTERNAL_REF_RE: Regex = Regex::new(r"^[0-9]{8}$").unwrap();
    }
    INTERNAL_REF_RE.is_match(value)
}

/// 不正な値の位置を `true` にしたマスクを返す
pub fn invalid_mask<S: AsRef<str>>(values: &[S]) -> Vec<bool> {
    values
        .iter()
        .map(|v| !is_valid_internal_ref(v.as_ref()))
        .collect()
}

/// 列中の不正行をすべて抽出する
///
/// 各セルはtrimしてから検証する。空セルは空文字として扱い、不正とみなす。
pub fn find_invalid(column: &[Cell]) -> Vec<InvalidRow> {
    let values: Vec<&str> = column
        .iter()
        .map(|cell| cell.as_deref().unwrap_or("").trim())
        .collect();

    invalid_mask(values.as_slice())
        .into_iter()
        .zip(values)
        .enumerate()
        .filter(|(_, (invalid, _))| *invalid)
        .map(|(i, (_, value))| InvalidRow {
            row: i + 1,
            value: value.to_string(),
        })
        .collect()
}

/// 不正行があれば `Error::InvalidReferences` を返す
pub fn validate_internal_column(column: &[Cell]) -> Result<()> {
    let invalid = find_invalid(column);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidReferences(invalid))
    }
}
