//! エラー型定義

use crate::types::InvalidRow;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{} invalid internal reference(s): must contain exactly 8 digits", .0.len())]
    InvalidReferences(Vec<InvalidRow>),

    #[error("Column index {index} out of range (table has {width} column(s))")]
    ColumnOutOfRange { index: usize, width: usize },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
