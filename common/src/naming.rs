//! DFRX / AFRX のファイル名と確認テキスト
//!
//! - DFRXHYBCPNAyyMMdd0000（PF、TSV）
//! - AFRXHYBCPNAyyMMdd0000（確認テキスト）
//!
//! 日付は呼び出し側で1回だけ取得し、4箇所すべてで同じ値を使う。

use chrono::NaiveDate;
use serde::Serialize;

pub const DFRX_PREFIX: &str = "DFRXHYBCPNA";
pub const AFRX_PREFIX: &str = "AFRXHYBCPNA";
const NAME_SUFFIX: &str = "0000";

const AFRX_HEADER_TAIL: &str = "000148250201IT";
const AFRX_ROUTE: &str = "CPNAHYBFRX";
const AFRX_PADDING: usize = 20;
const AFRX_STATUS: &str = "OK000000";

/// yyMMdd 形式の日付
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// 成果物の名前と確認テキスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    /// yyMMdd
    pub stamp: String,
    pub dfrx_name: String,
    pub afrx_name: String,
    pub afrx_text: String,
}

impl ArtifactNames {
    pub fn for_date(date: NaiveDate) -> Self {
        let stamp = date_stamp(date);

        let dfrx_name = format!("{}{}{}", DFRX_PREFIX, stamp, NAME_SUFFIX);
        let afrx_name = format!("{}{}{}", AFRX_PREFIX, stamp, NAME_SUFFIX);
        let afrx_text = format!(
            "{}{}{}{}{}{}{}{}",
            DFRX_PREFIX,
            stamp,
            AFRX_HEADER_TAIL,
            DFRX_PREFIX,
            stamp,
            AFRX_ROUTE,
            " ".repeat(AFRX_PADDING),
            AFRX_STATUS,
        );

        Self {
            stamp,
            dfrx_name,
            afrx_name,
            afrx_text,
        }
    }
}
