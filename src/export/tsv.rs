//! PFのTSV出力
//!
//! ヘッダー・インデックス列なし、3列、改行は `\n`、UTF-8。

use crate::error::{CpnError, Result};
use cpn_common::PairingRow;

pub fn to_tsv_bytes(rows: &[PairingRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row.as_record())?;
    }

    writer.into_inner().map_err(|e| {
        CpnError::Io(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })
}
