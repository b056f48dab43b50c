use crate::error::{CpnError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use cpn_common::{Cell, Table};
use std::io::Cursor;

/// Excel/ODSの先頭シートを読み込む（1行目はヘッダー）
pub fn parse_spreadsheet(bytes: Vec<u8>, source: &str) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| CpnError::Spreadsheet(format!("{}: {}", source, e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CpnError::EmptyTable(source.to_string()))?
        .map_err(|e| CpnError::Spreadsheet(format!("{}: {}", source, e)))?;

    // Range は最初の非空セルから始まるため、A列を0番目にそろえる
    let leading_columns = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    table_from_rows(range.rows(), leading_columns, source)
}

/// シートの行から表を作る
///
/// 先頭に `leading_columns` 個の空列を補い、すべて空の行は除外する。
fn table_from_rows<'a>(
    rows: impl Iterator<Item = &'a [Data]>,
    leading_columns: usize,
    source: &str,
) -> Result<Table> {
    let mut rows = rows.map(|row| {
        let mut cells: Vec<Cell> = vec![None; leading_columns];
        cells.extend(row.iter().map(cell_text));
        cells
    });

    let headers: Vec<String> = match rows.next() {
        Some(header) => header
            .into_iter()
            .map(|h| h.map(|h| h.trim().to_string()).unwrap_or_default())
            .collect(),
        None => return Err(CpnError::EmptyTable(source.to_string())),
    };

    let rows = rows
        .filter(|row| row.iter().any(|c| c.is_some()))
        .collect();

    Ok(Table::new(headers, rows))
}

/// セル値を文字列に変換
///
/// 整数値の浮動小数点は小数部なしで出力する（12345678.0 → "12345678"）。
fn cell_text(cell: &Data) -> Cell {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}
