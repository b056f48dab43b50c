//! 列の対話式選択モジュール

use crate::error::{CpnError, Result};
use crate::pipeline::ColumnSelection;
use cpn_common::Table;
use dialoguer::Select;

/// 「番号: ヘッダー」形式の列ラベル
pub fn column_labels(table: &Table) -> Vec<String> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let header = if h.is_empty() { "(無題)" } else { h.as_str() };
            format!("{}: {}", i + 1, header)
        })
        .collect()
}

/// Réf. interne / Réf. client の列を対話式で選択
pub fn select_columns_interactive(table: &Table, defaults: ColumnSelection) -> Result<ColumnSelection> {
    let labels = column_labels(table);

    println!("\n📋 列を選択してください（1 = 先頭列）:\n");

    let internal = Select::new()
        .with_prompt("Réf. interne の列")
        .items(&labels)
        .default(defaults.internal.saturating_sub(1))
        .interact()
        .map_err(|e| CpnError::Prompt(e.to_string()))?;

    let client = Select::new()
        .with_prompt("Réf. client の列")
        .items(&labels)
        .default(defaults.client.saturating_sub(1))
        .interact()
        .map_err(|e| CpnError::Prompt(e.to_string()))?;

    Ok(ColumnSelection {
        internal: internal + 1,
        client: client + 1,
    })
}
