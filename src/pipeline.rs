//! 生成処理の組み立て
//!
//! 列番号（1始まり）を0始まりのインデックスに変換し、
//! 対象範囲の1列目を取り出してから共通パイプラインを呼ぶ。

use crate::error::{CpnError, Result};
use chrono::NaiveDate;
use cpn_common::{build_cpn, Cell, CpnOutput, CpnRequest, Table};

/// 列の選択（1始まり）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSelection {
    pub internal: usize,
    pub client: usize,
}

impl ColumnSelection {
    /// 既定値: Réf. interne = 1列目、Réf. client = 2列目（1列しかなければ1列目）
    pub fn defaults(width: usize) -> Self {
        Self {
            internal: 1,
            client: if width > 1 { 2 } else { 1 },
        }
    }

    pub fn with_overrides(width: usize, internal: Option<usize>, client: Option<usize>) -> Self {
        let defaults = Self::defaults(width);
        Self {
            internal: internal.unwrap_or(defaults.internal),
            client: client.unwrap_or(defaults.client),
        }
    }

    /// 0始まりの (Réf. interne, Réf. client) に変換
    pub fn to_indices(self, width: usize) -> Result<(usize, usize)> {
        Ok((
            ordinal_to_index(self.internal, width, "Réf. interne")?,
            ordinal_to_index(self.client, width, "Réf. client")?,
        ))
    }
}

fn ordinal_to_index(ordinal: usize, width: usize, label: &str) -> Result<usize> {
    if ordinal == 0 || ordinal > width {
        return Err(CpnError::InvalidColumn(format!(
            "{} の列番号 {} は範囲外です（1〜{}）",
            label, ordinal, width
        )));
    }
    Ok(ordinal - 1)
}

/// 対象範囲の1列目
pub fn scope_column(scope: &Table) -> Result<Vec<Cell>> {
    Ok(scope.column(0)?)
}

/// 読み込み済みの表から PF と成果物名を生成
pub fn generate(
    pairing: &Table,
    scope: Option<&Table>,
    selection: ColumnSelection,
    date: NaiveDate,
) -> Result<CpnOutput> {
    let (internal_column, client_column) = selection.to_indices(pairing.width())?;
    let scope_cells = scope.map(scope_column).transpose()?;

    tracing::debug!(
        internal_column,
        client_column,
        scope = scope_cells.is_some(),
        "running cpn pipeline"
    );

    let output = build_cpn(&CpnRequest {
        pairing,
        internal_column,
        client_column,
        scope: scope_cells.as_deref(),
        date,
    })?;

    Ok(output)
}
