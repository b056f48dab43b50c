//! CPN生成の純粋パイプライン
//!
//! 表・列インデックス・日付を受け取り、検証 → 直積 → 名前生成を行う。
//! ファイルI/Oや時計の読み取りはしない。

use crate::cross_join::{cross_join, reference_list};
use crate::error::Result;
use crate::naming::ArtifactNames;
use crate::types::{Cell, PairingRow, Table};
use crate::validator::validate_internal_column;
use chrono::NaiveDate;

/// パイプラインへの入力
///
/// 列インデックスは0始まり。
#[derive(Debug, Clone, Copy)]
pub struct CpnRequest<'a> {
    /// 顧客紐付けファイル
    pub pairing: &'a Table,
    /// Réf. interne の列
    pub internal_column: usize,
    /// Réf. client の列（`scope` がない場合のみ顧客リストとして使う）
    pub client_column: usize,
    /// 対象範囲（顧客口座）の1列目
    pub scope: Option<&'a [Cell]>,
    pub date: NaiveDate,
}

/// パイプラインの出力
#[derive(Debug, Clone)]
pub struct CpnOutput {
    pub rows: Vec<PairingRow>,
    pub names: ArtifactNames,
    pub internal_count: usize,
    pub client_count: usize,
}

/// 検証してPFと成果物名を生成する
///
/// Réf. interne に1件でも不正があれば `Error::InvalidReferences` を返し、
/// PFは生成しない。
pub fn build_cpn(request: &CpnRequest<'_>) -> Result<CpnOutput> {
    let internal_column = request.pairing.column(request.internal_column)?;
    let pairing_clients = request.pairing.column(request.client_column)?;

    validate_internal_column(&internal_column)?;

    let internal = reference_list(&internal_column);
    let clients = match request.scope {
        Some(scope) => reference_list(scope),
        None => reference_list(&pairing_clients),
    };

    let rows = cross_join(&internal, &clients);

    Ok(CpnOutput {
        rows,
        names: ArtifactNames::for_date(request.date),
        internal_count: internal.len(),
        client_count: clients.len(),
    })
}
