//! CPN生成ツール
//!
//! 顧客紐付けファイルと対象範囲（顧客口座）を読み込み、
//! DFRXHYBCPNA（PF、TSV）と AFRXHYBCPNA（確認テキスト）を生成する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod selector;
