use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpnError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("CSVの文字コードを認識できません: {0}")]
    Decoding(String),

    #[error("未対応のファイル形式です（csv/xlsx/xls）: {0}")]
    UnsupportedFormat(String),

    #[error("表が空です（ヘッダー行がありません）: {0}")]
    EmptyTable(String),

    #[error("Excel読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("列の指定が不正: {0}")]
    InvalidColumn(String),

    #[error("Réf. interne が不正なため中断しました（{0}件）")]
    ValidationAborted(usize),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cpn_common::Error),
}

pub type Result<T> = std::result::Result<T, CpnError>;
