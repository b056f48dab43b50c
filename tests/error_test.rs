//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use cpn_generator::error::CpnError;

/// CpnErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CpnError::Config("テスト設定エラー".to_string()),
        CpnError::FileNotFound("pairing.csv".to_string()),
        CpnError::Decoding("pairing.csv".to_string()),
        CpnError::UnsupportedFormat("pairing.pdf".to_string()),
        CpnError::EmptyTable("scope.csv".to_string()),
        CpnError::Spreadsheet("壊れたファイル".to_string()),
        CpnError::InvalidColumn("範囲外".to_string()),
        CpnError::ValidationAborted(3),
        CpnError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 検証中断メッセージに件数が含まれる
#[test]
fn test_validation_aborted_message() {
    let display = format!("{}", CpnError::ValidationAborted(12));
    assert!(display.contains("Réf. interne"));
    assert!(display.contains("12"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CpnError = io_err.into();

    assert!(matches!(err, CpnError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CpnError = json_err.into();

    assert!(matches!(err, CpnError::JsonParse(_)));
}

/// cpn_common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = cpn_common::Error::ColumnOutOfRange { index: 4, width: 2 };
    let err: CpnError = common_err.into();

    assert!(matches!(err, CpnError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("out of range"));
}
