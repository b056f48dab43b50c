use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cpn")]
#[command(about = "CPN生成ツール（DFRXHYBCPNA / AFRXHYBCPNA）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 顧客紐付けファイルと対象範囲からDFRX/AFRXを生成
    Generate {
        /// 顧客紐付けファイル（Réf. interne + Réf. client）
        #[arg(required = true)]
        pairing: PathBuf,

        /// 対象範囲ファイル（顧客口座、1列目を使用）。省略時は Réf. client 列を使用
        #[arg(short, long)]
        scope: Option<PathBuf>,

        /// Réf. interne の列番号（1 = 先頭列）
        #[arg(short, long)]
        internal_col: Option<usize>,

        /// Réf. client の列番号（1 = 先頭列）
        #[arg(short, long)]
        client_col: Option<usize>,

        /// 出力フォルダ（デフォルト: 設定値またはカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PFプレビューの行数
        #[arg(long)]
        preview: Option<usize>,

        /// 列を対話式で選択
        #[arg(long)]
        interactive: bool,

        /// ファイルを書き込まずに検証とプレビューのみ行う
        #[arg(long)]
        dry_run: bool,

        /// 不正な Réf. interne の一覧をJSONで保存
        #[arg(long)]
        invalid_report: Option<PathBuf>,
    },

    /// 表ファイルの列一覧を表示
    Columns {
        /// 表ファイル（csv/xlsx/xls）
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 出力フォルダを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// CSV区切り文字を設定
        #[arg(long)]
        set_delimiter: Option<char>,

        /// CSVで試す文字コードを設定（カンマ区切り、例: utf-8,latin1,cp1252）
        #[arg(long, value_delimiter = ',')]
        set_encodings: Option<Vec<String>>,

        /// DFRXファイルの拡張子を設定（空文字で拡張子なし）
        #[arg(long)]
        set_dfrx_ext: Option<String>,

        /// AFRXファイルの拡張子を設定（空文字で拡張子なし）
        #[arg(long)]
        set_afrx_ext: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "cpn", "generate", "pairing.csv", "--scope", "scope.xlsx", "-i", "1", "-c", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { pairing, scope, internal_col, client_col, dry_run, .. } => {
                assert_eq!(pairing, PathBuf::from("pairing.csv"));
                assert_eq!(scope, Some(PathBuf::from("scope.xlsx")));
                assert_eq!(internal_col, Some(1));
                assert_eq!(client_col, Some(3));
                assert!(!dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_config_encodings() {
        let cli = Cli::try_parse_from(["cpn", "config", "--set-encodings", "utf-8,cp1252", "--show"])
            .unwrap();

        match cli.command {
            Commands::Config { set_encodings, show, .. } => {
                assert_eq!(set_encodings, Some(vec!["utf-8".to_string(), "cp1252".to_string()]));
                assert!(show);
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::try_parse_from(["cpn", "columns", "a.csv", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
