//! ログ初期化
//!
//! 進捗表示は標準出力、診断ログは `tracing` で標準エラーへ出す。
//! `RUST_LOG` があればそれに従い、`--verbose` 指定時は debug レベル。

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let env = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // 二重初期化（テストなど）は無視
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
