use clap::Parser;
use cpn_generator::{cli, config, error, export, loader, logging, pipeline, report, selector};
use cli::{Cli, Commands};
use config::Config;
use error::{CpnError, Result};
use pipeline::ColumnSelection;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Generate {
            pairing,
            scope,
            internal_col,
            client_col,
            output: output_override,
            preview,
            interactive,
            dry_run,
            invalid_report,
        } => {
            println!("📑 cpn - CPN生成 (DFRXHYBCPNA / AFRXHYBCPNA)\n");

            // 日付は1回だけ取得し、ファイル名とAFRX本文すべてで使う
            let today = chrono::Local::now().date_naive();
            let load_options = config.load_options()?;

            // 1. 読み込み
            println!("[1/4] ファイルを読み込み中...");
            let pairing_table = loader::load_table(&pairing, &load_options)?;
            println!(
                "✔ 顧客紐付けファイル: {}列 / {}行",
                pairing_table.width(),
                pairing_table.len()
            );
            let scope_table = match &scope {
                Some(path) => {
                    let table = loader::load_table(path, &load_options)?;
                    println!("✔ 対象範囲: {}行", table.len());
                    Some(table)
                }
                None => {
                    println!("- 対象範囲なし: Réf. client 列を使用します");
                    None
                }
            };
            println!();

            // 2. 列の選択
            println!("[2/4] 列を選択中...");
            let width = pairing_table.width();
            let selection = if interactive {
                selector::select_columns_interactive(
                    &pairing_table,
                    ColumnSelection::with_overrides(width, internal_col, client_col),
                )?
            } else {
                ColumnSelection::with_overrides(width, internal_col, client_col)
            };
            println!(
                "✔ Réf. interne = {}列目, Réf. client = {}列目\n",
                selection.internal, selection.client
            );

            // 3. 検証・PF生成
            println!("[3/4] Réf. interne を検証中...");
            let output = match pipeline::generate(
                &pairing_table,
                scope_table.as_ref(),
                selection,
                today,
            ) {
                Ok(output) => output,
                Err(CpnError::Common(cpn_common::Error::InvalidReferences(rows))) => {
                    report::print_invalid_rows(&rows);
                    if let Some(path) = &invalid_report {
                        report::write_invalid_report(&rows, path)?;
                        println!("- 不正行一覧を保存: {}", path.display());
                    }
                    return Err(CpnError::ValidationAborted(rows.len()));
                }
                Err(e) => return Err(e),
            };
            println!(
                "✔ PF: {} × {} = {}行\n",
                output.internal_count,
                output.client_count,
                output.rows.len()
            );

            // 4. 出力
            let rendered = export::render_artifacts(&output, &config.artifact_options())?;
            if dry_run {
                println!("[4/4] ドライラン: ファイルは書き込みません");
                println!("  DFRX: {} ({} bytes)", rendered.dfrx_file_name, rendered.dfrx_bytes.len());
                println!("  AFRX: {} ({} bytes)", rendered.afrx_file_name, rendered.afrx_bytes.len());
            } else {
                println!("[4/4] ファイルを出力中...");
                let output_dir = output_override.unwrap_or_else(|| config.resolve_output_dir());
                let written = export::write_artifacts(&rendered, &output_dir)?;
                println!("✔ DFRX出力: {}", written.dfrx_path.display());
                println!("✔ AFRX出力: {}", written.afrx_path.display());
            }

            if dry_run {
                println!("\n✅ 検証完了。PFプレビュー:");
            } else {
                println!("\n✅ ファイルを生成しました。PFプレビュー:");
            }
            report::print_preview(&output.rows, preview.unwrap_or(config.preview_rows));
        }

        Commands::Columns { file } => {
            let table = loader::load_table(&file, &config.load_options()?)?;
            println!("ファイル: {} ({}行)", file.display(), table.len());
            for label in selector::column_labels(&table) {
                println!("  {}", label);
            }
        }

        Commands::Config {
            set_output_dir,
            set_delimiter,
            set_encodings,
            set_dfrx_ext,
            set_afrx_ext,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(dir) = set_output_dir {
                config.output_dir = Some(dir);
                changed = true;
            }
            if let Some(delimiter) = set_delimiter {
                config.csv_delimiter = delimiter;
                config.delimiter_byte()?;
                changed = true;
            }
            if let Some(encodings) = set_encodings {
                config.encodings = encodings;
                config.encoding_candidates()?;
                changed = true;
            }
            if let Some(ext) = set_dfrx_ext {
                config.dfrx_extension = Some(ext).filter(|e| !e.trim().is_empty());
                changed = true;
            }
            if let Some(ext) = set_afrx_ext {
                config.afrx_extension = Some(ext).filter(|e| !e.trim().is_empty());
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  文字コード: {}", config.encodings.join(", "));
                println!("  区切り文字: {:?}", config.csv_delimiter);
                println!("  出力フォルダ: {}", config.resolve_output_dir().display());
                println!("  DFRX拡張子: {}", config.dfrx_extension.as_deref().unwrap_or("(なし)"));
                println!("  AFRX拡張子: {}", config.afrx_extension.as_deref().unwrap_or("(なし)"));
                println!("  プレビュー行数: {}", config.preview_rows);
            }
        }
    }

    Ok(())
}
