pub mod tsv;

use crate::error::{CpnError, Result};
use cpn_common::CpnOutput;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 成果物ファイル名の拡張子（省略時は拡張子なし）
#[derive(Debug, Clone, Default)]
pub struct ArtifactOptions {
    pub dfrx_extension: Option<String>,
    pub afrx_extension: Option<String>,
}

/// メモリ上に生成した成果物
#[derive(Debug, Clone)]
pub struct RenderedArtifacts {
    pub dfrx_file_name: String,
    pub afrx_file_name: String,
    pub dfrx_bytes: Vec<u8>,
    pub afrx_bytes: Vec<u8>,
}

/// 書き込み済みの成果物パス
#[derive(Debug, Clone)]
pub struct WrittenArtifacts {
    pub dfrx_path: PathBuf,
    pub afrx_path: PathBuf,
}

fn file_name_with_extension(name: &str, extension: Option<&str>) -> String {
    match extension.map(|e| e.trim().trim_start_matches('.')) {
        Some(ext) if !ext.is_empty() => format!("{}.{}", name, ext),
        _ => name.to_string(),
    }
}

/// DFRX（TSV）とAFRX（テキスト）をメモリ上に生成
pub fn render_artifacts(output: &CpnOutput, options: &ArtifactOptions) -> Result<RenderedArtifacts> {
    let dfrx_bytes = tsv::to_tsv_bytes(&output.rows)?;
    let afrx_bytes = output.names.afrx_text.as_bytes().to_vec();

    Ok(RenderedArtifacts {
        dfrx_file_name: file_name_with_extension(
            &output.names.dfrx_name,
            options.dfrx_extension.as_deref(),
        ),
        afrx_file_name: file_name_with_extension(
            &output.names.afrx_name,
            options.afrx_extension.as_deref(),
        ),
        dfrx_bytes,
        afrx_bytes,
    })
}

/// 両方の成果物を出力フォルダに書き込む
///
/// 一時ファイルに両方を書き終えてから確定するため、
/// 途中で失敗しても片方だけが残ることはない。
pub fn write_artifacts(rendered: &RenderedArtifacts, output_dir: &Path) -> Result<WrittenArtifacts> {
    std::fs::create_dir_all(output_dir)?;

    let dfrx_temp = stage(output_dir, &rendered.dfrx_bytes)?;
    let afrx_temp = stage(output_dir, &rendered.afrx_bytes)?;

    let dfrx_path = output_dir.join(&rendered.dfrx_file_name);
    let afrx_path = output_dir.join(&rendered.afrx_file_name);

    persist(dfrx_temp, &dfrx_path)?;
    if let Err(e) = persist(afrx_temp, &afrx_path) {
        std::fs::remove_file(&dfrx_path).ok();
        return Err(e);
    }

    tracing::info!(
        dfrx = %dfrx_path.display(),
        afrx = %afrx_path.display(),
        "artifacts written"
    );

    Ok(WrittenArtifacts { dfrx_path, afrx_path })
}

fn stage(dir: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    Ok(temp)
}

fn persist(temp: NamedTempFile, path: &Path) -> Result<()> {
    temp.persist(path).map_err(|e| CpnError::Io(e.error))?;
    Ok(())
}
