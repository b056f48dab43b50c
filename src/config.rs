use crate::error::{CpnError, Result};
use crate::export::ArtifactOptions;
use crate::loader::{LoadOptions, TextEncoding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const OUTPUT_DIR_ENV: &str = "CPN_OUTPUT_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSVで試す文字コード（順番通り）
    pub encodings: Vec<String>,
    pub csv_delimiter: char,
    pub output_dir: Option<PathBuf>,
    pub dfrx_extension: Option<String>,
    pub afrx_extension: Option<String>,
    /// PFプレビューの行数
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encodings: vec!["utf-8".into(), "latin1".into(), "cp1252".into()],
            csv_delimiter: ',',
            output_dir: None,
            dfrx_extension: None,
            afrx_extension: None,
            preview_rows: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CpnError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cpn").join("config.json"))
    }

    pub fn encoding_candidates(&self) -> Result<Vec<TextEncoding>> {
        if self.encodings.is_empty() {
            return Err(CpnError::Config("文字コードが1つも設定されていません".into()));
        }

        self.encodings
            .iter()
            .map(|e| e.parse::<TextEncoding>().map_err(CpnError::Config))
            .collect()
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.csv_delimiter.is_ascii() {
            return Err(CpnError::Config(format!(
                "区切り文字はASCII文字のみ指定できます: {:?}",
                self.csv_delimiter
            )));
        }
        Ok(self.csv_delimiter as u8)
    }

    pub fn load_options(&self) -> Result<LoadOptions> {
        Ok(LoadOptions {
            encodings: self.encoding_candidates()?,
            delimiter: self.delimiter_byte()?,
        })
    }

    pub fn artifact_options(&self) -> ArtifactOptions {
        ArtifactOptions {
            dfrx_extension: self.dfrx_extension.clone(),
            afrx_extension: self.afrx_extension.clone(),
        }
    }

    /// 出力フォルダ（環境変数を優先、未設定ならカレント）
    pub fn resolve_output_dir(&self) -> PathBuf {
        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir);
            }
        }

        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
