use std::path::{Path, PathBuf};

use anyhow::Result;

#[derive(Debug, Clone, Default)]
pub struct EffectiveConfig {
    pub report: ReportConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    // empty: current working directory
    pub dir: PathBuf,
    pub extension: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "WPScan Report".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            extension: "html".to_string(),
        }
    }
}

pub fn output_path(input: &Path, cfg: &OutputConfig) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        crate::exit::invalid_args(format!(
            "input path has no file name: {}",
            input.display()
        ))
    })?;
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(&cfg.extension);
    Ok(cfg.dir.join(file_name))
}
