use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;

pub const MERGED_SHEET_NAME: &str = "merged data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergerConfig {
    pub merged_sheet_name: String,
    pub output_stem: String,
    pub accepted_extensions: Vec<String>,
    pub log_directive: String,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            merged_sheet_name: MERGED_SHEET_NAME.to_string(),
            output_stem: "merged_excel".to_string(),
            accepted_extensions: vec!["xlsx".to_string(), "xls".to_string()],
            log_directive: "info".to_string(),
        }
    }
}

impl MergerConfig {
    pub fn suggested_output_name(&self) -> String {
        self.output_name_for(Local::now().date_naive())
    }

    pub fn output_name_for(&self, date: NaiveDate) -> String {
        format!("{}_{}.xlsx", self.output_stem, date.format("%Y%m%d"))
    }

    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        self.accepted_extensions.iter().any(|accepted| accepted == &ext)
    }
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "excel-merger")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
