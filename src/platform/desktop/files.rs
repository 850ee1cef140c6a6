use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::session::FileInput;

pub fn read_input(path: &Path) -> Result<FileInput> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read spreadsheet: {}", path.display()))?;
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    Ok(FileInput::new(display_name, bytes))
}

pub fn save_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output dir: {}", parent.display()))?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write merged workbook: {}", path.display()))
}
