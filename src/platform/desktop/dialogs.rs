use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::config::MergerConfig;
use crate::ui::state::notice::{Notice, NoticeLevel};

pub fn pick_spreadsheets(config: &MergerConfig) -> Vec<PathBuf> {
    FileDialog::new()
        .add_filter("Excel 檔案", config.accepted_extensions.as_slice())
        .pick_files()
        .unwrap_or_default()
        .into_iter()
        .filter(|path| config.accepts(path))
        .collect()
}

pub fn pick_output_path(config: &MergerConfig) -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Excel 活頁簿", &["xlsx"])
        .set_file_name(config.suggested_output_name())
        .save_file()
}

pub fn show_notice(notice: &Notice) {
    let level = match notice.level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Warning => MessageLevel::Warning,
        NoticeLevel::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(notice.title.as_str())
        .set_description(notice.description.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}
