use std::path::Path;

use crate::domain::error::MergeError;
use crate::usecase::services::merge_service::MergeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-facing message for the outcome of one load or merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(level: NoticeLevel, title: &str, description: String) -> Self {
        Self {
            level,
            title: title.to_string(),
            description,
        }
    }

    pub fn batch_loaded(added: usize, failed: &[String]) -> Self {
        if failed.is_empty() {
            return Notice::new(
                NoticeLevel::Info,
                "已上傳檔案",
                format!("已處理 {added} 個檔案"),
            );
        }
        Notice::new(
            NoticeLevel::Error,
            "處理檔案失敗",
            format!(
                "已處理 {added} 個檔案，{} 個檔案無法讀取：{}",
                failed.len(),
                failed.join("、")
            ),
        )
    }

    pub fn merged(outcome: &MergeOutcome, path: &Path) -> Self {
        let summary = format!(
            "已合併 {} 個檔案，共 {} 列，儲存至 {}",
            outcome.merged_files,
            outcome.row_count,
            path.display()
        );
        if outcome.skipped.is_empty() {
            return Notice::new(NoticeLevel::Info, "合併成功", summary);
        }
        let skipped: Vec<String> = outcome
            .skipped
            .iter()
            .map(|file| format!("{}（{}）", file.display_name, file.error))
            .collect();
        Notice::new(
            NoticeLevel::Warning,
            "部分檔案未合併",
            format!("{summary}；略過：{}", skipped.join("、")),
        )
    }

    pub fn from_error(err: &MergeError) -> Self {
        match err {
            MergeError::DuplicateFile(identity) => Notice::new(
                NoticeLevel::Info,
                "檔案已存在",
                format!("{identity} 已在清單中"),
            ),
            MergeError::NoCompatibleFiles => Notice::new(
                NoticeLevel::Error,
                "沒有相容檔案",
                "請先上傳表頭相同的檔案".to_string(),
            ),
            MergeError::Busy => Notice::new(
                NoticeLevel::Warning,
                "處理中",
                "請等待目前的作業完成".to_string(),
            ),
            other if other.is_per_file() => {
                Notice::new(NoticeLevel::Error, "無法讀取檔案", other.to_string())
            }
            other => Notice::new(NoticeLevel::Error, "錯誤", other.to_string()),
        }
    }

    pub fn removed(name: &str, was_reference: bool) -> Self {
        let description = if was_reference {
            format!("{name} 已移除，已依新的第一個檔案重新檢查相容性")
        } else {
            format!("{name} 已移除")
        };
        Notice::new(NoticeLevel::Info, "已移除檔案", description)
    }

    pub fn cancelled(action: &str) -> Self {
        Notice::new(NoticeLevel::Info, "已取消", format!("已取消{action}"))
    }

    pub fn save_failed(reason: &str) -> Self {
        Notice::new(NoticeLevel::Error, "儲存失敗", reason.to_string())
    }

    pub fn needs_dialog(&self) -> bool {
        self.level != NoticeLevel::Info
    }

    pub fn status_line(&self) -> String {
        format!("{}：{}", self.title, self.description)
    }
}
