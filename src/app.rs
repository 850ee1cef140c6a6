use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::MergerConfig;
use crate::domain::entities::session::{FileInput, SessionPhase};
use crate::infra::codec::XlsxCodec;
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::desktop::dialogs::{pick_output_path, pick_spreadsheets, show_notice};
use crate::platform::desktop::files::{read_input, save_output};
use crate::ui::state::app_state::AppState;
use crate::ui::state::notice::Notice;
use crate::usecase::ports::codec::WorkbookCodec;
use crate::usecase::services::extract_service::ExtractService;
use crate::usecase::services::merge_service::MergeService;

const BADGE_COMPATIBLE_STYLE: &str = "padding: 2px 8px; border-radius: 10px; border: 1px solid #b7e4c7; background: #ecfdf3; color: #15803d;";
const BADGE_INCOMPATIBLE_STYLE: &str = "padding: 2px 8px; border-radius: 10px; border: 1px solid #fecaca; background: #fef2f2; color: #b91c1c;";
const TABLE_CELL_STYLE: &str = "padding: 6px 10px; border-bottom: 1px solid #eee; text-align: left;";

#[derive(Clone, Debug, PartialEq)]
struct FileRow {
    index: usize,
    name: String,
    sheet_name: String,
    column_count: usize,
    compatible: bool,
}

fn read_inputs(paths: &[PathBuf]) -> (Vec<FileInput>, Vec<String>) {
    let mut inputs = Vec::with_capacity(paths.len());
    let mut failed = Vec::new();
    for path in paths {
        match read_input(path) {
            Ok(input) => inputs.push(input),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read input file");
                failed.push(path.display().to_string());
            }
        }
    }
    (inputs, failed)
}

fn report(notice: Notice, mut status: Signal<String>) {
    *status.write() = notice.status_line();
    if notice.needs_dialog() {
        show_notice(&notice);
    }
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut files,
        mut phase,
        status,
    } = AppState::new();

    let config = Arc::new(MergerConfig::default());
    let codec: Arc<dyn WorkbookCodec> = Arc::new(XlsxCodec);
    let extract_service = Arc::new(ExtractService::new(codec.clone()));
    let merge_service = Arc::new(MergeService::new(
        codec,
        config.merged_sheet_name.clone(),
    ));

    let config_for_upload = config.clone();
    let config_for_merge = config.clone();
    let extract_service_for_upload = extract_service.clone();
    let merge_service_for_merge = merge_service.clone();

    let busy = phase().is_busy();
    let upload_label = if busy { "處理中..." } else { "上傳檔案" };
    let status_text = status();
    let snapshot = files();
    let can_merge = !busy && snapshot.has_compatible();
    let rows: Vec<FileRow> = snapshot
        .files()
        .iter()
        .enumerate()
        .map(|(index, file)| FileRow {
            index,
            name: file.display_name.clone(),
            sheet_name: file.sheet_name.clone(),
            column_count: file.headers.len(),
            compatible: file.is_compatible(),
        })
        .collect();

    rsx! {
        div {
            style: "font-family: 'Noto Sans TC', sans-serif; padding: 16px; background: #fff; min-height: 100vh;",

            h2 { "Excel 合併工具" }
            p {
                style: "color: #666; margin-bottom: 16px;",
                "上傳多個 Excel 檔案，表頭與第一個檔案相同者會被合併成一個新檔案。"
            }

            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                button {
                    disabled: busy,
                    onclick: move |_| {
                        let loading = match phase().begin_load() {
                            Ok(next) => next,
                            Err(err) => {
                                report(Notice::from_error(&err), status);
                                return;
                            }
                        };

                        let paths = pick_spreadsheets(&config_for_upload);
                        if paths.is_empty() {
                            report(Notice::cancelled("上傳"), status);
                            return;
                        }

                        phase.set(loading);
                        let (inputs, mut failed) = read_inputs(&paths);
                        let result = run_blocking("load batch", || {
                            extract_service_for_upload.load_batch(files(), inputs)
                        });

                        match result {
                            Ok(outcome) => {
                                failed.extend(
                                    outcome
                                        .failures
                                        .iter()
                                        .map(|failure| format!("{}（{}）", failure.display_name, failure.error)),
                                );
                                let notice = Notice::batch_loaded(outcome.added, &failed);
                                files.set(outcome.files);
                                report(notice, status);
                            }
                            Err(err) => report(Notice::from_error(&err), status),
                        }
                        phase.set(SessionPhase::settle(&files()));
                    },
                    "{upload_label}"
                }

                button {
                    disabled: !can_merge,
                    onclick: move |_| {
                        let merging = match phase().begin_merge() {
                            Ok(next) => next,
                            Err(err) => {
                                report(Notice::from_error(&err), status);
                                return;
                            }
                        };

                        phase.set(merging);
                        let current = files();
                        let result = run_blocking("merge", || {
                            merge_service_for_merge.merge_session(&current)
                        });

                        match result {
                            Ok(outcome) => match pick_output_path(&config_for_merge) {
                                Some(path) => match save_output(&path, &outcome.bytes) {
                                    Ok(()) => report(Notice::merged(&outcome, &path), status),
                                    Err(err) => {
                                        tracing::error!(error = %err, "failed to save merged workbook");
                                        report(Notice::save_failed(&format!("{err:#}")), status);
                                    }
                                },
                                None => report(Notice::cancelled("儲存"), status),
                            },
                            Err(err) => report(Notice::from_error(&err), status),
                        }
                        phase.set(SessionPhase::settle(&current));
                    },
                    "合併相容檔案"
                }

                span { style: "color: #555;", "{status_text}" }
            }

            if !rows.is_empty() {
                table {
                    style: "border-collapse: collapse; width: 100%;",
                    thead {
                        tr {
                            th { style: TABLE_CELL_STYLE, "檔名" }
                            th { style: TABLE_CELL_STYLE, "工作表" }
                            th { style: TABLE_CELL_STYLE, "欄位數" }
                            th { style: TABLE_CELL_STYLE, "狀態" }
                            th { style: TABLE_CELL_STYLE, "操作" }
                        }
                    }
                    tbody {
                        {rows.into_iter().map(|row| {
                            let index = row.index;
                            let name = row.name.clone();
                            let badge_style = if row.compatible {
                                BADGE_COMPATIBLE_STYLE
                            } else {
                                BADGE_INCOMPATIBLE_STYLE
                            };
                            let badge_label = if row.compatible { "相容" } else { "不相容" };
                            rsx!(
                                tr {
                                    key: "{row.index}-{row.name}",
                                    td { style: TABLE_CELL_STYLE, "{row.name}" }
                                    td { style: TABLE_CELL_STYLE, "{row.sheet_name}" }
                                    td { style: TABLE_CELL_STYLE, "{row.column_count}" }
                                    td {
                                        style: TABLE_CELL_STYLE,
                                        span { style: badge_style, "{badge_label}" }
                                    }
                                    td {
                                        style: TABLE_CELL_STYLE,
                                        button {
                                            disabled: busy,
                                            onclick: move |_| {
                                                if phase().is_busy() {
                                                    return;
                                                }
                                                let next = files().remove_file(index);
                                                phase.set(SessionPhase::settle(&next));
                                                files.set(next);
                                                report(Notice::removed(&name, index == 0), status);
                                            },
                                            "移除"
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }
        }
    }
}
