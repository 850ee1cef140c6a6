mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use config::{default_webview_data_dir, MergerConfig};

fn main() {
    let config = MergerConfig::default();
    logging::init_tracing(&config.log_directive);

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");
    tracing::info!(data_dir = %webview_data_dir.display(), "starting excel merger");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Excel 合併工具"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}
