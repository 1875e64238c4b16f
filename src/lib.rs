pub mod entity;
pub mod i18n;
mod utils;

use std::sync::Arc;

use i18n::preference::{StorePreference, PREFERENCES_FILE};
use i18n::*;
use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};
use tauri_plugin_store::StoreExt;
use utils::{
    fs::{get_app_paths, open_app_folder},
    logs::{get_log_level, set_log_level},
};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_window_state::Builder::new().build())
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.show();
                let _ = window.unminimize();
                let _ = window.set_focus();
            }
        }))
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            // 本地化相关 commands
            get_locale,
            set_locale,
            translate,
            get_translations,
            // 搜索相关 commands
            get_search_prefixes,
            parse_search_query,
            // 工具类 commands
            get_app_paths,
            open_app_folder,
            // 日志相关 commands（运行时动态调整）
            set_log_level,
            get_log_level,
        ])
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .timezone_strategy(TimezoneStrategy::UseLocal)
                        .level(log::LevelFilter::Debug) // 允许运行时动态调整到任意级别
                        .targets([
                            Target::new(TargetKind::LogDir {
                                file_name: Some("debug".into()),
                            }),
                            Target::new(TargetKind::Stdout),
                        ])
                        .build(),
                )?;
            } else {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .timezone_strategy(TimezoneStrategy::UseLocal)
                        .level(log::LevelFilter::Debug)
                        .build(),
                )?;
            }

            // 准备数据目录
            let layout = samla_path::resolve_data_layout()?;
            layout.ensure_dirs()?;
            log::info!("数据目录: {}", layout.base_dir.display());
            app.manage(layout);

            // 从偏好存储恢复界面语言
            let store = app.store(PREFERENCES_FILE)?;
            let localizer = Localizer::new(Arc::new(StorePreference::new(store)));
            app.manage(localizer);

            // 设置初始日志级别为 Error（运行时可通过命令调整）
            log::set_max_level(log::LevelFilter::Error);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
