use std::path::Path;
use std::process::Command;

use samla_path::DataLayout;
use tauri::{command, State};

use crate::entity::app::AppPaths;

/// 获取应用目录布局
#[command]
pub fn get_app_paths(layout: State<'_, DataLayout>) -> AppPaths {
    AppPaths::from(layout.inner())
}

/// 在系统文件管理器中打开应用基础目录
#[command]
pub async fn open_app_folder(layout: State<'_, DataLayout>) -> Result<(), String> {
    // 目录可能在运行期间被用户删掉，先重建
    layout.ensure_dirs()?;
    open_directory(&layout.base_dir)
}

fn open_directory(dir: &Path) -> Result<(), String> {
    if !dir.exists() {
        return Err(format!("路径不存在: {}", dir.display()));
    }

    #[cfg(target_os = "windows")]
    {
        // Explorer 对反斜杠路径的处理更稳定
        let normalized_path = dir.to_string_lossy().replace('/', "\\");

        match Command::new("explorer").arg(&normalized_path).spawn() {
            Ok(_) => Ok(()),
            Err(e) => Command::new("cmd")
                .args(["/c", "start", "", &normalized_path])
                .spawn()
                .map(|_| ())
                .map_err(|e2| {
                    format!(
                        "无法打开目录 '{}': explorer 失败 ({}), cmd 备用方案也失败 ({})",
                        normalized_path, e, e2
                    )
                }),
        }
    }
    #[cfg(target_os = "macos")]
    {
        Command::new("open")
            .arg(dir)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("无法打开目录 '{}': {}", dir.display(), e))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Command::new("xdg-open")
            .arg(dir)
            .spawn()
            .map(|_| ())
            .map_err(|e| format!("无法打开目录 '{}': {}", dir.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_reported_before_spawning() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("gone");

        let err = open_directory(&missing).unwrap_err();
        assert!(err.contains("gone"), "{}", err);
    }
}
