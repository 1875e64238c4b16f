use std::fs;
use std::path::{Path, PathBuf};

/// 数据目录相关常量
pub const APP_DIR_NAME: &str = "Samla";
pub const DATA_DIR: &str = "Data";
pub const IMAGES_DIR: &str = "Images";
pub const DB_FILE_NAME: &str = "samla.db";

/// 应用在磁盘上的目录布局
///
/// 所有路径都从同一个基础目录推导：
/// - `<base>/Data`
/// - `<base>/Images`
/// - `<base>/Data/samla.db`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    pub base_dir: PathBuf,
    pub data_dir: PathBuf,
    pub images_dir: PathBuf,
    pub db_path: PathBuf,
}

impl DataLayout {
    /// 以给定目录为基础目录构建布局
    pub fn under(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let data_dir = base_dir.join(DATA_DIR);
        let images_dir = base_dir.join(IMAGES_DIR);
        let db_path = data_dir.join(DB_FILE_NAME);

        Self {
            base_dir,
            data_dir,
            images_dir,
            db_path,
        }
    }

    /// 确保基础目录、数据目录和图片目录都存在
    pub fn ensure_dirs(&self) -> Result<(), String> {
        for dir in [&self.base_dir, &self.data_dir, &self.images_dir] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("无法创建目录 {}: {}", dir.display(), e))
}

/// 获取系统配置目录（跨平台）
///
/// - Windows: `%APPDATA%`
/// - macOS: `~/Library/Application Support`
/// - Linux: `$XDG_CONFIG_HOME` 或 `~/.config`
fn get_system_config_dir() -> Result<PathBuf, String> {
    use directories::BaseDirs;

    let base_dirs = BaseDirs::new().ok_or_else(|| "无法获取系统目录信息".to_string())?;
    Ok(base_dirs.config_dir().to_path_buf())
}

/// 获取基础数据目录
pub fn get_base_dir() -> Result<PathBuf, String> {
    Ok(get_system_config_dir()?.join(APP_DIR_NAME))
}

/// 解析完整的目录布局（不创建任何目录）
pub fn resolve_data_layout() -> Result<DataLayout, String> {
    Ok(DataLayout::under(get_base_dir()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_derived_from_base_dir() {
        let layout = DataLayout::under("/tmp/samla-test");

        assert_eq!(layout.base_dir, PathBuf::from("/tmp/samla-test"));
        assert_eq!(layout.data_dir, PathBuf::from("/tmp/samla-test").join("Data"));
        assert_eq!(layout.images_dir, PathBuf::from("/tmp/samla-test").join("Images"));
        assert_eq!(
            layout.db_path,
            PathBuf::from("/tmp/samla-test").join("Data").join("samla.db")
        );
    }

    #[test]
    fn ensure_dirs_creates_missing_folders() {
        let tmp = tempfile::TempDir::new().expect("create temp dir");
        let layout = DataLayout::under(tmp.path().join("Samla"));

        layout.ensure_dirs().expect("create layout");

        assert!(layout.base_dir.is_dir());
        assert!(layout.data_dir.is_dir());
        assert!(layout.images_dir.is_dir());
        // 数据库文件本身不由布局创建
        assert!(!layout.db_path.exists());

        // 再次调用不应报错
        layout.ensure_dirs().expect("ensure twice");
    }

    #[test]
    fn base_dir_ends_with_app_dir_name() {
        if let Ok(base) = get_base_dir() {
            assert_eq!(base.file_name().and_then(|n| n.to_str()), Some(APP_DIR_NAME));
        }
    }
}
