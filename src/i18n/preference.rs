use std::sync::Arc;

use tauri::Runtime;
use tauri_plugin_store::Store;

/// 语言偏好所在的存储文件
pub const PREFERENCES_FILE: &str = "settings.json";
/// 语言偏好的键
pub const LOCALE_KEY: &str = "samla-locale";

/// 语言偏好的持久化接口
pub trait LocalePreference: Send + Sync {
    /// 读取已保存的语言代码
    fn load(&self) -> Option<String>;

    /// 保存语言代码
    fn save(&self, code: &str) -> Result<(), String>;
}

/// 基于 tauri-plugin-store 的语言偏好存储
pub struct StorePreference<R: Runtime> {
    store: Arc<Store<R>>,
}

impl<R: Runtime> StorePreference<R> {
    pub fn new(store: Arc<Store<R>>) -> Self {
        Self { store }
    }
}

impl<R: Runtime> LocalePreference for StorePreference<R> {
    fn load(&self) -> Option<String> {
        self.store
            .get(LOCALE_KEY)
            .and_then(|value| value.as_str().map(str::to_string))
    }

    fn save(&self, code: &str) -> Result<(), String> {
        self.store.set(LOCALE_KEY, code);
        self.store
            .save()
            .map_err(|e| format!("保存语言设置失败: {}", e))
    }
}

/// 内存中的语言偏好，仅用于测试
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryPreference {
    value: parking_lot::Mutex<Option<String>>,
    writes: parking_lot::Mutex<Vec<String>>,
    fail_writes: bool,
    delay: Option<std::time::Duration>,
}

#[cfg(test)]
impl MemoryPreference {
    pub fn with_value(code: &str) -> Self {
        Self {
            value: parking_lot::Mutex::new(Some(code.to_string())),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    /// 每次保存前等待一段时间，模拟较慢的磁盘
    pub fn slow(delay: std::time::Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.value.lock().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

#[cfg(test)]
impl LocalePreference for MemoryPreference {
    fn load(&self) -> Option<String> {
        self.value.lock().clone()
    }

    fn save(&self, code: &str) -> Result<(), String> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.fail_writes {
            return Err("磁盘已满".to_string());
        }
        *self.value.lock() = Some(code.to_string());
        self.writes.lock().push(code.to_string());
        Ok(())
    }
}
