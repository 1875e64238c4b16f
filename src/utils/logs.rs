use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LevelFilter> for LogLevel {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Error => LogLevel::Error,
            LevelFilter::Warn => LogLevel::Warn,
            LevelFilter::Info => LogLevel::Info,
            LevelFilter::Debug => LogLevel::Debug,
            LevelFilter::Trace => LogLevel::Trace,
            LevelFilter::Off => LogLevel::Off,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

/// 动态设置日志输出级别（不持久化）
#[tauri::command]
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into());
}

/// 获取当前日志级别
#[tauri::command]
pub fn get_log_level() -> LogLevel {
    log::max_level().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, LogLevel::Trace);
        assert!(serde_json::from_str::<LogLevel>("\"verbose\"").is_err());
    }

    #[test]
    fn level_filter_conversion_is_lossless() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
            LogLevel::Off,
        ] {
            assert_eq!(LogLevel::from(LevelFilter::from(level)), level);
        }
    }

    #[test]
    fn set_then_get_log_level() {
        let previous = get_log_level();
        set_log_level(LogLevel::Info);
        assert_eq!(get_log_level(), LogLevel::Info);
        set_log_level(previous);
    }
}
