use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::locale::Locale;
use super::preference::LocalePreference;
use super::prefixes::{search_prefixes, SearchCategory};
use super::translations;

/// 本地化服务
///
/// 持有当前界面语言，并负责把语言切换写回偏好存储。
/// 作为 Tauri 托管状态注入到各个 command 中。
pub struct Localizer {
    current: RwLock<Locale>,
    preference: Arc<dyn LocalePreference>,
}

impl Localizer {
    /// 从偏好存储中恢复语言，没有有效记录时使用德语
    pub fn new(preference: Arc<dyn LocalePreference>) -> Self {
        let locale = match preference.load() {
            Some(code) => code.parse().unwrap_or_else(|e| {
                log::warn!("忽略无效的语言设置 {:?}: {}", code, e);
                Locale::default()
            }),
            None => Locale::default(),
        };
        log::debug!("当前界面语言: {}", locale);

        Self {
            current: RwLock::new(locale),
            preference,
        }
    }

    pub fn locale(&self) -> Locale {
        *self.current.read()
    }

    /// 切换语言并持久化
    ///
    /// 持久化失败只记录警告，内存中的语言仍然立即生效。
    /// 写锁一直持有到保存结束，保证内存和存储中的语言一致。
    pub fn set_locale(&self, locale: Locale) {
        let mut current = self.current.write();
        *current = locale;

        if let Err(e) = self.preference.save(locale.code()) {
            log::warn!("语言已切换为 {}，但未能保存: {}", locale, e);
        } else {
            log::info!("界面语言已切换为 {}", locale);
        }
    }

    /// 按当前语言翻译，找不到时原样返回键
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translations::lookup(self.locale(), key).unwrap_or(key)
    }

    /// 获取某个语言的完整文案表，未指定时使用当前语言
    pub fn translations(&self, locale: Option<Locale>) -> BTreeMap<&'static str, &'static str> {
        let locale = locale.unwrap_or_else(|| self.locale());
        translations::table(locale)
            .iter()
            .map(|(k, v)| (*k, *v))
            .collect()
    }

    /// 两种语言的搜索前缀合集，与当前语言无关
    pub fn search_prefixes(&self) -> &'static BTreeMap<&'static str, SearchCategory> {
        search_prefixes()
    }
}
