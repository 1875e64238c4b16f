use std::collections::BTreeMap;
use tauri::State;

use crate::i18n::locale::Locale;
use crate::i18n::localizer::Localizer;
use crate::i18n::prefixes::{parse_search_query as parse_query, SearchCategory, SearchQuery};

// ==================== 语言相关 ====================

/// 获取当前界面语言
#[tauri::command]
pub fn get_locale(localizer: State<'_, Localizer>) -> Locale {
    localizer.locale()
}

/// 切换界面语言（立即生效并持久化）
#[tauri::command]
pub fn set_locale(localizer: State<'_, Localizer>, locale: Locale) {
    localizer.set_locale(locale);
}

/// 按当前语言翻译单个键
#[tauri::command]
pub fn translate(localizer: State<'_, Localizer>, key: String) -> String {
    localizer.translate(&key).to_string()
}

/// 获取完整文案表，未指定语言时返回当前语言
#[tauri::command]
pub fn get_translations(
    localizer: State<'_, Localizer>,
    locale: Option<Locale>,
) -> BTreeMap<&'static str, &'static str> {
    localizer.translations(locale)
}

// ==================== 搜索前缀相关 ====================

/// 获取两种语言合并后的搜索前缀表
#[tauri::command]
pub fn get_search_prefixes(
    localizer: State<'_, Localizer>,
) -> BTreeMap<&'static str, SearchCategory> {
    localizer.search_prefixes().clone()
}

/// 解析搜索框输入，识别 `@karton`、`@product` 等前缀
#[tauri::command]
pub fn parse_search_query(query: String) -> SearchQuery {
    parse_query(&query)
}
