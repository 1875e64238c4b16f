//! 搜索前缀映射
//!
//! 用户可以在搜索框中输入 `@karton 12`、`@product Stempel` 这样的前缀查询。
//! 两种语言的前缀都映射到同一组内部分类键，且与当前界面语言无关。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::locale::Locale;

/// 前缀解析后的内部分类键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    Box,
    Product,
    Manufacturer,
    Tag,
    Location,
}

pub type PrefixTable = &'static [(&'static str, SearchCategory)];

pub static DE_PREFIXES: PrefixTable = &[
    ("@box", SearchCategory::Box),
    ("@karton", SearchCategory::Box),
    ("@produkt", SearchCategory::Product),
    ("@hersteller", SearchCategory::Manufacturer),
    ("@tag", SearchCategory::Tag),
    ("@ort", SearchCategory::Location),
    ("@raum", SearchCategory::Location),
];

pub static EN_PREFIXES: PrefixTable = &[
    ("@box", SearchCategory::Box),
    ("@product", SearchCategory::Product),
    ("@manufacturer", SearchCategory::Manufacturer),
    ("@tag", SearchCategory::Tag),
    ("@location", SearchCategory::Location),
    ("@room", SearchCategory::Location),
];

/// 获取指定语言自己的前缀表
pub fn prefixes_for(locale: Locale) -> PrefixTable {
    match locale {
        Locale::De => DE_PREFIXES,
        Locale::En => EN_PREFIXES,
    }
}

/// 按顺序合并多张前缀表，键冲突时后面的表覆盖前面的表
pub fn merge_prefix_tables<I>(tables: I) -> BTreeMap<&'static str, SearchCategory>
where
    I: IntoIterator<Item = PrefixTable>,
{
    let mut merged = BTreeMap::new();
    for table in tables {
        for (prefix, category) in table {
            merged.insert(*prefix, *category);
        }
    }
    merged
}

static MERGED_PREFIXES: LazyLock<BTreeMap<&'static str, SearchCategory>> =
    LazyLock::new(|| merge_prefix_tables(Locale::ALL.into_iter().map(prefixes_for)));

/// 两种语言的前缀合集（德语在前、英语在后）
pub fn search_prefixes() -> &'static BTreeMap<&'static str, SearchCategory> {
    &MERGED_PREFIXES
}

/// 前缀过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub category: SearchCategory,
    pub value: String,
}

/// 搜索框输入的解析结果
///
/// 命中前缀时 `term` 为空，查询内容放在 `filter.value` 中。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub filter: Option<SearchFilter>,
}

/// 解析搜索框输入
///
/// 前缀不区分大小写，前缀和查询值之间必须有空白字符。
pub fn parse_search_query(query: &str) -> SearchQuery {
    let query = query.trim();

    if query.starts_with('@') {
        if let Some((prefix, rest)) = query.split_once(char::is_whitespace) {
            let prefix = prefix.to_lowercase();
            if let Some(category) = search_prefixes().get(prefix.as_str()) {
                return SearchQuery {
                    term: String::new(),
                    filter: Some(SearchFilter {
                        category: *category,
                        value: rest.trim().to_string(),
                    }),
                };
            }
        }
    }

    SearchQuery {
        term: query.to_string(),
        filter: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_prefixes_contain_both_languages() {
        let prefixes = search_prefixes();

        assert_eq!(prefixes.get("@box"), Some(&SearchCategory::Box));
        assert_eq!(prefixes.get("@karton"), Some(&SearchCategory::Box));
        assert_eq!(prefixes.get("@product"), Some(&SearchCategory::Product));
        assert_eq!(prefixes.get("@produkt"), Some(&SearchCategory::Product));
        assert_eq!(prefixes.get("@raum"), Some(&SearchCategory::Location));
        assert_eq!(prefixes.get("@room"), Some(&SearchCategory::Location));

        for (prefix, category) in DE_PREFIXES.iter().chain(EN_PREFIXES.iter()) {
            assert_eq!(prefixes.get(prefix), Some(category), "prefix {}", prefix);
        }
    }

    #[test]
    fn later_table_wins_on_collision() {
        static FIRST: PrefixTable = &[("@x", SearchCategory::Box), ("@a", SearchCategory::Tag)];
        static SECOND: PrefixTable = &[("@x", SearchCategory::Location)];

        let merged = merge_prefix_tables([FIRST, SECOND]);
        assert_eq!(merged.get("@x"), Some(&SearchCategory::Location));
        assert_eq!(merged.get("@a"), Some(&SearchCategory::Tag));

        let reversed = merge_prefix_tables([SECOND, FIRST]);
        assert_eq!(reversed.get("@x"), Some(&SearchCategory::Box));
    }

    #[test]
    fn shared_prefixes_agree_across_languages() {
        // 当前数据中两张表的共同前缀（@box、@tag）分类一致，合并顺序不影响结果
        for (prefix, category) in DE_PREFIXES {
            if let Some((_, other)) = EN_PREFIXES.iter().find(|(p, _)| p == prefix) {
                assert_eq!(category, other, "prefix {}", prefix);
            }
        }
    }

    #[test]
    fn parses_prefix_in_either_language() {
        let q = parse_search_query("  @Karton  A-12 ");
        assert_eq!(q.term, "");
        assert_eq!(
            q.filter,
            Some(SearchFilter {
                category: SearchCategory::Box,
                value: "A-12".to_string(),
            })
        );

        let q = parse_search_query("@MANUFACTURER Stampin Up");
        assert_eq!(
            q.filter,
            Some(SearchFilter {
                category: SearchCategory::Manufacturer,
                value: "Stampin Up".to_string(),
            })
        );
    }

    #[test]
    fn unknown_or_bare_prefix_is_free_text() {
        assert_eq!(
            parse_search_query("@farbe rot"),
            SearchQuery {
                term: "@farbe rot".to_string(),
                filter: None,
            }
        );
        // 没有查询值的前缀按普通文本处理
        assert_eq!(parse_search_query("@box ").term, "@box");
        assert_eq!(parse_search_query("@box ").filter, None);
        assert_eq!(parse_search_query(" Weihnachten ").term, "Weihnachten");
    }
}
