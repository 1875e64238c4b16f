use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 界面语言
///
/// 只支持德语和英语两种，前端传入其它值会在反序列化时被拒绝。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    /// 合并搜索前缀表时使用的顺序，后者覆盖前者
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    /// 持久化时使用的语言代码
    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            other => Err(format!("不支持的语言: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_german() {
        assert_eq!(Locale::default(), Locale::De);
    }

    #[test]
    fn parses_known_codes_only() {
        assert_eq!("de".parse::<Locale>(), Ok(Locale::De));
        assert_eq!(" en ".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        assert_eq!(
            serde_json::from_str::<Locale>("\"de\"").unwrap(),
            Locale::De
        );
        assert!(serde_json::from_str::<Locale>("\"DE\"").is_err());
    }
}
