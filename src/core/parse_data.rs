use tracing::{debug, trace};
use crate::models::weather_data::WeatherData;

/// 解析 `key1=value1|key2=value2|...` 格式的数据
///
/// - 按 `|` 切分，丢弃空片段
/// - 每个片段按 `=` 完整切分，第一段为键，第二段为值，其余丢弃
/// - 没有 `=` 的片段值为 `None`
/// - 重复的键以最后一次出现为准
///
/// 不会失败，任何输入都会得到一个结果。
pub fn parse_data(raw_data: &str) -> WeatherData {
    let data = raw_data
        .split('|')
        .filter(|pair| !pair.is_empty())
        .fold(WeatherData::new(), |mut acc, pair| {
            let mut parts = pair.split('=');
            // split 至少返回一个片段
            let key = parts.next().unwrap_or_default();
            let value = parts.next();
            match value {
                None => debug!("片段没有值: '{}'", pair),
                Some(_) if parts.next().is_some() => debug!("片段包含多个'='，丢弃多余部分: '{}'", pair),
                Some(_) => {}
            }
            acc.insert(key.to_string(), value.map(str::to_string));
            acc
        });
    trace!("解析完成，共{}项", data.len());
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed() {
        let data = parse_data("temp=72|humidity=40|wind=NW");
        assert_eq!(data.len(), 3);
        assert_eq!(data.get("temp"), Some("72"));
        assert_eq!(data.get("humidity"), Some("40"));
        assert_eq!(data.get("wind"), Some("NW"));
    }

    #[test]
    fn test_single_pair() {
        let data = parse_data("temp=72");
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("temp"), Some("72"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_data("").is_empty());
        assert!(parse_data("|||").is_empty());
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(parse_data("|a=1||b=2|"), parse_data("a=1|b=2"));
        assert_eq!(parse_data("a=1||b=2").len(), 2);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let data = parse_data("a=1|a=2");
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("a"), Some("2"));

        // 后出现的无值片段同样会覆盖
        let data = parse_data("a=1|a");
        assert!(data.is_missing("a"));
    }

    #[test]
    fn test_pair_without_equals_is_missing() {
        let data = parse_data("novalue");
        assert_eq!(data.len(), 1);
        assert!(data.contains_key("novalue"));
        assert!(data.is_missing("novalue"));
        assert_eq!(data.get("novalue"), None);
    }

    #[test]
    fn test_extra_equals_truncated() {
        let data = parse_data("a=b=c");
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("a"), Some("b"));
    }

    #[test]
    fn test_empty_key_and_value() {
        let data = parse_data("a=|=5");
        assert_eq!(data.get("a"), Some(""));
        assert!(!data.is_missing("a"));
        assert_eq!(data.get(""), Some("5"));
    }

    #[test]
    fn test_whitespace_kept() {
        let data = parse_data(" a = 1");
        assert_eq!(data.get(" a "), Some(" 1"));
        assert!(!data.contains_key("a"));
    }

    #[test]
    fn test_input_untouched() {
        let raw = String::from("x=1|y");
        let _ = parse_data(&raw);
        assert_eq!(raw, "x=1|y");
    }
}
