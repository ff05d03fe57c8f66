use std::collections::btree_map::{self, BTreeMap};
use serde::{Deserialize, Serialize};

/// 解析结果：键 -> 可选值
///
/// 值为 `None` 表示该键没有值部分（例如 `"novalue"`），与空字符串 `Some("")` 区分开。
/// 按键排序存储，遍历和输出顺序稳定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherData {
    entries: BTreeMap<String, Option<String>>,
}

impl WeatherData {
    pub fn new() -> Self {
        WeatherData {
            entries: BTreeMap::new(),
        }
    }

    /// 插入一条记录，已存在的键会被覆盖，返回旧值
    pub fn insert(&mut self, key: String, value: Option<String>) -> Option<Option<String>> {
        self.entries.insert(key, value)
    }

    /// 取值，键不存在或没有值时都返回 `None`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 键存在但没有值
    pub fn is_missing(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(None))
    }

    pub fn missing_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Option<String>> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, Option<String>> {
        self.entries
    }
}

impl From<BTreeMap<String, Option<String>>> for WeatherData {
    fn from(entries: BTreeMap<String, Option<String>>) -> Self {
        WeatherData { entries }
    }
}

impl FromIterator<(String, Option<String>)> for WeatherData {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut data = WeatherData::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

impl IntoIterator for WeatherData {
    type Item = (String, Option<String>);
    type IntoIter = btree_map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a WeatherData {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = btree_map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
