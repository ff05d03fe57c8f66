use anyhow::Context;
use crate::models::weather_data::WeatherData;

/// 输出为json对象，没有值的键输出为 `null`
pub fn to_json(data: &WeatherData, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        serde_json::to_string_pretty(data).context("序列化json失败")
    } else {
        serde_json::to_string(data).context("序列化json失败")
    }
}
