use prettytable::{Cell, format, row, Row, Table};
use crate::models::weather_data::WeatherData;

const MISSING_VALUE: &str = "<无值>";

pub fn build_table(data: &WeatherData) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["键", "值"]);
    for (key, value) in data {
        let value_cell = match value {
            Some(v) => Cell::new(v),
            // 没有值的键用斜体标出
            None => Cell::new(MISSING_VALUE).style_spec("i"),
        };
        table.add_row(Row::new(vec![Cell::new(key), value_cell]));
    }
    table
}

const EMPTY_NOTICE: &str = "没有解析到任何数据";

/// 没有数据时只返回提示，否则返回标题加表格
pub fn render_data(data: &WeatherData) -> String {
    if data.is_empty() {
        return format!("{}\n", EMPTY_NOTICE);
    }
    format!("解析结果:\n{}", build_table(data))
}

pub fn show_data_with_table(data: &WeatherData) {
    print!("{}", render_data(data));
}
