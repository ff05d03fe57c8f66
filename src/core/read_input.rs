use std::io::Read;
use anyhow::Context;

/// 取命令行传入的数据，没有传入就从标准输入读取
pub fn read_input(data: Option<String>) -> anyhow::Result<String> {
    match data {
        Some(data) => Ok(data),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("读取标准输入失败")?;
            Ok(strip_line_break(&buf).to_string())
        }
    }
}

/// 只去掉末尾一个换行（`\n` 或 `\r\n`），其他空白原样保留
pub(crate) fn strip_line_break(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}
