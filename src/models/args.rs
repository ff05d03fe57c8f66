use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 原始数据，例如 temp=72|humidity=40；不传则从标准输入读取
    pub data: Option<String>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// 格式化json输出
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,

    /// 打印详情
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["weather-data-parser"]);
        assert_eq!(args.data, None);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(!args.pretty);
        assert!(!args.verbose);
    }

    #[test]
    fn test_json_args() {
        let args = Args::parse_from(["weather-data-parser", "-f", "json", "-p", "temp=72|calm"]);
        assert_eq!(args.data.as_deref(), Some("temp=72|calm"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
