use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use weather_data_parser::core::parse_data::parse_data;
use weather_data_parser::core::read_input::read_input;
use weather_data_parser::core::show_data_with_table::show_data_with_table;
use weather_data_parser::core::to_json::to_json;
use weather_data_parser::models::args::{Args, OutputFormat};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // verbose 优先，否则读 RUST_LOG，默认只打印 warn
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let raw_data = read_input(args.data)?;
    debug!("原始数据: '{}'", raw_data);
    let data = parse_data(&raw_data);

    match args.format {
        OutputFormat::Table => show_data_with_table(&data),
        OutputFormat::Json => println!("{}", to_json(&data, args.pretty)?),
    }
    Ok(())
}
