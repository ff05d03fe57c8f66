pub mod parse_data;
pub mod read_input;
pub mod show_data_with_table;
pub mod to_json;
