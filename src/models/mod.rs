pub mod args;
pub mod weather_data;
