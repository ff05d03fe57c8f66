#[cfg(feature = "python-binding")]
use pyo3::prelude::*;
#[cfg(feature = "python-binding")]
use pyo3::types::PyDict;

pub mod models;
pub mod core;

pub use crate::core::parse_data::parse_data;
pub use crate::models::weather_data::WeatherData;

#[cfg(feature = "python-binding")]
#[pyfunction]
#[pyo3(name = "parse_data")]
fn py_parse_data(py: Python, raw_data: &str) -> PyResult<PyObject> {
    let data = crate::core::parse_data::parse_data(raw_data);
    let dict = PyDict::new(py);
    for (key, value) in data {
        // 没有值的键在python中为None
        dict.set_item(key, value)?;
    }
    Ok(dict.into())
}

#[cfg(feature = "python-binding")]
#[pymodule]
fn weather_data_parser(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_parse_data, m)?)?;
    Ok(())
}
