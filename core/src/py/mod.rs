// Python-binding (maturin --features python). Tynt lag over JSON-inngangene i `engine`:
// str eller dict inn, dict ut.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::engine::{analyze_hours_json_stored, analyze_json_stored};
use crate::storage::ThresholdStore;
use crate::verdict::describe_verdict_str;
use crate::weather_codes::{cardinal_direction, weather_info};

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

/// Tillater både str og dict/objekt (serialiseres med Python sin json.dumps).
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))
}

/// JSON-string → Python-objekt via json.loads (unngår pyo3 serde-feature).
fn json_to_py(py: Python<'_>, out: &str) -> PyResult<PyObject> {
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out,))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

fn optional_json(py: Python<'_>, payload: Option<&PyAny>) -> PyResult<Option<String>> {
    payload.map(|p| payload_to_json(py, p)).transpose()
}

// ──────────────────────────────────────────────────────────────────────────────
// PYFUNCTIONS
// ──────────────────────────────────────────────────────────────────────────────

/// Uten `thresholds` brukes de lagrede tersklene (RIDEORNOT_THRESHOLDS).
#[pyfunction]
#[pyo3(signature = (window, thresholds=None))]
fn analyze(py: Python<'_>, window: &PyAny, thresholds: Option<&PyAny>) -> PyResult<PyObject> {
    let window = payload_to_json(py, window)?;
    let thresholds = optional_json(py, thresholds)?;
    let out = analyze_json_stored(&window, thresholds.as_deref(), &ThresholdStore::default_location())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    json_to_py(py, &out)
}

#[pyfunction]
#[pyo3(signature = (window, thresholds=None))]
fn analyze_hours(py: Python<'_>, window: &PyAny, thresholds: Option<&PyAny>) -> PyResult<PyObject> {
    let window = payload_to_json(py, window)?;
    let thresholds = optional_json(py, thresholds)?;
    let out = analyze_hours_json_stored(&window, thresholds.as_deref(), &ThresholdStore::default_location())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    json_to_py(py, &out)
}

/// Terskler fra fil (eller standardverdier) som dict.
#[pyfunction]
#[pyo3(signature = (path=None))]
fn load_thresholds(py: Python<'_>, path: Option<&str>) -> PyResult<PyObject> {
    let store = path.map_or_else(ThresholdStore::default_location, |p| ThresholdStore::new(p));
    let out = serde_json::to_string(&store.load())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    json_to_py(py, &out)
}

#[pyfunction]
fn describe_verdict(py: Python<'_>, verdict: &str) -> PyResult<PyObject> {
    let out = serde_json::to_string(&describe_verdict_str(verdict))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    json_to_py(py, &out)
}

#[pyfunction]
fn weather_description(code: i32) -> (String, String) {
    let info = weather_info(code);
    (info.description.to_string(), info.icon.to_string())
}

#[pyfunction]
fn cardinal(degrees: f64) -> &'static str {
    cardinal_direction(degrees)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn rideornot_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_hours, m)?)?;
    m.add_function(wrap_pyfunction!(load_thresholds, m)?)?;
    m.add_function(wrap_pyfunction!(describe_verdict, m)?)?;
    m.add_function(wrap_pyfunction!(weather_description, m)?)?;
    m.add_function(wrap_pyfunction!(cardinal, m)?)?;
    Ok(())
}
