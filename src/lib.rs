use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use matrix::gate_cost_matrix;
use model::{PyAirportModel, airport_model_from_json, load_airport_model};
use planning::{
    PyTravelerPreferences, PyTripDetails, py_build_timeline, py_format_duration, py_plan_trip,
    py_recommend_pois,
};
use routing::{PyRouteResult, py_compute_route, py_parse_preferences};

pub mod matrix;
pub mod model;
pub mod planning;
pub mod routing;

/// Airport wayfinding: recommendations, timelines and gate routing.
#[pymodule]
fn wayfinder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyAirportModel>()?;
    m.add_function(wrap_pyfunction!(load_airport_model, m)?)?;
    m.add_function(wrap_pyfunction!(airport_model_from_json, m)?)?;

    m.add_class::<PyTravelerPreferences>()?;
    m.add_class::<PyTripDetails>()?;
    m.add_function(wrap_pyfunction!(py_recommend_pois, m)?)?;
    m.add_function(wrap_pyfunction!(py_build_timeline, m)?)?;
    m.add_function(wrap_pyfunction!(py_plan_trip, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_duration, m)?)?;

    m.add_class::<PyRouteResult>()?;
    m.add_function(wrap_pyfunction!(py_compute_route, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_preferences, m)?)?;

    m.add_function(wrap_pyfunction!(gate_cost_matrix, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
