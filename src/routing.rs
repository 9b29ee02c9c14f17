use pyo3::prelude::*;
use pyo3::types::PyDict;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use wayfinder_core::prelude::*;

use crate::model::PyAirportModel;

/// RouteResult
///
/// Walking route between two gates, possibly through amenity stops.
///
/// An empty route (no stops) means one of the gates is unknown. An
/// unreachable destination gives ``total_cost == inf``.
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "RouteResult", frozen)]
pub struct PyRouteResult {
    inner: RoutingResult,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyRouteResult {
    /// Sum of straight-line segment lengths, in plan units
    #[getter]
    fn total_distance(&self) -> f64 {
        self.inner.total_distance
    }

    /// Sum of traversed edge weights
    #[getter]
    fn total_cost(&self) -> f64 {
        self.inner.total_cost
    }

    #[getter]
    fn visited(&self) -> Vec<String> {
        self.inner.preferences.visited.clone()
    }

    #[getter]
    fn skipped(&self) -> Vec<String> {
        self.inner.preferences.skipped.clone()
    }

    /// Display names of all stops, corridors included
    #[getter]
    fn stop_names(&self) -> Vec<String> {
        self.inner.stops.iter().map(|stop| stop.name.clone()).collect()
    }

    #[getter]
    fn polyline(&self) -> Vec<(f64, f64)> {
        self.inner.polyline.iter().map(|&[x, y]| (x, y)).collect()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn is_reachable(&self) -> bool {
        self.inner.total_cost.is_finite() && !self.inner.is_empty()
    }

    /// Compact summary as a dictionary
    fn summary<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("total_distance", self.inner.total_distance)?;
        dict.set_item("total_cost", self.inner.total_cost)?;
        dict.set_item("stops", self.inner.stops.len())?;
        dict.set_item("visited", self.visited())?;
        dict.set_item("skipped", self.skipped())?;
        Ok(dict)
    }

    /// Full route as a JSON string
    fn as_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to serialize route: {e}"
            ))
        })
    }

    /// Route as a GeoJSON ``FeatureCollection`` string, plan coordinates
    fn to_geojson(&self) -> PyResult<String> {
        self.inner.to_geojson_string().map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "GeoJSON export failed: {e}"
            ))
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "RouteResult(stops={}, total_distance={:.1}, total_cost={:.1}, visited={:?})",
            self.inner.stops.len(),
            self.inner.total_distance,
            self.inner.total_cost,
            self.inner.preferences.visited
        )
    }
}

/// Find a walking route between two gates
///
/// Parameters
/// ----------
/// model : AirportModel
/// arrival_gate : str
///     Gate code the traveler starts from, e.g. ``"A1"``
/// departure_gate : str
///     Gate code of the onward flight
/// preferences : str
///     Free text such as ``"toilet then coffee"``; amenities mentioned are
///     inserted as intermediate stops
///
/// Returns
/// -------
/// RouteResult
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "compute_route")]
#[pyo3(signature = (model, arrival_gate, departure_gate, preferences=""))]
pub fn py_compute_route(
    py: Python<'_>,
    model: &PyAirportModel,
    arrival_gate: &str,
    departure_gate: &str,
    preferences: &str,
) -> PyRouteResult {
    let airport = &model.model;
    let inner = py.detach(|| compute_route(airport, arrival_gate, departure_gate, preferences));
    PyRouteResult { inner }
}

/// Amenity categories named in a free-text wish
///
/// Returns
/// -------
/// tuple[list[str], list[str]]
///     Must-visit and optional categories
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "parse_preferences")]
pub fn py_parse_preferences(text: &str) -> (Vec<String>, Vec<String>) {
    let parsed = parse_preferences(text);
    let names = |categories: &[PoiCategory]| {
        categories
            .iter()
            .map(|category| category.as_str().to_string())
            .collect::<Vec<_>>()
    };
    (names(&parsed.must_visit), names(&parsed.optional_visit))
}
