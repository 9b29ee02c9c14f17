use std::path::PathBuf;

use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use wayfinder_core::prelude::*;

/// AirportModel
///
/// Static airport data: the POI catalog, terminal zones and the walkable
/// navigation graph connecting corridors, amenities and gates.
///
/// The model is immutable once loaded and can be shared freely between
/// threads. Every planning and routing function takes it as first argument.
///
/// Example:
///
/// .. code-block:: python
///
///     model = load_airport_model("data/airport.json")
///     route = compute_route(model, "A1", "B10", "need a coffee")
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "AirportModel", frozen)]
pub struct PyAirportModel {
    pub(crate) model: AirportModel,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyAirportModel {
    pub fn poi_count(&self) -> usize {
        self.model.poi_count()
    }

    pub fn zone_count(&self) -> usize {
        self.model.zone_count()
    }

    /// Catalog ids, optionally restricted to one category (``"cafe"``,
    /// ``"wc"``, ``"gate"``...)
    #[pyo3(signature = (category=None))]
    pub fn poi_ids(&self, category: Option<&str>) -> Vec<String> {
        self.model
            .pois
            .iter()
            .filter(|poi| category.is_none_or(|c| poi.category.as_str() == c))
            .map(|poi| poi.id.clone())
            .collect()
    }

    /// Catalog entry as a JSON string, ``None`` for unknown ids
    pub fn poi_json(&self, poi_id: &str) -> PyResult<Option<String>> {
        self.model
            .poi(poi_id)
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Failed to serialize POI: {e}"
                ))
            })
    }

    /// Resolve a gate code to ``(x, y, terminal)``
    pub fn gate_location(&self, gate_code: &str) -> Option<(f64, f64, String)> {
        self.model
            .gate_location(gate_code)
            .map(|location| (location.x, location.y, location.terminal))
    }

    pub fn summary(&self) -> String {
        self.model.summary()
    }

    fn __repr__(&self) -> String {
        format!("AirportModel({})", self.model.summary())
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load an airport model from a JSON data file
///
/// Parameters
/// ----------
/// data_path : str
///     Path to a JSON document with ``pois``, ``zones`` and ``navGraph``
///
/// Returns
/// -------
/// AirportModel
///
/// Raises
/// ------
/// RuntimeError
///     If the file cannot be read or the data is inconsistent
///
/// Notes
/// -----
/// The GIL is released while the file is parsed and validated.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn load_airport_model(py: Python<'_>, data_path: &str) -> PyResult<PyAirportModel> {
    let config = AirportModelConfig::new(PathBuf::from(data_path));

    py.detach(|| create_airport_model(&config))
        .map(|model| PyAirportModel { model })
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to load airport model: {e}"
            ))
        })
}

/// Build an airport model from a JSON string
///
/// Raises
/// ------
/// ValueError
///     If the document is malformed or inconsistent
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn airport_model_from_json(json: &str) -> PyResult<PyAirportModel> {
    AirportModel::from_json_str(json)
        .map(|model| PyAirportModel { model })
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid airport data: {e}"
            ))
        })
}
