use chrono::NaiveDateTime;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use serde::Serialize;
use wayfinder_core::prelude::*;

use crate::model::PyAirportModel;

fn to_value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to serialize result: {e}"
        ))
    })
}

/// TravelerPreferences
///
/// Onboarding answers used to filter and rank amenities.
///
/// Parameters
/// ----------
/// budget : int, optional
///     Highest acceptable price level, 1 to 3
/// dietary : list[str]
///     Dietary tags such as ``"vegan"`` or ``"halal"``
/// meal_type : str, optional
///     ``"quick-bite"`` or ``"sit-down"``
/// mobility : str
///     ``"normal"`` or ``"reduced"``
/// lounge_access : bool
/// free_text : str, optional
///     Free-text wishes, e.g. ``"need a coffee and a restroom"``
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "TravelerPreferences", frozen)]
#[derive(Clone)]
pub struct PyTravelerPreferences {
    pub(crate) inner: UserPreferences,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyTravelerPreferences {
    #[new]
    #[pyo3(signature = (budget=None, dietary=Vec::new(), meal_type=None, mobility="normal", lounge_access=false, free_text=None))]
    pub fn new(
        budget: Option<u8>,
        dietary: Vec<String>,
        meal_type: Option<&str>,
        mobility: &str,
        lounge_access: bool,
        free_text: Option<String>,
    ) -> PyResult<Self> {
        let meal_type = meal_type
            .map(str::parse::<MealType>)
            .transpose()
            .map_err(to_value_error)?;
        let mobility = mobility.parse::<MobilityMode>().map_err(to_value_error)?;

        Ok(Self {
            inner: UserPreferences {
                budget,
                dietary,
                meal_type,
                mobility,
                lounge_access,
                free_text,
            },
        })
    }

    fn __repr__(&self) -> String {
        format!("TravelerPreferences({:?})", self.inner)
    }
}

/// TripDetails
///
/// Facts about the traveler's arrival and onward flight.
///
/// Parameters
/// ----------
/// arrival_time : datetime.datetime
///     Naive local time the traveler lands
/// terminal : str
///     Terminal code, e.g. ``"T1"``
/// is_domestic : bool
/// has_baggage : bool
/// arriving_gate : str, optional
/// next_flight_time : datetime.datetime, optional
/// departure_gate : str, optional
/// is_connecting : bool, optional
///     ``False`` discards ``next_flight_time``
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "TripDetails", frozen)]
#[derive(Clone)]
pub struct PyTripDetails {
    pub(crate) inner: TripDetails,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyTripDetails {
    #[new]
    #[pyo3(signature = (arrival_time, terminal, is_domestic, has_baggage=false, arriving_gate=None, next_flight_time=None, departure_gate=None, is_connecting=None))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        arrival_time: NaiveDateTime,
        terminal: String,
        is_domestic: bool,
        has_baggage: bool,
        arriving_gate: Option<String>,
        next_flight_time: Option<NaiveDateTime>,
        departure_gate: Option<String>,
        is_connecting: Option<bool>,
    ) -> Self {
        Self {
            inner: TripDetails {
                arrival_time,
                terminal,
                arriving_gate,
                is_domestic,
                has_baggage,
                next_flight_time,
                departure_gate,
                is_connecting,
            },
        }
    }

    #[getter]
    pub fn boarding_deadline(&self) -> Option<NaiveDateTime> {
        self.inner.boarding_deadline()
    }

    fn __repr__(&self) -> String {
        format!("TripDetails({:?})", self.inner)
    }
}

/// Rank amenities reachable from a position
///
/// The position is ``(x, y)`` when given, otherwise the arrivals zone of
/// ``terminal``. Gates are never returned.
///
/// Returns
/// -------
/// str
///     JSON array of catalog entries annotated with ``travelTime``,
///     ``totalTime`` and ``score``, best first
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "recommend_pois")]
#[pyo3(signature = (model, terminal, preferences, now, available_minutes=None, position=None))]
pub fn py_recommend_pois(
    model: &PyAirportModel,
    terminal: &str,
    preferences: &PyTravelerPreferences,
    now: NaiveDateTime,
    available_minutes: Option<f64>,
    position: Option<(f64, f64)>,
) -> PyResult<String> {
    let origin = match position {
        Some((x, y)) => Location::new(x, y, terminal),
        None => model.model.arrival_location(terminal),
    };
    let recommendations = recommend_pois(
        &model.model,
        &origin,
        &preferences.inner,
        now,
        available_minutes,
    );
    to_json(&recommendations)
}

/// Build the ordered timeline of airport steps
///
/// Parameters
/// ----------
/// model : AirportModel
/// trip : TripDetails
/// preferences : TravelerPreferences
/// selected_pois : list[str]
///     Catalog ids, visited in this order
///
/// Returns
/// -------
/// str
///     JSON array of timeline steps with risk status
///
/// Raises
/// ------
/// ValueError
///     If a selected id is not in the catalog
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "build_timeline")]
#[pyo3(signature = (model, trip, preferences, selected_pois=Vec::new()))]
pub fn py_build_timeline(
    model: &PyAirportModel,
    trip: &PyTripDetails,
    preferences: &PyTravelerPreferences,
    selected_pois: Vec<String>,
) -> PyResult<String> {
    let selected = selected_pois
        .iter()
        .map(|id| {
            model
                .model
                .poi(id)
                .ok_or_else(|| to_value_error(format!("Unknown POI: {id}")))
        })
        .collect::<PyResult<Vec<_>>>()?;

    let steps = build_timeline(&model.model, &trip.inner, &preferences.inner, &selected);
    to_json(&steps)
}

/// Plan the whole trip as of ``now``
///
/// Returns
/// -------
/// str
///     JSON object with ``recommendations``, ``selected``, ``timeline``,
///     ``route`` and ``minutesUntilBoarding``
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "plan_trip")]
pub fn py_plan_trip(
    py: Python<'_>,
    model: &PyAirportModel,
    trip: &PyTripDetails,
    preferences: &PyTravelerPreferences,
    now: NaiveDateTime,
) -> PyResult<String> {
    let request = PlanRequest {
        trip: trip.inner.clone(),
        preferences: preferences.inner.clone(),
    };
    let airport = &model.model;
    py.detach(|| to_json(&plan_trip(airport, &request, now)))
}

/// Format a duration in minutes as ``"45m"``, ``"2h"`` or ``"2h 5m"``
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "format_duration")]
pub fn py_format_duration(minutes: u32) -> String {
    format_duration(minutes)
}
