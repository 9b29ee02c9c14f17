use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use rayon::prelude::*;
use wayfinder_core::prelude::*;

use crate::model::PyAirportModel;

/// Walking cost between every pair of gates
///
/// Rows are origins, columns destinations, in the order of ``gates``.
/// Unknown or unreachable pairs are ``None``. Rows are computed in parallel
/// with the GIL released.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn gate_cost_matrix(
    py: Python<'_>,
    model: &PyAirportModel,
    gates: Vec<String>,
) -> Vec<Vec<Option<f64>>> {
    let airport = &model.model;
    py.detach(|| {
        gates
            .par_iter()
            .map(|origin| {
                gates
                    .iter()
                    .map(|destination| {
                        let route = compute_route(airport, origin, destination, "");
                        (!route.is_empty() && route.total_cost.is_finite())
                            .then_some(route.total_cost)
                    })
                    .collect()
            })
            .collect()
    })
}
