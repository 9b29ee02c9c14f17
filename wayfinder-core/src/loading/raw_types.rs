use serde::Deserialize;

use crate::model::{Poi, Zone};

/// Top level of the airport data file
#[derive(Debug, Deserialize)]
pub struct RawAirportData {
    pub pois: Vec<Poi>,
    pub zones: Vec<Zone>,
    #[serde(rename = "navGraph")]
    pub nav_graph: RawNavGraph,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNavGraph {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
    pub poi_links: Vec<RawPoiLink>,
}

#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPoiLink {
    pub poi_id: String,
    pub node_id: String,
    pub weight: f64,
}
