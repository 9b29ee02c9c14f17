use geo::Point;
use hashbrown::HashSet;
use log::{info, warn};
use petgraph::visit::Bfs;

use super::config::AirportModelConfig;
use super::raw_types::{RawAirportData, RawNavGraph};
use crate::algo::estimates::distance;
use crate::model::{NavNode, NodeKind, POI_NODE_PREFIX, poi_node_id};
use crate::{AirportModel, Error, NavigationGraph, Poi, Zone};

/// Edge weights may undercut the straight-line length by this much before a
/// warning is logged (rounding in hand-made data)
const ADMISSIBILITY_TOLERANCE: f64 = 1e-6;

/// Creates an airport model from the data file named in the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or the data is inconsistent
pub fn create_airport_model(config: &AirportModelConfig) -> Result<AirportModel, Error> {
    validate_config(config)?;

    info!("Loading airport data: {}", config.data_path.display());
    let contents = std::fs::read_to_string(&config.data_path)?;
    let model = AirportModel::from_json_str(&contents)?;

    info!("Airport model created successfully: {}", model.summary());
    Ok(model)
}

impl AirportModel {
    /// Builds a model from an in-memory JSON document
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, malformed opening hours, inverted
    /// wait intervals, duplicate ids or links to unknown nodes
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let raw: RawAirportData = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// # Errors
    ///
    /// See [`AirportModel::from_json_str`]
    pub fn from_raw(raw: RawAirportData) -> Result<Self, Error> {
        validate_catalog(&raw.pois, &raw.zones)?;
        let graph = build_navigation_graph(&raw.nav_graph, &raw.pois)?;
        report_poi_coverage(&graph, &raw.pois);

        Ok(AirportModel::new(raw.pois, raw.zones, graph))
    }
}

fn validate_config(config: &AirportModelConfig) -> Result<(), Error> {
    if !config.data_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Airport data file not found: {}", config.data_path.display()),
        )));
    }

    if !config.data_path.is_file() {
        return Err(Error::InvalidData(format!(
            "Airport data path is not a file: {}",
            config.data_path.display()
        )));
    }

    Ok(())
}

fn validate_catalog(pois: &[Poi], zones: &[Zone]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(pois.len());
    for poi in pois {
        if !seen.insert(poi.id.as_str()) {
            return Err(Error::InvalidData(format!("Duplicate POI id: {}", poi.id)));
        }
        let (min, max) = poi.avg_wait_time;
        if min > max {
            return Err(Error::InvalidData(format!(
                "POI {} has an inverted wait interval [{min}, {max}]",
                poi.id
            )));
        }
        if poi.price_level > 3 {
            return Err(Error::InvalidData(format!(
                "POI {} has price level {}, expected 0-3",
                poi.id, poi.price_level
            )));
        }
    }

    let mut seen = HashSet::with_capacity(zones.len());
    for zone in zones {
        if !seen.insert(zone.id.as_str()) {
            return Err(Error::InvalidData(format!("Duplicate zone id: {}", zone.id)));
        }
    }

    Ok(())
}

fn build_navigation_graph(raw: &RawNavGraph, pois: &[Poi]) -> Result<NavigationGraph, Error> {
    let mut graph = NavigationGraph::new();

    for node in &raw.nodes {
        if node.id.starts_with(POI_NODE_PREFIX) {
            return Err(Error::InvalidData(format!(
                "Corridor node id {} uses the reserved {POI_NODE_PREFIX} prefix",
                node.id
            )));
        }
        graph.add_node(NavNode {
            id: node.id.clone(),
            name: node.name.clone(),
            geometry: Point::new(node.x, node.y),
            kind: NodeKind::Corridor,
        })?;
    }

    for poi in pois {
        graph.add_node(NavNode {
            id: poi_node_id(&poi.id),
            name: poi.name.clone(),
            geometry: Point::new(poi.x, poi.y),
            kind: NodeKind::Poi,
        })?;
    }

    for edge in &raw.edges {
        graph.connect(&edge.from, &edge.to, edge.weight)?;
        warn_if_inadmissible(&graph, &edge.from, &edge.to, edge.weight);
    }

    for link in &raw.poi_links {
        if graph.poi_node(&link.poi_id).is_none() {
            return Err(Error::InvalidData(format!(
                "POI link refers to unknown POI {}",
                link.poi_id
            )));
        }
        graph.link_poi(&link.poi_id, &link.node_id, link.weight)?;
        warn_if_inadmissible(&graph, &poi_node_id(&link.poi_id), &link.node_id, link.weight);
    }

    Ok(graph)
}

/// A* stays optimal only while no weight undercuts the straight-line distance
fn warn_if_inadmissible(graph: &NavigationGraph, from: &str, to: &str, weight: f64) {
    let endpoints = graph
        .node(from)
        .and_then(|a| graph.node_weight(a))
        .zip(graph.node(to).and_then(|b| graph.node_weight(b)));

    if let Some((a, b)) = endpoints {
        let length = distance(a.geometry, b.geometry);
        if weight + ADMISSIBILITY_TOLERANCE < length {
            warn!(
                "Edge {from} <-> {to} has weight {weight:.2} below its straight-line length \
                 {length:.2}; routes through it may not be optimal"
            );
        }
    }
}

fn report_poi_coverage(graph: &NavigationGraph, pois: &[Poi]) {
    let unlinked: Vec<&str> = pois
        .iter()
        .filter(|poi| graph.poi_attachment(&poi.id).is_none())
        .map(|poi| poi.id.as_str())
        .collect();
    if !unlinked.is_empty() {
        warn!(
            "{} POIs have no access link and cannot be routed to: {}",
            unlinked.len(),
            unlinked.join(", ")
        );
    }

    let Some(root) = graph
        .graph
        .node_indices()
        .find(|&idx| graph.graph[idx].kind == NodeKind::Corridor)
    else {
        warn!("Navigation graph has no corridor nodes");
        return;
    };

    let mut reachable = HashSet::new();
    let mut bfs = Bfs::new(&graph.graph, root);
    while let Some(idx) = bfs.next(&graph.graph) {
        reachable.insert(idx);
    }

    let isolated = pois
        .iter()
        .filter(|poi| graph.poi_attachment(&poi.id).is_some())
        .filter(|poi| {
            graph
                .poi_node(&poi.id)
                .is_some_and(|idx| !reachable.contains(&idx))
        })
        .count();
    if isolated > 0 {
        warn!(
            "{isolated} of {} linked POIs are not reachable from corridor node {}",
            pois.len(),
            graph.graph[root].id
        );
    }
}
