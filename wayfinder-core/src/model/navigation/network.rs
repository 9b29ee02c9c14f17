use hashbrown::HashMap;
use petgraph::{
    Directed,
    graph::{DiGraph, Edges, NodeIndex},
};

use super::components::{NavEdge, NavNode, NodeKind};
use crate::Error;

/// Namespace separating POI nodes from corridor vertices
pub const POI_NODE_PREFIX: &str = "poi:";

/// Graph id of the node attached to a catalog POI
pub fn poi_node_id(poi_id: &str) -> String {
    format!("{POI_NODE_PREFIX}{poi_id}")
}

/// Directed navigation graph. Every corridor edge and POI link is stored in
/// both directions.
#[derive(Debug, Clone, Default)]
pub struct NavigationGraph {
    pub graph: DiGraph<NavNode, NavEdge>,
    node_index: HashMap<String, NodeIndex>,
    /// POI id -> corridor node id
    poi_links: HashMap<String, String>,
}

impl NavigationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, rejecting duplicate ids
    pub fn add_node(&mut self, node: NavNode) -> Result<NodeIndex, Error> {
        if self.node_index.contains_key(&node.id) {
            return Err(Error::InvalidData(format!(
                "Duplicate navigation node id: {}",
                node.id
            )));
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        Ok(idx)
    }

    /// Inserts a weighted edge in both directions
    pub fn connect(&mut self, from: &str, to: &str, weight: f64) -> Result<(), Error> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidData(format!(
                "Edge {from} -> {to} has invalid weight {weight}"
            )));
        }
        let source = self.require(from)?;
        let target = self.require(to)?;
        self.graph.add_edge(source, target, NavEdge { weight });
        self.graph.add_edge(target, source, NavEdge { weight });
        Ok(())
    }

    /// Attaches a POI node to its corridor vertex. A POI may only have one
    /// access link.
    pub fn link_poi(&mut self, poi_id: &str, node_id: &str, weight: f64) -> Result<(), Error> {
        if self.poi_links.contains_key(poi_id) {
            return Err(Error::InvalidData(format!(
                "POI {poi_id} has more than one access link"
            )));
        }
        let corridor = self.require(node_id)?;
        if self.graph[corridor].kind != NodeKind::Corridor {
            return Err(Error::InvalidData(format!(
                "POI {poi_id} links to {node_id}, which is not a corridor node"
            )));
        }

        self.connect(&poi_node_id(poi_id), node_id, weight)?;
        self.poi_links.insert(poi_id.to_string(), node_id.to_string());
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn poi_node(&self, poi_id: &str) -> Option<NodeIndex> {
        self.node(&poi_node_id(poi_id))
    }

    pub fn node_weight(&self, idx: NodeIndex) -> Option<&NavNode> {
        self.graph.node_weight(idx)
    }

    /// Outgoing edges of a node
    pub fn edges(&self, idx: NodeIndex) -> Edges<'_, NavEdge, Directed> {
        self.graph.edges(idx)
    }

    /// Corridor node a POI is attached to
    pub fn poi_attachment(&self, poi_id: &str) -> Option<&str> {
        self.poi_links.get(poi_id).map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected connections (each is stored twice)
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count() / 2
    }

    fn require(&self, id: &str) -> Result<NodeIndex, Error> {
        self.node(id)
            .ok_or_else(|| Error::InvalidData(format!("Unknown navigation node: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;
    use petgraph::visit::EdgeRef;

    use super::*;

    fn corridor(id: &str, x: f64, y: f64) -> NavNode {
        NavNode {
            id: id.to_string(),
            name: id.to_string(),
            geometry: Point::new(x, y),
            kind: NodeKind::Corridor,
        }
    }

    fn poi(id: &str, x: f64, y: f64) -> NavNode {
        NavNode {
            id: poi_node_id(id),
            name: id.to_string(),
            geometry: Point::new(x, y),
            kind: NodeKind::Poi,
        }
    }

    #[test]
    fn test_connect_inserts_both_directions() {
        let mut graph = NavigationGraph::new();
        let a = graph.add_node(corridor("a", 0.0, 0.0)).unwrap();
        let b = graph.add_node(corridor("b", 3.0, 4.0)).unwrap();
        graph.connect("a", "b", 5.0).unwrap();

        assert_eq!(graph.edges(a).map(|e| e.target()).collect::<Vec<_>>(), [b]);
        assert_eq!(graph.edges(b).map(|e| e.target()).collect::<Vec<_>>(), [a]);
        assert_eq!(graph.connection_count(), 1);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut graph = NavigationGraph::new();
        graph.add_node(corridor("a", 0.0, 0.0)).unwrap();
        assert!(graph.add_node(corridor("a", 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph = NavigationGraph::new();
        graph.add_node(corridor("a", 0.0, 0.0)).unwrap();
        graph.add_node(corridor("b", 1.0, 0.0)).unwrap();
        assert!(graph.connect("a", "b", -1.0).is_err());
        assert!(graph.connect("a", "missing", 1.0).is_err());
    }

    #[test]
    fn test_poi_link_is_unique() {
        let mut graph = NavigationGraph::new();
        graph.add_node(corridor("a", 0.0, 0.0)).unwrap();
        graph.add_node(corridor("b", 10.0, 0.0)).unwrap();
        let cafe = graph.add_node(poi("cafe", 1.0, 1.0)).unwrap();

        graph.link_poi("cafe", "a", 2.0).unwrap();
        assert!(graph.link_poi("cafe", "b", 9.0).is_err());
        assert_eq!(graph.poi_attachment("cafe"), Some("a"));
        assert_eq!(graph.poi_node("cafe"), Some(cafe));
        assert_eq!(graph.graph[cafe].poi_id(), Some("cafe"));
    }

    #[test]
    fn test_poi_cannot_link_to_poi() {
        let mut graph = NavigationGraph::new();
        graph.add_node(poi("shop", 0.0, 0.0)).unwrap();
        graph.add_node(poi("cafe", 1.0, 1.0)).unwrap();
        assert!(graph.link_poi("cafe", "poi:shop", 2.0).is_err());
    }
}
