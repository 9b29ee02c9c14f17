//! Navigation graph components - nodes and edges

use geo::Point;
use serde::{Deserialize, Serialize};

use super::network::POI_NODE_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Corridor,
    Poi,
}

/// Navigation graph node
#[derive(Debug, Clone)]
pub struct NavNode {
    /// Graph-wide id, POI nodes are namespaced as `poi:<poi id>`
    pub id: String,
    pub name: String,
    /// Node coordinates
    pub geometry: Point<f64>,
    pub kind: NodeKind,
}

impl NavNode {
    /// Catalog id of the POI behind this node, `None` for corridor vertices
    pub fn poi_id(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Poi => self.id.strip_prefix(POI_NODE_PREFIX),
            NodeKind::Corridor => None,
        }
    }
}

/// Navigation graph edge (one direction of a corridor or access link)
#[derive(Debug, Clone, Copy)]
pub struct NavEdge {
    /// Traversal cost, never below the Euclidean length of the segment
    pub weight: f64,
}
