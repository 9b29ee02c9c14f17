//! Walkable corridor network with POI access links

pub mod components;
pub mod network;

pub use components::{NavEdge, NavNode, NodeKind};
pub use network::{NavigationGraph, POI_NODE_PREFIX, poi_node_id};
