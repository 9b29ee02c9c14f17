mod state;

use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::algo::estimates::distance;
use crate::model::NavigationGraph;
use state::State;

/// Node sequence and accumulated edge weight of one A* search
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub nodes: Vec<NodeIndex>,
    pub cost: f64,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A* search from `start` to `goal` with the straight-line distance to the
/// goal as heuristic.
///
/// The open set is a binary heap keyed on `f = g + h`; equal keys pop in push
/// order. An unreachable goal yields an empty path with infinite cost.
pub fn astar_path(graph: &NavigationGraph, start: NodeIndex, goal: NodeIndex) -> PathResult {
    let Some(goal_point) = graph.node_weight(goal).map(|node| node.geometry) else {
        return PathResult::unreachable();
    };
    if graph.node_weight(start).is_none() {
        return PathResult::unreachable();
    }

    let heuristic = |idx: NodeIndex| {
        graph
            .node_weight(idx)
            .map_or(0.0, |node| distance(node.geometry, goal_point))
    };

    let mut g_score: HashMap<NodeIndex, f64> = HashMap::new();
    let mut came_from: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut order = 0_u64;

    g_score.insert(start, 0.0);
    heap.push(State {
        f_score: heuristic(start),
        order,
        node: start,
    });

    while let Some(State { f_score, node, .. }) = heap.pop() {
        let cost = g_score.get(&node).copied().unwrap_or(f64::INFINITY);

        if node == goal {
            return PathResult {
                nodes: reconstruct_path(&came_from, goal),
                cost,
            };
        }

        // Skip entries superseded by a cheaper push
        if f_score > cost + heuristic(node) {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let tentative = cost + edge.weight().weight;

            if tentative < g_score.get(&next).copied().unwrap_or(f64::INFINITY) {
                came_from.insert(next, node);
                g_score.insert(next, tentative);
                order += 1;
                heap.push(State {
                    f_score: tentative + heuristic(next),
                    order,
                    node: next,
                });
            }
        }
    }

    PathResult::unreachable()
}

fn reconstruct_path(came_from: &HashMap<NodeIndex, NodeIndex>, goal: NodeIndex) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::{NavNode, NodeKind};

    fn graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str, f64)]) -> NavigationGraph {
        let mut graph = NavigationGraph::new();
        for &(id, x, y) in nodes {
            graph
                .add_node(NavNode {
                    id: id.to_string(),
                    name: id.to_string(),
                    geometry: Point::new(x, y),
                    kind: NodeKind::Corridor,
                })
                .unwrap();
        }
        for &(from, to, weight) in edges {
            graph.connect(from, to, weight).unwrap();
        }
        graph
    }

    fn ids(graph: &NavigationGraph, path: &PathResult) -> Vec<String> {
        path.nodes
            .iter()
            .map(|&idx| graph.graph[idx].id.clone())
            .collect()
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        // Direct a-c is heavy, a-b-c is cheap
        let graph = graph(
            &[("a", 0.0, 0.0), ("b", 5.0, 5.0), ("c", 10.0, 0.0)],
            &[("a", "c", 40.0), ("a", "b", 8.0), ("b", "c", 8.0)],
        );
        let path = astar_path(&graph, graph.node("a").unwrap(), graph.node("c").unwrap());
        assert_eq!(ids(&graph, &path), ["a", "b", "c"]);
        assert!((path.cost - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_is_goal() {
        let graph = graph(&[("a", 0.0, 0.0)], &[]);
        let a = graph.node("a").unwrap();
        let path = astar_path(&graph, a, a);
        assert_eq!(path.nodes, [a]);
        assert!(path.cost.abs() < f64::EPSILON);
    }

    #[test]
    fn test_unreachable_goal() {
        let graph = graph(&[("a", 0.0, 0.0), ("b", 1.0, 0.0)], &[]);
        let path = astar_path(&graph, graph.node("a").unwrap(), graph.node("b").unwrap());
        assert!(path.is_unreachable());
        assert!(path.cost.is_infinite());
    }

    #[test]
    fn test_heap_pops_lowest_f_first_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (order, f_score) in [(0, 5.0), (1, 2.0), (2, 2.0), (3, 9.0)] {
            heap.push(State {
                f_score,
                order,
                node: NodeIndex::new(0),
            });
        }
        let popped: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|s| s.order)).collect();
        assert_eq!(popped, [1, 2, 0, 3]);
    }
}
