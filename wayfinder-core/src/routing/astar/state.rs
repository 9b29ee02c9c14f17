use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    /// `g + h` at push time
    pub(super) f_score: f64,
    /// Push sequence number, earlier entries win ties
    pub(super) order: u64,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by f-score, then by push order (reversed from standard Rust BinaryHeap)
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}
