use super::astar::AStar;
use super::astar_heuristic::AStarHeuristic;
use crate::graph::{NodeIndex, RoadGraph};
use crate::weighting::Weight;

pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _graph: &RoadGraph, _node: NodeIndex, _end: NodeIndex) -> Weight {
        0
    }
}

pub struct Dijkstra;

/// Dijkstra is simply the frontier search with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<ZeroHeuristic> {
        AStar::with_heuristic(ZeroHeuristic)
    }
}
