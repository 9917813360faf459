use fxhash::FxHashMap;
use serde::Deserialize;

use crate::position::Position;
use crate::weighting::WeightPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    Astar,
}

/// One route computation, self-contained. The engine builds everything it
/// needs from this value and retains nothing afterwards; callers re-send
/// updated traffic figures with the next request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub nodes: Vec<String>,
    pub edges: Vec<RouteEdge>,
    pub start: String,
    pub end: String,
    pub algorithm: Algorithm,
    pub weight_type: WeightPolicy,

    /// Sketch coordinates, only consulted by the A* heuristic.
    #[serde(default)]
    pub node_positions: FxHashMap<String, Position>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteEdge {
    pub from: String,
    pub to: String,
    pub distance: u64,
    pub traffic: u64,
}
