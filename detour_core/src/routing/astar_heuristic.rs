use crate::graph::{NodeIndex, RoadGraph};
use crate::weighting::{Weight, WeightPolicy};

pub trait AStarHeuristic {
    fn estimate(&self, graph: &RoadGraph, node: NodeIndex, end: NodeIndex) -> Weight;
}

/// Straight-line lower bound on the remaining cost, floored onto the integer
/// weight scale. Traffic has no spatial lower bound, so the traffic policy
/// estimates zero; so does any node without a caller-supplied position. Both
/// degradations keep the estimate admissible.
pub struct EuclideanHeuristic {
    policy: WeightPolicy,
}

impl EuclideanHeuristic {
    pub fn new(policy: WeightPolicy) -> Self {
        EuclideanHeuristic { policy }
    }
}

impl AStarHeuristic for EuclideanHeuristic {
    fn estimate(&self, graph: &RoadGraph, node: NodeIndex, end: NodeIndex) -> Weight {
        if self.policy == WeightPolicy::Traffic {
            return 0;
        }

        match (graph.node_position(node), graph.node_position(end)) {
            (Some(from), Some(to)) => from.euclidean_distance(to).floor() as Weight,
            _ => 0,
        }
    }
}
