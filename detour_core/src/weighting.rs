use serde::Deserialize;

use crate::graph::RoadEdge;

pub type Weight = u64;

pub(crate) const MAX_WEIGHT: Weight = u64::MAX;

/// How an edge's raw attributes map onto a traversal cost. Distance and
/// traffic are positive, so costs are never negative under any policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPolicy {
    Distance,
    Traffic,
    Combined,
}

impl WeightPolicy {
    pub fn calc_edge_weight(self, edge: &RoadEdge) -> Weight {
        match self {
            WeightPolicy::Distance => edge.distance(),
            WeightPolicy::Traffic => edge.traffic(),
            WeightPolicy::Combined => edge.distance() + 2 * edge.traffic(),
        }
    }
}
