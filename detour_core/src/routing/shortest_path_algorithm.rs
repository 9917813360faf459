use crate::error::SolveError;
use crate::graph::{NodeIndex, RoadGraph};
use crate::routing::route_path::RoutePath;
use crate::routing::trace::TraceStep;
use crate::weighting::WeightPolicy;

pub struct SolveResult {
    pub path: RoutePath,
    pub steps: Vec<TraceStep>,
}

pub trait ShortestPathAlgorithm {
    fn calc_path(
        &mut self,
        graph: &RoadGraph,
        weighting: WeightPolicy,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<SolveResult, SolveError>;
}
