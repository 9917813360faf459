use serde::Serialize;

use crate::error::SolveError;
use crate::routing::shortest_path_algorithm::SolveResult;
use crate::routing::trace::TraceStep;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub path: Vec<String>,
    pub steps: Vec<TraceStep>,
    pub total_distance: u64,
    pub total_traffic: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RouteResponse {
    pub fn from_result(result: SolveResult) -> RouteResponse {
        let total_distance = result.path.total_distance();
        let total_traffic = result.path.total_traffic();

        RouteResponse {
            path: result.path.into_nodes(),
            steps: result.steps,
            total_distance,
            total_traffic,
            success: true,
            message: None,
        }
    }

    /// Failures keep the same shape. An exhausted search still hands back
    /// the trace it recorded, so the caller can animate how far it got.
    pub fn from_error(error: SolveError) -> RouteResponse {
        let message = error.to_string();
        let steps = match error {
            SolveError::NoPath { steps, .. } => steps,
            _ => Vec::new(),
        };

        RouteResponse {
            path: Vec::new(),
            steps,
            total_distance: 0,
            total_traffic: 0,
            success: false,
            message: Some(message),
        }
    }
}
