use thiserror::Error;

use crate::routing::trace::TraceStep;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("edge references unknown node: {0}")]
    UnknownNode(String),
    #[error("edge {from}-{to} must have positive distance and traffic")]
    ZeroWeight { from: String, to: String },
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// The search exhausted every node reachable from the start without
    /// settling the end. Carries the trace recorded up to exhaustion.
    #[error("no path exists between {start} and {end}")]
    NoPath {
        start: String,
        end: String,
        steps: Vec<TraceStep>,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Walking the predecessor chain did not lead back to the start. This
    /// indicates a defect in the search itself and is reported rather than
    /// looped on.
    #[error("predecessor chain broken at node {0}")]
    BrokenPredecessorChain(String),
}
