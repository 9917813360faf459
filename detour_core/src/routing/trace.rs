use std::collections::BTreeMap;

use serde::Serialize;

use crate::weighting::Weight;

/// Snapshot of solver state at the moment a node is finalized. Steps are
/// append-only and never revised, so a renderer can replay the search at its
/// own pace, independent of wall-clock timing.
///
/// `distances` and `previous` hold only nodes the search has discovered;
/// ordered maps keep the serialized form identical across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub current: String,
    pub visited: Vec<String>,
    pub distances: BTreeMap<String, Weight>,
    pub previous: BTreeMap<String, String>,
}
