use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};
use std::mem;

use fxhash::FxHashMap;
use tracing::debug;

use crate::error::SolveError;
use crate::graph::{EdgeIndex, NodeIndex, RoadGraph};
use crate::routing::astar_heuristic::AStarHeuristic;
use crate::routing::route_path::RoutePath;
use crate::routing::shortest_path_algorithm::{ShortestPathAlgorithm, SolveResult};
use crate::routing::trace::TraceStep;
use crate::weighting::{MAX_WEIGHT, Weight, WeightPolicy};

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    node: NodeIndex,

    /// g_score is the cheapest known weight from the start to `node` at the
    /// time of the push
    g_score: Weight,

    /// f_score = g_score + h_score, with h_score being the heuristic value
    /// from `node` to the end
    f_score: Weight,

    /// Monotonic discovery counter; equal f_scores pop oldest first
    seq: u64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.f_score == other.f_score && self.seq == other.seq
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct NodeData {
    settled: bool,
    weight: Weight,
    parent: Option<NodeIndex>,
    parent_edge: Option<EdgeIndex>,
}

pub struct AStar<H: AStarHeuristic> {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<NodeIndex, NodeData>,

    /// Finalization order; doubles as the `visited` sequence in the trace.
    settled_order: Vec<NodeIndex>,
    steps: Vec<TraceStep>,

    next_seq: u64,
    heuristic: H,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar {
            heap: BinaryHeap::new(),
            data: FxHashMap::default(),
            settled_order: Vec::new(),
            steps: Vec::new(),
            next_seq: 0,
            heuristic,
        }
    }

    fn push_frontier(&mut self, node: NodeIndex, g_score: Weight, f_score: Weight) {
        self.heap.push(HeapItem {
            node,
            g_score,
            f_score,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn update_node_data(
        &mut self,
        node: NodeIndex,
        weight: Weight,
        parent: Option<NodeIndex>,
        parent_edge: Option<EdgeIndex>,
    ) {
        self.data.insert(
            node,
            NodeData {
                settled: false,
                weight,
                parent,
                parent_edge,
            },
        );
    }

    #[inline(always)]
    fn shortest_weight(&self, node: NodeIndex) -> Weight {
        self.data.get(&node).map_or(MAX_WEIGHT, |data| data.weight)
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeIndex) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    fn settle(&mut self, graph: &RoadGraph, node: NodeIndex) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
        self.settled_order.push(node);
        self.record_step(graph, node);
    }

    /// Snapshot taken before the settled node's neighbors are relaxed, so
    /// each step shows the state the node was finalized under.
    fn record_step(&mut self, graph: &RoadGraph, current: NodeIndex) {
        let visited = self
            .settled_order
            .iter()
            .map(|&node| graph.node_id(node).to_string())
            .collect();

        let mut distances = BTreeMap::new();
        let mut previous = BTreeMap::new();

        for (&node, data) in &self.data {
            distances.insert(graph.node_id(node).to_string(), data.weight);
            if let Some(parent) = data.parent {
                previous.insert(
                    graph.node_id(node).to_string(),
                    graph.node_id(parent).to_string(),
                );
            }
        }

        self.steps.push(TraceStep {
            current: graph.node_id(current).to_string(),
            visited,
            distances,
            previous,
        });
    }

    fn build_path(
        &self,
        graph: &RoadGraph,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<RoutePath, SolveError> {
        let mut nodes: Vec<String> = Vec::with_capacity(8);
        let mut total_distance = 0;
        let mut total_traffic = 0;

        let mut node = end;
        let mut hops = 0;

        while node != start {
            nodes.push(graph.node_id(node).to_string());

            let link = self
                .data
                .get(&node)
                .and_then(|data| data.parent.zip(data.parent_edge));
            let (parent, edge_id) = match link {
                Some(link) => link,
                None => {
                    return Err(SolveError::BrokenPredecessorChain(
                        graph.node_id(node).to_string(),
                    ));
                }
            };

            let edge = graph.edge(edge_id);
            total_distance += edge.distance();
            total_traffic += edge.traffic();

            node = parent;
            hops += 1;
            // A well-formed chain visits each node at most once
            if hops > graph.node_count() {
                return Err(SolveError::BrokenPredecessorChain(
                    graph.node_id(node).to_string(),
                ));
            }
        }

        nodes.push(graph.node_id(start).to_string());
        nodes.reverse();

        Ok(RoutePath::new(nodes, total_distance, total_traffic))
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &RoadGraph,
        weighting: WeightPolicy,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<SolveResult, SolveError> {
        if start == end {
            return Ok(SolveResult {
                path: RoutePath::single(graph.node_id(start).to_string()),
                steps: Vec::new(),
            });
        }

        self.update_node_data(start, 0, None, None);
        let h_score = self.heuristic.estimate(graph, start, end);
        self.push_frontier(start, 0, h_score);

        let mut reached_end = false;

        while let Some(HeapItem { node, g_score, .. }) = self.heap.pop() {
            // Stale heap entry for an already finalized node
            if self.is_settled(node) {
                continue;
            }

            if g_score > self.shortest_weight(node) {
                continue;
            }

            self.settle(graph, node);

            if node == end {
                reached_end = true;
                break;
            }

            for edge_id in graph.node_edges_iter(node) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.adj_node(node);

                if self.is_settled(adj_node) {
                    continue;
                }

                let candidate = g_score.saturating_add(weighting.calc_edge_weight(edge));

                if candidate < self.shortest_weight(adj_node) {
                    self.update_node_data(adj_node, candidate, Some(node), Some(edge_id));
                    let h_score = self.heuristic.estimate(graph, adj_node, end);
                    self.push_frontier(adj_node, candidate, candidate.saturating_add(h_score));
                }
            }
        }

        debug!(settled = self.settled_order.len(), "search finished");

        if !reached_end {
            return Err(SolveError::NoPath {
                start: graph.node_id(start).to_string(),
                end: graph.node_id(end).to_string(),
                steps: mem::take(&mut self.steps),
            });
        }

        let path = self.build_path(graph, start, end)?;

        Ok(SolveResult {
            path,
            steps: mem::take(&mut self.steps),
        })
    }
}
