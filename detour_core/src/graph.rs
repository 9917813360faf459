use fxhash::FxHashMap;

use crate::error::GraphError;
use crate::position::Position;

pub type NodeIndex = usize;
pub type EdgeIndex = usize;

/// An undirected road segment between two intersections.
pub struct RoadEdge {
    start_node: NodeIndex,
    end_node: NodeIndex,
    distance: u64,
    traffic: u64,
}

impl RoadEdge {
    pub fn start_node(&self) -> NodeIndex {
        self.start_node
    }

    pub fn end_node(&self) -> NodeIndex {
        self.end_node
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn traffic(&self) -> u64 {
        self.traffic
    }

    /// The endpoint opposite to `node`.
    pub fn adj_node(&self, node: NodeIndex) -> NodeIndex {
        if node == self.start_node {
            self.end_node
        } else {
            self.start_node
        }
    }
}

/// The validated graph a route request is solved against. Nodes are the
/// caller's string ids mapped onto dense indices in first-occurrence order;
/// edges are stored once and reachable from both endpoints.
///
/// Built fresh per request and immutable once the solver runs.
pub struct RoadGraph {
    node_ids: Vec<String>,
    index_by_id: FxHashMap<String, NodeIndex>,
    positions: Vec<Option<Position>>,
    edges: Vec<RoadEdge>,
    adjacency_list: Vec<Vec<EdgeIndex>>,
    edge_by_pair: FxHashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl RoadGraph {
    pub fn with_nodes<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut graph = RoadGraph {
            node_ids: Vec::new(),
            index_by_id: FxHashMap::default(),
            positions: Vec::new(),
            edges: Vec::new(),
            adjacency_list: Vec::new(),
            edge_by_pair: FxHashMap::default(),
        };

        for id in ids {
            graph.add_node(id);
        }

        graph
    }

    /// Duplicate ids collapse onto the first occurrence.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.index_by_id.get(id) {
            return index;
        }

        let index = self.node_ids.len();
        self.node_ids.push(id.to_string());
        self.index_by_id.insert(id.to_string(), index);
        self.positions.push(None);
        self.adjacency_list.push(Vec::new());
        index
    }

    /// Positions for ids outside the node set are ignored; callers may send
    /// stale coordinates for deleted intersections.
    pub fn set_position(&mut self, id: &str, position: Position) {
        if let Some(&index) = self.index_by_id.get(id) {
            self.positions[index] = Some(position);
        }
    }

    /// Declaring the same unordered pair again overwrites the stored
    /// distance and traffic, so the last declaration wins deterministically.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        distance: u64,
        traffic: u64,
    ) -> Result<(), GraphError> {
        let start_node = self
            .index_by_id
            .get(from)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(from.to_string()))?;
        let end_node = self
            .index_by_id
            .get(to)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(to.to_string()))?;

        if distance == 0 || traffic == 0 {
            return Err(GraphError::ZeroWeight {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let pair = (start_node.min(end_node), start_node.max(end_node));

        if let Some(&edge_id) = self.edge_by_pair.get(&pair) {
            let edge = &mut self.edges[edge_id];
            edge.distance = distance;
            edge.traffic = traffic;
            return Ok(());
        }

        let edge_id = self.edges.len();
        self.edges.push(RoadEdge {
            start_node,
            end_node,
            distance,
            traffic,
        });
        self.edge_by_pair.insert(pair, edge_id);
        self.adjacency_list[start_node].push(edge_id);
        if start_node != end_node {
            self.adjacency_list[end_node].push(edge_id);
        }

        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_id(&self, node: NodeIndex) -> &str {
        &self.node_ids[node]
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index_by_id.get(id).copied()
    }

    pub fn node_position(&self, node: NodeIndex) -> Option<&Position> {
        self.positions[node].as_ref()
    }

    pub fn node_edges_iter(&self, node: NodeIndex) -> std::iter::Copied<std::slice::Iter<'_, EdgeIndex>> {
        self.adjacency_list[node].iter().copied()
    }

    pub fn edge(&self, edge: EdgeIndex) -> &RoadEdge {
        &self.edges[edge]
    }
}
