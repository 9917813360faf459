#[cfg(test)]
pub mod test_graph {

    use crate::graph::RoadGraph;
    use crate::position::Position;

    /// A small harbor-town sketch used across the solver tests, plus an
    /// island with no roads for the unreachable cases. Every road's distance
    /// is at least the straight line between its endpoints, so the Euclidean
    /// estimate stays admissible.
    ///
    ///   harbor(0,0) -- market(40,0) -- museum(80,0)
    ///      |             |                |      \
    ///   park(0,30) -- station(40,30) - stadium(80,30) -- airport(120,30)
    ///                                    (museum also links to airport)
    pub fn downtown_graph() -> RoadGraph {
        let mut graph = RoadGraph::with_nodes([
            "harbor", "market", "station", "park", "museum", "stadium", "airport", "island",
        ]);

        for (id, x, y) in [
            ("harbor", 0.0, 0.0),
            ("market", 40.0, 0.0),
            ("station", 40.0, 30.0),
            ("park", 0.0, 30.0),
            ("museum", 80.0, 0.0),
            ("stadium", 80.0, 30.0),
            ("airport", 120.0, 30.0),
            ("island", 200.0, 200.0),
        ] {
            graph.set_position(id, Position::new(x, y));
        }

        for (from, to, distance, traffic) in [
            ("harbor", "market", 40, 2),
            ("market", "station", 30, 5),
            ("harbor", "park", 35, 1),
            ("park", "station", 45, 1),
            ("market", "museum", 40, 8),
            ("station", "stadium", 42, 2),
            ("museum", "stadium", 30, 3),
            ("stadium", "airport", 40, 4),
            ("museum", "airport", 55, 1),
        ] {
            graph.add_edge(from, to, distance, traffic).unwrap();
        }

        graph
    }
}
