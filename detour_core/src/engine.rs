use tracing::debug;

use crate::error::SolveError;
use crate::graph::RoadGraph;
use crate::routing::astar::AStar;
use crate::routing::astar_heuristic::EuclideanHeuristic;
use crate::routing::dijkstra::Dijkstra;
use crate::routing::route_request::{Algorithm, RouteRequest};
use crate::routing::route_response::RouteResponse;
use crate::routing::shortest_path_algorithm::{ShortestPathAlgorithm, SolveResult};

/// Runs one route computation from caller input to wire response. Total:
/// every failure mode comes back as a structured `success = false` response
/// rather than an error, and nothing is retained between calls.
pub fn calculate_route(request: &RouteRequest) -> RouteResponse {
    match solve(request) {
        Ok(result) => RouteResponse::from_result(result),
        Err(error) => {
            debug!(%error, "route request failed");
            RouteResponse::from_error(error)
        }
    }
}

fn solve(request: &RouteRequest) -> Result<SolveResult, SolveError> {
    let graph = build_graph(request)?;

    let start = graph
        .node_index(&request.start)
        .ok_or_else(|| SolveError::NodeNotFound(request.start.clone()))?;
    let end = graph
        .node_index(&request.end)
        .ok_or_else(|| SolveError::NodeNotFound(request.end.clone()))?;

    match request.algorithm {
        Algorithm::Dijkstra => Dijkstra::new().calc_path(&graph, request.weight_type, start, end),
        Algorithm::Astar => AStar::with_heuristic(EuclideanHeuristic::new(request.weight_type))
            .calc_path(&graph, request.weight_type, start, end),
    }
}

fn build_graph(request: &RouteRequest) -> Result<RoadGraph, SolveError> {
    let mut graph = RoadGraph::with_nodes(request.nodes.iter().map(String::as_str));

    for edge in &request.edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance, edge.traffic)?;
    }

    for (id, position) in &request.node_positions {
        graph.set_position(id, *position);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::Rng;
    use serde_json::json;

    use super::*;
    use crate::weighting::WeightPolicy;

    fn triangle_request(algorithm: &str, weight_type: &str) -> RouteRequest {
        serde_json::from_value(json!({
            "nodes": ["A", "B", "C"],
            "edges": [
                {"from": "A", "to": "B", "distance": 4, "traffic": 1},
                {"from": "B", "to": "C", "distance": 4, "traffic": 1},
                {"from": "A", "to": "C", "distance": 10, "traffic": 1}
            ],
            "start": "A",
            "end": "C",
            "algorithm": algorithm,
            "weightType": weight_type,
            "nodePositions": {
                "A": {"x": 0.0, "y": 0.0},
                "B": {"x": 4.0, "y": 0.0},
                "C": {"x": 8.0, "y": 0.0}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_triangle_by_distance() {
        let response = calculate_route(&triangle_request("dijkstra", "distance"));

        assert!(response.success);
        assert_eq!(response.message, None);
        assert_eq!(response.path, ["A", "B", "C"]);
        assert_eq!(response.total_distance, 8);
        assert_eq!(response.total_traffic, 2);
        assert_eq!(response.steps.last().unwrap().current, "C");
    }

    #[test]
    fn test_triangle_combined_tie_keeps_first_discovered_route() {
        // Both routes cost 12 under distance + 2 * traffic. The direct road
        // is discovered while expanding A, before the detour through B can
        // offer an equal candidate, and an equal candidate never replaces
        // the incumbent.
        for algorithm in ["dijkstra", "astar"] {
            let response = calculate_route(&triangle_request(algorithm, "combined"));

            assert!(response.success);
            assert_eq!(response.path, ["A", "C"], "algorithm {algorithm}");
            assert_eq!(response.total_distance, 10);
            assert_eq!(response.total_traffic, 1);
        }
    }

    #[test]
    fn test_start_equals_end() {
        let mut request = triangle_request("dijkstra", "distance");
        request.end = "A".to_string();

        let response = calculate_route(&request);

        assert!(response.success);
        assert_eq!(response.path, ["A"]);
        assert_eq!(response.total_distance, 0);
        assert_eq!(response.total_traffic, 0);
        assert!(response.steps.is_empty());
    }

    #[test]
    fn test_unknown_endpoints() {
        for (start, end) in [("Z", "C"), ("A", "Z")] {
            let mut request = triangle_request("dijkstra", "distance");
            request.start = start.to_string();
            request.end = end.to_string();

            let response = calculate_route(&request);

            assert!(!response.success);
            assert!(response.message.as_ref().unwrap().contains("node not found"));
            assert!(response.path.is_empty());
            assert!(response.steps.is_empty());
        }
    }

    #[test]
    fn test_edge_with_unknown_node_is_rejected() {
        let mut request = triangle_request("dijkstra", "distance");
        request.edges[0].to = "Q".to_string();

        let response = calculate_route(&request);

        assert!(!response.success);
        assert!(response.message.as_ref().unwrap().contains("unknown node"));
        assert!(response.steps.is_empty());
    }

    #[test]
    fn test_zero_weight_edge_is_rejected() {
        let mut request = triangle_request("dijkstra", "distance");
        request.edges[1].traffic = 0;

        let response = calculate_route(&request);

        assert!(!response.success);
        assert!(response.message.as_ref().unwrap().contains("positive"));
    }

    #[test]
    fn test_disconnected_graph_reports_no_path_with_trace() {
        let request: RouteRequest = serde_json::from_value(json!({
            "nodes": ["A", "B", "C", "D"],
            "edges": [
                {"from": "A", "to": "B", "distance": 4, "traffic": 1},
                {"from": "C", "to": "D", "distance": 4, "traffic": 1}
            ],
            "start": "A",
            "end": "D",
            "algorithm": "dijkstra",
            "weightType": "distance"
        }))
        .unwrap();

        let response = calculate_route(&request);

        assert!(!response.success);
        assert!(response.message.as_ref().unwrap().contains("no path exists"));
        assert!(response.path.is_empty());
        assert_eq!(response.total_distance, 0);
        assert_eq!(response.total_traffic, 0);

        let expanded: Vec<&str> = response
            .steps
            .iter()
            .map(|step| step.current.as_str())
            .collect();
        assert_eq!(expanded, ["A", "B"]);
    }

    #[test]
    fn test_identical_requests_produce_identical_bytes() {
        for algorithm in ["dijkstra", "astar"] {
            let request = triangle_request(algorithm, "combined");

            let first = serde_json::to_string(&calculate_route(&request)).unwrap();
            let second = serde_json::to_string(&calculate_route(&request)).unwrap();

            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_response_wire_shape() {
        let response = calculate_route(&triangle_request("dijkstra", "distance"));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["totalDistance"], 8);
        assert_eq!(value["totalTraffic"], 2);
        assert_eq!(value["success"], true);
        assert_eq!(value["steps"][0]["current"], "A");
        assert_eq!(value["steps"][0]["visited"], json!(["A"]));
        assert!(value.get("message").is_none());
    }

    fn policy_cost(policy: WeightPolicy, distance: u64, traffic: u64) -> u64 {
        match policy {
            WeightPolicy::Distance => distance,
            WeightPolicy::Traffic => traffic,
            WeightPolicy::Combined => distance + 2 * traffic,
        }
    }

    /// Exhaustive minimum over every simple path, as an independent oracle.
    fn brute_force_min_cost(
        node_count: usize,
        edges: &[(usize, usize, u64, u64)],
        policy: WeightPolicy,
        start: usize,
        end: usize,
    ) -> Option<u64> {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(a, b, distance, traffic) in edges {
            let cost = policy_cost(policy, distance, traffic);
            adjacency[a].push((b, cost));
            adjacency[b].push((a, cost));
        }

        fn dfs(
            adjacency: &[Vec<(usize, u64)>],
            visited: &mut [bool],
            node: usize,
            end: usize,
            cost: u64,
            best: &mut Option<u64>,
        ) {
            if node == end {
                *best = Some(best.map_or(cost, |current| current.min(cost)));
                return;
            }
            visited[node] = true;
            for &(next, weight) in &adjacency[node] {
                if !visited[next] {
                    dfs(adjacency, visited, next, end, cost + weight, best);
                }
            }
            visited[node] = false;
        }

        let mut best = None;
        let mut visited = vec![false; node_count];
        dfs(&adjacency, &mut visited, start, end, 0, &mut best);
        best
    }

    fn returned_path_cost(
        path: &[String],
        edges: &[(usize, usize, u64, u64)],
        policy: WeightPolicy,
    ) -> u64 {
        let index = |id: &str| id[1..].parse::<usize>().unwrap();

        path.windows(2)
            .map(|pair| {
                let (a, b) = (index(&pair[0]), index(&pair[1]));
                let edge = edges
                    .iter()
                    .find(|&&(from, to, ..)| (from, to) == (a, b) || (from, to) == (b, a))
                    .expect("route uses an undeclared road");
                policy_cost(policy, edge.2, edge.3)
            })
            .sum()
    }

    #[test]
    fn test_dijkstra_is_optimal_on_small_random_sketches() {
        let mut rng = StdRng::seed_from_u64(1942);

        for _ in 0..40 {
            let node_count = rng.random_range(2..=7);
            let mut edges = Vec::new();
            for a in 0..node_count {
                for b in (a + 1)..node_count {
                    if rng.random_bool(0.55) {
                        edges.push((a, b, rng.random_range(1..=9), rng.random_range(1..=9)));
                    }
                }
            }

            let ids: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();
            let edge_values: Vec<serde_json::Value> = edges
                .iter()
                .map(|&(a, b, distance, traffic)| {
                    json!({
                        "from": format!("n{a}"),
                        "to": format!("n{b}"),
                        "distance": distance,
                        "traffic": traffic
                    })
                })
                .collect();

            for (policy, weight_type) in [
                (WeightPolicy::Distance, "distance"),
                (WeightPolicy::Traffic, "traffic"),
                (WeightPolicy::Combined, "combined"),
            ] {
                let request: RouteRequest = serde_json::from_value(json!({
                    "nodes": ids.clone(),
                    "edges": edge_values.clone(),
                    "start": "n0",
                    "end": format!("n{}", node_count - 1),
                    "algorithm": "dijkstra",
                    "weightType": weight_type
                }))
                .unwrap();

                let response = calculate_route(&request);
                let expected = brute_force_min_cost(node_count, &edges, policy, 0, node_count - 1);

                match expected {
                    Some(best) => {
                        assert!(response.success);
                        // the route is simple and only uses declared roads
                        let mut seen = std::collections::HashSet::new();
                        assert!(response.path.iter().all(|node| seen.insert(node)));
                        assert_eq!(returned_path_cost(&response.path, &edges, policy), best);

                        // an uninformed astar (no coordinates supplied)
                        // degrades to the same search
                        let mut astar_request = request.clone();
                        astar_request.algorithm = Algorithm::Astar;
                        let astar_response = calculate_route(&astar_request);
                        assert_eq!(astar_response.path, response.path);
                        assert_eq!(astar_response.total_distance, response.total_distance);
                    }
                    None => {
                        assert!(!response.success);
                        assert!(response.message.as_ref().unwrap().contains("no path exists"));
                    }
                }
            }
        }
    }
}
