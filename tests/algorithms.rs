//! Algorithm tests: BFS, lowest-cost walk, Prim and the approximate tour.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weighted_digraph::engine::{
    approximate_tour, lowest_cost_walk, minimum_spanning_tree, TourParams,
};
use weighted_digraph::graph::{generate_random, shortest_path_bfs, GraphBuilder, GraphStore};
use weighted_digraph::types::{Cost, GraphError, VertexId};

/// Reference shortest-path costs for nonnegative graphs.
fn dijkstra(graph: &GraphStore, start: VertexId, n: usize) -> Vec<Option<Cost>> {
    let mut dist: Vec<Option<Cost>> = vec![None; n];
    let mut heap = BinaryHeap::new();
    dist[start] = Some(0);
    heap.push(Reverse((0, start)));
    while let Some(Reverse((d, v))) = heap.pop() {
        if dist[v].map_or(false, |best| d > best) {
            continue;
        }
        for edge in graph.outbound_edges(v) {
            let next = d + edge.cost;
            if dist[edge.to].map_or(true, |best| next < best) {
                dist[edge.to] = Some(next);
                heap.push(Reverse((next, edge.to)));
            }
        }
    }
    dist
}

/// Reference MST weight of the component containing `start` (Kruskal).
fn kruskal_component_weight(graph: &GraphStore, start: VertexId, n: usize) -> (Cost, usize) {
    fn find(parent: &mut Vec<usize>, x: usize) -> usize {
        if parent[x] != x {
            let root = find(parent, parent[x]);
            parent[x] = root;
        }
        parent[x]
    }
    let mut edges: Vec<(Cost, usize, usize)> =
        graph.edges().map(|e| (e.cost, e.from, e.to)).collect();
    edges.sort();
    let mut parent: Vec<usize> = (0..n).collect();
    let mut chosen: Vec<(Cost, usize, usize)> = Vec::new();
    for (cost, a, b) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra != rb {
            parent[ra] = rb;
            chosen.push((cost, a, b));
        }
    }
    let root = find(&mut parent, start);
    let mut total = 0;
    let mut count = 0;
    for (cost, a, _) in chosen {
        if find(&mut parent, a) == root {
            total += cost;
            count += 1;
        }
    }
    (total, count)
}

fn path_cost(graph: &GraphStore, path: &[VertexId]) -> Cost {
    path.windows(2)
        .map(|w| graph.cost_of_edge(graph.edge_id(w[0], w[1]).unwrap()).unwrap())
        .sum()
}

// ==================== BFS ====================

#[test]
fn test_bfs_fewest_edges() {
    let graph = GraphBuilder::with_vertices(5)
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .edge(2, 3, 1)
        .edge(0, 4, 100)
        .edge(4, 3, 100)
        .build()
        .unwrap();
    assert_eq!(shortest_path_bfs(&graph, 0, 3).unwrap(), vec![0, 4, 3]);
    assert_eq!(shortest_path_bfs(&graph, 0, 2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_bfs_tie_follows_insertion_order() {
    let first = GraphBuilder::with_vertices(4)
        .edge(0, 2, 1)
        .edge(0, 1, 1)
        .edge(1, 3, 1)
        .edge(2, 3, 1)
        .build()
        .unwrap();
    assert_eq!(shortest_path_bfs(&first, 0, 3).unwrap(), vec![0, 2, 3]);

    let second = GraphBuilder::with_vertices(4)
        .edge(0, 1, 1)
        .edge(0, 2, 1)
        .edge(1, 3, 1)
        .edge(2, 3, 1)
        .build()
        .unwrap();
    assert_eq!(shortest_path_bfs(&second, 0, 3).unwrap(), vec![0, 1, 3]);
}

#[test]
fn test_bfs_is_deterministic() {
    let graph = generate_random(15, 60, &mut StdRng::seed_from_u64(11)).unwrap();
    for end in 0..15 {
        let first = shortest_path_bfs(&graph, 0, end).unwrap();
        for _ in 0..3 {
            assert_eq!(shortest_path_bfs(&graph, 0, end).unwrap(), first);
        }
    }
}

#[test]
fn test_bfs_unreachable_is_empty() {
    let mut graph = GraphStore::with_declared_vertices(3);
    graph.add_edge(0, 1, 1).unwrap();
    assert!(shortest_path_bfs(&graph, 1, 0).unwrap().is_empty());
    // Vertex 2 is declared but was never created.
    assert!(!graph.contains_vertex(2));
    assert!(shortest_path_bfs(&graph, 0, 2).unwrap().is_empty());
}

#[test]
fn test_bfs_absent_vertex_in_declared_range() {
    let mut graph = GraphStore::with_declared_vertices(5);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 4, 1).unwrap();
    assert!(!graph.contains_vertex(3));

    assert_eq!(shortest_path_bfs(&graph, 3, 3).unwrap(), vec![3]);
    assert!(shortest_path_bfs(&graph, 0, 3).unwrap().is_empty());
    assert!(shortest_path_bfs(&graph, 3, 4).unwrap().is_empty());
}

#[test]
fn test_bfs_start_equals_end() {
    let graph = GraphBuilder::with_vertices(2).edge(0, 1, 1).build().unwrap();
    assert_eq!(shortest_path_bfs(&graph, 1, 1).unwrap(), vec![1]);
}

#[test]
fn test_bfs_rejects_vertex_outside_declared_range() {
    let graph = GraphBuilder::with_vertices(2).edge(0, 1, 1).build().unwrap();
    assert!(matches!(
        shortest_path_bfs(&graph, 0, 2),
        Err(GraphError::InvalidVertex(2))
    ));
    assert!(matches!(
        shortest_path_bfs(&graph, 5, 0),
        Err(GraphError::InvalidVertex(5))
    ));
}

// ==================== Lowest-cost walk ====================

#[test]
fn test_walk_prefers_cheaper_longer_path() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, 2)
        .edge(1, 2, 2)
        .edge(0, 2, 5)
        .build()
        .unwrap();
    let walk = lowest_cost_walk(&graph, 0, 2).unwrap();
    assert_eq!(walk.cost, 4);
    assert_eq!(walk.path, vec![0, 1, 2]);
    assert_eq!(walk.len(), 2);
}

#[test]
fn test_walk_with_negative_edge() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, 5)
        .edge(1, 2, -3)
        .edge(0, 2, 4)
        .build()
        .unwrap();
    let walk = lowest_cost_walk(&graph, 0, 2).unwrap();
    assert_eq!(walk.cost, 2);
    assert_eq!(walk.path, vec![0, 1, 2]);
}

#[test]
fn test_walk_start_equals_end() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, 2)
        .build()
        .unwrap();
    let walk = lowest_cost_walk(&graph, 1, 1).unwrap();
    assert_eq!(walk.cost, 0);
    assert_eq!(walk.path, vec![1]);
    assert!(walk.is_empty());
}

#[test]
fn test_walk_negative_cycle_detected_for_every_target() {
    let graph = GraphBuilder::with_vertices(4)
        .edge(0, 1, 1)
        .edge(1, 2, -2)
        .edge(2, 1, -2)
        .edge(0, 3, 5)
        .build()
        .unwrap();
    for end in 0..4 {
        assert!(matches!(
            lowest_cost_walk(&graph, 0, end),
            Err(GraphError::NegativeCycleDetected)
        ));
    }
}

#[test]
fn test_walk_negative_self_loop_detected() {
    let graph = GraphBuilder::with_vertices(1)
        .edge(0, 0, -1)
        .build()
        .unwrap();
    assert!(matches!(
        lowest_cost_walk(&graph, 0, 0),
        Err(GraphError::NegativeCycleDetected)
    ));
}

#[test]
fn test_walk_ignores_unreachable_negative_cycle() {
    let graph = GraphBuilder::with_vertices(4)
        .edge(1, 2, -1)
        .edge(2, 1, -1)
        .edge(0, 3, 2)
        .build()
        .unwrap();
    let walk = lowest_cost_walk(&graph, 0, 3).unwrap();
    assert_eq!(walk.cost, 2);
    assert_eq!(walk.path, vec![0, 3]);
}

#[test]
fn test_walk_zero_cost_cycle_is_not_negative() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, 3)
        .edge(1, 2, 1)
        .edge(2, 1, -1)
        .build()
        .unwrap();
    let walk = lowest_cost_walk(&graph, 0, 2).unwrap();
    assert_eq!(walk.cost, 4);
    assert_eq!(walk.path, vec![0, 1, 2]);
}

#[test]
fn test_walk_large_declared_count_with_few_vertices() {
    let mut graph = GraphStore::with_declared_vertices(100_000);
    graph.add_edge(0, 1, 4).unwrap();

    let walk = lowest_cost_walk(&graph, 0, 1).unwrap();
    assert_eq!(walk.cost, 4);
    assert_eq!(walk.path, vec![0, 1]);

    let walk = lowest_cost_walk(&graph, 99_999, 99_999).unwrap();
    assert_eq!(walk.path, vec![99_999]);
    assert!(matches!(
        lowest_cost_walk(&graph, 0, 99_999),
        Err(GraphError::NoPathFound { .. })
    ));
}

#[test]
fn test_walk_no_path() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, 1)
        .build()
        .unwrap();
    match lowest_cost_walk(&graph, 1, 0) {
        Err(GraphError::NoPathFound { from, to }) => assert_eq!((from, to), (1, 0)),
        other => panic!("Expected NoPathFound, got {:?}", other),
    }
}

#[test]
fn test_walk_rejects_vertex_outside_declared_range() {
    let graph = GraphBuilder::with_vertices(2).edge(0, 1, 1).build().unwrap();
    assert!(matches!(
        lowest_cost_walk(&graph, 0, 2),
        Err(GraphError::InvalidVertex(2))
    ));
}

#[test]
fn test_walk_matches_dijkstra_on_nonnegative_graphs() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(2..9);
        let edges = rng.gen_range(0..=n * 2);
        let graph = generate_random(n, edges, &mut rng).unwrap();
        for start in 0..n {
            let expected = dijkstra(&graph, start, n);
            for end in 0..n {
                match (lowest_cost_walk(&graph, start, end), expected[end]) {
                    (Ok(walk), Some(cost)) => {
                        assert_eq!(walk.cost, cost, "seed {} {}->{}", seed, start, end);
                        assert_eq!(walk.path.first(), Some(&start));
                        assert_eq!(walk.path.last(), Some(&end));
                        assert_eq!(path_cost(&graph, &walk.path), cost);
                    }
                    (Err(GraphError::NoPathFound { .. }), None) => {}
                    (other, expected) => panic!(
                        "seed {} {}->{}: got {:?}, expected {:?}",
                        seed, start, end, other, expected
                    ),
                }
            }
        }
    }
}

// ==================== Prim ====================

#[test]
fn test_prim_picks_cheapest_edges() {
    let graph = GraphBuilder::with_vertices(4)
        .edge(0, 1, 1)
        .edge(1, 2, 2)
        .edge(2, 3, 1)
        .edge(0, 3, 4)
        .edge(0, 2, 3)
        .build()
        .unwrap();
    let tree = minimum_spanning_tree(&graph, 0).unwrap();
    assert_eq!(tree.edges, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(tree.total_cost(&graph).unwrap(), 4);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_prim_follows_edges_against_direction() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(1, 0, 7)
        .edge(2, 1, 3)
        .build()
        .unwrap();
    let tree = minimum_spanning_tree(&graph, 0).unwrap();
    assert_eq!(tree.edges, vec![(0, 1), (1, 2)]);
    assert_eq!(tree.total_cost(&graph).unwrap(), 10);
}

#[test]
fn test_prim_tie_breaks_on_vertex_id() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 2, 5)
        .edge(0, 1, 5)
        .build()
        .unwrap();
    let tree = minimum_spanning_tree(&graph, 0).unwrap();
    assert_eq!(tree.edges, vec![(0, 1), (0, 2)]);
}

#[test]
fn test_prim_covers_only_start_component() {
    let graph = GraphBuilder::with_vertices(6)
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .edge(4, 5, 1)
        .build()
        .unwrap();
    let tree = minimum_spanning_tree(&graph, 0).unwrap();
    assert_eq!(tree.len(), 2);
    let covered: HashSet<usize> = tree.edges.iter().flat_map(|&(a, b)| [a, b]).collect();
    assert!(!covered.contains(&4));
    assert!(!covered.contains(&5));

    let isolated = GraphBuilder::new().vertex(3).build().unwrap();
    assert!(minimum_spanning_tree(&isolated, 3).unwrap().is_empty());
}

#[test]
fn test_prim_total_cost_overflow() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, Cost::MAX)
        .edge(1, 2, 1)
        .build()
        .unwrap();
    let tree = minimum_spanning_tree(&graph, 0).unwrap();
    assert_eq!(tree.len(), 2);
    assert!(matches!(
        tree.total_cost(&graph),
        Err(GraphError::CostOverflow)
    ));

    let fits = GraphBuilder::with_vertices(3)
        .edge(0, 1, Cost::MAX)
        .edge(1, 2, -1)
        .build()
        .unwrap();
    let tree = minimum_spanning_tree(&fits, 0).unwrap();
    assert_eq!(tree.total_cost(&fits).unwrap(), Cost::MAX - 1);
}

#[test]
fn test_prim_invalid_start() {
    let graph = GraphBuilder::with_vertices(2).edge(0, 1, 1).build().unwrap();
    assert!(matches!(
        minimum_spanning_tree(&graph, 9),
        Err(GraphError::InvalidVertex(9))
    ));
}

#[test]
fn test_prim_matches_kruskal() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(2..12);
        let mut graph = GraphStore::with_declared_vertices(n);
        for v in 0..n {
            graph.add_vertex(v).unwrap();
        }
        // One edge per unordered pair at most, so the undirected cost is unambiguous.
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.gen_bool(0.4) {
                    let cost = rng.gen_range(-10..50);
                    if rng.gen_bool(0.5) {
                        graph.add_edge(a, b, cost).unwrap();
                    } else {
                        graph.add_edge(b, a, cost).unwrap();
                    }
                }
            }
        }
        let tree = minimum_spanning_tree(&graph, 0).unwrap();
        let (expected_total, expected_edges) = kruskal_component_weight(&graph, 0, n);
        assert_eq!(tree.len(), expected_edges, "seed {}", seed);
        assert_eq!(tree.total_cost(&graph).unwrap(), expected_total, "seed {}", seed);
    }
}

// ==================== Approximate tour ====================

fn square_with_diagonals() -> GraphStore {
    GraphBuilder::with_vertices(4)
        .both_ways(0, 1, 1)
        .both_ways(1, 2, 1)
        .both_ways(2, 3, 1)
        .both_ways(3, 0, 1)
        .both_ways(0, 2, 5)
        .both_ways(1, 3, 5)
        .build()
        .unwrap()
}

#[test]
fn test_tour_follows_cheapest_edges() {
    let graph = square_with_diagonals();
    let tour = approximate_tour(&graph, TourParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(tour.vertices, vec![0, 1, 2, 3]);
    assert_eq!(tour.cost, 4);
    assert_eq!(tour.edges(), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
}

#[test]
fn test_tour_backtracks_out_of_dead_end() {
    let graph = GraphBuilder::with_vertices(4)
        .edge(0, 1, 1)
        .edge(1, 3, 1)
        .edge(3, 0, 1)
        .edge(1, 2, 5)
        .edge(2, 3, 1)
        .build()
        .unwrap();
    let tour = approximate_tour(&graph, TourParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(tour.vertices, vec![0, 1, 2, 3]);
    assert_eq!(tour.cost, 8);
}

#[test]
fn test_tour_from_other_origin() {
    let graph = square_with_diagonals();
    let tour = approximate_tour(&graph, TourParams::from_origin(2))
        .unwrap()
        .unwrap();
    assert_eq!(tour.vertices.first(), Some(&2));
    assert_eq!(tour.vertices.len(), 4);
    assert_eq!(tour.cost, 4);
}

#[test]
fn test_tour_visits_every_vertex_once_over_real_edges() {
    let mut found = 0;
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(6, 24, &mut rng).unwrap();
        if !graph.contains_vertex(0) {
            continue;
        }
        if let Some(tour) = approximate_tour(&graph, TourParams::default()).unwrap() {
            found += 1;
            let distinct: HashSet<usize> = tour.vertices.iter().copied().collect();
            assert_eq!(distinct.len(), 6);
            assert_eq!(tour.vertices[0], 0);
            let mut total = 0;
            for (from, to) in tour.edges() {
                let id = graph.edge_id(from, to).expect("tour edge exists");
                total += graph.cost_of_edge(id).unwrap();
            }
            assert_eq!(total, tour.cost);
        }
    }
    assert!(found > 0);
}

#[test]
fn test_tour_none_without_cycle() {
    let graph = GraphBuilder::with_vertices(3)
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .build()
        .unwrap();
    assert_eq!(approximate_tour(&graph, TourParams::default()).unwrap(), None);
}

#[test]
fn test_tour_repeated_runs_agree() {
    let graph = square_with_diagonals();
    let first = approximate_tour(&graph, TourParams::default()).unwrap();
    let second = approximate_tour(&graph, TourParams::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tour_invalid_origin() {
    let graph = square_with_diagonals();
    assert!(matches!(
        approximate_tour(&graph, TourParams::from_origin(10)),
        Err(GraphError::InvalidVertex(10))
    ));
}

#[test]
fn test_tour_cost_overflow() {
    let graph = GraphBuilder::with_vertices(2)
        .edge(0, 1, Cost::MAX)
        .edge(1, 0, 1)
        .build()
        .unwrap();
    assert!(matches!(
        approximate_tour(&graph, TourParams::default()),
        Err(GraphError::CostOverflow)
    ));

    let fits = GraphBuilder::with_vertices(2)
        .edge(0, 1, Cost::MAX)
        .edge(1, 0, -5)
        .build()
        .unwrap();
    let tour = approximate_tour(&fits, TourParams::default())
        .unwrap()
        .unwrap();
    assert_eq!(tour.cost, Cost::MAX - 5);
}

#[test]
fn test_tour_step_limit() {
    let graph = GraphBuilder::with_vertices(4)
        .edge(0, 1, 1)
        .edge(1, 3, 1)
        .edge(3, 0, 1)
        .edge(1, 2, 5)
        .edge(2, 3, 1)
        .build()
        .unwrap();
    assert!(matches!(
        approximate_tour(&graph, TourParams::default().step_limit(1)),
        Err(GraphError::SearchLimitReached(1))
    ));
    assert!(approximate_tour(&graph, TourParams::default().step_limit(100))
        .unwrap()
        .is_some());
}
