//! Integration tests for the concrete scenarios and testable properties.

use shortest_paths::{
    bellman_ford, bidirectional_dijkstra, dijkstra, goldberg_radzik, johnson, negative_edge_cycle,
    resolve_by_key, BellmanFordOptions, Directed, DijkstraOptions, Graph, ShortestPathError,
    Undirected,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn undirected_path_graph() -> Graph<i32, f64, Undirected> {
    let mut g = Graph::new();
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
        g.add_edge(a, b, 1.0);
    }
    g
}

fn directed_path_graph() -> Graph<i32, f64, Directed> {
    let mut g = Graph::new();
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
        g.add_edge(a, b, 1.0);
    }
    g
}

#[test]
fn scenario_a_unit_weight_path_graph() {
    let g = undirected_path_graph();
    let w = resolve_by_key::<i32, f64>("weight");
    let out = dijkstra(
        &g,
        [0],
        |u, v, b| w(u, v, b),
        DijkstraOptions {
            want_paths: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(out.dist[&4], 4.0);
    assert_eq!(out.paths.unwrap()[&4], vec![0, 1, 2, 3, 4]);
}

#[test]
fn scenario_b_multi_source_on_path_graph() {
    let g = undirected_path_graph();
    let w = resolve_by_key::<i32, f64>("weight");
    let out = dijkstra(
        &g,
        [0, 4],
        |u, v, b| w(u, v, b),
        DijkstraOptions {
            want_paths: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(out.dist[&2], 2.0);
    let paths = out.paths.unwrap();
    assert_eq!(paths[&1], vec![0, 1]);
    assert_eq!(paths[&3], vec![4, 3]);
}

#[test]
fn scenario_c_bellman_ford_directed_path() {
    let g = directed_path_graph();
    let w = resolve_by_key::<i32, f64>("weight");
    let out = bellman_ford(
        &g,
        [0],
        |u, v, b| w(u, v, b),
        BellmanFordOptions {
            want_pred: true,
            want_paths: false,
        },
    )
    .unwrap();
    assert_eq!(out.pred[&4], vec![3]);
    assert_eq!(out.dist[&4], 4.0);
}

#[test]
fn scenario_d_negative_cycle_is_unbounded() {
    init_logging();
    let mut g: Graph<i32, f64, Directed> = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(1, 2, -7.0);
    g.add_edge(2, 3, 1.0);
    g.add_edge(3, 4, 1.0);
    g.add_edge(4, 0, 1.0);
    let w = resolve_by_key::<i32, f64>("weight");
    let out = bellman_ford(&g, [0], |u, v, b| w(u, v, b), BellmanFordOptions::default());
    assert_eq!(out.unwrap_err(), ShortestPathError::Unbounded);
}

#[test]
fn scenario_e_johnson_negative_edge_but_no_cycle() {
    let mut g: Graph<&'static str, f64, Directed> = Graph::new();
    g.add_edge("0", "3", 3.0);
    g.add_edge("0", "1", -5.0);
    g.add_edge("0", "2", 2.0);
    g.add_edge("1", "2", 4.0);
    g.add_edge("2", "3", 1.0);
    let w = resolve_by_key::<&'static str, f64>("weight");
    let all_pairs = johnson(&g, move |u, v, b| w(u, v, b)).unwrap();
    assert_eq!(all_pairs["0"]["2"], -1.0);
}

#[test]
fn scenario_f_single_node_no_edges() {
    let mut g: Graph<i32, f64, Directed> = Graph::new();
    g.add_node(42);
    let w = resolve_by_key::<i32, f64>("weight");

    let bf = bellman_ford(&g, [42], |u, v, b| w(u, v, b), BellmanFordOptions::default()).unwrap();
    assert_eq!(bf.dist[&42], 0.0);

    let gr = goldberg_radzik(&g, [42], |u, v, b| w(u, v, b)).unwrap();
    assert_eq!(gr.dist[&42], 0.0);
    assert!(gr.pred[&42].is_empty());
}

#[test]
fn scenario_g_disconnected_components() {
    let mut g: Graph<i32, f64, Directed> = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(10, 11, 1.0);
    let w = resolve_by_key::<i32, f64>("weight");
    let out = dijkstra(&g, [0], |u, v, b| w(u, v, b), DijkstraOptions::default()).unwrap();
    assert!(out.dist.contains_key(&0));
    assert!(out.dist.contains_key(&1));
    assert!(!out.dist.contains_key(&10));
    assert!(!out.dist.contains_key(&11));
}

#[test]
fn property_bidirectional_agrees_with_unidirectional_dijkstra() {
    let g = undirected_path_graph();
    let w = resolve_by_key::<i32, f64>("weight");

    let single = dijkstra(&g, [0], |u, v, b| w(u, v, b), DijkstraOptions::default()).unwrap();
    let (bi_len, bi_path) = bidirectional_dijkstra(&g, &0, &4, |u, v, b| w(u, v, b)).unwrap();

    assert_eq!(single.dist[&4], bi_len);
    assert_eq!(bi_path.first(), Some(&0));
    assert_eq!(bi_path.last(), Some(&4));
}

#[test]
fn property_johnson_reweighting_preserves_original_distance() {
    let mut g: Graph<i32, f64, Directed> = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(1, 2, -2.0);
    g.add_edge(0, 2, 10.0);
    let w = resolve_by_key::<i32, f64>("weight");
    let all_pairs = johnson(&g, move |u, v, b| w(u, v, b)).unwrap();
    assert_eq!(all_pairs[&0][&2], -1.0);
    assert_eq!(all_pairs[&0][&0], 0.0);
}

#[test]
fn property_negative_self_loop_triggers_unbounded() {
    init_logging();
    let mut g: Graph<i32, f64, Directed> = Graph::new();
    g.add_edge(0, 0, -1.0);
    g.add_edge(0, 1, 1.0);
    let w = resolve_by_key::<i32, f64>("weight");
    let bf = bellman_ford(&g, [0], |u, v, b| w(u, v, b), BellmanFordOptions::default());
    assert_eq!(bf.unwrap_err(), ShortestPathError::Unbounded);

    let mut g2: Graph<i32, f64, Directed> = Graph::new();
    g2.add_edge(0, 0, -1.0);
    let w2 = resolve_by_key::<i32, f64>("weight");
    assert!(negative_edge_cycle(&mut g2, |u, v, b| w2(u, v, b)));
}

#[test]
fn property_cutoff_prunes_unreachable_within_bound() {
    let g = undirected_path_graph();
    let w = resolve_by_key::<i32, f64>("weight");
    let out = dijkstra(
        &g,
        [0],
        |u, v, b| w(u, v, b),
        DijkstraOptions {
            cutoff: Some(2.0),
            ..Default::default()
        },
    )
    .unwrap();
    for (_, d) in out.dist.iter() {
        assert!(*d <= 2.0);
    }
    assert!(out.dist.contains_key(&2));
    assert!(!out.dist.contains_key(&3));
}

#[test]
fn property_deterministic_reruns_produce_identical_output() {
    let g = undirected_path_graph();
    let w = resolve_by_key::<i32, f64>("weight");

    let run = || {
        dijkstra(
            &g,
            [0],
            |u, v, b| w(u, v, b),
            DijkstraOptions {
                want_paths: true,
                want_pred: true,
                ..Default::default()
            },
        )
        .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.dist, second.dist);
    assert_eq!(first.paths.unwrap(), second.paths.unwrap());
}
