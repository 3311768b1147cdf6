use stratum_graph::{Edge, EdgeSet, Graph, GraphBuilder, VertexMap};

#[test]
fn add_vertex_hands_out_dense_ids_in_creation_order() {
    let mut g = Graph::new();
    assert_eq!(g.add_vertex(1.0), 0);
    assert_eq!(g.add_vertex(2.0), 1);
    assert_eq!(g.add_vertex(3.0), 2);
    assert_eq!(g.len(), 3);
    assert_eq!(g.size(1), 2.0);
    assert_eq!(g.vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn edges_are_visible_from_both_endpoints() {
    let mut g = Graph::new();
    let a = g.add_vertex(0.0);
    let b = g.add_vertex(0.0);
    let c = g.add_vertex(0.0);
    g.add_edge(a, b).add_edge(a, c).add_edge(c, b);

    assert_eq!(g.out_neighbors(a), &[b, c]);
    assert_eq!(g.in_neighbors(b), &[a, c]);
    assert_eq!(g.neighbors(c).collect::<Vec<_>>(), vec![b, a]);
    assert!(g.has_edge(a, c));
    assert!(!g.has_edge(c, a));
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn remove_edge_keeps_the_order_of_the_remaining_neighbors() {
    let mut g = GraphBuilder::new()
        .add_edge(0, 1)
        .add_edge(0, 2)
        .add_edge(0, 3)
        .build();

    g.remove_edge(0, 2);
    assert_eq!(g.out_neighbors(0), &[1, 3]);
    assert!(g.in_neighbors(2).is_empty());

    // Removing a missing edge is a no-op.
    g.remove_edge(3, 0);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn builder_fills_gaps_with_isolated_vertices() {
    let g = GraphBuilder::new()
        .add_edge(0, 2)
        .add_edge(2, 3)
        .add_edge(0, 3)
        .build();

    assert_eq!(g.len(), 4);
    assert!(g.out_neighbors(1).is_empty());
    assert!(g.in_neighbors(1).is_empty());
}

#[test]
fn builder_sets_sizes_and_paths() {
    let g = GraphBuilder::new()
        .add_path(&[0, 1, 2, 3])
        .size(1, 7.5)
        .vertex(5)
        .build();

    assert_eq!(g.len(), 6);
    assert_eq!(g.size(1), 7.5);
    assert_eq!(g.size(0), 0.0);
    assert_eq!(
        g.edges().collect::<Vec<_>>(),
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
    );
}

#[test]
fn components_follow_undirected_reachability() {
    let g = GraphBuilder::new()
        .add_edge(0, 1)
        .add_edge(2, 1)
        .add_edge(3, 4)
        .vertex(5)
        .build();

    assert_eq!(g.components(), vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn components_of_an_empty_graph_are_empty() {
    assert!(Graph::new().components().is_empty());
}

#[test]
fn components_handle_long_chains_without_recursion() {
    let mut g = Graph::new();
    let mut prev = g.add_vertex(0.0);
    for _ in 0..100_000 {
        let next = g.add_vertex(0.0);
        g.add_edge(prev, next);
        prev = next;
    }

    let components = g.components();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 100_001);
}

#[test]
fn display_lists_successors_per_vertex() {
    let g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    assert_eq!(g.to_string(), "0: [1, 2]\n1: []\n2: []\n");
}

#[test]
fn edge_set_tracks_membership() {
    let mut set = EdgeSet::new();
    assert!(set.insert(Edge::new(1, 2)));
    assert!(!set.insert(Edge::new(1, 2)));
    assert!(set.insert(Edge::new(2, 1)));

    assert!(set.contains(Edge::new(1, 2)));
    assert!(set.remove(Edge::new(1, 2)));
    assert!(!set.remove(Edge::new(1, 2)));
    assert_eq!(set.sorted(), vec![Edge::new(2, 1)]);
}

#[test]
fn edge_reversal_swaps_endpoints() {
    let e = Edge::new(3, 8);
    assert_eq!(e.reversed(), Edge::new(8, 3));
    assert_eq!(e.reversed().reversed(), e);
    assert!(Edge::new(4, 4).is_loop());
    assert_eq!(e.to_string(), "(3, 8)");
}

#[test]
fn vertex_map_grows_on_demand() {
    let mut map: VertexMap<i32> = VertexMap::covering(&[4, 1, 2], -1);
    assert_eq!(map.len(), 5);
    assert_eq!(map[4], -1);

    map.insert(7, 3, 0);
    assert_eq!(map.len(), 8);
    assert_eq!(map[7], 3);
    assert_eq!(map[6], 0);

    map.grow(2, 9);
    assert_eq!(map.len(), 8);
    assert!(map.contains(7));
    assert!(!map.contains(8));
    assert_eq!(map.get(8), None);
    assert_eq!(map.get(1), Some(&-1));
}
