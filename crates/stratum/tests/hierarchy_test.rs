use stratum::graph::{Graph, GraphBuilder, Subgraph};
use stratum::{Error, Hierarchy, Limits, Ranker, Stage, rank};

fn whole(g: &mut Graph) -> Subgraph<'_> {
    let vertices: Vec<_> = g.vertices().collect();
    Subgraph::new(g, vertices)
}

fn ranked(sub: &Subgraph<'_>) -> Hierarchy {
    rank::run(sub, Ranker::NetworkSimplex, &Limits::default())
        .expect("ranks")
        .hierarchy
}

#[test]
fn consistent_hierarchy_passes_the_check() {
    let mut g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let sub = whole(&mut g);
    let h = ranked(&sub);

    assert_eq!(h.layers, vec![vec![0], vec![1, 2]]);
    assert!(h.check(&sub, Stage::Layering).is_ok());
    assert!(h.is_proper(&sub));
    assert_eq!(h.next(1), Some(2));
    assert_eq!(h.prev(1), None);
    assert_eq!(h.to_string(), "0 \n1 2 \n");
}

#[test]
fn stale_position_is_a_layer_mismatch() {
    let mut g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let sub = whole(&mut g);
    let mut h = ranked(&sub);

    h.pos[2] = 0;

    let err = h.check(&sub, Stage::Ordering).unwrap_err();
    assert!(matches!(
        err,
        Error::LayerMismatch {
            stage: Stage::Ordering,
            vertex: 2
        }
    ));
}

#[test]
fn negative_rank_is_a_layer_mismatch() {
    let mut g = GraphBuilder::new().add_edge(0, 1).build();
    let sub = whole(&mut g);
    let mut h = ranked(&sub);

    h.ranking[1] = -1;

    let err = h.check(&sub, Stage::Layering).unwrap_err();
    assert!(matches!(
        err,
        Error::LayerMismatch {
            stage: Stage::Layering,
            vertex: 1
        }
    ));
}

#[test]
fn vertex_missing_from_its_layer_is_reported() {
    let mut g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let sub = whole(&mut g);
    let mut h = ranked(&sub);

    h.layers[1].pop();

    let err = h.check(&sub, Stage::Normalization).unwrap_err();
    assert!(matches!(
        err,
        Error::LayerMismatch {
            stage: Stage::Normalization,
            vertex: 2
        }
    ));
}

#[test]
fn swap_keeps_layers_and_positions_in_sync() {
    let mut g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let sub = whole(&mut g);
    let mut h = ranked(&sub);

    h.swap(1, 2);

    assert_eq!(h.layers[1], vec![2, 1]);
    assert_eq!((h.pos[1], h.pos[2]), (1, 0));
    assert!(h.check(&sub, Stage::Ordering).is_ok());
}
