use stratum::graph::{Edge, Graph, GraphBuilder, Subgraph};
use stratum::{Limits, Ranker, Stage, normalize, rank};

fn whole(g: &mut Graph) -> Subgraph<'_> {
    let vertices: Vec<_> = g.vertices().collect();
    Subgraph::new(g, vertices)
}

#[test]
fn edge_over_three_layers_gets_two_dummies() {
    let mut g = GraphBuilder::new().add_path(&[0, 1, 2, 3]).add_edge(0, 3).build();
    let mut sub = whole(&mut g);
    let mut h = rank::run(&sub, Ranker::NetworkSimplex, &Limits::default())
        .expect("ranks")
        .hierarchy;

    let long = normalize::run(&mut sub, &mut h);

    assert_eq!(long.len(), 1);
    assert_eq!(long[0].orig, Edge::new(0, 3));
    assert_eq!(long[0].path, vec![0, 4, 5, 3]);
    assert_eq!(long[0].dummies(), &[4, 5]);
    assert_eq!(long[0].first_hop(), Edge::new(0, 4));

    assert_eq!(sub.len(), 6);
    assert!(sub.is_dummy(4) && sub.is_dummy(5));
    assert!(!sub.is_dummy(3));
    assert_eq!((h.ranking[4], h.ranking[5]), (1, 2));

    assert!(!sub.has_edge(Edge::new(0, 3)));
    assert!(sub.has_edge(Edge::new(0, 4)));
    assert!(sub.has_edge(Edge::new(4, 5)));
    assert!(sub.has_edge(Edge::new(5, 3)));

    assert!(h.check_proper(&sub).is_ok());
    assert!(h.check(&sub, Stage::Normalization).is_ok());
}

#[test]
fn proper_hierarchy_is_unchanged() {
    let mut g = GraphBuilder::new().add_path(&[0, 1, 2]).add_edge(0, 3).build();
    let mut sub = whole(&mut g);
    let mut h = rank::run(&sub, Ranker::NetworkSimplex, &Limits::default())
        .expect("ranks")
        .hierarchy;
    let before = h.clone();

    let long = normalize::run(&mut sub, &mut h);

    assert!(long.is_empty());
    assert_eq!(h, before);
    assert_eq!(sub.len(), 4);
}

#[test]
fn every_long_edge_becomes_a_unit_chain() {
    let mut g = GraphBuilder::new()
        .add_path(&[0, 1, 2, 3, 4])
        .add_edge(0, 4)
        .add_edge(1, 4)
        .add_edge(0, 2)
        .build();
    let mut sub = whole(&mut g);
    let mut h = rank::run(&sub, Ranker::LongestPath, &Limits::default())
        .expect("ranks")
        .hierarchy;

    let long = normalize::run(&mut sub, &mut h);

    // (0, 4) needs three dummies, (1, 4) two and (0, 2) one.
    assert_eq!(long.len(), 3);
    assert_eq!(long.iter().map(|l| l.dummies().len()).sum::<usize>(), 6);
    assert_eq!(sub.len(), 11);
    assert!(h.is_proper(&sub));
    assert!(h.check(&sub, Stage::Normalization).is_ok());
    for l in &long {
        for pair in l.path.windows(2) {
            assert_eq!(h.span(pair[0], pair[1]), 1);
        }
    }
}

#[test]
fn long_edge_is_reported_as_not_proper_before_normalization() {
    let mut g = GraphBuilder::new().add_path(&[0, 1, 2]).add_edge(0, 2).build();
    let sub = whole(&mut g);
    let h = rank::run(&sub, Ranker::NetworkSimplex, &Limits::default())
        .expect("ranks")
        .hierarchy;

    let err = h.check_proper(&sub).unwrap_err();
    assert!(matches!(
        err,
        stratum::Error::NotProper {
            from: 0,
            to: 2,
            span: 2
        }
    ));
}
