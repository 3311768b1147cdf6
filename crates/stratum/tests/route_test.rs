use stratum::acyclic::FeedbackSet;
use stratum::graph::{Edge, Graph, GraphBuilder, Subgraph};
use stratum::route::{check_feedback, quadrant};
use stratum::{Attributes, Error, Layout, Path, Point, layout};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn whole(g: &mut Graph) -> Subgraph<'_> {
    let vertices: Vec<_> = g.vertices().collect();
    Subgraph::new(g, vertices)
}

fn path_between(l: &Layout, from: usize, to: usize) -> &Path {
    l.paths
        .iter()
        .find(|p| p.from == from && p.to == to)
        .unwrap_or_else(|| panic!("no path from {from} to {to}"))
}

#[test]
fn quadrants_follow_the_screen_axes() {
    assert_eq!(quadrant(Point::new(1.0, 1.0)), 0);
    assert_eq!(quadrant(Point::new(1.0, -1.0)), 1);
    assert_eq!(quadrant(Point::new(-1.0, -1.0)), 2);
    assert_eq!(quadrant(Point::new(-1.0, 1.0)), 3);
    assert_eq!(quadrant(Point::new(0.0, 1.0)), 3);
    assert_eq!(quadrant(Point::new(0.0, -1.0)), 2);
}

#[test]
fn missing_feedback_edge_is_reported() {
    let mut g = GraphBuilder::new().add_edge(0, 1).build();
    let sub = whole(&mut g);

    let mut fs = FeedbackSet::default();
    fs.reversed.insert(Edge::new(0, 1));
    assert!(check_feedback(&sub, &fs).is_ok());

    fs.removed.insert(Edge::new(1, 0));
    let err = check_feedback(&sub, &fs).unwrap_err();
    assert!(matches!(err, Error::FeedbackReplay { from: 1, to: 0 }));
}

#[test]
fn every_edge_gets_one_path() {
    let g = GraphBuilder::new()
        .add_path(&[0, 1, 2, 3])
        .add_edge(0, 3)
        .add_edge(1, 3)
        .build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    let mut ends: Vec<(usize, usize)> = l.paths.iter().map(|p| (p.from, p.to)).collect();
    ends.sort_unstable();
    assert_eq!(ends, vec![(0, 1), (0, 3), (1, 2), (1, 3), (2, 3)]);
    assert!(l.paths.iter().all(|p| !p.bidirectional));
}

#[test]
fn long_edge_passes_through_its_dummy_vertices() {
    let g = GraphBuilder::new().add_path(&[0, 1, 2, 3]).add_edge(0, 3).build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    assert_eq!(l.nodes.len(), 6);
    assert_eq!(l.stats.dummy_vertices, 2);
    assert!(l.nodes[4..].iter().all(|n| n.size == 0.0));

    let path = path_between(&l, 0, 3);
    assert!(path.points.contains(&l.nodes[4].pos));
    assert!(path.points.contains(&l.nodes[5].pos));
    for pair in path.points.windows(2) {
        assert!(pair[0].y <= pair[1].y);
    }
}

#[test]
fn ports_lie_on_the_vertex_border() {
    let g = GraphBuilder::new()
        .add_edge(0, 1)
        .add_edge(0, 2)
        .add_edge(0, 3)
        .add_edge(1, 4)
        .add_edge(3, 4)
        .add_edge(0, 4)
        .size(0, 20.0)
        .build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    for p in &l.paths {
        let first = p.points[0];
        let last = p.points[p.points.len() - 1];
        let from = &l.nodes[p.from];
        let to = &l.nodes[p.to];
        assert!(close(first.distance(from.pos), from.size), "{p:?}");
        assert!(close(last.distance(to.pos), to.size), "{p:?}");
    }
}

#[test]
fn reversed_edge_keeps_its_direction() {
    let g = GraphBuilder::new().add_path(&[0, 1, 2, 0]).build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    assert_eq!(l.paths.len(), 3);
    let back = path_between(&l, 2, 0);
    assert!(!back.bidirectional);
    // Drawn from the bottom of the component back up to the top.
    assert!(back.points[0].y > back.points[back.points.len() - 1].y);
}

#[test]
fn two_cycle_becomes_one_bidirectional_path() {
    let g = GraphBuilder::new().add_edge(0, 1).add_edge(1, 0).build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    assert_eq!(l.paths.len(), 1);
    let path = &l.paths[0];
    assert!(path.bidirectional);
    assert_eq!((path.from, path.to), (0, 1));
}

#[test]
fn self_loop_is_a_square_on_the_right() {
    let g = GraphBuilder::new().add_edge(0, 0).build();
    let attrs = Attributes::default();
    let l = layout(&g, &attrs).expect("layout");

    assert_eq!(l.nodes[0].pos, Point::new(15.0, 15.0));
    assert!(close(l.width, 45.0));
    assert!(close(l.height, 30.0));

    assert_eq!(l.paths.len(), 1);
    let path = &l.paths[0];
    assert_eq!((path.from, path.to), (0, 0));
    assert_eq!(path.points.len(), 4);

    let x = 15.0 + 15.0 + attrs.loop_size / 2.0;
    assert!(close(path.points[1].x, x));
    assert!(close(path.points[2].x, x));
    assert!(path.points[0].y < 15.0 && path.points[3].y > 15.0);
    assert!(close(path.points[0].distance(l.nodes[0].pos), 15.0));
    assert!(close(path.points[3].distance(l.nodes[0].pos), 15.0));
}
