use stratum::graph::{Graph, GraphBuilder, Subgraph, VertexMap};
use stratum::{
    Attributes, BoundingBox, Hierarchy, Limits, Node, OrderingOptions, Point, Positioning,
    Ranker, acyclic, layout, normalize, order, position, rank,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn prepare(g: &mut Graph) -> (Subgraph<'_>, Hierarchy, Vec<Node>, VertexMap<BoundingBox>) {
    let vertices: Vec<_> = g.vertices().collect();
    let mut sub = Subgraph::new(g, vertices);
    acyclic::run(&mut sub);
    let mut h = rank::run(&sub, Ranker::NetworkSimplex, &Limits::default())
        .expect("ranks")
        .hierarchy;
    normalize::run(&mut sub, &mut h);
    order::run(&sub, &mut h, &OrderingOptions::default(), &Limits::default()).expect("orders");

    let mut nodes = Vec::new();
    let mut boxes = Vec::new();
    for u in 0..sub.id_bound() {
        let size = if sub.is_dummy(u) { 0.0 } else { 15.0 };
        nodes.push(Node {
            id: u,
            pos: Point::default(),
            size,
        });
        boxes.push(if sub.is_dummy(u) {
            BoundingBox::default()
        } else {
            BoundingBox::around(size)
        });
    }
    (sub, h, nodes, VertexMap::from(boxes))
}

#[test]
fn chain_is_drawn_as_a_vertical_line() {
    let g = GraphBuilder::new().add_path(&[0, 1, 2]).build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    let pos: Vec<Point> = l.nodes.iter().map(|n| n.pos).collect();
    assert_eq!(
        pos,
        vec![
            Point::new(15.0, 15.0),
            Point::new(15.0, 75.0),
            Point::new(15.0, 135.0)
        ]
    );
    assert_eq!(l.dimensions(), Point::new(30.0, 150.0));
}

#[test]
fn parent_is_centered_over_two_children() {
    let g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let l = layout(&g, &Attributes::default()).expect("layout");

    assert!(close(l.nodes[0].pos.x, 35.0));
    assert!(close(l.nodes[1].pos.x, 15.0));
    assert!(close(l.nodes[2].pos.x, 55.0));
    assert!(close(l.nodes[0].pos.y, 15.0));
    assert!(close(l.nodes[1].pos.y, 75.0));
    assert!(close(l.nodes[2].pos.y, 75.0));
    assert!(close(l.width, 70.0));
    assert!(close(l.height, 90.0));
}

#[test]
fn layers_are_spaced_by_the_largest_radius() {
    let g = GraphBuilder::new()
        .add_edge(0, 1)
        .add_edge(0, 2)
        .size(0, 10.0)
        .size(1, 40.0)
        .size(2, 5.0)
        .build();
    let attrs = Attributes::default();
    let l = layout(&g, &attrs).expect("layout");

    assert!(close(l.nodes[0].pos.y, 10.0));
    // 10 + 10 + layer_dist + 40
    assert!(close(l.nodes[1].pos.y, 90.0));
    assert!(close(l.nodes[2].pos.y, 90.0));
    assert!(close(l.height, 130.0));
}

#[test]
fn positioning_twice_gives_the_same_result() {
    let mut g = GraphBuilder::new()
        .add_path(&[0, 1, 2, 3])
        .add_path(&[0, 4, 3])
        .add_path(&[1, 5, 6])
        .add_edge(0, 6)
        .build();
    let (sub, h, mut nodes, boxes) = prepare(&mut g);
    let attrs = Attributes::default();

    let first = position::run(&sub, &h, &mut nodes, &boxes, &attrs, Point::default());
    let snapshot = nodes.clone();
    let second = position::run(&sub, &h, &mut nodes, &boxes, &attrs, Point::default());

    assert_eq!(first, second);
    assert_eq!(snapshot, nodes);
}

#[test]
fn vertices_keep_their_layer_order() {
    let mut g = GraphBuilder::new()
        .add_edge(0, 1)
        .add_edge(0, 2)
        .add_edge(0, 3)
        .add_edge(1, 4)
        .add_edge(3, 4)
        .build();
    let (sub, h, mut nodes, boxes) = prepare(&mut g);
    assert_eq!(h.len(), 3);

    let dims = position::run(&sub, &h, &mut nodes, &boxes, &Attributes::default(), Point::default());

    for layer in &h.layers {
        for pair in layer.windows(2) {
            assert!(nodes[pair[0]].pos.x < nodes[pair[1]].pos.x);
        }
        let y = nodes[layer[0]].pos.y;
        assert!(layer.iter().all(|&u| nodes[u].pos.y == y));
    }
    for &u in sub.vertices() {
        assert!(nodes[u].pos.x - boxes[u].left() >= -1e-9);
        assert!(nodes[u].pos.x + boxes[u].right() <= dims.x + 1e-9);
    }
}

#[test]
fn origin_offsets_the_component() {
    let mut g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let (sub, h, mut nodes, boxes) = prepare(&mut g);
    let attrs = Attributes::default();

    position::run(&sub, &h, &mut nodes, &boxes, &attrs, Point::default());
    let at_zero = nodes.clone();
    position::run(&sub, &h, &mut nodes, &boxes, &attrs, Point::new(100.0, 0.0));

    for (a, b) in at_zero.iter().zip(&nodes) {
        assert!(close(b.pos.x - a.pos.x, 100.0));
        assert!(close(b.pos.y, a.pos.y));
    }
}

#[test]
fn naive_positioning_packs_layers_from_the_left() {
    let g = GraphBuilder::new().add_edge(0, 1).add_edge(0, 2).build();
    let attrs = Attributes {
        positioning: Positioning::Naive,
        ..Attributes::default()
    };
    let l = layout(&g, &attrs).expect("layout");

    assert_eq!(l.nodes[0].pos, Point::new(15.0, 15.0));
    assert_eq!(l.nodes[1].pos, Point::new(15.0, 75.0));
    assert_eq!(l.nodes[2].pos, Point::new(55.0, 75.0));
    assert!(close(l.width, 70.0));
}
