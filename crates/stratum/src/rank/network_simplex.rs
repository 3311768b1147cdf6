//! Network simplex over a tight spanning tree.
//!
//! Starting from a feasible ranking, a spanning tree of tight edges (span of one) is grown and
//! annotated with cut values. While some tree edge has a negative cut value it is exchanged for
//! the tightest non-tree edge crossing the same cut, which shortens the total edge span.

use super::tree::{TightTree, TreeEdge};
use crate::error::{Error, Result, Stage};
use crate::graph::{Subgraph, VertexId, VertexMap};
use crate::hierarchy::Hierarchy;

/// Optimizes `h.ranking` in place and returns the number of exchanges made.
///
/// `h.ranking` must be feasible (every edge points to a higher rank) and the subgraph must be
/// connected and non-empty. Ranks are not normalized.
pub(crate) fn run(g: &Subgraph<'_>, h: &mut Hierarchy, limit: usize) -> Result<usize> {
    let mut tree = init_tree(g, h)?;
    init_cut_values(g, h, &mut tree);

    let mut iterations = 0usize;
    while let Some(leaving) = find_leaving_edge(g, &tree) {
        if iterations >= limit {
            return Err(Error::IterationLimit {
                stage: Stage::Layering,
                limit,
            });
        }

        let entering = find_entering_edge(g, h, &tree, leaving)?;
        exchange(g, h, &mut tree, leaving, entering);

        let d = h.span(entering.u, entering.v);
        move_subtree(h, &tree, entering.v, -d + d.signum());

        iterations += 1;
        tracing::trace!(
            iteration = iterations,
            leaving = ?(leaving.u, leaving.v),
            entering = ?(entering.u, entering.v),
            "simplex pivot"
        );
    }

    Ok(iterations)
}

fn nth_neighbor(g: &Subgraph<'_>, u: VertexId, k: usize) -> Option<VertexId> {
    let out = g.out_neighbors(u);
    match out.get(k) {
        Some(&v) => Some(v),
        None => g.in_neighbors(u).get(k - out.len()).copied(),
    }
}

/// Adds every vertex reachable from `root` through tight edges; returns how many were added.
fn basic_tree(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    tree: &mut TightTree,
    done: &mut VertexMap<bool>,
    root: VertexId,
) -> usize {
    let mut added = 1;
    done[root] = true;
    let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];

    while let Some(top) = stack.last_mut() {
        let (u, k) = *top;
        let Some(v) = nth_neighbor(g, u, k) else {
            stack.pop();
            continue;
        };
        top.1 += 1;

        if !done[v] && h.span(u, v).abs() == 1 {
            tree.add_child(u, v);
            done[v] = true;
            added += 1;
            stack.push((v, 0));
        }
    }

    added
}

/// Builds a spanning tree of tight edges, shifting ranks of the partial tree when no tight
/// edge leaves it.
fn init_tree(g: &Subgraph<'_>, h: &mut Hierarchy) -> Result<TightTree> {
    let root = g.vertex(0);
    let mut tree = TightTree::new(g.id_bound(), root);
    let mut done: VertexMap<bool> = VertexMap::new(g.id_bound(), false);

    let mut finished = basic_tree(g, h, &mut tree, &mut done, root);

    while finished < g.len() {
        let mut best: Option<(VertexId, VertexId, i32)> = None;
        for &u in g.vertices() {
            if !done[u] {
                continue;
            }
            for v in g.neighbors(u) {
                let span = h.span(u, v);
                if !done[v] && best.is_none_or(|(_, _, s)| span.abs() < s.abs()) {
                    best = Some((u, v, span));
                }
            }
        }

        let Some((u, v, span)) = best else {
            return Err(Error::invariant(
                Stage::Layering,
                format!("tight tree spans {finished} of {} vertices", g.len()),
            ));
        };

        let shift = span - span.signum();
        for &w in g.vertices() {
            if done[w] {
                h.ranking[w] += shift;
            }
        }
        tree.add_child(u, v);
        done[v] = true;
        finished += 1;
    }

    tree.postorder(root, 0);
    Ok(tree)
}

/// Computes the cut value of the tree edge `(u, v)`, where `u` is the parent.
///
/// The out cut values of the edges below `v` must be current.
fn set_cut_value(g: &Subgraph<'_>, h: &Hierarchy, tree: &mut TightTree, u: VertexId, v: VertexId) {
    let d_uv = TightTree::dir(h, u, v);
    let e = TreeEdge { u, v, dir: d_uv };

    let mut val = 0;
    for &child in tree.children(v) {
        val += d_uv * TightTree::dir(h, v, child) * tree.node(child).out_cut_value;
    }
    for x in g.neighbors(v) {
        if tree.component(e, x) == u {
            val += TightTree::dir(h, x, v) * d_uv;
        }
    }
    tree.nodes[v].cut_value = val;

    for x in g.neighbors(u) {
        if tree.component(e, x) == v {
            val -= TightTree::dir(h, u, x) * d_uv;
        }
    }
    tree.nodes[v].out_cut_value = val;
}

fn init_cut_values(g: &Subgraph<'_>, h: &Hierarchy, tree: &mut TightTree) {
    let order = tree.preorder(tree.root);
    for &v in order.iter().rev() {
        if let Some(u) = tree.parent(v) {
            set_cut_value(g, h, tree, u, v);
        }
    }
}

fn find_leaving_edge(g: &Subgraph<'_>, tree: &TightTree) -> Option<TreeEdge> {
    for &u in g.vertices() {
        for &v in g.out_neighbors(u) {
            if tree.parent(v) == Some(u) && tree.node(v).cut_value < 0 {
                return Some(TreeEdge { u, v, dir: 1 });
            }
            if tree.parent(u) == Some(v) && tree.node(u).cut_value < 0 {
                return Some(TreeEdge { u: v, v: u, dir: -1 });
            }
        }
    }
    None
}

/// Tightest graph edge crossing the cut of `leaving` against its direction. The result is
/// oriented like a tree edge: `u` on the root side, `v` in the subtree being cut off.
fn find_entering_edge(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    tree: &TightTree,
    leaving: TreeEdge,
) -> Result<TreeEdge> {
    let dir = -leaving.dir;
    let start = if leaving.dir == 1 { leaving.v } else { leaving.u };
    let end = if start == leaving.u { leaving.v } else { leaving.u };

    let mut best: Option<(VertexId, VertexId, i32)> = None;
    for &u in g.vertices() {
        if tree.component(leaving, u) != start {
            continue;
        }
        for &v in g.out_neighbors(u) {
            let span = h.span(u, v);
            if tree.component(leaving, v) == end && best.is_none_or(|(_, _, s)| span < s) {
                best = Some((u, v, span));
            }
        }
    }

    let Some((u, v, _)) = best else {
        return Err(Error::invariant(
            Stage::Layering,
            format!(
                "no entering edge for tree edge ({}, {})",
                leaving.u, leaving.v
            ),
        ));
    };

    Ok(if dir == 1 {
        TreeEdge { u, v, dir }
    } else {
        TreeEdge { u: v, v: u, dir }
    })
}

fn exchange(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    tree: &mut TightTree,
    leaving: TreeEdge,
    entering: TreeEdge,
) {
    let ancestor = tree.common_ancestor(entering.u, entering.v);
    tree.exchange(entering, leaving);

    let first = tree.node(ancestor).min;
    tree.postorder(ancestor, first);

    fix_cut_values(g, h, tree, ancestor, leaving.u);
    fix_cut_values(g, h, tree, ancestor, leaving.v);
}

/// Recomputes cut values on the path from `u` up to `root`.
fn fix_cut_values(
    g: &Subgraph<'_>,
    h: &Hierarchy,
    tree: &mut TightTree,
    root: VertexId,
    mut u: VertexId,
) {
    while u != root {
        let Some(parent) = tree.parent(u) else {
            break;
        };
        set_cut_value(g, h, tree, parent, u);
        u = parent;
    }
}

fn move_subtree(h: &mut Hierarchy, tree: &TightTree, root: VertexId, d: i32) {
    for u in tree.preorder(root) {
        h.ranking[u] += d;
    }
}
