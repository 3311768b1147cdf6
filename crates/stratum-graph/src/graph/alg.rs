//! Small graph algorithms used by the layout stages and their tests.

use super::{Graph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Returns the vertices of some directed cycle, or `None` if the graph is acyclic.
///
/// Self-loops count as cycles of length one.
pub fn find_cycle(g: &Graph) -> Option<Vec<VertexId>> {
    let mut marks = vec![Mark::Unvisited; g.len()];
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for start in g.vertices() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::InProgress;
        stack.push((start, 0));

        while let Some(&(u, next)) = stack.last() {
            let Some(&v) = g.out_neighbors(u).get(next) else {
                marks[u] = Mark::Done;
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            match marks[v] {
                Mark::InProgress => {
                    let from = stack.iter().position(|&(w, _)| w == v).unwrap_or(0);
                    return Some(stack[from..].iter().map(|&(w, _)| w).collect());
                }
                Mark::Unvisited => {
                    marks[v] = Mark::InProgress;
                    stack.push((v, 0));
                }
                Mark::Done => {}
            }
        }
    }

    None
}

pub fn is_acyclic(g: &Graph) -> bool {
    find_cycle(g).is_none()
}

/// Vertices in an order where every edge points forward, or `None` if there is a cycle.
pub fn topological_order(g: &Graph) -> Option<Vec<VertexId>> {
    let mut indegree: Vec<usize> = g.vertices().map(|u| g.in_neighbors(u).len()).collect();
    let mut queue: std::collections::VecDeque<VertexId> =
        g.vertices().filter(|&u| indegree[u] == 0).collect();
    let mut order: Vec<VertexId> = Vec::with_capacity(g.len());

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in g.out_neighbors(u) {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    (order.len() == g.len()).then_some(order)
}
