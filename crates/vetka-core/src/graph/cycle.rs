//! Directed cycle detection over a graph store.

use std::collections::HashSet;
use std::hash::Hash;

use super::store::Graph;

/// One in-flight vertex of the detection walk.
struct Frame<'a, V, E> {
    vertex: &'a V,
    edges: &'a [(V, E)],
    cursor: usize,
}

/// Returns true if the graph, taken as a directed graph, contains at least
/// one cycle reachable via any vertex.
///
/// Classic three-color depth-first search collapsed to two sets: `visited`
/// (exploration ever started) and `on_path` (currently on the active
/// exploration path). An edge to an `on_path` vertex is a back-edge and
/// short-circuits with true; a visited vertex off the path is cross/forward
/// and is not re-explored. A vertex leaves `on_path` when its exploration
/// completes but stays `visited`. Every edge is examined at most once per
/// invocation: O(V+E) time, O(V) auxiliary space, explicit stack so depth is
/// independent of the call stack. The result does not depend on vertex
/// iteration order.
#[must_use]
pub fn is_cyclic<V, E>(graph: &Graph<V, E>) -> bool
where
    V: Eq + Hash,
{
    let mut visited: HashSet<&V> = HashSet::new();
    let mut on_path: HashSet<&V> = HashSet::new();
    let mut stack: Vec<Frame<'_, V, E>> = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        visited.insert(root);
        on_path.insert(root);
        stack.push(Frame {
            vertex: root,
            edges: graph.edges_from(root),
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if let Some((target, _)) = frame.edges.get(frame.cursor) {
                frame.cursor += 1;
                if on_path.contains(target) {
                    return true;
                }
                if !visited.contains(target) {
                    visited.insert(target);
                    on_path.insert(target);
                    stack.push(Frame {
                        vertex: target,
                        edges: graph.edges_from(target),
                        cursor: 0,
                    });
                }
            } else {
                on_path.remove(frame.vertex);
                stack.pop();
            }
        }
    }
    false
}
