//! Pre-order depth-first traversal over a graph store.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{Error, Result};

use super::store::Graph;

/// One in-flight vertex: its adjacency slice and the next entry to examine.
#[derive(Debug)]
struct Frame<'a, V, E> {
    edges: &'a [(V, E)],
    cursor: usize,
}

/// Lazy pre-order depth-first iterator over the vertices reachable from a
/// start vertex.
///
/// Created by [`dfs`]. Yields each reachable vertex exactly once: the start
/// first, then for each adjacency entry in list order any neighbor not yet
/// visited, depth-first. The traversal keeps an explicit frame stack, so its
/// depth is bounded by graph size rather than the call stack.
#[derive(Debug)]
pub struct Dfs<'a, V, E> {
    graph: &'a Graph<V, E>,
    stack: Vec<Frame<'a, V, E>>,
    visited: HashSet<&'a V>,
    start: Option<&'a V>,
}

/// Starts a depth-first traversal from `start`.
///
/// The returned iterator borrows the graph read-only for its lifetime and
/// retains no state past drop; restart by calling `dfs` again.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `start` is not a stored vertex.
pub fn dfs<'a, V, E>(graph: &'a Graph<V, E>, start: &V) -> Result<Dfs<'a, V, E>>
where
    V: Eq + Hash,
{
    let start = graph.vertex_key(start).ok_or(Error::UnknownVertex)?;
    Ok(Dfs {
        graph,
        stack: Vec::new(),
        visited: HashSet::new(),
        start: Some(start),
    })
}

impl<'a, V, E> Iterator for Dfs<'a, V, E>
where
    V: Eq + Hash,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.visited.insert(start);
            self.stack.push(Frame {
                edges: self.graph.edges_from(start),
                cursor: 0,
            });
            return Some(start);
        }

        while let Some(frame) = self.stack.last_mut() {
            if let Some((target, _)) = frame.edges.get(frame.cursor) {
                frame.cursor += 1;
                if self.visited.contains(target) {
                    continue;
                }
                self.visited.insert(target);
                self.stack.push(Frame {
                    edges: self.graph.edges_from(target),
                    cursor: 0,
                });
                return Some(target);
            }
            self.stack.pop();
        }
        None
    }
}
