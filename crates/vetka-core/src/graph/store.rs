//! Adjacency-list graph store with incremental acyclicity enforcement.
//!
//! The store owns all vertex and edge data: a vertex is a key in the
//! adjacency map, and its outgoing edges are an ordered list of
//! (neighbor, payload) pairs. Algorithms borrow the adjacency contract
//! read-only and never retain references past the call.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::cycle;

/// Whether a graph enforces acyclicity on edge insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    /// Directed acyclic graph: cycle-checked edge insertions that would
    /// create a cycle are rejected and rolled back.
    Dag,
    /// Directed or undirected graph without an acyclicity constraint.
    General,
}

/// Generic adjacency-list graph keyed by caller-supplied vertex identities.
///
/// `V` is the vertex identity type (must support equality and hashing);
/// `E` is an opaque edge payload, e.g. a weight. Vertex presence is key
/// presence in the adjacency map, so invariants I1 (unique vertices) and
/// I4 (no dangling edges) reduce to map-key discipline plus cascade removal.
///
/// Not safe for concurrent mutation; callers sharing a graph across threads
/// must impose external mutual exclusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize + Eq + Hash, E: Serialize",
    deserialize = "V: Deserialize<'de> + Eq + Hash, E: Deserialize<'de>"
))]
pub struct Graph<V, E> {
    kind: GraphKind,
    adjacency: HashMap<V, Vec<(V, E)>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash,
{
    /// Creates an empty graph of the given kind.
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with pre-allocated vertex capacity.
    #[must_use]
    pub fn with_capacity(kind: GraphKind, vertices: usize) -> Self {
        Self {
            kind,
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Returns the kind this graph was constructed with.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Inserts a new vertex with an empty adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertex`] if the identity is already stored.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(Error::DuplicateVertex);
        }
        self.adjacency.insert(vertex, Vec::new());
        Ok(())
    }

    /// Removes a vertex and, cascading, every edge referencing it in either
    /// direction. O(V+E): every other adjacency list is scanned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if the identity is not stored.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let outgoing = self
            .adjacency
            .remove(vertex)
            .ok_or(Error::UnknownVertex)?;
        let mut cascaded = outgoing.len();
        for list in self.adjacency.values_mut() {
            let before = list.len();
            list.retain(|(target, _)| target != vertex);
            cascaded += before - list.len();
        }
        tracing::trace!(cascaded_edges = cascaded, "vertex removed");
        Ok(())
    }

    /// Removes the directed edge `v1 → v2`, then best-effort removes any
    /// reverse entry `v2 → v1` so undirected-style pairs stay symmetric.
    /// The reverse entry is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either vertex is not stored, or
    /// [`Error::UnknownEdge`] if no `v1 → v2` entry existed.
    pub fn remove_edge(&mut self, v1: &V, v2: &V) -> Result<()> {
        if !self.adjacency.contains_key(v1) || !self.adjacency.contains_key(v2) {
            return Err(Error::UnknownVertex);
        }
        if !self.remove_entry(v1, v2) {
            return Err(Error::UnknownEdge);
        }
        self.remove_entry(v2, v1);
        Ok(())
    }

    /// Returns the number of stored vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed adjacency entries. An undirected
    /// logical edge inserted via [`Graph::add_edge_with_direction`] counts
    /// as 2.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if a directed edge `v1 → v2` exists. O(degree(v1));
    /// false for absent vertices, never fails.
    #[must_use]
    pub fn has_edge(&self, v1: &V, v2: &V) -> bool {
        self.adjacency
            .get(v1)
            .map_or(false, |list| list.iter().any(|(target, _)| target == v2))
    }

    /// Returns true if the vertex identity is stored.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns true if the graph holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over the stored vertex identities. Order is unspecified, but
    /// repeated calls without intervening mutation yield the same set.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Returns the (neighbor, payload) adjacency entries of a vertex, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if the identity is not stored.
    pub fn neighbors(&self, vertex: &V) -> Result<&[(V, E)]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownVertex)
    }

    /// Adjacency entries of a vertex, empty for an absent one. Internal
    /// iteration contract for the traversal and cycle algorithms, which only
    /// follow edges to vertices guaranteed present by invariant I4.
    pub(crate) fn edges_from(&self, vertex: &V) -> &[(V, E)] {
        match self.adjacency.get(vertex) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Resolves a borrowed identity to the stored key, tying the returned
    /// reference to the graph's lifetime.
    pub(crate) fn vertex_key(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }

    /// Removes the `source → destination` entry if present, reporting
    /// whether anything was removed.
    fn remove_entry(&mut self, source: &V, destination: &V) -> bool {
        if let Some(list) = self.adjacency.get_mut(source) {
            let before = list.len();
            list.retain(|(target, _)| target != destination);
            return list.len() != before;
        }
        false
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Inserts a directed edge `source → destination` carrying `payload`.
    ///
    /// The entry is appended tentatively; if `check_cycle` is true and the
    /// graph kind is [`GraphKind::Dag`], whole-graph cycle detection runs on
    /// the tentative state and on detection the entry is removed again, so a
    /// failed call leaves the graph exactly as it was. A self-loop is a
    /// 1-cycle and is rejected by this same path when checking is active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if either endpoint is absent,
    /// [`Error::DuplicateEdge`] if a `source → destination` entry already
    /// exists, or [`Error::CycleViolation`] as described above.
    pub fn add_edge(
        &mut self,
        source: &V,
        destination: &V,
        payload: E,
        check_cycle: bool,
    ) -> Result<()> {
        if !self.adjacency.contains_key(destination) {
            return Err(Error::UnknownVertex);
        }
        let list = self.adjacency.get_mut(source).ok_or(Error::UnknownVertex)?;
        if list.iter().any(|(target, _)| target == destination) {
            return Err(Error::DuplicateEdge);
        }
        list.push((destination.clone(), payload));

        if check_cycle && self.kind == GraphKind::Dag && cycle::is_cyclic(self) {
            // Roll back the tentative append; it is the last entry.
            if let Some(list) = self.adjacency.get_mut(source) {
                list.pop();
            }
            tracing::debug!("edge insertion rolled back: cycle detected");
            return Err(Error::CycleViolation);
        }
        Ok(())
    }

    /// Inserts an edge with an explicit orientation flag: directed inserts
    /// `source → destination` only, undirected inserts both directions as a
    /// pair. The pair is atomic — if the reverse insertion fails, the
    /// forward edge is rolled back and the graph is left unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from the underlying [`Graph::add_edge`]
    /// calls.
    pub fn add_edge_with_direction(
        &mut self,
        source: &V,
        destination: &V,
        payload: E,
        directed: bool,
        check_cycle: bool,
    ) -> Result<()>
    where
        E: Clone,
    {
        if directed {
            return self.add_edge(source, destination, payload, check_cycle);
        }
        self.add_edge(source, destination, payload.clone(), check_cycle)?;
        if let Err(err) = self.add_edge(destination, source, payload, check_cycle) {
            self.remove_entry(source, destination);
            tracing::debug!("undirected insertion rolled back: reverse edge rejected");
            return Err(err);
        }
        Ok(())
    }

    /// Builds a graph from (source, destination, payload) triples. Each
    /// referenced vertex is inserted at most once; every edge is inserted
    /// with cycle checking enabled.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from the constituent insertions, e.g.
    /// [`Error::DuplicateEdge`] for a repeated pair or
    /// [`Error::CycleViolation`] for a cycle-closing edge on a DAG.
    pub fn from_edges<I>(edges: I, kind: GraphKind) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, E)>,
    {
        let mut graph = Self::new(kind);
        for (source, destination, payload) in edges {
            if !graph.contains_vertex(&source) {
                graph.add_vertex(source.clone())?;
            }
            if !graph.contains_vertex(&destination) {
                graph.add_vertex(destination.clone())?;
            }
            graph.add_edge(&source, &destination, payload, true)?;
        }
        Ok(graph)
    }
}
