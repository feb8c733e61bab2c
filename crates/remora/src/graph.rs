//! Insertion-ordered adjacency-list digraph with unweighted shortest-path queries.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

type VertexMap<V> = IndexMap<V, Vec<V>, FxBuildHasher>;

/// A directed, unweighted graph keyed by an arbitrary hashable vertex value.
///
/// Vertices iterate in registration order and each vertex keeps its outgoing
/// neighbors in first-insertion order, so traversals and the [`fmt::Display`]
/// rendering are deterministic for a given insertion sequence.
///
/// Two values that compare equal (and hash alike) are the same vertex. Vertices
/// and edges are only ever added; there is no removal.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    vertices: VertexMap<V>,
}

impl<V> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AdjacencyGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: VertexMap::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Registered vertices, in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }
}

impl<V> AdjacencyGraph<V>
where
    V: Eq + Hash,
{
    /// Registers `vertex` with an empty neighbor list. Re-registering an
    /// existing vertex leaves the graph untouched.
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.entry(vertex).or_default();
        self
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn has_edge(&self, origin: &V, destination: &V) -> bool {
        self.vertices
            .get(origin)
            .map_or(false, |neighbors| neighbors.contains(destination))
    }

    /// Outgoing neighbors of `vertex` in first-insertion order, or `None` if
    /// the vertex is not registered.
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.vertices.get(vertex).map(Vec::as_slice)
    }
}

impl<V> AdjacencyGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Records the directed edge `origin -> destination`.
    ///
    /// Both endpoints must already be registered; nothing is mutated on
    /// failure. Repeating an edge is a no-op and self-loops are stored like
    /// any other edge.
    pub fn add_edge(&mut self, origin: V, destination: V) -> Result<&mut Self> {
        if !self.vertices.contains_key(&origin) {
            return Err(Error::MissingOrigin {
                vertex: format!("{origin:?}"),
            });
        }
        if !self.vertices.contains_key(&destination) {
            return Err(Error::MissingDestination {
                vertex: format!("{destination:?}"),
            });
        }
        if let Some(neighbors) = self.vertices.get_mut(&origin) {
            if !neighbors.contains(&destination) {
                neighbors.push(destination);
            }
        }
        Ok(self)
    }

    /// Path with the fewest edges from `origin` to `destination`, or an empty
    /// vector when `destination` is unreachable.
    ///
    /// Breadth-first search over the adjacency relation: each vertex's
    /// predecessor is fixed the first time it is discovered and neighbors are
    /// expanded in insertion order, so among equally short paths the
    /// first-discovered one is returned. A vertex always reaches itself by the
    /// zero-length path `[origin]`, whether or not a self-loop edge exists.
    pub fn shortest_path(&self, origin: &V, destination: &V) -> Result<Vec<V>> {
        let Some(origin_idx) = self.vertices.get_index_of(origin) else {
            return Err(Error::MissingOrigin {
                vertex: format!("{origin:?}"),
            });
        };
        let Some(destination_idx) = self.vertices.get_index_of(destination) else {
            return Err(Error::MissingDestination {
                vertex: format!("{destination:?}"),
            });
        };

        if origin_idx == destination_idx {
            return Ok(vec![origin.clone()]);
        }

        let mut predecessor: Vec<Option<usize>> = vec![None; self.vertices.len()];
        let mut frontier: VecDeque<usize> = VecDeque::new();
        frontier.push_back(origin_idx);

        while predecessor[destination_idx].is_none() {
            let Some(current) = frontier.pop_front() else {
                break;
            };
            let Some((_, neighbors)) = self.vertices.get_index(current) else {
                continue;
            };
            for neighbor in neighbors {
                let Some(neighbor_idx) = self.vertices.get_index_of(neighbor) else {
                    continue;
                };
                if predecessor[neighbor_idx].is_none() {
                    predecessor[neighbor_idx] = Some(current);
                    frontier.push_back(neighbor_idx);
                }
            }
        }

        // Retrace predecessors destination -> origin, then flip.
        let mut trail = vec![destination_idx];
        let mut cursor = destination_idx;
        while cursor != origin_idx {
            let Some(previous) = predecessor[cursor] else {
                // The frontier drained before the destination was discovered.
                return Ok(Vec::new());
            };
            trail.push(previous);
            cursor = previous;
        }

        Ok(trail
            .into_iter()
            .rev()
            .filter_map(|idx| self.vertices.get_index(idx))
            .map(|(vertex, _)| vertex.clone())
            .collect())
    }
}

impl<V> fmt::Display for AdjacencyGraph<V>
where
    V: fmt::Debug,
{
    /// One `vertex -> [neighbors]` line per vertex, in registration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (vertex, neighbors)) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{vertex:?} -> {neighbors:?}")?;
        }
        Ok(())
    }
}
