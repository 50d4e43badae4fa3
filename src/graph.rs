use tracing::trace;

use crate::{GraphError, Length, VertexId};

/// Weighted undirected graph over the vertices `0..vertex_count`.
///
/// Every edge is stored in the adjacency lists of both its endpoints.
/// Parallel edges are kept, the graph never deduplicates nor removes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<(VertexId, Length)>>,
    edge_count: usize,
}

impl Graph {
    /// Largest accepted edge weight.
    pub const MAX_WEIGHT: i64 = u32::MAX as i64;
    /// Largest accepted number of vertices.
    ///
    /// Together with [`Graph::MAX_WEIGHT`] this keeps the length of any simple path, and
    /// the sum of two of them, below [`Length::UNREACHABLE`].
    pub const MAX_VERTEX_COUNT: usize = 1 << 31;

    /// Creates a graph with a fixed number of vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `vertex_count` exceeds [`Graph::MAX_VERTEX_COUNT`],
    /// use [`Graph::try_new`] for counts that come from untrusted input.
    pub fn new(vertex_count: usize) -> Self {
        assert!(
            vertex_count <= Self::MAX_VERTEX_COUNT,
            "graph of {vertex_count} vertices exceeds the maximum {}",
            Self::MAX_VERTEX_COUNT
        );

        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph with a fixed number of vertices and no edges, failing if there are
    /// more than [`Graph::MAX_VERTEX_COUNT`] vertices.
    pub fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count > Self::MAX_VERTEX_COUNT {
            return Err(GraphError::TooManyVertices { vertex_count });
        }
        Ok(Self::new(vertex_count))
    }

    /// Creates a graph from a sequence of `(u, v, weight)` triples.
    /// Stops at the first edge that [`Graph::add_edge`] rejects.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, i64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::try_new(vertex_count)?;
        for (u, v, weight) in edges {
            graph.add_edge(VertexId(u), VertexId(v), weight)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges added so far, parallel edges included.
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Returns an error if the vertex doesn't belong to the graph.
    pub fn ensure_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::OutOfRangeVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Adds the undirected edge `u <=> v`, making each endpoint reachable from the other
    /// with the same weight.
    ///
    /// Rejected edges leave the graph untouched: both endpoints must belong to the graph
    /// and the weight must lie within `0..=Graph::MAX_WEIGHT`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: i64) -> Result<(), GraphError> {
        self.ensure_vertex(u)?;
        self.ensure_vertex(v)?;

        if weight > Self::MAX_WEIGHT {
            return Err(GraphError::WeightTooLarge { u, v, weight });
        }
        let weight = u64::try_from(weight)
            .map(Length::new)
            .map_err(|_| GraphError::NegativeWeight { u, v, weight })?;

        trace!("Adding edge {u} <=> {v} with weight {weight}");
        self.adjacency[u.index()].push((v, weight));
        self.adjacency[v.index()].push((u, weight));
        self.edge_count += 1;

        Ok(())
    }

    /// Gets an iterator over the neighbors of the vertex and the weights of the edges
    /// that connect them to it.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Length)> + '_ {
        self.adjacency
            .get(vertex.index())
            .into_iter()
            .flatten()
            .copied()
    }

    /// Number of adjacency entries of the vertex, a self-loop counts twice.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex.index()).map_or(0, Vec::len)
    }

    /// Gets the lowest weight among the edges between the two vertices, if any.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<Length> {
        self.neighbors(u)
            .filter(|&(neighbor, _)| neighbor == v)
            .map(|(_, weight)| weight)
            .min()
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[(VertexId, Length)] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
