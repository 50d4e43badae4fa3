use std::fmt;

use crate::{Graph, Length, VertexId};

/// Sequence of vertices from a source to a target (both included) and the total
/// length of the edges that connect them.
///
/// An unreachable target yields a path with [`Length::UNREACHABLE`] and no vertices,
/// check [`Path::is_reachable`] before following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub length: Length,
    pub vertices: Vec<VertexId>,
}

impl Path {
    pub const fn unreachable() -> Self {
        Self {
            length: Length::UNREACHABLE,
            vertices: Vec::new(),
        }
    }

    pub const fn is_reachable(&self) -> bool {
        self.length.is_reachable()
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Gets an iterator over the consecutive pairs of vertices of the path.
    pub fn hops(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|window| (window[0], window[1]))
    }

    /// Returns true only if every hop of the path follows an edge of the graph and the
    /// (lowest) weights of those edges add up to the path length.
    pub fn is_valid(&self, graph: &Graph) -> bool {
        if !self.is_reachable() || self.vertices.is_empty() {
            return false;
        }

        let mut length = Length::ZERO;
        for (u, v) in self.hops() {
            match graph.edge_weight(u, v) {
                Some(weight) => length = length + weight,
                None => return false,
            }
        }

        length == self.length
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return f.write_str("unreachable");
        }

        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{vertex}")?;
        }

        Ok(())
    }
}
