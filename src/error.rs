use std::io::ErrorKind;

use thiserror::Error;

use crate::{Graph, VertexId};

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GraphError {
    #[error("Vertex {vertex} is out of range, graph has {vertex_count} vertices")]
    OutOfRangeVertex {
        vertex: VertexId,
        vertex_count: usize,
    },
    #[error("Edge ({u}, {v}) has negative weight {weight}")]
    NegativeWeight { u: VertexId, v: VertexId, weight: i64 },
    #[error("Edge ({u}, {v}) weight {weight} exceeds the maximum {max}", max = Graph::MAX_WEIGHT)]
    WeightTooLarge { u: VertexId, v: VertexId, weight: i64 },
    #[error("Graph of {vertex_count} vertices exceeds the maximum {max}", max = Graph::MAX_VERTEX_COUNT)]
    TooManyVertices { vertex_count: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("Unknown facility category: {0}")]
    UnknownCategory(String),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReadError {
    #[error("Graph buffer I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Graph vertex count is missing")]
    MissingVertexCount,
    #[error("Invalid {token:?} token at line {line}")]
    InvalidToken { line: usize, token: TokenKind },
    #[error("Edge at line {line} needs a start vertex, an end vertex and a weight")]
    IncompleteEdge { line: usize },
    #[error("Line {line} rejected: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// The field of a graph file in which an invalid token was found.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    VertexCount,
    Vertex,
    Weight,
    Trailing,
}

impl From<std::io::Error> for ReadError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
