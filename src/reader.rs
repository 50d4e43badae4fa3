//! Line-oriented text format of a graph:
//!
//! ```text
//! # comment
//! <vertex count>
//! <u> <v> <weight>
//! ...
//! ```

use std::io::BufRead;
use std::str::FromStr;

use tracing::debug;

use crate::{Graph, ReadError, TokenKind, VertexId};

/// Reads a graph in the text format, failing at the first malformed or rejected line.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, ReadError> {
    let mut lines = significant_lines(reader);

    let (line_number, header) = lines.next().ok_or(ReadError::MissingVertexCount)??;
    let mut tokens = header.split_whitespace();
    let vertex_count = parse_token(tokens.next(), line_number, TokenKind::VertexCount)?;
    ensure_end_of_line(tokens, line_number)?;

    let mut graph = Graph::try_new(vertex_count).map_err(|source| ReadError::Graph {
        line: line_number,
        source,
    })?;

    for line in lines {
        let (line_number, line) = line?;
        let mut tokens = line.split_whitespace();

        let u = parse_token(tokens.next(), line_number, TokenKind::Vertex)?;
        let v = parse_token(tokens.next(), line_number, TokenKind::Vertex)?;
        let weight = parse_token(tokens.next(), line_number, TokenKind::Weight)?;
        ensure_end_of_line(tokens, line_number)?;

        graph
            .add_edge(VertexId(u), VertexId(v), weight)
            .map_err(|source| ReadError::Graph {
                line: line_number,
                source,
            })?;
    }

    debug!(
        "Read graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Gets the trimmed lines that are neither blank nor comments, with their line number.
fn significant_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<(usize, String), ReadError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(Ok((index + 1, line.to_owned())))
                }
            }
            Err(error) => Some(Err(error.into())),
        })
}

fn parse_token<T: FromStr>(
    token: Option<&str>,
    line: usize,
    kind: TokenKind,
) -> Result<T, ReadError> {
    let token = token.ok_or(match kind {
        TokenKind::VertexCount => ReadError::MissingVertexCount,
        _ => ReadError::IncompleteEdge { line },
    })?;

    token
        .parse()
        .map_err(|_| ReadError::InvalidToken { line, token: kind })
}

fn ensure_end_of_line<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<(), ReadError> {
    match tokens.next() {
        Some(_) => Err(ReadError::InvalidToken {
            line,
            token: TokenKind::Trailing,
        }),
        None => Ok(()),
    }
}

impl FromStr for Graph {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_graph(s.as_bytes())
    }
}
