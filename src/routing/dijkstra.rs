use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::{Graph, GraphError, Length, Path, ShortestPathConfig, VertexId};

/// Shortest distances from a single source to every vertex of the graph, together with
/// the predecessor of each reached vertex on its shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Length>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    fn new(source: VertexId, vertex_count: usize) -> Self {
        let mut distances = vec![Length::UNREACHABLE; vertex_count];
        if let Some(distance) = distances.get_mut(source.index()) {
            *distance = Length::ZERO;
        }

        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    pub const fn source(&self) -> VertexId {
        self.source
    }

    /// Gets the shortest distance from the source, [`Length::UNREACHABLE`] if there is no
    /// path. Returns None if the vertex doesn't belong to the graph.
    pub fn distance(&self, vertex: VertexId) -> Option<Length> {
        self.distances.get(vertex.index()).copied()
    }

    /// Gets the vertex that precedes the given one on its shortest path from the source.
    /// Returns None for the source itself and for unreachable vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some_and(|d| d.is_reachable())
    }

    /// Unpacks the shortest path from the source to the target.
    pub fn path_to(&self, target: VertexId) -> Result<Path, GraphError> {
        let length = self
            .distance(target)
            .ok_or(GraphError::OutOfRangeVertex {
                vertex: target,
                vertex_count: self.distances.len(),
            })?;

        if !length.is_reachable() {
            return Ok(Path::unreachable());
        }

        // the predecessors of reached vertices always lead back to the source
        let mut vertices = vec![target];
        let mut next = target;
        while let Some(previous) = self.predecessor(next) {
            next = previous;
            vertices.push(previous);
        }
        vertices.reverse();

        debug_assert_eq!(vertices.first(), Some(&self.source));
        Ok(Path { length, vertices })
    }

    /// Relax: records the distance if it's the best one found so far for the vertex.
    fn relax(
        &mut self,
        config: &ShortestPathConfig,
        from: VertexId,
        to: VertexId,
        distance: Length,
    ) -> bool {
        if distance > config.max_length || distance >= self.distances[to.index()] {
            return false;
        }

        trace!("Relaxing {to} via {from} to distance {distance}");
        self.distances[to.index()] = distance;
        self.predecessors[to.index()] = Some(from);
        true
    }
}

/// Dijkstra selecting the closest unvisited vertex with a scan over all the vertices.
/// The source must belong to the graph.
pub(super) fn vertex_scan(
    graph: &Graph,
    config: &ShortestPathConfig,
    source: VertexId,
) -> ShortestPathTree {
    let vertex_count = graph.vertex_count();
    let mut tree = ShortestPathTree::new(source, vertex_count);
    let mut visited = vec![false; vertex_count];

    // once all but one vertex are visited the last one already holds its final distance
    for _ in 1..vertex_count {
        // min_by_key keeps the first minimum: ties go to the lowest vertex index
        let closest = (0..vertex_count)
            .filter(|&i| !visited[i] && tree.distances[i].is_reachable())
            .min_by_key(|&i| tree.distances[i]);

        let Some(current) = closest else {
            // all the remaining vertices are unreachable
            break;
        };

        visited[current] = true;
        let current_distance = tree.distances[current];
        trace!("Visiting {current} at distance {current_distance}");

        for &(neighbor, weight) in graph.adjacent(current) {
            if !visited[neighbor.index()] {
                tree.relax(config, VertexId(current), neighbor, current_distance + weight);
            }
        }
    }

    tree
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Current shortest distance from source to this vertex.
    distance: Length,
    vertex: VertexId,
}

// Reversed on both keys: std::BinaryHeap pops its greatest element, which is then the
// closest vertex, and among equally close vertices the one with the lowest id.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra keeping the discovered vertices in a priority queue.
/// The source must belong to the graph.
pub(super) fn binary_heap(
    graph: &Graph,
    config: &ShortestPathConfig,
    source: VertexId,
) -> ShortestPathTree {
    let mut tree = ShortestPathTree::new(source, graph.vertex_count());

    // priority queue of discovered vertices that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: Length::ZERO,
        vertex: source,
    }]);

    while let Some(element) = frontier.pop() {
        // check if we already know a cheaper way to get to this vertex from the source
        if element.distance > tree.distances[element.vertex.index()] {
            continue;
        }

        trace!("Visiting {} at distance {}", element.vertex, element.distance);

        for &(neighbor, weight) in graph.adjacent(element.vertex.index()) {
            let distance = element.distance + weight;
            if tree.relax(config, element.vertex, neighbor, distance) {
                frontier.push(HeapElement {
                    distance,
                    vertex: neighbor,
                });
            }
        }
    }

    tree
}
