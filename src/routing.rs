mod dijkstra;
mod trip;

use tracing::debug;

pub use dijkstra::ShortestPathTree;
pub use trip::{Facilities, FacilityLocator, RoutedTrip, Trip};

use crate::{Graph, Length, Path, RouteError, VertexId};

/// How the next vertex to settle is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Scans every vertex for the lowest tentative distance, O(V²).
    #[default]
    VertexScan,
    /// Keeps the discovered vertices in a min-heap, O((V + E) log V).
    BinaryHeap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    pub strategy: Strategy,
    /// Vertices farther than this from the source are considered unreachable.
    pub max_length: Length,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::VertexScan,
            max_length: Length::MAX,
        }
    }
}

/// Runs shortest-path queries over a graph.
///
/// The router borrows the graph, which therefore cannot change while queries are
/// in flight. Queries never modify the graph nor the router.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    graph: &'a Graph,
    config: ShortestPathConfig,
}

impl<'a> Router<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_config(graph, &ShortestPathConfig::default())
    }

    pub const fn with_config(graph: &'a Graph, config: &ShortestPathConfig) -> Self {
        Self {
            graph,
            config: *config,
        }
    }

    pub const fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub const fn config(&self) -> &ShortestPathConfig {
        &self.config
    }

    /// Computes the shortest distances from the source to every vertex of the graph.
    pub fn shortest_paths(&self, source: VertexId) -> Result<ShortestPathTree, RouteError> {
        self.graph.ensure_vertex(source)?;

        let tree = match self.config.strategy {
            Strategy::VertexScan => dijkstra::vertex_scan(self.graph, &self.config, source),
            Strategy::BinaryHeap => dijkstra::binary_heap(self.graph, &self.config, source),
        };

        Ok(tree)
    }

    /// Computes the shortest path from source to target.
    ///
    /// An unreachable target is not an error, the returned path is then
    /// [`Path::unreachable`]. When source and target are the same vertex the path
    /// consists of that single vertex and has zero length.
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<Path, RouteError> {
        self.graph.ensure_vertex(source)?;
        self.graph.ensure_vertex(target)?;

        debug!(
            "Computing shortest path {source} -> {target} with {:?}",
            self.config
        );

        let path = self.shortest_paths(source)?.path_to(target)?;

        if !path.is_reachable() {
            debug!("Cannot reach {target} from {source}");
        }

        Ok(path)
    }
}
