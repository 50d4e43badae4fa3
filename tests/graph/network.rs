use std::sync::LazyLock;

use viaroute::{Category, Facilities, Graph, VertexId};

pub static NETWORK_GRAPH: LazyLock<Graph> =
    LazyLock::new(|| include_str!("network.txt").parse().unwrap());

/// Warehouses: phones at 3, computers next to the garage at 1, tablets at 4.
pub static FACILITIES: LazyLock<Facilities> = LazyLock::new(|| {
    Facilities::new()
        .with(Category::Phone, VertexId(3))
        .with(Category::Computer, VertexId(1))
        .with(Category::Tablet, VertexId(4))
});

pub const MANAGER: VertexId = VertexId(0);
pub const GARAGE: VertexId = VertexId(1);
/// Vertex without edges.
pub const ISOLATED: VertexId = VertexId(5);
