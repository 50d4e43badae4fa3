#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod path;
mod reader;
mod routing;

pub use error::{GraphError, ReadError, RouteError, TokenKind};
pub use graph::Graph;
pub use model::{Category, Length, VertexId};
pub use path::Path;
pub use reader::read_graph;
pub use routing::{
    Facilities, FacilityLocator, RoutedTrip, Router, ShortestPathConfig, ShortestPathTree,
    Strategy, Trip,
};
