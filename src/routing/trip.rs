use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Category, Length, Path, RouteError, Router, VertexId};

/// Resolves a category to the vertex of the facility that serves it.
/// Facility locations are owned by the caller, the router only queries them.
pub trait FacilityLocator {
    /// Gets the facility vertex of the category, None if no facility serves it.
    fn facility(&self, category: Category) -> Option<VertexId>;
}

impl<F> FacilityLocator for F
where
    F: Fn(Category) -> Option<VertexId>,
{
    fn facility(&self, category: Category) -> Option<VertexId> {
        self(category)
    }
}

/// Facility vertices by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facilities(FxHashMap<Category, VertexId>);

impl Facilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, vertex: VertexId) -> Self {
        self.insert(category, vertex);
        self
    }

    /// Sets the facility of the category, returning the one it replaces.
    pub fn insert(&mut self, category: Category, vertex: VertexId) -> Option<VertexId> {
        self.0.insert(category, vertex)
    }

    pub fn get(&self, category: Category) -> Option<VertexId> {
        self.0.get(&category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Category, VertexId)> for Facilities {
    fn from_iter<I: IntoIterator<Item = (Category, VertexId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FacilityLocator for Facilities {
    fn facility(&self, category: Category) -> Option<VertexId> {
        self.get(category)
    }
}

/// Route from an origin to a destination that stops at a facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedTrip {
    pub facility: VertexId,
    /// Sum of the lengths of both legs.
    pub total_length: Length,
    /// Leg from the origin to the facility.
    pub to_facility: Path,
    /// Leg from the facility to the destination.
    pub to_destination: Path,
}

impl RoutedTrip {
    pub fn origin(&self) -> Option<VertexId> {
        self.to_facility.source()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.to_destination.target()
    }

    /// Gets the vertices of the whole trip, the facility appears once.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.to_facility
            .vertices
            .iter()
            .chain(self.to_destination.vertices.iter().skip(1))
            .copied()
    }
}

impl fmt::Display for RoutedTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total length through facility {}: {}",
            self.facility, self.total_length
        )?;
        writeln!(f, "To facility: {}", self.to_facility)?;
        write!(f, "To destination: {}", self.to_destination)
    }
}

/// Outcome of a trip composition: either both legs exist or there is no trip at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trip {
    Routed(RoutedTrip),
    Unreachable,
}

impl Trip {
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Routed(_))
    }

    /// Gets the total length of the trip, [`Length::UNREACHABLE`] if there is no trip.
    pub const fn total_length(&self) -> Length {
        match self {
            Self::Routed(trip) => trip.total_length,
            Self::Unreachable => Length::UNREACHABLE,
        }
    }

    pub const fn routed(&self) -> Option<&RoutedTrip> {
        match self {
            Self::Routed(trip) => Some(trip),
            Self::Unreachable => None,
        }
    }

    pub fn into_routed(self) -> Option<RoutedTrip> {
        match self {
            Self::Routed(trip) => Some(trip),
            Self::Unreachable => None,
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Routed(trip) => fmt::Display::fmt(trip, f),
            Self::Unreachable => f.write_str("No route available"),
        }
    }
}

impl Router<'_> {
    /// Resolves the facility of the category to a vertex of the graph.
    pub fn facility_for<L>(&self, locator: &L, category: Category) -> Result<VertexId, RouteError>
    where
        L: FacilityLocator + ?Sized,
    {
        let facility = locator
            .facility(category)
            .ok_or_else(|| RouteError::UnknownCategory(category.to_string()))?;

        self.graph().ensure_vertex(facility)?;
        Ok(facility)
    }

    /// Composes the trip origin -> facility -> destination, where the facility is the one
    /// that serves the category.
    ///
    /// Both legs are independent shortest paths. If either leg is unreachable the whole
    /// trip is [`Trip::Unreachable`]: no partial trip is returned and no other facility
    /// is tried.
    ///
    /// All the inputs are validated before any shortest path is computed.
    pub fn compose_trip<L>(
        &self,
        locator: &L,
        origin: VertexId,
        category: Category,
        destination: VertexId,
    ) -> Result<Trip, RouteError>
    where
        L: FacilityLocator + ?Sized,
    {
        let facility = self.facility_for(locator, category)?;
        self.graph().ensure_vertex(origin)?;
        self.graph().ensure_vertex(destination)?;

        debug!("Composing trip {origin} -> {facility} ({category}) -> {destination}");

        let to_facility = self.shortest_path(origin, facility)?;
        if !to_facility.is_reachable() {
            debug!("Cannot reach facility {facility} ({category}) from {origin}");
            return Ok(Trip::Unreachable);
        }

        let to_destination = self.shortest_path(facility, destination)?;
        if !to_destination.is_reachable() {
            debug!("Cannot reach {destination} from facility {facility} ({category})");
            return Ok(Trip::Unreachable);
        }

        let total_length = to_facility.length + to_destination.length;
        debug_assert!(total_length.is_reachable());

        Ok(Trip::Routed(RoutedTrip {
            facility,
            total_length,
            to_facility,
            to_destination,
        }))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{Graph, GraphError};

    fn network() -> Graph {
        Graph::from_edges(
            6,
            [
                (0, 1, 10),
                (0, 2, 3),
                (1, 2, 1),
                (1, 3, 2),
                (2, 3, 8),
                (2, 4, 2),
                (3, 4, 7),
            ],
        )
        .unwrap()
    }

    fn facilities() -> Facilities {
        Facilities::new()
            .with(Category::Phone, VertexId(3))
            .with(Category::Computer, VertexId(1))
            .with(Category::Tablet, VertexId(4))
    }

    #[test]
    fn facilities_001() {
        let mut facilities = facilities();
        assert_eq!(facilities.len(), 3);
        assert_eq!(facilities.get(Category::Phone), Some(VertexId(3)));
        assert_eq!(
            facilities.insert(Category::Phone, VertexId(5)),
            Some(VertexId(3))
        );
        assert_eq!(facilities.facility(Category::Phone), Some(VertexId(5)));

        let collected: Facilities = [(Category::Tablet, VertexId(0))].into_iter().collect();
        assert_eq!(collected.get(Category::Tablet), Some(VertexId(0)));
        assert_eq!(collected.get(Category::Phone), None);
        assert!(Facilities::new().is_empty());
    }

    #[test]
    fn facility_for_001() {
        let graph = network();
        let router = Router::new(&graph);

        assert_eq!(
            router.facility_for(&facilities(), Category::Computer),
            Ok(VertexId(1))
        );
        assert_eq!(
            router.facility_for(&Facilities::new(), Category::Computer),
            Err(RouteError::UnknownCategory("computer".to_owned()))
        );
    }

    #[test]
    fn facility_for_out_of_range() {
        let graph = network();
        let router = Router::new(&graph);
        let facilities = Facilities::new().with(Category::Phone, VertexId(42));

        assert_eq!(
            router.facility_for(&facilities, Category::Phone),
            Err(RouteError::Graph(GraphError::OutOfRangeVertex {
                vertex: VertexId(42),
                vertex_count: 6
            }))
        );
    }

    #[test]
    fn facility_for_closure() {
        let graph = network();
        let router = Router::new(&graph);
        let locator = |category: Category| match category {
            Category::Phone => Some(VertexId(2)),
            _ => None,
        };

        assert_eq!(router.facility_for(&locator, Category::Phone), Ok(VertexId(2)));
        assert!(router.facility_for(&locator, Category::Tablet).is_err());
    }

    #[test]
    fn compose_trip_001() {
        let graph = network();
        let router = Router::new(&graph);

        let trip = router
            .compose_trip(&facilities(), VertexId(1), Category::Computer, VertexId(4))
            .unwrap();

        assert_eq!(
            trip,
            Trip::Routed(RoutedTrip {
                facility: VertexId(1),
                total_length: Length::new(3),
                to_facility: Path {
                    length: Length::ZERO,
                    vertices: vec![VertexId(1)],
                },
                to_destination: Path {
                    length: Length::new(3),
                    vertices: vec![VertexId(1), VertexId(2), VertexId(4)],
                },
            })
        );

        let routed = trip.routed().unwrap();
        assert_eq!(routed.origin(), Some(VertexId(1)));
        assert_eq!(routed.destination(), Some(VertexId(4)));
        assert_eq!(
            routed.vertices().collect::<Vec<_>>(),
            [VertexId(1), VertexId(2), VertexId(4)]
        );
        assert_eq!(
            trip.to_string(),
            "Total length through facility 1: 3\nTo facility: 1\nTo destination: 1 2 4"
        );
    }

    #[test]
    fn compose_trip_002() {
        let graph = network();
        let router = Router::new(&graph);

        let trip = router
            .compose_trip(&facilities(), VertexId(0), Category::Phone, VertexId(4))
            .unwrap()
            .into_routed()
            .unwrap();

        assert_eq!(trip.to_facility.length, Length::new(6));
        assert_eq!(trip.to_destination.length, Length::new(5));
        assert_eq!(trip.total_length, Length::new(11));
        assert_eq!(
            trip.vertices().collect::<Vec<_>>(),
            [0, 2, 1, 3, 1, 2, 4].map(VertexId)
        );
    }

    #[test]
    fn compose_trip_unreachable() {
        let graph = network();
        let router = Router::new(&graph);

        // vertex 5 has no edges
        let isolated = Facilities::new().with(Category::Tablet, VertexId(5));
        let trip = router
            .compose_trip(&isolated, VertexId(0), Category::Tablet, VertexId(4))
            .unwrap();
        assert_eq!(trip, Trip::Unreachable);
        assert!(!trip.is_reachable());
        assert_eq!(trip.total_length(), Length::UNREACHABLE);
        assert_eq!(trip.to_string(), "No route available");

        let trip = router
            .compose_trip(&facilities(), VertexId(0), Category::Tablet, VertexId(5))
            .unwrap();
        assert_eq!(trip, Trip::Unreachable);

        let trip = router
            .compose_trip(&facilities(), VertexId(5), Category::Tablet, VertexId(0))
            .unwrap();
        assert_eq!(trip, Trip::Unreachable);
    }

    #[test]
    fn compose_trip_max_weights() {
        let max = Graph::MAX_WEIGHT;
        let graph = Graph::from_edges(4, [(0, 1, max), (1, 2, max), (2, 3, 5)]).unwrap();
        let router = Router::new(&graph);
        let facilities = Facilities::new().with(Category::Tablet, VertexId(2));

        let trip = router
            .compose_trip(&facilities, VertexId(0), Category::Tablet, VertexId(3))
            .unwrap()
            .into_routed()
            .unwrap();

        assert_eq!(trip.to_facility.length.value(), 2 * u64::from(u32::MAX));
        assert_eq!(trip.to_destination.length.value(), 5);
        assert_eq!(trip.total_length.value(), 2 * u64::from(u32::MAX) + 5);
        assert!(trip.total_length.is_reachable());
    }

    #[test]
    fn compose_trip_invalid_input() {
        let graph = network();
        let router = Router::new(&graph);

        assert_eq!(
            router.compose_trip(&Facilities::new(), VertexId(0), Category::Phone, VertexId(4)),
            Err(RouteError::UnknownCategory("phone".to_owned()))
        );
        assert_eq!(
            router.compose_trip(&facilities(), VertexId(0), Category::Phone, VertexId(6)),
            Err(RouteError::Graph(GraphError::OutOfRangeVertex {
                vertex: VertexId(6),
                vertex_count: 6
            }))
        );
        assert!(
            router
                .compose_trip(&facilities(), VertexId(9), Category::Phone, VertexId(4))
                .is_err()
        );
    }
}
