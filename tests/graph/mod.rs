mod network;

pub use network::{FACILITIES, GARAGE, ISOLATED, MANAGER, NETWORK_GRAPH};
