//! Sighting-to-state join and the aggregates derived from it.
//!
//! [`augment`](augment::augment) attaches US sightings to each geography
//! feature by lowercase state code and computes the count and duration
//! domains used to configure the color and radius scales.

pub mod augment;
pub mod highlight;
pub mod summary;
pub mod types;
pub mod utility;

pub use augment::augment;
pub use types::{Domain, JoinedData, JoinedFeature};
