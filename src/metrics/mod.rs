//! Concrete [`DistanceMetric`](crate::core::distance_metric::DistanceMetric)
//! implementations.

pub mod absolute;
pub mod euclidean;
