/// Trait for distance functions between pattern feature vectors.
///
/// Designed for static polymorphism: the algorithm is generic over
/// `M: DistanceMetric`, so metric calls monomorphize and inline in the
/// assignment loop.
///
/// Implementations must behave like a metric: the result is non-negative,
/// symmetric in its arguments, and zero exactly when the inputs are equal.
/// Both slices are guaranteed by [`PatternStore`](crate::PatternStore) to
/// have the same length and to contain only finite values.
pub trait DistanceMetric: Clone + Send + Sync {
    /// Compute the distance between two feature vectors.
    fn distance(a: &[f64], b: &[f64]) -> f64;
}
