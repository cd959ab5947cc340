use crate::core::distance_metric::DistanceMetric;

/// Absolute (L1 / Manhattan) distance.
///
/// Sums absolute per-feature differences, so deviations add linearly
/// instead of quadratically. Over single-feature patterns it is identical
/// to [`Euclidean`](crate::metrics::euclidean::Euclidean).
#[derive(Debug, Clone)]
pub struct Absolute;

impl DistanceMetric for Absolute {
    fn distance(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "feature dimensions must match");
        a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::euclidean::Euclidean;

    #[test]
    fn test_distance_hand_computed() {
        // |1-4| + |2-6| = 7
        let d = Absolute::distance(&[1.0, 2.0], &[4.0, 6.0]);
        assert!((d - 7.0).abs() < 1e-12, "expected 7, got {d}");
    }

    #[test]
    fn test_zero_iff_equal() {
        assert_eq!(Absolute::distance(&[2.0, 3.0], &[2.0, 3.0]), 0.0);
        assert!(Absolute::distance(&[2.0, 3.0], &[2.0, 3.1]) > 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = [1.0, -2.0, 3.0];
        let b = [0.5, 4.0, -1.0];
        assert_eq!(Absolute::distance(&a, &b), Absolute::distance(&b, &a));
    }

    #[test]
    fn test_matches_euclidean_on_scalars() {
        for (x, y) in [(5.0, 60.0), (-3.0, 2.5), (7.0, 7.0)] {
            assert_eq!(
                Absolute::distance(&[x], &[y]),
                Euclidean::distance(&[x], &[y]),
                "both metrics are |a-b| over scalars"
            );
        }
    }
}
