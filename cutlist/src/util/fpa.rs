use std::cmp::Ordering;

/// Absolute tolerance on lengths, well below any meaningful cut dimension
const EPSILON: f32 = 1e-4;
const ULPS: i32 = 4;

/// Floating point length compared with a tolerance.
/// Skyline heights and segment edges are sums of part dimensions and clearances,
/// two of them are considered equal when they only differ by rounding.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = EPSILON, ulps = ULPS)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_noise_is_ignored() {
        let sum = 0.1f32 + 0.2 + 700.0;
        assert_eq!(FPA(sum), FPA(700.3));
        assert!(FPA(sum) >= FPA(700.3));
        assert!(FPA(sum) <= FPA(700.3));
        assert!(FPA(700.0) < FPA(700.01));
    }
}
