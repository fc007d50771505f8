//! Random integer generation behind an injectable source.
//!
//! Everything random in this crate draws through [`IntegerSource`], a
//! single-method trait for uniform integers in an inclusive range. Any
//! [`rand::Rng`] implements it, so production code passes the thread RNG
//! while tests pass a seeded RNG or a scripted fake.
//!
//! # Reproducibility
//!
//! For reproducible simulations, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_integer};
/// let mut rng = create_rng(42);
/// let x = random_integer(&mut rng, 1, 6);
/// assert!((1..=6).contains(&x));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// A source of uniformly distributed integers.
///
/// Implementors return a value in `[min, max]`, both ends inclusive.
/// Behavior for `min > max` is up to the implementor; the blanket
/// implementation for [`rand::Rng`] panics.
pub trait IntegerSource {
    /// Draws one integer uniformly from `[min, max]`.
    fn random_integer(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng + ?Sized> IntegerSource for R {
    fn random_integer(&mut self, min: i64, max: i64) -> i64 {
        self.random_range(min..=max)
    }
}

/// Draws one integer uniformly from `[min, max]` using `source`.
///
/// # Panics
/// With a [`rand::Rng`] source, panics if `min > max`.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_integer};
/// let mut rng = create_rng(7);
/// assert_eq!(random_integer(&mut rng, 3, 3), 3);
/// ```
pub fn random_integer<S: IntegerSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    let value = source.random_integer(min, max);
    tracing::trace!(min, max, value, "drew random integer");
    value
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed script of values, ignoring the requested bounds.
    struct Scripted {
        values: Vec<i64>,
        next: usize,
    }

    impl IntegerSource for Scripted {
        fn random_integer(&mut self, _min: i64, _max: i64) -> i64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<i64> = (0..10).map(|_| random_integer(&mut rng1, 0, 100)).collect();
        let vals2: Vec<i64> = (0..10).map(|_| random_integer(&mut rng2, 0, 100)).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_random_integer_degenerate_range() {
        let mut rng = create_rng(0);
        for _ in 0..100 {
            assert_eq!(random_integer(&mut rng, 6, 6), 6);
        }
    }

    #[test]
    fn test_random_integer_negative_bounds() {
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let x = random_integer(&mut rng, -3, -1);
            assert!((-3..=-1).contains(&x));
        }
    }

    #[test]
    fn test_random_integer_covers_both_ends() {
        let mut rng = create_rng(42);
        let mut seen = [false; 2];
        for _ in 0..1000 {
            seen[(random_integer(&mut rng, 0, 1)) as usize] = true;
        }
        assert!(seen[0] && seen[1], "both endpoints should be reachable");
    }

    #[test]
    #[should_panic]
    fn test_random_integer_inverted_range_panics() {
        let mut rng = create_rng(0);
        random_integer(&mut rng, 10, 5);
    }

    #[test]
    fn test_scripted_source_is_used() {
        let mut source = Scripted {
            values: vec![4, 9],
            next: 0,
        };
        assert_eq!(random_integer(&mut source, 0, 10), 4);
        assert_eq!(random_integer(&mut source, 0, 10), 9);
        assert_eq!(random_integer(&mut source, 0, 10), 4);
    }

    #[test]
    fn test_dyn_source() {
        let mut rng = create_rng(3);
        let source: &mut dyn IntegerSource = &mut rng;
        let x = random_integer(source, 1, 2);
        assert!(x == 1 || x == 2);
    }
}
