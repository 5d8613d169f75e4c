//! Clamped integer value

use crate::config::ConfigError;

/// Integer with a fixed inclusive range
///
/// Every write is projected onto `[min, max]`. Out-of-range input is never
/// rejected: an encoder turned past the end of its range simply saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundedValue {
    value: i32,
    min: i32,
    max: i32,
}

impl BoundedValue {
    /// Create a bounded value
    ///
    /// `initial` defaults to `min` and is clamped into range.
    pub fn new(min: i32, max: i32, initial: Option<i32>) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::EmptyRange);
        }
        let mut bounded = Self {
            value: min,
            min,
            max,
        };
        bounded.set(initial.unwrap_or(min));
        Ok(bounded)
    }

    /// Store `candidate` clamped to the range
    pub fn set(&mut self, candidate: i32) {
        self.value = candidate.clamp(self.min, self.max);
    }

    /// Current value
    pub fn get(&self) -> i32 {
        self.value
    }

    /// Apply a signed delta, saturating at the range ends
    pub fn step(&mut self, delta: i32) {
        self.set(self.value.saturating_add(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_defaults_to_min() {
        let v = BoundedValue::new(1, 12, None).unwrap();
        assert_eq!(v.get(), 1);
    }

    #[test]
    fn test_initial_is_clamped() {
        let v = BoundedValue::new(1965, 1995, Some(2024)).unwrap();
        assert_eq!(v.get(), 1995);
    }

    #[test]
    fn test_empty_range_rejected() {
        assert_eq!(
            BoundedValue::new(10, 9, None),
            Err(ConfigError::EmptyRange)
        );
    }

    #[test]
    fn test_single_value_range() {
        let mut v = BoundedValue::new(7, 7, None).unwrap();
        v.step(1);
        assert_eq!(v.get(), 7);
        v.step(-1);
        assert_eq!(v.get(), 7);
    }

    #[test]
    fn test_step_saturates() {
        let mut v = BoundedValue::new(1, 31, Some(31)).unwrap();
        v.step(1);
        assert_eq!(v.get(), 31);

        v.set(i32::MIN);
        assert_eq!(v.get(), 1);
        v.step(i32::MIN);
        assert_eq!(v.get(), 1);
    }

    proptest! {
        #[test]
        fn set_projects_onto_range(lo in -1000i32..1000, span in 0i32..1000, v in any::<i32>()) {
            let hi = lo + span;
            let mut b = BoundedValue::new(lo, hi, None).unwrap();
            b.set(v);
            prop_assert_eq!(b.get(), lo.max(hi.min(v)));
        }

        #[test]
        fn set_is_idempotent(lo in -100i32..100, span in 0i32..100, v in any::<i32>()) {
            let mut b = BoundedValue::new(lo, lo + span, None).unwrap();
            b.set(v);
            let first = b.get();
            b.set(v);
            prop_assert_eq!(b.get(), first);
        }

        #[test]
        fn steps_clamp_at_each_application(
            initial in 1i32..=31,
            steps in proptest::collection::vec(prop_oneof![Just(1i32), Just(-1i32)], 0..200),
        ) {
            let mut b = BoundedValue::new(1, 31, Some(initial)).unwrap();
            let mut expected = initial;
            for delta in &steps {
                b.step(*delta);
                expected = (expected + delta).clamp(1, 31);
                prop_assert!(b.get() >= 1 && b.get() <= 31);
            }
            prop_assert_eq!(b.get(), expected);
        }
    }
}
