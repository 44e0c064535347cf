//! Numeric helpers centralizing counter conversion and saturating score math.

use num_traits::cast::cast;

/// Convert a caller-supplied tally to a stored counter.
///
/// Returns `None` for negative values and for values that do not fit in `u32`.
#[must_use]
pub fn counter_from_i64(value: i64) -> Option<u32> {
    cast::<i64, u32>(value)
}

/// Triangular number `1 + 2 + ... + n`, saturating at `u32::MAX`.
#[must_use]
pub fn triangular(n: u32) -> u32 {
    let wide = u64::from(n) * (u64::from(n) + 1) / 2;
    cast::<u64, u32>(wide).unwrap_or(u32::MAX)
}

/// `count * per_unit`, saturating at `u32::MAX`.
#[must_use]
pub const fn points(count: u32, per_unit: u32) -> u32 {
    count.saturating_mul(per_unit)
}

/// Saturating sum of a sequence of category scores.
pub fn saturating_sum(values: impl IntoIterator<Item = u32>) -> u32 {
    values.into_iter().fold(0, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_conversion_rejects_negative_and_oversized() {
        assert_eq!(counter_from_i64(0), Some(0));
        assert_eq!(counter_from_i64(42), Some(42));
        assert_eq!(counter_from_i64(-1), None);
        assert_eq!(counter_from_i64(i64::from(u32::MAX) + 1), None);
        assert_eq!(counter_from_i64(i64::from(u32::MAX)), Some(u32::MAX));
    }

    #[test]
    fn triangular_matches_closed_form() {
        assert_eq!(triangular(0), 0);
        assert_eq!(triangular(1), 1);
        assert_eq!(triangular(3), 6);
        assert_eq!(triangular(4), 10);
        assert_eq!(triangular(5), 15);
        assert_eq!(triangular(u32::MAX), u32::MAX);
    }

    #[test]
    fn products_and_sums_saturate() {
        assert_eq!(points(7, 6), 42);
        assert_eq!(points(u32::MAX, 2), u32::MAX);
        assert_eq!(saturating_sum([1, 2, 3]), 6);
        assert_eq!(saturating_sum([u32::MAX, 1]), u32::MAX);
        assert_eq!(saturating_sum(std::iter::empty()), 0);
    }
}
