use crate::prefix_table;

/// Largest candidate whose running tally is precalculated at compile time.
pub const PRECALC_MAX: i32 = 1 << 12;

/// Upper end of the trial-divisor range for `x`, i.e. `floor(sqrt(x))`.
///
/// Agrees with `(x as f64).sqrt() as i32` for every `i32`. A negative `x`
/// has a NaN square root, which truncates to `0`.
pub const fn divisor_limit(x: i32) -> i32 {
    if x <= 0 { 0 } else { x.isqrt() }
}

/// Trial division by every `i` in `2..=divisor_limit(x)`.
///
/// `0`, `1` and every negative candidate pass because their divisor range
/// is empty.
#[prefix_table(x = 0..=PRECALC_MAX, option)]
pub const fn passes_trial_division(x: i32) -> bool {
    let limit = divisor_limit(x);
    let mut i = 2;
    while i <= limit {
        if x % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    fn float_limit(x: i32) -> i32 {
        (x as f64).sqrt() as i32
    }

    #[test]
    fn divisor_limit_matches_float_sqrt_around_every_square() {
        let mut k: i64 = 0;
        while k * k <= i32::MAX as i64 {
            for x in [k * k - 1, k * k, k * k + 1] {
                if let Ok(x) = i32::try_from(x) {
                    assert_eq!(divisor_limit(x), float_limit(x), "x = {x}");
                }
            }
            k += 1;
        }
    }

    #[test]
    fn divisor_limit_matches_float_sqrt_at_extremes() {
        for x in [i32::MIN, -1, 0, 1, 2, 3, i32::MAX - 1, i32::MAX] {
            assert_eq!(divisor_limit(x), float_limit(x), "x = {x}");
        }
    }

    #[test]
    fn divisor_limit_of_small_squares() {
        assert_eq!(divisor_limit(8), 2);
        assert_eq!(divisor_limit(9), 3);
        assert_eq!(divisor_limit(15), 3);
        assert_eq!(divisor_limit(16), 4);
        assert_eq!(divisor_limit(24), 4);
        assert_eq!(divisor_limit(25), 5);
    }

    #[test]
    fn zero_and_one_pass() {
        assert!(passes_trial_division(0));
        assert!(passes_trial_division(1));
    }

    #[test]
    fn negatives_pass() {
        assert!(passes_trial_division(-1));
        assert!(passes_trial_division(-4));
        assert!(passes_trial_division(i32::MIN));
    }

    #[test]
    fn squares_of_primes_fail() {
        for x in [4, 9, 25, 49, 121, 169, 46_337 * 46_337] {
            assert!(!passes_trial_division(x), "x = {x}");
        }
    }

    #[test]
    fn primes_pass() {
        for x in [2, 3, 5, 7, 11, 13, 4093, 65_537, i32::MAX] {
            assert!(passes_trial_division(x), "x = {x}");
        }
    }

    #[test]
    fn prefix_table_is_running_tally() {
        let mut tally = 0;
        for x in 0..=PRECALC_MAX {
            if passes_trial_division(x) {
                tally += 1;
            }
            assert_eq!(passes_trial_division_prefix(x), Some(tally), "x = {x}");
        }
    }

    #[test]
    fn prefix_table_is_none_outside_range() {
        assert_eq!(passes_trial_division_prefix(-1), None);
        assert_eq!(passes_trial_division_prefix(PRECALC_MAX + 1), None);
        assert_eq!(passes_trial_division_prefix(i32::MAX), None);
    }
}
