use crate::predicate::{PRECALC_MAX, passes_trial_division, passes_trial_division_prefix};

/// Number of integers in `[0, bound]` that pass [`passes_trial_division`].
///
/// Returns `0` for any `bound < 2` without scanning. For larger bounds `0`
/// and `1` are part of the count, so `count_in_range(2) == 3`.
///
/// The result never exceeds `bound + 1` and fits in an `i32` for every
/// `i32` bound.
pub const fn count_in_range(bound: i32) -> i32 {
    count_between(0, bound) as i32
}

/// Number of integers in `[start, bound]` that pass [`passes_trial_division`].
///
/// The `bound < 2` short-circuit only looks at the upper end, so
/// `count_between(-10, 1) == 0` even though every candidate in that range
/// passes. Candidates below zero always pass.
pub const fn count_between(start: i32, bound: i32) -> i64 {
    if bound < 2 || start > bound {
        return 0;
    }

    let mut tally = 0;
    let mut from = start;
    if from < 0 {
        tally += -(from as i64);
        from = 0;
    }

    if from <= PRECALC_MAX {
        let upto = if bound < PRECALC_MAX { bound } else { PRECALC_MAX };
        tally += tally_precalculated(from, upto);
        if upto == bound {
            return tally;
        }
        from = PRECALC_MAX + 1;
    }

    tally + tally_trial_division(from, bound)
}

/// Tally of `[from, upto]`, both within `0..=PRECALC_MAX`.
const fn tally_precalculated(from: i32, upto: i32) -> i64 {
    let below = if from == 0 {
        Some(0)
    } else {
        passes_trial_division_prefix(from - 1)
    };
    match (below, passes_trial_division_prefix(upto)) {
        (Some(below), Some(through)) => (through - below) as i64,
        _ => tally_trial_division(from, upto),
    }
}

/// Tests every candidate in `[start, bound]` one by one.
///
/// Unlike [`count_between`] there is no `bound < 2` short-circuit and no
/// precalculated table.
pub const fn tally_trial_division(start: i32, bound: i32) -> i64 {
    if start > bound {
        return 0;
    }

    let mut tally = 0;
    let mut x = start;
    loop {
        if passes_trial_division(x) {
            tally += 1;
        }
        if x == bound {
            break;
        }
        x += 1;
    }
    tally
}
