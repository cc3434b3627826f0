//! Counts the integers in `[0, N]` that pass a trial-division primality test.
//!
//! The test treats `0` and `1` as passing, since their truncated square root
//! leaves no divisor to try. [`count_in_range`] reproduces that behaviour
//! exactly; the sieve and the [`PrimeCounter`] engine return the same counts.

pub use count_prime_macros::prefix_table;

mod config;
mod counter;
mod engine;
mod error;
mod predicate;
mod sieve;

pub use config::{CounterConfig, Strategy};
pub use counter::{count_between, count_in_range, tally_trial_division};
pub use engine::PrimeCounter;
pub use error::{CountError, Result};
pub use predicate::{PRECALC_MAX, divisor_limit, passes_trial_division, passes_trial_division_prefix};
pub use sieve::count_with_sieve;
