#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{CounterConfig, Strategy};
use crate::counter::{count_between, tally_trial_division};
use crate::error::Result;
use crate::predicate::PRECALC_MAX;
use crate::sieve::count_with_sieve;

/// Configured front end over the counting functions.
///
/// Every strategy and chunk size returns exactly what
/// [`count_in_range`](crate::count_in_range) and
/// [`count_between`](crate::count_between) return. With the `parallel`
/// feature, chunks and batches run on the rayon global pool.
#[derive(Debug, Clone, Default)]
pub struct PrimeCounter {
    config: CounterConfig,
}

impl PrimeCounter {
    /// # Errors
    ///
    /// Returns an error if the config does not pass
    /// [`CounterConfig::validate`].
    pub fn new(config: CounterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn count(&self, bound: i32) -> i32 {
        self.count_between(0, bound) as i32
    }

    pub fn count_between(&self, start: i32, bound: i32) -> i64 {
        if bound < 2 || start > bound {
            return 0;
        }

        match self.config.strategy {
            Strategy::Sieve if bound <= self.config.sieve_limit => {
                log::debug!("Sieving [{start}, {bound}]");
                count_with_sieve(start, bound)
            }
            Strategy::Sieve => {
                log::debug!(
                    "Bound {bound} exceeds sieve limit {}, falling back to trial division",
                    self.config.sieve_limit
                );
                self.tally_chunked(start, bound)
            }
            Strategy::TrialDivision => self.tally_chunked(start, bound),
        }
    }

    /// Counts for each bound, in input order.
    pub fn count_each(&self, bounds: &[i32]) -> Vec<i32> {
        log::debug!(
            "Counting {} bounds with {}",
            bounds.len(),
            self.config.strategy
        );

        #[cfg(feature = "parallel")]
        let counts: Vec<i32> = bounds.par_iter().map(|&bound| self.count(bound)).collect();
        #[cfg(not(feature = "parallel"))]
        let counts: Vec<i32> = bounds.iter().map(|&bound| self.count(bound)).collect();

        counts
    }

    fn tally_chunked(&self, start: i32, bound: i32) -> i64 {
        // bound >= 2 here, so the precalculated part never trips the guard.
        let head = count_between(start, bound.min(PRECALC_MAX));
        let from = start.max(PRECALC_MAX + 1);
        if from > bound {
            return head;
        }

        let windows = windows(from, bound, self.config.chunk_size);
        log::debug!(
            "Scanning [{from}, {bound}] in {} windows of up to {}",
            windows.len(),
            self.config.chunk_size
        );

        let tally_window = |&(lo, hi): &(i32, i32)| {
            let tally = tally_trial_division(lo, hi);
            log::trace!("Window [{lo}, {hi}]: {tally}");
            tally
        };

        #[cfg(feature = "parallel")]
        let tail: i64 = windows.par_iter().map(tally_window).sum();
        #[cfg(not(feature = "parallel"))]
        let tail: i64 = windows.iter().map(tally_window).sum();

        head + tail
    }
}

/// Splits `[from, bound]` into consecutive inclusive windows of at most
/// `chunk_size` candidates.
fn windows(from: i32, bound: i32, chunk_size: u32) -> Vec<(i32, i32)> {
    let step = i64::from(chunk_size.max(1));
    let bound = i64::from(bound);
    let mut lo = i64::from(from);
    let mut windows = Vec::new();
    while lo <= bound {
        let hi = (lo + step - 1).min(bound);
        windows.push((lo as i32, hi as i32));
        lo = hi + 1;
    }
    windows
}
