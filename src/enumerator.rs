use crate::errors::TrialRootError;
use crate::math::trial_division::{Primality, is_prime};
use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// Increasing primes found by trial division, one candidate at a time.
///
/// The candidate never wraps: once it cannot be advanced within `T`, the
/// iterator yields a single `Overflow` error and is exhausted afterwards.
#[derive(Debug, Clone)]
pub struct Primes<T> {
    candidate: Option<T>,
    overflowed: bool,
}

impl<T: PrimInt + Display + Debug> Primes<T> {
    pub fn new() -> Self {
        let two = T::one() + T::one();
        Self::starting_at(two)
    }

    /// Starts the search at `start`, clamped up to 2.
    pub fn starting_at(start: T) -> Self {
        let two = T::one() + T::one();
        Self {
            candidate: Some(start.max(two)),
            overflowed: false,
        }
    }

    fn advance(&mut self, current: T) {
        match current.checked_add(&T::one()) {
            Some(next) => self.candidate = Some(next),
            None => {
                self.candidate = None;
                self.overflowed = true;
            }
        }
    }
}

impl<T: PrimInt + Display + Debug> Default for Primes<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Display + Debug> Iterator for Primes<T> {
    type Item = Result<T, TrialRootError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(n) = self.candidate else {
                if self.overflowed {
                    self.overflowed = false;
                    return Some(Err(TrialRootError::Overflow(format!(
                        "no candidate above {} fits in the counter type",
                        T::max_value()
                    ))));
                }
                return None;
            };

            let verdict = is_prime(n);
            self.advance(n);

            match verdict {
                Primality::Prime => {
                    tracing::debug!(prime = %n, "Found prime");
                    return Some(Ok(n));
                }
                Primality::Composite(divisor) => {
                    tracing::trace!(candidate = %n, %divisor, "Candidate is composite");
                }
                Primality::Neither => {}
            }
        }
    }
}
