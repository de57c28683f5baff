use num_traits::PrimInt;

/// Outcome of a trial-division test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality<T> {
    Prime,
    /// Holds the smallest divisor in `[2, n)`.
    Composite(T),
    /// Values below 2 are neither prime nor composite.
    Neither,
}

impl<T> Primality<T> {
    pub fn is_prime(&self) -> bool {
        matches!(self, Primality::Prime)
    }
}

/// Tests `n` by dividing it by every integer from 2 up to `n`.
/// The probe reaching `n` itself means nothing smaller divided it evenly.
pub fn is_prime<T: PrimInt>(n: T) -> Primality<T> {
    let two = T::one() + T::one();
    if n < two {
        return Primality::Neither;
    }

    let mut divisor = two;
    loop {
        if divisor == n {
            return Primality::Prime;
        }
        if (n % divisor).is_zero() {
            return Primality::Composite(divisor);
        }
        divisor = divisor + T::one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_is_prime_without_probing() {
        assert_eq!(is_prime(2u32), Primality::Prime);
    }

    #[test]
    fn test_small_values() {
        assert_eq!(is_prime(0u32), Primality::Neither);
        assert_eq!(is_prime(1u32), Primality::Neither);
        assert_eq!(is_prime(3u32), Primality::Prime);
        assert_eq!(is_prime(4u32), Primality::Composite(2));
        assert_eq!(is_prime(9u32), Primality::Composite(3));
        assert_eq!(is_prime(97u32), Primality::Prime);
    }

    #[test]
    fn test_composite_reports_smallest_divisor() {
        assert_eq!(is_prime(35u64), Primality::Composite(5));
        assert_eq!(is_prime(49u64), Primality::Composite(7));
        assert_eq!(is_prime(7919u64 * 7927), Primality::Composite(7919));
    }

    #[test]
    fn test_signed_negative_is_neither() {
        assert_eq!(is_prime(-7i32), Primality::Neither);
    }

    #[test]
    fn test_largest_u8_prime() {
        // No wrap at the top of the byte range.
        assert!(is_prime(251u8).is_prime());
        assert_eq!(is_prime(255u8), Primality::Composite(3));
    }
}
