use crate::errors::TrialRootError;
use num_traits::PrimInt;
use std::fmt::Display;

/// Calculates the floor integer square root of `num`.
/// Uses binary search over `[1, num]`, comparing `mid <= num / mid` so the
/// square is never formed and cannot overflow `T`.
pub fn int_sqrt<T: PrimInt + Display>(num: T) -> Result<T, TrialRootError> {
    if num < T::zero() {
        return Err(TrialRootError::NegativeInput(num.to_string()));
    }
    if num.is_zero() {
        return Ok(T::zero());
    }

    let mut low = T::one();
    let mut high = num;
    let mut ans = T::zero();

    while low <= high {
        // low + (high - low) / 2 avoids the overflow of (low + high) / 2
        let mid = low + ((high - low) >> 1);
        if mid <= num / mid {
            ans = mid;
            low = mid + T::one();
        } else {
            high = mid - T::one();
        }
        tracing::trace!(%mid, %ans, "isqrt step");
    }

    Ok(ans)
}
