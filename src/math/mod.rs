pub mod isqrt;
pub mod trial_division;
