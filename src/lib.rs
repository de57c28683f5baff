pub mod console;
pub mod enumerator;
pub mod errors;
pub mod math;

pub use errors::TrialRootError;

pub use enumerator::Primes;
pub use math::isqrt::int_sqrt;
pub use math::trial_division::{Primality, is_prime};

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber shared by both binaries.
/// Honors `RUST_LOG`, defaulting to `warn` so stdout stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
