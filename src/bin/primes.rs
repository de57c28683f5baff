use std::io;
use trialroot::{Primes, console::run_prime_prompt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    trialroot::init_logging();

    tracing::info!("Starting prime enumeration from 2");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match run_prime_prompt(Primes::<u64>::new(), &mut input, &mut output) {
        Ok(printed) => {
            tracing::info!("Printed {} primes.", printed);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Prime enumeration stopped: {}", e);
            Err(e.into())
        }
    }
}
