use std::io;
use trialroot::console::run_sqrt_prompt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    trialroot::init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = run_sqrt_prompt(&mut input, &mut output) {
        tracing::error!("Square root failed: {}", e);
        return Err(e.into());
    }
    Ok(())
}
