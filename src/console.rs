//! Line-oriented drivers behind the two binaries. They take any reader and
//! writer so the exact console text can be checked against in-memory buffers.

use crate::errors::TrialRootError;
use crate::math::isqrt::int_sqrt;
use num_traits::PrimInt;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub const CONTINUE_PROMPT: &str = "Enter to continue...";
pub const SQRT_PROMPT: &str = "请输入一个整数：";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqrtReport {
    pub num: i64,
    pub root: i64,
}

/// Prints each prime and blocks on one line of input before the next.
/// Returns how many primes were printed once the input runs dry.
pub fn run_prime_prompt<T, I, R, W>(
    primes: I,
    input: &mut R,
    output: &mut W,
) -> Result<u64, TrialRootError>
where
    T: PrimInt + Display,
    I: IntoIterator<Item = Result<T, TrialRootError>>,
    R: BufRead,
    W: Write,
{
    let mut printed = 0u64;
    let mut line = String::new();

    for prime in primes {
        let prime = prime?;
        write!(output, "Prime: {}\n{}", prime, CONTINUE_PROMPT)?;
        output.flush()?;
        printed += 1;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            tracing::info!(printed, "End of input, stopping enumeration");
            return Ok(printed);
        }
    }

    Ok(printed)
}

/// Prompts for one integer and prints its floor square root.
pub fn run_sqrt_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SqrtReport, TrialRootError> {
    write!(output, "{}", SQRT_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TrialRootError::InvalidInput("no integer was entered".into()));
    }

    let trimmed = line.trim();
    let num: i64 = trimmed.parse().map_err(|e| {
        tracing::warn!(input = trimmed, "Rejected non-integer input: {}", e);
        TrialRootError::InvalidInput(format!("{:?} is not an integer", trimmed))
    })?;

    let root = int_sqrt(num)?;
    tracing::debug!(num, root, "Computed integer square root");
    writeln!(output, "{}的整数平方根是{}", num, root)?;

    Ok(SqrtReport { num, root })
}
