//! Delayed square computation — the one asynchronous recipe in the crate.
//!
//! # Concurrency Model
//! Each call is a single logical task: validate, cooperatively suspend on a
//! wall-clock timer, resume with the result. Invocations share no state, so
//! concurrent calls need no locks and no ordering guarantees. Suspension uses
//! [`tokio::time::sleep`], which yields to the runtime instead of blocking
//! the thread; other tasks keep running during the delay.
//!
//! There is no cancellation surface of its own — dropping the future before
//! the timer fires abandons the computation, which is ordinary tokio
//! semantics, not a feature of this module.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

pub mod error;
pub use error::SquareError;

/// How long a successful computation suspends before resolving.
pub const SQUARE_DELAY: Duration = Duration::from_millis(1000);

/// Squares `n` after [`SQUARE_DELAY`].
///
/// Negative input fails with [`SquareError::NegativeInput`] before the first
/// await point: the check is synchronous and nothing is ever scheduled for a
/// rejected call.
pub async fn square_after_delay(n: f64) -> Result<f64, SquareError> {
    if n < 0.0 {
        warn!(n, "Rejecting negative input before scheduling");
        return Err(SquareError::NegativeInput(n));
    }

    debug!(n, delay_ms = SQUARE_DELAY.as_millis() as u64, "Scheduling square");
    sleep(SQUARE_DELAY).await;

    let result = n * n;
    debug!(n, result, "Square resolved");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    // start_paused freezes tokio's clock; sleeps auto-advance instantly, so
    // these tests assert virtual durations without real waiting.
    #[tokio::test(start_paused = true)]
    async fn resolves_with_the_square_after_the_delay() {
        let started = Instant::now();
        let result = square_after_delay(5.0).await;
        assert_eq!(result, Ok(25.0));
        assert_eq!(started.elapsed(), SQUARE_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn negative_input_fails_without_waiting() {
        let started = Instant::now();
        let result = square_after_delay(-1.0).await;
        assert_eq!(result, Err(SquareError::NegativeInput(-1.0)));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_is_valid_input() {
        assert_eq!(square_after_delay(0.0).await, Ok(0.0));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_invocations_are_independent() {
        let started = Instant::now();
        let (a, b, c) = tokio::join!(
            square_after_delay(2.0),
            square_after_delay(3.0),
            square_after_delay(-4.0),
        );
        assert_eq!(a, Ok(4.0));
        assert_eq!(b, Ok(9.0));
        assert_eq!(c, Err(SquareError::NegativeInput(-4.0)));
        // The delays overlap instead of stacking up.
        assert_eq!(started.elapsed(), SQUARE_DELAY);
    }
}
