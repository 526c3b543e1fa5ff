//! Retry handling for report sinks
//!
//! A failing sink is retried with exponential backoff. The rows stay borrowed
//! for the whole loop, so nothing is lost between attempts.

use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

use super::ReportSink;
use crate::error::SinkError;
use crate::models::EmployeeReportRow;

/// Write `rows` to `sink`, retrying up to `max_retries` times
///
/// # Arguments
/// * `sink` - The sink to write to
/// * `rows` - The assembled report
/// * `max_retries` - Retries after the first attempt
/// * `base_delay` - Delay before the first retry; doubles per attempt, capped at 8x
///
/// # Returns
/// `Ok` once a write succeeds, or `SinkError::RetriesExhausted` carrying the
/// last failure
pub async fn write_with_retry(
    sink: &dyn ReportSink,
    rows: &[EmployeeReportRow],
    max_retries: u32,
    base_delay: Duration,
) -> Result<(), SinkError> {
    let mut attempt = 0;

    loop {
        if attempt > 0 {
            let delay = backoff_delay(base_delay, attempt);
            warn!(
                "Retrying write to {} after {:?} (attempt {}/{})",
                sink.describe(),
                delay,
                attempt,
                max_retries
            );
            sleep(delay).await;
        }

        match sink.write(rows).await {
            Ok(()) => return Ok(()),
            Err(err) if attempt < max_retries => {
                warn!("Write to {} failed: {}", sink.describe(), err);
                attempt += 1;
            }
            Err(err) if max_retries == 0 => return Err(err),
            Err(err) => {
                return Err(SinkError::RetriesExhausted {
                    target: sink.describe(),
                    attempts: attempt + 1,
                    last_error: err.to_string(),
                })
            }
        }
    }
}

/// Delay before retry number `attempt` (1-based), saturating at `Duration::MAX`
fn backoff_delay(base_delay: Duration, attempt: u32) -> Duration {
    base_delay.saturating_mul(2u32.pow(attempt.saturating_sub(1).min(3)))
}
