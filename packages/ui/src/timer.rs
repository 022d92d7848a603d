//! Platform-aware delay used for the post-registration redirect.

use std::time::Duration;

/// Sleep for `duration` on the current platform's timer.
///
/// Dropping the future cancels the wait, so a delay awaited inside a task
/// spawned by a component ends when that component is unmounted.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_sleep_waits_at_least_duration() {
        let start = Instant::now();
        sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_dropped_sleep_never_completes() {
        let pending = sleep(Duration::from_secs(60));
        let raced = tokio::time::timeout(Duration::from_millis(10), pending).await;
        assert!(raced.is_err());
    }
}
