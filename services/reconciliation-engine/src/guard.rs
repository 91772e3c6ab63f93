//! Bounded store calls and failure surfacing

use std::future::Future;
use std::time::Duration;
use tracing::error;
use types::errors::{ReconcileError, StoreError};

/// Run a store call under a timeout
pub(crate) async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout {
            millis: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

/// Log a store failure with its operation and convert it for the caller
///
/// The returned error names the operation only; the cause stays in the log.
pub(crate) fn surface(operation: &'static str, err: StoreError) -> ReconcileError {
    error!(operation, error = %err, "Store call failed");
    ReconcileError::Unavailable { operation }
}

/// Current time as Unix nanos
pub(crate) fn now_nanos() -> i64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_bounded_times_out() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, StoreError>(())
        };

        let err = bounded(Duration::from_millis(250), slow).await.unwrap_err();
        assert_eq!(err, StoreError::Timeout { millis: 250 });
    }

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let value = bounded(Duration::from_secs(1), async { Ok::<_, StoreError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_surface_keeps_only_operation() {
        let err = surface("orders.insert", StoreError::Unavailable("connection refused".into()));
        assert_eq!(err, ReconcileError::Unavailable { operation: "orders.insert" });
        assert!(!err.to_string().contains("connection refused"));
    }
}
