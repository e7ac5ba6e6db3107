use std::future::Future;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Run a storage call under a deadline.
///
/// On expiry the inner future is dropped, which cancels the driver call.
pub async fn with_deadline<T, F>(operation: &str, limit: Duration, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_ms = limit.as_millis() as u64, "storage call timed out");
            Err(AppError::Timeout(format!(
                "{} exceeded {}ms",
                operation,
                limit.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let result = with_deadline("add user", Duration::from_secs(1), async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let result: AppResult<()> = with_deadline("add user", Duration::from_secs(1), async {
            Err(AppError::Database("boom".to_string()))
        })
        .await;
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_expired_deadline() {
        let result: AppResult<()> = with_deadline("get all users", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_eq!(err.to_string(), "Timeout: get all users exceeded 10ms");
    }
}
