use std::sync::Arc;

use crate::backend::{BackendFactory, StorageBackend};
use crate::config::AppConfig;
use crate::error::AppResult;

/// Connect the configured backend and make sure its schema exists
pub async fn setup_backend(config: &AppConfig) -> AppResult<Arc<dyn StorageBackend>> {
    let backend_config = config.to_backend_config()?;
    let backend = BackendFactory::create(&backend_config).await?;

    backend.init_schema().await?;
    backend.health_check().await?;

    tracing::info!(
        backend = %config.backend.backend_type,
        table = %backend_config.table_name,
        "storage backend ready"
    );
    Ok(backend)
}
