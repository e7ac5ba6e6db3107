use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::{MongoUserInserter, MongoUserReader, UserDocument};
use crate::backend::database::{DatabaseBackendConfig, UnifiedUserInsertOps, UnifiedUserReadOps};
use crate::backend::{Backend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// MongoDB storage backend
pub struct MongoBackend {
    client: Client,
    database_name: String,
    collection: Collection<UserDocument>,
    user_insert_ops: UnifiedUserInsertOps<MongoUserInserter>,
    user_read_ops: UnifiedUserReadOps<MongoUserReader>,
}

impl MongoBackend {
    /// Create a new MongoDB backend from a connected client
    pub fn new(client: Client, config: &DatabaseBackendConfig) -> Self {
        let collection = client
            .database(&config.database_name)
            .collection::<UserDocument>(&config.table_name);

        Self {
            user_insert_ops: UnifiedUserInsertOps::new(
                MongoUserInserter::new(collection.clone()),
                config.operation_timeout(),
            ),
            user_read_ops: UnifiedUserReadOps::new(
                MongoUserReader::new(collection.clone_with_type::<Document>()),
                config.operation_timeout(),
            ),
            client,
            database_name: config.database_name.clone(),
            collection,
        }
    }

    pub fn collection(&self) -> &Collection<UserDocument> {
        &self.collection
    }

    pub fn user_insert_ops(&self) -> &UnifiedUserInsertOps<MongoUserInserter> {
        &self.user_insert_ops
    }
}

#[async_trait]
impl Backend for MongoBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let mut options = ClientOptions::parse(&config.connection_url)
            .await
            .map_err(|e| AppError::Configuration(format!("Invalid MongoDB URL: {}", e)))?;
        options.max_pool_size = Some(config.max_connections);
        options.connect_timeout = Some(config.connection_timeout());
        options.server_selection_timeout = Some(config.connection_timeout());

        let client = Client::with_options(options)
            .map_err(|e| AppError::Database(format!("Failed to create MongoDB client: {}", e)))?;

        tracing::info!(
            database = %config.database_name,
            collection = %config.table_name,
            "connected to MongoDB"
        );
        Ok(Self::new(client, config))
    }

    async fn health_check(&self) -> AppResult<()> {
        self.client
            .database(&self.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.collection).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}

#[async_trait]
impl UserBackend for MongoBackend {
    async fn add_user(&self, user: &User) -> AppResult<User> {
        self.user_insert_ops.create_user(user).await
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.user_read_ops.find_all_users().await
    }
}
