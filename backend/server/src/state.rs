use std::sync::Arc;

use tracing::info;

use super::{
    config::Config,
    database::{RedisStore, init_redis},
    error::AppError,
    mock::MockStore,
    store::VlogStore,
};

pub struct State {
    pub config: Config,
    pub store: Arc<dyn VlogStore>,
}

impl State {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load()?;

        let store: Arc<dyn VlogStore> = match &config.mock_data {
            Some(path) => {
                info!("Serving mock data from {}", path.display());
                Arc::new(MockStore::from_file(path)?)
            }
            None => {
                info!("Connecting to Redis at {}", config.redis_url);
                Arc::new(RedisStore::new(init_redis(&config.redis_url).await?))
            }
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn VlogStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
