//! Catalog read service implementation.

use crate::cache::{cache_keys, CacheExt, CacheStore, ABSOLUTE_TTL, SLIDING_TTL};
use crate::catalog_read::CatalogReadService;
use crate::dto::{ProductResponse, ResponseFormat};
use async_trait::async_trait;
use mercato_config::CacheConfig;
use mercato_core::{CatalogError, CatalogResult, ProductId};
use mercato_repository::ProductRepository;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cache-aside read service over the product catalog.
#[derive(Component)]
#[shaku(interface = CatalogReadService)]
pub struct CatalogReadServiceImpl {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,
    /// Absolute expiration for the cached collection.
    #[shaku(default = ABSOLUTE_TTL)]
    absolute_ttl: Duration,
    /// Sliding expiration window for the cached collection.
    #[shaku(default = SLIDING_TTL)]
    sliding_ttl: Duration,
}

impl CatalogReadServiceImpl {
    /// Creates a new read service with the default TTL pairing.
    #[must_use]
    pub fn new(product_repository: Arc<dyn ProductRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            product_repository,
            cache,
            absolute_ttl: ABSOLUTE_TTL,
            sliding_ttl: SLIDING_TTL,
        }
    }

    /// Creates a read service with the configured TTL pairing.
    #[must_use]
    pub fn with_ttls(
        product_repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheStore>,
        config: &CacheConfig,
    ) -> Self {
        Self {
            product_repository,
            cache,
            absolute_ttl: config.absolute_ttl(),
            sliding_ttl: config.sliding_ttl(),
        }
    }
}

#[async_trait]
impl CatalogReadService for CatalogReadServiceImpl {
    async fn list_products(&self, format: Option<&str>) -> CatalogResult<Vec<ProductResponse>> {
        debug!("Listing products, format hint: {:?}", format);

        if let Some(hint) = format {
            // Rejecting unknown hints here keeps the contract in one place;
            // rendering itself is the presentation layer's job.
            ResponseFormat::parse(hint)?;
        }

        let cache_key = cache_keys::all_products();

        // A cache outage degrades to a direct store read, never a failure.
        match self.cache.get::<Vec<ProductResponse>>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("Returning all products from cache");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => warn!("Cache read failed, falling back to store: {}", e),
        }

        let records = self.product_repository.find_all().await?;
        let products: Vec<ProductResponse> =
            records.into_iter().map(ProductResponse::from).collect();

        // Cache write failures are ignored; the data is still valid.
        let _ = self
            .cache
            .set(&cache_key, &products, self.absolute_ttl, self.sliding_ttl)
            .await;

        info!("Fetched {} products from store and cached them", products.len());
        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse> {
        debug!("Getting product: {}", id);

        let record = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        Ok(ProductResponse::from(record))
    }
}

impl std::fmt::Debug for CatalogReadServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogReadServiceImpl").finish_non_exhaustive()
    }
}
