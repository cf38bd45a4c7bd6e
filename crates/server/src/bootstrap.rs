use std::sync::Arc;

use babywear_core::catalog::{Catalog, CatalogError};
use babywear_core::config::AppConfig;
use babywear_core::rules::LayeringRecommender;
use babywear_core::service::RecommendationService;
use babywear_core::ShopId;
use thiserror::Error;
use tracing::{info, warn};

pub struct Application {
    pub config: AppConfig,
    pub service: RecommendationService,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("catalog consistency check failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Builds the shared lookup tables once and refuses to start if they do not
/// cover every item the recommender can emit.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let default_shop = config.recommender.default_shop.as_deref().map(ShopId::new);
    let service =
        RecommendationService::new(Arc::new(Catalog::standard()), Arc::new(LayeringRecommender))
            .with_default_shop(default_shop.clone());

    let report = service.verify_catalog()?;
    info!(
        event_name = "system.bootstrap.catalog_verified",
        correlation_id = "bootstrap",
        items_checked = report.items_checked,
        shops_checked = report.shops_checked,
        "catalog covers every recommendable item"
    );

    if let Some(shop) = default_shop.filter(|shop| !service.catalog().is_known_shop(shop)) {
        warn!(
            event_name = "system.bootstrap.unknown_default_shop",
            correlation_id = "bootstrap",
            default_shop = %shop,
            "default shop is not in the name table; universal names will be shown"
        );
    }

    Ok(Application { config, service })
}
