pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod projection;
pub mod rules;
pub mod service;

pub use catalog::{Catalog, CatalogError, CoverageReport};
pub use domain::category::Category;
pub use domain::item::GenericItem;
pub use domain::milestone::{EnrichedItem, Milestone, ShopName};
pub use domain::shop::{known_shops, Shop, ShopId};
pub use errors::{ApplicationError, InterfaceError, RequestError};
pub use projection::{project, MilestoneProjector, MILESTONE_HORIZON_MONTHS};
pub use rules::{
    calculate_age_in_months, estimate_size, estimate_temperature, recommend, AgeMonths,
    LayeringRecommender, MonthlyTemperatureTable, Recommender,
};
pub use service::{
    MilestoneRequest, MilestoneResponse, Recommendation, RecommendationRequest,
    RecommendationService, TemperatureSource,
};
