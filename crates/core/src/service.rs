//! Request-level orchestration shared by the HTTP server and the CLI.
//!
//! Validation happens here, before the rules run: a birth date after the
//! effective target date and malformed dates are rejected. Everything past
//! validation is total.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogError, CoverageReport};
use crate::domain::milestone::{EnrichedItem, Milestone};
use crate::domain::shop::ShopId;
use crate::errors::RequestError;
use crate::projection::MilestoneProjector;
use crate::rules::age::{calculate_age_in_months, AgeMonths};
use crate::rules::recommender::{LayeringRecommender, Recommender};
use crate::rules::size::estimate_size;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationRequest {
    pub birth_date: NaiveDate,
    pub target_date: Option<NaiveDate>,
    pub temperature: Option<f64>,
    pub target_shop: Option<ShopId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneRequest {
    pub birth_date: NaiveDate,
    pub target_shop: Option<ShopId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureSource {
    Provided,
    Estimated,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub age_in_months: AgeMonths,
    pub target_date: NaiveDate,
    pub temperature: f64,
    pub temperature_source: TemperatureSource,
    pub size: String,
    pub target_shop: Option<ShopId>,
    pub items: Vec<EnrichedItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneResponse {
    pub birth_date: NaiveDate,
    pub target_shop: Option<ShopId>,
    pub milestones: Vec<Milestone>,
}

#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    recommender: Arc<dyn Recommender>,
    default_shop: Option<ShopId>,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::standard()), Arc::new(LayeringRecommender))
    }
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>, recommender: Arc<dyn Recommender>) -> Self {
        Self { catalog, recommender, default_shop: None }
    }

    /// Shop used when a request does not name one.
    pub fn with_default_shop(mut self, shop: Option<ShopId>) -> Self {
        self.default_shop = shop;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn verify_catalog(&self) -> Result<CoverageReport, CatalogError> {
        self.catalog.verify_coverage(self.recommender.as_ref())
    }

    /// Recommends items for the child's age on the target date, which defaults
    /// to `today`.
    pub fn recommend(
        &self,
        request: RecommendationRequest,
        today: NaiveDate,
    ) -> Result<Recommendation, RequestError> {
        let target_date = request.target_date.unwrap_or(today);
        if request.birth_date > target_date {
            debug!(
                event_name = "service.recommend.rejected",
                birth_date = %request.birth_date,
                target_date = %target_date,
                "birth date is after the target date"
            );
            return Err(RequestError::BirthDateAfterTarget {
                birth_date: request.birth_date,
                target_date,
            });
        }

        let age_in_months = calculate_age_in_months(request.birth_date, target_date);
        let (temperature, temperature_source) = match request.temperature {
            Some(value) => (value, TemperatureSource::Provided),
            None => (self.catalog.estimate_temperature(target_date), TemperatureSource::Estimated),
        };

        let shop = self.effective_shop(request.target_shop);
        let items: Vec<EnrichedItem> = self
            .recommender
            .recommend(age_in_months, temperature)
            .into_iter()
            .map(|item| self.catalog.enrich(item, shop.as_ref()))
            .collect();

        debug!(
            event_name = "service.recommend.completed",
            age_in_months,
            temperature,
            temperature_source = ?temperature_source,
            item_count = items.len(),
            "recommendation computed"
        );

        Ok(Recommendation {
            age_in_months,
            target_date,
            temperature,
            temperature_source,
            size: estimate_size(age_in_months).to_string(),
            target_shop: shop,
            items,
        })
    }

    pub fn milestones(&self, request: MilestoneRequest) -> MilestoneResponse {
        let shop = self.effective_shop(request.target_shop);
        let milestones = MilestoneProjector::new(&self.catalog, self.recommender.as_ref())
            .project(request.birth_date, shop.as_ref());

        debug!(
            event_name = "service.milestones.completed",
            birth_date = %request.birth_date,
            milestone_count = milestones.len(),
            "milestones projected"
        );

        MilestoneResponse { birth_date: request.birth_date, target_shop: shop, milestones }
    }

    fn effective_shop(&self, requested: Option<ShopId>) -> Option<ShopId> {
        requested.filter(|shop| !shop.as_str().is_empty()).or_else(|| self.default_shop.clone())
    }
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, RequestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RequestError::MissingParameter { field });
    }

    let well_formed = trimmed.len() == 10
        && trimmed.char_indices().all(|(index, ch)| match index {
            4 | 7 => ch == '-',
            _ => ch.is_ascii_digit(),
        });
    if !well_formed {
        return Err(RequestError::InvalidDate { field, value: raw.to_string() });
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| RequestError::InvalidDate { field, value: raw.to_string() })
}

pub fn parse_temperature(field: &'static str, raw: &str) -> Result<f64, RequestError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RequestError::InvalidTemperature { field, value: raw.to_string() })
}

/// Blank shop ids mean "no shop selected".
pub fn parse_shop(raw: Option<&str>) -> Option<ShopId> {
    raw.map(ShopId::new).filter(|shop| !shop.as_str().is_empty())
}
