use chrono::{Datelike, Days, Months, NaiveDate};

use crate::catalog::Catalog;
use crate::domain::milestone::Milestone;
use crate::domain::shop::ShopId;
use crate::rules::age::AgeMonths;
use crate::rules::recommender::{LayeringRecommender, Recommender};
use crate::rules::size::estimate_size;

/// Last age, in months, included in a projection.
pub const MILESTONE_HORIZON_MONTHS: AgeMonths = 24;

/// Walks ages 0 through [`MILESTONE_HORIZON_MONTHS`] and dresses the child for
/// the average temperature of the month each age is reached.
pub struct MilestoneProjector<'a> {
    catalog: &'a Catalog,
    recommender: &'a dyn Recommender,
}

impl<'a> MilestoneProjector<'a> {
    pub fn new(catalog: &'a Catalog, recommender: &'a dyn Recommender) -> Self {
        Self { catalog, recommender }
    }

    pub fn project(&self, birth_date: NaiveDate, shop: Option<&ShopId>) -> Vec<Milestone> {
        (0..=MILESTONE_HORIZON_MONTHS)
            .map(|age_in_months| {
                let target_date = add_months(birth_date, age_in_months);
                let temperature = self.catalog.estimate_temperature(target_date);
                let items = self
                    .recommender
                    .recommend(age_in_months, temperature)
                    .into_iter()
                    .map(|item| self.catalog.enrich(item, shop))
                    .collect();

                Milestone {
                    age_in_months,
                    target_date,
                    temperature,
                    size: estimate_size(age_in_months).to_string(),
                    items,
                }
            })
            .collect()
    }
}

/// Projection with the standard catalog and no shop selected.
pub fn project(birth_date: NaiveDate) -> Vec<Milestone> {
    let catalog = Catalog::standard();
    MilestoneProjector::new(&catalog, &LayeringRecommender).project(birth_date, None)
}

/// Calendar month addition that keeps the day offset from the first of the
/// month, so a day past the end of the target month rolls into the next one
/// (Aug 31 + 1 month = Oct 1). The child is exactly `months` old on the result.
pub fn add_months(date: NaiveDate, months: AgeMonths) -> NaiveDate {
    let day_offset = Days::new(u64::from(date.day0()));
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(months)))
        .and_then(|first| first.checked_add_days(day_offset))
        .unwrap_or(NaiveDate::MAX)
}
