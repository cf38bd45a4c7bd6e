//! Read-only lookup tables shared by every request.
//!
//! The name table and the category table are curated independently, so a
//! garment added to the recommender must be added to both. [`Catalog::verify_coverage`]
//! is run at startup to catch a table that has fallen behind the rules.

pub mod categories;
pub mod names;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::item::GenericItem;
use crate::domain::milestone::{EnrichedItem, ShopName};
use crate::domain::shop::{known_shops, Shop, ShopId};
use crate::rules::age::AgeMonths;
use crate::rules::recommender::Recommender;
use crate::rules::temperature::MonthlyTemperatureTable;

use self::{categories::CategoryTable, names::NameTable};

/// Ages swept by the coverage check.
pub const COVERAGE_MAX_AGE_MONTHS: AgeMonths = 24;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item `{item}` has no category entry")]
    MissingCategory { item: String },
    #[error("item `{item}` has no name for shop `{shop}`")]
    MissingShopName { item: String, shop: String },
    #[error("no known shops are registered")]
    NoKnownShops,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub items_checked: usize,
    pub shops_checked: usize,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    names: NameTable,
    categories: CategoryTable,
    shops: Vec<Shop>,
    temperatures: MonthlyTemperatureTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn new(
        names: NameTable,
        categories: CategoryTable,
        shops: Vec<Shop>,
        temperatures: MonthlyTemperatureTable,
    ) -> Self {
        Self { names, categories, shops, temperatures }
    }

    pub fn standard() -> Self {
        Self::new(
            NameTable::standard(),
            CategoryTable::standard(),
            known_shops(),
            MonthlyTemperatureTable::default(),
        )
    }

    pub fn is_known_shop(&self, shop: &ShopId) -> bool {
        self.shops.iter().any(|known| &known.id == shop)
    }

    pub fn estimate_temperature(&self, date: NaiveDate) -> f64 {
        self.temperatures.estimate(date)
    }

    pub fn translate<'a>(&'a self, item: &'a str, shop: Option<&ShopId>) -> &'a str {
        match shop {
            Some(shop) => self.names.translate(item, shop.as_str()),
            None => item,
        }
    }

    pub fn category_of(&self, item: &str) -> &Category {
        self.categories.category_of(item)
    }

    /// Name at every known shop, in registry order.
    pub fn shop_names(&self, item: &str) -> Vec<ShopName> {
        self.shops
            .iter()
            .map(|shop| ShopName {
                shop_key: shop.id.to_string(),
                shop_display_name: shop.display_name.clone(),
                shop_name: self.names.translate(item, shop.id.as_str()).to_string(),
            })
            .collect()
    }

    pub fn other_shop_names(
        &self,
        item: &str,
        selected: Option<&ShopId>,
    ) -> BTreeMap<String, String> {
        self.shops
            .iter()
            .filter(|shop| Some(&shop.id) != selected)
            .map(|shop| {
                (shop.id.to_string(), self.names.translate(item, shop.id.as_str()).to_string())
            })
            .collect()
    }

    pub fn enrich(&self, item: GenericItem, shop: Option<&ShopId>) -> EnrichedItem {
        let universal_name = item.universal_name();
        let category = self.category_of(universal_name);

        EnrichedItem {
            universal_name: universal_name.to_string(),
            shop_specific_name: self.translate(universal_name, shop).to_string(),
            category_label: category.label.clone(),
            category_emoji: category.emoji.clone(),
            category_color: category.color.clone(),
            shop_names: self.shop_names(universal_name),
            other_shop_names: self.other_shop_names(universal_name, shop),
        }
    }

    /// Checks that every item the recommender can emit has a category and a
    /// name at every known shop.
    pub fn verify_coverage(
        &self,
        recommender: &dyn Recommender,
    ) -> Result<CoverageReport, CatalogError> {
        if self.shops.is_empty() {
            return Err(CatalogError::NoKnownShops);
        }

        let emitted = reachable_items(recommender);
        for item in &emitted {
            let name = item.universal_name();
            if self.categories.lookup(name).is_none() {
                return Err(CatalogError::MissingCategory { item: name.to_string() });
            }
            for shop in &self.shops {
                if self.names.lookup(name, shop.id.as_str()).is_none() {
                    return Err(CatalogError::MissingShopName {
                        item: name.to_string(),
                        shop: shop.id.to_string(),
                    });
                }
            }
        }

        Ok(CoverageReport { items_checked: emitted.len(), shops_checked: self.shops.len() })
    }
}

/// Every item the recommender emits for ages 0..=24 and -10..=35 °C in half
/// degree steps, which lands exactly on each threshold.
fn reachable_items(recommender: &dyn Recommender) -> BTreeSet<GenericItem> {
    let temperatures = (0..=90).map(|step| -10.0 + f64::from(step) * 0.5);

    temperatures
        .flat_map(move |temperature| {
            (0..=COVERAGE_MAX_AGE_MONTHS)
                .flat_map(move |age| recommender.recommend(age, temperature))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use crate::domain::category::Category;
    use crate::domain::item::GenericItem;
    use crate::domain::shop::{known_shops, ShopId, NISHIMATSUYA, UNIQLO};
    use crate::rules::age::AgeMonths;
    use crate::rules::recommender::{LayeringRecommender, Recommender};
    use crate::rules::temperature::MonthlyTemperatureTable;

    use super::{categories::CategoryTable, names::NameTable, Catalog, CatalogError};

    #[test]
    fn standard_catalog_covers_every_recommended_item() {
        let report =
            Catalog::standard().verify_coverage(&LayeringRecommender).expect("coverage passes");

        assert_eq!(report.items_checked, GenericItem::ALL.len());
        assert_eq!(report.shops_checked, 3);
    }

    #[test]
    fn coverage_reports_missing_category() {
        let catalog = Catalog::new(
            NameTable::standard(),
            CategoryTable::new(BTreeMap::new()),
            known_shops(),
            MonthlyTemperatureTable::default(),
        );

        let error = catalog.verify_coverage(&LayeringRecommender).expect_err("should fail");
        assert!(matches!(error, CatalogError::MissingCategory { .. }));
    }

    #[test]
    fn coverage_reports_missing_shop_name() {
        let mut shops = known_shops();
        shops.push(crate::domain::shop::Shop {
            id: ShopId::new("babies_r_us"),
            display_name: "Babies".to_string(),
        });
        let catalog = Catalog::new(
            NameTable::standard(),
            CategoryTable::standard(),
            shops,
            MonthlyTemperatureTable::default(),
        );

        let error = catalog.verify_coverage(&LayeringRecommender).expect_err("should fail");
        assert!(matches!(
            error,
            CatalogError::MissingShopName { ref shop, .. } if shop == "babies_r_us"
        ));
    }

    #[test]
    fn coverage_only_checks_items_the_recommender_emits() {
        struct CoverallOnly;

        impl Recommender for CoverallOnly {
            fn recommend(&self, _age: AgeMonths, _temperature: f64) -> Vec<GenericItem> {
                vec![GenericItem::Coverall]
            }
        }

        let mut categories = BTreeMap::new();
        categories.insert(
            GenericItem::Coverall.universal_name().to_string(),
            Category::new("アウター", "🧥", "#EDE7F6"),
        );
        let catalog = Catalog::new(
            NameTable::standard(),
            CategoryTable::new(categories),
            known_shops(),
            MonthlyTemperatureTable::default(),
        );

        let report = catalog.verify_coverage(&CoverallOnly).expect("coverage passes");
        assert_eq!(report.items_checked, 1);
    }

    #[test]
    fn coverage_requires_known_shops() {
        let catalog = Catalog::new(
            NameTable::standard(),
            CategoryTable::standard(),
            Vec::new(),
            MonthlyTemperatureTable::default(),
        );

        assert_eq!(
            catalog.verify_coverage(&LayeringRecommender),
            Err(CatalogError::NoKnownShops)
        );
    }

    #[test]
    fn enrich_fills_names_and_category() {
        let catalog = Catalog::standard();
        let shop = ShopId::new(UNIQLO);
        let item = catalog.enrich(GenericItem::Bodysuit, Some(&shop));

        assert_eq!(item.universal_name, "ボディースーツ");
        assert_eq!(item.shop_specific_name, "クルーネックボディスーツ");
        assert_eq!(item.category_label, "ミドル");
        assert_eq!(item.shop_names.len(), 3);
        assert_eq!(item.shop_names[0].shop_key, NISHIMATSUYA);
        assert_eq!(item.shop_names[0].shop_display_name, "西松屋");
        assert!(!item.other_shop_names.contains_key(UNIQLO));
        assert_eq!(item.other_shop_names.len(), 2);
    }

    #[test]
    fn enrich_without_shop_uses_universal_name() {
        let catalog = Catalog::standard();
        let item = catalog.enrich(GenericItem::Coverall, None);

        assert_eq!(item.shop_specific_name, "カバーオール");
        assert_eq!(item.other_shop_names.len(), 3);
    }

    #[test]
    fn unknown_shop_is_not_an_error() {
        let catalog = Catalog::standard();
        let shop = ShopId::new("somewhere_else");

        assert!(!catalog.is_known_shop(&shop));
        assert_eq!(catalog.translate("ロンパース", Some(&shop)), "ロンパース");
        assert_eq!(catalog.enrich(GenericItem::Romper, Some(&shop)).other_shop_names.len(), 3);
    }

    #[test]
    fn temperature_comes_from_the_monthly_table() {
        let catalog = Catalog::standard();
        let date = NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date");
        assert_eq!(catalog.estimate_temperature(date), 6.0);
    }
}
