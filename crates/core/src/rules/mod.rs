pub mod age;
pub mod recommender;
pub mod size;
pub mod temperature;

pub use age::{calculate_age_in_months, AgeMonths};
pub use recommender::{recommend, LayeringRecommender, Recommender};
pub use size::estimate_size;
pub use temperature::{estimate_temperature, MonthlyTemperatureTable};
