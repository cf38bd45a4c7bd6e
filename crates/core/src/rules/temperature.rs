use chrono::{Datelike, NaiveDate};

/// Returned when a month has no entry in the table.
pub const FALLBACK_TEMPERATURE: f64 = 15.0;

// Tokyo-area monthly averages, January first.
const TOKYO_MONTHLY_AVERAGES: [f64; 12] =
    [5.0, 6.0, 9.0, 14.0, 18.0, 21.0, 25.0, 26.0, 23.0, 18.0, 12.0, 8.0];

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyTemperatureTable {
    averages: [f64; 12],
}

impl Default for MonthlyTemperatureTable {
    fn default() -> Self {
        Self::new(TOKYO_MONTHLY_AVERAGES)
    }
}

impl MonthlyTemperatureTable {
    pub fn new(averages: [f64; 12]) -> Self {
        Self { averages }
    }

    /// Average for a 1-based calendar month.
    pub fn for_month(&self, month: u32) -> f64 {
        month
            .checked_sub(1)
            .and_then(|index| self.averages.get(index as usize))
            .copied()
            .unwrap_or(FALLBACK_TEMPERATURE)
    }

    pub fn estimate(&self, date: NaiveDate) -> f64 {
        self.for_month(date.month())
    }
}

pub fn estimate_temperature(date: NaiveDate) -> f64 {
    MonthlyTemperatureTable::default().estimate(date)
}
