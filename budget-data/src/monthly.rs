use crate::error::{BudgetChartError, Result};
use chrono::Month;
use serde::{Deserialize, Serialize};

/// Number of records in a complete monthly series.
pub const MONTHS_PER_YEAR: usize = 12;

/// One month's income, expense and balance figures.
///
/// `income` and `expense` are non-negative amounts; `balance` is signed.
/// None of them are validated here, the backend owns those rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// What to do with a fetched series that does not hold exactly twelve records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Reject the response and keep whatever the chart already shows.
    #[default]
    Strict,
    /// Apply the response as-is, truncated or short series included.
    Lenient,
}

/// Ordered monthly records, index 0 = January.
///
/// The order is never changed: index `i` is always plotted under month label `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries(Vec<MonthlyRecord>);

impl MonthlySeries {
    pub fn new(records: Vec<MonthlyRecord>) -> Self {
        Self(records)
    }

    /// Parse the JSON payload injected into the page at render time.
    ///
    /// The payload comes from the same server that renders the page, so its
    /// length is logged but not enforced.
    pub fn from_payload(raw: &str) -> Result<Self> {
        let series: MonthlySeries = serde_json::from_str(raw.trim())
            .map_err(|e| BudgetChartError::PayloadParse(e.to_string()))?;
        if !series.is_complete() {
            let last = series.iter_months().last().map_or("no month", |(m, _)| m.name());
            log::warn!(
                "initial payload has {} monthly records (through {}), expected {}",
                series.len(),
                last,
                MONTHS_PER_YEAR
            );
        }
        Ok(series)
    }

    /// Parse a `/data?year=` response body and apply `policy` to its length.
    pub fn from_response(body: &str, policy: LengthPolicy) -> Result<Self> {
        let series: MonthlySeries = serde_json::from_str(body)
            .map_err(|e| BudgetChartError::ResponseParse(e.to_string()))?;
        if series.is_complete() {
            return Ok(series);
        }
        match policy {
            LengthPolicy::Strict => Err(BudgetChartError::LengthMismatch {
                expected: MONTHS_PER_YEAR,
                found: series.len(),
            }),
            LengthPolicy::Lenient => {
                log::warn!(
                    "applying monthly data with {} records (expected {})",
                    series.len(),
                    MONTHS_PER_YEAR
                );
                Ok(series)
            }
        }
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when there is exactly one record per calendar month.
    pub fn is_complete(&self) -> bool {
        self.0.len() == MONTHS_PER_YEAR
    }

    /// Records paired with their calendar month. Extra records past December are skipped.
    pub fn iter_months(&self) -> impl Iterator<Item = (Month, &MonthlyRecord)> {
        self.0.iter().enumerate().filter_map(|(i, record)| {
            u8::try_from(i + 1)
                .ok()
                .and_then(|n| Month::try_from(n).ok())
                .map(|month| (month, record))
        })
    }
}
