//! Projection of monthly records into the three plotted value sequences.

use crate::monthly::MonthlySeries;
use serde::Serialize;

/// Income, expense and balance values split into parallel sequences.
///
/// All three vectors have the length of the source series and keep its
/// index order, so `income[i]` belongs to the same month as `balance[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedSeries {
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
    pub balance: Vec<f64>,
}

impl ProjectedSeries {
    pub fn from_series(series: &MonthlySeries) -> Self {
        let records = series.records();
        Self {
            income: records.iter().map(|r| r.income).collect(),
            expense: records.iter().map(|r| r.expense).collect(),
            balance: records.iter().map(|r| r.balance).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.income.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
    }
}

impl From<&MonthlySeries> for ProjectedSeries {
    fn from(series: &MonthlySeries) -> Self {
        Self::from_series(series)
    }
}
