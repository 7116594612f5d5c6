//! Chart.js model for the grouped monthly bar chart.
//!
//! `BarChartModel` is the Rust-side copy of the chart instance state. It
//! serializes to a Chart.js config for the first render, and to a bare series
//! payload for in-place updates, so the JS side never has to rebuild labels or
//! styling after a year change.

use crate::locale::Locale;
use crate::projection::ProjectedSeries;
use serde::Serialize;

/// Fill opacity shared by all bars.
const FILL_ALPHA: f64 = 0.5;
/// Width of the bar groups as a fraction of the category width.
const GROUP_WIDTH: f64 = 0.8;

/// The three plotted series, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Income,
    Expense,
    Balance,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Income, SeriesKind::Expense, SeriesKind::Balance];

    /// Base color: blue for income, red for expense, teal for balance.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SeriesKind::Income => (54, 162, 235),
            SeriesKind::Expense => (255, 99, 132),
            SeriesKind::Balance => (75, 192, 192),
        }
    }

    fn rgba(self, alpha: f64) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }

    fn values(self, projected: &ProjectedSeries) -> &[f64] {
        match self {
            SeriesKind::Income => &projected.income,
            SeriesKind::Expense => &projected.expense,
            SeriesKind::Balance => &projected.balance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDataset {
    pub label: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub data: Vec<f64>,
}

impl BarDataset {
    fn new(locale: Locale, kind: SeriesKind, data: Vec<f64>) -> Self {
        Self {
            label: locale.series_label(kind).to_string(),
            background_color: kind.rgba(FILL_ALPHA),
            border_color: kind.rgba(1.0),
            border_width: 1,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupOptions {
    group_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueAxis {
    begin_at_zero: bool,
    min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Scales {
    y: ValueAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartOptions {
    index_axis: &'static str,
    group: GroupOptions,
    scales: Scales,
}

/// Grouped bar chart with a fixed month axis and three datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartModel {
    #[serde(rename = "type")]
    chart_type: &'static str,
    data: ChartData,
    options: ChartOptions,
}

impl BarChartModel {
    pub fn new(locale: Locale, projected: &ProjectedSeries) -> Self {
        let datasets = SeriesKind::ALL
            .iter()
            .map(|&kind| BarDataset::new(locale, kind, kind.values(projected).to_vec()))
            .collect();

        Self {
            chart_type: "bar",
            data: ChartData {
                labels: locale.month_labels(),
                datasets,
            },
            options: ChartOptions {
                index_axis: "x",
                group: GroupOptions {
                    group_width: GROUP_WIDTH,
                },
                scales: Scales {
                    y: ValueAxis {
                        begin_at_zero: true,
                        min: 0.0,
                    },
                },
            },
        }
    }

    /// Overwrite all three datasets with `projected`. Labels and styling are untouched.
    pub fn replace_series(&mut self, projected: &ProjectedSeries) {
        for (dataset, kind) in self.data.datasets.iter_mut().zip(SeriesKind::ALL) {
            dataset.data = kind.values(projected).to_vec();
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    pub fn dataset(&self, kind: SeriesKind) -> &BarDataset {
        &self.data.datasets[kind as usize]
    }

    /// The series currently held by the chart, as a projection.
    pub fn current_series(&self) -> ProjectedSeries {
        ProjectedSeries {
            income: self.dataset(SeriesKind::Income).data.clone(),
            expense: self.dataset(SeriesKind::Expense).data.clone(),
            balance: self.dataset(SeriesKind::Balance).data.clone(),
        }
    }

    /// Lower bound of the value axis. The axis never drops below zero.
    pub fn value_axis_min(&self) -> f64 {
        self.options.scales.y.min
    }

    /// Full Chart.js config for the initial render.
    pub fn to_chart_config(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// `[[income...], [expense...], [balance...]]` for an in-place update.
    pub fn series_payload(&self) -> String {
        let series: Vec<&[f64]> = self
            .data
            .datasets
            .iter()
            .map(|d| d.data.as_slice())
            .collect();
        serde_json::to_string(&series).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monthly::tests::sample_series;
    use crate::monthly::{MonthlyRecord, MonthlySeries};
    use serde_json::Value;

    fn sample_model() -> BarChartModel {
        BarChartModel::new(Locale::English, &ProjectedSeries::from_series(&sample_series()))
    }

    #[test]
    fn model_has_month_labels_and_three_series() {
        let model = sample_model();
        assert_eq!(model.labels().len(), 12);
        assert_eq!(model.labels()[0], "January");
        assert_eq!(model.dataset(SeriesKind::Income).label, "Income");
        assert_eq!(model.dataset(SeriesKind::Expense).label, "Expense");
        assert_eq!(model.dataset(SeriesKind::Balance).label, "Balance");
        assert_eq!(model.dataset(SeriesKind::Income).data[0], 1000.0);
    }

    #[test]
    fn label_and_value_stay_aligned() {
        let model = sample_model();
        let march = model.labels().iter().position(|l| l == "March").unwrap();
        assert_eq!(model.dataset(SeriesKind::Income).data[march], 3000.0);
    }

    #[test]
    fn series_colors_follow_kind() {
        let model = sample_model();
        let income = model.dataset(SeriesKind::Income);
        assert_eq!(income.background_color, "rgba(54, 162, 235, 0.5)");
        assert_eq!(income.border_color, "rgba(54, 162, 235, 1)");
        assert_eq!(income.border_width, 1);
        assert_eq!(
            model.dataset(SeriesKind::Expense).background_color,
            "rgba(255, 99, 132, 0.5)"
        );
        assert_eq!(
            model.dataset(SeriesKind::Balance).border_color,
            "rgba(75, 192, 192, 1)"
        );
    }

    #[test]
    fn replace_series_overwrites_everything() {
        let mut model = sample_model();
        let replacement = MonthlySeries::new(vec![
            MonthlyRecord {
                income: 5.0,
                expense: 6.0,
                balance: -1.0,
            };
            12
        ]);
        let projected = ProjectedSeries::from_series(&replacement);
        model.replace_series(&projected);

        assert_eq!(model.current_series(), projected);
        assert_eq!(model.labels()[11], "December");
    }

    #[test]
    fn replace_with_empty_series_leaves_empty_datasets() {
        let mut model = sample_model();
        model.replace_series(&ProjectedSeries::default());
        assert!(model.current_series().is_empty());
        assert_eq!(model.labels().len(), 12);
    }

    #[test]
    fn value_axis_starts_at_zero_even_for_negative_balances() {
        let negative = MonthlySeries::new(vec![
            MonthlyRecord {
                income: 0.0,
                expense: 100.0,
                balance: -100.0,
            };
            12
        ]);
        let model = BarChartModel::new(Locale::Polish, &ProjectedSeries::from_series(&negative));
        assert_eq!(model.value_axis_min(), 0.0);

        let config: Value = serde_json::from_str(&model.to_chart_config()).unwrap();
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], Value::Bool(true));
        assert_eq!(config["options"]["scales"]["y"]["min"].as_f64(), Some(0.0));
    }

    #[test]
    fn chart_config_uses_chart_js_shape() {
        let config: Value = serde_json::from_str(&sample_model().to_chart_config()).unwrap();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["indexAxis"], "x");
        assert_eq!(config["options"]["group"]["groupWidth"].as_f64(), Some(0.8));
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 12);
        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 3);
        assert_eq!(datasets[0]["backgroundColor"], "rgba(54, 162, 235, 0.5)");
        assert_eq!(datasets[2]["data"][0].as_f64(), Some(200.0));
    }

    #[test]
    fn series_payload_lists_datasets_in_order() {
        let payload: Vec<Vec<f64>> = serde_json::from_str(&sample_model().series_payload()).unwrap();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload[0][0], 1000.0);
        assert_eq!(payload[1][0], 800.0);
        assert_eq!(payload[2][0], 200.0);
    }
}
