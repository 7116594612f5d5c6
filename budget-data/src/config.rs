//! Widget configuration embedded in the host page.
//!
//! The page may carry a JSON object under [`CONFIG_ELEMENT_ID`]. Every field is
//! optional, so an absent or empty config yields [`WidgetConfig::default`].
//!
//! ```json
//! {
//!   "data_endpoint": "/data",
//!   "locale": "pl",
//!   "years": [2023, 2024],
//!   "selected_year": 2024,
//!   "length_policy": "strict"
//! }
//! ```

use crate::error::{BudgetChartError, Result};
use crate::locale::Locale;
use crate::monthly::LengthPolicy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// DOM id of the `<script type="application/json">` holding the config.
pub const CONFIG_ELEMENT_ID: &str = "budget-chart-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Endpoint returning one year of monthly records.
    pub data_endpoint: String,
    /// Query parameter carrying the selected year.
    pub year_param: String,
    /// DOM id of the chart drawing surface.
    pub chart_id: String,
    /// DOM id of the year `<select>`.
    pub year_select_id: String,
    /// DOM id of the element holding the initial monthly payload.
    pub payload_id: String,
    pub locale: Locale,
    /// Years offered by the selector, in display order.
    #[serde(deserialize_with = "deserialize_years")]
    pub years: Vec<String>,
    /// Year whose data is in the initial payload.
    #[serde(deserialize_with = "deserialize_optional_year")]
    pub selected_year: Option<String>,
    pub length_policy: LengthPolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            data_endpoint: "/data".to_string(),
            year_param: "year".to_string(),
            chart_id: "budgetChart".to_string(),
            year_select_id: "yearSelect".to_string(),
            payload_id: "monthly-data".to_string(),
            locale: Locale::default(),
            years: Vec::new(),
            selected_year: None,
            length_policy: LengthPolicy::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| BudgetChartError::Config(e.to_string()))
    }

    /// Fill in the year list and selection when the page did not provide them.
    ///
    /// With no years configured the selector offers `current_year` only. With
    /// no selection the last listed year is taken as the one already loaded.
    pub fn with_fallback_year(mut self, current_year: i32) -> Self {
        if self.years.is_empty() {
            self.years.push(current_year.to_string());
        }
        if self.selected_year.is_none() {
            self.selected_year = self.years.last().cloned();
        }
        if let Some(selected) = &self.selected_year {
            if !self.years.contains(selected) {
                let at = calendar_position(&self.years, selected);
                self.years.insert(at, selected.clone());
            }
        }
        self
    }

    /// Request URL for `year`, which must already be URI-component encoded.
    pub fn data_url(&self, encoded_year: &str) -> String {
        let separator = if self.data_endpoint.contains('?') {
            '&'
        } else {
            '?'
        };
        format!(
            "{}{}{}={}",
            self.data_endpoint, separator, self.year_param, encoded_year
        )
    }
}

/// Numeric years compare as numbers, anything else as plain text.
fn compare_years(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Index at which `year` keeps `years` in calendar order. A list whose first
/// entry is later than its last is treated as newest-first.
fn calendar_position(years: &[String], year: &str) -> usize {
    let newest_first = match (years.first(), years.last()) {
        (Some(first), Some(last)) => compare_years(first, last).is_gt(),
        _ => false,
    };
    years
        .iter()
        .position(|y| {
            let order = compare_years(y, year);
            if newest_first {
                order.is_lt()
            } else {
                order.is_gt()
            }
        })
        .unwrap_or(years.len())
}

fn year_string<E: serde::de::Error>(value: Value) -> std::result::Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("invalid year value: {}", other))),
    }
}

fn deserialize_years<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(year_string)
        .collect()
}

fn deserialize_optional_year<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => year_string::<D::Error>(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = WidgetConfig::from_json("  ").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.data_endpoint, "/data");
        assert_eq!(config.chart_id, "budgetChart");
        assert_eq!(config.year_select_id, "yearSelect");
        assert_eq!(config.length_policy, LengthPolicy::Strict);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = WidgetConfig::from_json(
            r#"{"locale": "pl", "years": [2022, "2023"], "selected_year": 2022, "length_policy": "lenient"}"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Polish);
        assert_eq!(config.years, vec!["2022".to_string(), "2023".to_string()]);
        assert_eq!(config.selected_year.as_deref(), Some("2022"));
        assert_eq!(config.length_policy, LengthPolicy::Lenient);
        assert_eq!(config.year_param, "year");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = WidgetConfig::from_json(r#"{"years": [true]}"#).unwrap_err();
        assert!(matches!(err, BudgetChartError::Config(_)));
        assert!(WidgetConfig::from_json("{").is_err());
    }

    #[test]
    fn fallback_year_fills_missing_selection() {
        let config = WidgetConfig::default().with_fallback_year(2024);
        assert_eq!(config.years, vec!["2024".to_string()]);
        assert_eq!(config.selected_year.as_deref(), Some("2024"));

        let config = WidgetConfig::from_json(r#"{"years": [2021, 2022]}"#)
            .unwrap()
            .with_fallback_year(2030);
        assert_eq!(config.selected_year.as_deref(), Some("2022"));
    }

    #[test]
    fn selected_year_is_offered_in_calendar_order() {
        let config = WidgetConfig::from_json(r#"{"years": [2021], "selected_year": 2019}"#)
            .unwrap()
            .with_fallback_year(2030);
        assert_eq!(config.years, vec!["2019".to_string(), "2021".to_string()]);

        let config = WidgetConfig::from_json(r#"{"years": [2020, 2022, 2024], "selected_year": 2023}"#)
            .unwrap()
            .with_fallback_year(2030);
        assert_eq!(config.years, ["2020", "2022", "2023", "2024"]);
    }

    #[test]
    fn newest_first_year_list_stays_newest_first() {
        let config = WidgetConfig::from_json(r#"{"years": [2024, 2022], "selected_year": 2023}"#)
            .unwrap()
            .with_fallback_year(2030);
        assert_eq!(config.years, ["2024", "2023", "2022"]);

        let config = WidgetConfig::from_json(r#"{"years": [2024, 2022], "selected_year": 2025}"#)
            .unwrap()
            .with_fallback_year(2030);
        assert_eq!(config.years[0], "2025");
    }

    #[test]
    fn data_url_appends_year_parameter() {
        let config = WidgetConfig::default();
        assert_eq!(config.data_url("2023"), "/data?year=2023");

        let config = WidgetConfig {
            data_endpoint: "/api/summary?user=7".to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(config.data_url("2023"), "/api/summary?user=7&year=2023");
    }
}
