//! Month and series labels for the supported deployment locales.

use crate::chart_model::SeriesKind;
use crate::monthly::MONTHS_PER_YEAR;
use chrono::Month;
use serde::{Deserialize, Serialize};

const POLISH_MONTHS: [&str; MONTHS_PER_YEAR] = [
    "Styczeń",
    "Luty",
    "Marzec",
    "Kwiecień",
    "Maj",
    "Czerwiec",
    "Lipiec",
    "Sierpień",
    "Wrzesień",
    "Październik",
    "Listopad",
    "Grudzień",
];

/// Language used for axis and legend labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pl")]
    Polish,
}

impl Locale {
    pub fn month_label(self, month: Month) -> &'static str {
        match self {
            Locale::English => month.name(),
            Locale::Polish => POLISH_MONTHS[month.number_from_month() as usize - 1],
        }
    }

    /// The fixed category axis, January first.
    pub fn month_labels(self) -> Vec<String> {
        let mut labels = Vec::with_capacity(MONTHS_PER_YEAR);
        let mut month = Month::January;
        for _ in 0..MONTHS_PER_YEAR {
            labels.push(self.month_label(month).to_string());
            month = month.succ();
        }
        labels
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            Locale::English => "Monthly budget",
            Locale::Polish => "Budżet miesięczny",
        }
    }

    pub fn year_label(self) -> &'static str {
        match self {
            Locale::English => "Year",
            Locale::Polish => "Rok",
        }
    }

    pub fn series_label(self, kind: SeriesKind) -> &'static str {
        match (self, kind) {
            (Locale::English, SeriesKind::Income) => "Income",
            (Locale::English, SeriesKind::Expense) => "Expense",
            (Locale::English, SeriesKind::Balance) => "Balance",
            (Locale::Polish, SeriesKind::Income) => "Dochody",
            (Locale::Polish, SeriesKind::Expense) => "Wydatki",
            (Locale::Polish, SeriesKind::Balance) => "Stan konta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_labels_start_in_january() {
        let labels = Locale::English.month_labels();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "January");
        assert_eq!(labels[11], "December");
    }

    #[test]
    fn polish_labels_match_calendar_order() {
        let labels = Locale::Polish.month_labels();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Styczeń");
        assert_eq!(labels[9], "Październik");
        assert_eq!(labels[11], "Grudzień");
    }

    #[test]
    fn series_labels_per_locale() {
        assert_eq!(Locale::English.series_label(SeriesKind::Income), "Income");
        assert_eq!(Locale::English.series_label(SeriesKind::Balance), "Balance");
        assert_eq!(Locale::Polish.series_label(SeriesKind::Expense), "Wydatki");
        assert_eq!(Locale::Polish.series_label(SeriesKind::Balance), "Stan konta");
    }

    #[test]
    fn widget_text_per_locale() {
        assert_eq!(Locale::English.year_label(), "Year");
        assert_eq!(Locale::Polish.year_label(), "Rok");
        assert_eq!(Locale::Polish.chart_title(), "Budżet miesięczny");
    }

    #[test]
    fn deserializes_from_config_codes() {
        let locale: Locale = serde_json::from_str("\"pl\"").unwrap();
        assert_eq!(locale, Locale::Polish);
        assert!(serde_json::from_str::<Locale>("\"de\"").is_err());
    }
}
