//! Monthly budget data and chart model for the budget chart widget.
//!
//! This crate holds everything that does not need a browser:
//! - `monthly`: `MonthlyRecord` / `MonthlySeries` parsing and the length policy
//! - `projection`: splitting a series into income, expense and balance sequences
//! - `locale`: month and series labels
//! - `chart_model`: the Chart.js bar chart model and its in-place update payload
//! - `refresh`: request tokens and applying fetched responses
//! - `config`: the widget configuration embedded in the host page
//!
//! # Usage
//!
//! ```rust
//! use budget_data::chart_model::BarChartModel;
//! use budget_data::locale::Locale;
//! use budget_data::monthly::MonthlySeries;
//! use budget_data::projection::ProjectedSeries;
//!
//! let series = MonthlySeries::from_payload(
//!     r#"[{"income": 1000, "expense": 800, "balance": 200}]"#,
//! ).unwrap();
//! let model = BarChartModel::new(Locale::English, &ProjectedSeries::from_series(&series));
//! assert_eq!(model.labels().len(), 12);
//! ```

pub mod chart_model;
pub mod config;
pub mod error;
pub mod locale;
pub mod monthly;
pub mod projection;
pub mod refresh;

pub use error::{BudgetChartError, Result};
