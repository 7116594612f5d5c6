//! Monthly Budget Chart
//!
//! Grouped bar chart of monthly income, expenses and balance for one year,
//! with a year selector that swaps the data in place.
//!
//! Data flow:
//! 1. The server renders the host page with the selected year's twelve
//!    monthly records in `<script id="monthly-data" type="application/json">`
//!    and, optionally, the widget config in `<script id="budget-chart-config">`.
//! 2. On mount: read the config, parse the payload, build the chart model and
//!    render it via Chart.js. A malformed payload leaves the chart unbuilt.
//! 3. On year change: fetch `/data?year=<year>` tagged with a request token.
//!    Only the response for the latest selection is applied, and it overwrites
//!    all three series of the existing chart.

use anyhow::Context;
use budget_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, YearSelector,
};
use budget_chart_ui::js_bridge;
use budget_chart_ui::state::AppState;
use budget_data::chart_model::BarChartModel;
use budget_data::config::{WidgetConfig, CONFIG_ELEMENT_ID};
use budget_data::monthly::MonthlySeries;
use budget_data::projection::ProjectedSeries;
use budget_data::refresh::{apply_response, RefreshOutcome};
use chrono::Datelike;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("budget-chart-root"))
        .launch(App);
}

/// Build the widget config from the embedded JSON, if the page has any.
///
/// A malformed config is logged and replaced by the defaults; it never stops
/// the chart from rendering.
fn resolve_config(raw: Option<&str>, current_year: i32) -> WidgetConfig {
    let config = match raw.map(WidgetConfig::from_json).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("{}, falling back to defaults", e);
            WidgetConfig::default()
        }
    };
    config.with_fallback_year(current_year)
}

/// Parse the server-injected payload and build the chart model from it.
fn build_initial_chart(config: &WidgetConfig, raw_payload: &str) -> anyhow::Result<BarChartModel> {
    let series = MonthlySeries::from_payload(raw_payload)
        .with_context(|| format!("initial data in #{} is unusable", config.payload_id))?;
    log::info!("initial payload parsed: {} monthly records", series.len());
    Ok(BarChartModel::new(
        config.locale,
        &ProjectedSeries::from_series(&series),
    ))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: read config and initial payload once on mount ───
    use_effect(move || {
        let raw_config = js_bridge::read_embedded_text(CONFIG_ELEMENT_ID).ok();
        let config = resolve_config(raw_config.as_deref(), chrono::Local::now().year());
        let year = config.selected_year.clone().unwrap_or_default();
        state.selected_year.set(year.clone());
        state.displayed_year.set(year);
        state.config.set(config.clone());

        let chart = js_bridge::read_embedded_text(&config.payload_id)
            .context("initial data missing from page")
            .and_then(|raw| build_initial_chart(&config, &raw));

        match chart {
            Ok(model) => {
                js_bridge::init_charts();
                js_bridge::render_bar_chart(&config.chart_id, &model.to_chart_config());
                state.chart.set(Some(model));
            }
            Err(e) => {
                log::error!("budget chart initialization failed: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: fetch and apply data whenever the selected year changes ───
    use_effect(move || {
        let year = (state.selected_year)();
        let loading = (state.loading)();

        if loading || year.is_empty() || state.chart.peek().is_none() {
            return;
        }
        let displayed = state.displayed_year.peek().clone();
        let Some(token) = state.refresh.write().select(&year, &displayed) else {
            // Back on the year already shown; whatever was in flight is void.
            state.refreshing.set(false);
            state.error_msg.set(None);
            return;
        };

        let config = state.config.peek().clone();
        state.refreshing.set(true);

        let url = config.data_url(&js_bridge::encode_query_value(&year));
        log::info!("request #{}: fetching {}", token.id(), url);

        spawn(async move {
            let response = js_bridge::fetch_text(&url).await;

            let tracker = *state.refresh.peek();
            if !tracker.is_current(token) {
                log::debug!("request #{} superseded, ignoring response", token.id());
                return;
            }

            let (outcome, payload) = {
                let mut chart = state.chart.write();
                let Some(model) = chart.as_mut() else {
                    return;
                };
                let outcome = apply_response(model, &tracker, token, response, config.length_policy);
                (outcome, model.series_payload())
            };

            match outcome {
                RefreshOutcome::Applied => {
                    js_bridge::update_bar_chart(&config.chart_id, &payload);
                    state.displayed_year.set(year);
                    state.error_msg.set(None);
                }
                RefreshOutcome::Stale => return,
                RefreshOutcome::Rejected(e) => {
                    log::warn!("request #{} for year {} failed: {}", token.id(), year, e);
                    state
                        .error_msg
                        .set(Some(format!("Could not load data for {}: {}", year, e)));
                }
            }
            state.refreshing.set(false);
        });
    });

    // ─── Render ───
    let config = state.config.read().clone();
    let displayed_year = (state.displayed_year)();
    let still_showing = if state.is_ready() && !displayed_year.is_empty() {
        format!("The chart still shows {}.", displayed_year)
    } else {
        String::new()
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    detail: still_showing.clone(),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.is_ready() {
                ChartHeader {
                    title: config.locale.chart_title().to_string(),
                    subtitle: displayed_year.clone(),
                }

                YearSelector {}

                ChartContainer {
                    id: config.chart_id.clone(),
                    loading: *state.refreshing.read(),
                    min_height: 400,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_data::chart_model::SeriesKind;
    use budget_data::locale::Locale;

    const PAYLOAD: &str = r#"[
        {"income": 1000, "expense": 800, "balance": 200},
        {"income": 1100, "expense": 900, "balance": 400},
        {"income": 1200, "expense": 700, "balance": 900},
        {"income": 1000, "expense": 800, "balance": 1100},
        {"income": 1000, "expense": 800, "balance": 1300},
        {"income": 1000, "expense": 800, "balance": 1500},
        {"income": 1000, "expense": 800, "balance": 1700},
        {"income": 1000, "expense": 800, "balance": 1900},
        {"income": 1000, "expense": 800, "balance": 2100},
        {"income": 1000, "expense": 800, "balance": 2300},
        {"income": 1000, "expense": 800, "balance": 2500},
        {"income": 1000, "expense": 800, "balance": 2700}
    ]"#;

    #[test]
    fn missing_config_uses_defaults_and_current_year() {
        let config = resolve_config(None, 2024);
        assert_eq!(config.data_endpoint, "/data");
        assert_eq!(config.selected_year.as_deref(), Some("2024"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let config = resolve_config(Some("{not json"), 2024);
        assert_eq!(config.chart_id, "budgetChart");
        assert_eq!(config.years, vec!["2024".to_string()]);
    }

    #[test]
    fn initial_chart_matches_payload() {
        let config = resolve_config(Some(r#"{"locale": "pl"}"#), 2024);
        let model = build_initial_chart(&config, PAYLOAD).unwrap();

        assert_eq!(model.labels()[0], "Styczeń");
        assert_eq!(model.dataset(SeriesKind::Income).data.len(), 12);
        let series = model.current_series();
        assert_eq!(
            [series.income[0], series.expense[0], series.balance[0]],
            [1000.0, 800.0, 200.0]
        );
        assert_eq!(model.dataset(SeriesKind::Balance).label, Locale::Polish.series_label(SeriesKind::Balance));
    }

    #[test]
    fn malformed_payload_stops_initialization() {
        let config = resolve_config(None, 2024);
        let err = build_initial_chart(&config, "[{\"income\": 1000,").unwrap_err();
        assert!(format!("{:#}", err).contains("#monthly-data"));
    }
}
