//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use budget_data::chart_model::BarChartModel;
use budget_data::config::WidgetConfig;
use budget_data::refresh::RefreshTracker;
use dioxus::prelude::*;

/// Shared application state for the budget chart widget.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Widget configuration read from the page
    pub config: Signal<WidgetConfig>,
    /// Whether the initial payload is still being read
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Chart model (None until the initial payload parsed)
    pub chart: Signal<Option<BarChartModel>>,
    /// Year picked in the selector
    pub selected_year: Signal<String>,
    /// Year whose data the chart currently shows
    pub displayed_year: Signal<String>,
    /// Request token source for year refreshes
    pub refresh: Signal<RefreshTracker>,
    /// Whether a year refresh is in flight
    pub refreshing: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            config: Signal::new(WidgetConfig::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            chart: Signal::new(None),
            selected_year: Signal::new(String::new()),
            displayed_year: Signal::new(String::new()),
            refresh: Signal::new(RefreshTracker::default()),
            refreshing: Signal::new(false),
        }
    }

    /// True once the chart has been constructed from the initial payload.
    pub fn is_ready(&self) -> bool {
        self.chart.read().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
