//! Dropdown selector for choosing the budget year.

use crate::state::AppState;
use dioxus::prelude::*;

/// Year dropdown selector.
/// Reads the offered years from the config in AppState and updates selected_year on change.
/// The value is passed on as-is; the backend decides what a valid year is.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let config = state.config.read().clone();
    let selected = (state.selected_year)();
    let select_id = config.year_select_id.clone();
    let year_label = config.locale.year_label();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::debug!("year selector changed to {}", value);
        state.selected_year.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{select_id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{year_label}: "
            }
            select {
                id: "{select_id}",
                onchange: on_change,
                for year in config.years.iter() {
                    option {
                        value: "{year}",
                        selected: *year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
