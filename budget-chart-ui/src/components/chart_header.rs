//! Title row above the chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Shown after the title, e.g. the year currently on screen
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        header {
            style: "display: flex; align-items: baseline; gap: 10px; border-bottom: 1px solid #E0E0E0; padding-bottom: 6px; margin-bottom: 10px;",
            h2 {
                style: "margin: 0; font-size: 18px; font-weight: 600;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                span {
                    style: "font-size: 14px; color: #555;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
