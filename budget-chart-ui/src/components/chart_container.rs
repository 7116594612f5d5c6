//! Canvas host for the Chart.js bar chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the `<canvas>` Chart.js draws into
    pub id: String,
    /// A year change is being fetched
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 400)]
    pub min_height: u32,
}

/// The canvas, plus a small "updating" badge while new data is on its way.
///
/// The badge sits on top of the existing bars, so the previous year stays
/// visible until the new data arrives.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let height = format!("position: relative; min-height: {}px;", props.min_height);

    rsx! {
        div {
            style: "{height}",
            canvas { id: "{props.id}" }
            if props.loading {
                span {
                    style: "position: absolute; top: 0; right: 0; padding: 2px 8px; border-radius: 10px; background: #EEF4FB; color: #36A2EB; font-size: 11px;",
                    "updating…"
                }
            }
        }
    }
}
