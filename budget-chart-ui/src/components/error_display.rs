//! Inline alert for failed loads.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Extra line below the message, e.g. which data is still on screen
    #[props(default = String::new())]
    pub detail: String,
}

/// Alert banner with the failure on the first line and an optional note below.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin: 0 0 12px 0; padding: 10px 14px; border-left: 4px solid #D9534F; background: #FDF2F2; color: #8A1F1B; font-size: 14px;",
            div { "{props.message}" }
            if !props.detail.is_empty() {
                div {
                    style: "margin-top: 4px; font-size: 12px; opacity: 0.8;",
                    "{props.detail}"
                }
            }
        }
    }
}
