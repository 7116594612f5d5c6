//! Placeholder shown while the widget boots.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Reading monthly figures…".to_string())]
    pub message: String,
}

/// Shown until the embedded payload has been read.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            role: "status",
            style: "min-height: 400px; display: grid; place-items: center; color: #888; font-style: italic;",
            "{props.message}"
        }
    }
}
