//! Shared Dioxus components and Chart.js bridge for the monthly budget chart.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js and the page (`js_sys::eval()`, `web_sys` fetch)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (year selector, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
