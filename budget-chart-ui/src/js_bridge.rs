//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! The Chart.js glue lives in `assets/js/bar-chart.js` and is evaluated at
//! global scope once Chart.js itself has loaded. This module provides safe
//! Rust wrappers that serialize data and call those globals, plus the two
//! page-facing adapters the widget needs: reading server-injected JSON and
//! fetching a year of data.

use budget_data::BudgetChartError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Embed the Chart.js glue at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Quote `value` as a JS string literal.
pub fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Budget chart JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// How many 100ms polls `when_ready` makes before giving up (10 seconds).
const MAX_READY_POLLS: u32 = 100;

/// Script that polls every 100ms until `condition` holds, then runs `action`
/// once. After [`MAX_READY_POLLS`] failed checks it logs a warning and stops.
fn ready_poll_script(condition: &str, action: &str, label: &str) -> String {
    format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                if ({condition}) {{
                    clearInterval(poll);
                    try {{
                        {action}
                    }} catch(e) {{ console.error('[budget-chart] {label} error:', e); }}
                }} else if (++tries >= {MAX_READY_POLLS}) {{
                    clearInterval(poll);
                    console.warn('[budget-chart] {label} skipped: chart not ready after {MAX_READY_POLLS} tries');
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn when_ready(condition: &str, action: &str, label: &str) {
    call_js(&ready_poll_script(condition, action, label));
}

/// Initialize the chart glue with a wait-for-Chart.js polling loop.
///
/// `bar-chart.js` defines its functions via `function` declarations. They are
/// evaluated at global scope through an indirect `eval()` once Chart.js is
/// ready, then promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__budgetChartsReady) {{ window.__budgetChartScripts = {}; }}",
        js_string_literal(BAR_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__budgetChartsReady || window.__budgetChartsPending) return;
            window.__budgetChartsPending = true;
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__budgetChartScripts);
                    delete window.__budgetChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof updateBarChart !== 'undefined') window.updateBarChart = updateBarChart;
                    if (typeof hasBarChart !== 'undefined') window.hasBarChart = hasBarChart;
                    window.__budgetChartsReady = true;
                    console.log('Budget chart initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Mount a new bar chart into `container_id` from a full Chart.js config.
///
/// Waits for the glue script and the container DOM element before rendering.
pub fn render_bar_chart(container_id: &str, config_json: &str) {
    let id = js_string_literal(container_id);
    let config = js_string_literal(config_json);
    when_ready(
        &format!(
            "window.__budgetChartsReady && typeof window.renderBarChart !== 'undefined' && document.getElementById({id})"
        ),
        &format!("window.renderBarChart({id}, {config});"),
        "renderBarChart",
    );
}

/// Overwrite the datasets of the chart in `container_id` and redraw it.
///
/// `series_json` is `[[income...], [expense...], [balance...]]`. The update
/// waits for the initial render if that has not happened yet, and is dropped
/// with a console warning if the chart never appears.
pub fn update_bar_chart(container_id: &str, series_json: &str) {
    let id = js_string_literal(container_id);
    let series = js_string_literal(series_json);
    when_ready(
        &format!("window.__budgetChartsReady && window.hasBarChart && window.hasBarChart({id})"),
        &format!("window.updateBarChart({id}, {series});"),
        "updateBarChart",
    );
}

/// Text content of the page element `element_id`, e.g. a
/// `<script type="application/json">` block rendered by the server.
pub fn read_embedded_text(element_id: &str) -> Result<String, BudgetChartError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BudgetChartError::Dom("no document available".to_string()))?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| BudgetChartError::Dom(format!("element #{} not found", element_id)))?;
    Ok(element.text_content().unwrap_or_default())
}

/// Encode `value` for use as a query string component.
pub fn encode_query_value(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

fn fetch_error(err: JsValue) -> BudgetChartError {
    BudgetChartError::Fetch(js_error_message(&err))
}

/// GET `url` and return the response body as text.
///
/// Non-2xx statuses are errors. There is no timeout and no retry.
pub async fn fetch_text(url: &str) -> Result<String, BudgetChartError> {
    let window =
        web_sys::window().ok_or_else(|| BudgetChartError::Dom("no window available".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(fetch_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(fetch_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_error)?;
    let response: Response = response.dyn_into().map_err(fetch_error)?;
    if !response.ok() {
        return Err(BudgetChartError::HttpStatus {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = JsFuture::from(response.text().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    body.as_string()
        .ok_or_else(|| BudgetChartError::Fetch(format!("response from {} is not text", url)))
}
