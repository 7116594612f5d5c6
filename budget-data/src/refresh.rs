//! Year-change refresh sequencing.
//!
//! Every year selection starts a request tagged with a fresh token. Only the
//! response carrying the most recent token may touch the chart, so a slow
//! response for an earlier selection can never overwrite a newer one.

use crate::chart_model::BarChartModel;
use crate::error::BudgetChartError;
use crate::monthly::{LengthPolicy, MonthlySeries};
use crate::projection::ProjectedSeries;

/// Identifies one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing request tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshTracker {
    latest: u64,
}

impl RefreshTracker {
    /// Start a new request. Any token issued earlier becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Record a year selection while the chart shows `displayed`.
    ///
    /// Every selection invalidates the requests started before it. A token is
    /// returned only when `selected` differs from what is on screen; going back
    /// to the displayed year needs no fetch but still cancels the one in flight.
    pub fn select(&mut self, selected: &str, displayed: &str) -> Option<RequestToken> {
        let token = self.begin();
        (selected != displayed).then_some(token)
    }
}

/// What happened to a fetched response.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The chart now shows the fetched series.
    Applied,
    /// A newer request was started after this one; the response was dropped.
    Stale,
    /// The request or its body was unusable; the chart kept its previous series.
    Rejected(BudgetChartError),
}

/// Apply the result of the request identified by `token` to `model`.
///
/// Staleness is checked before the body is parsed, so a stale failure is
/// reported as `Stale` rather than as an error.
pub fn apply_response(
    model: &mut BarChartModel,
    tracker: &RefreshTracker,
    token: RequestToken,
    response: Result<String, BudgetChartError>,
    policy: LengthPolicy,
) -> RefreshOutcome {
    if !tracker.is_current(token) {
        log::debug!("dropping response for stale request #{}", token.id());
        return RefreshOutcome::Stale;
    }

    let series = match response.and_then(|body| MonthlySeries::from_response(&body, policy)) {
        Ok(series) => series,
        Err(e) => return RefreshOutcome::Rejected(e),
    };

    model.replace_series(&ProjectedSeries::from_series(&series));
    log::info!(
        "request #{} applied {} monthly records",
        token.id(),
        series.len()
    );
    RefreshOutcome::Applied
}
