//! Summary module
//!
//! Provides the overall and per-group totals shown on the dashboard, the
//! per-event overview and the list of payers.

mod aggregation;
mod handlers;

pub use aggregation::{
    EventOverview, EventTotal, PayerTotal, RECENT_EXPENSE_COUNT, Summary, distinct_payers,
    event_overview, summarize,
};
pub use handlers::{SummaryState, get_events_endpoint, get_payers_endpoint, get_summary_endpoint};
