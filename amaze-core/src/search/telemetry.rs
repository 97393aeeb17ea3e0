//! Search counters emitted when the `metrics` feature is enabled.
//!
//! Metric names are stable for downstream crates:
//!
//! - `search_nodes_visited` (counter)
//! - `search_duplicate_pops` (counter)
//! - `search_tasks_forked` (counter)

#[cfg(feature = "metrics")]
pub(crate) fn record_visit() {
    metrics::counter!("search_nodes_visited").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_visit() {}

#[cfg(feature = "metrics")]
pub(crate) fn record_duplicate_pop() {
    metrics::counter!("search_duplicate_pops").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_duplicate_pop() {}

#[cfg(feature = "metrics")]
pub(crate) fn record_forks(count: usize) {
    metrics::counter!("search_tasks_forked").increment(count as u64);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_forks(_count: usize) {}
