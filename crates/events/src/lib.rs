//! Search-usage event services.
//!
//! - [`SearchLogger`] -- appends one immutable event per completed search;
//!   failures never reach the search response path.
//! - [`SearchAnalytics`] -- ranks the recorded events into popularity and
//!   recency views using the normalization rules in
//!   [`filmseek_core::stats`].
//!
//! Both take their store handle by injection; there is no shared
//! connection base type and no ambient global state.

pub mod analytics;
pub mod logger;

pub use analytics::SearchAnalytics;
pub use logger::SearchLogger;
