// File: crates/analytics-core/src/error.rs
// Summary: Error type for the parsing entry points. Render passes never fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("unknown window tag `{0}` (expected day, week or month)")]
    UnknownWindowTag(String),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}
