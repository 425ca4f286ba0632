//! Stats module - series summary

mod summary;

pub use summary::{format_value, summarize, ChartSummary};
