//! Data module - chart points and series loading

mod loader;
mod point;

pub use loader::{LoaderError, SeriesLoader};
pub use point::{sample_series, DataPoint};
