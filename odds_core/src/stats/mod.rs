//! Statistics - Summaries and chart series derived from damage samples

mod density;
mod histogram;
mod summary;

pub use density::{density_estimate, DensityPoint};
pub use histogram::{histogram_estimate, HistogramBin, MAX_HISTOGRAM_BINS};
pub use summary::{summarize, Summary};
