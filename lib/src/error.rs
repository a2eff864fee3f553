use polars::error::PolarsError;
use std::io::Error as IoError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Dataset is missing columns required by the scoring model: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Dataset has no rows")]
    EmptyDataset,

    #[error("Need at least two scored rows to compute a gap")]
    NotEnoughRows,

    #[error("Maximum index is not positive; cannot rescale to 0-100")]
    NonPositiveIndex,

    #[error("Plot error: {0}")]
    Plot(String),
}
