use thiserror::Error;

/// Errors that can occur while rendering a plot
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("nothing to plot, no finite points")]
    NothingToPlot,

    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T> = core::result::Result<T, PlotError>;
