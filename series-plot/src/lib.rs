//! Renders series collections to bitmap images

#[macro_use]
extern crate log;

mod bounds;
mod error;
pub mod plot;

pub use bounds::{bounds_2d, bounds_3d, Bounds};
pub use error::PlotError;
pub use plot::{plot_collection, plot_points_3d, plot_series_2d, DEFAULT_DIMS};
pub use series_loader::{Series, SeriesCollection, Trajectory};
