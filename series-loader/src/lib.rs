//! This crate turns small numeric CSV datasets into coordinate series,
//! ready to be handed to a plotting backend.

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod collection;
mod error;
mod loader;
mod mode;
mod options;

pub use collection::{Series, SeriesCollection, Trajectory};
pub use error::LoadError;
pub use loader::{load, SeriesLoader};
pub use mode::{LoadMode, ParseLoadModeError};
pub use options::LoadOptions;
