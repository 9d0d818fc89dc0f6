#[macro_use]
extern crate log;

use std::{error::Error, path::Path, process};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use series_loader::{LoadMode, LoadOptions, SeriesLoader};
use series_plot::{plot_collection, DEFAULT_DIMS};

/// A known dataset and how to read it
struct Dataset {
    name: &'static str,
    path: &'static str,
    mode: LoadMode,
    output: &'static str,
}

const DATASETS: [Dataset; 3] = [
    Dataset {
        name: "logistic map",
        path: "src/csv/test.csv",
        mode: LoadMode::MultiSeries,
        output: "img/logistic.png",
    },
    Dataset {
        name: "lorenz",
        path: "src/csv/lorenz.csv",
        mode: LoadMode::FixedTriple,
        output: "img/lorenz.png",
    },
    Dataset {
        name: "double pendulum",
        path: "src/csv/double_pendulum.csv",
        mode: LoadMode::FixedDouble,
        output: "img/double_pendulum.png",
    },
];

pub(crate) fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let theme = ColorfulTheme::default();
    let names: Vec<&str> = DATASETS.iter().map(|d| d.name).collect();
    let e = Select::with_theme(&theme)
        .with_prompt("Select dataset")
        .items(&names)
        .default(0)
        .interact()?;
    let dataset = &DATASETS[e];

    let path: String = Input::with_theme(&theme)
        .with_prompt("CSV file")
        .default(dataset.path.to_string())
        .interact_text()?;
    let has_header = Confirm::with_theme(&theme)
        .with_prompt("Does the first line hold column names?")
        .default(true)
        .interact()?;

    let loader = SeriesLoader::new(LoadOptions {
        has_header,
        ..Default::default()
    });
    let collection = loader.load(&path, dataset.mode)?;
    info!(
        "{}: {} series, {} points as {}",
        dataset.name,
        collection.series_count(),
        collection.len(),
        dataset.mode
    );

    plot_collection(&collection, dataset.name, Path::new(dataset.output), DEFAULT_DIMS)?;

    Ok(())
}
