use std::{fmt::Display, fs, path::Path};

use plotters::prelude::*;
use series_loader::{Series, SeriesCollection, Trajectory};

use crate::{bounds_2d, bounds_3d, error::Result, PlotError};

/// Image dimensions used when the caller has no preference
pub const DEFAULT_DIMS: (u32, u32) = (2160, 2160);

/// Render a collection in the form matching its shape:
/// overlaid 2D scatter for multi series, 3D scatter for triples and
/// two 2D traces for doubles.
pub fn plot_collection(
    collection: &SeriesCollection,
    title: &str,
    filename: &Path,
    dims: (u32, u32),
) -> Result<()> {
    match collection {
        SeriesCollection::Multi(series) => {
            let labels: Vec<String> =
                (1..=series.len()).map(|column| format!("column {}", column)).collect();
            let labelled: Vec<(&str, &Series)> =
                labels.iter().map(String::as_str).zip(series.iter()).collect();
            plot_series_2d(&labelled, title, filename, dims)
        }
        SeriesCollection::Triple(points) => plot_points_3d(points, title, filename, dims),
        SeriesCollection::Double { first, second } => plot_series_2d(
            &[("column 1", first), ("column 2", second)],
            title,
            filename,
            dims,
        ),
    }
}

/// Scatter any number of labelled series onto one chart
pub fn plot_series_2d(
    series: &[(&str, &Series)],
    title: &str,
    filename: &Path,
    dims: (u32, u32),
) -> Result<()> {
    let bounds = bounds_2d(series.iter().map(|(_, s)| *s)).ok_or(PlotError::NothingToPlot)?;
    info!(
        "n_series: {}, x: {:?}, y: {:?}",
        series.len(),
        bounds.range(0),
        bounds.range(1)
    );

    prepare_output(filename)?;
    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE).map_err(drawing_area)?;

    let mut cc0 = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption(title, ("sans-serif", 30).into_font().with_color(&BLACK))
        .build_cartesian_2d(bounds.range(0), bounds.range(1))
        .map_err(drawing_area)?;
    cc0.configure_mesh()
        .x_labels(20)
        .y_labels(20)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.4}", v))
        .draw()
        .map_err(drawing)?;

    for (i, (label, s)) in series.iter().enumerate() {
        let color = series_color(i);
        cc0.draw_series(
            s.iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
        )
        .map_err(drawing)?
        .label(*label)
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }
    cc0.configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(drawing)?;

    root_area.present().map_err(drawing)?;
    info!("successfully plotted to {}", filename.display());

    Ok(())
}

/// Scatter a 3D point cloud
pub fn plot_points_3d(
    points: &Trajectory,
    title: &str,
    filename: &Path,
    dims: (u32, u32),
) -> Result<()> {
    let bounds = bounds_3d(points).ok_or(PlotError::NothingToPlot)?;
    info!(
        "n_points: {}, x: {:?}, y: {:?}, z: {:?}",
        points.len(),
        bounds.range(0),
        bounds.range(1),
        bounds.range(2)
    );

    prepare_output(filename)?;
    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE).map_err(drawing_area)?;

    let mut cc0 = ChartBuilder::on(&root_area)
        .margin(20)
        .caption(title, ("sans-serif", 30).into_font().with_color(&BLACK))
        .build_cartesian_3d(bounds.range(0), bounds.range(1), bounds.range(2))
        .map_err(drawing_area)?;
    cc0.with_projection(|mut pb| {
        pb.yaw = 0.5;
        pb.scale = 0.9;
        pb.into_matrix()
    });
    cc0.configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(drawing)?;

    let color = series_color(0);
    cc0.draw_series(
        points
            .iter()
            .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
            .map(|&(x, y, z)| Circle::new((x, y, z), 2, color.filled())),
    )
    .map_err(drawing)?;

    root_area.present().map_err(drawing)?;
    info!("successfully plotted to {}", filename.display());

    Ok(())
}

/// Red and blue first, then the palette
fn series_color(idx: usize) -> RGBAColor {
    match idx {
        0 => RED.to_rgba(),
        1 => BLUE.to_rgba(),
        _ => Palette99::pick(idx).to_rgba(),
    }
}

fn prepare_output(filename: &Path) -> Result<()> {
    match filename.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(fs::create_dir_all(dir)?),
        _ => Ok(()),
    }
}

fn drawing_area<E: Display>(e: E) -> PlotError {
    PlotError::DrawingArea(e.to_string())
}

fn drawing<E: Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

#[cfg(test)]
mod tests {
    use series_loader::LoadMode;

    use super::*;

    #[test]
    fn empty_collections_are_rejected_before_rendering() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let dir = tempfile::tempdir().unwrap();
        for mode in LoadMode::ALL {
            let filename = dir.path().join("img").join(format!("{}.png", mode));
            let err = plot_collection(&SeriesCollection::empty(mode), "empty", &filename, (64, 64))
                .unwrap_err();
            assert!(matches!(err, PlotError::NothingToPlot));
            assert!(!filename.exists());
        }
    }

    #[test]
    fn non_finite_only_series_have_nothing_to_plot() {
        let dir = tempfile::tempdir().unwrap();
        let s: Series = vec![(f64::NAN, 1.0), (2.0, f64::NEG_INFINITY)];
        let err = plot_series_2d(&[("nan", &s)], "nan", &dir.path().join("nan.png"), (64, 64))
            .unwrap_err();
        assert!(matches!(err, PlotError::NothingToPlot));
    }

    #[test]
    fn output_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("plot.png");
        prepare_output(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());

        prepare_output(Path::new("plot.png")).unwrap();
    }

    #[test]
    fn first_two_colors_are_red_and_blue() {
        assert_eq!(series_color(0), RED.to_rgba());
        assert_eq!(series_color(1), BLUE.to_rgba());
    }
}
