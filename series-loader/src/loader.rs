use std::{fs::File, io::Read, path::Path, time::Instant};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{LoadError, LoadMode, LoadOptions, SeriesCollection};

/// Load the dataset at `path` with the default [`LoadOptions`],
/// i.e. comma delimited with a header row.
pub fn load<P: AsRef<Path>>(path: P, mode: LoadMode) -> Result<SeriesCollection, LoadError> {
    SeriesLoader::default().load(path, mode)
}

/// Reads delimited numeric files and reshapes their records into series
#[derive(Debug, Clone, Default)]
pub struct SeriesLoader {
    options: LoadOptions,
}

impl SeriesLoader {
    /// Create a new instance of `SeriesLoader`
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// The options this loader reads with
    #[inline(always)]
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load the file at `path`.
    /// The file is fully consumed and closed before this returns.
    pub fn load<P: AsRef<Path>>(
        &self,
        path: P,
        mode: LoadMode,
    ) -> Result<SeriesCollection, LoadError> {
        let path = path.as_ref();
        debug!("loading {} as {}", path.display(), mode);

        let t0 = Instant::now();
        let result = File::open(path)
            .map_err(LoadError::from)
            .and_then(|file| self.load_from_reader(file, mode));

        match &result {
            Ok(collection) => info!(
                "loaded {} points in {} series from {} in {}ms",
                collection.len(),
                collection.series_count(),
                path.display(),
                t0.elapsed().as_millis()
            ),
            Err(e) => warn!("failed to load {}: {}", path.display(), e),
        }

        result
    }

    /// Load a dataset from any reader
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        mode: LoadMode,
    ) -> Result<SeriesCollection, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(self.options.has_header)
            .delimiter(self.options.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut collection = SeriesCollection::empty(mode);
        let mut record = StringRecord::new();
        while rdr.read_record(&mut record)? {
            let row = record.position().map(|p| p.line()).unwrap_or_default();
            push_record(&mut collection, row, &record)?;
        }

        Ok(collection)
    }
}

/// Append the points of one record to `collection`
fn push_record(
    collection: &mut SeriesCollection,
    row: u64,
    record: &StringRecord,
) -> Result<(), LoadError> {
    let expected = collection.mode().min_fields();
    if record.len() < expected {
        return Err(LoadError::Format {
            row,
            expected,
            found: record.len(),
        });
    }

    let x = parse_field(record, row, 0)?;
    match collection {
        SeriesCollection::Multi(series) => {
            for column in 1..record.len() {
                let y = parse_field(record, row, column)?;
                // columns are visited in order, so at most one new series per step
                if series.len() < column {
                    series.push(Vec::new());
                }
                series[column - 1].push((x, y));
            }
        }
        SeriesCollection::Triple(points) => {
            let y = parse_field(record, row, 1)?;
            let z = parse_field(record, row, 2)?;
            points.push((x, y, z));
        }
        SeriesCollection::Double { first, second } => {
            let y0 = parse_field(record, row, 1)?;
            let y1 = parse_field(record, row, 2)?;
            first.push((x, y0));
            second.push((x, y1));
        }
    }

    Ok(())
}

fn parse_field(record: &StringRecord, row: u64, column: usize) -> Result<f64, LoadError> {
    let raw = &record[column];
    raw.parse::<f64>().map_err(|_| LoadError::Parse {
        row,
        column,
        value: raw.to_string(),
    })
}
