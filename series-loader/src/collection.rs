use crate::LoadMode;

/// An ordered 2D trace
pub type Series = Vec<(f64, f64)>;

/// An ordered sequence of 3D points
pub type Trajectory = Vec<(f64, f64, f64)>;

/// The series extracted from one dataset, shaped by the [`LoadMode`] used to load it.
/// Points always appear in file order.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesCollection {
    /// `series[i - 1]` holds the points of column `i`
    Multi(Vec<Series>),
    /// One point per record
    Triple(Trajectory),
    /// Columns (0, 1) and (0, 2), always of equal length
    Double {
        /// Points of column 1 over column 0
        first: Series,
        /// Points of column 2 over column 0
        second: Series,
    },
}

impl SeriesCollection {
    /// An empty collection of the given shape
    pub fn empty(mode: LoadMode) -> Self {
        match mode {
            LoadMode::MultiSeries => SeriesCollection::Multi(Vec::new()),
            LoadMode::FixedTriple => SeriesCollection::Triple(Vec::new()),
            LoadMode::FixedDouble => SeriesCollection::Double {
                first: Vec::new(),
                second: Vec::new(),
            },
        }
    }

    /// The mode which produces this shape
    pub fn mode(&self) -> LoadMode {
        match self {
            SeriesCollection::Multi(_) => LoadMode::MultiSeries,
            SeriesCollection::Triple(_) => LoadMode::FixedTriple,
            SeriesCollection::Double { .. } => LoadMode::FixedDouble,
        }
    }

    /// Number of traces; a trajectory counts as one
    pub fn series_count(&self) -> usize {
        match self {
            SeriesCollection::Multi(series) => series.len(),
            SeriesCollection::Triple(points) => usize::from(!points.is_empty()),
            SeriesCollection::Double { first, .. } => {
                if first.is_empty() {
                    0
                } else {
                    2
                }
            }
        }
    }

    /// Total number of points over all traces
    pub fn len(&self) -> usize {
        match self {
            SeriesCollection::Multi(series) => series.iter().map(|s| s.len()).sum(),
            SeriesCollection::Triple(points) => points.len(),
            SeriesCollection::Double { first, second } => first.len() + second.len(),
        }
    }

    /// Whether the collection holds no points at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The points of CSV column `column` in a multi-series collection
    pub fn column(&self, column: usize) -> Option<&Series> {
        match self {
            SeriesCollection::Multi(series) if column >= 1 => series.get(column - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_shapes() {
        for mode in LoadMode::ALL {
            let c = SeriesCollection::empty(mode);
            assert!(c.is_empty());
            assert_eq!(c.series_count(), 0);
            assert_eq!(c.mode(), mode);
        }
    }

    #[test]
    fn column_lookup_is_one_based() {
        let c = SeriesCollection::Multi(vec![vec![(0.0, 1.0)], vec![(0.0, 2.0)]]);
        assert_eq!(c.column(0), None);
        assert_eq!(c.column(1), Some(&vec![(0.0, 1.0)]));
        assert_eq!(c.column(2), Some(&vec![(0.0, 2.0)]));
        assert_eq!(c.column(3), None);
        assert_eq!(c.len(), 2);
    }
}
