use std::ops::Range;

use series_loader::{Series, Trajectory};

/// Axis ranges enclosing a set of N-dimensional points
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds<const N: usize> {
    /// Lower end per axis
    pub min: [f64; N],
    /// Upper end per axis
    pub max: [f64; N],
}

impl<const N: usize> Bounds<N> {
    /// Smallest bounds enclosing all finite `points`.
    /// Zero width axes are widened by 0.5 in both directions.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; N]>,
    {
        let mut points = points.into_iter().filter(|p| p.iter().all(|v| v.is_finite()));
        let first = points.next()?;
        let mut min = first;
        let mut max = first;
        for p in points {
            for axis in 0..N {
                if p[axis] < min[axis] {
                    min[axis] = p[axis];
                }
                if p[axis] > max[axis] {
                    max[axis] = p[axis];
                }
            }
        }
        for axis in 0..N {
            if min[axis] >= max[axis] {
                min[axis] -= 0.5;
                max[axis] += 0.5;
            }
        }

        Some(Self { min, max })
    }

    /// The range of one axis
    #[inline(always)]
    pub fn range(&self, axis: usize) -> Range<f64> {
        self.min[axis]..self.max[axis]
    }

    /// Whether `p` lies within the bounds, ends included
    pub fn contains(&self, p: &[f64; N]) -> bool {
        (0..N).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }
}

/// Bounds of several 2D series drawn on the same chart
pub fn bounds_2d<'a, I>(series: I) -> Option<Bounds<2>>
where
    I: IntoIterator<Item = &'a Series>,
{
    Bounds::enclosing(series.into_iter().flatten().map(|&(x, y)| [x, y]))
}

/// Bounds of a 3D point cloud
pub fn bounds_3d(points: &Trajectory) -> Option<Bounds<3>> {
    Bounds::enclosing(points.iter().map(|&(x, y, z)| [x, y, z]))
}
