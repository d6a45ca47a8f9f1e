//! Uniform coordinate grids.

use ndarray as nd;
use crate::{
    error::ConfigError,
    potential::WellParameters,
};

/// Simple record to keep track of a uniformly spaced coordinate array.
///
/// Grids are strictly increasing with at least two points, so the spacing is
/// always positive and every function in [`utils`][crate::utils] may be applied
/// to arrays sampled over them.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    pub fn new_linspace(min: f64, max: f64, n: usize)
        -> Result<Self, ConfigError>
    {
        ConfigError::check_grid(min, max, n)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(min, max, n);
        let dx = (max - min) / (n - 1) as f64;
        Ok(Self { x, dx })
    }

    /// Create a new `Grid` of `n` points spanning three half-widths on either
    /// side of the center of a finite well.
    pub fn for_well(params: &WellParameters, n: usize)
        -> Result<Self, ConfigError>
    {
        let a = params.half_width();
        Self::new_linspace(-3.0 * a, 3.0 * a, n)
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of points in the grid.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn well_grid_spans_three_half_widths() {
        let params = WellParameters::new(0.5, 1.0, 1.0, 1.0).unwrap();
        let grid = Grid::for_well(&params, 201).unwrap();
        assert_eq!(grid.len(), 201);
        assert_relative_eq!(grid.get_x()[0], -1.5);
        assert_relative_eq!(grid.get_x()[200], 1.5);
        assert_relative_eq!(grid.get_dx(), 3.0 / 200.0);
        let x = grid.get_x();
        assert!(x.iter().zip(x.iter().skip(1)).all(|(xk, xkp1)| xkp1 > xk));
    }

    #[test]
    fn rejects_bad_grids() {
        assert_eq!(
            Grid::new_linspace(0.0, 1.0, 1).unwrap_err(),
            ConfigError::BadGridSize(1),
        );
        assert_eq!(
            Grid::new_linspace(1.0, 0.0, 10).unwrap_err(),
            ConfigError::BadGridBounds(1.0, 0.0),
        );
        assert!(Grid::new_linspace(0.0, f64::INFINITY, 10).is_err());
    }
}
