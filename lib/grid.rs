//! Discretized spatial and spectral domains.

use ndarray as nd;
use crate::{ error::InvalidConfiguration, utils::fft_wavenumbers };

/// Immutable description of the simulation domain.
///
/// Samples a uniform, zero-centered rectangle of extent `lx`-by-`ly` with
/// `nx`-by-`ny` points, together with the angular wavenumbers of its discrete
/// Fourier dual. All 2D arrays built over this grid put `y` on axis 0 (rows)
/// and `x` on axis 1 (columns).
///
/// The sampling is periodic-consistent: `dx` is exactly `lx / nx`, so the
/// rightmost point sits one spacing short of `lx / 2`.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Number of samples along x.
    pub nx: usize,
    /// Number of samples along y.
    pub ny: usize,
    /// Physical extent along x.
    pub lx: f64,
    /// Physical extent along y.
    pub ly: f64,
    /// Sample spacing along x.
    pub dx: f64,
    /// Sample spacing along y.
    pub dy: f64,
    /// Sample coordinates along x.
    pub x: nd::Array1<f64>,
    /// Sample coordinates along y.
    pub y: nd::Array1<f64>,
    /// Angular wavenumbers conjugate to x, in FFT ordering.
    pub kx: nd::Array1<f64>,
    /// Angular wavenumbers conjugate to y, in FFT ordering.
    pub ky: nd::Array1<f64>,
}

impl Grid {
    /// Construct a zero-centered grid with uniform spacing.
    pub fn new(nx: usize, ny: usize, lx: f64, ly: f64)
        -> Result<Self, InvalidConfiguration>
    {
        InvalidConfiguration::check_resolution(nx, ny)?;
        InvalidConfiguration::check_extent(lx, ly)?;
        let dx = lx / nx as f64;
        let dy = ly / ny as f64;
        let x: nd::Array1<f64>
            = (0..nx).map(|i| i as f64 * dx - lx / 2.0).collect();
        let y: nd::Array1<f64>
            = (0..ny).map(|j| j as f64 * dy - ly / 2.0).collect();
        let kx = fft_wavenumbers(nx, dx);
        let ky = fft_wavenumbers(ny, dy);
        Ok(Self { nx, ny, lx, ly, dx, dy, x, y, kx, ky })
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize { self.nx * self.ny }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn test_centering_and_spacing() {
        let grid = Grid::new(200, 100, 30.0, 20.0).unwrap();
        assert_abs_diff_eq!(grid.dx, 0.15, epsilon = 1e-15);
        assert_abs_diff_eq!(grid.dy, 0.2, epsilon = 1e-15);
        assert_abs_diff_eq!(grid.x[0], -15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grid.y[50], 0.0, epsilon = 1e-12);
        for (xk, xkp1) in grid.x.iter().zip(grid.x.iter().skip(1)) {
            assert_abs_diff_eq!(xkp1 - xk, grid.dx, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_wavenumber_convention() {
        // spacing 1 on four points must give indices [0, 1, -2, -1] * 2π/4
        let grid = Grid::new(4, 4, 4.0, 4.0).unwrap();
        let expected = [0.0, 1.0, -2.0, -1.0].map(|i| i * TAU / 4.0);
        for (kk, ke) in grid.kx.iter().zip(expected) {
            assert_abs_diff_eq!(*kk, ke, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_rejects_degenerate_domains() {
        assert!(Grid::new(0, 64, 30.0, 30.0).is_err());
        assert!(Grid::new(64, 0, 30.0, 30.0).is_err());
        assert!(Grid::new(64, 64, -1.0, 30.0).is_err());
        assert!(Grid::new(64, 64, 30.0, 0.0).is_err());
    }
}
