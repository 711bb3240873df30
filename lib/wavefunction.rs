//! The evolving complex field and its initialization.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ InvalidConfiguration, NumericDegeneracy, SimResult },
    grid::Grid,
    utils::{ wf_norm, wf_renormalize },
};

/// Mutable wavefunction ψ sampled over a [`Grid`], shape `(ny, nx)`.
///
/// Normalized to unit total probability at initialization. No renormalization
/// is applied during propagation; the small drift that accumulates is a
/// property of the fixed-step splitting, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct WavefunctionState {
    pub psi: nd::Array2<C64>,
}

impl WavefunctionState {
    /// Sample a Gaussian envelope of width `sigma` centered at `(x0, y0)`,
    /// modulated by the plane-wave carrier `exp(i·k0y·y)`, and normalize it.
    pub fn gaussian(grid: &Grid, x0: f64, y0: f64, sigma: f64, k0y: f64)
        -> SimResult<Self>
    {
        InvalidConfiguration::check_width(sigma)?;
        let mut psi = nd::Array2::from_shape_fn((grid.ny, grid.nx), |(j, i)| {
            let r2 = (grid.x[i] - x0).powi(2) + (grid.y[j] - y0).powi(2);
            (-r2 / (2.0 * sigma.powi(2))).exp() * C64::cis(k0y * grid.y[j])
        });
        wf_renormalize(&mut psi, grid.dx, grid.dy);
        NumericDegeneracy::check_complex("initial wavefunction", &psi)?;
        Ok(Self { psi })
    }

    /// Total probability Σ|ψ|²·dx·dy.
    pub fn norm(&self, grid: &Grid) -> f64 {
        wf_norm(&self.psi, grid.dx, grid.dy)
    }

    /// Probability density |ψ|² at every cell.
    pub fn density(&self) -> nd::Array2<f64> {
        self.psi.mapv(|qk| qk.norm_sqr())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn test_initial_norm_is_unity() {
        let grid = Grid::new(128, 128, 30.0, 30.0).unwrap();
        let state
            = WavefunctionState::gaussian(&grid, 0.0, -10.0, 1.0, 5.0)
            .unwrap();
        assert_abs_diff_eq!(state.norm(&grid), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_density_matches_amplitude() {
        let grid = Grid::new(64, 64, 30.0, 30.0).unwrap();
        let state
            = WavefunctionState::gaussian(&grid, 0.0, -5.0, 1.0, 5.0)
            .unwrap();
        let rho = state.density();
        for (rk, qk) in rho.iter().zip(&state.psi) {
            assert_abs_diff_eq!(*rk, qk.norm_sqr(), epsilon = 1e-15);
            assert!(*rk >= 0.0);
        }
    }

    #[test]
    fn test_rejects_bad_width() {
        let grid = Grid::new(64, 64, 30.0, 30.0).unwrap();
        assert!(
            WavefunctionState::gaussian(&grid, 0.0, 0.0, 0.0, 5.0).is_err());
        assert!(
            WavefunctionState::gaussian(&grid, 0.0, 0.0, -1.0, 5.0).is_err());
    }
}
