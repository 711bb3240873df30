//! Fixed phase operators of the Strang-split propagation step.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ InvalidConfiguration, NumericDegeneracy, SimResult },
    grid::Grid,
    potential::PotentialField,
};

/// The two immutable phase arrays applied on every time step, shape
/// `(ny, nx)`.
///
/// `kinetic_phase` is the full-step free propagator, diagonal in the spectral
/// representation; `potential_half_phase` is the half-step potential
/// propagator, diagonal in the spatial representation. Both have unit modulus
/// everywhere, so each application preserves the discrete norm exactly up to
/// rounding.
#[derive(Clone, Debug)]
pub struct OperatorSet {
    /// `exp(-i·½(kx² + ky²)·dt)`.
    pub kinetic_phase: nd::Array2<C64>,
    /// `exp(-i·V·dt/2)`.
    pub potential_half_phase: nd::Array2<C64>,
    /// Time step the phases were built for.
    pub dt: f64,
}

impl OperatorSet {
    /// Derive both phase arrays from the grid, the potential, and the time
    /// step.
    ///
    /// Precondition on the caller's configuration: `V·dt` and `½k²·dt` must
    /// stay within representable floating-point range. Non-finite phases are
    /// rejected here, once, before any stepping begins; the stepping loop
    /// never re-checks.
    pub fn new(grid: &Grid, potential: &PotentialField, dt: f64)
        -> SimResult<Self>
    {
        InvalidConfiguration::check_time_step(dt)?;
        NumericDegeneracy::check_real("potential field", &potential.V)?;
        let kinetic_phase
            = nd::Array2::from_shape_fn((grid.ny, grid.nx), |(j, i)| {
                C64::cis(
                    -0.5 * (grid.kx[i].powi(2) + grid.ky[j].powi(2)) * dt)
            });
        let potential_half_phase
            = potential.V.mapv(|vk| C64::cis(-vk * dt / 2.0));
        NumericDegeneracy::check_complex("kinetic phase", &kinetic_phase)?;
        NumericDegeneracy::check_complex(
            "potential half phase", &potential_half_phase)?;
        Ok(Self { kinetic_phase, potential_half_phase, dt })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::potential::Barrier;
    use super::*;

    fn setup() -> (Grid, PotentialField) {
        let grid = Grid::new(64, 64, 30.0, 30.0).unwrap();
        let barrier = Barrier {
            half_thickness: 0.3,
            slit_centers: vec![-1.5, 1.5],
            slit_half_width: 0.6,
            height: 1e6,
        };
        let pot = PotentialField::new(&grid, &barrier).unwrap();
        (grid, pot)
    }

    #[test]
    fn test_unit_modulus() {
        let (grid, pot) = setup();
        let ops = OperatorSet::new(&grid, &pot, 0.01).unwrap();
        for tk in ops.kinetic_phase.iter() {
            assert_abs_diff_eq!(tk.norm(), 1.0, epsilon = 1e-12);
        }
        for vk in ops.potential_half_phase.iter() {
            assert_abs_diff_eq!(vk.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rejects_bad_time_step() {
        let (grid, pot) = setup();
        assert!(OperatorSet::new(&grid, &pot, 0.0).is_err());
        assert!(OperatorSet::new(&grid, &pot, -0.01).is_err());
    }

    #[test]
    fn test_rejects_nonfinite_phases() {
        let (grid, mut pot) = setup();
        pot.V[[32, 0]] = f64::INFINITY;
        assert!(OperatorSet::new(&grid, &pot, 0.01).is_err());
    }
}
