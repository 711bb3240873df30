//! Static double-slit barrier potential.

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{ error::InvalidConfiguration, grid::Grid };

/// Geometry and height of the slitted barrier.
///
/// The barrier occupies the band `|y| < half_thickness`, interrupted by
/// zero-potential apertures of half-width `slit_half_width` centered on each
/// entry of `slit_centers`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Barrier {
    /// Half-thickness of the barrier band.
    pub half_thickness: f64,
    /// Slit center positions along x.
    pub slit_centers: Vec<f64>,
    /// Half-width of every slit aperture.
    pub slit_half_width: f64,
    /// Barrier height. Not a physical constant: any value several orders of
    /// magnitude above the kinetic and potential phase scales makes the
    /// closed sections effectively opaque, so treat it as a tuning knob.
    pub height: f64,
}

impl Barrier {
    /// A barrier of zero extent and height, i.e. free space.
    pub fn none() -> Self {
        Self {
            half_thickness: 0.0,
            slit_centers: Vec::new(),
            slit_half_width: 0.0,
            height: 0.0,
        }
    }
}

/// Immutable potential energy sampled over a [`Grid`], shape `(ny, nx)`.
///
/// Everywhere nonnegative: `height` inside the closed sections of the barrier
/// band and zero elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct PotentialField {
    /// Potential values.
    pub V: nd::Array2<f64>,
}

impl PotentialField {
    /// Evaluate the barrier rule at every grid cell.
    ///
    /// A cell takes `height` when it lies in the barrier band and inside no
    /// slit aperture, and zero otherwise. The rule is evaluated independently
    /// per cell, so overlapping apertures are simply zero and construction is
    /// order-independent.
    pub fn new(grid: &Grid, barrier: &Barrier)
        -> Result<Self, InvalidConfiguration>
    {
        InvalidConfiguration::check_slit_width(barrier.slit_half_width)?;
        InvalidConfiguration::check_barrier_band(
            barrier.half_thickness, grid.ly)?;
        InvalidConfiguration::check_barrier_height(barrier.height)?;
        let in_aperture = |x: f64| {
            barrier.slit_centers.iter()
                .any(|xc| (x - xc).abs() < barrier.slit_half_width)
        };
        let V = nd::Array2::from_shape_fn((grid.ny, grid.nx), |(j, i)| {
            if grid.y[j].abs() < barrier.half_thickness
                && !in_aperture(grid.x[i])
            {
                barrier.height
            } else {
                0.0
            }
        });
        Ok(Self { V })
    }

    /// A potential that is zero everywhere (free propagation).
    pub fn free(grid: &Grid) -> Self {
        Self { V: nd::Array2::zeros((grid.ny, grid.nx)) }
    }
}
