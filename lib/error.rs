//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::path::PathBuf;
use ndarray as nd;
use num_complex::Complex64 as C64;
use thiserror::Error;

/// Returned when simulation parameters fail validation at setup time.
///
/// Every variant corresponds to a parameter set that would produce physically
/// meaningless operators; nothing is allowed to proceed past construction with
/// one of these present.
#[derive(Debug, Error)]
pub enum InvalidConfiguration {
    /// Returned when a grid axis has zero sample points.
    #[error("grid resolution must be positive; got {0}x{1}")]
    BadResolution(usize, usize),

    /// Returned when a physical extent is non-positive.
    #[error("grid extents must be greater than 0; got {0} and {1}")]
    BadExtent(f64, f64),

    /// Returned when a non-positive time step is encountered.
    #[error("time step must be greater than 0; got {0}")]
    BadTimeStep(f64),

    /// Returned when a non-positive wavepacket width is encountered.
    #[error("wavepacket width must be greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a negative slit half-width is encountered.
    #[error("slit half-width must be at least 0; got {0}")]
    BadSlitWidth(f64),

    /// Returned when the barrier band does not fit in the domain.
    #[error("barrier half-thickness must lie within the domain; got {0} for Ly = {1}")]
    BadBarrierBand(f64, f64),

    /// Returned when a negative barrier height is encountered.
    #[error("barrier height must be at least 0; got {0}")]
    BadBarrierHeight(f64),
}

impl InvalidConfiguration {
    pub(crate) fn check_resolution(nx: usize, ny: usize) -> Result<(), Self> {
        (nx > 0 && ny > 0).then_some(())
            .ok_or(Self::BadResolution(nx, ny))
    }

    pub(crate) fn check_extent(lx: f64, ly: f64) -> Result<(), Self> {
        (lx > 0.0 && ly > 0.0).then_some(())
            .ok_or(Self::BadExtent(lx, ly))
    }

    pub(crate) fn check_time_step(dt: f64) -> Result<(), Self> {
        (dt > 0.0).then_some(()).ok_or(Self::BadTimeStep(dt))
    }

    pub(crate) fn check_width(sigma: f64) -> Result<(), Self> {
        (sigma > 0.0).then_some(()).ok_or(Self::BadWidth(sigma))
    }

    pub(crate) fn check_slit_width(w: f64) -> Result<(), Self> {
        (w >= 0.0).then_some(()).ok_or(Self::BadSlitWidth(w))
    }

    pub(crate) fn check_barrier_band(b: f64, ly: f64) -> Result<(), Self> {
        (0.0..=ly / 2.0).contains(&b).then_some(())
            .ok_or(Self::BadBarrierBand(b, ly))
    }

    pub(crate) fn check_barrier_height(vmax: f64) -> Result<(), Self> {
        (vmax >= 0.0).then_some(()).ok_or(Self::BadBarrierHeight(vmax))
    }
}

/// Returned when a freshly constructed field or operator contains non-finite
/// values.
///
/// All arrays in the propagation are either static or derived from static
/// ones, so this is detected once after construction; the stepping loop itself
/// performs no checks.
#[derive(Debug, Error)]
#[error("non-finite values encountered in {0}")]
pub struct NumericDegeneracy(pub &'static str);

impl NumericDegeneracy {
    pub(crate) fn check_complex<S>(name: &'static str, a: &crate::Arr2<S>)
        -> Result<(), Self>
    where S: nd::Data<Elem = C64>
    {
        a.iter().all(|ak| ak.re.is_finite() && ak.im.is_finite())
            .then_some(())
            .ok_or(Self(name))
    }

    pub(crate) fn check_real<S>(name: &'static str, a: &crate::Arr2<S>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        a.iter().all(|ak| ak.is_finite())
            .then_some(())
            .ok_or(Self(name))
    }
}

/// Returned from simulation setup and configuration loading.
#[derive(Debug, Error)]
pub enum SimError {
    /// [`InvalidConfiguration`]
    #[error("invalid configuration: {0}")]
    Config(#[from] InvalidConfiguration),

    /// [`NumericDegeneracy`]
    #[error("degenerate numerics: {0}")]
    Degenerate(#[from] NumericDegeneracy),

    /// Returned when the configuration file cannot be read.
    #[error("unable to read config file {0}")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    /// Returned when the configuration file cannot be parsed.
    #[error("unable to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type SimResult<T> = Result<T, SimError>;
