//! Startup configuration.
//!
//! All parameters are fixed before stepping begins; there is no runtime
//! reconfiguration. Validation happens when the configured components are
//! constructed, so a bad value surfaces as an
//! [`InvalidConfiguration`][crate::error::InvalidConfiguration] before the
//! first step runs.

use std::path::Path;
use serde::{ Deserialize, Serialize };
use crate::{ error::{ SimError, SimResult }, potential::Barrier };

/// Resolution and physical extent of the domain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    pub nx: usize,
    pub ny: usize,
    pub lx: f64,
    pub ly: f64,
}

/// Fixed-step time discretization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Time step.
    pub dt: f64,
    /// Total number of steps (and emitted frames).
    pub steps: usize,
}

/// Initial Gaussian wavepacket parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WavepacketConfig {
    /// Center position along x.
    pub x0: f64,
    /// Center position along y.
    pub y0: f64,
    /// Envelope width.
    pub sigma: f64,
    /// Carrier wavenumber along y.
    pub k0y: f64,
}

/// Full simulation configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid: GridConfig,
    pub time: TimeConfig,
    pub packet: WavepacketConfig,
    pub barrier: Barrier,
}

impl Default for SimulationConfig {
    /// The canonical double-slit run: a packet launched from below the
    /// barrier toward two slits straddling the y-axis.
    fn default() -> Self {
        Self {
            grid: GridConfig { nx: 200, ny: 200, lx: 30.0, ly: 30.0 },
            time: TimeConfig { dt: 0.01, steps: 500 },
            packet: WavepacketConfig {
                x0: 0.0,
                y0: -10.0,
                sigma: 1.0,
                k0y: 5.0,
            },
            barrier: Barrier {
                half_thickness: 0.3,
                slit_centers: vec![-1.5, 1.5],
                slit_half_width: 0.6,
                height: 1e6,
            },
        }
    }
}

impl SimulationConfig {
    /// Read a configuration from a TOML file.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|err| {
                SimError::ConfigRead(path.as_ref().to_path_buf(), err)
            })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Total simulated time.
    pub fn tmax(&self) -> f64 { self.time.steps as f64 * self.time.dt }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let config = SimulationConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: SimulationConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.grid.nx, config.grid.nx);
        assert_eq!(parsed.time.steps, config.time.steps);
        assert_eq!(parsed.barrier.slit_centers, config.barrier.slit_centers);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let bad: Result<SimulationConfig, _> = toml::from_str("grid = 12");
        assert!(bad.is_err());
    }
}
