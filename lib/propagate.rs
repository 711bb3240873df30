//! Strang split-step time propagation.
//!
//! One step advances ψ by `dt` via
//! ```text
//! exp(-i·V·dt/2) · F⁻¹ · exp(-i·½k²·dt) · F · exp(-i·V·dt/2)
//! ```
//! where `F` is the 2D discrete Fourier transform, i.e. the symmetric
//! splitting `exp(-i(T+V)dt) ≈ exp(-iV·dt/2)·exp(-iT·dt)·exp(-iV·dt/2)`,
//! accurate to second order in `dt`. Probability is not renormalized between
//! steps.
//!
//! [`step`] itself is a pure in-place update with no state of its own beyond
//! cached FFT plans; [`Simulation`] owns the loop that applies it a fixed
//! number of times and hands each density frame to a [`FrameSink`].

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    config::SimulationConfig,
    error::SimResult,
    grid::Grid,
    operator::OperatorSet,
    potential::PotentialField,
    utils::Fft2,
    wavefunction::WavefunctionState,
};

/// Receives one `(time, density)` pair per propagation step, in step order.
///
/// Color scaling, contrast, rendering, and encoding are entirely the sink's
/// business; the propagation loop hands over raw densities only.
pub trait FrameSink {
    fn accept(&mut self, time: f64, density: nd::Array2<f64>);
}

/// Collects every frame in memory.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    pub frames: Vec<(f64, nd::Array2<f64>)>,
}

impl FrameSink for FrameBuffer {
    fn accept(&mut self, time: f64, density: nd::Array2<f64>) {
        self.frames.push((time, density));
    }
}

fn apply_potential_half(ops: &OperatorSet, q: &mut nd::Array2<C64>) {
    nd::Zip::from(q).and(&ops.potential_half_phase)
        .for_each(|qk, vk| { *qk *= vk; });
}

fn apply_kinetic(ops: &OperatorSet, fft: &mut Fft2, q: &mut nd::Array2<C64>) {
    fft.forward_inplace(q);
    nd::Zip::from(&mut *q).and(&ops.kinetic_phase)
        .for_each(|qk, tk| { *qk *= tk; });
    fft.inverse_inplace(q);
}

/// Advance the wavefunction by one time step in place.
///
/// Step N must be applied to the exact output of step N−1; the caller owns
/// the single evolving state and the sequencing.
pub fn step(state: &mut WavefunctionState, ops: &OperatorSet, fft: &mut Fft2) {
    apply_potential_half(ops, &mut state.psi);
    apply_kinetic(ops, fft, &mut state.psi);
    apply_potential_half(ops, &mut state.psi);
}

/// A fully assembled simulation: fixed operators plus the one evolving state.
///
/// Construction walks the dependency order Grid → PotentialField →
/// OperatorSet → WavefunctionState and fails fast on any invalid parameter;
/// after that, [`run`][Self::run] is infallible.
pub struct Simulation {
    pub grid: Grid,
    pub potential: PotentialField,
    pub operators: OperatorSet,
    pub state: WavefunctionState,
    fft: Fft2,
    steps: usize,
    elapsed_steps: usize,
}

impl Simulation {
    /// Build all fixed pieces and the initial state from a configuration.
    pub fn new(config: &SimulationConfig) -> SimResult<Self> {
        let grid = Grid::new(
            config.grid.nx, config.grid.ny, config.grid.lx, config.grid.ly)?;
        let potential = PotentialField::new(&grid, &config.barrier)?;
        let operators = OperatorSet::new(&grid, &potential, config.time.dt)?;
        let state = WavefunctionState::gaussian(
            &grid,
            config.packet.x0,
            config.packet.y0,
            config.packet.sigma,
            config.packet.k0y,
        )?;
        let fft = Fft2::new(grid.nx, grid.ny);
        log::info!(
            "assembled {}x{} grid over {}x{}, {} steps at dt = {}",
            grid.nx, grid.ny, grid.lx, grid.ly,
            config.time.steps, config.time.dt,
        );
        Ok(Self {
            grid,
            potential,
            operators,
            state,
            fft,
            steps: config.time.steps,
            elapsed_steps: 0,
        })
    }

    /// Advance by a single step and return the elapsed time.
    pub fn step_once(&mut self) -> f64 {
        step(&mut self.state, &self.operators, &mut self.fft);
        self.elapsed_steps += 1;
        self.elapsed_steps as f64 * self.operators.dt
    }

    /// Run the configured number of steps, handing each density frame to
    /// `sink` in step order.
    ///
    /// The produced stream is finite and non-restartable; a second call
    /// continues from the final state but emits no further frames.
    pub fn run<F: FrameSink>(&mut self, sink: &mut F) {
        while self.elapsed_steps < self.steps {
            let t = self.step_once();
            sink.accept(t, self.state.density());
        }
        log::info!(
            "finished {} steps; final norm = {:.6}",
            self.elapsed_steps,
            self.state.norm(&self.grid),
        );
    }
}
