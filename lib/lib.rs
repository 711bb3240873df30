#![allow(dead_code, non_snake_case)]

//! Provides constructs for numerical propagation of a two-dimensional quantum
//! wavepacket through a double-slit barrier via the second-order (Strang)
//! split-step pseudo-spectral method, in units where ħ = m = 1.
//!
//! The pieces assemble in dependency order: a [`grid::Grid`] fixes the
//! spatial sample points and their discrete-Fourier duals, a
//! [`potential::PotentialField`] holds the static slitted barrier, an
//! [`operator::OperatorSet`] caches the two unit-modulus phase factors applied
//! on every step, and [`propagate`] advances a
//! [`wavefunction::WavefunctionState`] in place, emitting one probability
//! density per step to a [`propagate::FrameSink`].
//!
//! Rendering, color mapping, and encoding are left entirely to the sink; the
//! numerical core only ever produces `(time, |ψ|²)` pairs.

pub mod config;
pub mod error;
pub mod grid;
pub mod operator;
pub mod potential;
pub mod propagate;
pub mod utils;
pub mod wavefunction;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
