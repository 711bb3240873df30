//! Miscellaneous tools.

use std::f64::consts::TAU;
use ndarray::{ self as nd, concatenate };
use ndrustfft::{ FftHandler, ndfft, ndifft };
use num_complex::Complex64 as C64;
use crate::Arr2;

/// Generate an array of angular wavenumbers to accompany a FFT of `n` points
/// for sample spacing `d`.
///
/// Follows the standard discrete-Fourier ordering: zero first, then positive
/// frequencies ascending, then negative frequencies descending.
pub fn fft_wavenumbers(n: usize, d: f64) -> nd::Array1<f64> {
    let dk = TAU / (n as f64 * d);
    if n % 2 == 0 {
        let kp: nd::Array1<f64>
            = (0..n / 2)
            .map(|i| i as f64 * dk)
            .collect();
        let km: nd::Array1<f64>
            = (1..n / 2 + 1).rev()
            .map(|i| -(i as f64) * dk)
            .collect();
        concatenate!(nd::Axis(0), kp, km)
    } else {
        let kp: nd::Array1<f64>
            = (0..(n + 1) / 2)
            .map(|i| i as f64 * dk)
            .collect();
        let km: nd::Array1<f64>
            = (1..(n + 1) / 2).rev()
            .map(|i| -(i as f64) * dk)
            .collect();
        concatenate!(nd::Axis(0), kp, km)
    }
}

/// Cached plans for the forward/inverse two-dimensional FFT pair.
///
/// The 2D transform decomposes into independent passes over rows (axis 1, x)
/// and columns (axis 0, y); plans and the intermediate buffer are held here so
/// the stepping loop never replans or reallocates. The inverse pass carries
/// the usual 1/N normalization, making `forward_inplace` followed by
/// `inverse_inplace` the identity up to floating-point rounding.
pub struct Fft2 {
    row: FftHandler<f64>,
    col: FftHandler<f64>,
    buf: nd::Array2<C64>,
}

impl Fft2 {
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            row: FftHandler::new(nx),
            col: FftHandler::new(ny),
            buf: nd::Array2::zeros((ny, nx)),
        }
    }

    /// Perform the two-dimensional, complex-valued FFT in place.
    pub fn forward_inplace(&mut self, q: &mut nd::Array2<C64>) {
        ndfft(q, &mut self.buf, &mut self.row, 1);
        ndfft(&self.buf, q, &mut self.col, 0);
    }

    /// Perform the two-dimensional, complex-valued inverse FFT in place.
    pub fn inverse_inplace(&mut self, q: &mut nd::Array2<C64>) {
        ndifft(q, &mut self.buf, &mut self.col, 0);
        ndifft(&self.buf, q, &mut self.row, 1);
    }
}

/// Calculate the norm Σ|ψ|²·dx·dy of a wavefunction.
pub fn wf_norm<S>(q: &Arr2<S>, dx: f64, dy: f64) -> f64
where S: nd::Data<Elem = C64>
{
    q.iter().map(|qk| qk.norm_sqr()).sum::<f64>() * dx * dy
}

/// Renormalize a wavefunction in place.
pub fn wf_renormalize<S>(q: &mut Arr2<S>, dx: f64, dy: f64)
where S: nd::DataMut<Elem = C64>
{
    let norm = wf_norm(q, dx, dy).sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
}

/// Calculate the total probability carried by a density array.
pub fn density_total<S>(rho: &Arr2<S>, dx: f64, dy: f64) -> f64
where S: nd::Data<Elem = f64>
{
    rho.sum() * dx * dy
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn test_fft_wavenumbers_even() {
        let k = fft_wavenumbers(4, 1.0);
        let expected = [0.0, 1.0, -2.0, -1.0].map(|i| i * TAU / 4.0);
        for (kk, ke) in k.iter().zip(expected) {
            assert_abs_diff_eq!(*kk, ke, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_fft_wavenumbers_odd() {
        let k = fft_wavenumbers(5, 0.5);
        let expected = [0.0, 1.0, 2.0, -2.0, -1.0].map(|i| i * TAU / 2.5);
        for (kk, ke) in k.iter().zip(expected) {
            assert_abs_diff_eq!(*kk, ke, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_fft2_roundtrip() {
        let mut q: nd::Array2<C64>
            = nd::Array2::from_shape_fn((8, 16), |(j, i)| {
                C64::new((i as f64).sin(), (j as f64).cos())
            });
        let q0 = q.clone();
        let mut fft = Fft2::new(16, 8);
        fft.forward_inplace(&mut q);
        fft.inverse_inplace(&mut q);
        for (qk, q0k) in q.iter().zip(&q0) {
            assert_abs_diff_eq!(qk.re, q0k.re, epsilon = 1e-12);
            assert_abs_diff_eq!(qk.im, q0k.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_wf_renormalize() {
        let mut q: nd::Array2<C64>
            = nd::Array2::from_elem((10, 10), C64::new(3.0, -1.0));
        wf_renormalize(&mut q, 0.1, 0.2);
        assert_abs_diff_eq!(wf_norm(&q, 0.1, 0.2), 1.0, epsilon = 1e-12);
    }
}
