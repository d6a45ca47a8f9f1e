//! Miscellaneous tools.

use std::f64::consts::TAU;
use ndarray::{ self as nd, Ix1, concatenate };
use num_complex::Complex64 as C64;
use num_traits::Float;
use rustfft as fft;
use crate::{ Arr1, error::LengthError };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm of a real wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    let two = A::one() + A::one();
    (dx / two) * (
        q[0].powi(2)
        + two * q.iter().skip(1).take(n - 2)
            .fold(A::zero(), |acc, qk| acc + qk.powi(2))
        + q[n - 1].powi(2)
    )
}

/// Calculate the inner product of two complex wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> Result<C64, LengthError>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    LengthError::check(q, p)?;
    let n: usize = q.len();
    let inner: C64
        = q.iter().zip(p).skip(1).take(n - 2)
        .fold(C64::from(0.0), |acc, (qk, pk)| acc + qk.conj() * pk);
    Ok(
        (dx / 2.0) * (
            q[0].conj() * p[0]
            + 2.0 * inner
            + q[n - 1].conj() * p[n - 1]
        )
    )
}

/// Renormalize a real wavefunction in place.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A)
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling interval `dt`.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    let nf = n as f64;
    let fp: nd::Array1<f64>
        = (0..(n + 1) / 2)
        .map(|k| k as f64 / (nf * dt))
        .collect();
    let fm: nd::Array1<f64>
        = (1..n / 2 + 1).rev()
        .map(|k| -(k as f64) / (nf * dt))
        .collect();
    concatenate!(nd::Axis(0), fp, fm)
}

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut buf: Vec<C64> = x.iter().copied().collect();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(buf.len());
    fft_plan.process(&mut buf);
    nd::Array1::from_vec(buf)
}

/// Perform the one-dimensional, complex-valued inverse FFT.
pub fn ifft<S>(f: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut buf: Vec<C64> = f.iter().copied().collect();
    let n = buf.len();
    let mut plan = fft::FftPlanner::new();
    let ifft_plan = plan.plan_fft_inverse(n);
    ifft_plan.process(&mut buf);
    let n = n as f64;
    buf.iter_mut().for_each(|xk| { *xk /= n; });
    nd::Array1::from_vec(buf)
}

/// Compute the expectation value of the Hamiltonian `-(ħ²/2m) ∂²/∂x² + V(x)`
/// for a real wavefunction `q` sampled alongside the potential `V` on a
/// uniform grid with spacing `dx`.
///
/// The kinetic term is applied spectrally, so `q` should be negligible at both
/// ends of the grid. The result is divided by the norm of `q`, which
/// therefore need not be normalized.
///
/// *Panics if the arrays have length less than 2*.
pub fn energy_expectation<S, T>(
    dx: f64,
    V: &Arr1<S>,
    q: &Arr1<T>,
    mass: f64,
    hbar: f64,
) -> Result<f64, LengthError>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(V, q)?;
    let n = q.len();
    let kin = hbar.powi(2) / (2.0 * mass);
    let qc: nd::Array1<C64> = q.mapv(C64::from);
    let mut tq = fft(&qc);
    tq.iter_mut().zip(fft_freq(n, dx))
        .for_each(|(tqk, fk)| { *tqk *= kin * (TAU * fk).powi(2); });
    let tq = ifft(&tq);
    let integrand: nd::Array1<f64>
        = nd::Zip::from(q).and(V).and(&tq)
        .map_collect(|qk, Vk, tqk| qk * tqk.re + Vk * qk * qk);
    Ok(trapz(&integrand, dx) / wf_norm(q, dx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trapz_integrates_linear_exactly() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 11);
        let y = x.mapv(|xk| 3.0 * xk + 1.0);
        assert_relative_eq!(trapz(&y, 0.2), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn renormalize_gives_unit_norm() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 501);
        let dx = x[1] - x[0];
        let mut q = x.mapv(|xk| 3.0 * (-xk * xk).exp());
        wf_renormalize(&mut q, dx);
        assert_relative_eq!(wf_norm(&q, dx), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn dot_checks_lengths() {
        let q: nd::Array1<C64> = nd::Array1::from_elem(4, C64::from(1.0));
        let p: nd::Array1<C64> = nd::Array1::from_elem(5, C64::from(1.0));
        assert!(wf_dot(&q, &p, 0.1).is_err());
        let d = wf_dot(&q, &q, 0.1).unwrap();
        assert_relative_eq!(d.re, 0.3, epsilon = 1e-12);
        assert_relative_eq!(d.im, 0.0);
    }

    #[test]
    fn fft_freq_layout() {
        let f = fft_freq(4, 0.5);
        assert_eq!(f.to_vec(), vec![0.0, 0.5, -1.0, -0.5]);
        let f = fft_freq(5, 1.0);
        assert_eq!(f.len(), 5);
        assert_relative_eq!(f[2], 0.4);
        assert_relative_eq!(f[3], -0.4);
    }

    #[test]
    fn fft_roundtrip() {
        let x: nd::Array1<C64>
            = (0..16).map(|k| C64::new(k as f64, -(k as f64).sqrt())).collect();
        let y = ifft(&fft(&x));
        x.iter().zip(&y)
            .for_each(|(xk, yk)| assert!((xk - yk).norm() < 1e-12));
    }

    #[test]
    fn harmonic_oscillator_energy() {
        // ground state of V = x²/2 with m = ħ = 1 has E = 1/2
        let x: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 1024);
        let dx = x[1] - x[0];
        let v = x.mapv(|xk| 0.5 * xk * xk);
        let q = x.mapv(|xk| (-0.5 * xk * xk).exp());
        let e = energy_expectation(dx, &v, &q, 1.0, 1.0).unwrap();
        assert_relative_eq!(e, 0.5, epsilon = 1e-6);
    }
}
