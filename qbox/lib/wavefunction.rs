//! Piecewise-analytic bound-state wavefunctions of the finite square well.

use log::warn;
use ndarray as nd;
use crate::{
    Arr1,
    error::FError,
    grid::Grid,
    potential::WellParameters,
    roots::Parity,
    utils::{ wf_norm, wf_renormalize },
};

/// A wavefunction sampled over a [`Grid`].
///
/// The wavefunction is normalized such that the trapezoidal integral of its
/// square over the grid is 1, unless that integral was not positive to begin
/// with, in which case it is left as-is; check with [`Self::is_normalized`].
#[derive(Clone, Debug)]
pub struct Wavefunction {
    // amplitudes, aligned with the grid
    psi: nd::Array1<f64>,
    // trapezoidal norm before normalization
    norm: f64,
}

impl Wavefunction {
    /// Get a reference to the amplitude array.
    pub fn get_psi(&self) -> &nd::Array1<f64> { &self.psi }

    /// Consume `self`, returning the amplitude array.
    pub fn into_psi(self) -> nd::Array1<f64> { self.psi }

    /// Trapezoidal integral of the square of the wavefunction before
    /// normalization.
    pub fn raw_norm(&self) -> f64 { self.norm }

    /// Return `false` if normalization was skipped because the wavefunction
    /// had a non-positive (or non-finite) norm.
    pub fn is_normalized(&self) -> bool {
        self.norm > 0.0 && self.norm.is_finite()
    }

    /// Get the number of points in the wavefunction.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.psi.len() }

    /// Probability density `|ψ|²`.
    pub fn density(&self) -> nd::Array1<f64> { self.psi.mapv(|q| q * q) }
}

/// Construct the wavefunction of parity `parity` at energy `e` over `grid`.
///
/// With `k = √(2 m E) / ħ` and `γ = √(2 m (V0 - E)) / ħ`, the wavefunction is
/// ```text
///        cos(k x) or sin(k x)    for |x| ≤ a
/// ψ(x) = B exp(-γ (x - a))       for x > a
///        ±B exp(γ (x + a))       for x < -a
/// ```
/// where `B = ψ(a)` makes `ψ` continuous and the sign on the left follows the
/// parity. This is only a true eigenstate if `e` is a root of the
/// matching condition for `parity`; see [`solve`][crate::solve::solve].
///
/// Fails if `e` is not strictly inside `(0, V0)`.
pub fn build(params: &WellParameters, e: f64, parity: Parity, grid: &Grid)
    -> Result<Wavefunction, FError>
{
    FError::check_energy(e, params.depth())?;
    let a = params.half_width();
    let k = params.k(e);
    let gamma = params.gamma(e);
    let inside = |x: f64| -> f64 {
        match parity {
            Parity::Even => (k * x).cos(),
            Parity::Odd => (k * x).sin(),
        }
    };
    // decay is measured from the walls so that `exp` never sees a positive
    // argument
    let b = inside(a);
    let sign = parity.reflection_sign();
    let mut psi: nd::Array1<f64>
        = grid.get_x().mapv(|x| {
            if x.abs() <= a {
                inside(x)
            } else if x > a {
                b * (-gamma * (x - a)).exp()
            } else {
                sign * b * (gamma * (x + a)).exp()
            }
        });

    let dx = grid.get_dx();
    let norm = wf_norm(&psi, dx);
    if norm > 0.0 && norm.is_finite() {
        wf_renormalize(&mut psi, dx);
    } else {
        warn!(
            "wavefunction at E = {e:.6e} ({parity:?}) has norm {norm:e}; \
            leaving unnormalized"
        );
    }
    Ok(Wavefunction { psi, norm })
}

/// Return the number of nodes (sign changes between adjacent points) in a
/// sampled wavefunction.
///
/// Points where the wavefunction is exactly zero are skipped, so a node that
/// falls on a grid point is counted once.
pub fn node_count<S>(psi: &Arr1<S>) -> usize
where S: nd::Data<Elem = f64>
{
    let nonzero: Vec<f64>
        = psi.iter().copied().filter(|q| *q != 0.0).collect();
    nonzero.iter().zip(nonzero.iter().skip(1))
        .filter(|(qk, qkp1)| *qk * *qkp1 < 0.0)
        .count()
}
