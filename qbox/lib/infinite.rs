//! Closed-form eigenstates of the infinite square well on `[0, L]` and their
//! time-dependent superpositions.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ ConfigError, IError, LengthError },
};

pub type IResult<T> = Result<T, IError>;

/// Infinite square well of width `L` with walls at `x = 0` and `x = L`.
#[derive(Clone, Debug)]
pub struct InfiniteWell {
    length: f64,
    mass: f64,
    hbar: f64,
    // coordinate array over [0, L]
    x: nd::Array1<f64>,
}

impl InfiniteWell {
    /// Create a new `InfiniteWell` sampled over `n` evenly spaced points
    /// between the walls (inclusive).
    pub fn new(length: f64, mass: f64, hbar: f64, n: usize) -> IResult<Self> {
        ConfigError::check_size(length)?;
        ConfigError::check_mass(mass)?;
        ConfigError::check_hbar(hbar)?;
        ConfigError::check_grid(0.0, length, n)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, length, n);
        Ok(Self { length, mass, hbar, x })
    }

    /// Well width.
    pub fn length(&self) -> f64 { self.length }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.length / (self.x.len() - 1) as f64 }

    /// Energy of the `n`-th level, `(n π ħ)² / (2 m L²)`.
    pub fn energy_level(&self, n: usize) -> IResult<f64> {
        IError::check_quantum_number(n)?;
        Ok(
            (n as f64 * PI * self.hbar).powi(2)
                / (2.0 * self.mass * self.length.powi(2))
        )
    }

    /// Evaluate the `n`-th eigenfunction, `√(2/L) sin(n π x / L)`, over the
    /// well's grid.
    pub fn wavefunction(&self, n: usize) -> IResult<nd::Array1<f64>> {
        self.wavefunction_at(n, &self.x)
    }

    /// Evaluate the `n`-th eigenfunction at arbitrary positions.
    ///
    /// Positions outside the walls are not treated specially.
    pub fn wavefunction_at<S>(&self, n: usize, x: &Arr1<S>)
        -> IResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        IError::check_quantum_number(n)?;
        let amp = (2.0 / self.length).sqrt();
        let kn = n as f64 * PI / self.length;
        Ok(x.mapv(|xk| amp * (kn * xk).sin()))
    }

    /// Probability density of the `n`-th eigenstate over the well's grid.
    pub fn probability_density(&self, n: usize) -> IResult<nd::Array1<f64>> {
        self.wavefunction(n).map(|q| q.mapv(|qk| qk * qk))
    }

    /// Evaluate the superposition
    /// ```text
    /// Ψ(x, t) = Σ_j c_j ψ_{n_j}(x) exp(-i E_{n_j} t / ħ)
    /// ```
    /// over the well's grid.
    ///
    /// Coefficients are used as given; normalize them beforehand if a
    /// normalized state is desired.
    pub fn superposition(&self, coeffs: &[C64], qnums: &[usize], t: f64)
        -> IResult<nd::Array1<C64>>
    {
        let components = self.components(coeffs, qnums)?;
        Ok(self.superpose(&components, t))
    }

    /// Compute the probability density of a [superposition][Self::superposition]
    /// at each of `times`.
    ///
    /// In the returned 2D array the first axis indexes time.
    pub fn time_evolve<S>(&self, coeffs: &[C64], qnums: &[usize], times: &Arr1<S>)
        -> IResult<nd::Array2<f64>>
    where S: nd::Data<Elem = f64>
    {
        let components = self.components(coeffs, qnums)?;
        let mut rho: nd::Array2<f64>
            = nd::Array2::zeros((times.len(), self.x.len()));
        rho.outer_iter_mut().zip(times)
            .for_each(|(mut rho_t, &t)| {
                let psi = self.superpose(&components, t);
                rho_t.zip_mut_with(&psi, |r, q| { *r = q.norm_sqr(); });
            });
        Ok(rho)
    }

    // pre-evaluate (coefficient, energy, eigenfunction) for each component
    fn components(&self, coeffs: &[C64], qnums: &[usize])
        -> IResult<Vec<(C64, f64, nd::Array1<f64>)>>
    {
        if coeffs.len() != qnums.len() {
            return Err(LengthError(coeffs.len(), qnums.len()).into());
        }
        if coeffs.is_empty() { return Err(IError::EmptySuperposition); }
        coeffs.iter().zip(qnums)
            .map(|(&c, &n)| Ok((c, self.energy_level(n)?, self.wavefunction(n)?)))
            .collect()
    }

    fn superpose(&self, components: &[(C64, f64, nd::Array1<f64>)], t: f64)
        -> nd::Array1<C64>
    {
        let mut psi: nd::Array1<C64> = nd::Array1::zeros(self.x.len());
        components.iter()
            .for_each(|(c, e, q)| {
                let phase = C64::from_polar(1.0, -e * t / self.hbar);
                psi.zip_mut_with(q, |pk, qk| { *pk += c * phase * *qk; });
            });
        psi
    }
}
