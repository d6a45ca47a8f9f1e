//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a well or grid is constructed from invalid parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Returned when a well half-width (or infinite-well length) is
    /// non-positive or non-finite.
    #[error("well size must be greater than 0; got {0}")]
    BadSize(f64),

    /// Returned when a well depth is non-positive or non-finite; such a well
    /// has no bound states.
    #[error("well depth must be greater than 0; got {0}")]
    BadDepth(f64),

    /// Returned when a particle mass is non-positive or non-finite.
    #[error("mass must be greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when the reduced Planck constant is non-positive or
    /// non-finite.
    #[error("hbar must be greater than 0; got {0}")]
    BadHbar(f64),

    /// Returned when a grid is requested with fewer than two points.
    #[error("grids must have at least 2 points; got {0}")]
    BadGridSize(usize),

    /// Returned when grid bounds are non-finite or not increasing.
    #[error("grid bounds must be finite and increasing; got ({0}, {1})")]
    BadGridBounds(f64, f64),
}

impl ConfigError {
    fn positive(val: f64) -> bool { val.is_finite() && val > 0.0 }

    pub(crate) fn check_size(size: f64) -> Result<(), Self> {
        Self::positive(size).then_some(()).ok_or(Self::BadSize(size))
    }

    pub(crate) fn check_depth(depth: f64) -> Result<(), Self> {
        Self::positive(depth).then_some(()).ok_or(Self::BadDepth(depth))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        Self::positive(mass).then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        Self::positive(hbar).then_some(()).ok_or(Self::BadHbar(hbar))
    }

    pub(crate) fn check_grid(min: f64, max: f64, n: usize)
        -> Result<(), Self>
    {
        if n < 2 { return Err(Self::BadGridSize(n)); }
        (min.is_finite() && max.is_finite() && min < max)
            .then_some(())
            .ok_or(Self::BadGridBounds(min, max))
    }
}

/// Outcome of a single seeded root search that did not produce a physical
/// root.
///
/// This is an expected result of probing a seed that doesn't lead to a bound
/// state; [`solve`][crate::solve::solve] discards these.
#[derive(Debug, Error, PartialEq)]
pub enum NoConvergence {
    /// No sign change of the matching condition was found anywhere in the
    /// band around the seed.
    #[error("no sign change found around seed {0}")]
    NoBracket(f64),

    /// The refined candidate fell outside the open interval `(0, V0)`.
    #[error("candidate {0} lies outside the bound-state band")]
    OutOfBand(f64),

    /// The matching condition at the refined candidate exceeded the
    /// acceptance tolerance.
    #[error("residual {1:e} at candidate {0} exceeds tolerance")]
    Residual(f64, f64),
}

/// Returned from finite-well solver functions.
#[derive(Debug, Error)]
pub enum FError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when a non-positive `scan_steps` value is encountered.
    #[error("scan_steps must be greater than 0; got {0}")]
    BadScanSteps(usize),

    /// Returned when a wavefunction is requested for an energy outside the
    /// bound-state band `(0, V0)`.
    #[error("energy must lie strictly between 0 and the well depth {1}; got {0}")]
    BadEnergy(f64, f64),

    /// Returned when a barrier width is negative or non-finite.
    #[error("barrier width must be non-negative; got {0}")]
    BadBarrierWidth(f64),

    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl FError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    pub(crate) fn check_scan_steps(scan_steps: usize) -> Result<(), Self> {
        (scan_steps != 0).then_some(()).ok_or(Self::BadScanSteps(scan_steps))
    }

    pub(crate) fn check_energy(e: f64, depth: f64) -> Result<(), Self> {
        (e > 0.0 && e < depth).then_some(()).ok_or(Self::BadEnergy(e, depth))
    }
}

/// Returned from infinite-well functions.
#[derive(Debug, Error)]
pub enum IError {
    /// Returned when a quantum number of 0 is encountered.
    #[error("quantum numbers must be greater than 0")]
    BadQuantumNumber,

    /// Returned when a superposition is requested with no components.
    #[error("superpositions must have at least one component")]
    EmptySuperposition,

    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Returned when coefficient and quantum number lists have unequal
    /// length.
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl IError {
    pub(crate) fn check_quantum_number(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadQuantumNumber)
    }
}
