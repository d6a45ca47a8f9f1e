//! Finite square well geometry and the quantities derived from it.

use std::f64::consts::PI;
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    error::{ ConfigError, FError },
};

/// Geometry and particle constants for a finite square well centered on the
/// origin,
/// ```text
/// V(x) = 0   for |x| ≤ a
///        V0  otherwise
/// ```
///
/// All fields are validated on construction and cannot be changed afterward,
/// so every function taking a `&WellParameters` may assume positive, finite
/// values.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWellParameters")]
pub struct WellParameters {
    half_width: f64,
    depth: f64,
    mass: f64,
    hbar: f64,
}

#[derive(Copy, Clone, Debug, Deserialize)]
struct RawWellParameters {
    half_width: f64,
    depth: f64,
    mass: f64,
    hbar: f64,
}

impl TryFrom<RawWellParameters> for WellParameters {
    type Error = ConfigError;

    fn try_from(raw: RawWellParameters) -> Result<Self, Self::Error> {
        Self::new(raw.half_width, raw.depth, raw.mass, raw.hbar)
    }
}

impl WellParameters {
    /// Create a new set of well parameters.
    ///
    /// Fails if any of the arguments is non-positive or non-finite.
    pub fn new(half_width: f64, depth: f64, mass: f64, hbar: f64)
        -> Result<Self, ConfigError>
    {
        ConfigError::check_size(half_width)?;
        ConfigError::check_depth(depth)?;
        ConfigError::check_mass(mass)?;
        ConfigError::check_hbar(hbar)?;
        Ok(Self { half_width, depth, mass, hbar })
    }

    /// Well half-width `a`.
    pub fn half_width(&self) -> f64 { self.half_width }

    /// Well depth `V0`.
    pub fn depth(&self) -> f64 { self.depth }

    /// Particle mass.
    pub fn mass(&self) -> f64 { self.mass }

    /// Reduced Planck constant.
    pub fn hbar(&self) -> f64 { self.hbar }

    /// Evaluate the potential at a single position.
    pub fn potential(&self, x: f64) -> f64 {
        if x.abs() <= self.half_width { 0.0 } else { self.depth }
    }

    /// Evaluate the potential element-wise over an array of positions.
    pub fn potential_arr<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.potential(xk))
    }

    /// Wave number inside the well, `√(2 m E) / ħ`.
    ///
    /// Only real for `E ≥ 0`.
    pub fn k(&self, e: f64) -> f64 {
        (2.0 * self.mass * e).sqrt() / self.hbar
    }

    /// Decay constant outside the well, `√(2 m (V0 - E)) / ħ`.
    ///
    /// Only real for `E ≤ V0`.
    pub fn gamma(&self, e: f64) -> f64 {
        (2.0 * self.mass * (self.depth - e)).sqrt() / self.hbar
    }

    /// Dimensionless well strength `z0 = a √(2 m V0) / ħ`.
    pub fn strength(&self) -> f64 {
        self.half_width * self.k(self.depth)
    }

    /// Exact number of bound states supported by the well, `⌈2 z0 / π⌉`.
    ///
    /// A finite square well always has at least one (even) bound state.
    pub fn bound_state_count(&self) -> usize {
        ((2.0 * self.strength() / PI).ceil() as usize).max(1)
    }

    /// WKB-style estimate of the probability to tunnel through a barrier of
    /// height `V0` and width `barrier_width` at energy `e`,
    /// ```text
    /// T ≈ exp(-2 γ w)
    /// ```
    /// Energies at or above the barrier are transmitted with certainty.
    pub fn tunneling_probability(&self, e: f64, barrier_width: f64)
        -> Result<f64, FError>
    {
        if !barrier_width.is_finite() || barrier_width < 0.0 {
            return Err(FError::BadBarrierWidth(barrier_width));
        }
        if e.is_nan() { return Err(FError::BadEnergy(e, self.depth)); }
        if e >= self.depth { return Ok(1.0); }
        Ok((-2.0 * self.gamma(e) * barrier_width).exp())
    }
}
