//! Matching conditions for the finite square well and a seeded local root
//! search over them.
//!
//! Continuity of the wavefunction and its derivative at `x = a` gives, for
//! `k = √(2 m E) / ħ` and `γ = √(2 m (V0 - E)) / ħ`,
//! ```text
//! even:  k tan(k a) - γ = 0
//! odd:  -k cot(k a) - γ = 0
//! ```
//! Both have poles wherever the trigonometric factor diverges, so the search
//! itself is performed on the pole-free forms obtained by multiplying through
//! by `cos(k a)` (even) or `-sin(k a)` (odd),
//! ```text
//! even:  k sin(k a) - γ cos(k a) = 0
//! odd:   k cos(k a) + γ sin(k a) = 0
//! ```
//! which share exactly the same zeros inside `(0, V0)` (at a pole the pole-free
//! form evaluates to `±k ≠ 0`). Candidates are then accepted or rejected using
//! the untransformed conditions.

use std::f64::consts::PI;
use serde::{ Deserialize, Serialize };
use crate::{
    error::{ FError, NoConvergence },
    potential::WellParameters,
    DEF_EPSILON,
    DEF_MAXITERS,
    DEF_SCAN_STEPS,
};

/// Number of seeds per parity.
pub const NUM_SEEDS: usize = 9;

// fraction of the band excluded at either edge when scanning for sign changes
const BAND_MARGIN: f64 = 1e-12;

/// Symmetry class of a bound state under `x → -x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// `ψ(-x) = ψ(x)`
    Even,
    /// `ψ(-x) = -ψ(x)`
    Odd,
}

impl Parity {
    /// Return `true` if `self` is `Even`.
    pub fn is_even(&self) -> bool { matches!(self, Self::Even) }

    /// Return `true` if `self` is `Odd`.
    pub fn is_odd(&self) -> bool { matches!(self, Self::Odd) }

    /// Sign picked up by the wavefunction under reflection.
    pub fn reflection_sign(&self) -> f64 {
        match self {
            Self::Even => 1.0,
            Self::Odd => -1.0,
        }
    }

    /// Initial energy guesses for this parity in a well of depth `depth`:
    /// `depth (n - 1/2) / 10` for even states and `depth n / 10` for odd
    /// states, `n = 1, ..., 9`.
    pub fn seeds(self, depth: f64) -> impl Iterator<Item = f64> {
        let offset = if self.is_even() { 0.5 } else { 0.0 };
        (1..=NUM_SEEDS)
            .map(move |n| depth * (n as f64 - offset) / 10.0)
    }
}

/// Evaluate the matching condition for `parity` at energy `e`.
///
/// Returns `+∞` outside the open band `(0, V0)`, where the wave numbers are
/// not real and no bound state can exist.
pub fn matching(params: &WellParameters, parity: Parity, e: f64) -> f64 {
    if e <= 0.0 || e >= params.depth() || e.is_nan() { return f64::INFINITY; }
    let k = params.k(e);
    let gamma = params.gamma(e);
    let ka = k * params.half_width();
    match parity {
        Parity::Even => k * ka.tan() - gamma,
        Parity::Odd => -k / ka.tan() - gamma,
    }
}

// pole-free form of `matching`; defined on the closed band [0, V0]
fn matching_smooth(params: &WellParameters, parity: Parity, e: f64) -> f64 {
    let k = params.k(e);
    let gamma = params.gamma(e);
    let (s, c) = (k * params.half_width()).sin_cos();
    match parity {
        Parity::Even => k * s - gamma * c,
        Parity::Odd => k * c + gamma * s,
    }
}

/// Tolerances for the seeded root search.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Acceptance bound on the matching condition at a root, also used as
    /// the distance below which two energies are the same state (default:
    /// `1e-6`).
    pub epsilon: f64,
    /// Maximum number of refinement iterations per seed (default: `1000`).
    pub maxiters: usize,
    /// Minimum number of steps the band is divided into when scanning for
    /// sign changes; raised automatically for deep wells (default: `200`).
    pub scan_steps: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            epsilon: DEF_EPSILON,
            maxiters: DEF_MAXITERS,
            scan_steps: DEF_SCAN_STEPS,
        }
    }
}

impl SolveConfig {
    pub(crate) fn check(&self) -> Result<(), FError> {
        FError::check_epsilon(self.epsilon)?;
        FError::check_maxiters(self.maxiters)?;
        FError::check_scan_steps(self.scan_steps)?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
struct Bracket {
    e: (f64, f64),
    g: (f64, f64),
}

impl Bracket {
    fn distance(&self, e: f64) -> f64 {
        let (l, r) = self.e;
        if e < l { l - e } else if e > r { e - r } else { 0.0 }
    }
}

/// Seeded root search on the matching condition of a single parity.
#[derive(Copy, Clone, Debug)]
pub struct RootFinder<'a> {
    params: &'a WellParameters,
    parity: Parity,
    config: SolveConfig,
}

impl<'a> RootFinder<'a> {
    /// Create a new root finder.
    ///
    /// Fails if any of the tolerances in `config` is non-positive.
    pub fn new(params: &'a WellParameters, parity: Parity, config: SolveConfig)
        -> Result<Self, FError>
    {
        config.check()?;
        Ok(Self { params, parity, config })
    }

    /// The parity whose matching condition is searched.
    pub fn parity(&self) -> Parity { self.parity }

    /// Evaluate the matching condition; see [`matching`].
    pub fn eval(&self, e: f64) -> f64 { matching(self.params, self.parity, e) }

    fn eval_smooth(&self, e: f64) -> f64 {
        matching_smooth(self.params, self.parity, e)
    }

    /// Find the root of the matching condition nearest to `guess`.
    ///
    /// Every sign change of the matching condition in `(0, V0)` is bracketed
    /// (see [`Self::search_seeds`]), the bracket closest to `guess` is
    /// narrowed by a safeguarded secant (Illinois) iteration, and the result
    /// is accepted only if it lies strictly inside `(0, V0)` and the matching
    /// condition there is smaller than `epsilon` in magnitude.
    pub fn search(&self, guess: f64) -> Result<f64, NoConvergence> {
        if guess.is_nan() { return Err(NoConvergence::NoBracket(guess)); }
        let bracket = self.brackets().into_iter()
            .min_by(|l, r| l.distance(guess).total_cmp(&r.distance(guess)))
            .ok_or(NoConvergence::NoBracket(guess))?;
        self.accept(self.refine(bracket))
    }

    /// Run a search for every seed of this parity.
    ///
    /// The sign changes of the matching condition are handed to the seeds in
    /// ascending order, so the `n`-th seed refines the `n`-th lowest root and
    /// no two seeds converge to the same state. Seeds left without a sign
    /// change report [`NoConvergence::NoBracket`].
    pub fn search_seeds(&self) -> Vec<Result<f64, NoConvergence>> {
        let brackets = self.brackets();
        self.parity.seeds(self.params.depth())
            .enumerate()
            .map(|(j, guess)| -> Result<f64, NoConvergence> {
                let bracket = brackets.get(j).copied()
                    .ok_or(NoConvergence::NoBracket(guess))?;
                self.accept(self.refine(bracket))
            })
            .collect()
    }

    fn accept(&self, e: f64) -> Result<f64, NoConvergence> {
        if e <= 0.0 || e >= self.params.depth() || !e.is_finite() {
            return Err(NoConvergence::OutOfBand(e));
        }
        let residual = self.eval(e).abs();
        if residual < self.config.epsilon {
            Ok(e)
        } else {
            Err(NoConvergence::Residual(e, residual))
        }
    }

    // bracket every sign change of the pole-free form, lowest first
    //
    // sample points are evenly spaced in `k a` rather than in energy, at no
    // more than π/4 apart; roots of a single parity are more than π/2 apart in
    // `k a`, so each interval holds at most one of them
    fn brackets(&self) -> Vec<Bracket> {
        let depth = self.params.depth();
        let lo = depth * BAND_MARGIN;
        let hi = depth * (1.0 - BAND_MARGIN);
        let min_steps = (4.0 * self.params.strength() / PI).ceil() as usize;
        let steps = self.config.scan_steps.max(min_steps);
        let energy = |j: usize| -> f64 {
            lo + (hi - lo) * (j as f64 / steps as f64).powi(2)
        };

        let mut brackets: Vec<Bracket> = Vec::new();
        let mut prev = (lo, self.eval_smooth(lo));
        for j in 1..=steps {
            let e = energy(j);
            let g = self.eval_smooth(e);
            // a zero landing on a sample point closes the interval before it
            if prev.1 != 0.0 && prev.1 * g <= 0.0 {
                brackets.push(Bracket { e: (prev.0, e), g: (prev.1, g) });
            }
            prev = (e, g);
        }
        brackets
    }

    // Illinois-modified regula falsi; the sign change is kept between the two
    // working points at all times
    fn refine(&self, bracket: Bracket) -> f64 {
        let Bracket { e: (mut ea, mut eb), g: (mut ga, mut gb) } = bracket;
        if ga == 0.0 { return ea; }
        if gb == 0.0 { return eb; }
        let mut ec: f64;
        let mut gc: f64;
        for _ in 0..self.config.maxiters {
            ec = eb - gb * (eb - ea) / (gb - ga);
            if !(ec > ea.min(eb) && ec < ea.max(eb)) {
                ec = (ea + eb) / 2.0;
            }
            gc = self.eval_smooth(ec);
            if gc == 0.0 { return ec; }
            if gc * gb < 0.0 {
                ea = eb;
                ga = gb;
            } else {
                ga /= 2.0;
            }
            eb = ec;
            gb = gc;
            if (eb - ea).abs() <= 4.0 * f64::EPSILON * eb.abs() { break; }
        }
        eb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use approx::assert_relative_eq;

    fn params(depth: f64) -> WellParameters {
        WellParameters::new(1.0, depth, 1.0, 1.0).unwrap()
    }

    #[test]
    fn seeds_span_the_band() {
        let even: Vec<f64> = Parity::Even.seeds(10.0).collect();
        let odd: Vec<f64> = Parity::Odd.seeds(10.0).collect();
        assert_eq!(even.len(), NUM_SEEDS);
        assert_eq!(odd.len(), NUM_SEEDS);
        assert_relative_eq!(even[0], 0.5);
        assert_relative_eq!(even[8], 8.5);
        assert_relative_eq!(odd[0], 1.0);
        assert_relative_eq!(odd[8], 9.0);
    }

    #[test]
    fn matching_guards_domain() {
        let p = params(10.0);
        for parity in [Parity::Even, Parity::Odd] {
            assert_eq!(matching(&p, parity, 0.0), f64::INFINITY);
            assert_eq!(matching(&p, parity, -1.0), f64::INFINITY);
            assert_eq!(matching(&p, parity, 10.0), f64::INFINITY);
            assert_eq!(matching(&p, parity, 11.0), f64::INFINITY);
            assert_eq!(matching(&p, parity, f64::NAN), f64::INFINITY);
            assert!(matching(&p, parity, 5.0).is_finite());
        }
    }

    #[test]
    fn smooth_form_shares_zeros() {
        let p = params(50.0);
        let finder = RootFinder::new(&p, Parity::Even, SolveConfig::default())
            .unwrap();
        let e = finder.search(2.5).unwrap();
        assert!(matching_smooth(&p, Parity::Even, e).abs() < 1e-9);
        assert!(matching(&p, Parity::Even, e).abs() < 1e-6);
    }

    #[test]
    fn finds_nearest_root_below_first_seed() {
        // for z0 = 10 the ground state sits at ka ≈ 1.43, below the first
        // even seed
        let p = params(50.0);
        let finder = RootFinder::new(&p, Parity::Even, SolveConfig::default())
            .unwrap();
        let e = finder.search(2.5).unwrap();
        let ka = p.k(e) * p.half_width();
        assert!(ka > 0.0 && ka < std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(ka * ka.tan(), (100.0 - ka * ka).sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn odd_roots_satisfy_odd_condition() {
        let p = params(50.0);
        let finder = RootFinder::new(&p, Parity::Odd, SolveConfig::default())
            .unwrap();
        let found: Vec<f64>
            = finder.search_seeds().into_iter()
            .filter_map(Result::ok)
            .collect();
        assert!(!found.is_empty());
        for e in found {
            let ka = p.k(e) * p.half_width();
            // odd states live on branches where cot(ka) < 0
            assert!(ka.tan() < 0.0);
            assert!(matching(&p, Parity::Odd, e).abs() < 1e-6);
        }
    }

    #[test]
    fn shallow_well_has_no_odd_state() {
        // z0 < π/2: the odd condition has no zero in the band
        let p = params(0.01);
        let finder = RootFinder::new(&p, Parity::Odd, SolveConfig::default())
            .unwrap();
        assert!(finder.search_seeds().iter().all(Result::is_err));
        assert_eq!(finder.search(0.005), Err(NoConvergence::NoBracket(0.005)));
    }

    #[test]
    fn seeds_take_the_lowest_roots_in_order() {
        // z0 = 100√2 supports 45 states of each parity, far more than the
        // seeds can hold
        let p = params(1.0e4);
        for parity in [Parity::Even, Parity::Odd] {
            let finder = RootFinder::new(&p, parity, SolveConfig::default())
                .unwrap();
            let found: Vec<f64>
                = finder.search_seeds().into_iter()
                .map(Result::unwrap)
                .collect();
            assert_eq!(found.len(), NUM_SEEDS);
            // the j-th root of either parity lies on the j-th branch of
            // width π/2 assigned to that parity
            found.iter().enumerate()
                .for_each(|(j, e)| {
                    let branch = (p.k(*e) * p.half_width() / FRAC_PI_2).floor();
                    let expected = match parity {
                        Parity::Even => 2 * j,
                        Parity::Odd => 2 * j + 1,
                    };
                    assert_eq!(branch as usize, expected);
                });
        }
    }

    #[test]
    fn search_picks_the_closest_root() {
        let p = params(50.0);
        let finder = RootFinder::new(&p, Parity::Odd, SolveConfig::default())
            .unwrap();
        // odd roots at E ≈ 4.07, 16.13, 35.47
        assert_relative_eq!(finder.search(15.0).unwrap(), 16.1267, epsilon = 1e-3);
        assert_relative_eq!(finder.search(49.0).unwrap(), 35.4749, epsilon = 1e-3);
        assert_relative_eq!(finder.search(0.1).unwrap(), 4.0679, epsilon = 1e-3);
        assert!(matches!(finder.search(f64::NAN), Err(NoConvergence::NoBracket(_))));
    }

    #[test]
    fn rejects_bad_config() {
        let p = params(1.0);
        let bad = SolveConfig { epsilon: 0.0, ..SolveConfig::default() };
        assert!(matches!(
            RootFinder::new(&p, Parity::Even, bad),
            Err(FError::BadEpsilon(_)),
        ));
        let bad = SolveConfig { maxiters: 0, ..SolveConfig::default() };
        assert!(matches!(
            RootFinder::new(&p, Parity::Even, bad),
            Err(FError::BadMaxiters(0)),
        ));
        let bad = SolveConfig { scan_steps: 0, ..SolveConfig::default() };
        assert!(matches!(
            RootFinder::new(&p, Parity::Even, bad),
            Err(FError::BadScanSteps(0)),
        ));
    }
}
