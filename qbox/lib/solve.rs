//! Functions to compute the bound-state spectrum of the finite square well.

use std::cmp;
use log::{ debug, info, warn };
use ndarray as nd;
use serde::Serialize;
use crate::{
    error::{ ConfigError, FError },
    grid::Grid,
    potential::WellParameters,
    roots::{ Parity, RootFinder, SolveConfig, NUM_SEEDS },
    wavefunction::{ self, Wavefunction },
};

pub type FResult<T> = Result<T, FError>;

/// A single bound-state energy, tagged with the parity of the matching
/// condition it solves.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Level {
    /// Energy
    pub e: f64,
    /// Parity
    pub parity: Parity,
}

impl Level {
    /// Compare two `Level`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// A single bound state: energy, parity, and wavefunction.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Parity
    pub parity: Parity,
    /// Wavefunction
    pub wf: Wavefunction,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Strip the wavefunction.
    pub fn level(&self) -> Level { Level { e: self.e, parity: self.parity } }
}

/// Find the bound-state energies of a finite well with default tolerances.
///
/// See [`solve_with`].
pub fn solve(params: &WellParameters) -> FResult<Vec<Level>> {
    solve_with(params, &SolveConfig::default())
}

/// Find the bound-state energies of a finite well.
///
/// Each parity's matching condition is [searched][RootFinder::search_seeds]
/// from [nine seeds][Parity::seeds], which take the lowest nine roots of that
/// parity in ascending order. Seeds that fail to produce an acceptable root
/// are discarded; the accepted energies from both parities are then sorted
/// and deduplicated (two energies closer than `config.epsilon` are the same
/// state).
///
/// Since each seed yields at most one root, at most 18 states can be found.
/// Deep wells may support more bound states than that; the ones dropped are
/// always the highest of each parity, and a warning is logged. The lowest 18
/// states are never skipped, so the number of states returned never
/// decreases as the well is made deeper.
pub fn solve_with(params: &WellParameters, config: &SolveConfig)
    -> FResult<Vec<Level>>
{
    config.check()?;
    let mut levels: Vec<Level> = Vec::with_capacity(2 * NUM_SEEDS);
    for parity in [Parity::Even, Parity::Odd] {
        let finder = RootFinder::new(params, parity, *config)?;
        let seeds = parity.seeds(params.depth());
        for (guess, res) in seeds.zip(finder.search_seeds()) {
            match res {
                Ok(e) => {
                    debug!("{parity:?} seed {guess:.6e}: root at {e:.12e}");
                    levels.push(Level { e, parity });
                },
                Err(err) => {
                    debug!("{parity:?} seed {guess:.6e}: discarded: {err}");
                },
            }
        }
    }
    levels.sort_by(|l, r| l.cmp_energy(r).unwrap_or(cmp::Ordering::Equal));
    levels.dedup_by(|next, kept| (next.e - kept.e).abs() < config.epsilon);

    let expected = params.bound_state_count();
    info!(
        "found {} bound state(s) in well with strength z0 = {:.6}",
        levels.len(),
        params.strength(),
    );
    if levels.len() < expected {
        warn!(
            "seeded search found {} of {} bound states; higher states exceed \
            the number of seeds",
            levels.len(),
            expected,
        );
    }
    Ok(levels)
}

/// Find all bound states of a finite well along with their wavefunctions,
/// sampled over `grid`.
pub fn bound_states(
    params: &WellParameters,
    grid: &Grid,
    config: &SolveConfig,
) -> FResult<Vec<Solution>>
{
    solve_with(params, config)?
        .into_iter()
        .map(|Level { e, parity }| {
            wavefunction::build(params, e, parity, grid)
                .map(|wf| Solution { e, parity, wf })
        })
        .collect()
}

/// Simple record to keep track of a well, the coordinate grid its states are
/// sampled over, and solver tolerances.
#[derive(Clone, Debug)]
pub struct FiniteWell {
    params: WellParameters,
    grid: Grid,
    config: SolveConfig,
}

impl FiniteWell {
    /// Create a new `FiniteWell` with a grid of `n` points spanning three
    /// half-widths on either side of the center.
    pub fn new(params: WellParameters, n: usize) -> Result<Self, ConfigError> {
        let grid = Grid::for_well(&params, n)?;
        Ok(Self { params, grid, config: SolveConfig::default() })
    }

    /// Create a new `FiniteWell` over an arbitrary grid.
    pub fn with_grid(params: WellParameters, grid: Grid) -> Self {
        Self { params, grid, config: SolveConfig::default() }
    }

    /// Replace the solver tolerances.
    pub fn with_config(mut self, config: SolveConfig) -> FResult<Self> {
        config.check()?;
        self.config = config;
        Ok(self)
    }

    /// Get a reference to the well parameters.
    pub fn get_params(&self) -> &WellParameters { &self.params }

    /// Get a reference to the coordinate grid.
    pub fn get_grid(&self) -> &Grid { &self.grid }

    /// Get the solver tolerances.
    pub fn get_config(&self) -> SolveConfig { self.config }

    /// Sample the potential over the grid.
    pub fn potential(&self) -> nd::Array1<f64> {
        self.params.potential_arr(self.grid.get_x())
    }

    /// Thin interface to [`solve_with`].
    pub fn solve(&self) -> FResult<Vec<Level>> {
        solve_with(&self.params, &self.config)
    }

    /// Thin interface to [`wavefunction::build`].
    pub fn wavefunction(&self, e: f64, parity: Parity) -> FResult<Wavefunction> {
        wavefunction::build(&self.params, e, parity, &self.grid)
    }

    /// Thin interface to [`bound_states`].
    pub fn bound_states(&self) -> FResult<Vec<Solution>> {
        bound_states(&self.params, &self.grid, &self.config)
    }

    /// Thin interface to [`WellParameters::tunneling_probability`].
    pub fn tunneling_probability(&self, e: f64, barrier_width: f64)
        -> FResult<f64>
    {
        self.params.tunneling_probability(e, barrier_width)
    }
}
