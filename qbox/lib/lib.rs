#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for the eigenstates of the
//! one-dimensional square well, in both its infinite (closed-form) and finite
//! (transcendental) varieties.
//!
//! The finite well is solved by locating the zeros of the even- and odd-parity
//! matching conditions inside the band `(0, V0)` from a fixed set of energy
//! seeds, then reconstructing the piecewise wavefunction for each bound state:
//! ```
//! use qbox::{ grid::Grid, potential::WellParameters, solve, wavefunction };
//!
//! let params = WellParameters::new(1.0, 50.0, 1.0, 1.0).unwrap();
//! let grid = Grid::for_well(&params, 600).unwrap();
//! let levels = solve::solve(&params).unwrap();
//! assert!(!levels.is_empty());
//! assert!(levels.iter().all(|lev| 0.0 < lev.e && lev.e < params.depth()));
//!
//! let ground = &levels[0];
//! let wf = wavefunction::build(&params, ground.e, ground.parity, &grid)
//!     .unwrap();
//! assert_eq!(wf.len(), grid.len());
//! assert_eq!(wavefunction::node_count(wf.get_psi()), 0);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod infinite;
pub mod potential;
pub mod roots;
pub mod solve;
pub mod utils;
pub mod wavefunction;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 1000;
pub(crate) const DEF_SCAN_STEPS: usize = 200;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
