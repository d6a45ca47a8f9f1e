//! Shared configuration and output handling for the driver binaries.

use std::{ fs, path::{ Path, PathBuf } };
use anyhow::Context;
use num_complex::Complex64 as C64;
use qbox::{
    infinite::InfiniteWell,
    potential::WellParameters,
    roots::SolveConfig,
    solve::FiniteWell,
};
use serde::{ Deserialize, Serialize };

/// Top-level driver configuration, read from a TOML file.
///
/// Every section is optional; missing values fall back to a well of width 2,
/// depth 10, and unit mass and ħ, sampled over 200 points.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub well: WellParameters,
    pub grid: GridConfig,
    pub solver: SolveConfig,
    pub infinite: InfiniteConfig,
    pub superposition: SuperpositionConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            well: WellParameters::new(1.0, 10.0, 1.0, 1.0)
                .expect("default well parameters are valid"),
            grid: GridConfig::default(),
            solver: SolveConfig::default(),
            infinite: InfiniteConfig::default(),
            superposition: SuperpositionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load a config from `path`, or return the defaults if `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else { return Ok(Self::default()); };
        let text = fs::read_to_string(path)
            .with_context(|| format!("couldn't read config {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("couldn't parse config {}", path.display()))
    }

    /// Load a config from the path given as the first command-line argument,
    /// if any.
    pub fn from_args() -> anyhow::Result<Self> {
        let path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Construct the finite well described by the `well`, `grid`, and
    /// `solver` sections.
    pub fn finite_well(&self) -> anyhow::Result<FiniteWell> {
        let well = FiniteWell::new(self.well, self.grid.points)?
            .with_config(self.solver)?;
        Ok(well)
    }

    /// Construct the infinite well described by the `infinite` section, using
    /// the mass and ħ of the `well` section.
    pub fn infinite_well(&self) -> anyhow::Result<InfiniteWell> {
        let well = InfiniteWell::new(
            self.infinite.length,
            self.well.mass(),
            self.well.hbar(),
            self.infinite.points,
        )?;
        Ok(well)
    }
}

/// Finite-well grid resolution.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self { Self { points: 200 } }
}

/// Infinite-well geometry.
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct InfiniteConfig {
    pub length: f64,
    pub points: usize,
}

impl Default for InfiniteConfig {
    fn default() -> Self { Self { length: 1.0, points: 100 } }
}

/// Infinite-well superposition to evolve in time.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SuperpositionConfig {
    /// Complex coefficients as `[re, im]` pairs.
    pub coefficients: Vec<[f64; 2]>,
    pub quantum_numbers: Vec<usize>,
    pub t_max: f64,
    pub steps: usize,
}

impl Default for SuperpositionConfig {
    fn default() -> Self {
        let c = 0.5_f64.sqrt();
        Self {
            coefficients: vec![[c, 0.0], [c, 0.0]],
            quantum_numbers: vec![1, 2],
            t_max: 1.0,
            steps: 100,
        }
    }
}

impl SuperpositionConfig {
    pub fn coefficients(&self) -> Vec<C64> {
        self.coefficients.iter().map(|[re, im]| C64::new(*re, *im)).collect()
    }
}

/// Where to write results.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self { Self { dir: PathBuf::from("output") } }
}

/// Create `dir` and any missing parents.
pub fn mkdir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("couldn't create directory {}", dir.display()))
}

/// Serialize `data` as pretty-printed JSON to `path`.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(data)?;
    fs::write(path, text)
        .with_context(|| format!("couldn't write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Initialize logging at `info` unless overridden by `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();
}
