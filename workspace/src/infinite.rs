use ndarray as nd;
use serde::Serialize;
use lib::{ Config, init_logging, mkdir, write_json };

// compute levels of the infinite square well and evolve a superposition of
// them in time

const NUM_LEVELS: usize = 5;

#[derive(Serialize)]
struct Output {
    length: f64,
    x: Vec<f64>,
    e: Vec<f64>,
    wf: Vec<Vec<f64>>,
    t: Vec<f64>,
    rho: Vec<Vec<f64>>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_args()?;
    let well = config.infinite_well()?;

    let e: Vec<f64>
        = (1..=NUM_LEVELS)
        .map(|n| well.energy_level(n))
        .collect::<Result<_, _>>()?;
    let wf: Vec<Vec<f64>>
        = (1..=NUM_LEVELS)
        .map(|n| well.wavefunction(n).map(|q| q.to_vec()))
        .collect::<Result<_, _>>()?;
    e.iter().enumerate()
        .for_each(|(j, ej)| println!("E_{} = {:.10e}", j + 1, ej));

    let sup = &config.superposition;
    let t: nd::Array1<f64>
        = nd::Array1::linspace(0.0, sup.t_max, sup.steps.max(2));
    let rho: nd::Array2<f64>
        = well.time_evolve(&sup.coefficients(), &sup.quantum_numbers, &t)?;

    let output = Output {
        length: well.length(),
        x: well.get_x().to_vec(),
        e,
        wf,
        t: t.to_vec(),
        rho: rho.outer_iter().map(|row| row.to_vec()).collect(),
    };

    let outdir = config.output.dir.clone();
    mkdir(&outdir)?;
    write_json(&outdir.join("infinite.json"), &output)?;
    Ok(())
}
