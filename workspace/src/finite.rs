use ndarray as nd;
use serde::Serialize;
use lib::{ Config, init_logging, mkdir, write_json };
use qbox::{ roots::Parity, solve::Solution, wavefunction::node_count };

// solve for the bound states of a finite square well

#[derive(Serialize)]
struct State {
    e: f64,
    parity: Parity,
    nodes: usize,
    normalized: bool,
    wf: Vec<f64>,
}

#[derive(Serialize)]
struct Output {
    half_width: f64,
    depth: f64,
    strength: f64,
    expected_states: usize,
    x: Vec<f64>,
    v: Vec<f64>,
    states: Vec<State>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_args()?;
    let well = config.finite_well()?;
    let params = well.get_params();

    let sols: Vec<Solution> = well.bound_states()?;
    if sols.is_empty() {
        println!("no bound states found");
    } else {
        println!("{:>5} {:>6} {:>18}", "nodes", "parity", "energy");
        sols.iter()
            .for_each(|sol| {
                let nodes = node_count(sol.wf.get_psi());
                println!("{:>5} {:>6} {:>18.10e}", nodes, format!("{:?}", sol.parity), sol.e);
            });
    }

    let states: Vec<State>
        = sols.into_iter()
        .map(|sol| {
            let nodes = node_count(sol.wf.get_psi());
            let normalized = sol.wf.is_normalized();
            State {
                e: sol.e,
                parity: sol.parity,
                nodes,
                normalized,
                wf: sol.wf.into_psi().to_vec(),
            }
        })
        .collect();
    let x: &nd::Array1<f64> = well.get_grid().get_x();
    let output = Output {
        half_width: params.half_width(),
        depth: params.depth(),
        strength: params.strength(),
        expected_states: params.bound_state_count(),
        x: x.to_vec(),
        v: well.potential().to_vec(),
        states,
    };

    let outdir = config.output.dir.clone();
    mkdir(&outdir)?;
    write_json(&outdir.join("finite.json"), &output)?;
    Ok(())
}
