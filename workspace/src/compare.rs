use log::warn;
use serde::Serialize;
use lib::{ Config, init_logging, mkdir, write_json };
use qbox::{ infinite::InfiniteWell, roots::Parity, wavefunction::node_count };

// compare the spectrum of a finite well against that of an infinite well of the
// same width

#[derive(Serialize)]
struct Row {
    n: usize,
    parity: Parity,
    finite: f64,
    infinite: f64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_args()?;
    let finite = config.finite_well()?;
    let params = finite.get_params();
    let infinite = InfiniteWell::new(
        2.0 * params.half_width(),
        params.mass(),
        params.hbar(),
        finite.get_grid().len(),
    )?;

    let sols = finite.bound_states()?;
    if sols.is_empty() {
        println!("no bound states found");
    }
    // quantum number from the node count
    let rows: Vec<Row>
        = sols.iter()
        .map(|sol| -> anyhow::Result<Row> {
            let n = node_count(sol.wf.get_psi()) + 1;
            if (n % 2 == 1) != sol.parity.is_even() {
                warn!(
                    "{:?} state at E = {:.6e} has {} node(s); grid may be too \
                    coarse",
                    sol.parity, sol.e, n - 1,
                );
            }
            Ok(Row {
                n,
                parity: sol.parity,
                finite: sol.e,
                infinite: infinite.energy_level(n)?,
            })
        })
        .collect::<anyhow::Result<_>>()?;
    println!("{:>4} {:>6} {:>18} {:>18}", "n", "parity", "finite", "infinite");
    rows.iter()
        .for_each(|row| {
            println!(
                "{:>4} {:>6} {:>18.10e} {:>18.10e}",
                row.n, format!("{:?}", row.parity), row.finite, row.infinite,
            );
        });

    let outdir = config.output.dir.clone();
    mkdir(&outdir)?;
    write_json(&outdir.join("compare.json"), &rows)?;
    Ok(())
}
