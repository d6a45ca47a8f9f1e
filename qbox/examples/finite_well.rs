use qbox::{
    potential::WellParameters,
    solve::FiniteWell,
    utils::energy_expectation,
    wavefunction::node_count,
};

// solve for the bound states of a finite square well and check each one
// against the Hamiltonian

fn main() {
    const HALF_WIDTH: f64 = 1.0;
    const DEPTH: f64 = 50.0;

    let params = WellParameters::new(HALF_WIDTH, DEPTH, 1.0, 1.0).unwrap();
    println!("well strength z0 = {:.6}", params.strength());
    println!("expected bound states: {}", params.bound_state_count());

    // sample over [-3a, 3a]
    let well = FiniteWell::new(params, 2048).unwrap();
    let v = well.potential();
    let dx = well.get_grid().get_dx();

    let sols = well.bound_states().unwrap();
    if sols.is_empty() {
        println!("no bound states found");
        return;
    }
    for sol in sols.iter() {
        let psi = sol.wf.get_psi();
        let e_check = energy_expectation(dx, &v, psi, 1.0, 1.0).unwrap();
        println!(
            "{:?}\tE = {:.8}\t<H> = {:.8}\tnodes = {}",
            sol.parity, sol.e, e_check, node_count(psi),
        );
    }

    // probability to leak through one well-width of barrier from the ground
    // state
    let t = well.tunneling_probability(sols[0].e, 2.0 * HALF_WIDTH).unwrap();
    println!("ground-state tunneling probability: {t:.3e}");
}
