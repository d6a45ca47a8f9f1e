use approx::assert_relative_eq;
use qbox::{
    error::ConfigError,
    grid::Grid,
    potential::WellParameters,
    roots::Parity,
    solve::{ self, FiniteWell },
    utils::{ energy_expectation, trapz },
    wavefunction::{ self, node_count },
};

fn params(depth: f64) -> WellParameters {
    WellParameters::new(1.0, depth, 1.0, 1.0).unwrap()
}

#[test]
fn moderate_well_ground_state() {
    let params = params(50.0);
    let grid = Grid::for_well(&params, 1000).unwrap();
    let levels = solve::solve(&params).unwrap();
    assert!(!levels.is_empty());
    assert!(levels.iter().all(|lev| 0.0 < lev.e && lev.e < 50.0));

    let ground = levels[0];
    assert_eq!(ground.parity, Parity::Even);
    let wf = wavefunction::build(&params, ground.e, ground.parity, &grid)
        .unwrap();
    let psi = wf.get_psi();
    assert_eq!(node_count(psi), 0);
    // nodeless and positive everywhere
    assert!(psi.iter().all(|q| *q > 0.0));
    let n = psi.len();
    (0..n).for_each(|j| assert_relative_eq!(psi[j], psi[n - 1 - j], epsilon = 1e-9));
}

#[test]
fn shallow_well_single_state() {
    let levels = solve::solve(&params(0.01)).unwrap();
    assert!(levels.len() <= 1);
    if let Some(lev) = levels.first() {
        assert_eq!(lev.parity, Parity::Even);
        assert!(0.0 < lev.e && lev.e < 0.01);
    }
}

#[test]
fn non_positive_depth_is_rejected() {
    assert_eq!(
        WellParameters::new(1.0, 0.0, 1.0, 1.0),
        Err(ConfigError::BadDepth(0.0)),
    );
    assert_eq!(
        WellParameters::new(1.0, -5.0, 1.0, 1.0),
        Err(ConfigError::BadDepth(-5.0)),
    );
    let de: Result<WellParameters, _> = serde_json::from_str(
        r#"{ "half_width": 1.0, "depth": 0.0, "mass": 1.0, "hbar": 1.0 }"#);
    assert!(de.is_err());
    let de: WellParameters = serde_json::from_str(
        r#"{ "half_width": 1.0, "depth": 2.0, "mass": 1.0, "hbar": 1.0 }"#)
        .unwrap();
    assert_eq!(de, params(2.0));
}

#[test]
fn deeper_wells_never_lose_states() {
    let mut depth = 0.01;
    let mut last = 0;
    while depth <= 2000.0 {
        let levels = solve::solve(&params(depth)).unwrap();
        assert!(
            levels.len() >= last,
            "{} state(s) at V0 = {depth} after {last} before", levels.len(),
        );
        // lowest states first, alternating in parity from an even ground state
        levels.iter().enumerate()
            .for_each(|(j, lev)| {
                let expected = if j % 2 == 0 { Parity::Even } else { Parity::Odd };
                assert_eq!(lev.parity, expected, "level {j} at V0 = {depth}");
            });
        last = levels.len();
        depth *= 1.02;
    }
    assert_eq!(last, 18);
}

#[test]
fn deep_wells_keep_the_ground_state() {
    for depth in [150.0, 500.0] {
        let params = params(depth);
        let grid = Grid::for_well(&params, 1200).unwrap();
        let levels = solve::solve(&params).unwrap();
        levels.iter().enumerate()
            .for_each(|(j, lev)| {
                let wf = wavefunction::build(&params, lev.e, lev.parity, &grid)
                    .unwrap();
                assert_eq!(node_count(wf.get_psi()), j);
            });
        // the ground state lies just below the infinite-well value π²/8
        assert!(levels[0].e < std::f64::consts::PI.powi(2) / 8.0);
        assert!(levels[0].e > 1.0);
    }
}

#[test]
fn states_are_eigenstates_of_the_hamiltonian() {
    let well = FiniteWell::new(params(50.0), 2048).unwrap();
    let v = well.potential();
    let dx = well.get_grid().get_dx();
    let sols = well.bound_states().unwrap();
    assert_eq!(sols.len(), 7);
    for sol in sols {
        let psi = sol.wf.get_psi();
        assert_relative_eq!(trapz(&sol.wf.density(), dx), 1.0, epsilon = 1e-3);
        let e = energy_expectation(dx, &v, psi, 1.0, 1.0).unwrap();
        assert_relative_eq!(e, sol.e, max_relative = 5e-3);
    }
}

#[test]
fn states_are_mutually_orthogonal() {
    let well = FiniteWell::new(params(20.0), 1500).unwrap();
    let dx = well.get_grid().get_dx();
    let sols = well.bound_states().unwrap();
    for (j, sj) in sols.iter().enumerate() {
        for sk in sols.iter().skip(j + 1) {
            let prod = sj.wf.get_psi() * sk.wf.get_psi();
            assert!(trapz(&prod, dx).abs() < 1e-2);
        }
    }
}

#[test]
fn scaled_units_give_scaled_energies() {
    // doubling ħ with V0 scaled by 4 leaves z0, and hence the spectrum in
    // units of V0, unchanged
    let base = solve::solve(&params(10.0)).unwrap();
    let scaled = solve::solve(&WellParameters::new(1.0, 40.0, 1.0, 2.0).unwrap())
        .unwrap();
    assert_eq!(base.len(), scaled.len());
    base.iter().zip(&scaled)
        .for_each(|(b, s)| {
            assert_eq!(b.parity, s.parity);
            assert_relative_eq!(4.0 * b.e, s.e, max_relative = 1e-9);
        });
}
