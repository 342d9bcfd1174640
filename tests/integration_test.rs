use approx;
use itertools::Itertools;

use coulomb_tensors::angmom::cubic_harmonics::{cubic_names, CubicConvention, OrbitalShell};
use coulomb_tensors::drivers::kanamori_interaction::KanamoriInteractionDriver;
use coulomb_tensors::drivers::slater_interaction::SlaterInteractionDriver;
use coulomb_tensors::drivers::CoulombDriver;
use coulomb_tensors::interaction::kanamori::KanamoriUMatrix;
use coulomb_tensors::interaction::reduction::{reduce_4index_to_2index, t2g_submatrix};
use coulomb_tensors::interfaces::input::Input;
use coulomb_tensors::interfaces::InputHandle;
use coulomb_tensors::io::{read_coulomb_yaml, write_coulomb_yaml};

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_integration_slater_cubic_d_from_yaml() {
    init_logging();
    let inp = read_coulomb_yaml::<Input, _>(format!("{ROOT}/tests/input/slater_cubic_d.yml"))
        .unwrap();
    let params = inp.slater_interaction.as_ref().unwrap();
    let mut driver = SlaterInteractionDriver::builder()
        .parameters(params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let slater = driver.result().unwrap();

    let (u, uprime) = reduce_4index_to_2index(&slater.umat);
    let uprime_t2g = t2g_submatrix(&uprime, CubicConvention::Triqs).unwrap();
    let u_t2g = t2g_submatrix(&u, CubicConvention::Triqs).unwrap();
    for (i, j) in (0..3).cartesian_product(0..3) {
        if i == j {
            approx::assert_relative_eq!(uprime_t2g[(i, j)], 4.8, max_relative = 1e-12);
            approx::assert_abs_diff_eq!(u_t2g[(i, j)], 0.0, epsilon = 1e-12);
        } else {
            approx::assert_relative_eq!(
                uprime_t2g[(i, j)],
                3.7202453987730046,
                max_relative = 1e-12
            );
        }
    }
    assert_eq!(cubic_names(OrbitalShell::T2g), &["xy", "yz", "xz"]);
}

#[test]
fn test_integration_kanamori_from_yaml() {
    init_logging();
    let inp = read_coulomb_yaml::<Input, _>(format!("{ROOT}/tests/input/kanamori_full.yml"))
        .unwrap();
    let params = inp.kanamori_interaction.as_ref().unwrap();
    let mut driver = KanamoriInteractionDriver::builder()
        .parameters(params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let KanamoriUMatrix::FourIndex(umat) = driver.result().unwrap() else {
        panic!("Expected the four-index Kanamori form.");
    };
    let (u, uprime) = reduce_4index_to_2index(umat);
    assert_eq!(u[(0, 1)], 2.5 - 0.7);
    assert_eq!(uprime[(0, 1)], 2.5);
    assert_eq!(uprime[(2, 2)], 4.0);
}

#[test]
fn test_integration_slater_mismatch_from_yaml() {
    init_logging();
    let inp = read_coulomb_yaml::<Input, _>(format!("{ROOT}/tests/input/slater_mismatch.yml"))
        .unwrap();
    let params = inp.slater_interaction.as_ref().unwrap();
    let mut driver = SlaterInteractionDriver::builder()
        .parameters(params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let slater = driver.result().unwrap();
    assert_eq!(slater.radial_integrals, vec![4.0, 7.0, 4.0]);
    assert_eq!(slater.diagnostics.len(), 1);
}

#[test]
fn test_integration_input_yaml_round_trip() {
    init_logging();
    let inp = read_coulomb_yaml::<Input, _>(format!("{ROOT}/tests/input/slater_other_basis.yml"))
        .unwrap();
    let dir = std::env::temp_dir().join("coulomb_tensors_integration_test");
    std::fs::create_dir_all(&dir).unwrap();
    let name = dir.join("slater_other_basis");
    write_coulomb_yaml(&name, &inp).unwrap();
    let inp_back = read_coulomb_yaml::<Input, _>(name.with_extension("yml")).unwrap();
    let params = inp.slater_interaction.as_ref().unwrap();
    let params_back = inp_back.slater_interaction.as_ref().unwrap();
    assert_eq!(params_back.basis, params.basis);
    assert_eq!(params_back.radial_integrals, params.radial_integrals);
    assert_eq!(params_back.transformation, params.transformation);
    assert!(inp_back.handle().is_ok());
}
