use std::str::FromStr;

use approx;
use itertools::Itertools;
use ndarray::Array2;
use num_complex::Complex;

use crate::angmom::cubic_harmonics::{spherical_to_cubic, CubicConvention};
use crate::interaction::radial_integrals::u_j_to_radial_integrals;
use crate::interaction::reduction::t2g_submatrix;
use crate::interaction::slater::{
    u_matrix_slater, u_matrix_slater_spherical, InteractionBasis, SlaterDiagnostic, SlaterParams,
};
use crate::interaction::InteractionError;

type C128 = Complex<f64>;

fn assert_matrices_close(a: &Array2<f64>, b: &Array2<f64>, epsilon: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.iter().zip(b.iter()) {
        approx::assert_abs_diff_eq!(x, y, epsilon = epsilon);
    }
}

#[test]
fn test_slater_spherical_permutation_symmetries() {
    let radial_integrals = u_j_to_radial_integrals(2, 4.0, 0.7).unwrap();
    let umat = u_matrix_slater_spherical(2, &radial_integrals).unwrap();
    assert_eq!(umat.shape(), &[5, 5, 5, 5]);
    for idx in (0..4).map(|_| 0..5).multi_cartesian_product() {
        let (m1, m2, m3, m4) = (idx[0], idx[1], idx[2], idx[3]);
        approx::assert_abs_diff_eq!(
            umat[(m1, m2, m3, m4)],
            umat[(m2, m1, m4, m3)],
            epsilon = 1e-13
        );
        approx::assert_abs_diff_eq!(
            umat[(m1, m2, m3, m4)],
            umat[(m3, m4, m1, m2)],
            epsilon = 1e-13
        );
    }
}

#[test]
fn test_slater_spherical_known_values() {
    let radial_integrals = u_j_to_radial_integrals(2, 4.0, 0.7).unwrap();
    let umat = u_matrix_slater_spherical(2, &radial_integrals).unwrap();
    // m = 0 orbital.
    approx::assert_relative_eq!(umat[(2, 2, 2, 2)], 4.8, max_relative = 1e-12);
    // m = -2 orbital.
    approx::assert_relative_eq!(umat[(0, 0, 0, 0)], 4.499386503067485, max_relative = 1e-12);
    approx::assert_relative_eq!(umat[(0, 4, 0, 4)], 4.499386503067485, max_relative = 1e-12);
    approx::assert_relative_eq!(umat[(0, 4, 4, 0)], 0.6012269938650306, max_relative = 1e-12);
}

#[test]
fn test_slater_average_interactions() {
    // The orbital averages of U' and U reproduce U_int and U_int - J_hund in any unitary basis.
    for (l, u_int, j_hund) in [(1, 3.0, 0.5), (2, 4.0, 0.7), (3, 6.0, 0.9)] {
        let dim = 2 * l as usize + 1;
        for basis in [InteractionBasis::Spherical, InteractionBasis::Cubic] {
            let params = SlaterParams::builder()
                .l(l)
                .u_int(Some(u_int))
                .j_hund(Some(j_hund))
                .basis(basis)
                .build()
                .unwrap();
            let slater = u_matrix_slater(&params).unwrap();
            assert!(slater.diagnostics.is_empty());
            let (u, uprime) = slater.two_index();
            approx::assert_relative_eq!(
                uprime.sum() / (dim * dim) as f64,
                u_int,
                max_relative = 1e-12
            );
            approx::assert_relative_eq!(
                u.sum() / (dim * (dim - 1)) as f64,
                u_int - j_hund,
                max_relative = 1e-12
            );
            for m in 0..dim {
                approx::assert_abs_diff_eq!(u[(m, m)], 0.0, epsilon = 1e-13);
            }
        }
    }
}

#[test]
fn test_slater_cubic_d_shell() {
    let params = SlaterParams::builder()
        .l(2)
        .u_int(Some(4.0))
        .j_hund(Some(0.7))
        .basis(InteractionBasis::Cubic)
        .build()
        .unwrap();
    let slater = u_matrix_slater(&params).unwrap();
    for m in 0..5 {
        approx::assert_relative_eq!(slater.umat[(m, m, m, m)].re, 4.8, max_relative = 1e-12);
    }
    for value in slater.umat.iter() {
        approx::assert_abs_diff_eq!(value.im, 0.0, epsilon = 1e-13);
    }

    // xy, yz and xz are at positions 0, 1 and 3 in the triqs ordering.
    let (_, uprime) = slater.two_index();
    let uprime_t2g = t2g_submatrix(&uprime, CubicConvention::Triqs).unwrap();
    for (i, j) in (0..3).cartesian_product(0..3) {
        let expected = if i == j { 4.8 } else { 3.7202453987730046 };
        approx::assert_relative_eq!(uprime_t2g[(i, j)], expected, max_relative = 1e-12);
    }
    approx::assert_relative_eq!(
        slater.umat[(0, 1, 1, 0)].re,
        0.5398773006134968,
        max_relative = 1e-12
    );
}

#[test]
fn test_slater_cubic_conventions_agree_on_t2g() {
    let build = |convention: CubicConvention| {
        let params = SlaterParams::builder()
            .l(2)
            .u_int(Some(5.0))
            .j_hund(Some(0.8))
            .basis(InteractionBasis::Cubic)
            .convention(convention)
            .build()
            .unwrap();
        let (u, uprime) = u_matrix_slater(&params).unwrap().two_index();
        (
            t2g_submatrix(&u, convention).unwrap(),
            t2g_submatrix(&uprime, convention).unwrap(),
        )
    };
    let (u_triqs, uprime_triqs) = build(CubicConvention::Triqs);
    for convention in [CubicConvention::Wien2k, CubicConvention::Wannier90] {
        let (u, uprime) = build(convention);
        assert_matrices_close(&u, &u_triqs, 1e-12);
        assert_matrices_close(&uprime, &uprime_triqs, 1e-12);
    }
}

#[test]
fn test_slater_explicit_transformations() {
    let tmat = spherical_to_cubic(2, CubicConvention::Triqs).unwrap();
    let cubic = u_matrix_slater(
        &SlaterParams::builder()
            .l(2)
            .u_int(Some(4.0))
            .j_hund(Some(0.7))
            .basis(InteractionBasis::Cubic)
            .build()
            .unwrap(),
    )
    .unwrap();
    for basis in [InteractionBasis::Other, InteractionBasis::Spherical] {
        let params = SlaterParams::builder()
            .l(2)
            .u_int(Some(4.0))
            .j_hund(Some(0.7))
            .basis(basis)
            .transformation(Some(tmat.clone()))
            .build()
            .unwrap();
        let other = u_matrix_slater(&params).unwrap();
        for (x, y) in other.umat.iter().zip(cubic.umat.iter()) {
            approx::assert_abs_diff_eq!(x.re, y.re, epsilon = 1e-13);
            approx::assert_abs_diff_eq!(x.im, y.im, epsilon = 1e-13);
        }
    }

    // With a cubic basis, any supplied matrix is superseded by the generated one.
    let params = SlaterParams::builder()
        .l(2)
        .u_int(Some(4.0))
        .j_hund(Some(0.7))
        .basis(InteractionBasis::Cubic)
        .transformation(Some(Array2::<C128>::eye(5)))
        .build()
        .unwrap();
    let overridden = u_matrix_slater(&params).unwrap();
    assert_eq!(overridden.umat, cubic.umat);
}

#[test]
fn test_slater_radial_integrals_only() {
    let radial_integrals = vec![4.0, 7.0, 4.41];
    let params = SlaterParams::builder()
        .l(2)
        .radial_integrals(Some(radial_integrals.clone()))
        .build()
        .unwrap();
    let slater = u_matrix_slater(&params).unwrap();
    assert_eq!(slater.radial_integrals, radial_integrals);
    assert!(slater.diagnostics.is_empty());
    let expected = u_matrix_slater_spherical(2, &radial_integrals).unwrap();
    for (x, y) in slater.umat.iter().zip(expected.iter()) {
        assert_eq!(x.re, *y);
        assert_eq!(x.im, 0.0);
    }
}

#[test]
fn test_slater_radial_integral_mismatch() {
    let derived = u_j_to_radial_integrals(2, 4.0, 0.7).unwrap();

    let consistent = SlaterParams::builder()
        .l(2)
        .radial_integrals(Some(derived.clone()))
        .u_int(Some(4.0))
        .j_hund(Some(0.7))
        .build()
        .unwrap();
    assert!(u_matrix_slater(&consistent).unwrap().diagnostics.is_empty());

    let provided = vec![4.0, 7.0, 4.0];
    let inconsistent = SlaterParams::builder()
        .l(2)
        .radial_integrals(Some(provided.clone()))
        .u_int(Some(4.0))
        .j_hund(Some(0.7))
        .build()
        .unwrap();
    let slater = u_matrix_slater(&inconsistent).unwrap();
    assert_eq!(slater.radial_integrals, provided);
    assert_eq!(
        slater.diagnostics,
        vec![SlaterDiagnostic::RadialIntegralMismatch { provided, derived }]
    );

    let wrong_length = SlaterParams::builder()
        .l(2)
        .radial_integrals(Some(vec![4.0, 7.0]))
        .u_int(Some(4.0))
        .j_hund(Some(0.7))
        .build()
        .unwrap();
    assert!(matches!(
        u_matrix_slater(&wrong_length),
        Err(InteractionError::InconsistentInput(_))
    ));
}

#[test]
fn test_slater_input_errors() {
    let missing = SlaterParams::builder().l(2).build().unwrap();
    assert!(matches!(
        u_matrix_slater(&missing),
        Err(InteractionError::MissingInput(_))
    ));

    let only_u = SlaterParams::builder().l(2).u_int(Some(4.0)).build().unwrap();
    assert!(matches!(
        u_matrix_slater(&only_u),
        Err(InteractionError::MissingInput(_))
    ));

    let no_tmat = SlaterParams::builder()
        .l(2)
        .u_int(Some(4.0))
        .j_hund(Some(0.7))
        .basis(InteractionBasis::Other)
        .build()
        .unwrap();
    assert_eq!(
        u_matrix_slater(&no_tmat).unwrap_err(),
        InteractionError::MissingTransformation
    );

    let high_l = SlaterParams::builder()
        .l(4)
        .radial_integrals(Some(vec![1.0; 5]))
        .build()
        .unwrap();
    assert_eq!(
        u_matrix_slater(&high_l).unwrap_err(),
        InteractionError::UnsupportedAngularMomentum {
            l: 4,
            context: "u_matrix_slater"
        }
    );

    let d_only_convention = SlaterParams::builder()
        .l(3)
        .u_int(Some(6.0))
        .j_hund(Some(0.9))
        .basis(InteractionBasis::Cubic)
        .convention(CubicConvention::Wien2k)
        .build()
        .unwrap();
    assert!(matches!(
        u_matrix_slater(&d_only_convention),
        Err(InteractionError::UnsupportedConvention { l: 3, .. })
    ));

    let bad_shape = SlaterParams::builder()
        .l(1)
        .u_int(Some(3.0))
        .j_hund(Some(0.5))
        .basis(InteractionBasis::Other)
        .transformation(Some(Array2::<C128>::eye(5)))
        .build()
        .unwrap();
    assert!(matches!(
        u_matrix_slater(&bad_shape),
        Err(InteractionError::InconsistentInput(_))
    ));
}

#[test]
fn test_slater_spherical_unsupported_l() {
    assert_eq!(
        u_matrix_slater_spherical(4, &[1.0; 5]).unwrap_err(),
        InteractionError::UnsupportedAngularMomentum {
            l: 4,
            context: "u_matrix_slater_spherical"
        }
    );
    assert!(u_matrix_slater_spherical(0, &[2.0]).is_ok());
}

#[test]
fn test_slater_basis_parsing() {
    assert_eq!(
        InteractionBasis::from_str("spherical"),
        Ok(InteractionBasis::Spherical)
    );
    assert_eq!(InteractionBasis::from_str("cubic"), Ok(InteractionBasis::Cubic));
    assert_eq!(InteractionBasis::from_str("other"), Ok(InteractionBasis::Other));
    assert_eq!(
        InteractionBasis::from_str("octahedral"),
        Err(InteractionError::UnknownBasis("octahedral".to_string()))
    );
    assert_eq!(InteractionBasis::default(), InteractionBasis::Spherical);

    let params: SlaterParams = serde_yaml::from_str(
        "l: 2\nu_int: 4.0\nj_hund: 0.7\nbasis: cubic\nconvention: wannier90\n",
    )
    .unwrap();
    assert_eq!(params.basis, InteractionBasis::Cubic);
    assert_eq!(params.convention, CubicConvention::Wannier90);
    assert!(params.radial_integrals.is_none());
    assert!(params.transformation.is_none());
}
