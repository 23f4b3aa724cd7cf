use super::*;

#[test]
fn test_exact_line() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 5.0, 7.0];
    let fit = LineFit::ols(&x, &y, &[0, 1, 2, 3]).unwrap();
    assert!((fit.slope - 2.0).abs() < 1e-9);
    assert!((fit.intercept - 1.0).abs() < 1e-9);
}

#[test]
fn test_noisy_line_least_squares() {
    // y = x + noise(+1, -1, +1, -1) around x = 0..3
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 0.0, 3.0, 2.0];
    let fit = LineFit::ols(&x, &y, &[0, 1, 2, 3]).unwrap();
    assert!((fit.slope - 0.6).abs() < 1e-9);
    assert!((fit.intercept - 0.6).abs() < 1e-9);
}

#[test]
fn test_uses_only_selected_rows() {
    let x = [0.0, 100.0, 1.0, 2.0];
    let y = [0.0, -50.0, 1.0, 2.0];
    let fit = LineFit::ols(&x, &y, &[0, 2, 3]).unwrap();
    assert!((fit.slope - 1.0).abs() < 1e-9);
    assert!(fit.intercept.abs() < 1e-9);
}

#[test]
fn test_single_hit_is_degenerate() {
    let err = LineFit::ols(&[1.0], &[2.0], &[0]).unwrap_err();
    assert_eq!(err, Degeneracy::TooFewHits);
}

#[test]
fn test_vertical_track_is_degenerate() {
    let x = [4.0, 4.0, 4.0];
    let y = [0.0, 1.0, 2.0];
    let err = LineFit::ols(&x, &y, &[0, 1, 2]).unwrap_err();
    assert_eq!(err, Degeneracy::ZeroXVariance);
}

#[test]
fn test_matches_is_inclusive() {
    let a = LineFit {
        slope: 1.0,
        intercept: 0.0,
    };
    let b = LineFit {
        slope: 1.5,
        intercept: 2.0,
    };
    assert!(a.matches(&b, 0.5, 2.0));
    assert!(!a.matches(&b, 0.49, 2.0));
    assert!(!a.matches(&b, 0.5, 1.99));
}

#[test]
fn test_non_finite_input_is_degenerate() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, f64::NAN, 2.0];
    assert_eq!(LineFit::ols(&x, &y, &[0, 1, 2]), Err(Degeneracy::NonFinite));

    let x = [0.0, f64::NAN, 2.0];
    let y = [0.0, 1.0, 2.0];
    assert_eq!(LineFit::ols(&x, &y, &[0, 1, 2]), Err(Degeneracy::NonFinite));

    // rows outside the selection do not matter
    assert!(LineFit::ols(&x, &y, &[0, 2]).is_ok());
}

#[test]
fn test_overflowing_fit_is_degenerate() {
    let x = [0.0, 1e-10];
    let y = [0.0, 1e308];
    assert_eq!(LineFit::ols(&x, &y, &[0, 1]), Err(Degeneracy::NonFinite));
}

#[test]
fn test_flat_fit() {
    let y = [4.0, 1.0, 3.0];
    let fit = LineFit::flat(&y, &[1, 2]).unwrap();
    assert_eq!(fit.slope, 0.0);
    assert_eq!(fit.intercept, 2.0);
    assert_eq!(LineFit::flat(&y, &[]), Err(Degeneracy::TooFewHits));
    assert_eq!(LineFit::flat(&[f64::NAN], &[0]), Err(Degeneracy::NonFinite));
}
