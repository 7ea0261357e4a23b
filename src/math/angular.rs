use std::f64::consts::{PI, TAU};

/// Normalize arbitrary angles to (-π, π].
///
/// Angles already inside the interval are returned untouched. Others are
/// reduced in one step rather than by repeated addition of 2π, so even
/// carelessly large input is handled in constant time. `NaN` passes through.
pub fn normalize_symmetric(angle: f64) -> f64 {
    if angle.abs() <= PI {
        if angle == -PI {
            return PI;
        }
        return angle;
    }
    let turns = 0.5 * (angle / PI + 1.0);
    let angle = ((turns - turns.floor()) - 0.5) * TAU;
    if angle <= -PI {
        return PI;
    }
    angle
}

/// Normalize arbitrary angles to [0, 2π).
pub fn normalize_positive(angle: f64) -> f64 {
    let angle = angle % TAU;
    if angle < 0. {
        let angle = angle + TAU;
        // -tiny + 2π rounds to 2π
        if angle >= TAU {
            return 0.;
        }
        return angle;
    }
    angle
}

/// The signed difference `to - from`, reduced to (-π, π]
pub fn difference(from: f64, to: f64) -> f64 {
    normalize_symmetric(to - from)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric() {
        assert_eq!(normalize_symmetric(0.), 0.);
        assert_eq!(normalize_symmetric(1.), 1.);
        assert_eq!(normalize_symmetric(PI), PI);
        assert_eq!(normalize_symmetric(-PI), PI);
        assert!((normalize_symmetric(3. * PI) - PI).abs() < 1e-14);
        assert!((normalize_symmetric(-3. * PI) - PI).abs() < 1e-14);
        assert!((normalize_symmetric(TAU + 1.) - 1.).abs() < 1e-14);
        assert!((normalize_symmetric(-TAU - 1.) + 1.).abs() < 1e-14);
        assert!((normalize_symmetric(190_f64.to_radians()) + 170_f64.to_radians()).abs() < 1e-14);

        // Large input is reduced in one go
        let big = 1e6 * TAU + 0.5;
        assert!((normalize_symmetric(big) - 0.5).abs() < 1e-8);

        assert!(normalize_symmetric(f64::NAN).is_nan());

        for i in -1000..1000 {
            let a = normalize_symmetric(i as f64 * 0.1);
            assert!(a > -PI && a <= PI);
        }
    }

    #[test]
    fn positive() {
        assert_eq!(normalize_positive(0.), 0.);
        assert!((normalize_positive(-PI / 2.) - 3. * PI / 2.).abs() < 1e-14);
        assert!((normalize_positive(5. * PI) - PI).abs() < 1e-14);
        assert_eq!(normalize_positive(-1e-20), 0.);
        for i in -1000..1000 {
            let a = normalize_positive(i as f64 * 0.1);
            assert!((0. ..TAU).contains(&a));
        }
    }

    #[test]
    fn differences() {
        let a = difference(170_f64.to_radians(), (-170_f64).to_radians());
        assert!((a - 20_f64.to_radians()).abs() < 1e-14);
        let a = difference((-170_f64).to_radians(), 170_f64.to_radians());
        assert!((a + 20_f64.to_radians()).abs() < 1e-14);
    }
}
