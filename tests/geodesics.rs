use float_eq::assert_float_eq;
use geod::math::angular;
use geod::prelude::*;
use geod::{DirectSetup, MAX_ITERATIONS};
use std::f64::consts::{FRAC_PI_2, PI};

// A grid of points, from pole to pole, and the pairs of distinct points less
// than 120° apart in longitude. Far from antipodal, so the inverse solution
// converges.
fn pairs() -> Vec<(Coor2D, Coor2D)> {
    let latitudes = [-90., -89.99, -75., -50., -25., 0., 25., 50., 75., 89.99, 90.];
    let mut points = Vec::new();
    for lat in latitudes {
        for lon in (-170..=170).step_by(40) {
            points.push(Coor2D::geo(lat, lon as f64));
        }
    }

    // Different longitudes of the same pole are the same point
    let polar = |p: Coor2D| FRAC_PI_2 - p[1].abs() < 1e-12;

    let mut pairs = Vec::new();
    for &p in &points {
        for &q in &points {
            if p == q || (polar(p) && polar(q)) {
                continue;
            }
            if angular::difference(p[0], q[0]).abs() <= 120_f64.to_radians() {
                pairs.push((p, q));
            }
        }
    }
    pairs
}

#[test]
fn symmetry() -> Result<(), Error> {
    let ellps = Ellipsoid::named("WGS84")?;
    for (p, q) in pairs() {
        let there = inverse(p, q, &ellps)?;
        let back = inverse(q, p, &ellps)?;
        assert_float_eq!(there.distance, back.distance, abs <= 1e-6);

        // Returning, we leave along the reverse of the arrival direction
        let reverse = angular::normalize_symmetric(there.back_azimuth + PI);
        assert!(angular::difference(back.azimuth, reverse).abs() < 1e-12);
        assert!(there.iterations <= MAX_ITERATIONS);
    }
    Ok(())
}

#[test]
fn roundtrip() -> Result<(), Error> {
    for ellps in [Ellipsoid::named("WGS84")?, Ellipsoid::named("sphere")?] {
        // The series is good to a few centimeters
        let tolerance = if ellps.is_sphere() { 1e-3 } else { 0.1 };
        for (p, q) in pairs() {
            let g = inverse(p, q, &ellps)?;
            let d = direct(p, g.azimuth, g.distance, &ellps)?;
            assert!(inverse(d.point, q, &ellps)?.distance < tolerance);

            // Near the poles, longitudes and azimuths lose their meaning
            if q[1].abs() > 89_f64.to_radians() {
                continue;
            }
            assert!(angular::difference(d.point[0], q[0]).abs() < 1e-6);
            assert!((d.point[1] - q[1]).abs() < 1e-6);
            assert!(angular::difference(d.back_azimuth, g.back_azimuth).abs() < 1e-6);
        }
    }
    Ok(())
}

#[test]
fn polar_origins() -> Result<(), Error> {
    // Leaving a pole, the azimuth is reckoned from the meridian of the
    // origin's longitude: from the north pole, azimuth α heads down the
    // meridian λ + π - α, from the south pole up the meridian λ + α
    for ellps in [Ellipsoid::named("WGS84")?, Ellipsoid::sphere(6371000.)?] {
        for azimuth in [0.3, -1.0, 2.5, -2.9] {
            let lon = 0.2;
            for (from, meridian) in [
                (Coor2D::raw(lon, FRAC_PI_2), lon + PI - azimuth),
                (Coor2D::raw(lon, -FRAC_PI_2), lon + azimuth),
            ] {
                let d = direct(from, azimuth, 1e6, &ellps)?;
                assert!(angular::difference(d.point[0], meridian).abs() < 1e-9);
                assert!(d.point[1].signum() == from[1].signum());
                let back = inverse(from, d.point, &ellps)?;
                assert_float_eq!(back.distance, 1e6, abs <= 0.01);
            }
        }
    }
    Ok(())
}

#[test]
fn output_ranges() -> Result<(), Error> {
    let ellps = Ellipsoid::default();
    let in_range = |angle: f64| angle > -PI && angle <= PI;
    for (p, q) in pairs() {
        let g = inverse(p, q, &ellps)?;
        assert!(in_range(g.azimuth) && in_range(g.back_azimuth));
        assert!(g.distance > 0.);

        let d = direct(p, g.azimuth + 4. * PI, g.distance, &ellps)?;
        assert!(in_range(d.point[0]) && in_range(d.back_azimuth));
    }

    // Crossing the antimeridian eastwards
    for ellps in [ellps, Ellipsoid::sphere(6371000.)?] {
        let d = direct(Coor2D::geo(10., 179.), FRAC_PI_2, 500_000., &ellps)?;
        assert!(in_range(d.point[0]));
        assert!(d.point[0] < -175_f64.to_radians());
    }
    Ok(())
}

#[test]
fn zero_distance() -> Result<(), Error> {
    for ellps in [Ellipsoid::default(), Ellipsoid::sphere(6371000.)?] {
        let p = Coor2D::geo(55., 12.);
        let g = inverse(p, p, &ellps)?;
        assert_eq!(g.distance, 0.);
        assert_eq!(g.iterations, 0);
        assert!(!g.azimuth.is_nan() && !g.back_azimuth.is_nan());
    }
    Ok(())
}

#[test]
fn sphere_limit() -> Result<(), Error> {
    let a = 6371000.;
    let nearly = Ellipsoid::new(a, 1e-6)?;
    let sphere = Ellipsoid::sphere(a)?;
    for (p, q) in pairs() {
        let e = inverse(p, q, &nearly)?.distance;
        let s = inverse(p, q, &sphere)?.distance;
        assert!((e - s).abs() / s < 1e-3);
    }
    Ok(())
}

#[test]
fn boston_portland() -> Result<(), Error> {
    let ellps = Ellipsoid::named("WGS84")?;
    let boston = Coor2D::geo(42. + 15. / 60., -71. - 7. / 60.);
    let portland = Coor2D::geo(45. + 31. / 60., -123. - 41. / 60.);

    let g = inverse(boston, portland, &ellps)?;
    assert_float_eq!(g.distance, 4_164_074., abs <= 50.);
    assert_float_eq!(g.azimuth.to_degrees(), -66.53, abs <= 0.01);

    // The batch interface reports the azimuth pointing back toward Boston
    let geod = Geod::new(ellps);
    let (mut lons1, mut lats1, mut lons2) = ([boston[0]], [boston[1]], [portland[0]]);
    geod.inv(&mut lons1, &mut lats1, &mut lons2, &[portland[1]], true)?;
    assert_float_eq!(lons1[0], g.azimuth, abs <= 1e-15);
    assert_float_eq!(lats1[0].to_degrees(), 75.654, abs <= 1e-3);
    assert_float_eq!(lons2[0], g.distance, abs <= 1e-9);
    Ok(())
}

#[test]
fn sphere_quadrant() -> Result<(), Error> {
    let a = 6_371_000.;
    let sphere = Ellipsoid::sphere(a)?;
    let g = inverse(Coor2D::geo(0., 0.), Coor2D::geo(0., 90.), &sphere)?;
    assert_float_eq!(g.distance, a * FRAC_PI_2, abs <= 1.);
    assert_float_eq!(g.azimuth.to_degrees(), 90., abs <= 1e-12);
    Ok(())
}

#[test]
fn quarter_meridian() -> Result<(), Error> {
    let ellps = Ellipsoid::named("WGS84")?;
    let quarter = 10_001_965.729;
    let d = direct(Coor2D::origin(), 0., quarter, &ellps)?;
    assert_float_eq!(d.point[1].to_degrees(), 90., abs <= 1e-6);
    assert_float_eq!(ellps.meridian_distance(d.point[1]), quarter, abs <= 1.);

    // And half way
    let d = direct(Coor2D::origin(), 0., quarter / 2., &ellps)?;
    assert_float_eq!(ellps.meridian_distance(d.point[1]), quarter / 2., abs <= 1.);
    assert_eq!(d.point[0], 0.);
    Ok(())
}

#[test]
fn many_distances_one_azimuth() -> Result<(), Error> {
    let ellps = Ellipsoid::named("GRS80")?;
    let cph = Coor2D::gis(12., 55.);
    let cdg = Coor2D::gis(2., 49.);
    let g = inverse(cph, cdg, &ellps)?;

    // Points along the geodesic are as far from the end as they are
    // from the start: the segments add up
    let setup = DirectSetup::new(cph, g.azimuth, &ellps);
    for fraction in [0.1, 0.25, 0.5, 0.9] {
        let mid = setup.advance(fraction * g.distance).point;
        let first = inverse(cph, mid, &ellps)?.distance;
        let second = inverse(mid, cdg, &ellps)?.distance;
        assert_float_eq!(first + second, g.distance, abs <= 1e-3);
    }
    Ok(())
}
