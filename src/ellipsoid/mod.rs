mod catalogue;
mod geodesics;

use crate::Error;

/// Representation of a biaxial ellipsoid, and the constants the geodesic
/// solvers derive from it.
///
/// The derived constants are pure functions of the semimajor axis and the
/// flattening, computed once, at construction. A flattening of exactly zero
/// signals a sphere, and switches the solvers to the spherical formulae.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
    half_f: f64,
    quarter_f: f64,
    f2_64: f64,
    onef: f64,
    es: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::derive(6_378_137.0, 1. / 298.257_222_100_882_7)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid. The semimajor axis must be finite and strictly
    /// positive, the flattening in [0, 1).
    pub fn new(semimajor_axis: f64, flattening: f64) -> Result<Ellipsoid, Error> {
        if !(semimajor_axis.is_finite() && semimajor_axis > 0.) {
            return Err(Error::InvalidEllipsoid(format!(
                "semimajor axis must be positive, got {semimajor_axis}"
            )));
        }
        if !(0. ..1.).contains(&flattening) {
            return Err(Error::InvalidEllipsoid(format!(
                "flattening must be in [0, 1), got {flattening}"
            )));
        }
        Ok(Ellipsoid::derive(semimajor_axis, flattening))
    }

    /// A sphere of the given radius
    pub fn sphere(radius: f64) -> Result<Ellipsoid, Error> {
        Ellipsoid::new(radius, 0.)
    }

    /// The WGS84 ellipsoid, infallibly
    #[must_use]
    pub fn wgs84() -> Ellipsoid {
        Ellipsoid::derive(6_378_137.0, 1. / 298.257_223_563)
    }

    // Unchecked: only for arguments known to be valid
    fn derive(a: f64, f: f64) -> Ellipsoid {
        Ellipsoid {
            a,
            f,
            half_f: f / 2.,
            quarter_f: f / 4.,
            f2_64: f * f / 64.,
            onef: 1. - f,
            es: f * (2. - f),
        }
    }

    /// A flattening of exactly zero: the spherical solvers apply
    #[must_use]
    pub fn is_sphere(&self) -> bool {
        self.f == 0.
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.es
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.es.sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.es / (1.0 - self.es)
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * self.onef
    }

    /// The authalic radius, *R_q*: the radius of the sphere of the same surface
    /// area as the ellipsoid, *4π R_q²*
    #[must_use]
    pub fn authalic_radius(&self) -> f64 {
        if self.es == 0. {
            return self.a;
        }
        let e = self.eccentricity();
        let b = self.semiminor_axis();
        ((self.a * self.a + b * b * e.atanh() / e) / 2.).sqrt()
    }

    // ----- Flattenings -----------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// *f/2*
    #[must_use]
    pub fn half_flattening(&self) -> f64 {
        self.half_f
    }

    /// *f/4*, the leading coefficient of the direct series
    #[must_use]
    pub fn quarter_flattening(&self) -> f64 {
        self.quarter_f
    }

    /// *f²/64*, the second order coefficient of the series
    #[must_use]
    pub fn flattening_squared_64(&self) -> f64 {
        self.f2_64
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.half_f / (1.0 - self.half_f)
    }

    /// The aspect ratio, *b / a  =  1 - f  =  sqrt(1 - e²)*
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.onef
    }

    // ----- Latitudes -------------------------------------------------------------

    /// Geographic latitude, 𝜙, to reduced latitude, 𝛽 = atan((1 - f) tan 𝜙).
    /// The identity on the sphere.
    #[must_use]
    pub fn reduced_latitude(&self, latitude: f64) -> f64 {
        (self.onef * latitude.tan()).atan()
    }

    /// Reduced latitude, 𝛽, to geographic latitude, 𝜙
    #[must_use]
    pub fn geographic_latitude(&self, reduced: f64) -> f64 {
        (reduced.tan() / self.onef).atan()
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn construction() -> Result<(), Error> {
        let ellps = Ellipsoid::new(6378137.0, 1. / 298.257223563)?;
        assert_eq!(ellps.semimajor_axis(), 6378137.0);
        assert_eq!(ellps.flattening(), 1. / 298.257223563);
        assert!(!ellps.is_sphere());

        let sphere = Ellipsoid::sphere(6371000.0)?;
        assert!(sphere.is_sphere());
        assert_eq!(sphere.semiminor_axis(), 6371000.0);
        assert_eq!(sphere.aspect_ratio(), 1.0);
        assert_eq!(sphere.eccentricity_squared(), 0.0);

        // Nearly, but not exactly, spherical is an ellipsoid
        assert!(!Ellipsoid::new(6371000.0, 1e-12)?.is_sphere());
        Ok(())
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            Ellipsoid::new(0., 0.003),
            Err(Error::InvalidEllipsoid(_))
        ));
        assert!(matches!(
            Ellipsoid::new(-6378137., 0.003),
            Err(Error::InvalidEllipsoid(_))
        ));
        assert!(matches!(
            Ellipsoid::new(f64::NAN, 0.003),
            Err(Error::InvalidEllipsoid(_))
        ));
        assert!(matches!(
            Ellipsoid::new(f64::INFINITY, 0.003),
            Err(Error::InvalidEllipsoid(_))
        ));
        assert!(matches!(
            Ellipsoid::new(6378137., 1.),
            Err(Error::InvalidEllipsoid(_))
        ));
        assert!(matches!(
            Ellipsoid::new(6378137., -0.001),
            Err(Error::InvalidEllipsoid(_))
        ));
        assert!(matches!(
            Ellipsoid::new(6378137., f64::NAN),
            Err(Error::InvalidEllipsoid(_))
        ));
    }

    #[test]
    fn derived_constants() -> Result<(), Error> {
        let ellps = Ellipsoid::default();
        let f = ellps.flattening();
        assert_eq!(ellps.half_flattening(), f / 2.);
        assert_eq!(ellps.quarter_flattening(), f / 4.);
        assert_eq!(ellps.flattening_squared_64(), f * f / 64.);
        assert_eq!(ellps.aspect_ratio(), 1. - f);

        // Shape descriptors
        assert_float_eq!(ellps.eccentricity(), 0.081819191, abs <= 1e-9);
        assert_float_eq!(
            ellps.eccentricity_squared(),
            0.00669_43800_22903_41574,
            abs <= 1e-10
        );
        assert_float_eq!(
            ellps.second_eccentricity_squared(),
            0.00673_94967_75482,
            abs <= 1e-12
        );
        assert_float_eq!(ellps.third_flattening(), f / (2. - f), abs <= 1e-18);

        // Size descriptors
        assert_float_eq!(ellps.semiminor_axis(), 6_356_752.31414_0347, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn latitudes() {
        let ellps = Ellipsoid::default();
        let lat = 55_f64.to_radians();
        let reduced = ellps.reduced_latitude(lat);
        assert!(reduced < lat);
        assert_float_eq!(ellps.geographic_latitude(reduced), lat, abs <= 1e-15);
        assert_eq!(ellps.reduced_latitude(0.), 0.);

        let sphere = Ellipsoid::derive(1., 0.);
        assert_float_eq!(sphere.reduced_latitude(lat), lat, abs <= 1e-15);
    }

    #[test]
    fn surface_area() -> Result<(), Error> {
        let wgs84 = Ellipsoid::wgs84();
        assert_float_eq!(wgs84.authalic_radius(), 6371007.180918474, abs <= 1e-6);
        let area = 4. * std::f64::consts::PI * wgs84.authalic_radius().powi(2);
        assert_float_eq!(area / 1e6, 510_065_621.724, abs <= 1e-3);

        let sphere = Ellipsoid::sphere(6371000.)?;
        assert_eq!(sphere.authalic_radius(), 6371000.);
        Ok(())
    }
}
