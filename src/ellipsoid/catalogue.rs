use super::Ellipsoid;
use crate::Error;
use log::{debug, trace};
use std::str::FromStr;

/// Below this, a flattening given by definition is taken as a sphere
const SPHERE_TOLERANCE: f64 = 1e-8;

// The second defining parameter of a catalogue entry
#[derive(Clone, Copy, Debug)]
enum Shape {
    ReciprocalFlattening(f64),
    SemiminorAxis(f64),
}

struct Entry {
    name: &'static str,
    a: f64,
    shape: Shape,
    description: &'static str,
}

use Shape::ReciprocalFlattening as Rf;
use Shape::SemiminorAxis as B;

// A hashmap indexed by the ellipsoid name would be nicer, but this
// is small enough for linear search, and can be initialized statically
#[rustfmt::skip]
static ELLIPSOIDS: [Entry; 36] = [
    Entry { name: "MERIT",    a: 6378137.0,   shape: Rf(298.257),        description: "MERIT 1983" },
    Entry { name: "SGS85",    a: 6378136.0,   shape: Rf(298.257),        description: "Soviet Geodetic System 85" },
    Entry { name: "GRS80",    a: 6378137.0,   shape: Rf(298.257222101),  description: "GRS 1980(IUGG, 1980)" },
    Entry { name: "IAU76",    a: 6378140.0,   shape: Rf(298.257),        description: "IAU 1976" },
    Entry { name: "airy",     a: 6377563.396, shape: B(6356256.910),     description: "Airy 1830" },
    Entry { name: "APL4.9",   a: 6378137.0,   shape: Rf(298.25),         description: "Appl. Physics. 1965" },
    Entry { name: "NWL9D",    a: 6378145.0,   shape: Rf(298.25),         description: "Naval Weapons Lab., 1965" },
    Entry { name: "mod_airy", a: 6377340.189, shape: B(6356034.446),     description: "Modified Airy" },
    Entry { name: "andrae",   a: 6377104.43,  shape: Rf(300.0),          description: "Andrae 1876 (Den., Iclnd.)" },
    Entry { name: "aust_SA",  a: 6378160.0,   shape: Rf(298.25),         description: "Australian Natl & S. Amer. 1969" },
    Entry { name: "GRS67",    a: 6378160.0,   shape: Rf(298.2471674270), description: "GRS 67(IUGG 1967)" },
    Entry { name: "bessel",   a: 6377397.155, shape: Rf(299.1528128),    description: "Bessel 1841" },
    Entry { name: "bess_nam", a: 6377483.865, shape: Rf(299.1528128),    description: "Bessel 1841 (Namibia)" },
    Entry { name: "clrk66",   a: 6378206.4,   shape: B(6356583.8),       description: "Clarke 1866" },
    Entry { name: "clrk80",   a: 6378249.145, shape: Rf(293.4663),       description: "Clarke 1880 mod." },
    Entry { name: "CPM",      a: 6375738.7,   shape: Rf(334.29),         description: "Comm. des Poids et Mesures 1799" },
    Entry { name: "delmbr",   a: 6376428.0,   shape: Rf(311.5),          description: "Delambre 1810 (Belgium)" },
    Entry { name: "engelis",  a: 6378136.05,  shape: Rf(298.2566),       description: "Engelis 1985" },
    Entry { name: "evrst30",  a: 6377276.345, shape: Rf(300.8017),       description: "Everest 1830" },
    Entry { name: "fschr60",  a: 6378166.0,   shape: Rf(298.3),          description: "Fischer (Mercury Datum) 1960" },
    Entry { name: "helmert",  a: 6378200.0,   shape: Rf(298.3),          description: "Helmert 1906" },
    Entry { name: "hough",    a: 6378270.0,   shape: Rf(297.0),          description: "Hough" },
    Entry { name: "intl",     a: 6378388.0,   shape: Rf(297.0),          description: "International 1909 (Hayford)" },
    Entry { name: "krass",    a: 6378245.0,   shape: Rf(298.3),          description: "Krassovsky, 1942" },
    Entry { name: "kaula",    a: 6378163.0,   shape: Rf(298.24),         description: "Kaula 1961" },
    Entry { name: "lerch",    a: 6378139.0,   shape: Rf(298.257),        description: "Lerch 1979" },
    Entry { name: "mprts",    a: 6397300.0,   shape: Rf(191.0),          description: "Maupertius 1738" },
    Entry { name: "new_intl", a: 6378157.5,   shape: B(6356772.2),       description: "New International 1967" },
    Entry { name: "plessis",  a: 6376523.0,   shape: B(6355863.0),       description: "Plessis 1817 (France)" },
    Entry { name: "SEasia",   a: 6378155.0,   shape: B(6356773.3205),    description: "Southeast Asia" },
    Entry { name: "walbeck",  a: 6376896.0,   shape: B(6355834.8467),    description: "Walbeck" },
    Entry { name: "WGS60",    a: 6378165.0,   shape: Rf(298.3),          description: "WGS 60" },
    Entry { name: "WGS66",    a: 6378145.0,   shape: Rf(298.25),         description: "WGS 66" },
    Entry { name: "WGS72",    a: 6378135.0,   shape: Rf(298.26),         description: "WGS 72" },
    Entry { name: "WGS84",    a: 6378137.0,   shape: Rf(298.257223563),  description: "WGS 84" },
    Entry { name: "sphere",   a: 6370997.0,   shape: B(6370997.0),       description: "Normal Sphere (r=6370997)" },
];

impl Entry {
    fn flattening(&self) -> f64 {
        match self.shape {
            Shape::ReciprocalFlattening(rf) => 1. / rf,
            Shape::SemiminorAxis(b) => (self.a - b) / self.a,
        }
    }
}

impl Ellipsoid {
    /// Predefined ellipsoid, from the built-in catalogue. The names are
    /// those of the PROJ `+ellps` parameter.
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        let entry = ELLIPSOIDS
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::NotFound(format!("ellipsoid '{name}'")))?;
        Ellipsoid::new(entry.a, entry.flattening())
    }

    /// Names and descriptions of the ellipsoids known by [`named`](Ellipsoid::named)
    pub fn catalogue() -> impl Iterator<Item = (&'static str, &'static str)> {
        ELLIPSOIDS.iter().map(|e| (e.name, e.description))
    }

    /// Ellipsoid from a PROJ style definition string, e.g.
    /// `+ellps=clrk66`, or `+a=6378137 +rf=298.257223563`.
    ///
    /// The semimajor axis, `a`, must be accompanied by at most one of
    /// `b` (semiminor axis), `rf` (reciprocal flattening), `f` (flattening),
    /// `es` (squared eccentricity) or `e` (eccentricity). Given alone, it
    /// defines a sphere, as does `R`. The leading `+` is optional, and
    /// tokens not relevant to the ellipsoid (`+proj=geod`, `+no_defs`)
    /// are ignored.
    pub fn from_definition(definition: &str) -> Result<Ellipsoid, Error> {
        let mut name = None;
        let mut numbers: Vec<(&str, f64)> = Vec::new();

        for token in definition.split_whitespace() {
            let token = token.trim_start_matches('+');
            let Some((key, value)) = token.split_once('=') else {
                trace!("Ignoring flag '{token}'");
                continue;
            };
            match key {
                "ellps" => name = Some(value),
                "a" | "b" | "rf" | "f" | "es" | "e" | "R" => {
                    let number = value
                        .parse::<f64>()
                        .map_err(|_| Error::BadParam(key.to_string(), value.to_string()))?;
                    numbers.push((key, number));
                }
                _ => trace!("Ignoring parameter '{key}'"),
            }
        }

        let lookup = |key: &str| numbers.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        if let Some(name) = name {
            return Ellipsoid::named(name);
        }

        if let Some(r) = lookup("R") {
            return Ellipsoid::sphere(r);
        }

        let a = lookup("a").ok_or_else(|| Error::MissingParam("a".to_string()))?;

        let mut f = if let Some(b) = lookup("b") {
            (a - b) / a
        } else if let Some(rf) = lookup("rf") {
            if rf == 0. {
                0.
            } else {
                1. / rf
            }
        } else if let Some(f) = lookup("f") {
            f
        } else if let Some(es) = lookup("es") {
            1. - (1. - es).sqrt()
        } else if let Some(e) = lookup("e") {
            1. - (1. - e * e).sqrt()
        } else {
            0.
        };

        if f.abs() < SPHERE_TOLERANCE {
            if f != 0. {
                debug!("Flattening {f} taken as a sphere");
            }
            f = 0.;
        }
        Ellipsoid::new(a, f)
    }
}

impl FromStr for Ellipsoid {
    type Err = Error;

    /// Either a bare catalogue name, or a definition string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('=') {
            return Ellipsoid::from_definition(s);
        }
        Ellipsoid::named(s.trim())
    }
}

// ----- Tests ---------------------------------------------------------------------
