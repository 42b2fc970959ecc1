//! Mean orbital elements and Kepler's equation.
//!
//! Elements are linear in `d`, days since 1999-Dec-31 00:00 UT
//! ([`almanac_time::ELEMENT_EPOCH_JD`]), referred to the mean ecliptic and
//! equinox of date. The Sun's elements describe the Earth's orbit as seen
//! from the Earth, the Moon's are geocentric, the planets' heliocentric.
//!
//! Source: P. Schlyter, "How to compute planetary positions".

use crate::body::Body;

/// Maximum Newton iterations for Kepler's equation.
const MAX_KEPLER_ITERATIONS: usize = 30;

/// Convergence threshold for the eccentric anomaly in radians.
const KEPLER_TOLERANCE: f64 = 1.0e-12;

/// Keplerian elements of one orbit at a given day number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node, degrees.
    pub node_deg: f64,
    /// Inclination to the ecliptic, degrees.
    pub inclination_deg: f64,
    /// Argument of perihelion (perigee for the Moon), degrees.
    pub perihelion_deg: f64,
    /// Semi-major axis: AU for the Sun and planets, Earth radii for the Moon.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Mean anomaly, degrees in [0, 360).
    pub mean_anomaly_deg: f64,
}

impl OrbitalElements {
    /// Elements of `body` at day number `d`.
    pub fn for_body(body: Body, d: f64) -> Self {
        let (n, i, w, a, e, m) = match body {
            Body::Sun => (
                0.0,
                0.0,
                282.9404 + 4.70935e-5 * d,
                1.0,
                0.016709 - 1.151e-9 * d,
                356.0470 + 0.985_600_258_5 * d,
            ),
            Body::Moon => (
                125.1228 - 0.052_953_808_3 * d,
                5.1454,
                318.0634 + 0.164_357_322_3 * d,
                60.2666,
                0.054900,
                115.3654 + 13.064_992_950_9 * d,
            ),
            Body::Mercury => (
                48.3313 + 3.24587e-5 * d,
                7.0047 + 5.00e-8 * d,
                29.1241 + 1.01444e-5 * d,
                0.387098,
                0.205635 + 5.59e-10 * d,
                168.6562 + 4.092_334_436_8 * d,
            ),
            Body::Venus => (
                76.6799 + 2.46590e-5 * d,
                3.3946 + 2.75e-8 * d,
                54.8910 + 1.38374e-5 * d,
                0.723330,
                0.006773 - 1.302e-9 * d,
                48.0052 + 1.602_130_224_4 * d,
            ),
            Body::Mars => (
                49.5574 + 2.11081e-5 * d,
                1.8497 - 1.78e-8 * d,
                286.5016 + 2.92961e-5 * d,
                1.523688,
                0.093405 + 2.516e-9 * d,
                18.6021 + 0.524_020_776_6 * d,
            ),
            Body::Jupiter => (
                100.4542 + 2.76854e-5 * d,
                1.3030 - 1.557e-7 * d,
                273.8777 + 1.64505e-5 * d,
                5.20256,
                0.048498 + 4.469e-9 * d,
                19.8950 + 0.083_085_300_1 * d,
            ),
            Body::Saturn => (
                113.6634 + 2.38980e-5 * d,
                2.4886 - 1.081e-7 * d,
                339.3939 + 2.97661e-5 * d,
                9.55475,
                0.055546 - 9.499e-9 * d,
                316.9670 + 0.033_444_228_2 * d,
            ),
        };
        Self {
            node_deg: n,
            inclination_deg: i,
            perihelion_deg: w,
            semi_major_axis: a,
            eccentricity: e,
            mean_anomaly_deg: m.rem_euclid(360.0),
        }
    }

    /// Mean anomaly in radians.
    pub fn mean_anomaly_rad(&self) -> f64 {
        self.mean_anomaly_deg.to_radians()
    }

    /// Mean longitude `M + ω + Ω` in radians.
    pub fn mean_longitude_rad(&self) -> f64 {
        (self.mean_anomaly_deg + self.perihelion_deg + self.node_deg).to_radians()
    }

    /// Rectangular ecliptic position `[x, y, z]` in the orbit's distance unit,
    /// relative to the central body.
    pub fn position(&self) -> [f64; 3] {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let ecc_anomaly = solve_kepler(self.mean_anomaly_rad(), e);

        let xv = a * (ecc_anomaly.cos() - e);
        let yv = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
        let true_anomaly = yv.atan2(xv);
        let r = xv.hypot(yv);

        let node = self.node_deg.to_radians();
        let incl = self.inclination_deg.to_radians();
        let arg_lat = true_anomaly + self.perihelion_deg.to_radians();

        let (sin_n, cos_n) = node.sin_cos();
        let (sin_u, cos_u) = arg_lat.sin_cos();
        [
            r * (cos_n * cos_u - sin_n * sin_u * incl.cos()),
            r * (sin_n * cos_u + cos_n * sin_u * incl.cos()),
            r * sin_u * incl.sin(),
        ]
    }
}

/// Solve `E − e·sin E = M` for the eccentric anomaly (radians).
pub fn solve_kepler(mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly_rad;
    let e = eccentricity;
    let mut ecc = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..MAX_KEPLER_ITERATIONS {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc
}
