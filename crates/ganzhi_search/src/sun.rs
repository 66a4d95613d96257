//! Low-precision apparent solar longitude.
//!
//! Mean longitude plus the equation of centre, with a combined
//! aberration/nutation correction. Good to roughly 0.01° over 1900-2100,
//! i.e. a quarter of an hour in time, which is ample for calendar work.
//! ΔT is ignored: input and output are both treated as UTC.

use ganzhi_time::J2000_JD;

/// Mean daily motion of the Sun in degrees.
pub const MEAN_DAILY_MOTION_DEG: f64 = 0.985_647_36;

const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Normalize an angle to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to [-180, 180).
pub fn wrap_180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Mean solar longitude in degrees, linear in days since J2000.
pub fn mean_longitude_deg(jd: f64) -> f64 {
    normalize_deg(280.466_46 + MEAN_DAILY_MOTION_DEG * (jd - J2000_JD))
}

/// Apparent geocentric solar longitude in degrees, [0, 360).
pub fn apparent_longitude_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_ranges() {
        assert_eq!(normalize_deg(-30.0), 330.0);
        assert_eq!(normalize_deg(720.0), 0.0);
        assert_eq!(wrap_180(190.0), -170.0);
        assert_eq!(wrap_180(-190.0), 170.0);
    }

    #[test]
    fn longitude_at_j2000() {
        // Apparent longitude at 2000-01-01 12:00 is about 280.37°.
        let lon = apparent_longitude_deg(J2000_JD);
        assert!((lon - 280.37).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn mean_and_apparent_stay_close() {
        for k in 0..50 {
            let jd = J2000_JD + k as f64 * 7.3;
            let d = wrap_180(apparent_longitude_deg(jd) - mean_longitude_deg(jd));
            assert!(d.abs() < 2.1, "jd {jd}: {d}");
        }
    }
}
