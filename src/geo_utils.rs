//! Geographic utilities: great-circle distance and cumulative track distance.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// Takes latitudes and longitudes in degrees and uses the haversine
/// formulation on a spherical Earth of radius 6371 km.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Cumulative distance from the start of a track, in kilometers.
///
/// Input coordinates are in degrees. The first entry is always 0; entry `i`
/// is the running sum of great-circle distances between consecutive samples.
pub fn cumulative_distance_km(latitude: &[f64], longitude: &[f64]) -> Vec<f64> {
    let mut distance = vec![0.0; latitude.len()];
    for i in 1..latitude.len() {
        distance[i] = distance[i - 1]
            + haversine_km(latitude[i - 1], longitude[i - 1], latitude[i], longitude[i]);
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;

    // One radian of arc, in degrees. The reference distances below are the
    // great-circle lengths of 1 rad and ~2.69 rad of central angle on a
    // 6371 km sphere.
    const ONE_RAD_DEG: f64 = 57.29577951308232;

    #[test]
    fn test_haversine_one_radian() {
        let d = haversine_km(0.0, 0.0, ONE_RAD_DEG, ONE_RAD_DEG);
        assert!((d - 8120.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_haversine_antipodal_ish() {
        let d = haversine_km(
            ONE_RAD_DEG,
            ONE_RAD_DEG,
            -ONE_RAD_DEG,
            -3.0 * ONE_RAD_DEG,
        );
        assert!((d - 17125.0).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_haversine_zero() {
        assert_eq!(haversine_km(45.0, 7.0, 45.0, 7.0), 0.0);
    }

    #[test]
    fn test_cumulative_distance() {
        let lat = [0.0, ONE_RAD_DEG, -ONE_RAD_DEG];
        let lon = [0.0, ONE_RAD_DEG, -3.0 * ONE_RAD_DEG];
        let d = cumulative_distance_km(&lat, &lon);
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], 0.0);
        assert!((d[1] - 8120.0).abs() < 1.0);
        assert!((d[2] - 25245.0).abs() < 1.0);
    }

    #[test]
    fn test_cumulative_distance_single_point() {
        let d = cumulative_distance_km(&[45.0], &[7.0]);
        assert_eq!(d, vec![0.0]);
    }
}
