use crate::{config::EARTH_RADIUS_M, model::Coords};

/// Great-circle distance in meters, haversine formula on a sphere of [`EARTH_RADIUS_M`].
pub fn haversine_distance(from: &Coords, to: &Coords) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::haversine_distance;
    use crate::model::Coords;

    #[test]
    fn identical_points_are_zero_apart() {
        let p = Coords::new(40.1772, 44.5035);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn hundredth_of_a_degree_on_the_equator() {
        let d = haversine_distance(&Coords::new(0.0, 0.0), &Coords::new(0.0, 0.01));
        // R * 0.01° in radians
        assert_abs_diff_eq!(d, 1111.95, epsilon = 0.1);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coords::new(40.1811, 44.5136);
        let b = Coords::new(40.2038, 44.4907);
        assert_abs_diff_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a), epsilon = 1e-9);
        assert_abs_diff_eq!(haversine_distance(&a, &b), 3186.64, epsilon = 0.01);
    }

    #[test]
    fn antipodes_are_half_the_circumference_apart() {
        let d = haversine_distance(&Coords::new(0.0, 0.0), &Coords::new(0.0, 180.0));
        assert_abs_diff_eq!(d, std::f64::consts::PI * 6_371_000.0, epsilon = 1e-3);
    }
}
