//! Decides where a stop effectively is, given what it declares and where the previous stop ended up.

use crate::{
    config::AnnotatorConfig,
    geo::haversine_distance,
    model::{CoordSource, Coords},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub coords: Coords,
    /// Unrounded meters from the previous resolved stop. `None` when there is no previous stop.
    pub distance_m: Option<f64>,
    pub source: CoordSource,
    pub corrected: bool,
}

/// Picks the stop's coordinates and measures how far they are from `previous`.
///
/// Undeclared coordinates fall back to `previous`, or to [`Coords::ORIGIN`] on a first stop.
/// A candidate further than the anomaly threshold from `previous` is replaced by `previous`
/// and recorded with the sentinel distance.
pub fn resolve(
    declared: Option<Coords>,
    previous: Option<&Coords>,
    config: &AnnotatorConfig,
) -> Resolution {
    let (candidate, source) = match (declared, previous) {
        (Some(declared), _) => (declared, CoordSource::Declared),
        (None, Some(previous)) => (previous.clone(), CoordSource::CarriedForward),
        (None, None) => (Coords::ORIGIN, CoordSource::Origin),
    };

    let Some(previous) = previous else {
        return Resolution {
            coords: candidate,
            distance_m: None,
            source,
            corrected: false,
        };
    };

    let distance = haversine_distance(previous, &candidate);
    if distance > config.anomaly_threshold_m {
        return Resolution {
            coords: previous.clone(),
            distance_m: Some(config.anomaly_sentinel_distance_m),
            source,
            corrected: true,
        };
    }

    Resolution {
        coords: candidate,
        distance_m: Some(distance),
        source,
        corrected: false,
    }
}
