use serde_json::{Map, Value, json};

use super::Coords;

/// The fields the annotator computes for a single stop.
#[derive(Debug, Clone, PartialEq)]
pub struct StopAnnotation {
    pub coords: Coords,
    /// Meters from the previous stop, rounded to 2 decimals.
    /// `None` on a route's first stop, which is written as a plain `0`.
    pub distance_from_prev_m: Option<f64>,
    /// Minutes from the previous stop, rounded to 1 decimal.
    /// `None` when no distance was covered, which is written as a plain `0`.
    pub eta_min: Option<f64>,
    /// `HH:MM`, the hour may be 24 or larger.
    pub time: String,
}

impl StopAnnotation {
    /// Overwrites the annotated fields of a stop. Keys the stop already has keep their position.
    pub fn write_into(self, stop: &mut Map<String, Value>) {
        stop.insert("coords".to_string(), json!(self.coords));
        stop.insert(
            "distance_from_prev_m".to_string(),
            self.distance_from_prev_m.map_or(json!(0), |d| json!(d)),
        );
        stop.insert(
            "eta_min".to_string(),
            self.eta_min.map_or(json!(0), |eta| json!(eta)),
        );
        stop.insert("time".to_string(), Value::String(self.time));
    }
}
