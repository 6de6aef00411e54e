use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// A geographic point in degrees.
///
/// Coordinates read from a stop remember the numbers they were written with,
/// so `{"lat": 40, "lng": 44}` is written back as integers.
#[derive(Debug, Clone)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
    written: Option<(Number, Number)>,
}

#[derive(Serialize)]
struct LatLng<T> {
    lat: T,
    lng: T,
}

impl Coords {
    /// Stand-in for a route's first stop when it declares no position. Not a real location.
    pub const ORIGIN: Coords = Coords {
        lat: 0.0,
        lng: 0.0,
        written: None,
    };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            written: None,
        }
    }

    /// Reads the coordinates a stop declares under `coords`.
    ///
    /// Both `lat` and `lng` have to be present and numeric, anything else counts as undeclared.
    pub fn from_declared(value: Option<&Value>) -> Option<Self> {
        let Value::Object(fields) = value? else {
            return None;
        };

        let (Some(Value::Number(lat)), Some(Value::Number(lng))) =
            (fields.get("lat"), fields.get("lng"))
        else {
            return None;
        };

        Some(Self {
            lat: lat.as_f64()?,
            lng: lng.as_f64()?,
            written: Some((lat.clone(), lng.clone())),
        })
    }
}

impl PartialEq for Coords {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl Serialize for Coords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.written {
            Some((lat, lng)) => LatLng { lat, lng }.serialize(serializer),
            None => LatLng {
                lat: self.lat,
                lng: self.lng,
            }
            .serialize(serializer),
        }
    }
}
