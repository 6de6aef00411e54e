use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Timelike};
use clap::Parser;

use crate::collection::default_output_path;

/// Sphere radius used for great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// About 15 km/h.
pub const AVG_SPEED_M_PER_MIN: f64 = 250.0;
/// A jump from the previous stop beyond this is treated as a coordinate error.
pub const ANOMALY_THRESHOLD_M: f64 = 5000.0;
/// 07:00
pub const DAY_START_MIN: u32 = 7 * 60;
/// Distance recorded for a corrected jump. Non-zero so the clock still moves.
pub const ANOMALY_SENTINEL_DISTANCE_M: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatorConfig {
    pub speed_m_per_min: f64,
    pub anomaly_threshold_m: f64,
    pub anomaly_sentinel_distance_m: f64,
    /// Minutes after midnight at which every route starts.
    pub day_start_min: u32,
    /// Render hours modulo 24. Off by default, so long routes show `24:05` and up.
    pub wrap_at_midnight: bool,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            speed_m_per_min: AVG_SPEED_M_PER_MIN,
            anomaly_threshold_m: ANOMALY_THRESHOLD_M,
            anomaly_sentinel_distance_m: ANOMALY_SENTINEL_DISTANCE_M,
            day_start_min: DAY_START_MIN,
            wrap_at_midnight: false,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Expected a time of day as HH:MM, got {0:?}")]
    InvalidDayStart(String),

    #[error("Expected a positive number, got {0:?}")]
    NotPositive(String),

    #[error("Expected a non-negative number, got {0:?}")]
    Negative(String),
}

/// Annotates transit route stops with distance, travel time and arrival time.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// JSON array of routes to annotate
    #[arg(env = "ROUTE_ETA_INPUT")]
    pub input: PathBuf,

    /// Where to write the annotated routes. Defaults to `<input>_with_eta_times.json`
    #[arg(short, long, env = "ROUTE_ETA_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Clock time at which every route starts
    #[arg(long, env = "ROUTE_ETA_DAY_START", default_value = "07:00", value_parser = parse_day_start)]
    pub day_start: u32,

    /// Average travel speed in meters per minute
    #[arg(long, env = "ROUTE_ETA_SPEED", default_value_t = AVG_SPEED_M_PER_MIN, value_parser = parse_positive)]
    pub speed_m_per_min: f64,

    /// Jumps between consecutive stops above this many meters are treated as coordinate errors
    #[arg(long, env = "ROUTE_ETA_ANOMALY_THRESHOLD", default_value_t = ANOMALY_THRESHOLD_M, value_parser = parse_non_negative)]
    pub anomaly_threshold_m: f64,

    /// Render arrival hours modulo 24 instead of letting them run past 23
    #[arg(long, env = "ROUTE_ETA_WRAP_AT_MIDNIGHT")]
    pub wrap_at_midnight: bool,

    /// Also write a daily rolling log file into this directory
    #[arg(long, env = "ROUTE_ETA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn annotator_config(&self) -> AnnotatorConfig {
        AnnotatorConfig {
            speed_m_per_min: self.speed_m_per_min,
            anomaly_threshold_m: self.anomaly_threshold_m,
            day_start_min: self.day_start,
            wrap_at_midnight: self.wrap_at_midnight,
            ..AnnotatorConfig::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

pub fn parse_day_start(s: &str) -> Result<u32, ConfigError> {
    let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ConfigError::InvalidDayStart(s.to_string()))?;

    Ok(time.hour() * 60 + time.minute())
}

fn parse_positive(s: &str) -> Result<f64, ConfigError> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ConfigError::NotPositive(s.to_string())),
    }
}

fn parse_non_negative(s: &str) -> Result<f64, ConfigError> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::Negative(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_the_named_constants() {
        let args = Args::try_parse_from(["route_eta", "routes.json"]).unwrap();

        assert_eq!(args.annotator_config(), AnnotatorConfig::default());
        assert_eq!(AnnotatorConfig::default().day_start_min, 420);
        assert_eq!(
            args.output_path(),
            PathBuf::from("routes_with_eta_times.json")
        );
    }

    #[test]
    fn flags_override_the_defaults() {
        let args = Args::try_parse_from([
            "route_eta",
            "data/routes.json",
            "--output",
            "out.json",
            "--day-start",
            "05:30",
            "--speed-m-per-min",
            "400",
            "--wrap-at-midnight",
        ])
        .unwrap();

        let config = args.annotator_config();
        assert_eq!(config.day_start_min, 330);
        assert_eq!(config.speed_m_per_min, 400.0);
        assert!(config.wrap_at_midnight);
        assert_eq!(config.anomaly_threshold_m, ANOMALY_THRESHOLD_M);
        assert_eq!(args.output_path(), PathBuf::from("out.json"));
    }

    #[test]
    fn day_start_must_be_a_time_of_day() {
        assert_eq!(parse_day_start("07:00"), Ok(420));
        assert_eq!(parse_day_start("00:00"), Ok(0));
        assert_eq!(
            parse_day_start("25:00"),
            Err(ConfigError::InvalidDayStart("25:00".to_string()))
        );
        assert!(parse_day_start("seven").is_err());
    }

    #[test]
    fn speed_must_be_positive() {
        assert!(Args::try_parse_from(["route_eta", "r.json", "--speed-m-per-min", "0"]).is_err());
        assert!(Args::try_parse_from(["route_eta", "r.json", "--speed-m-per-min", "-3"]).is_err());
        assert_eq!(parse_positive("250"), Ok(250.0));
    }

    #[test]
    fn anomaly_threshold_may_be_zero() {
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert!(parse_non_negative("-1").is_err());
    }
}
