use std::fmt::Display;

use itertools::Itertools;

/// Where a stop's resolved coordinates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSource {
    /// The stop declared both `lat` and `lng`.
    Declared,
    /// Undeclared, the previous stop's position was reused.
    CarriedForward,
    /// Undeclared first stop, [`Coords::ORIGIN`](super::Coords::ORIGIN) was used.
    Origin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Annotated {
        source: CoordSource,
        /// The candidate jumped too far and was replaced by the previous position.
        corrected: bool,
    },
    /// Not an object. Left untouched and invisible to the running state.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Annotated(RouteStats),
    /// Not an object, or `stops` is missing or not an array. Left untouched.
    PassThrough,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouteStats {
    pub stops_annotated: usize,
    pub stops_skipped: usize,
    pub carried_forward: usize,
    pub origin_fallbacks: usize,
    pub anomalies_corrected: usize,
}

impl RouteStats {
    pub fn record(&mut self, outcome: StopOutcome) {
        match outcome {
            StopOutcome::Skipped => self.stops_skipped += 1,
            StopOutcome::Annotated { source, corrected } => {
                self.stops_annotated += 1;
                match source {
                    CoordSource::Declared => {}
                    CoordSource::CarriedForward => self.carried_forward += 1,
                    CoordSource::Origin => self.origin_fallbacks += 1,
                }
                if corrected {
                    self.anomalies_corrected += 1;
                }
            }
        }
    }

    fn merge(&mut self, other: RouteStats) {
        self.stops_annotated += other.stops_annotated;
        self.stops_skipped += other.stops_skipped;
        self.carried_forward += other.carried_forward;
        self.origin_fallbacks += other.origin_fallbacks;
        self.anomalies_corrected += other.anomalies_corrected;
    }
}

/// Totals over a whole collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub routes_annotated: usize,
    pub routes_passed_through: usize,
    pub stops: RouteStats,
}

impl Summary {
    pub fn record(&mut self, outcome: RouteOutcome) {
        match outcome {
            RouteOutcome::PassThrough => self.routes_passed_through += 1,
            RouteOutcome::Annotated(stats) => {
                self.routes_annotated += 1;
                self.stops.merge(stats);
            }
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [
            ("routes annotated", self.routes_annotated),
            ("routes passed through", self.routes_passed_through),
            ("stops annotated", self.stops.stops_annotated),
            ("stops skipped", self.stops.stops_skipped),
            ("coords carried forward", self.stops.carried_forward),
            ("origin fallbacks", self.stops.origin_fallbacks),
            ("anomalies corrected", self.stops.anomalies_corrected),
        ];

        write!(
            f,
            "{}",
            parts
                .iter()
                .map(|(label, count)| format!("{label}: {count}"))
                .join(", ")
        )
    }
}
