//! Walks every route's stops in order and annotates them with distance, ETA and arrival time.

pub mod clock;
pub mod resolver;

use serde_json::Value;
use tracing::debug;

use crate::{
    config::AnnotatorConfig,
    model::{Coords, RouteOutcome, RouteStats, StopAnnotation, StopOutcome, Summary},
    utils::round_to,
};
use clock::{RunningClock, eta_minutes};
use resolver::resolve;

/// State carried from one stop to the next within a single route.
#[derive(Debug, Clone)]
pub struct RouteState {
    previous: Option<Coords>,
    clock: RunningClock,
}

impl RouteState {
    pub fn new(config: &AnnotatorConfig) -> Self {
        Self {
            previous: None,
            clock: RunningClock::starting_at(config.day_start_min),
        }
    }
}

/// Annotates every route in place. Routes are independent and keep their order.
#[tracing::instrument(skip_all, fields(routes = routes.len()))]
pub fn annotate_collection(routes: &mut [Value], config: &AnnotatorConfig) -> Summary {
    let mut summary = Summary::default();

    for (index, route) in routes.iter_mut().enumerate() {
        let outcome = annotate_route(route, config);
        let route_id = route.get("id").unwrap_or(&Value::Null);
        debug!(index, %route_id, ?outcome);
        summary.record(outcome);
    }

    summary
}

/// Annotates a route's stops in order, with fresh running state.
///
/// Anything that is not an object holding a `stops` array is left as is.
pub fn annotate_route(route: &mut Value, config: &AnnotatorConfig) -> RouteOutcome {
    let Some(stops) = route.get_mut("stops").and_then(Value::as_array_mut) else {
        return RouteOutcome::PassThrough;
    };

    let mut state = RouteState::new(config);
    let mut stats = RouteStats::default();

    for stop in stops.iter_mut() {
        stats.record(annotate_stop(stop, &mut state, config));
    }

    RouteOutcome::Annotated(stats)
}

/// Resolves, measures and timestamps one stop, then moves `state` on to it.
///
/// A stop that is not an object is skipped and `state` is left alone.
pub fn annotate_stop(
    stop: &mut Value,
    state: &mut RouteState,
    config: &AnnotatorConfig,
) -> StopOutcome {
    let Some(fields) = stop.as_object_mut() else {
        return StopOutcome::Skipped;
    };

    let declared = Coords::from_declared(fields.get("coords"));
    let resolution = resolve(declared, state.previous.as_ref(), config);

    let eta_min = eta_minutes(resolution.distance_m, config.speed_m_per_min);
    let time = state.clock.advance(eta_min);
    state.previous = Some(resolution.coords.clone());

    StopAnnotation {
        coords: resolution.coords,
        distance_from_prev_m: resolution.distance_m.map(|d| round_to(d, 2)),
        eta_min,
        time: time.render(config.wrap_at_midnight),
    }
    .write_into(fields);

    StopOutcome::Annotated {
        source: resolution.source,
        corrected: resolution.corrected,
    }
}
