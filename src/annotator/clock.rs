use crate::utils::round_to;

/// Travel minutes for `distance_m`, rounded to 1 decimal. `None` when nothing was travelled.
pub fn eta_minutes(distance_m: Option<f64>, speed_m_per_min: f64) -> Option<f64> {
    distance_m
        .filter(|&d| d > 0.0)
        .map(|d| round_to(d / speed_m_per_min, 1))
}

/// A time of day in minutes after midnight. The hour is allowed to run past 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(pub u32);

impl ClockTime {
    pub fn render(self, wrap_at_midnight: bool) -> String {
        let hours = self.0 / 60;
        let hours = if wrap_at_midnight { hours % 24 } else { hours };

        format!("{:02}:{:02}", hours, self.0 % 60)
    }
}

/// Per-route time of day, moved forward at every stop.
#[derive(Debug, Clone, Copy)]
pub struct RunningClock {
    now: ClockTime,
}

impl RunningClock {
    pub fn starting_at(minutes: u32) -> Self {
        Self {
            now: ClockTime(minutes),
        }
    }

    /// Moves forward by the rounded ETA, but never by less than a minute.
    pub fn advance(&mut self, eta_min: Option<f64>) -> ClockTime {
        let step = eta_min.unwrap_or(0.0).round_ties_even().max(1.0) as u32;
        self.now = ClockTime(self.now.0.saturating_add(step));
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eta_is_zero_without_distance() {
        assert_eq!(eta_minutes(None, 250.0), None);
        assert_eq!(eta_minutes(Some(0.0), 250.0), None);
    }

    #[test]
    fn eta_is_rounded_to_a_tenth() {
        assert_eq!(eta_minutes(Some(1111.95), 250.0), Some(4.4));
        assert_eq!(eta_minutes(Some(1.0), 250.0), Some(0.0));
        assert_eq!(eta_minutes(Some(500.0), 250.0), Some(2.0));
    }

    #[test]
    fn clock_always_moves_at_least_a_minute() {
        let mut clock = RunningClock::starting_at(420);

        assert_eq!(clock.advance(None), ClockTime(421));
        assert_eq!(clock.advance(Some(0.0)), ClockTime(422));
        assert_eq!(clock.advance(Some(0.4)), ClockTime(423));
        assert_eq!(clock.advance(Some(4.4)), ClockTime(427));
    }

    #[test]
    fn clock_rounds_halves_to_even() {
        let mut clock = RunningClock::starting_at(0);

        assert_eq!(clock.advance(Some(2.5)), ClockTime(2));
        assert_eq!(clock.advance(Some(3.5)), ClockTime(6));
        assert_eq!(clock.advance(Some(0.5)), ClockTime(7));
    }

    #[test]
    fn hours_run_past_midnight_unless_wrapped() {
        let late = ClockTime(24 * 60 + 5);

        assert_eq!(late.render(false), "24:05");
        assert_eq!(late.render(true), "00:05");
        assert_eq!(ClockTime(7 * 60 + 1).render(false), "07:01");
    }
}
