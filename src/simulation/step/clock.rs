/// Longest step ever handed to the physics engine: one 60 fps frame.
pub const MAX_DELTA_MS: f64 = 1000.0 / 60.0;

/// Frame-to-frame delta tracking for the sync loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationClock {
    last: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame, clamped to `0..=MAX_DELTA_MS`.
    /// The first call after a rebase returns zero.
    pub fn advance(&mut self, now: f64) -> f64 {
        let delta = match self.last {
            Some(last) => (now - last).clamp(0.0, MAX_DELTA_MS),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }

    /// Record `now` as the baseline without producing a delta.
    pub fn rebase(&mut self, now: f64) {
        self.last = Some(now);
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_pauses_are_clamped_to_one_frame() {
        let mut clock = SimulationClock::new();
        clock.rebase(0.0);
        assert_eq!(clock.advance(5_000.0), MAX_DELTA_MS);
        assert_eq!(clock.advance(5_010.0), 10.0);
    }

    #[test]
    fn time_going_backwards_yields_zero() {
        let mut clock = SimulationClock::new();
        clock.rebase(100.0);
        assert_eq!(clock.advance(90.0), 0.0);
        assert_eq!(clock.last(), Some(90.0));
    }

    #[test]
    fn first_frame_has_no_delta() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.advance(1234.0), 0.0);
    }
}
