use serde::{Deserialize, Serialize};

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    /// Symmetric cubic ease-in/out; monotonic on `[0, 1]`.
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let shifted = doubled - 2.0;
                    (shifted * shifted * shifted + 2.0) / 2.0
                }
            }
        }
    }
}

/// Fixed-duration clock advanced explicitly by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    elapsed_seconds: f64,
    duration_seconds: f64,
    easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(duration_seconds: f64, easing: Easing) -> Self {
        let duration_seconds = if duration_seconds.is_finite() {
            duration_seconds.max(0.0)
        } else {
            0.0
        };
        Self {
            elapsed_seconds: 0.0,
            duration_seconds,
            easing,
        }
    }

    #[must_use]
    pub fn duration_seconds(self) -> f64 {
        self.duration_seconds
    }

    /// Advances the clock. Non-finite or negative deltas are ignored.
    pub fn advance(&mut self, delta_seconds: f64) {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed_seconds = (self.elapsed_seconds + delta_seconds).min(self.duration_seconds);
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed_seconds >= self.duration_seconds
    }

    /// Eased progress in `[0, 1]`; exactly `1.0` once finished.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        self.easing.apply(self.elapsed_seconds / self.duration_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_in_out_is_monotonic_and_pinned() {
        let mut previous = Easing::CubicInOut.apply(0.0);
        assert_eq!(previous, 0.0);
        for step in 1..=100 {
            let value = Easing::CubicInOut.apply(f64::from(step) / 100.0);
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 1.0);
        assert_eq!(Easing::CubicInOut.apply(0.5), 0.5);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let transition = Transition::new(0.0, Easing::Linear);
        assert!(transition.is_finished());
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn advance_saturates_at_duration() {
        let mut transition = Transition::new(1.5, Easing::Linear);
        transition.advance(0.75);
        assert_eq!(transition.progress(), 0.5);
        transition.advance(10.0);
        assert!(transition.is_finished());
        transition.advance(f64::NAN);
        assert_eq!(transition.progress(), 1.0);
    }
}
