use serde::{Deserialize, Serialize};

/// What happens when a value runs past its upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OscillationMode {
    /// Clamp to max and reverse (ping-pong)
    #[default]
    Alternate,
    /// Jump back to min and reverse
    Normal,
}

/// Result of a single parameter step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub value: f32,
    pub delta: f32,
    /// True when this step ran into the upper bound
    pub completed: bool,
}

/// Step `value` by `delta`, keeping it inside `[min, max]`.
///
/// Hitting either bound flips the sign of the returned delta. Past `max`,
/// `Alternate` clamps to `max` while `Normal` wraps to `min`. Requires
/// `min <= max`.
pub fn advance_parameter(value: f32, delta: f32, min: f32, max: f32, mode: OscillationMode) -> Advance {
    debug_assert!(min <= max, "inverted bounds [{min}, {max}]");

    let mut next = value + delta;
    let mut delta = delta;
    let mut completed = false;

    if next > max {
        next = match mode {
            OscillationMode::Alternate => max,
            OscillationMode::Normal => min,
        };
        delta = -delta;
        completed = true;
    } else if next < min {
        next = min;
        delta = -delta;
    }

    Advance { value: next, delta, completed }
}

/// Same as [`advance_parameter`], calling `on_complete` when the upper bound is reached
pub fn advance_parameter_with<F: FnOnce()>(
    value: f32,
    delta: f32,
    min: f32,
    max: f32,
    mode: OscillationMode,
    on_complete: F,
) -> Advance {
    let step = advance_parameter(value, delta, min, max, mode);
    if step.completed {
        on_complete();
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_inside_bounds_keeps_delta() {
        let step = advance_parameter(1.0, 0.5, 0.0, 2.0, OscillationMode::Alternate);
        assert_eq!(step.value, 1.5);
        assert_eq!(step.delta, 0.5);
        assert!(!step.completed);
    }

    #[test]
    fn alternate_clamps_at_max() {
        let step = advance_parameter(1.8, 0.5, 0.0, 2.0, OscillationMode::Alternate);
        assert_eq!(step.value, 2.0);
        assert_eq!(step.delta, -0.5);
        assert!(step.completed);
    }

    #[test]
    fn normal_wraps_to_min() {
        let step = advance_parameter(1.8, 0.5, 0.0, 2.0, OscillationMode::Normal);
        assert_eq!(step.value, 0.0);
        assert_eq!(step.delta, -0.5);
        assert!(step.completed);
    }

    #[test]
    fn clamps_at_min_in_both_modes() {
        for mode in [OscillationMode::Alternate, OscillationMode::Normal] {
            let step = advance_parameter(0.2, -0.5, 0.0, 2.0, mode);
            assert_eq!(step.value, 0.0);
            assert_eq!(step.delta, 0.5);
            assert!(!step.completed);
        }
    }

    #[test]
    fn landing_exactly_on_bound_does_not_flip() {
        let step = advance_parameter(1.5, 0.5, 0.0, 2.0, OscillationMode::Alternate);
        assert_eq!(step.value, 2.0);
        assert_eq!(step.delta, 0.5);
    }

    #[test]
    fn callback_fires_only_on_completion() {
        let mut calls = 0;
        advance_parameter_with(0.5, 0.1, 0.0, 1.0, OscillationMode::Alternate, || calls += 1);
        assert_eq!(calls, 0);
        advance_parameter_with(0.95, 0.1, 0.0, 1.0, OscillationMode::Alternate, || calls += 1);
        assert_eq!(calls, 1);
    }
}
