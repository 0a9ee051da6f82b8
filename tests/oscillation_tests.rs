use shape_morph::animation::{advance_parameter, OscillationMode};

#[cfg(test)]
mod bounds_tests {
    use super::*;

    #[test]
    fn test_output_stays_in_bounds_for_any_start() {
        let (min, max) = (0.01, std::f32::consts::TAU);
        let starts = [-10.0, -0.5, 0.0, 0.01, 1.0, 3.0, 6.2, 6.3, 50.0];
        let deltas = [-7.0, -0.05, -0.001, 0.001, 0.05, 7.0];

        for mode in [OscillationMode::Alternate, OscillationMode::Normal] {
            for &start in &starts {
                for &delta in &deltas {
                    let (mut value, mut d) = (start, delta);
                    for _ in 0..500 {
                        let step = advance_parameter(value, d, min, max, mode);
                        assert!(
                            (min..=max).contains(&step.value),
                            "{mode:?} start={start} delta={delta} produced {}",
                            step.value
                        );
                        value = step.value;
                        d = step.delta;
                    }
                }
            }
        }
    }

    #[test]
    fn test_degenerate_range_pins_value() {
        let step = advance_parameter(3.0, 0.5, 2.0, 2.0, OscillationMode::Alternate);
        assert_eq!(step.value, 2.0);
        let step = advance_parameter(step.value, step.delta, 2.0, 2.0, OscillationMode::Alternate);
        assert_eq!(step.value, 2.0);
    }
}

#[cfg(test)]
mod alternate_mode_tests {
    use super::*;

    #[test]
    fn test_sign_flips_exactly_when_bound_is_crossed() {
        let (min, max) = (0.0, 1.0);
        let (mut value, mut delta) = (0.3, 0.07);

        for _ in 0..1000 {
            let raw = value + delta;
            let step = advance_parameter(value, delta, min, max, OscillationMode::Alternate);
            let crossed = raw > max || raw < min;
            let flipped = step.delta.signum() != delta.signum();
            assert_eq!(crossed, flipped, "value={value} delta={delta}");
            assert_eq!(step.delta.abs(), delta.abs());
            value = step.value;
            delta = step.delta;
        }
    }

    #[test]
    fn test_oscillation_has_no_drift() {
        // Quarter steps are exact in binary, so one cycle must land on the start again
        let (min, max) = (0.0, 2.0);
        let (start, step_size) = (1.0, 0.25);
        let (mut value, mut delta) = (start, step_size);

        // 4 up to max, 1 clamp, 8 down to min, 1 clamp, 4 back up
        const CYCLE: usize = 18;
        for cycle in 0..100 {
            for _ in 0..CYCLE {
                let step = advance_parameter(value, delta, min, max, OscillationMode::Alternate);
                value = step.value;
                delta = step.delta;
            }
            assert_eq!(value, start, "drifted after {} cycles", cycle + 1);
            assert_eq!(delta, step_size);
        }
    }

    #[test]
    fn test_reaches_both_bounds() {
        let (mut value, mut delta) = (0.5, -0.05);
        let mut saw_min = false;
        let mut saw_max = false;

        for _ in 0..200 {
            let step = advance_parameter(value, delta, 0.01, 1.0, OscillationMode::Alternate);
            saw_min |= step.value == 0.01;
            saw_max |= step.value == 1.0;
            value = step.value;
            delta = step.delta;
        }

        assert!(saw_min && saw_max);
    }
}

#[cfg(test)]
mod normal_mode_tests {
    use super::*;

    #[test]
    fn test_overflow_restarts_from_min() {
        let step = advance_parameter(0.95, 0.1, 0.0, 1.0, OscillationMode::Normal);
        assert_eq!(step.value, 0.0);
        assert!(step.completed);
    }

    #[test]
    fn test_completion_reported_once_per_overflow() {
        let (mut value, mut delta) = (0.0, 0.3);
        let mut completions = 0;

        for _ in 0..40 {
            let step = advance_parameter(value, delta, 0.0, 1.0, OscillationMode::Normal);
            if step.completed {
                completions += 1;
            }
            value = step.value;
            delta = step.delta;
        }

        assert!(completions > 0);
        assert!(completions < 40);
    }
}
