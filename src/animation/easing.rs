// src/animation/easing.rs
//
// The two curves driving a perturbation cycle.

use std::f32::consts::PI;

// Front-loaded: fast start, gentle settle into the displacement target.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// Decaying oscillation for the springback. Pinned to exactly 1.0 at
// t = 1 so the return phase lands on a zero offset.
pub fn ease_out_elastic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return 1.0;
    }
    1.0 - 2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * (2.0 * PI / 3.0)).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease_out_cubic(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_cubic_clamps_out_of_range_input() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn test_elastic_completes_exactly() {
        assert_eq!(ease_out_elastic(1.0), 1.0);
        assert_eq!(ease_out_elastic(2.5), 1.0);
    }

    #[test]
    fn test_elastic_oscillation_decays() {
        // past the first overshoot the curve stays near 1
        for step in 50..100 {
            let value = ease_out_elastic(step as f32 / 100.0);
            assert!((value - 1.0).abs() < 0.05);
        }
    }
}
