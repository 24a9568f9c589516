// src/controllers/pointer.rs
//
// Tracks pointer position, velocity and speed from raw move events.
// Only the tracker writes these fields; the field instance and the
// render path read them.

use nannou::prelude::*;

// Native event streams can outrun the frame rate; events landing inside
// the same ~16ms window are dropped.
const THROTTLE_INTERVAL: f32 = 0.016;

// Assumed elapsed time for the first event, seconds.
const FALLBACK_FRAME_TIME: f32 = 0.016;

#[derive(Debug, Clone)]
pub struct PointerTracker {
    pub position: Point2,
    pub velocity: Vec2,
    pub speed: f32,
    max_speed: f32,
    last_time: Option<f32>,
    last_position: Option<Point2>,
}

impl PointerTracker {
    pub fn new(max_speed: f32) -> Self {
        Self {
            position: Point2::ZERO,
            velocity: Vec2::ZERO,
            speed: 0.0,
            max_speed,
            last_time: None,
            last_position: None,
        }
    }

    // Ingest one move event, position in surface coordinates and `now` in
    // seconds. Returns true when the event was accepted; callers only run
    // trigger checks on accepted events.
    pub fn on_move(&mut self, position: Point2, now: f32) -> bool {
        if let Some(last) = self.last_time {
            if now - last < THROTTLE_INTERVAL {
                return false;
            }
        }

        let elapsed = match self.last_time {
            Some(last) => (now - last).max(f32::EPSILON),
            None => FALLBACK_FRAME_TIME,
        };
        let delta = position - self.last_position.unwrap_or(position);

        // px per second
        let mut velocity = delta / elapsed;
        let mut speed = velocity.length();

        // clamp magnitude, keep direction
        if speed > self.max_speed {
            velocity *= self.max_speed / speed;
            speed = self.max_speed;
        }

        self.position = position;
        self.velocity = velocity;
        self.speed = speed;
        self.last_time = Some(now);
        self.last_position = Some(position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_has_zero_velocity() {
        let mut tracker = PointerTracker::new(5000.0);
        assert!(tracker.on_move(pt2(40.0, 60.0), 0.0));
        assert_eq!(tracker.position, pt2(40.0, 60.0));
        assert_eq!(tracker.speed, 0.0);
    }

    #[test]
    fn test_velocity_is_per_second() {
        let mut tracker = PointerTracker::new(5000.0);
        tracker.on_move(pt2(0.0, 0.0), 0.0);
        // 100px in 50ms = 2000 px/s
        assert!(tracker.on_move(pt2(100.0, 0.0), 0.05));
        assert!((tracker.velocity.x - 2000.0).abs() < 1e-3);
        assert!((tracker.speed - 2000.0).abs() < 1e-3);
    }

    #[test]
    fn test_speed_clamp_scales_components() {
        let mut tracker = PointerTracker::new(500.0);
        tracker.on_move(pt2(0.0, 0.0), 0.0);
        // 2000 px/s against a 500 px/s cap scales components by 0.25
        tracker.on_move(pt2(100.0, 0.0), 0.05);
        assert!((tracker.speed - 500.0).abs() < 1e-3);
        assert!((tracker.velocity.x - 500.0).abs() < 1e-3);
        assert!(tracker.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn test_clamp_preserves_direction() {
        let mut tracker = PointerTracker::new(500.0);
        tracker.on_move(pt2(0.0, 0.0), 0.0);
        // 3-4-5 move: velocity (600, 800), speed 1000
        tracker.on_move(pt2(30.0, 40.0), 0.05);
        assert!((tracker.speed - 500.0).abs() < 1e-3);
        assert!((tracker.velocity.x - 300.0).abs() < 1e-3);
        assert!((tracker.velocity.y - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_speed_never_exceeds_max() {
        let mut tracker = PointerTracker::new(750.0);
        let moves = vec![
            (pt2(0.0, 0.0), 0.0),
            (pt2(500.0, 0.0), 0.02),
            (pt2(500.0, 900.0), 0.04),
            (pt2(-2000.0, 900.0), 0.06),
            (pt2(-2000.0, 901.0), 0.08),
        ];
        for (position, now) in moves {
            tracker.on_move(position, now);
            assert!(tracker.speed <= 750.0 + 1e-3);
        }
    }

    #[test]
    fn test_throttle_drops_fast_events() {
        let mut tracker = PointerTracker::new(5000.0);
        tracker.on_move(pt2(0.0, 0.0), 0.0);
        // 5ms later: rejected, state untouched
        assert!(!tracker.on_move(pt2(50.0, 50.0), 0.005));
        assert_eq!(tracker.position, pt2(0.0, 0.0));
        // 20ms later: accepted
        assert!(tracker.on_move(pt2(50.0, 50.0), 0.02));
        assert_eq!(tracker.position, pt2(50.0, 50.0));
    }
}
