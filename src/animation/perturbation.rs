// src/animation/perturbation.rs
//
// The displace-then-return cycle for a single dot, stepped by advance(dt)
// from the host frame loop. The return phase only begins once the
// displacement phase has consumed its full duration, and it always
// finishes on a zero offset.

use crate::animation::{ease_out_cubic, ease_out_elastic};
use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Displace,
    Return,
}

#[derive(Debug, Clone)]
pub struct Perturbation {
    start: Vec2,
    target: Vec2,
    displace_duration: f32, // seconds
    return_duration: f32,   // seconds
    elapsed: f32,
    phase: Phase,
}

impl Perturbation {
    // `resistance` is in milliseconds, `return_duration` in seconds,
    // matching the configuration surface.
    pub fn new(start: Vec2, target: Vec2, resistance: f32, return_duration: f32) -> Self {
        Self {
            start,
            target,
            displace_duration: (resistance / 1000.0).max(f32::EPSILON),
            return_duration: return_duration.max(f32::EPSILON),
            elapsed: 0.0,
            phase: Phase::Displace,
        }
    }

    // Step the cycle forward and return the dot's new offset.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed += dt;
        match self.phase {
            Phase::Displace => {
                let progress = (self.elapsed / self.displace_duration).min(1.0);
                let eased = ease_out_cubic(progress);
                let offset = self.start + (self.target - self.start) * eased;
                if progress >= 1.0 {
                    self.phase = Phase::Return;
                    self.elapsed = 0.0;
                }
                offset
            }
            Phase::Return => {
                let progress = (self.elapsed / self.return_duration).min(1.0);
                // elastic(1) is pinned to 1, so completion is exactly zero
                self.target * (1.0 - ease_out_elastic(progress))
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Return && self.elapsed >= self.return_duration
    }
}
