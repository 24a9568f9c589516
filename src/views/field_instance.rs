// src/views/field_instance.rs
//
// FieldInstance is the main updating entity of the visualisation. It owns
// the dot lattice, the pointer state and one animation slot per dot, and
// is the interface between the host window and the engine: the host
// forwards platform events here and calls advance() once per frame.

use nannou::prelude::*;
use tracing::debug;

use crate::{
    animation::Perturbation,
    config::FieldConfig,
    controllers::PointerTracker,
    models::Dot,
    services::GridLayout,
    utilities::Rgb8,
};

// Proximity push tuning: a sliver of the pointer velocity bleeds into
// the target, and the whole push is damped.
const VELOCITY_BLEED: f32 = 0.005;
const PUSH_DAMPING: f32 = 0.8;

pub struct FieldInstance {
    pub config: FieldConfig,
    pub layout: GridLayout,
    pub dots: Vec<Dot>,
    pub pointer: PointerTracker,

    // one slot per dot, indexed like `dots`
    animations: Vec<Option<Perturbation>>,

    base_rgb: Rgb8,
    active_rgb: Rgb8,
}

impl FieldInstance {
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        let base_rgb = Rgb8::from_hex(&config.base_color);
        let active_rgb = Rgb8::from_hex(&config.active_color);
        let layout = GridLayout::compute(width, height, config.dot_size, config.gap);
        let dots = layout.build_dots();
        let animations = vec![None; dots.len()];
        let pointer = PointerTracker::new(config.max_speed);

        Self {
            config,
            layout,
            dots,
            pointer,
            animations,
            base_rgb,
            active_rgb,
        }
    }

    /************************** Platform events ******************************/

    // Resize replaces the dot list wholesale; in-flight animations and
    // offsets go with it.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.layout = GridLayout::compute(width, height, self.config.dot_size, self.config.gap);
        self.dots = self.layout.build_dots();
        self.animations = vec![None; self.dots.len()];
        debug!(
            cols = self.layout.cols,
            rows = self.layout.rows,
            "grid rebuilt"
        );
    }

    // Move events first feed the tracker (which throttles); an accepted
    // event then arms the proximity perturbation when the pointer is fast
    // enough.
    pub fn on_pointer_move(&mut self, position: Point2, now: f32) {
        if !self.pointer.on_move(position, now) {
            return;
        }
        if self.pointer.speed <= self.config.speed_trigger {
            return;
        }

        let pointer_position = self.pointer.position;
        let velocity = self.pointer.velocity;
        for index in 0..self.dots.len() {
            if self.dots[index].perturbing {
                continue;
            }
            let rest = self.dots[index].rest;
            if rest.distance(pointer_position) < self.config.proximity {
                let target = (rest - pointer_position + velocity * VELOCITY_BLEED) * PUSH_DAMPING;
                self.perturb(index, target);
            }
        }
    }

    // Click shock: dots inside the shock radius are pushed away from the
    // click point, harder the closer they are.
    pub fn on_click(&mut self, position: Point2) {
        for index in 0..self.dots.len() {
            if self.dots[index].perturbing {
                continue;
            }
            let rest = self.dots[index].rest;
            let dist = rest.distance(position);
            if dist < self.config.shock_radius {
                let falloff = (1.0 - dist / self.config.shock_radius).max(0.0);
                let target = (rest - position) * self.config.shock_strength * falloff;
                self.perturb(index, target);
            }
        }
    }

    // Replacing the slot supersedes any outstanding cycle for the dot, so
    // two animations can never fight over the same offset.
    fn perturb(&mut self, index: usize, target: Vec2) {
        let dot = &mut self.dots[index];
        dot.perturbing = true;
        self.animations[index] = Some(Perturbation::new(
            dot.offset,
            target,
            self.config.resistance,
            self.config.return_duration,
        ));
    }

    /*************************** Frame loop **********************************/

    pub fn advance(&mut self, dt: f32) {
        for (dot, slot) in self.dots.iter_mut().zip(self.animations.iter_mut()) {
            if let Some(animation) = slot {
                dot.offset = animation.advance(dt);
                if animation.is_complete() {
                    dot.offset = Vec2::ZERO;
                    dot.perturbing = false;
                    *slot = None;
                }
            }
        }
    }

    // Fill color for one dot under the current pointer. Distance is taken
    // from the rest position, so a displaced dot keeps its hue.
    pub fn dot_color(&self, dot: &Dot) -> Rgb8 {
        let proximity_sq = self.config.proximity * self.config.proximity;
        let dist_sq = dot.rest.distance_squared(self.pointer.position);
        if dist_sq <= proximity_sq {
            let t = 1.0 - dist_sq.sqrt() / self.config.proximity;
            self.base_rgb.mix(self.active_rgb, t)
        } else {
            self.base_rgb
        }
    }

    pub fn active_animations(&self) -> usize {
        self.animations.iter().filter(|slot| slot.is_some()).count()
    }
}
