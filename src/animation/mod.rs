// src/animation/mod.rs

pub mod easing;
pub mod perturbation;

pub use easing::{ease_out_cubic, ease_out_elastic};
pub use perturbation::Perturbation;
