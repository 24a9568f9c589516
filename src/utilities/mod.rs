// src/utilities/mod.rs

pub mod color;

pub use color::Rgb8;
