// src/models/mod.rs

pub mod dot;

pub use dot::Dot;
