// src/controllers/mod.rs

pub mod pointer;

pub use pointer::PointerTracker;
