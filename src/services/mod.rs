// src/services/mod.rs

pub mod layout;

pub use layout::GridLayout;
