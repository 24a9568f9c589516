// src/views/mod.rs

pub mod field_instance;

pub use field_instance::FieldInstance;
