// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub dot_size: f32,         // drawn dot diameter, px
    pub gap: f32,              // spacing between rest positions, px
    pub base_color: String,    // "#RRGGBB"
    pub active_color: String,  // "#RRGGBB", blended in near the pointer
    pub proximity: f32,        // color/trigger radius, px
    pub speed_trigger: f32,    // minimum pointer speed to arm a push, px/s
    pub shock_radius: f32,     // click push reach, px
    pub shock_strength: f32,   // click push intensity
    pub max_speed: f32,        // pointer speed clamp, px/s
    pub resistance: f32,       // displacement phase duration, ms
    pub return_duration: f32,  // return phase duration, s
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dot_size: 16.0,
            gap: 32.0,
            base_color: "#5227FF".to_string(),
            active_color: "#5227FF".to_string(),
            proximity: 150.0,
            speed_trigger: 100.0,
            shock_radius: 250.0,
            shock_strength: 5.0,
            max_speed: 5000.0,
            resistance: 750.0,
            return_duration: 1.5,
        }
    }
}
