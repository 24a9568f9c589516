// src/models/dot.rs
//
// One grid cell. A dot's identity is its index in the field's dot vector;
// its rest position only changes on a grid rebuild.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct Dot {
    pub col: u32,
    pub row: u32,
    pub rest: Point2,
    pub offset: Vec2,
    pub perturbing: bool,
}

impl Dot {
    pub fn new(col: u32, row: u32, rest: Point2) -> Self {
        Self {
            col,
            row,
            rest,
            offset: Vec2::ZERO,
            perturbing: false,
        }
    }

    pub fn drawn_position(&self) -> Point2 {
        self.rest + self.offset
    }
}
