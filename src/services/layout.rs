// src/services/layout.rs
//
// Grid geometry: fits an evenly spaced dot lattice into a container
// and centers it. Rebuilt from scratch on every resize.

use crate::models::Dot;
use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    pub cell: f32,
    pub start_x: f32,
    pub start_y: f32,
}

impl GridLayout {
    pub fn compute(width: f32, height: f32, dot_size: f32, gap: f32) -> Self {
        let cell = dot_size + gap;
        let cols = (((width + gap) / cell).floor()).max(0.0) as u32;
        let rows = (((height + gap) / cell).floor()).max(0.0) as u32;

        let grid_w = cell * cols as f32 - gap;
        let grid_h = cell * rows as f32 - gap;

        // center the lattice; rest positions are dot centers
        let start_x = (width - grid_w) / 2.0 + dot_size / 2.0;
        let start_y = (height - grid_h) / 2.0 + dot_size / 2.0;

        Self {
            cols,
            rows,
            cell,
            start_x,
            start_y,
        }
    }

    // Row-major, so index = row * cols + col.
    pub fn build_dots(&self) -> Vec<Dot> {
        let mut dots = Vec::with_capacity((self.cols * self.rows) as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let rest = pt2(
                    self.start_x + col as f32 * self.cell,
                    self.start_y + row as f32 * self.cell,
                );
                dots.push(Dot::new(col, row, rest));
            }
        }
        dots
    }
}
