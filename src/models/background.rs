// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Decorative circle animation.
//!
//! Circles drift upward by a small random walk and wrap back to the
//! bottom of the viewport once they leave through the top.

use crate::util::geometry::{horizontal_span, random_between, vertical_span};
use rand::Rng;

/// Fill colors a circle may be painted with.
pub const PALETTE: [egui::Color32; 3] = [
    egui::Color32::from_rgb(0xfa, 0xd2, 0x50),
    egui::Color32::from_rgb(0xfd, 0xe7, 0xa3),
    egui::Color32::from_rgb(0xfd, 0xc8, 0x06),
];

const MIN_CIRCLES: i32 = 30;
const MAX_CIRCLES: i32 = 60;
const MIN_RADIUS: i32 = 5;
const MAX_RADIUS: i32 = 25;

/// A single filled disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: u32,
    pub color: egui::Color32,
}

impl Circle {
    /// True once the whole disc has left through the top edge.
    pub fn above_view(&self) -> bool {
        self.y < -(self.radius as f32)
    }
}

/// Owns the circle set and the viewport it was laid out for.
#[derive(Debug, Default)]
pub struct Animator {
    circles: Vec<Circle>,
    width: f32,
    height: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every circle with a fresh random set for the given viewport.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let count = rng.gen_range(MIN_CIRCLES..=MAX_CIRCLES) as usize;
        self.circles = (0..count)
            .map(|_| {
                let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS) as u32;
                let (x_min, x_max) = horizontal_span(width, radius);
                let (y_min, y_max) = vertical_span(height, radius);
                Circle {
                    x: random_between(rng, x_min, x_max),
                    y: random_between(rng, y_min, y_max),
                    radius,
                    color: PALETTE[rng.gen_range(0..PALETTE.len())],
                }
            })
            .collect();

        log::debug!("Background laid out {} circles for {}x{}", count, width, height);
    }

    /// Advance every circle by one frame.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for circle in &mut self.circles {
            if circle.above_view() {
                let (x_min, x_max) = horizontal_span(self.width, circle.radius);
                circle.x = random_between(rng, x_min, x_max);
                circle.y = self.height + circle.radius as f32;
            } else {
                circle.x += random_between(rng, -1, 1);
                circle.y += random_between(rng, -3, 2);
            }
        }
    }

    /// Whether the layout no longer matches the current viewport.
    pub fn needs_layout(&self, width: f32, height: f32) -> bool {
        self.circles.is_empty() || self.width != width || self.height != height
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
}
