// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background painting.
//!
//! Circles are painted on the background layer before any panel, so the
//! transparent panels on top let them show through.

use crate::models::background::Animator;

/// Fill behind the circles.
pub const BACKDROP: egui::Color32 = egui::Color32::from_rgb(34, 34, 38);

/// Paint the backdrop and every circle as a filled disc.
pub fn paint(ctx: &egui::Context, animator: &Animator) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let screen = ctx.screen_rect();

    painter.rect_filled(screen, 0.0, BACKDROP);

    for circle in animator.circles() {
        painter.circle_filled(
            screen.min + egui::vec2(circle.x, circle.y),
            circle.radius as f32,
            circle.color,
        );
    }
}
