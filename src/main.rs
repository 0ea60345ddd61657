// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Play by Play - Spikeball note taker
//!
//! A desktop application for logging Spikeball rallies as they happen,
//! scoring the game, and exporting the play-by-play as a datasheet.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::PlayByPlayApp;
use config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::load();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Play by Play"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Play by Play",
        options,
        Box::new(|_cc| Ok(Box::new(PlayByPlayApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
