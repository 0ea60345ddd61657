// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the note log, the video embed and the background
//! animator, and applies the actions reported by the UI components.

use crate::config::Settings;
use crate::io::serialization::ReportFormat;
use crate::models::{
    background::Animator, game::GameError, notes::NoteLog, report::GameReport, video::VideoEmbed,
};
use crate::ui::{background, notes, scoreboard, toolbar, video};
use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;

/// Main application state.
pub struct PlayByPlayApp {
    settings: Settings,

    /// Saved rallies and the pending line
    notes: NoteLog,

    /// YouTube URL field or the embedded video
    video: VideoEmbed,

    /// Drifting circles behind the panels
    animator: Animator,
    rng: StdRng,
}

impl Default for PlayByPlayApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl PlayByPlayApp {
    /// Create a new application instance.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            notes: NoteLog::new(),
            video: VideoEmbed::new(),
            animator: Animator::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Score the saved lines, oldest first.
    fn report(&self) -> Result<GameReport, GameError> {
        GameReport::from_lines(self.notes.chronological(), &self.settings.players)
    }

    /// Ask for a destination and write the datasheet.
    fn export_datasheet(&self) {
        let lines = self.notes.export_lines();
        if lines.is_empty() {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name(&self.settings.datasheet_name)
            .save_file()
        {
            self.write_datasheet(&lines, &path);
        }
    }

    fn write_datasheet(&self, lines: &[String], path: &Path) {
        match crate::io::datasheet::write_datasheet(lines, path) {
            Ok(_) => log::info!("Exported {} lines to {}", lines.len(), path.display()),
            Err(e) => log::error!("Failed to export datasheet: {:#}", e),
        }
    }

    /// Replace the log with the rallies from a datasheet file.
    fn load_datasheet(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt", "csv"])
            .pick_file()
        else {
            return;
        };

        match crate::io::datasheet::read_datasheet(&path) {
            Ok(lines) => {
                self.notes.load_chronological(&lines);
                log::info!("Loaded {} lines from {}", lines.len(), path.display());
            }
            Err(e) => log::error!("Failed to load datasheet: {:#}", e),
        }
    }

    /// Ask for a destination and write the game report.
    ///
    /// Both formats are offered; the chosen extension decides the output.
    fn export_report(&self, preferred: ReportFormat) {
        let report = match self.report() {
            Ok(report) => report,
            Err(e) => {
                log::error!("Cannot build report: {}", e);
                return;
            }
        };

        let mut dialog = rfd::FileDialog::new();
        for format in report_formats(preferred) {
            dialog = dialog.add_filter(format.label(), format.extensions());
        }

        let name = format!("report.{}", preferred.extensions()[0]);
        if let Some(path) = dialog.set_file_name(name).save_file() {
            match crate::io::serialization::export_report(&report, &path) {
                Ok(_) => log::info!("Exported report to {}", path.display()),
                Err(e) => log::error!("Failed to export report: {:#}", e),
            }
        }
    }

    /// Replace the log with the rallies stored in a game report.
    fn load_report(&mut self) {
        let mut dialog = rfd::FileDialog::new();
        for format in ReportFormat::ALL {
            dialog = dialog.add_filter(format.label(), format.extensions());
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };

        match crate::io::serialization::import_report(&path) {
            Ok(report) => self.apply_report(report),
            Err(e) => log::error!("Failed to load report: {:#}", e),
        }
    }

    fn apply_report(&mut self, report: GameReport) {
        self.notes.load_chronological(&report.rallies);
        log::info!("Loaded {} rallies from report", report.rallies.len());
    }

    /// Advance and paint the background for this frame.
    fn animate_background(&mut self, ctx: &egui::Context) {
        let size = ctx.screen_rect().size();
        if self.animator.needs_layout(size.x, size.y) {
            self.animator.initialize(&mut self.rng, size.x, size.y);
        } else {
            self.animator.tick(&mut self.rng);
        }

        background::paint(ctx, &self.animator);
        ctx.request_repaint();
    }

    fn apply_notes_action(&mut self, action: notes::NotesAction) {
        match action {
            notes::NotesAction::Save => self.notes.save_pending(),
            notes::NotesAction::Remove(id) => {
                self.notes.remove(id);
            }
            notes::NotesAction::None => {}
        }
    }

    fn apply_video_action(&mut self, action: video::VideoAction) {
        match action {
            video::VideoAction::Typed => self.video.on_keystroke(),
            video::VideoAction::Submit => {
                self.video.submit();
            }
            video::VideoAction::Dismiss => self.video.dismiss_invalid(),
            video::VideoAction::None => {}
        }
    }
}

/// Report formats for a save dialog, `preferred` first.
fn report_formats(preferred: ReportFormat) -> impl Iterator<Item = ReportFormat> {
    std::iter::once(preferred).chain(ReportFormat::ALL.into_iter().filter(move |&f| f != preferred))
}

/// Panel frame that lets the background show through.
fn translucent(frame: egui::Frame) -> egui::Frame {
    frame.fill(egui::Color32::from_black_alpha(140))
}

impl eframe::App for PlayByPlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.settings.animate_background {
            self.animate_background(ctx);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Datasheet...").clicked() {
                        self.load_datasheet();
                        ui.close_menu();
                    }
                    if ui.button("Load Report...").clicked() {
                        self.load_report();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Export Datasheet...").clicked() {
                        self.export_datasheet();
                        ui.close_menu();
                    }
                    ui.menu_button("Export Report", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            self.export_report(ReportFormat::Yaml);
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            self.export_report(ReportFormat::Json);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.button("Reset").clicked() {
                        self.notes.reset();
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let has_lines = self.notes.has_export_lines();
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .frame(translucent(egui::Frame::side_top_panel(&ctx.style())))
            .show(ctx, |ui| toolbar::show(ui, has_lines))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Save => self.notes.save_pending(),
            toolbar::ToolbarAction::Reset => self.notes.reset(),
            toolbar::ToolbarAction::Export => self.export_datasheet(),
            toolbar::ToolbarAction::None => {}
        }

        // Ctrl+E exports from anywhere
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::E)) {
            self.export_datasheet();
        }

        // Scoreboard (right side)
        let report = self.report();
        let scoreboard_action = egui::SidePanel::right("scoreboard")
            .default_width(320.0)
            .frame(translucent(egui::Frame::side_top_panel(&ctx.style())))
            .show(ctx, |ui| scoreboard::show(ui, &report))
            .inner;

        if let scoreboard::ScoreboardAction::ExportReport = scoreboard_action {
            self.export_report(ReportFormat::Yaml);
        }

        // Video and play-by-play (center)
        let (video_action, notes_action) = egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::TRANSPARENT))
            .show(ctx, |ui| {
                let video_action = video::show(ui, &mut self.video);
                ui.add_space(12.0);
                let notes_action = notes::show(ui, &mut self.notes);
                (video_action, notes_action)
            })
            .inner;

        self.apply_video_action(video_action);
        self.apply_notes_action(notes_action);
    }
}
