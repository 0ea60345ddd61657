// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Play-by-play input and saved line list.
//!
//! The panel reads the note log and reports what the user did; the app
//! applies the action to the log.

use crate::models::notes::{pending_font_size, NoteLog};

/// Shown in place of the list while nothing is saved.
const PLACEHOLDER: &str = "Play by Play";

/// Result of play-by-play panel interaction.
pub enum NotesAction {
    None,
    Save,
    Remove(u64),
}

/// Display the pending input followed by the saved lines.
pub fn show(ui: &mut egui::Ui, log: &mut NoteLog) -> NotesAction {
    let mut action = NotesAction::None;

    let font = egui::FontId::monospace(pending_font_size(log.pending.len()));
    let response = ui.add(
        egui::TextEdit::singleline(&mut log.pending)
            .id_source("pending_rally")
            .font(font)
            .hint_text("1343121p")
            .desired_width(f32::INFINITY),
    );

    if response.changed() && log.filter_pending() {
        log::trace!("Dropped characters outside the rally lexicon");
    }

    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        action = NotesAction::Save;
        response.request_focus();
    }

    ui.add_space(12.0);

    if log.shows_placeholder() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new(PLACEHOLDER)
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
        });
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in log.entries() {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&entry.text)
                        .monospace()
                        .strong()
                        .size(18.0),
                );

                if let Some(issue) = &entry.issue {
                    ui.label(egui::RichText::new("⚠").color(egui::Color32::YELLOW))
                        .on_hover_text(issue.to_string());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Remove").clicked() {
                        action = NotesAction::Remove(entry.id);
                    }
                });
            });
        }
    });

    action
}
