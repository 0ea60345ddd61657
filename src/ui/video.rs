// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! YouTube URL field and embedded video link.

use crate::models::video::{VideoEmbed, VideoState};

/// Result of video panel interaction.
pub enum VideoAction {
    None,
    Typed,
    Submit,
    Dismiss,
}

/// Whether any key other than Enter went down this frame.
///
/// Navigation keys leave the text unchanged but still count as typing.
fn key_pressed(events: &[egui::Event]) -> bool {
    events.iter().any(|event| {
        matches!(event, egui::Event::Key { key, pressed: true, .. } if *key != egui::Key::Enter)
    })
}

/// Display the URL field, or the embedded video once one is accepted.
pub fn show(ui: &mut egui::Ui, video: &mut VideoEmbed) -> VideoAction {
    let mut action = VideoAction::None;

    if let Some(src) = video.embedded_src() {
        ui.horizontal(|ui| {
            ui.label("▶");
            ui.hyperlink_to(src, src);
        });
        return action;
    }

    let invalid = video.is_invalid();
    if let VideoState::Input { url, .. } = &mut video.state {
        ui.horizontal(|ui| {
            let text_color = if invalid {
                egui::Color32::LIGHT_RED
            } else {
                ui.visuals().text_color()
            };

            let response = ui.add(
                egui::TextEdit::singleline(url)
                    .id_source("youtube_url")
                    .hint_text("YouTube URL")
                    .text_color(text_color)
                    .desired_width(ui.available_width() - 32.0),
            );

            if response.changed()
                || (response.has_focus() && ui.input(|i| key_pressed(&i.events)))
            {
                action = VideoAction::Typed;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = VideoAction::Submit;
            }

            if invalid && ui.button("✖").on_hover_text("Clear").clicked() {
                action = VideoAction::Dismiss;
            }
        });
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_navigation_keys_count_as_typing() {
        assert!(key_pressed(&[key(egui::Key::ArrowLeft, true)]));
        assert!(key_pressed(&[key(egui::Key::Home, true)]));
        assert!(key_pressed(&[egui::Event::Copy, key(egui::Key::End, true)]));
    }

    #[test]
    fn test_release_and_enter_do_not_count() {
        assert!(!key_pressed(&[]));
        assert!(!key_pressed(&[key(egui::Key::ArrowLeft, false)]));
        assert!(!key_pressed(&[key(egui::Key::Enter, true)]));
    }
}
