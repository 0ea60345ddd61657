// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the play-by-play commands.

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    Save,
    Reset,
    Export,
}

/// Display the toolbar buttons.
pub fn show(ui: &mut egui::Ui, has_lines: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("✔ Save").clicked() {
            action = ToolbarAction::Save;
        }

        if ui.button("⟲ Reset").clicked() {
            action = ToolbarAction::Reset;
        }

        if ui
            .add_enabled(has_lines, egui::Button::new("⬇ Export"))
            .clicked()
        {
            action = ToolbarAction::Export;
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Keys: 1-4 players, a ace, n miss, p point, s/w strong/weak, e error")
                .italics()
                .weak(),
        );
    });

    action
}
