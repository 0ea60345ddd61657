// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Score and per-player statistics panel.
//!
//! Recomputed from the saved lines every frame; a line that does not
//! parse hides the table and shows the error instead.

use crate::models::game::GameError;
use crate::models::rally::Team;
use crate::models::report::GameReport;

/// Result of scoreboard interaction.
pub enum ScoreboardAction {
    None,
    ExportReport,
}

fn team_name(team: Team) -> &'static str {
    match team {
        Team::Home => "Home",
        Team::Away => "Away",
    }
}

/// Display the score, winner and stat table.
pub fn show(ui: &mut egui::Ui, report: &Result<GameReport, GameError>) -> ScoreboardAction {
    let mut action = ScoreboardAction::None;

    ui.heading("Game");
    ui.separator();

    let report = match report {
        Ok(report) => report,
        Err(GameError::NoRallies) => {
            ui.label(egui::RichText::new("No rallies saved yet").weak());
            return action;
        }
        Err(e) => {
            ui.label(egui::RichText::new(e.to_string()).color(egui::Color32::LIGHT_RED));
            return action;
        }
    };

    ui.label(
        egui::RichText::new(format!("{} - {}", report.score.home, report.score.away))
            .size(28.0)
            .strong(),
    );
    match report.winner {
        Some(team) => ui.label(format!("{} leads", team_name(team))),
        None => ui.label("Tied"),
    };

    ui.add_space(8.0);

    egui::Grid::new("player_stats")
        .striped(true)
        .num_columns(6)
        .show(ui, |ui| {
            for header in ["Player", "Total", "Hit", "Def", "Serve", "Clean"] {
                ui.label(egui::RichText::new(header).strong());
            }
            ui.end_row();

            for player in &report.players {
                ui.label(format!("{} ({})", player.name, team_name(player.team)));
                for value in [
                    player.stats.total,
                    player.stats.hitting,
                    player.stats.defense,
                    player.stats.serving,
                    player.stats.cleanliness,
                ] {
                    ui.label(format!("{:.2}", value));
                }
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    if ui.button("Export Report...").clicked() {
        action = ScoreboardAction::ExportReport;
    }

    action
}
