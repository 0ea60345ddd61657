// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Game report serialization.
//!
//! This module handles exporting and importing game reports in YAML and
//! JSON formats.

use crate::models::report::GameReport;
use anyhow::Result;
use std::path::Path;

/// Report formats the export menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Yaml, ReportFormat::Json];

    /// File dialog filter name.
    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Yaml => "YAML",
            ReportFormat::Json => "JSON",
        }
    }

    /// Extensions recognized for this format, preferred first.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ReportFormat::Yaml => &["yaml", "yml"],
            ReportFormat::Json => &["json"],
        }
    }

    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Some(ReportFormat::Yaml),
            Some("json") => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Export a game report to YAML format.
pub fn export_yaml(report: &GameReport, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(report)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a game report to JSON format.
pub fn export_json(report: &GameReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Export using the format implied by the path's extension.
pub fn export_report(report: &GameReport, path: &Path) -> Result<()> {
    match ReportFormat::from_path(path) {
        Some(ReportFormat::Yaml) => export_yaml(report, path),
        Some(ReportFormat::Json) => export_json(report, path),
        None => anyhow::bail!("Unsupported file extension: {}", path.display()),
    }
}

/// Import a game report from YAML format.
pub fn import_yaml(path: &Path) -> Result<GameReport> {
    let yaml = std::fs::read_to_string(path)?;
    let report = serde_yaml::from_str(&yaml)?;
    Ok(report)
}

/// Import a game report from JSON format.
pub fn import_json(path: &Path) -> Result<GameReport> {
    let json = std::fs::read_to_string(path)?;
    let report = serde_json::from_str(&json)?;
    Ok(report)
}

/// Import using the format implied by the path's extension.
pub fn import_report(path: &Path) -> Result<GameReport> {
    match ReportFormat::from_path(path) {
        Some(ReportFormat::Yaml) => import_yaml(path),
        Some(ReportFormat::Json) => import_json(path),
        None => anyhow::bail!("Unsupported file extension: {}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> GameReport {
        let names = ["Billy", "Bobby", "Max", "Cole"].map(String::from);
        GameReport::from_lines(["1343121p", "143412n", "3121p"], &names).unwrap()
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("playbyplay-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("a.yml")), Some(ReportFormat::Yaml));
        assert_eq!(ReportFormat::from_path(Path::new("a.json")), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::from_path(Path::new("a.txt")), None);
    }

    #[test]
    fn test_export_json() {
        let path = temp_path("report.json");
        export_report(&report(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["score"]["home"], 2);
        assert_eq!(value["score"]["away"], 1);
        assert_eq!(value["winner"], "home");
        assert_eq!(value["players"][3]["name"], "Cole");
    }

    #[test]
    fn test_export_yaml() {
        let path = temp_path("report.yaml");
        export_report(&report(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let parsed: GameReport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.rallies, vec!["1343121p", "143412n", "3121p"]);
    }

    #[test]
    fn test_export_unsupported_extension() {
        assert!(export_report(&report(), &temp_path("report.txt")).is_err());
    }

    #[test]
    fn test_filter_extensions_match_format() {
        for format in ReportFormat::ALL {
            for ext in format.extensions() {
                let path = format!("report.{}", ext);
                assert_eq!(ReportFormat::from_path(Path::new(&path)), Some(format));
            }
        }
    }

    #[test]
    fn test_import_round_trip() {
        let original = report();
        for name in ["roundtrip.yaml", "roundtrip.json"] {
            let path = temp_path(name);
            export_report(&original, &path).unwrap();
            let loaded = import_report(&path).unwrap();
            std::fs::remove_file(&path).ok();

            assert_eq!(loaded.rallies, original.rallies);
            assert_eq!(loaded.score, original.score);
            assert_eq!(loaded.winner, original.winner);
            assert_eq!(loaded.players[0].name, "Billy");
        }
    }

    #[test]
    fn test_import_errors() {
        assert!(import_report(&temp_path("missing.json")).is_err());

        let path = temp_path("garbage.yaml");
        std::fs::write(&path, "score: [1, 2").unwrap();
        let result = import_report(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());

        assert!(import_report(Path::new("report.txt")).is_err());
    }
}
