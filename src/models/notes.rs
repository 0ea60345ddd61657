// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Play-by-play note log.
//!
//! The log is an ordered list of saved lines (newest first) plus one
//! pending buffer that has not been committed yet. Rendering reads this
//! state and never mutates it directly.

use super::rally::{Rally, RallyError};

/// Characters accepted into the pending buffer.
pub const LEXICON: &str = "1234aefnpsw";

/// Buffer length at which the input display switches to the small font.
pub const SMALL_FONT_THRESHOLD: usize = 45;

const LARGE_FONT_SIZE: f32 = 40.0;
const SMALL_FONT_SIZE: f32 = 20.0;

/// A keystroke destined for the pending buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
    Enter,
}

/// Decide whether a keystroke may reach the pending buffer.
pub fn accepts(key: Keystroke) -> bool {
    match key {
        Keystroke::Backspace | Keystroke::Enter => true,
        Keystroke::Char(c) => LEXICON.contains(c),
    }
}

/// Font size for the pending buffer display.
pub fn pending_font_size(len: usize) -> f32 {
    if len >= SMALL_FONT_THRESHOLD {
        SMALL_FONT_SIZE
    } else {
        LARGE_FONT_SIZE
    }
}

/// A committed line with a stable id for addressing it from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub text: String,
    /// Why the line does not parse as a rally, checked once on save
    pub issue: Option<RallyError>,
}

#[derive(Debug, Default)]
pub struct NoteLog {
    /// Saved lines, most recent first
    entries: Vec<Entry>,
    /// Text typed but not yet saved
    pub pending: String,
    next_id: u64,
}

impl NoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every character the key filter would have rejected.
    ///
    /// Text widgets deliver whole strings (typing, paste), so the filter
    /// is applied after the fact.
    pub fn filter_pending(&mut self) -> bool {
        let before = self.pending.len();
        self.pending.retain(|c| accepts(Keystroke::Char(c)));
        before != self.pending.len()
    }

    /// Commit `text` to the head of the log and clear the pending buffer.
    pub fn save(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let entry = Entry {
            id: self.next_id,
            text: text.to_string(),
            issue: Rally::parse(text).err(),
        };
        self.next_id += 1;
        self.entries.insert(0, entry);
        self.pending.clear();

        log::info!("Saved line, total: {}", self.entries.len());
    }

    /// Commit whatever is in the pending buffer.
    pub fn save_pending(&mut self) {
        let text = std::mem::take(&mut self.pending);
        self.save(&text);
    }

    /// Remove the entry with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                log::info!("Removed line, total: {}", self.entries.len());
                true
            }
            None => false,
        }
    }

    /// Clear all saved lines and the pending buffer.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.pending.clear();
        log::info!("Reset play-by-play log");
    }

    /// Replace the log with lines given oldest first.
    pub fn load_chronological<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        for line in lines {
            self.save(line.as_ref());
        }
    }

    /// Saved lines in storage order (newest first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Saved lines oldest first.
    pub fn chronological(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(|e| e.text.as_str())
    }

    /// The "empty list" placeholder is shown exactly when this is true.
    pub fn shows_placeholder(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `export_lines` would return anything.
    pub fn has_export_lines(&self) -> bool {
        !self.shows_placeholder() || !self.pending.is_empty()
    }

    /// Lines to export: saved lines oldest first, then any pending text.
    pub fn export_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.chronological().map(str::to_string).collect();
        if !self.pending.is_empty() {
            lines.push(self.pending.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_filter() {
        assert!(!accepts(Keystroke::Char('x')));
        assert!(!accepts(Keystroke::Char('A')));
        assert!(accepts(Keystroke::Char('a')));
        assert!(accepts(Keystroke::Char('1')));
        assert!(accepts(Keystroke::Backspace));
        assert!(accepts(Keystroke::Enter));
        assert!(LEXICON.chars().all(|c| accepts(Keystroke::Char(c))));
    }

    #[test]
    fn test_filter_pending() {
        let mut log = NoteLog::new();
        log.pending = "13x4 Zp".to_string();
        assert!(log.filter_pending());
        assert_eq!(log.pending, "134p");
        assert!(!log.filter_pending());
    }

    #[test]
    fn test_font_size_threshold() {
        assert_eq!(pending_font_size(0), 40.0);
        assert_eq!(pending_font_size(44), 40.0);
        assert_eq!(pending_font_size(45), 20.0);
        assert_eq!(pending_font_size(80), 20.0);
    }

    #[test]
    fn test_save_empty_is_noop() {
        let mut log = NoteLog::new();
        log.pending = "12".to_string();
        log.save("");
        assert!(log.entries().is_empty());
        assert!(log.shows_placeholder());
        assert_eq!(log.pending, "12");
    }

    #[test]
    fn test_save_prepends_and_clears_buffer() {
        let mut log = NoteLog::new();
        log.pending = "hello".to_string();
        log.save("hello");
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].text, "hello");
        assert!(log.pending.is_empty());
        assert!(!log.shows_placeholder());

        log.save("world");
        assert_eq!(log.entries()[0].text, "world");
        assert_eq!(log.entries()[1].text, "hello");
    }

    #[test]
    fn test_remove_last_restores_placeholder() {
        let mut log = NoteLog::new();
        log.save("1a3");
        log.save("4n");

        let first = log.entries()[1].id;
        assert!(log.remove(first));
        assert!(!log.shows_placeholder());

        let last = log.entries()[0].id;
        assert!(log.remove(last));
        assert!(log.shows_placeholder());
        assert!(!log.remove(last));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut log = NoteLog::new();
        log.save("a");
        let id = log.entries()[0].id;
        log.remove(id);
        log.save("b");
        assert_ne!(log.entries()[0].id, id);
    }

    #[test]
    fn test_reset() {
        let mut log = NoteLog::new();
        log.save("1a3");
        log.save("4n");
        log.pending = "13".to_string();
        log.reset();
        assert!(log.shows_placeholder());
        assert!(log.pending.is_empty());
    }

    #[test]
    fn test_export_lines_order() {
        let mut log = NoteLog::new();
        log.save("a");
        log.save("b");
        log.pending = "c".to_string();

        let heads: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(heads, vec!["b", "a"]);
        assert_eq!(log.export_lines().join("\n"), "a\nb\nc");
    }

    #[test]
    fn test_export_lines_empty() {
        let log = NoteLog::new();
        assert!(log.export_lines().is_empty());
        assert!(!log.has_export_lines());
    }

    #[test]
    fn test_has_export_lines() {
        let mut log = NoteLog::new();
        log.pending = "1".to_string();
        assert!(log.has_export_lines());

        log.save_pending();
        assert!(log.has_export_lines());

        let id = log.entries()[0].id;
        log.remove(id);
        assert!(!log.has_export_lines());
    }

    #[test]
    fn test_save_records_parse_issue() {
        let mut log = NoteLog::new();
        log.save("1343121p");
        log.save("4n");
        log.save("1n3");

        assert_eq!(log.entries()[2].issue, None);
        // A missed serve is a complete rally.
        assert_eq!(log.entries()[1].issue, None);
        assert_eq!(log.entries()[0].issue, Some(RallyError::PastEndOfPlay(2)));
    }

    #[test]
    fn test_save_pending() {
        let mut log = NoteLog::new();
        log.pending = "3121p".to_string();
        log.save_pending();
        assert_eq!(log.entries()[0].text, "3121p");
        assert!(log.pending.is_empty());

        log.save_pending();
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_load_chronological() {
        let mut log = NoteLog::new();
        log.save("old");
        log.load_chronological(["1a3", "4n", "3121p"]);
        let lines: Vec<&str> = log.chronological().collect();
        assert_eq!(lines, vec!["1a3", "4n", "3121p"]);
        assert_eq!(log.entries()[0].text, "3121p");
    }
}
