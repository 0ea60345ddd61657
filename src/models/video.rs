// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! YouTube URL validation and the single-video embed state.

use regex::Regex;
use std::sync::LazyLock;

static WATCH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.youtube\.com/watch\?v=([^&#]+)").expect("static regex")
});
static EMBED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://www\.youtube\.com/embed/").expect("static regex"));
static ANY_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://www\.youtube\.com/(.*)$").expect("static regex"));

const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

/// The submitted text is not a YouTube URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a YouTube URL: {0}")]
pub struct InvalidVideoUrl(pub String);

/// Rewrite a YouTube URL into its embeddable form.
pub fn embed_url(url: &str) -> Result<String, InvalidVideoUrl> {
    let url = url.trim();

    if let Some(caps) = WATCH_URL.captures(url) {
        return Ok(format!("{}{}", EMBED_PREFIX, &caps[1]));
    }
    if EMBED_URL.is_match(url) {
        return Ok(url.to_string());
    }
    if let Some(caps) = ANY_URL.captures(url) {
        return Ok(format!("{}{}", EMBED_PREFIX, &caps[1]));
    }

    Err(InvalidVideoUrl(url.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoState {
    /// URL field is showing; `invalid` drives the marker and clear control
    Input { url: String, invalid: bool },
    /// A video has been embedded and the URL field is gone
    Embedded { src: String },
}

impl Default for VideoState {
    fn default() -> Self {
        VideoState::Input {
            url: String::new(),
            invalid: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct VideoEmbed {
    pub state: VideoState,
}

impl VideoEmbed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any keystroke into an invalid field drops the marker first.
    pub fn on_keystroke(&mut self) {
        if let VideoState::Input { invalid, .. } = &mut self.state {
            *invalid = false;
        }
    }

    /// Validate the URL field. Returns true when a video got embedded.
    pub fn submit(&mut self) -> bool {
        let VideoState::Input { url, invalid } = &mut self.state else {
            return false;
        };

        match embed_url(url) {
            Ok(src) => {
                log::info!("Embedding video {}", src);
                self.state = VideoState::Embedded { src };
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                *invalid = true;
                false
            }
        }
    }

    /// The one-shot clear control: empty the field and drop the marker.
    pub fn dismiss_invalid(&mut self) {
        if let VideoState::Input { url, invalid } = &mut self.state {
            if *invalid {
                url.clear();
                *invalid = false;
            }
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.state, VideoState::Input { invalid: true, .. })
    }

    pub fn embedded_src(&self) -> Option<&str> {
        match &self.state {
            VideoState::Embedded { src } => Some(src),
            VideoState::Input { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(url: &str) -> VideoEmbed {
        VideoEmbed {
            state: VideoState::Input {
                url: url.to_string(),
                invalid: false,
            },
        }
    }

    #[test]
    fn test_watch_url_rewritten() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=XYZ").unwrap(),
            "https://www.youtube.com/embed/XYZ"
        );
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=XYZ&t=42s").unwrap(),
            "https://www.youtube.com/embed/XYZ"
        );
    }

    #[test]
    fn test_embed_url_unchanged() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed/XYZ").unwrap(),
            "https://www.youtube.com/embed/XYZ"
        );
    }

    #[test]
    fn test_other_youtube_url_rewritten() {
        assert_eq!(
            embed_url("https://www.youtube.com/XYZ").unwrap(),
            "https://www.youtube.com/embed/XYZ"
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert!(embed_url("https://example.com").is_err());
        assert!(embed_url("").is_err());
        assert!(embed_url("youtube.com/watch?v=XYZ").is_err());
    }

    #[test]
    fn test_submit_valid_embeds() {
        let mut video = input("https://www.youtube.com/watch?v=abc");
        assert!(video.submit());
        assert_eq!(video.embedded_src(), Some("https://www.youtube.com/embed/abc"));

        // The input is gone, a second submit does nothing.
        assert!(!video.submit());
        assert_eq!(video.embedded_src(), Some("https://www.youtube.com/embed/abc"));
    }

    #[test]
    fn test_submit_invalid_marks_input() {
        let mut video = input("https://example.com");
        assert!(!video.submit());
        assert!(video.is_invalid());
        assert!(video.embedded_src().is_none());
    }

    #[test]
    fn test_keystroke_clears_marker() {
        let mut video = input("https://example.com");
        video.submit();
        video.on_keystroke();
        assert!(!video.is_invalid());
        assert_eq!(
            video.state,
            VideoState::Input {
                url: "https://example.com".to_string(),
                invalid: false
            }
        );
    }

    #[test]
    fn test_dismiss_clears_field() {
        let mut video = input("nope");
        video.submit();
        video.dismiss_invalid();
        assert_eq!(video.state, VideoState::default());
    }
}
