// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the play-by-play log, rallies, and scoring.

pub mod background;
pub mod game;
pub mod notes;
pub mod rally;
pub mod report;
pub mod stats;
pub mod video;
