// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the play-by-play application.

pub mod background;
pub mod notes;
pub mod scoreboard;
pub mod toolbar;
pub mod video;
