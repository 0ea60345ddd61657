// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the integer sampling and bounds helpers used to
//! place background circles inside the viewport.

use rand::Rng;

/// Pick a whole number in `[min, max]` (inclusive) and return it as `f32`.
///
/// An inverted range collapses to `min`, so a viewport that is too small
/// for a circle still yields a position instead of panicking.
pub fn random_between<R: Rng>(rng: &mut R, min: i32, max: i32) -> f32 {
    if max <= min {
        return min as f32;
    }
    rng.gen_range(min..=max) as f32
}

/// Horizontal span `[radius, width - radius]` a circle may occupy.
pub fn horizontal_span(width: f32, radius: u32) -> (i32, i32) {
    let r = radius as i32;
    (r, width.floor() as i32 - r)
}

/// Vertical span `[0, height - radius]` used for the initial placement.
pub fn vertical_span(height: f32, radius: u32) -> (i32, i32) {
    (0, height.floor() as i32 - radius as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_between_stays_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..500 {
            let v = random_between(&mut rng, -1, 1);
            assert!((-1.0..=1.0).contains(&v));
            assert_eq!(v.fract(), 0.0);
            seen_min |= v == -1.0;
            seen_max |= v == 1.0;
        }

        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_random_between_inverted_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_between(&mut rng, 20, 10), 20.0);
    }

    #[test]
    fn test_spans() {
        assert_eq!(horizontal_span(800.0, 10), (10, 790));
        assert_eq!(vertical_span(600.0, 10), (0, 590));
    }
}
