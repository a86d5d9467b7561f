// SPDX-License-Identifier: MPL-2.0
//! Scroll-reveal animation state.
//!
//! Sections start hidden (shifted down and faded) and slide into place the
//! first time they enter the viewport. Revealing is monotonic: once a
//! section has been shown it stays shown.

use crate::ui::section::Section;
use std::collections::HashMap;

/// Transition length, matching the page's 0.6s ease.
const DURATION_SECS: f32 = 0.6;

/// Vertical offset of a fully hidden section.
pub const HIDDEN_SHIFT_PX: f32 = 30.0;

/// Minimum visible fraction before a section reveals.
pub const REVEAL_THRESHOLD: f32 = 0.1;

#[derive(Debug, Default)]
pub struct State {
    /// Elapsed transition time per revealed section.
    progress_secs: HashMap<Section, f32>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the reveal transition for `section` if it has not run yet.
    pub fn reveal(&mut self, section: Section) {
        self.progress_secs.entry(section).or_insert(0.0);
    }

    /// Reveals `section` with no transition (reduced-motion mode).
    pub fn reveal_instantly(&mut self, section: Section) {
        self.progress_secs.insert(section, DURATION_SECS);
    }

    pub fn tick(&mut self, delta_secs: f32) {
        for progress in self.progress_secs.values_mut() {
            if *progress < DURATION_SECS {
                *progress = (*progress + delta_secs).min(DURATION_SECS);
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress_secs
            .values()
            .any(|progress| *progress < DURATION_SECS)
    }

    /// Transition progress for `section`, 0.0 (hidden) to 1.0 (in place).
    pub fn progress(&self, section: Section) -> f32 {
        self.progress_secs
            .get(&section)
            .map_or(0.0, |progress| (progress / DURATION_SECS).min(1.0))
    }

    /// Remaining downward shift for `section` at the current progress.
    pub fn shift_px(&self, section: Section) -> f32 {
        let eased = ease_out(self.progress(section));
        HIDDEN_SHIFT_PX * (1.0 - eased)
    }

    /// Content opacity for `section` at the current progress.
    pub fn alpha(&self, section: Section) -> f32 {
        ease_out(self.progress(section))
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_start_hidden() {
        let state = State::new();
        assert_eq!(state.progress(Section::About), 0.0);
        assert_eq!(state.shift_px(Section::About), HIDDEN_SHIFT_PX);
        assert_eq!(state.alpha(Section::About), 0.0);
    }

    #[test]
    fn reveal_transitions_to_full_visibility() {
        let mut state = State::new();
        state.reveal(Section::Work);
        assert!(state.is_animating());

        state.tick(0.3);
        let midway = state.progress(Section::Work);
        assert!(midway > 0.0 && midway < 1.0);

        state.tick(1.0);
        assert!(!state.is_animating());
        assert_eq!(state.progress(Section::Work), 1.0);
        assert_eq!(state.shift_px(Section::Work), 0.0);
        assert_eq!(state.alpha(Section::Work), 1.0);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut state = State::new();
        state.reveal(Section::Contact);
        state.tick(1.0);
        // A second reveal must not restart the transition.
        state.reveal(Section::Contact);
        assert_eq!(state.progress(Section::Contact), 1.0);
    }

    #[test]
    fn instant_reveal_skips_the_transition() {
        let mut state = State::new();
        state.reveal_instantly(Section::About);
        assert!(!state.is_animating());
        assert_eq!(state.progress(Section::About), 1.0);
    }
}
