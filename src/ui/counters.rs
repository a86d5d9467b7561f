// SPDX-License-Identifier: MPL-2.0
//! Animated stat counters for the about section.
//!
//! Each counter runs 0 → target over two seconds, starting the first time
//! the stats row becomes visible, and never restarts.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Row, Text};
use iced::{Alignment, Element, Length};

/// Animation length, matching the page's 2s counter ramp.
const DURATION_SECS: f32 = 2.0;

/// A single stat: the number counted up to, and its label key.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub target: u32,
    pub label_key: &'static str,
}

/// The stats shown on the page.
pub const STATS: [Stat; 3] = [
    Stat {
        target: 48,
        label_key: "stat-projects-label",
    },
    Stat {
        target: 7,
        label_key: "stat-years-label",
    },
    Stat {
        target: 31,
        label_key: "stat-clients-label",
    },
];

/// Counter animation state.
#[derive(Debug, Default)]
pub struct State {
    /// Elapsed animation time; `None` until first triggered.
    progress_secs: Option<f32>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the count-up. Later calls are ignored; the animation fires
    /// exactly once per session.
    pub fn trigger(&mut self) {
        if self.progress_secs.is_none() {
            self.progress_secs = Some(0.0);
        }
    }

    /// Immediately completes the animation (reduced-motion mode).
    pub fn complete(&mut self) {
        self.progress_secs = Some(DURATION_SECS);
    }

    pub fn tick(&mut self, delta_secs: f32) {
        if let Some(progress) = self.progress_secs.as_mut() {
            if *progress < DURATION_SECS {
                *progress = (*progress + delta_secs).min(DURATION_SECS);
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.progress_secs
            .is_some_and(|progress| progress < DURATION_SECS)
    }

    /// The value currently shown for `stat`: zero before the trigger, a
    /// linear ramp while animating, the exact target afterwards.
    pub fn displayed_value(&self, stat: Stat) -> u32 {
        match self.progress_secs {
            None => 0,
            Some(progress) if progress >= DURATION_SECS => stat.target,
            Some(progress) => {
                let ramp = stat.target as f32 * (progress / DURATION_SECS);
                ramp as u32
            }
        }
    }

    /// Renders the stats row.
    pub fn view<'a, Message: 'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::XXL).align_y(Alignment::Center);

        for stat in STATS {
            let number = Text::new(self.displayed_value(stat).to_string())
                .size(typography::DISPLAY)
                .color(palette::ACCENT_400);
            let label = Text::new(i18n.tr(stat.label_key))
                .size(typography::SM)
                .color(palette::TEXT_MUTED);

            row = row.push(
                Column::new()
                    .push(number)
                    .push(label)
                    .spacing(spacing::XS)
                    .align_x(Alignment::Center)
                    .width(Length::Shrink),
            );
        }

        row.into()
    }
}
