// SPDX-License-Identifier: MPL-2.0
//! Decorative particle background drawn with Canvas.
//!
//! Fifty dots drift upward forever. Each particle's horizontal position,
//! size, speed, and phase are derived deterministically from its index, so
//! the field is stable across frames and reproducible in tests.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Theme};

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 50;

/// Animated particle field state.
pub struct State {
    cache: Cache,
    elapsed_secs: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self {
            cache: Cache::default(),
            elapsed_secs: 0.0,
        }
    }

    /// Advances the animation clock and invalidates the drawing cache.
    pub fn tick(&mut self, delta_secs: f32) {
        self.elapsed_secs += delta_secs;
        self.cache.clear();
    }

    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        Canvas::new(Field { state: self })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Per-particle parameters, fixed for the lifetime of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the canvas width.
    pub x_frac: f32,
    /// Dot diameter in logical pixels (2.0 to 6.0).
    pub size: f32,
    /// Seconds for one full bottom-to-top pass (10.0 to 30.0).
    pub duration_secs: f32,
    /// Phase offset in seconds (0.0 to 20.0).
    pub phase_secs: f32,
}

impl Particle {
    /// Derives a particle from its index via a splitmix64-style mix, giving
    /// a scattered but deterministic field.
    pub fn from_index(index: usize) -> Self {
        let mut bits = hash(index as u64, 0);
        let x_frac = unit(&mut bits);
        let size = 2.0 + unit(&mut bits) * 4.0;
        let duration_secs = 10.0 + unit(&mut bits) * 20.0;
        let phase_secs = unit(&mut bits) * 20.0;

        Self {
            x_frac,
            size,
            duration_secs,
            phase_secs,
        }
    }

    /// Vertical position as a fraction of the canvas height at `elapsed`
    /// seconds: 1.0 is the bottom edge, wrapping to restart the climb.
    pub fn y_frac(&self, elapsed_secs: f32) -> f32 {
        let t = (elapsed_secs + self.phase_secs) / self.duration_secs;
        1.0 - t.fract()
    }
}

fn hash(index: u64, round: u64) -> u64 {
    let mut z = index
        .wrapping_add(round)
        .wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Pops a uniform value in [0, 1) from the bit stream.
fn unit(bits: &mut u64) -> f32 {
    let value = (*bits >> 40) as f32 / (1u64 << 24) as f32;
    *bits = hash(*bits, 1);
    value
}

struct Field<'a> {
    state: &'a State,
}

impl<Message> canvas::Program<Message> for Field<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry =
            self.state
                .cache
                .draw(renderer, bounds.size(), |frame: &mut Frame| {
                    for index in 0..PARTICLE_COUNT {
                        let particle = Particle::from_index(index);
                        let x = particle.x_frac * frame.width();
                        let y = particle.y_frac(self.state.elapsed_secs) * frame.height();

                        let dot = Path::circle(
                            iced::Point::new(x, y),
                            particle.size / 2.0,
                        );
                        frame.fill(
                            &dot,
                            Color {
                                a: opacity::PARTICLE,
                                ..palette::ACCENT_400
                            },
                        );
                    }
                });

        vec![geometry]
    }
}
