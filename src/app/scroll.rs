// SPDX-License-Identifier: MPL-2.0
//! Smooth-scroll animation between page offsets.

/// Animation length for a navigation scroll.
const DURATION_SECS: f32 = 0.5;

/// An in-flight eased scroll from one page offset to another.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    elapsed_secs: f32,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed_secs: 0.0,
        }
    }

    /// Advances the animation; returns the new offset.
    pub fn tick(&mut self, delta_secs: f32) -> f32 {
        self.elapsed_secs = (self.elapsed_secs + delta_secs).min(DURATION_SECS);
        self.offset()
    }

    /// Current offset along the eased curve.
    pub fn offset(&self) -> f32 {
        let t = (self.elapsed_secs / DURATION_SECS).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_secs >= DURATION_SECS
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_starts_at_origin_and_ends_at_target() {
        let mut anim = ScrollAnimation::new(100.0, 900.0);
        assert_eq!(anim.offset(), 100.0);
        assert!(!anim.is_finished());

        anim.tick(DURATION_SECS);
        assert!(anim.is_finished());
        assert!((anim.offset() - 900.0).abs() < 0.01);
    }

    #[test]
    fn scroll_moves_monotonically_toward_target() {
        let mut anim = ScrollAnimation::new(0.0, 500.0);
        let mut last = anim.offset();
        for _ in 0..10 {
            let next = anim.tick(0.05);
            assert!(next >= last, "offset moved backwards: {last} -> {next}");
            last = next;
        }
        assert!(anim.is_finished());
    }

    #[test]
    fn scroll_supports_upward_motion() {
        let mut anim = ScrollAnimation::new(800.0, 0.0);
        let midway = anim.tick(DURATION_SECS / 2.0);
        assert!(midway < 800.0 && midway > 0.0);
        let end = anim.tick(DURATION_SECS);
        assert!(end.abs() < 0.01);
    }
}
