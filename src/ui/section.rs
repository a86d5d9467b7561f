// SPDX-License-Identifier: MPL-2.0
//! Page sections and their vertical layout.
//!
//! The page is a fixed column of sections, so every scroll computation
//! (active link, reveal thresholds, smooth-scroll targets) works from the
//! offsets defined here instead of measuring the widget tree.

/// One section of the single-page layout, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Work,
    Contact,
}

/// How far above the viewport top a section may sit while still counting as
/// the active one.
pub const ACTIVE_LEAD_PX: f32 = 200.0;

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Contact,
    ];

    /// i18n key of the navigation label.
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Work => "nav-work",
            Section::Contact => "nav-contact",
        }
    }

    /// Fixed rendered height of the section in logical pixels.
    pub fn height(self) -> f32 {
        match self {
            Section::Home => 620.0,
            Section::About => 720.0,
            Section::Work => 760.0,
            Section::Contact => 700.0,
        }
    }

    /// Vertical offset of the section's top edge within the page.
    pub fn top_offset(self) -> f32 {
        Section::ALL
            .iter()
            .take_while(|section| **section != self)
            .map(|section| section.height())
            .sum()
    }

    /// Fraction of the section currently inside the viewport, 0.0 to 1.0
    /// relative to the section's own height. The scroll-position analogue of
    /// an intersection observer ratio.
    pub fn visible_fraction(self, scroll_y: f32, viewport_height: f32) -> f32 {
        let top = self.top_offset();
        let bottom = top + self.height();
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height;

        let visible = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
        visible / self.height()
    }
}

/// Total height of the page content.
pub fn page_height() -> f32 {
    Section::ALL.iter().map(|section| section.height()).sum()
}

/// The section whose top has most recently passed the viewport top (with the
/// standard lead), i.e. the one the navigation should highlight.
pub fn active_section(scroll_y: f32) -> Section {
    let mut current = Section::Home;
    for section in Section::ALL {
        if scroll_y >= section.top_offset() - ACTIVE_LEAD_PX {
            current = section;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_cumulative() {
        assert_eq!(Section::Home.top_offset(), 0.0);
        assert_eq!(Section::About.top_offset(), Section::Home.height());
        assert_eq!(
            Section::Contact.top_offset() + Section::Contact.height(),
            page_height()
        );
    }

    #[test]
    fn active_section_tracks_scroll_position() {
        assert_eq!(active_section(0.0), Section::Home);
        // Just before the about threshold.
        let about_top = Section::About.top_offset();
        assert_eq!(active_section(about_top - ACTIVE_LEAD_PX - 1.0), Section::Home);
        assert_eq!(active_section(about_top - ACTIVE_LEAD_PX), Section::About);
        assert_eq!(active_section(page_height()), Section::Contact);
    }

    #[test]
    fn visible_fraction_is_clamped() {
        // Scrolled far past: nothing of Home is visible.
        assert_eq!(Section::Home.visible_fraction(5000.0, 650.0), 0.0);
        // At the top with a viewport taller than the section: fully visible.
        assert_eq!(Section::Home.visible_fraction(0.0, 650.0), 1.0);
    }
}
