// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés pour la page.
//!
//! - **Palette**: base colors of the dark page theme
//! - **Spacing**: spacing scale (8px grid)
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

pub mod palette {
    use super::Color;

    /// Page background, `rgb(10, 10, 15)`.
    pub const BG: Color = Color::from_rgb(0.04, 0.04, 0.06);
    /// Card and form-field surfaces.
    pub const SURFACE: Color = Color::from_rgb(0.08, 0.08, 0.12);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.62, 0.62, 0.68);

    /// Accent gradient endpoints (violet).
    pub const ACCENT_400: Color = Color::from_rgb(0.65, 0.49, 0.98);
    pub const ACCENT_500: Color = Color::from_rgb(0.55, 0.36, 0.96);
    pub const ACCENT_600: Color = Color::from_rgb(0.49, 0.23, 0.93);

    /// Success gradient endpoints (`#22c55e` → `#16a34a`).
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const SUCCESS_600: Color = Color::from_rgb(0.09, 0.64, 0.29);

    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);

    pub const WHITE: Color = Color::WHITE;
}

pub mod opacity {
    /// Navbar background before the page is scrolled.
    pub const NAVBAR_TOP: f32 = 0.80;
    /// Navbar background once scrolled past the threshold.
    pub const NAVBAR_SCROLLED: f32 = 0.95;
    /// Particle dot alpha.
    pub const PARTICLE: f32 = 0.35;
}

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod typography {
    pub const SM: f32 = 14.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 28.0;
    pub const DISPLAY: f32 = 44.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}
