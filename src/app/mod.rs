// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, persisted preferences, and
//! the page's independent visual effects, and translates messages into side
//! effects like config persistence or smooth scrolling. Policy decisions
//! (scroll thresholds, persistence format, localization switching) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod scroll;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use scroll::ScrollAnimation;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::counters;
use crate::ui::notifications;
use crate::ui::particles;
use crate::ui::reveal;
use crate::ui::section::{self, Section};
use crate::ui::{contact_form, navbar};
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Widget id of the page scrollable, used for programmatic scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Visible fraction at which the stat counters start counting.
const COUNTER_TRIGGER_FRACTION: f32 = 0.5;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    particles_enabled: bool,
    reduce_motion: bool,

    scroll_y: f32,
    viewport_height: f32,
    scroll_anim: Option<ScrollAnimation>,
    lang_menu_open: bool,

    particles: particles::State,
    counters: counters::State,
    reveal: reveal::State,
    form: contact_form::State,
    notifications: notifications::Manager,

    last_tick: Option<Instant>,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_language_code())
            .field("scroll_y", &self.scroll_y)
            .field("lang_menu_open", &self.lang_menu_open)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            particles_enabled: true,
            reduce_motion: false,
            scroll_y: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            scroll_anim: None,
            lang_menu_open: false,
            particles: particles::State::new(),
            counters: counters::State::new(),
            reveal: reveal::State::new(),
            form: contact_form::State::new(),
            notifications: notifications::Manager::new(),
            last_tick: None,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the persisted
    /// configuration. Locale resolution never writes the preference back;
    /// only an explicit selection does.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            particles_enabled: config.effects.particles.unwrap_or(true),
            reduce_motion: config.effects.reduce_motion.unwrap_or(false),
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }

        // The window starts at the top of the page; whatever is inside the
        // initial viewport reveals right away.
        app.evaluate_visibility();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Applies the scroll-position visibility rules: reveal sections past
    /// the reveal threshold, and start the counters once the about section
    /// is half visible.
    fn evaluate_visibility(&mut self) {
        for sect in Section::ALL {
            let fraction = sect.visible_fraction(self.scroll_y, self.viewport_height);
            if fraction >= reveal::REVEAL_THRESHOLD {
                if self.reduce_motion {
                    self.reveal.reveal_instantly(sect);
                } else {
                    self.reveal.reveal(sect);
                }
            }
            if sect == Section::About && fraction >= COUNTER_TRIGGER_FRACTION {
                if self.reduce_motion {
                    self.counters.complete();
                } else {
                    self.counters.trigger();
                }
            }
        }
    }

    /// Whether the navbar should use its scrolled (more opaque) background.
    fn navbar_scrolled(&self) -> bool {
        self.scroll_y > navbar::SCROLL_THRESHOLD_PX
    }

    /// Largest reachable scroll offset.
    fn max_scroll(&self) -> f32 {
        (section::page_height() - self.viewport_height).max(0.0)
    }
}
