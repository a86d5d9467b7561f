// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, ScrollAnimation, PAGE_SCROLLABLE_ID};
use crate::config;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::page;
use crate::ui::section::Section;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::f32::consts::TAU;
use std::time::Instant;

/// Longest frame delta fed to animations; hides hitches after a stall.
const MAX_FRAME_DELTA_SECS: f32 = 0.1;

/// Spinner speed, one revolution per second.
const SPINNER_TURNS_PER_SEC: f32 = 1.0;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => tick(app, now),
        Message::PageScrolled(viewport) => {
            app.scroll_y = viewport.absolute_offset().y;
            app.viewport_height = viewport.bounds().height;
            app.evaluate_visibility();
            Task::none()
        }
        Message::Navbar(navbar_message) => {
            match navbar::update(navbar_message, &mut app.lang_menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::ScrollTo(section) => scroll_to_section(app, section),
                navbar::Event::LocaleSelected(locale) => {
                    change_locale(app, locale);
                    Task::none()
                }
            }
        }
        Message::Page(page::Message::CtaClicked) => scroll_to_section(app, Section::Contact),
        Message::Page(page::Message::Form(form_message)) => app
            .form
            .update(form_message)
            .map(|message| Message::Page(page::Message::Form(message))),
        Message::OutsideClick => {
            app.lang_menu_open = false;
            Task::none()
        }
    }
}

/// Advances every active animation by one frame.
fn tick(app: &mut App, now: Instant) -> Task<Message> {
    let delta_secs = app
        .last_tick
        .map_or(0.0, |last| now.duration_since(last).as_secs_f32())
        .min(MAX_FRAME_DELTA_SECS);
    app.last_tick = Some(now);

    if app.particles_enabled {
        app.particles.tick(delta_secs);
    }
    app.counters.tick(delta_secs);
    app.reveal.tick(delta_secs);
    app.notifications.tick(now);
    if app.form.is_sending() {
        app.spinner_rotation = (app.spinner_rotation + delta_secs * SPINNER_TURNS_PER_SEC * TAU) % TAU;
    }

    if let Some(anim) = app.scroll_anim.as_mut() {
        let offset = anim.tick(delta_secs);
        if anim.is_finished() {
            app.scroll_anim = None;
        }
        return snap_page_to(app.max_scroll(), offset);
    }

    Task::none()
}

/// Starts an eased scroll to a section's top. With reduced motion the page
/// jumps straight there.
fn scroll_to_section(app: &mut App, section: Section) -> Task<Message> {
    let target = section.top_offset().min(app.max_scroll());

    if app.reduce_motion {
        app.scroll_anim = None;
        return snap_page_to(app.max_scroll(), target);
    }

    app.scroll_anim = Some(ScrollAnimation::new(app.scroll_y, target));
    Task::none()
}

/// Moves the page scrollable to an absolute offset, expressed as the
/// relative position the scrollable operation expects.
fn snap_page_to(max_scroll: f32, offset: f32) -> Task<Message> {
    let y = if max_scroll > 0.0 {
        (offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

/// Switches the active locale and persists the choice. An unrecognized
/// locale leaves both the UI and the stored preference untouched; a failed
/// write degrades to a warning toast for the current session.
fn change_locale(app: &mut App, locale: unic_langid::LanguageIdentifier) {
    if !app.i18n.set_locale(locale) {
        return;
    }

    app.config.general.language = Some(app.i18n.current_language_code().to_string());
    if config::save(&app.config).is_err() {
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
