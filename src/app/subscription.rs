// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! A single ~60fps tick drives every animation. The subscription is only
//! active while something actually moves, so an idle page schedules no work.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the animation tick subscription when anything is animating.
pub fn create_tick_subscription(app: &App) -> Subscription<Message> {
    if needs_ticks(app) {
        time::every(Duration::from_millis(16)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn needs_ticks(app: &App) -> bool {
    app.particles_enabled
        || app.scroll_anim.is_some()
        || app.counters.is_animating()
        || app.reveal.is_animating()
        || app.form.is_sending()
        || app.notifications.has_notifications()
}
