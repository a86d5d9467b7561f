// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for preference-persistence problems.
//!
//! A trimmed-down queue: warnings auto-dismiss after a few seconds and at
//! most a couple are visible at once. Messages are stored as i18n keys and
//! resolved at render time, so an open toast re-translates when the
//! language changes.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Column, Container, Text};
use iced::{Background, Border, Element, Length, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 2;

/// How long a warning stays on screen.
const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// A warning to show the user, keyed into the translation catalog.
#[derive(Debug, Clone)]
pub struct Notification {
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self {
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification, queueing it if the screen is full.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Drops expired notifications and promotes queued ones.
    pub fn tick(&mut self, now: Instant) {
        self.visible
            .retain(|notification| now.duration_since(notification.created_at) < DISMISS_AFTER);
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }

    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Renders the visible toasts, newest on top.
    pub fn view<'a, Message: 'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::SM).width(Length::Shrink);
        for notification in &self.visible {
            column = column.push(toast(i18n.tr(notification.message_key())));
        }
        Container::new(column).padding(spacing::MD).into()
    }
}

fn toast<'a, Message: 'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::SM).color(palette::TEXT_PRIMARY))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::SURFACE)),
            border: Border {
                color: palette::WARNING_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        })
        .padding([spacing::SM, spacing::MD])
        .into()
}
