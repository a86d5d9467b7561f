// SPDX-License-Identifier: MPL-2.0
//! Mock contact form.
//!
//! Submitting never sends anything anywhere. The button walks a fixed
//! timeline instead: "Sending…" with a spinner for 1.5s, then a green
//! "Message Sent!" for 3s, then the form clears and returns to idle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::spinner::Spinner;
use iced::widget::{button, text_editor, text_input, Column, Row, Text};
use iced::{Alignment, Background, Border, Element, Length, Shadow, Task, Theme};
use std::time::Duration;

/// How long the fake network call takes.
const SEND_DELAY: Duration = Duration::from_millis(1500);
/// How long the success state is shown before the form resets.
const RESET_DELAY: Duration = Duration::from_secs(3);

const FIELD_WIDTH: f32 = 420.0;

/// Where the submit button is in its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    SendElapsed,
    ResetElapsed,
}

#[derive(Default)]
pub struct State {
    name: String,
    email: String,
    message: text_editor::Content,
    phase: Phase,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the spinner is visible and needs animation ticks.
    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                if self.phase == Phase::Idle {
                    self.name = value;
                }
                Task::none()
            }
            Message::EmailChanged(value) => {
                if self.phase == Phase::Idle {
                    self.email = value;
                }
                Task::none()
            }
            Message::MessageEdited(action) => {
                if self.phase == Phase::Idle {
                    self.message.perform(action);
                }
                Task::none()
            }
            Message::Submit => {
                if self.phase != Phase::Idle {
                    return Task::none();
                }
                self.phase = Phase::Sending;
                Task::perform(tokio::time::sleep(SEND_DELAY), |()| Message::SendElapsed)
            }
            Message::SendElapsed => {
                if self.phase != Phase::Sending {
                    return Task::none();
                }
                self.phase = Phase::Sent;
                Task::perform(tokio::time::sleep(RESET_DELAY), |()| Message::ResetElapsed)
            }
            Message::ResetElapsed => {
                if self.phase == Phase::Sent {
                    self.name.clear();
                    self.email.clear();
                    self.message = text_editor::Content::new();
                    self.phase = Phase::Idle;
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, spinner_rotation: f32) -> Element<'a, Message> {
        let name_input = text_input(&i18n.tr("form-name-label"), &self.name)
            .on_input(Message::NameChanged)
            .padding(spacing::SM)
            .style(input_style)
            .width(Length::Fixed(FIELD_WIDTH));

        let email_input = text_input(&i18n.tr("form-email-label"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::SM)
            .style(input_style)
            .width(Length::Fixed(FIELD_WIDTH));

        let message_input = text_editor(&self.message)
            .placeholder(i18n.tr("form-message-label"))
            .on_action(Message::MessageEdited)
            .padding(spacing::SM)
            .style(editor_style)
            .height(Length::Fixed(120.0))
            .width(FIELD_WIDTH);

        Column::new()
            .push(name_input)
            .push(email_input)
            .push(message_input)
            .push(self.submit_button(i18n, spinner_rotation))
            .spacing(spacing::MD)
            .align_x(Alignment::Start)
            .into()
    }

    fn submit_button<'a>(&self, i18n: &'a I18n, spinner_rotation: f32) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.phase {
            Phase::Idle => Text::new(i18n.tr("form-submit"))
                .size(typography::MD)
                .into(),
            Phase::Sending => Row::new()
                .push(Text::new(i18n.tr("form-sending")).size(typography::MD))
                .push(Spinner::new(palette::WHITE, spinner_rotation).into_element())
                .spacing(spacing::SM)
                .align_y(Alignment::Center)
                .into(),
            Phase::Sent => Row::new()
                .push(Text::new(i18n.tr("form-sent")).size(typography::MD))
                .push(Text::new("✓").size(typography::MD))
                .spacing(spacing::SM)
                .align_y(Alignment::Center)
                .into(),
        };

        let widget = button(content).padding([spacing::SM, spacing::LG]);
        match self.phase {
            // Only an idle button is pressable; while sending or showing
            // success it stays disabled.
            Phase::Idle => widget.on_press(Message::Submit).style(primary_style).into(),
            Phase::Sending => widget.style(primary_style).into(),
            Phase::Sent => widget.style(success_style).into(),
        }
    }
}

fn primary_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        _ => palette::ACCENT_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ACCENT_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

fn success_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::SUCCESS_500)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::SUCCESS_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

fn input_style(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(palette::SURFACE),
        border: Border {
            color: palette::TEXT_MUTED,
            width: 1.0,
            radius: radius::SM.into(),
        },
        icon: palette::TEXT_MUTED,
        placeholder: palette::TEXT_MUTED,
        value: palette::TEXT_PRIMARY,
        selection: palette::ACCENT_500,
    }
}

fn editor_style(_theme: &Theme, _status: text_editor::Status) -> text_editor::Style {
    text_editor::Style {
        background: Background::Color(palette::SURFACE),
        border: Border {
            color: palette::TEXT_MUTED,
            width: 1.0,
            radius: radius::SM.into(),
        },
        placeholder: palette::TEXT_MUTED,
        value: palette::TEXT_PRIMARY,
        selection: palette::ACCENT_500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submit_moves_to_sending() {
        let mut state = State::new();
        let _task = state.update(Message::Submit);
        assert_eq!(state.phase(), Phase::Sending);
        assert!(state.is_sending());
    }

    #[tokio::test]
    async fn submit_is_ignored_while_busy() {
        let mut state = State::new();
        let _ = state.update(Message::Submit);
        let _ = state.update(Message::Submit);
        assert_eq!(state.phase(), Phase::Sending);

        let _ = state.update(Message::SendElapsed);
        assert_eq!(state.phase(), Phase::Sent);
        let _ = state.update(Message::Submit);
        assert_eq!(state.phase(), Phase::Sent);
    }

    #[tokio::test]
    async fn full_timeline_resets_the_form() {
        let mut state = State::new();
        let _ = state.update(Message::NameChanged("Noy".to_string()));
        let _ = state.update(Message::EmailChanged("noy@example.la".to_string()));
        let _ = state.update(Message::Submit);
        let _ = state.update(Message::SendElapsed);
        let _ = state.update(Message::ResetElapsed);

        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.message.text().trim().is_empty());
    }

    #[tokio::test]
    async fn edits_are_frozen_while_sending() {
        let mut state = State::new();
        let _ = state.update(Message::NameChanged("Noy".to_string()));
        let _ = state.update(Message::Submit);
        let _ = state.update(Message::NameChanged("Someone else".to_string()));
        assert_eq!(state.name, "Noy");
    }

    #[test]
    fn stale_timer_messages_are_ignored() {
        let mut state = State::new();
        // A ResetElapsed with no preceding Sent phase must not clear input.
        let _ = state.update(Message::NameChanged("Noy".to_string()));
        let _ = state.update(Message::ResetElapsed);
        assert_eq!(state.name, "Noy");
        assert_eq!(state.phase(), Phase::Idle);
        // A SendElapsed while idle is likewise a no-op.
        let _ = state.update(Message::SendElapsed);
        assert_eq!(state.phase(), Phase::Idle);
    }
}
