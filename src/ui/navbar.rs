// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the single-page layout.
//!
//! Shows the section links, highlights the one matching the scroll
//! position, and hosts the language dropdown. Selecting a language both
//! closes the dropdown and emits the selection in a single message, so the
//! app-level outside-click handler can never see the same click and toggle
//! the menu a second time.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::section::Section;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme};
use unic_langid::LanguageIdentifier;

/// Scroll depth past which the navbar background darkens.
pub const SCROLL_THRESHOLD_PX: f32 = 50.0;

const HEIGHT: f32 = 56.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_section: Section,
    /// Whether the page is scrolled past [`SCROLL_THRESHOLD_PX`].
    pub scrolled: bool,
    pub lang_menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    LinkClicked(Section),
    ToggleLanguageMenu,
    CloseLanguageMenu,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ScrollTo(Section),
    LocaleSelected(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, lang_menu_open: &mut bool) -> Event {
    match message {
        Message::LinkClicked(section) => {
            *lang_menu_open = false;
            Event::ScrollTo(section)
        }
        Message::ToggleLanguageMenu => {
            *lang_menu_open = !*lang_menu_open;
            Event::None
        }
        Message::CloseLanguageMenu => {
            *lang_menu_open = false;
            Event::None
        }
        Message::SelectLanguage(locale) => {
            *lang_menu_open = false;
            Event::LocaleSelected(locale)
        }
    }
}

/// Render the navigation bar (and the language dropdown when open).
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut links = Row::new().spacing(spacing::LG).align_y(Alignment::Center);
    for section in Section::ALL {
        let active = section == ctx.active_section;
        links = links.push(
            button(
                Text::new(ctx.i18n.tr(section.nav_key()))
                    .size(typography::SM)
                    .color(if active {
                        palette::ACCENT_400
                    } else {
                        palette::TEXT_PRIMARY
                    }),
            )
            .style(link_style)
            .padding(spacing::XS)
            .on_press(Message::LinkClicked(section)),
        );
    }

    let brand = Text::new(ctx.i18n.tr("hero-name"))
        .size(typography::LG)
        .color(palette::ACCENT_400);

    let lang_label = format!("{} ▾", ctx.i18n.current_language_code().to_uppercase());
    let lang_button = button(Text::new(lang_label).size(typography::SM))
        .style(lang_button_style)
        .padding([spacing::XS, spacing::SM])
        .on_press(Message::ToggleLanguageMenu);

    let bar = Row::new()
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(Space::new().width(spacing::XL))
        .push(lang_button)
        .align_y(Alignment::Center)
        .padding([0.0, spacing::XL])
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT));

    let background_alpha = if ctx.scrolled {
        opacity::NAVBAR_SCROLLED
    } else {
        opacity::NAVBAR_TOP
    };
    let bar = Container::new(bar)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: background_alpha,
                ..palette::BG
            })),
            ..container::Style::default()
        })
        .width(Length::Fill);

    let mut content = Column::new().width(Length::Fill).push(bar);
    if ctx.lang_menu_open {
        content = content.push(language_menu(ctx.i18n));
    }

    content.into()
}

/// Builds the open language dropdown, one option per available locale.
fn language_menu(i18n: &I18n) -> Element<'_, Message> {
    let mut options = Column::new().width(Length::Shrink);
    for locale in &i18n.available_locales {
        let code = locale.language.as_str();
        let label = format!("{}  {}", code.to_uppercase(), native_name(code));
        options = options.push(
            button(Text::new(label).size(typography::SM))
                .style(lang_option_style)
                .padding([spacing::XS, spacing::MD])
                .width(Length::Fill)
                .on_press(Message::SelectLanguage(locale.clone())),
        );
    }

    let menu = Container::new(options)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::SURFACE)),
            border: Border {
                color: palette::ACCENT_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        })
        .padding(spacing::XS)
        .width(Length::Fixed(160.0));

    // Right-align the dropdown under the language button.
    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(menu)
        .push(Space::new().width(spacing::XL))
        .width(Length::Fill)
        .into()
}

/// Display name of a locale in that locale's own language.
fn native_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "lo" => "ລາວ",
        _ => "",
    }
}

fn link_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::TEXT_PRIMARY,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

fn lang_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => palette::ACCENT_400,
        _ => palette::TEXT_MUTED,
    };
    button::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: palette::TEXT_PRIMARY,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

fn lang_option_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::ACCENT_600)),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::TEXT_PRIMARY,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
