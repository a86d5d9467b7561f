// SPDX-License-Identifier: MPL-2.0
//! The scrollable page body: hero, about, work, and contact sections.
//!
//! Sections use the fixed heights from [`crate::ui::section`] so scroll
//! math stays in one place. Reveal progress shifts and fades section
//! content; the hero is always visible.

use crate::i18n::fluent::I18n;
use crate::ui::contact_form;
use crate::ui::counters;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::reveal;
use crate::ui::section::Section;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Theme};

/// Skill tags shown in the about section; product names stay untranslated.
const SKILLS: [&str; 6] = [
    "Rust",
    "TypeScript",
    "Design Systems",
    "WebGL",
    "Figma",
    "SQL",
];

/// Contextual data needed to render the page body.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub reveal: &'a reveal::State,
    pub counters: &'a counters::State,
    pub form: &'a contact_form::State,
    pub spinner_rotation: f32,
}

/// Messages emitted by the page body.
#[derive(Debug, Clone)]
pub enum Message {
    /// The hero call-to-action was clicked; scroll to the contact section.
    CtaClicked,
    Form(contact_form::Message),
}

/// Renders the full section column.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .push(hero(ctx.i18n))
        .push(about(ctx.i18n, ctx.reveal, ctx.counters))
        .push(work(ctx.i18n, ctx.reveal))
        .push(contact(&ctx))
        .width(Length::Fill)
        .into()
}

fn hero(i18n: &I18n) -> Element<'_, Message> {
    let cta = button(Text::new(i18n.tr("hero-cta")).size(typography::MD))
        .style(cta_style)
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::CtaClicked);

    let content = Column::new()
        .push(Space::new().height(Length::Fixed(140.0)))
        .push(
            Text::new(i18n.tr("hero-greeting"))
                .size(typography::LG)
                .color(palette::TEXT_MUTED),
        )
        .push(
            Text::new(i18n.tr("hero-name"))
                .size(typography::DISPLAY)
                .color(palette::TEXT_PRIMARY),
        )
        .push(
            Text::new(i18n.tr("hero-title"))
                .size(typography::XL)
                .color(palette::ACCENT_400),
        )
        .push(Space::new().height(spacing::MD))
        .push(
            Text::new(i18n.tr("hero-subtitle"))
                .size(typography::MD)
                .color(palette::TEXT_MUTED),
        )
        .push(Space::new().height(spacing::XL))
        .push(cta)
        .spacing(spacing::SM)
        .align_x(Alignment::Center);

    section_frame(Section::Home, content.into())
}

fn about<'a>(
    i18n: &'a I18n,
    reveal: &'a reveal::State,
    counters: &'a counters::State,
) -> Element<'a, Message> {
    let alpha = reveal.alpha(Section::About);

    let mut skills = Row::new().spacing(spacing::SM);
    for skill in SKILLS {
        skills = skills.push(skill_tag(skill, alpha));
    }

    let content = Column::new()
        .push(section_title(i18n.tr("about-title"), alpha))
        .push(
            Text::new(i18n.tr("about-body-1"))
                .size(typography::MD)
                .color(faded(palette::TEXT_PRIMARY, alpha)),
        )
        .push(
            Text::new(i18n.tr("about-body-2"))
                .size(typography::MD)
                .color(faded(palette::TEXT_MUTED, alpha)),
        )
        .push(Space::new().height(spacing::LG))
        .push(counters.view(i18n))
        .push(Space::new().height(spacing::LG))
        .push(
            Text::new(i18n.tr("about-skills-title"))
                .size(typography::LG)
                .color(faded(palette::TEXT_PRIMARY, alpha)),
        )
        .push(skills)
        .spacing(spacing::MD)
        .align_x(Alignment::Center);

    revealed_section(Section::About, reveal, content.into())
}

fn work<'a>(i18n: &'a I18n, reveal: &'a reveal::State) -> Element<'a, Message> {
    let alpha = reveal.alpha(Section::Work);

    let projects = [
        ("project-river-title", "project-river-desc"),
        ("project-market-title", "project-market-desc"),
        ("project-archive-title", "project-archive-desc"),
    ];

    let mut cards = Row::new().spacing(spacing::LG);
    for (title_key, desc_key) in projects {
        cards = cards.push(project_card(
            i18n.tr(title_key),
            i18n.tr(desc_key),
            alpha,
        ));
    }

    let content = Column::new()
        .push(section_title(i18n.tr("work-title"), alpha))
        .push(Space::new().height(spacing::XL))
        .push(cards)
        .spacing(spacing::MD)
        .align_x(Alignment::Center);

    revealed_section(Section::Work, reveal, content.into())
}

fn contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let alpha = ctx.reveal.alpha(Section::Contact);

    let form = ctx
        .form
        .view(ctx.i18n, ctx.spinner_rotation)
        .map(Message::Form);

    let content = Column::new()
        .push(section_title(ctx.i18n.tr("contact-title"), alpha))
        .push(
            Text::new(ctx.i18n.tr("contact-subtitle"))
                .size(typography::MD)
                .color(faded(palette::TEXT_MUTED, alpha)),
        )
        .push(Space::new().height(spacing::LG))
        .push(form)
        .push(Space::new().height(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("footer-copyright"))
                .size(typography::SM)
                .color(palette::TEXT_MUTED),
        )
        .push(Space::new().height(spacing::MD))
        .spacing(spacing::MD)
        .align_x(Alignment::Center);

    revealed_section(Section::Contact, ctx.reveal, content.into())
}

/// Wraps section content in the fixed-height frame used for scroll math.
fn section_frame(section: Section, content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .align_x(Alignment::Center)
        .into()
}

/// Like [`section_frame`], but shifted down by the section's remaining
/// reveal offset so content slides into place.
fn revealed_section<'a>(
    section: Section,
    reveal: &reveal::State,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let shifted = Column::new()
        .push(Space::new().height(Length::Fixed(reveal.shift_px(section))))
        .push(content)
        .width(Length::Fill)
        .align_x(Alignment::Center);
    section_frame(section, shifted.into())
}

fn section_title<'a>(title: String, alpha: f32) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::XL)
        .color(faded(palette::TEXT_PRIMARY, alpha))
        .into()
}

fn project_card<'a>(title: String, description: String, alpha: f32) -> Element<'a, Message> {
    let content = Column::new()
        .push(
            Text::new(title)
                .size(typography::LG)
                .color(faded(palette::TEXT_PRIMARY, alpha)),
        )
        .push(
            Text::new(description)
                .size(typography::SM)
                .color(faded(palette::TEXT_MUTED, alpha)),
        )
        .spacing(spacing::SM);

    Container::new(content)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(faded(palette::SURFACE, alpha))),
            border: Border {
                color: faded(palette::ACCENT_600, alpha * 0.6),
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..container::Style::default()
        })
        .padding(spacing::LG)
        .width(Length::Fixed(240.0))
        .height(Length::Fixed(170.0))
        .into()
}

fn skill_tag<'a>(label: &'a str, alpha: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::SM)
            .color(faded(palette::TEXT_PRIMARY, alpha)),
    )
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(palette::SURFACE, alpha))),
        border: Border {
            color: faded(palette::ACCENT_500, alpha * 0.5),
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    })
    .padding([spacing::XS, spacing::SM])
    .into()
}

fn cta_style(_theme: &Theme, status: button::Status) -> button::Style {
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
            radius: radius::MD.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
