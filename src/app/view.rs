// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: page background, particle canvas, the scrollable
//! section column, the navbar (with its language dropdown), and toasts.
//! While the dropdown is open the page layer is wrapped in a mouse area so
//! a click anywhere outside it closes the menu; clicks on interactive
//! widgets are captured first and never double-toggle.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::design_tokens::palette;
use crate::ui::{navbar, page};
use iced::widget::{container, mouse_area, Container, Id, Scrollable, Stack};
use iced::{Alignment, Background, Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let page_body = page::view(page::ViewContext {
        i18n: &app.i18n,
        reveal: &app.reveal,
        counters: &app.counters,
        form: &app.form,
        spinner_rotation: app.spinner_rotation,
    })
    .map(Message::Page);

    let page_scroll = Scrollable::new(page_body)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::PageScrolled);

    let page_layer: Element<'_, Message> = if app.lang_menu_open {
        mouse_area(page_scroll)
            .on_press(Message::OutsideClick)
            .into()
    } else {
        page_scroll.into()
    };

    let navbar_layer = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        active_section: crate::ui::section::active_section(app.scroll_y),
        scrolled: app.navbar_scrolled(),
        lang_menu_open: app.lang_menu_open,
    })
    .map(Message::Navbar);

    let toasts_layer = Container::new(app.notifications.view(&app.i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End);

    let mut layers = Stack::new();
    if app.particles_enabled {
        layers = layers.push(app.particles.view());
    }
    layers = layers.push(page_layer).push(navbar_layer);
    if app.notifications.has_notifications() {
        layers = layers.push(toasts_layer);
    }

    Container::new(layers)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::BG)),
            ..container::Style::default()
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
