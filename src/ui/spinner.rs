// SPDX-License-Identifier: MPL-2.0
//! Small animated spinner drawn with Canvas, shown while the contact form
//! pretends to send.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const SIZE: f32 = 20.0;
const STROKE_WIDTH: f32 = 2.0;

pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(SIZE))
            .height(Length::Fixed(SIZE))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Half-circle arc offset by the current rotation, built from
                // short segments.
                let start_angle = self.rotation - PI / 2.0;
                let mut builder = canvas::path::Builder::new();
                builder.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                let segments = 24;
                for i in 1..=segments {
                    let angle = start_angle + PI * (i as f32 / segments as f32);
                    builder.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                let arc: Path = builder.build();
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
