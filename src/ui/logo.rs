// SPDX-License-Identifier: MPL-2.0
//! Canvas-drawn logo mark revealed in the final splash stage.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas;
use iced::{mouse, Color, Element, Point, Rectangle, Theme};

/// Abstract brand mark: a solid disc with an orbiting ring.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoMark;

impl<Message> canvas::Program<Message> for LogoMark {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0;

        let halo = canvas::Path::circle(center, radius);
        frame.fill(
            &halo,
            Color {
                a: opacity::SUBTLE,
                ..palette::WHITE
            },
        );

        let disc = canvas::Path::circle(center, radius * 0.55);
        frame.fill(&disc, palette::WHITE);

        let ring = canvas::Path::circle(center, radius * 0.8);
        frame.stroke(
            &ring,
            canvas::Stroke::default()
                .with_width(2.0)
                .with_color(Color {
                    a: opacity::STRONG,
                    ..palette::WHITE
                }),
        );

        let core = canvas::Path::circle(center, radius * 0.22);
        frame.fill(&core, palette::BRAND_PURPLE);

        vec![frame.into_geometry()]
    }
}

/// The logo mark at its token size.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    canvas::Canvas::new(LogoMark)
        .width(sizing::LOGO)
        .height(sizing::LOGO)
        .into()
}
