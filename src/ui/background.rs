// SPDX-License-Identifier: MPL-2.0
//! Gradient backdrop with soft geometric shapes, drawn behind the whole
//! splash screen.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::{canvas, Stack};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Theme};

/// Number of horizontal strips used to approximate the vertical gradient.
const GRADIENT_STRIPS: usize = 64;

/// Relative positions and radii of the decorative circles, as fractions
/// of the canvas size.
const SHAPES: [(f32, f32, f32); 4] = [
    (0.15, 0.2, 0.22),
    (0.85, 0.15, 0.3),
    (0.8, 0.75, 0.26),
    (0.25, 0.85, 0.18),
];

/// Linear interpolation between two colors in straight RGB.
fn lerp(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: 1.0,
    }
}

/// Brand gradient plus decorative circles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backdrop;

impl<Message> canvas::Program<Message> for Backdrop {
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

        let strip_height = bounds.height / GRADIENT_STRIPS as f32;
        for strip in 0..GRADIENT_STRIPS {
            let t = strip as f32 / (GRADIENT_STRIPS - 1) as f32;
            let color = lerp(palette::BRAND_PURPLE, palette::BRAND_INDIGO, t);
            // Strips overlap by half a pixel to avoid seams.
            let path = canvas::Path::rectangle(
                Point::new(0.0, strip as f32 * strip_height),
                iced::Size::new(bounds.width, strip_height + 0.5),
            );
            frame.fill(&path, color);
        }

        for (x, y, r) in SHAPES {
            let circle = canvas::Path::circle(
                Point::new(x * bounds.width, y * bounds.height),
                r * bounds.width.min(bounds.height),
            );
            frame.fill(
                &circle,
                Color {
                    a: opacity::FAINT,
                    ..palette::WHITE
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Wraps content with the splash backdrop behind it.
pub fn wrap<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(Backdrop)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(content)
        .into()
}

const _: () = {
    assert!(GRADIENT_STRIPS > 1);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_match_brand_stops() {
        assert_eq!(
            lerp(palette::BRAND_PURPLE, palette::BRAND_INDIGO, 0.0),
            Color {
                a: 1.0,
                ..palette::BRAND_PURPLE
            }
        );
        assert_eq!(
            lerp(palette::BRAND_PURPLE, palette::BRAND_INDIGO, 1.0),
            Color {
                a: 1.0,
                ..palette::BRAND_INDIGO
            }
        );
    }

    #[test]
    fn shapes_stay_inside_the_unit_square() {
        for (x, y, _) in SHAPES {
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..=1.0).contains(&y));
        }
    }
}
