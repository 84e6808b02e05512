// SPDX-License-Identifier: MPL-2.0
//! Progress bar with an independent simulated fill and a rounded percent
//! readout beneath it.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{canvas, Column, Text};
use iced::{alignment, mouse, Element, Length, Point, Rectangle, Theme};

/// Track plus fill, with the fill width given as a fraction of the track.
#[derive(Debug, Clone, Copy)]
struct Bar {
    /// Fill fraction in 0.0..=1.0.
    fraction: f32,
}

impl<Message> canvas::Program<Message> for Bar {
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

        let track = canvas::Path::rectangle(
            Point::ORIGIN,
            iced::Size::new(bounds.width, bounds.height),
        );
        frame.fill(&track, theme::progress_track_color());

        let fill_width = bounds.width * self.fraction.clamp(0.0, 1.0);
        if fill_width > 0.0 {
            let fill = canvas::Path::rectangle(
                Point::ORIGIN,
                iced::Size::new(fill_width, bounds.height),
            );
            frame.fill(&fill, theme::progress_fill_color());
        }

        vec![frame.into_geometry()]
    }
}

/// Renders the bar filled to `bar_percent` of its width with
/// `display_percent` printed below.
pub fn view<'a, Message: 'a>(bar_percent: f32, display_percent: u8) -> Element<'a, Message> {
    let bar = canvas::Canvas::new(Bar {
        fraction: bar_percent / 100.0,
    })
    .width(Length::Fill)
    .height(sizing::PROGRESS_TRACK);

    let readout = Text::new(format!("{display_percent}%"))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(bar)
        .push(readout)
        .into()
}
