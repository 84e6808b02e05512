// SPDX-License-Identifier: MPL-2.0
//! Row of award badges; the sequencer's highlight rotation emphasizes one
//! badge at a time.

use crate::ui::content::SplashContent;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element};

/// Renders the five badges with `highlight` emphasized (`None` before the
/// first rotation tick).
pub fn view<'a, Message: 'a>(
    content: &SplashContent,
    highlight: Option<usize>,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Top);

    for (index, title) in content.badge_titles.iter().enumerate() {
        let emphasized = highlight == Some(index);

        let circle = Container::new(
            Text::new(content.badge_symbols[index])
                .size(typography::SUBHEAD)
                .color(theme::badge_symbol_color(emphasized)),
        )
        .width(sizing::BADGE_CIRCLE)
        .height(sizing::BADGE_CIRCLE)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(theme::badge_circle_style(emphasized));

        let label = Text::new(*title)
            .size(typography::CAPTION)
            .color(theme::muted_text_color())
            .width(sizing::BADGE_LABEL_WIDTH)
            .align_x(alignment::Horizontal::Center);

        row = row.push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(circle)
                .push(label),
        );
    }

    row.into()
}
