// SPDX-License-Identifier: MPL-2.0
//! Three-dot loading indicator; one dot is highlighted at a time.

use crate::sequence::DOT_COUNT;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theme;
use iced::widget::{Container, Row, Space};
use iced::{Element, Length};

/// Renders the dot row with `active_dot` highlighted.
pub fn view<'a, Message: 'a>(active_dot: usize) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for dot in 0..DOT_COUNT {
        row = row.push(
            Container::new(Space::new().width(Length::Fixed(0.0)).height(Length::Fixed(0.0)))
                .width(sizing::DOT)
                .height(sizing::DOT)
                .style(theme::dot_style(dot == active_dot)),
        );
    }
    row.into()
}
