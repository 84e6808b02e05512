// SPDX-License-Identifier: MPL-2.0
//! Headline and subheadline revealed in the second splash stage.

use crate::ui::content::SplashContent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{Column, Text};
use iced::{alignment, Element};

pub fn view<'a, Message: 'a>(content: &SplashContent) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(content.headline)
                .size(typography::HEADLINE)
                .color(theme::splash_text_color()),
        )
        .push(
            Text::new(content.subheadline)
                .size(typography::SUBHEAD)
                .color(theme::splash_text_color()),
        )
        .into()
}
