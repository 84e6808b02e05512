// SPDX-License-Identifier: MPL-2.0
//! Composition of the splash screen.
//!
//! Everything here is gated purely on the sequencer's reveal flags and
//! rendered from the observable state; the splash produces no messages.

use crate::sequence::SplashState;
use crate::ui::content::SplashContent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{background, badge_row, dot_indicator, logo, progress_bar, text_block, theme};
use iced::widget::{Column, Container, Space, Text};
use iced::{alignment, Element, Length};

/// Context required to render the splash screen.
pub struct ViewContext<'a> {
    pub state: &'a SplashState,
    pub content: &'a SplashContent,
}

/// Renders the splash screen for the current sequence state.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let mut stack = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill).height(Length::FillPortion(2)));

    if state.badges_visible() {
        stack = stack.push(badge_row::view(ctx.content, state.highlight()));
    }

    if state.text_visible() {
        stack = stack.push(text_block::view(ctx.content));
    }

    if state.logo_visible() {
        stack = stack
            .push(logo::view())
            .push(
                Text::new(ctx.content.tagline)
                    .size(typography::BODY)
                    .color(theme::muted_text_color()),
            );
    }

    if state.text_visible() {
        stack = stack.push(dot_indicator::view(state.active_dot()));
    }

    stack = stack
        .push(Space::new().width(Length::Fill).height(Length::FillPortion(3)))
        .push(
            Container::new(progress_bar::view(
                state.progress_bar_width(),
                state.display_percent(),
            ))
            .padding([0.0, spacing::XXL]),
        )
        .push(Space::new().width(Length::Fill).height(Length::Fixed(spacing::XL)));

    background::wrap(
        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}
