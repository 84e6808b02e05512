// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::sequence::SplashState;
use crate::ui::content::SplashContent;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{splash, theme};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub state: &'a SplashState,
    pub content: &'a SplashContent,
}

/// Renders the current view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Splash => splash::view(splash::ViewContext {
            state: ctx.state,
            content: ctx.content,
        }),
        Screen::Home => view_home(ctx.content),
    }
}

/// Placeholder main content shown after the splash hands over.
fn view_home(content: &SplashContent) -> Element<'_, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(content.app_name)
                .size(typography::HEADLINE)
                .color(theme::splash_text_color()),
        )
        .push(
            Text::new(content.tagline)
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        );

    crate::ui::background::wrap(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    )
}
