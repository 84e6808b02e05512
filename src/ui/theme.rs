// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers and container styles for the splash surfaces.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Border, Color, Theme};

/// Primary text color on the brand gradient.
pub fn splash_text_color() -> Color {
    palette::WHITE
}

/// Secondary text color for taglines and the percent readout.
pub fn muted_text_color() -> Color {
    Color {
        a: opacity::STRONG,
        ..palette::WHITE
    }
}

/// Fill color of the active loading indicator dot.
pub fn dot_active_color() -> Color {
    palette::WHITE
}

/// Fill color of the inactive loading indicator dots.
pub fn dot_inactive_color() -> Color {
    Color {
        a: opacity::MUTED,
        ..palette::WHITE
    }
}

/// Track color behind the progress bar fill.
pub fn progress_track_color() -> Color {
    Color {
        a: opacity::SUBTLE,
        ..palette::WHITE
    }
}

/// Fill color of the progress bar.
pub fn progress_fill_color() -> Color {
    palette::WHITE
}

/// Style for one loading indicator dot.
pub fn dot_style(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(if active {
            dot_active_color()
        } else {
            dot_inactive_color()
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Style for a badge circle; the emphasized badge renders as a solid
/// white disc, the rest as translucent outlines.
pub fn badge_circle_style(emphasized: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = if emphasized {
            palette::WHITE
        } else {
            Color {
                a: opacity::SUBTLE,
                ..palette::WHITE
            }
        };
        container::Style {
            background: Some(iced::Background::Color(background)),
            border: Border {
                radius: radius::FULL.into(),
                width: 1.0,
                color: Color {
                    a: if emphasized { opacity::OPAQUE } else { opacity::SOFT },
                    ..palette::WHITE
                },
            },
            ..container::Style::default()
        }
    }
}

/// Glyph color inside a badge circle.
pub fn badge_symbol_color(emphasized: bool) -> Color {
    if emphasized {
        palette::BRAND_PURPLE
    } else {
        palette::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_inactive_dots_differ() {
        assert_ne!(dot_active_color(), dot_inactive_color());
    }

    #[test]
    fn emphasized_badge_symbol_is_dark_on_white() {
        assert_eq!(badge_symbol_color(true), palette::BRAND_PURPLE);
        assert_eq!(badge_symbol_color(false), palette::WHITE);
    }
}
