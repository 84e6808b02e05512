// SPDX-License-Identifier: MPL-2.0
//! Presentation layer for the splash sequence.
//!
//! Every module here renders purely as a function of
//! [`SplashState`](crate::sequence::SplashState) and the injected
//! [`SplashContent`](content::SplashContent); none of them produce
//! messages or write state.

pub mod background;
pub mod badge_row;
pub mod content;
pub mod design_tokens;
pub mod dot_indicator;
pub mod logo;
pub mod progress_bar;
pub mod splash;
pub mod text_block;
pub mod theme;
