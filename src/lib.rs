// SPDX-License-Identifier: MPL-2.0
//! `iced_splash` is a branded loading/splash sequence built with the Iced
//! GUI framework.
//!
//! The core is the [`sequence`] module: a deterministic, simulated-time
//! state machine of staged reveals, progress ramps, and rotating
//! indicators. The [`app`] module hosts it in an Iced application and the
//! [`ui`] module renders purely from its observable state.

#![doc(html_root_url = "https://docs.rs/iced_splash/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod sequence;
pub mod ui;
