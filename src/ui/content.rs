// SPDX-License-Identifier: MPL-2.0
//! Static copy shown on the splash screen.
//!
//! Injected external data: titles, symbols, and taglines are never
//! computed by the sequence core and carry no localization logic.

use crate::sequence::BADGE_COUNT;

/// Text and symbols rendered by the splash screen.
#[derive(Debug, Clone)]
pub struct SplashContent {
    /// Window title and wordmark under the logo.
    pub app_name: &'static str,
    /// Main line of the text block.
    pub headline: &'static str,
    /// Secondary line under the headline.
    pub subheadline: &'static str,
    /// Small line under the logo.
    pub tagline: &'static str,
    /// One title per badge.
    pub badge_titles: [&'static str; BADGE_COUNT],
    /// One glyph per badge circle.
    pub badge_symbols: [&'static str; BADGE_COUNT],
}

impl Default for SplashContent {
    fn default() -> Self {
        Self {
            app_name: "IcedSplash",
            headline: "The Fastest Network",
            subheadline: "Wherever you go",
            tagline: "Everything good is on its way",
            badge_titles: [
                "FASTEST MOBILE NETWORK",
                "FASTEST FIXED NETWORK",
                "BEST VIDEO EXPERIENCE",
                "BEST WIFI EXPERIENCE",
                "BEST 5G EXPERIENCE",
            ],
            badge_symbols: ["✦", "✚", "✔", "✳", "★"],
        }
    }
}
