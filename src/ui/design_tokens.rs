// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the splash screen.
//!
//! - **Palette**: brand gradient stops and surface colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Brand gradient stops (deep purple into indigo)
    pub const BRAND_PURPLE: Color = Color::from_rgb(0.286, 0.0, 0.4);
    pub const BRAND_INDIGO: Color = Color::from_rgb(0.059, 0.106, 0.478);
    pub const BRAND_BLUE: Color = Color::from_rgb(0.165, 0.239, 0.765);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const FAINT: f32 = 0.06;
    pub const SUBTLE: f32 = 0.1;
    pub const SOFT: f32 = 0.3;
    pub const MUTED: f32 = 0.4;
    pub const STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of one loading indicator dot.
    pub const DOT: f32 = 10.0;

    /// Diameter of a badge circle.
    pub const BADGE_CIRCLE: f32 = 56.0;

    /// Width reserved for a badge title below its circle.
    pub const BADGE_LABEL_WIDTH: f32 = 88.0;

    /// Height of the progress bar track.
    pub const PROGRESS_TRACK: f32 = 6.0;

    /// Edge length of the logo canvas.
    pub const LOGO: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Headline over the logo.
    pub const HEADLINE: f32 = 30.0;

    /// Secondary line under the headline.
    pub const SUBHEAD: f32 = 22.0;

    /// Tagline and supporting text.
    pub const BODY: f32 = 14.0;

    /// Badge titles and the percent readout.
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

const _: () = {
    assert!(typography::HEADLINE > typography::SUBHEAD);
    assert!(typography::SUBHEAD > typography::BODY);
    assert!(sizing::BADGE_CIRCLE > sizing::DOT);
};
