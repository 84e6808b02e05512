// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for the application.

/// Screens the application moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The branded loading sequence.
    Splash,
    /// Placeholder main content shown once the sequence completes.
    Home,
}
