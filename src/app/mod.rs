// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the splash sequence.
//!
//! The `App` struct owns the sequencer and bridges wall-clock ticks from
//! the Iced runtime into the sequencer's simulated time. Policy decisions
//! (window geometry, the completion hold, schedule fallback on bad
//! config) live close to the update loop so user-facing behavior is easy
//! to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::HOLD_AFTER_COMPLETE;

use crate::config;
use crate::sequence::{Schedule, Sequencer};
use crate::ui::content::SplashContent;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;
use std::time::{Duration, Instant};

pub const WINDOW_WIDTH: u32 = 420;
pub const WINDOW_HEIGHT: u32 = 780;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    sequencer: Sequencer,
    content: SplashContent,
    /// Wall-clock anchor of the sequence, set on the first tick.
    started_at: Option<Instant>,
    /// Simulated elapsed time at which the choreography completed.
    finished_at: Option<Duration>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application: loads the settings file, builds the
    /// timing schedule, and starts the sequencer.
    ///
    /// A broken settings file or an invalid schedule override falls back
    /// to the reference schedule; the splash must always play.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_path.as_deref() {
            Some(path) => config::load_from_path(Path::new(path)),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            log::warn!("failed to load settings: {err}");
            config::Config::default()
        });

        let schedule = Schedule::from_config(&config).unwrap_or_else(|err| {
            log::warn!("invalid schedule override ({err}); using the reference schedule");
            Schedule::default()
        });

        let mut sequencer = Sequencer::new(schedule);
        sequencer.start();

        let app = App {
            screen: Screen::Splash,
            sequencer,
            content: SplashContent::default(),
            started_at: None,
            finished_at: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.content.app_name.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            sequencer: &mut self.sequencer,
            started_at: &mut self.started_at,
            finished_at: &mut self.finished_at,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            state: self.sequencer.state(),
            content: &self.content,
        })
    }
}
