// SPDX-License-Identifier: MPL-2.0
use iced_splash::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_path: args.opt_value_from_str("--config").unwrap_or_default(),
    };

    app::run(flags)
}
