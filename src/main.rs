// SPDX-License-Identifier: MPL-2.0
use iced_reveal::app::{self, Flags};

fn main() -> iced::Result {
    let args = pico_args::Arguments::from_env();

    let mut paths = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok());

    let flags = Flags {
        left_path: paths.next(),
        right_path: paths.next(),
    };

    app::run(flags)
}
