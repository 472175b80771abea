// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> run_push_command --> ExitCode
//! ```

use std::process::ExitCode;

use git_pusher::cli;
use git_pusher::cmd::push::run_push_command;
use git_pusher::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = LogConfig::builder()
        .with_console_level(cli.log_level())
        .with_show_target(cli.debug)
        .build();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("push: error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_push_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("push: error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
