// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitTransport
//!   (gix, read)  (CLI, remote)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .is_repo    .push
//!    .branch     .ls_remote
//!    .branches
//!
//!    remote.rs   RemoteUrl (credentials in, redacted out)
//! ```
//!
//! **`GixBackend`** — pure Rust, no subprocess, read-only.
//! **`ShellBackend`** — git CLI for everything that touches the network.

pub mod backend;
pub mod remote;

#[cfg(test)]
mod tests;
