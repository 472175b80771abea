// git-pusher: Push a Git branch with stored credentials
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                 main.rs
//!                    |
//!          +---------+---------+
//!          v                   v
//!      cli (clap)        cmd::push (driver)
//!                              |
//!                 +------------+------------+
//!                 v                         v
//!        ,-----------------,      ,--------------------,
//!        |     config      |      |        git         |
//!        |  INI, validated |      | gix read / CLI push|
//!        '-----------------'      '--------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
