// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
//! Library half of the `tcvpc` command-line tool.
//!
//! [`commands`] holds the subcommand logic and [`format`] renders the
//! results; `main.rs` only parses arguments and wires the two together.

pub mod commands;
pub mod format;
