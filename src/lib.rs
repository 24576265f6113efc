//! Conversify: survey design, preview and results exploration.
//!
//! The library holds the domain models and the terminal UI; the binary adds
//! the command line on top.

pub mod config;
pub mod dashboard;
pub mod format;
pub mod projects;
pub mod responses;
pub mod session;
pub mod sharing;
pub mod survey;
pub mod tui;
