//! # Connect Four
//!
//! A terminal Connect Four with configurable board dimensions, multi-game
//! sessions, and cumulative scoring (+2 for a win, +1 each for a draw).
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, session state machine
//! - [`ui`] — Terminal UI: session game view with column selector
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
