//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front-end. The engine owns
//! the board, the two players and the turn order, and reports everything it
//! does as [`game::GameEvent`]s to a caller-supplied sink.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, engine
//! - [`ai`] — Column strategies for computer players
//! - [`ui`] — Terminal UI and headless driver consuming engine events
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
