//! Classic grid Snake: a deterministic simulation core plus a terminal frontend.
//!
//! The core is [`grid`], [`snake`], [`food`] and [`game`]; it never touches the
//! terminal. The remaining modules render a [`game::GameState`] and feed it
//! per-frame input.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
