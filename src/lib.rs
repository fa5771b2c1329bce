//! Terminal Snake arcade: five play modes over one shared tick loop.
//!
//! The simulation core ([`game`], [`snake`], [`food`], [`mode`]) is pure and
//! deterministic given a seed; the terminal, audio, and persistence layers
//! ([`renderer`], [`audio`], [`score`]) sit behind thin ports around it.

pub mod audio;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod mode;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
