//! Wirebug - terminal arcade game library
//!
//! The game logic is pure and UI-agnostic; the binary wires it to the
//! terminal, the keyboard and the sound card.

pub mod audio;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod events;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use config::GameConfig;
pub use game::{GameEvent, GameInput, GameMessage, Phase, WorldState};
