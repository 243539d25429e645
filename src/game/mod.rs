//! Wirebug core game.
//!
//! A bug sits near the bottom of the field on one of a few vertical wires.
//! Birds drop from the top on random wires; the player hops the bug between
//! wires to dodge them. Each bird that falls off the bottom scores a point and
//! every tenth point makes the birds faster. Touching a bird ends the round.

pub mod logic;
pub mod schedule;
pub mod types;

pub use logic::*;
pub use schedule::Scheduler;
pub use types::*;
