#![warn(missing_docs)]
//! Connect Four rules engine with a pluggable renderer.
//!
//! [`GameSession`] owns a board and runs the turn state machine; anything
//! implementing [`Renderer`] can mirror the game visually. The binary in
//! this crate wires a terminal renderer to stdin input.
pub(crate) mod game;
pub use game::{Board, Error, GameResult, GameSession, Input, Player, Renderer, Status, Tile};
