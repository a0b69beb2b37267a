//! Shooting-star effect rendering for byeol.
//!
//! This crate provides the animated effect itself: a fixed number of
//! independent star lineages that spawn at random positions, streak across
//! the terminal for one cycle, and respawn somewhere else, over an optional
//! twinkling backdrop.

mod animations;
mod chars;
mod color;
mod rng;
mod state;

pub use state::EffectState;
