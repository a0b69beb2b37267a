//! Animation building blocks for the star effect.

pub mod shooting;
pub mod twinkle;
