//! Shared utility modules.

pub mod alphabet;
