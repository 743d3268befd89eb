//! Small browser-facing utilities.

pub mod token;
pub mod urlenc;
