//! Reusable view components.

pub mod guard;
pub mod movie_card;
pub mod newly_released;
pub mod page_controls;
