//! Top-level routed pages.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod movie_details;
pub mod search;
