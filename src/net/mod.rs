//! Network layer: wire types, the fan-in fetch helper, and typed API calls.

pub mod api;
pub mod fetch;
pub mod types;
