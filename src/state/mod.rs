//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `search`, `details`, `paging`) so
//! individual components can depend on small focused models. The session and
//! search models are provided as `RwSignal` contexts from `App`; the rest are
//! plain values owned by the pages that use them.

pub mod details;
pub mod paging;
pub mod search;
pub mod session;
