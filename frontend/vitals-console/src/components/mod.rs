//! UI components

pub mod announcer;
pub mod layout;
pub mod pages;

// Re-export for convenience
pub use announcer::{Announcer, LiveRegion};
pub use layout::Navbar;
pub use pages::{Home, NotFound, SystemHealth};
