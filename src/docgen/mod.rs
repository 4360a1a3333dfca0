//! Documentation maintenance for per-model tutorial directories.
//!
//! Image reference auditing, landing page generation, and sidebar
//! configuration, all driven by the [`registry`].

pub mod images;
pub mod index;
pub mod markdown;
pub mod registry;
pub mod sidebar;
