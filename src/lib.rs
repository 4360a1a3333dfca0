//! `modeldocs` - maintenance tooling for per-model markdown tutorial sites
//!
//! This library audits image references, generates landing pages, and
//! builds sidebar navigation for a `models/<model>/*.md` documentation tree.

pub mod cli;
pub mod docgen;
pub mod error;
pub mod observability;
