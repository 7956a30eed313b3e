//! Core trait abstractions.
//!
//! [`FromConfig`] is the seam between declarative configuration and the
//! validated runtime types built from it.

mod from_config;

pub use from_config::FromConfig;
