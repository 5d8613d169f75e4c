//! Configuration types
//!
//! Board-agnostic knob panel configuration. The firmware reads these from
//! `panel.toml` at build time; host tests use [`PanelConfig::default`].

pub mod types;

pub use types::*;
