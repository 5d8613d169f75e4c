//! Knob panel configuration, generated from panel.toml by build.rs

use datedial_core::config::{ConfigError, KnobConfig, PanelConfig, PinAssignment};

include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));
