//! Build script for datedial-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time
//! - Generates the panel constructor and pin-taking macro from panel.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use datedial_core::config::{KnobConfig, PanelConfig};
use datedial_core::events::KnobId;

/// GPIOs wired to the TFT (DC, CS, SCK, MOSI, RST); see src/display.rs
const DISPLAY_BUS_PINS: [u8; 5] = [8, 9, 10, 11, 15];

fn main() {
    setup_linker();
    let config = validate_config();
    generate_panel(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Linker scripts for cortex-m-rt and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Parse and validate panel.toml
fn validate_config() -> PanelConfig {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml describing the three knobs.  ║\n\
            ║  Please create one in the datedial-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax and shape in one go: serde rejects missing knobs and fields
    let config: PanelConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid panel.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    for id in KnobId::ALL {
        if let Err(e) = config.knob(id).validate() {
            errors.push(format!("[{}] {}", id.label(), e));
        }
    }
    if errors.is_empty() {
        if let Err(e) = config.validate() {
            errors.push(e.to_string());
        }
        if let Err(e) = config.check_reserved(&DISPLAY_BUS_PINS) {
            errors.push(format!("{} (display bus)", e));
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml validation failed                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=panel.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `panel_config.rs` into OUT_DIR
fn generate_panel(config: &PanelConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let knobs = KnobId::ALL
        .iter()
        .map(|&id| format!("        {}: {},", id.label(), knob_constructor(config.knob(id))))
        .collect::<Vec<_>>()
        .join("\n");

    let pins = KnobId::ALL
        .iter()
        .map(|&id| {
            let taken = config
                .knob(id)
                .pins
                .as_array()
                .iter()
                .map(|pin| format!("embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{})", pin))
                .collect::<Vec<_>>()
                .join(",\n                ");
            format!("            [\n                {},\n            ],", taken)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let code = format!(
        "// Generated by build.rs from panel.toml. Do not edit.\n\
         \n\
         /// Panel configuration from panel.toml\n\
         pub fn panel_config() -> Result<PanelConfig, ConfigError> {{\n\
         \x20   Ok(PanelConfig {{\n\
         {knobs}\n\
         \x20   }})\n\
         }}\n\
         \n\
         /// Move the knob GPIOs out of `Peripherals`\n\
         ///\n\
         /// Yields `[[a, b, button]; 3]` in year, month, day order.\n\
         macro_rules! take_knob_pins {{\n\
         \x20   ($p:ident) => {{\n\
         \x20       [\n\
         {pins}\n\
         \x20       ]\n\
         \x20   }};\n\
         }}\n\
         \n\
         pub(crate) use take_knob_pins;\n"
    );

    fs::write(out_dir.join("panel_config.rs"), code).unwrap();
}

fn knob_constructor(knob: &KnobConfig) -> String {
    let [a, b, button] = knob.pins.as_array();
    let initial = match knob.initial {
        Some(value) => format!("Some({})", value),
        None => "None".to_string(),
    };
    format!(
        "KnobConfig::new({:?}, PinAssignment::new({}, {}, {}), {}, {}, {})?.with_debounce_ms({})",
        knob.name.as_str(),
        a,
        b,
        button,
        knob.min,
        knob.max,
        initial,
        knob.debounce_ms
    )
}
