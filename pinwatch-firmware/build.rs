//! Build script for pinwatch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates pinwatch.toml and generates the watched pin table

use std::collections::BTreeSet;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use pinwatch_hal::PinId;

/// User GPIOs on RP2040
const GPIO_COUNT: u8 = 30;

/// Must match `pinwatch_core::MAX_PINS`
const MAX_PINS: usize = 32;

fn main() {
    setup_linker();
    let pins = validate_config();
    generate_pin_table(&pins);
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

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate pinwatch.toml at compile time and return the watched pins
fn validate_config() -> Vec<PinId> {
    println!("cargo:rerun-if-changed=pinwatch.toml");

    let config_path = Path::new("pinwatch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: pinwatch.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware needs a pinwatch.toml listing the watched pins.    ║\n\
            ║  Please create one in the pinwatch-firmware directory:           ║\n\
            ║                                                                  ║\n\
            ║      [monitor]                                                   ║\n\
            ║      pins = [\"gpio14\", \"gpio15\"]                                 ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read pinwatch.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in pinwatch.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let pins = match validate_pins(&config) {
        Ok(pins) => pins,
        Err(errors) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid [monitor] section in pinwatch.toml               ║\n\
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
    };

    println!("cargo:warning=pinwatch.toml validated: {} watched pins", pins.len());
    pins
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

/// Check `[monitor] pins` and collect every problem found
fn validate_pins(config: &toml::Value) -> Result<Vec<PinId>, Vec<String>> {
    let entries = match config.get("monitor").and_then(|m| m.get("pins")) {
        Some(toml::Value::Array(entries)) => entries,
        Some(_) => return Err(vec!["monitor.pins must be an array of pin names".into()]),
        None => return Err(vec!["Missing [monitor] pins = [...]".into()]),
    };

    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();
    let mut pins = Vec::new();

    if entries.is_empty() {
        errors.push("monitor.pins is empty - at least one pin is required".into());
    }
    if entries.len() > MAX_PINS {
        errors.push(format!("monitor.pins lists {} pins (max {})", entries.len(), MAX_PINS));
    }

    for entry in entries {
        let Some(name) = entry.as_str() else {
            errors.push(format!("{} is not a pin name string", entry));
            continue;
        };
        match name.parse::<PinId>() {
            Ok(pin) if pin.number() >= GPIO_COUNT => {
                errors.push(format!("{}: RP2040 has gpio0..gpio{}", name, GPIO_COUNT - 1));
            }
            Ok(pin) if !seen.insert(pin) => {
                errors.push(format!("{}: listed more than once", name));
            }
            Ok(pin) => pins.push(pin),
            Err(e) => errors.push(format!("{:?}: {}", name, e)),
        }
    }

    if errors.is_empty() {
        Ok(pins)
    } else {
        Err(errors)
    }
}

/// Write `watched_pins.rs` for `src/config.rs` to include
fn generate_pin_table(pins: &[PinId]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let entries = pins
        .iter()
        .map(|pin| format!("PinId({})", pin.number()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut f = File::create(out_dir.join("watched_pins.rs")).unwrap();
    writeln!(
        f,
        "pub const WATCHED_PINS: [PinId; {}] = [{}];",
        pins.len(),
        entries
    )
    .unwrap();
}
