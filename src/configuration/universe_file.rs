//! Reader for the fixed universe text format.
//!
//! Line 1 is the universe width. Line 2 is a gravitational constant,
//! read and discarded (the simulation uses its own
//! [`G`](crate::simulation::forces::G)). The rest of the file is groups
//! of six lines, one group per body:
//!
//! ```text
//! >Io
//! 255, 200, 100
//! 8.9319e22
//! 1.8216e6
//! 2.4217e9, 2.0e9
//! 0, 17320
//! ```
//!
//! in order: name, color, mass, radius, position, velocity. The Unicode
//! minus sign (U+2212) is accepted wherever a number may be negative.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::simulation::states::{Body, NVec2, Rgb, Universe};

#[derive(Debug, Error)]
pub enum UniverseFileError {
    #[error("failed to read universe file")]
    Io(#[from] std::io::Error),
    #[error("malformed universe input: {0}")]
    Malformed(String),
    #[error("body mass must be positive, got {0}")]
    InvalidBodyMass(f64),
}

/// Read and parse a universe file.
pub fn read_universe(path: impl AsRef<Path>) -> Result<Universe, UniverseFileError> {
    let text = fs::read_to_string(path)?;
    parse_universe(&text)
}

/// Parse universe text. Bodies come back in file order with zero
/// acceleration.
pub fn parse_universe(text: &str) -> Result<Universe, UniverseFileError> {
    let mut lines = text.lines().map(str::trim);

    let width_line = lines
        .next()
        .ok_or_else(|| malformed("file is empty or missing width"))?;
    let width = parse_float(width_line)
        .map_err(|_| malformed(format!("invalid universe width: {width_line}")))?;
    if width <= 0.0 {
        return Err(malformed(format!("universe width must be positive, got {width}")));
    }

    // The G line is part of the format, but the value is ignored.
    lines
        .next()
        .ok_or_else(|| malformed("missing gravitational constant line"))?;

    let mut bodies = Vec::new();
    while let Some(name) = lines.next() {
        if !name.starts_with('>') {
            return Err(malformed(format!("expected body name, got: {name}")));
        }

        let color = parse_rgb(next_line(&mut lines, "color")?)?;

        let mass_line = next_line(&mut lines, "mass")?;
        let mass = parse_float(mass_line)
            .map_err(|_| malformed(format!("invalid mass: {mass_line}")))?;
        if mass <= 0.0 {
            return Err(UniverseFileError::InvalidBodyMass(mass));
        }

        let radius_line = next_line(&mut lines, "radius")?;
        let radius = parse_float(radius_line)
            .map_err(|_| malformed(format!("invalid radius: {radius_line}")))?;

        let position = parse_pair(next_line(&mut lines, "position")?)?;
        let velocity = parse_pair(next_line(&mut lines, "velocity")?)?;

        bodies.push(Body {
            x: position,
            v: velocity,
            a: NVec2::zeros(),
            m: mass,
            radius,
            color,
        });
    }

    Ok(Universe { width, bodies })
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    expected: &str,
) -> Result<&'a str, UniverseFileError> {
    lines
        .next()
        .ok_or_else(|| malformed(format!("unexpected end of file, expected {expected}")))
}

fn malformed(msg: impl Into<String>) -> UniverseFileError {
    UniverseFileError::Malformed(msg.into())
}

/// Parse a float, accepting the Unicode minus sign.
fn parse_float(s: &str) -> Result<f64, std::num::ParseFloatError> {
    s.trim().replace('\u{2212}', "-").parse()
}

/// Parse an `x, y` pair.
fn parse_pair(line: &str) -> Result<NVec2, UniverseFileError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 2 {
        return Err(malformed(format!("invalid ordered pair: {line}")));
    }
    let x = parse_float(parts[0]).map_err(|_| malformed(format!("invalid ordered pair: {line}")))?;
    let y = parse_float(parts[1]).map_err(|_| malformed(format!("invalid ordered pair: {line}")))?;
    Ok(NVec2::new(x, y))
}

/// Parse a `red, green, blue` triple of 0-255 integers.
fn parse_rgb(line: &str) -> Result<Rgb, UniverseFileError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(malformed(format!("invalid RGB format: {line}")));
    }
    let channel = |s: &str| -> Result<u8, UniverseFileError> {
        s.trim()
            .parse()
            .map_err(|_| malformed(format!("invalid RGB values: {line}")))
    };
    Ok(Rgb {
        red: channel(parts[0])?,
        green: channel(parts[1])?,
        blue: channel(parts[2])?,
    })
}
