//! Default style tables used when an exporter option is omitted.

use polyio_types::Color;

/// Fill palette cycled over polygons when no fill colors are given
/// (a qualitative eight-color scheme).
pub const DEFAULT_FILL_COLORS: [Color; 8] = [
    Color::rgb(27, 158, 119),
    Color::rgb(217, 95, 2),
    Color::rgb(117, 112, 179),
    Color::rgb(231, 41, 138),
    Color::rgb(102, 166, 30),
    Color::rgb(230, 171, 2),
    Color::rgb(166, 118, 29),
    Color::rgb(102, 102, 102),
];

pub const DEFAULT_FILL_OPACITY: [f64; 1] = [1.0];

pub const DEFAULT_STROKE_COLORS: [Color; 1] = [Color::BLACK];

pub const DEFAULT_STROKE_WIDTHS: [f64; 1] = [1.0];

/// Fill palette for the PDF exporter when no colors are given.
pub const PDF_FILL_COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
