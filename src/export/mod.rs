//! Diagnostic export surfaces: ASCII maps and PNG images.

pub mod ascii;
pub mod png;

pub use ascii::{land_type_glyph, legend, render, MapView};
pub use png::{
    export_altitude_png, export_land_type_png, land_type_color, AltitudeLayer, PngExportError,
    PngExportOptions,
};
