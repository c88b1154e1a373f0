//! ASCII rendering of the classified grid.
//!
//! This is the debug surface external viewers consume: a one-glyph-per-tile
//! map plus a raw mode that prints signed two-decimal altitudes instead.

use crate::terrain::{Grid, LandType};

/// ASCII rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapView {
    /// One legend glyph per tile.
    LandTypes,
    /// Signed two-decimal finished altitude per tile.
    Altitude,
    /// Signed two-decimal noise-only altitude per tile.
    BaseAltitude,
}

impl MapView {
    /// Returns the name of the view.
    pub fn name(&self) -> &'static str {
        match self {
            MapView::LandTypes => "land types",
            MapView::Altitude => "altitude",
            MapView::BaseAltitude => "base altitude",
        }
    }
}

/// Returns the display glyph for a land type.
pub fn land_type_glyph(land: LandType) -> char {
    match land {
        LandType::Water => '~',
        LandType::Plains => ' ',
        LandType::Hills => '+',
        LandType::Valleys => 'v',
        LandType::Plateaus => '=',
        LandType::Mountains => 'A',
        LandType::Coastal => 'c',
        LandType::SandDunes => 'd',
    }
}

/// Renders the grid in the requested view, one row per line.
pub fn render(grid: &Grid, view: MapView) -> String {
    match view {
        MapView::LandTypes => render_glyphs(grid),
        MapView::Altitude => render_values(grid, false),
        MapView::BaseAltitude => render_values(grid, true),
    }
}

/// Returns the glyph legend, one land type per line.
pub fn legend() -> String {
    let mut out = String::new();
    for land in LandType::ALL {
        out.push('\'');
        out.push(land_type_glyph(land));
        out.push_str("' ");
        out.push_str(land.name());
        out.push('\n');
    }
    out
}

fn render_glyphs(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width + 1) * grid.height);
    for y in 0..grid.height {
        for x in 0..grid.width {
            out.push(land_type_glyph(grid.land_type(x, y)));
        }
        out.push('\n');
    }
    out
}

fn render_values(grid: &Grid, base_layer: bool) -> String {
    let mut out = String::new();
    for y in 0..grid.height {
        for x in 0..grid.width {
            let altitude = if base_layer {
                grid.base_altitude(x, y)
            } else {
                grid.altitude(x, y)
            };
            if x > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{altitude:+.2}"));
        }
        out.push('\n');
    }
    out
}
