//! PNG export for altitude and land-type maps.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Luma, Rgb, RgbImage};
use thiserror::Error;

use crate::terrain::{Grid, LandType};

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid altitude range: min ({0}) >= max ({1})")]
    InvalidAltitudeRange(f64, f64),
}

/// Which altitude layer to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeLayer {
    /// Finished terrain (noise + ridges + classification edits).
    Final,
    /// Raw noise-only terrain kept for diagnostics.
    Base,
}

/// Options for altitude PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// Minimum altitude value for normalization.
    pub min_altitude: f64,
    /// Maximum altitude value for normalization.
    pub max_altitude: f64,
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            min_altitude: -1.0,
            max_altitude: 2.0,
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

impl PngExportOptions {
    /// Creates options with the range auto-detected from the chosen layer.
    pub fn auto_range(grid: &Grid, layer: AltitudeLayer) -> Self {
        let (min, max) = match layer {
            AltitudeLayer::Final => grid.altitude_range(),
            AltitudeLayer::Base => grid.base_altitude_range(),
        };
        Self {
            min_altitude: min,
            max_altitude: max,
            ..Default::default()
        }
    }
}

/// Exports one altitude layer as a 16-bit grayscale PNG.
///
/// # Arguments
/// * `grid` - The grid to export
/// * `layer` - Which altitude layer to read
/// * `path` - Output file path
/// * `options` - Normalization range and encoder settings
pub fn export_altitude_png(
    grid: &Grid,
    layer: AltitudeLayer,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let min = options.min_altitude;
    let max = options.max_altitude;
    if min >= max {
        return Err(PngExportError::InvalidAltitudeRange(min, max));
    }
    let range = max - min;

    let mut img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::new(grid.width as u32, grid.height as u32);

    for y in 0..grid.height {
        for x in 0..grid.width {
            let altitude = match layer {
                AltitudeLayer::Final => grid.altitude(x, y),
                AltitudeLayer::Base => grid.base_altitude(x, y),
            };
            let normalized = ((altitude - min) / range).clamp(0.0, 1.0);
            img.put_pixel(x as u32, y as u32, Luma([(normalized * 65535.0) as u16]));
        }
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    let byte_slice: &[u8] = bytemuck::cast_slice(img.as_raw());
    encoder.write_image(
        byte_slice,
        grid.width as u32,
        grid.height as u32,
        image::ExtendedColorType::L16,
    )?;

    Ok(())
}

/// Exports the land-type map as an RGB PNG using the legend palette.
pub fn export_land_type_png(grid: &Grid, path: &Path) -> Result<(), PngExportError> {
    let mut img: RgbImage = ImageBuffer::new(grid.width as u32, grid.height as u32);
    for y in 0..grid.height {
        for x in 0..grid.width {
            img.put_pixel(x as u32, y as u32, Rgb(land_type_color(grid.land_type(x, y))));
        }
    }
    img.save(path)?;
    Ok(())
}

/// Preview color for a land type.
pub fn land_type_color(land: LandType) -> [u8; 3] {
    match land {
        LandType::Water => [38, 90, 160],
        LandType::Plains => [120, 160, 90],
        LandType::Hills => [150, 130, 90],
        LandType::Mountains => [200, 200, 205],
        LandType::Valleys => [90, 140, 80],
        LandType::Plateaus => [180, 150, 110],
        LandType::Coastal => [220, 205, 150],
        LandType::SandDunes => [230, 210, 140],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_range_tracks_each_layer() {
        let mut grid = Grid::new(3, 3);
        grid.set_altitude(0, 0, -0.4);
        grid.set_altitude(2, 2, 1.6);
        grid.set_base_altitude(1, 1, 0.5);

        let final_opts = PngExportOptions::auto_range(&grid, AltitudeLayer::Final);
        assert_eq!(final_opts.min_altitude, -0.4);
        assert_eq!(final_opts.max_altitude, 1.6);

        let base_opts = PngExportOptions::auto_range(&grid, AltitudeLayer::Base);
        assert_eq!(base_opts.max_altitude, 0.5);
    }

    #[test]
    fn test_degenerate_range_is_rejected() {
        let grid = Grid::new(2, 2);
        let options = PngExportOptions {
            min_altitude: 1.0,
            max_altitude: 1.0,
            ..Default::default()
        };
        let err = export_altitude_png(
            &grid,
            AltitudeLayer::Final,
            Path::new("/tmp/unused.png"),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, PngExportError::InvalidAltitudeRange(_, _)));
    }

    #[test]
    fn test_palette_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for land in LandType::ALL {
            assert!(seen.insert(land_type_color(land)), "duplicate color for {}", land.name());
        }
    }
}
