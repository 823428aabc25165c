use std::io::Cursor;
use std::path::Path;

use egui::Color32;
use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::element::{Element, ElementType, STAMP_GLYPH_SIZE};
use crate::element::{Stamp, Stroke};

/// Default edge length of the export surface, larger than the on-screen
/// canvas so strokes can be scaled up without clipping.
pub const EXPORT_SIZE: u32 = 1024;

/// Errors from the raster export path
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f32),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Rasterize committed entities onto an offscreen surface.
///
/// A pure read of the committed sequence: entities are drawn oldest-first at
/// the given scale factor onto a white background. Emoji glyphs have no font
/// path here, so stamps are exported as a filled disc marker at the stamp
/// position.
pub fn rasterize(
    elements: &[ElementType],
    width: u32,
    height: u32,
    scale: f32,
) -> Result<RgbaImage, ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::InvalidScale(scale));
    }

    let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    for element in elements {
        match element {
            ElementType::Stroke(stroke) => rasterize_stroke(&mut image, stroke, scale),
            ElementType::Stamp(stamp) => rasterize_stamp(&mut image, stamp, scale),
        }
    }

    Ok(image)
}

/// Encode a rasterized surface as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Rasterize and save the committed entities as a PNG file
pub fn export_png(elements: &[ElementType], path: &Path, scale: f32) -> Result<(), ExportError> {
    let image = rasterize(elements, EXPORT_SIZE, EXPORT_SIZE, scale)?;
    let bytes = encode_png(&image)?;
    std::fs::write(path, bytes)?;
    log::info!(
        "exported {} entities to {} at {scale}x",
        elements.len(),
        path.display()
    );
    Ok(())
}

fn rasterize_stroke(image: &mut RgbaImage, stroke: &Stroke, scale: f32) {
    // One point renders nothing, same as the on-screen path
    if stroke.points().len() < 2 {
        return;
    }

    let radius = (stroke.thickness() * scale) / 2.0;
    let color = to_rgba(stroke.color());

    let bounds = stroke.rect();
    let (x0, y0) = clamp_to_image(image, bounds.min.x * scale - 1.0, bounds.min.y * scale - 1.0);
    let (x1, y1) = clamp_to_image(image, bounds.max.x * scale + 1.0, bounds.max.y * scale + 1.0);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let pixel = egui::pos2(x as f32 + 0.5, y as f32 + 0.5);
            let covered = stroke.points().windows(2).any(|segment| {
                crate::element::distance_to_line_segment(pixel, segment[0] * scale, segment[1] * scale)
                    <= radius
            });
            if covered {
                image.put_pixel(x, y, color);
            }
        }
    }
}

fn rasterize_stamp(image: &mut RgbaImage, stamp: &Stamp, scale: f32) {
    let center = egui::pos2(stamp.pos().x * scale, stamp.pos().y * scale);
    let radius = (STAMP_GLYPH_SIZE / 2.0) * scale;

    let (x0, y0) = clamp_to_image(image, center.x - radius, center.y - radius);
    let (x1, y1) = clamp_to_image(image, center.x + radius, center.y + radius);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let pixel = egui::pos2(x as f32 + 0.5, y as f32 + 0.5);
            if (pixel - center).length() <= radius {
                image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }
}

fn clamp_to_image(image: &RgbaImage, x: f32, y: f32) -> (u32, u32) {
    let x = x.clamp(0.0, (image.width() - 1) as f32) as u32;
    let y = y.clamp(0.0, (image.height() - 1) as f32) as u32;
    (x, y)
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}
