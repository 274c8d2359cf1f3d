//! QR token rendering

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::QrCode;

use crate::error::{AppError, AppResult};

/// Render a token identifier as a greyscale QR code
pub fn render_token(identifier: &str) -> AppResult<DynamicImage> {
    let code = QrCode::new(identifier.as_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to encode QR code: {}", e)))?;
    let image = code.render::<Luma<u8>>().min_dimensions(200, 200).build();
    Ok(DynamicImage::ImageLuma8(image))
}

/// Render a token identifier as PNG bytes
pub fn render_token_png(identifier: &str) -> AppResult<Vec<u8>> {
    let image = render_token(identifier)?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .map_err(|e| AppError::Internal(format!("Failed to encode PNG: {}", e)))?;
    Ok(png)
}
