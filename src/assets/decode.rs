use anyhow::Context;

use crate::foundation::{core::SkinImage, error::TeeResult};

/// Decode encoded skin bytes (PNG or any format `image` knows) into
/// premultiplied RGBA8.
pub fn decode_skin(bytes: &[u8]) -> TeeResult<SkinImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode skin image from memory")?;
    let rgba = dyn_img.to_rgba8();
    Ok(SkinImage::from_rgba_image(&rgba))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
