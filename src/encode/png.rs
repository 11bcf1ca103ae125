use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::Canvas,
    error::{TeeError, TeeResult},
};

/// Encode a rendered canvas as a straight-alpha RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> TeeResult<Vec<u8>> {
    let (width, height) = (canvas.width(), canvas.height());
    let img = image::RgbaImage::from_raw(width, height, canvas.to_straight_rgba8())
        .ok_or_else(|| TeeError::encode("canvas buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| TeeError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode a rendered canvas and write it to `path`, creating parent directories.
pub fn write_png(canvas: &Canvas, path: &Path) -> TeeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &canvas.to_straight_rgba8(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
