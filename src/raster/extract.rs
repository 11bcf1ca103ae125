use crate::foundation::{
    core::{Rgba8Premul, SheetRect, SkinImage, rgba8_len},
    error::{TeeError, TeeResult},
};

/// An isolated crop of a skin, in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

impl Region {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgba8Premul::from_array(self.texel(x, y)))
    }

    /// Unchecked-by-contract read; callers keep `x < width` and `y < height`.
    pub(crate) fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[idx..idx + 4];
        [px[0], px[1], px[2], px[3]]
    }
}

/// Copy `rect` out of `image` without scaling.
///
/// `element` only labels the error when the rectangle does not fit.
pub fn extract(image: &SkinImage, element: &str, rect: SheetRect) -> TeeResult<Region> {
    let expected = rgba8_len(image.width, image.height)?;
    if image.rgba8_premul.len() != expected {
        return Err(TeeError::validation(format!(
            "skin buffer has {} bytes, {}x{} needs {expected}",
            image.rgba8_premul.len(),
            image.width,
            image.height
        )));
    }
    if !rect.fits_within(image.width, image.height) {
        return Err(TeeError::OutOfBounds {
            element: element.to_string(),
            rect,
            width: image.width,
            height: image.height,
        });
    }

    let src_stride = image.width as usize * 4;
    let row_len = rect.width as usize * 4;
    let mut out = Vec::with_capacity(row_len * rect.height as usize);
    for row in 0..rect.height as usize {
        let start = (rect.y as usize + row) * src_stride + rect.x as usize * 4;
        out.extend_from_slice(&image.rgba8_premul[start..start + row_len]);
    }

    Ok(Region {
        width: rect.width,
        height: rect.height,
        rgba8_premul: out,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/extract.rs"]
mod tests;
