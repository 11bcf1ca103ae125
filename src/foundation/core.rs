use std::{fmt, sync::Arc};

use crate::foundation::{
    error::{TeeError, TeeResult},
    math::{premul_channel, unpremul_channel},
};

pub use kurbo::{Affine, Point, Vec2};

/// Axis-aligned pixel rectangle inside a skin sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SheetRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SheetRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, `None` on overflow.
    pub fn right(self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Exclusive bottom edge, `None` on overflow.
    pub fn bottom(self) -> Option<u32> {
        self.y.checked_add(self.height)
    }

    /// Whether the rectangle lies fully inside a `width`×`height` image.
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        matches!(
            (self.right(), self.bottom()),
            (Some(r), Some(b)) if r <= width && b <= height
        )
    }
}

impl fmt::Display for SheetRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}x{}]", self.x, self.y, self.width, self.height)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul_channel(r, a),
            g: premul_channel(g, a),
            b: premul_channel(b, a),
            a,
        }
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert back to straight (non-premultiplied) RGBA8.
    pub fn to_straight(self) -> [u8; 4] {
        [
            unpremul_channel(self.r, self.a),
            unpremul_channel(self.g, self.a),
            unpremul_channel(self.b, self.a),
            self.a,
        ]
    }
}

pub(crate) fn rgba8_len(width: u32, height: u32) -> TeeResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| TeeError::validation("rgba8 buffer size overflow"))
}

/// A decoded skin sprite sheet in premultiplied RGBA8.
///
/// The pixel data is shared behind an `Arc` so a decoded skin can be handed to
/// several renders (or threads) without copying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkinImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl SkinImage {
    /// Wrap already-premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, rgba8_premul: Vec<u8>) -> TeeResult<Self> {
        if rgba8_premul.len() != rgba8_len(width, height)? {
            return Err(TeeError::validation(format!(
                "skin buffer has {} bytes, expected {width}x{height}x4",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Build from an `image` straight-alpha buffer, premultiplying on the way in.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8_premul.get(idx..idx + 4)?;
        Some(Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]))
    }
}

/// Output raster of a render: a fixed-size premultiplied RGBA8 buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> TeeResult<Self> {
        Self::filled(width, height, Rgba8Premul::transparent())
    }

    pub fn filled(width: u32, height: u32, fill: Rgba8Premul) -> TeeResult<Self> {
        let len = rgba8_len(width, height)?;
        let mut data = vec![0u8; len];
        if fill != Rgba8Premul::transparent() {
            for px in data.chunks_exact_mut(4) {
                px.copy_from_slice(&fill.to_array());
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        let idx = self.index_of(x, y)?;
        let px = &self.data[idx..idx + 4];
        Some(Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]))
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Straight-alpha RGBA8 copy, suitable for encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let px = Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&px.to_straight());
        }
        out
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = premul_channel(px[0], a);
        px[1] = premul_channel(px[1], a);
        px[2] = premul_channel(px[2], a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
