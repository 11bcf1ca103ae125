use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Blend `src` over the 4-byte pixel slot `dst` in place.
pub fn over_in_place(dst: &mut [u8], src: PremulRgba8) {
    let out = over([dst[0], dst[1], dst[2], dst[3]], src);
    dst.copy_from_slice(&out);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
