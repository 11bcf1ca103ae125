use crate::{
    catalog::model::PartSpec,
    foundation::{
        core::{Affine, Canvas, Vec2},
        error::{TeeError, TeeResult},
    },
    raster::{composite::over_in_place, extract::Region},
};

/// Local-to-canvas transform of a part.
///
/// Canonical order: `T(dest) * S(scale_x * flip, scale_y)`, so a flipped part
/// mirrors around its own anchor rather than the canvas.
pub fn part_transform(part: &PartSpec) -> Affine {
    let flip = if part.flip_x { -1.0 } else { 1.0 };
    Affine::translate(Vec2::new(part.dest_x, part.dest_y))
        * Affine::scale_non_uniform(part.scale_x * flip, part.scale_y)
}

/// Composite `region` onto `canvas` under the part's transform.
///
/// The region is rasterized with `vello_cpu`: bilinear sampling with padded
/// edges, and anti-aliased coverage where the footprint boundary falls inside
/// a pixel (the default eye ends at x = 64.56, so column 64 is partly
/// covered). The result is blended source-over. Pixels falling outside the
/// canvas are dropped.
pub fn place(canvas: &mut Canvas, region: &Region, part: &PartSpec) -> TeeResult<()> {
    draw_region(canvas, region, part_transform(part))
}

pub(crate) fn draw_region(
    canvas: &mut Canvas,
    region: &Region,
    transform: Affine,
) -> TeeResult<()> {
    if region.width == 0 || region.height == 0 {
        return Ok(());
    }
    let det = transform.determinant();
    if det == 0.0 || !det.is_finite() {
        tracing::trace!("skipping region under degenerate transform");
        return Ok(());
    }

    let width = surface_dim(canvas.width(), "canvas width")?;
    let height = surface_dim(canvas.height(), "canvas height")?;
    let paint = region_paint(region)?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(region.width),
        f64::from(region.height),
    ));
    ctx.flush();

    let mut layer = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut layer);

    for (dst, src) in canvas
        .as_bytes_mut()
        .chunks_exact_mut(4)
        .zip(layer.data_as_u8_slice().chunks_exact(4))
    {
        over_in_place(dst, [src[0], src[1], src[2], src[3]]);
    }
    Ok(())
}

fn surface_dim(v: u32, what: &str) -> TeeResult<u16> {
    v.try_into()
        .map_err(|_| TeeError::validation(format!("{what} {v} exceeds u16")))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

/// Wrap a premultiplied region as an image paint.
fn region_paint(region: &Region) -> TeeResult<vello_cpu::Image> {
    let width = surface_dim(region.width, "region width")?;
    let height = surface_dim(region.height, "region height")?;

    let mut may_have_opacities = false;
    let pixels = region
        .rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect::<Vec<_>>();
    if pixels.len() != usize::from(width) * usize::from(height) {
        return Err(TeeError::validation("region byte length does not match its size"));
    }

    let pixmap =
        vello_cpu::Pixmap::from_parts_with_opacity(pixels, width, height, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/place.rs"]
mod tests;
