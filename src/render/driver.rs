use crate::{
    catalog::model::Catalog,
    foundation::{
        core::{Canvas, Rgba8Premul, SkinImage},
        error::{TeeError, TeeResult},
    },
    raster::{extract::extract, place::place},
};

/// Knobs for a single render.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Straight-alpha background color; `None` leaves the canvas transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Render a skin with the builtin catalog and default settings.
///
/// This is the primary "one-shot" API: it returns the finished 86×80 avatar as
/// **premultiplied** RGBA8, or an error and no canvas at all.
pub fn render(image: &SkinImage) -> TeeResult<Canvas> {
    render_with(image, Catalog::builtin(), &RenderSettings::default())
}

/// Render a skin with an explicit catalog.
///
/// Parts are composited in ascending layer order onto a fresh canvas. The
/// output depends only on `image`, `catalog` and `settings`.
#[tracing::instrument(
    skip(image, catalog, settings),
    fields(width = image.width, height = image.height, parts = catalog.parts.len())
)]
pub fn render_with(
    image: &SkinImage,
    catalog: &Catalog,
    settings: &RenderSettings,
) -> TeeResult<Canvas> {
    let background = settings
        .clear_rgba
        .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
        .unwrap_or_else(Rgba8Premul::transparent);
    let mut canvas = Canvas::filled(catalog.canvas_width, catalog.canvas_height, background)?;

    for part in catalog.parts_in_draw_order() {
        let rect = catalog
            .element(&part.element)
            .ok_or_else(|| TeeError::UnknownPart {
                part: part.name.to_string(),
                element: part.element.to_string(),
            })?;
        let region = extract(image, &part.element, rect)?;
        place(&mut canvas, &region, part)?;
        tracing::debug!(part = %part.name, layer = part.layer, "composited part");
    }

    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
