use std::borrow::Cow;

use crate::{
    catalog::model::{Catalog, PartSpec, SkinElement},
    foundation::core::SheetRect,
};

/// Width of a standard skin sprite sheet.
pub const SKIN_WIDTH: u32 = 256;
/// Height of a standard skin sprite sheet.
pub const SKIN_HEIGHT: u32 = 128;

/// Width of the rendered avatar.
pub const CANVAS_WIDTH: u32 = 86;
/// Height of the rendered avatar.
pub const CANVAS_HEIGHT: u32 = 80;

const fn element(name: &'static str, x: u32, y: u32, w: u32, h: u32) -> SkinElement {
    SkinElement {
        name: Cow::Borrowed(name),
        rect: SheetRect::new(x, y, w, h),
    }
}

static ELEMENTS: [SkinElement; 13] = [
    element("body", 0, 0, 96, 96),
    element("body_shadow", 96, 0, 96, 96),
    element("hand", 192, 0, 32, 32),
    element("hand_shadow", 224, 0, 32, 32),
    element("foot", 192, 32, 64, 32),
    element("foot_shadow", 192, 64, 64, 32),
    element("credits", 0, 96, 64, 32),
    element("default_eye", 64, 96, 32, 32),
    element("angry_eye", 96, 96, 32, 32),
    element("blink_eye", 128, 96, 32, 32),
    element("happy_eye", 160, 96, 32, 32),
    element("cross_eye", 192, 96, 32, 32),
    element("surprised_eye", 224, 96, 32, 32),
];

// Body layers sit 1px below the top edge; eyes at y=23. Layers 2..=5 are
// reserved for feet and hands.
static PARTS: [PartSpec; 4] = [
    PartSpec {
        name: Cow::Borrowed("body_shadow"),
        element: Cow::Borrowed("body_shadow"),
        layer: 0,
        dest_x: 0.0,
        dest_y: 1.0,
        scale_x: 0.9,
        scale_y: 0.9,
        flip_x: false,
    },
    PartSpec {
        name: Cow::Borrowed("body"),
        element: Cow::Borrowed("body"),
        layer: 1,
        dest_x: 0.0,
        dest_y: 1.0,
        scale_x: 0.9,
        scale_y: 0.9,
        flip_x: false,
    },
    PartSpec {
        name: Cow::Borrowed("left_eye"),
        element: Cow::Borrowed("default_eye"),
        layer: 6,
        dest_x: 30.0,
        dest_y: 23.0,
        scale_x: 1.08,
        scale_y: 1.08,
        flip_x: false,
    },
    PartSpec {
        name: Cow::Borrowed("right_eye"),
        element: Cow::Borrowed("default_eye"),
        layer: 7,
        dest_x: 76.0,
        dest_y: 23.0,
        scale_x: 1.08,
        scale_y: 1.08,
        flip_x: true,
    },
];

pub(crate) static BUILTIN_CATALOG: Catalog = Catalog {
    sheet_width: SKIN_WIDTH,
    sheet_height: SKIN_HEIGHT,
    canvas_width: CANVAS_WIDTH,
    canvas_height: CANVAS_HEIGHT,
    elements: Cow::Borrowed(&ELEMENTS),
    parts: Cow::Borrowed(&PARTS),
};

#[cfg(test)]
#[path = "../../tests/unit/catalog/builtin.rs"]
mod tests;
