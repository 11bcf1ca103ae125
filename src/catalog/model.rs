use std::{borrow::Cow, collections::HashSet};

use crate::{
    catalog::builtin,
    foundation::{
        core::SheetRect,
        error::{TeeError, TeeResult},
    },
};

/// A named rectangle of the skin sprite sheet.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkinElement {
    pub name: Cow<'static, str>,
    pub rect: SheetRect,
}

/// One composited layer of the avatar.
///
/// The part is drawn by translating to `(dest_x, dest_y)`, then scaling by
/// `(scale_x * (flip_x ? -1 : 1), scale_y)`, then drawing the referenced
/// element at the local origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PartSpec {
    pub name: Cow<'static, str>,
    /// Name of the [`SkinElement`] this part draws.
    pub element: Cow<'static, str>,
    /// Draw order; lower layers are painted first.
    pub layer: i32,
    pub dest_x: f64,
    pub dest_y: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
    #[serde(default)]
    pub flip_x: bool,
}

fn unit_scale() -> f64 {
    1.0
}

/// Eye expression drawn on the avatar.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EyeStyle {
    #[default]
    Normal,
    Angry,
    Blink,
    Happy,
    Cross,
    Surprised,
}

impl EyeStyle {
    /// All styles, in sheet order.
    pub const ALL: [EyeStyle; 6] = [
        EyeStyle::Normal,
        EyeStyle::Angry,
        EyeStyle::Blink,
        EyeStyle::Happy,
        EyeStyle::Cross,
        EyeStyle::Surprised,
    ];

    /// Name of the skin element holding this eye.
    pub fn element_name(self) -> &'static str {
        match self {
            EyeStyle::Normal => "default_eye",
            EyeStyle::Angry => "angry_eye",
            EyeStyle::Blink => "blink_eye",
            EyeStyle::Happy => "happy_eye",
            EyeStyle::Cross => "cross_eye",
            EyeStyle::Surprised => "surprised_eye",
        }
    }

    fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.element_name() == name)
    }
}

/// Declarative avatar layout: the sheet rectangles and the parts drawn from them.
///
/// The builtin catalog is process-wide static data (see [`Catalog::builtin`]).
/// Custom catalogs can be deserialized from JSON; run [`Catalog::validate`]
/// before rendering them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub elements: Cow<'static, [SkinElement]>,
    pub parts: Cow<'static, [PartSpec]>,
}

impl Catalog {
    /// The standard tee layout: body shadow, body, left eye, mirrored right eye.
    pub fn builtin() -> &'static Catalog {
        &builtin::BUILTIN_CATALOG
    }

    /// Look up the sheet rectangle of a named element.
    pub fn element(&self, name: &str) -> Option<SheetRect> {
        self.elements
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.rect)
    }

    /// Parts sorted by ascending layer. Ties keep declaration order.
    pub fn parts_in_draw_order(&self) -> Vec<&PartSpec> {
        let mut parts: Vec<&PartSpec> = self.parts.iter().collect();
        parts.sort_by_key(|p| p.layer);
        parts
    }

    /// Copy of this catalog with every eye part drawing `style` instead.
    pub fn with_eyes(&self, style: EyeStyle) -> Catalog {
        let parts = self
            .parts
            .iter()
            .map(|p| {
                let mut p = p.clone();
                if EyeStyle::from_element_name(&p.element).is_some() {
                    p.element = Cow::Borrowed(style.element_name());
                }
                p
            })
            .collect::<Vec<_>>();
        Catalog {
            parts: Cow::Owned(parts),
            ..self.clone()
        }
    }

    /// Check referential integrity and geometry of the catalog.
    pub fn validate(&self) -> TeeResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(TeeError::validation("catalog canvas must be non-empty"));
        }

        let mut names: HashSet<&str> = HashSet::new();
        for e in self.elements.iter() {
            if !names.insert(&*e.name) {
                return Err(TeeError::validation(format!(
                    "duplicate skin element '{}'",
                    e.name
                )));
            }
            if e.rect.width == 0 || e.rect.height == 0 {
                return Err(TeeError::validation(format!(
                    "skin element '{}' has an empty rectangle",
                    e.name
                )));
            }
            if !e.rect.fits_within(self.sheet_width, self.sheet_height) {
                return Err(TeeError::validation(format!(
                    "skin element '{}' {} exceeds the {}x{} sheet",
                    e.name, e.rect, self.sheet_width, self.sheet_height
                )));
            }
        }

        let mut layers = HashSet::new();
        for p in self.parts.iter() {
            if self.element(&p.element).is_none() {
                return Err(TeeError::UnknownPart {
                    part: p.name.to_string(),
                    element: p.element.to_string(),
                });
            }
            if !layers.insert(p.layer) {
                return Err(TeeError::validation(format!(
                    "part '{}' reuses layer {}",
                    p.name, p.layer
                )));
            }
            let finite = [p.dest_x, p.dest_y, p.scale_x, p.scale_y]
                .iter()
                .all(|v| v.is_finite());
            if !finite || p.scale_x == 0.0 || p.scale_y == 0.0 {
                return Err(TeeError::validation(format!(
                    "part '{}' needs finite placement and non-zero scale",
                    p.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
