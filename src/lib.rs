//! Teeforge renders Teeworlds "tee" avatars from skin sprite sheets.
//!
//! A skin is a 256×128 sprite sheet that packs the body, feet, hands and eye
//! variants of a tee at fixed rectangles. Teeforge cuts those rectangles out
//! and composites them into an 86×80 avatar icon (`Canvas`) driven by a
//! declarative part table (`Catalog`).
//!
//! # Pipeline overview
//!
//! 1. **Decode**: encoded bytes -> [`SkinImage`] (premultiplied RGBA8), see [`decode_skin`]
//! 2. **Extract**: [`SheetRect`] -> [`Region`] (bit-exact crop), see [`extract`]
//! 3. **Place**: [`Region`] + [`PartSpec`] -> pixels on the [`Canvas`], see [`place`]
//! 4. **Render**: all parts in ascending layer order, see [`render`] / [`render_with`]
//! 5. **Encode**: [`Canvas`] -> PNG bytes, see [`encode_png`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical skin bytes always produce identical avatar bytes.
//! - **No IO in the compositor**: skins are fetched and decoded before rendering,
//!   through a [`SkinSource`].
//! - **Premultiplied RGBA8** end-to-end until encoding.
#![forbid(unsafe_code)]

mod assets;
mod catalog;
mod encode;
mod foundation;
mod raster;
mod render;

pub use assets::decode::decode_skin;
pub use assets::source::{DirSkinSource, SkinSource};
pub use catalog::model::{Catalog, EyeStyle, PartSpec, SkinElement};
pub use catalog::builtin::{CANVAS_HEIGHT, CANVAS_WIDTH, SKIN_HEIGHT, SKIN_WIDTH};
pub use encode::png::{encode_png, write_png};
pub use foundation::core::{Affine, Canvas, Point, Rgba8Premul, SheetRect, SkinImage, Vec2};
pub use foundation::error::{TeeError, TeeResult};
pub use raster::extract::{Region, extract};
pub use raster::place::{part_transform, place};
pub use render::driver::{RenderSettings, render, render_with};
pub use render::pipeline::{RenderThreading, render_batch};
