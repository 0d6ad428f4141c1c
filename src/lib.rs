//! Procedural toolbar icons.
//!
//! Five fixed 24×24 glyphs (home, code, lock, settings, message) are described as lists of
//! drawing instructions in [`icons`], rasterized from signed distance functions by [`drawing`],
//! and written as PNG files by [`renderer`].
//!
//! # Basic usage
//! ```no_run
//! # use sdf_icons::{error::Result, renderer::{Renderer, RenderConfig}};
//! # fn main() -> Result<()> {
//! let written = Renderer::new(RenderConfig::default()).run()?;
//! assert_eq!(written.len(), 5);
//! #   Ok(())
//! # }
//! ```
//! A single icon can be drawn without touching the disk:
//! ```
//! # use sdf_icons::icons;
//! let image = icons::home().render();
//! assert_eq!(image.dimensions(), (icons::SIZE, icons::SIZE));
//! ```
//!
//! # Shapes
//! - `trait `[`Shape`](`geometry::Shape`)`: `[`SDF`](`sdf::SDF`)` + `[`BoundingBox`](`geometry::BoundingBox`)
//! - `trait `[`Draw`](`drawing::Draw`)`: `[`Shape`](`geometry::Shape`)
//!
//! `Draw` is implemented on [`Texture`](`drawing::Texture`), a shape paired with a fill
//! color. Instructions of an icon are turned into `Box<dyn Draw<RgbaImage>>` and drawn in order.

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod icons;
pub mod renderer;
#[cfg(test)] mod tests;
