//! Rasterization of shapes onto image buffers.
//!
//! Drawing is hard-edged: a pixel either gets the texture color, or is left untouched.
//! There is no antialiasing, so a solid texture never produces intermediate colors.
use {
  crate::{
    geometry::{BoundingBox, Shape, CanvasSpace, PixelSpace},
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Size2D},
  std::ops::Deref
};

mod impl_draw_rgbaimage;
#[cfg(test)] mod tests;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

impl<B> SDF<f32> for Box<dyn Draw<B>> { fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 { self.deref().sdf(pixel) } }
impl<B> BoundingBox<f32, CanvasSpace> for Box<dyn Draw<B>> { fn bounding_box(&self) -> Box2D<f32, CanvasSpace> { self.deref().bounding_box() } }

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, CanvasSpace> for Texture<S, T> where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> { self.shape.bounding_box() } }

/// Pixels that may be covered by `bounding_box`, clipped to the image.
/// `None` if the box has no intersection with the image at all.
fn pixel_bounds(
  bounding_box: Box2D<f32, CanvasSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .cast_unit()
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}
