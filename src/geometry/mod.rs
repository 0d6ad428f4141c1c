//! .
//!
//! The origin of coordinate system is in top-left corner, y axis pointing down. Shapes live in
//! continuous canvas units: pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`, and is sampled
//! at its center.

use {
  euclid::{Point2D, Box2D, Vector2D as V2},
  crate::sdf::{SDF, Subtraction, Intersection}
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Continuous canvas coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct CanvasSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, CanvasSpace> {
  fn translate<T>(self, offset: V2<T, CanvasSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, scale: V2<T, CanvasSpace>) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  /// Subtracion of two SDFs. Note that this operation is *not* commutative,
  /// i.e. `Subtraction {a, b} =/= Subtraction {b, a}`.
  fn subtraction<U>(self, other: U) -> Subtraction<Self, U> where Self: Sized {
    Subtraction { s1: self, s2: other }
  }
  /// Intersection of two SDFs.
  fn intersection<U>(self, other: U) -> Intersection<Self, U> where Self: Sized {
    Intersection { s1: self, s2: other }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, CanvasSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, CanvasSpace>
}
impl <S> BoundingBox<f32, CanvasSpace> for Translation<S, f32>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, CanvasSpace>
}
impl <S> BoundingBox<f32, CanvasSpace> for Scale<S, f32>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

/// Sample point of a pixel, in canvas units.
pub fn to_canvas_space(pixel: Point2D<u32, PixelSpace>) -> Point2D<f32, CanvasSpace> {
  (pixel.to_f32() + V2::splat(0.5)).cast_unit()
}
