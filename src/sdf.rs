use {
  euclid::{Point2D, Box2D},
  crate::geometry::{CanvasSpace, Shape, Scale, Translation, BoundingBox},
  num_traits::Float
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.sdf(pixel) * self.scale.x.min(self.scale.y)
  }
}

/// Subtracion of two SDFs. Note that this operation is *not* commutative,
/// i.e. `Subtraction {a, b} =/= Subtraction {b, a}`.
#[derive(Clone, Copy, Debug)]
pub struct Subtraction<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Subtraction<S1, S2>
  where T: Float,
    S1: SDF<T>,
    S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T {
    (-self.s2.sdf(pixel)).max(self.s1.sdf(pixel))
  }}

/// The cut can only shrink `s1`.
impl<T, S1, S2> BoundingBox<T, CanvasSpace> for Subtraction<S1, S2>
  where S1: BoundingBox<T, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<T, CanvasSpace> {
    self.s1.bounding_box()
  }}

/// Intersection of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Intersection<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T {
    self.s1.sdf(pixel).max(self.s2.sdf(pixel))
  }}
