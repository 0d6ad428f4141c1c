use {
  std::f32::consts::{PI, TAU},
  super::{BoundingBox, CanvasSpace, Shape, Translation},
  crate::sdf::SDF,
  euclid::{Angle, Box2D, Point2D, Vector2D as V2}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Square with side 2, centered in the origin
#[derive(Debug, Copy, Clone)]
pub struct Square;

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl<S> BoundingBox<f32, S> for Square {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

impl SDF<f32> for Square {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let dist = pixel.to_vector().abs() - V2::splat(1.0);
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist
  }
}

/// Filled ellipse inscribed in `bounds`.
pub fn ellipse(bounds: Box2D<f32, CanvasSpace>) -> impl Shape + Copy {
  Circle
    .scale(bounds.size().to_vector() / 2.0)
    .translate(bounds.center().to_vector())
}

/// Filled axis-aligned rectangle.
pub fn rectangle(bounds: Box2D<f32, CanvasSpace>) -> impl Shape + Copy {
  Square
    .scale(bounds.size().to_vector() / 2.0)
    .translate(bounds.center().to_vector())
}

/// Rectangle with circular corners, centered in the origin.
#[derive(Debug, Copy, Clone)]
pub struct RoundedRect {
  pub half_size: V2<f32, CanvasSpace>,
  pub radius: f32
}

impl RoundedRect {
  pub fn new(bounds: Box2D<f32, CanvasSpace>, radius: f32) -> Translation<Self, f32> {
    let half_size = bounds.size().to_vector() / 2.0;
    RoundedRect {
      half_size,
      radius: radius.min(half_size.x).min(half_size.y).max(0.0)
    }.translate(bounds.center().to_vector())
  }
}

impl BoundingBox<f32, CanvasSpace> for RoundedRect {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::new(
      (-self.half_size).to_point(),
      self.half_size.to_point()
    )}}

impl SDF<f32> for RoundedRect {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let dist = pixel.to_vector().abs() - self.half_size + V2::splat(self.radius);
    let outside_dist = dist
      .max(V2::splat(0.0))
      .length();
    let inside_dist = dist.x
      .max(dist.y)
      .min(0.0);
    outside_dist + inside_dist - self.radius
  }
}

/// Line segment stroked with round caps.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
  pub from: Point2D<f32, CanvasSpace>,
  pub to: Point2D<f32, CanvasSpace>,
  pub width: f32
}

impl BoundingBox<f32, CanvasSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    let r = self.width / 2.0;
    Box2D::from_points([self.from, self.to])
      .inflate(r, r)
  }
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let pa = pixel - self.from;
    let ba = self.to - self.from;
    let h = match ba.square_length() {
      len if len > 0.0 => (pa.dot(ba) / len).clamp(0.0, 1.0),
      _ => 0.0
    };
    (pa - ba * h).length() - self.width / 2.0
  }
}

/// Filled simple polygon.
#[derive(Debug, Clone)]
pub struct Polygon {
  pub vertices: Vec<Point2D<f32, CanvasSpace>>
}

impl BoundingBox<f32, CanvasSpace> for Polygon {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::from_points(self.vertices.iter().copied())
  }
}

impl SDF<f32> for Polygon {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let first = match self.vertices.first() {
      Some(&v) => v,
      None => return f32::INFINITY
    };
    let mut dist = (pixel - first).square_length();
    let mut sign = 1.0;

    // each edge, paired with its predecessor vertex
    let prev = self.vertices.iter().cycle().skip(self.vertices.len() - 1);
    for (&vi, &vj) in self.vertices.iter().zip(prev) {
      let e = vj - vi;
      let w = pixel - vi;
      let h = match e.square_length() {
        len if len > 0.0 => (w.dot(e) / len).clamp(0.0, 1.0),
        _ => 0.0
      };
      dist = dist.min((w - e * h).square_length());

      // even-odd crossing
      let c = [
        pixel.y >= vi.y,
        pixel.y < vj.y,
        e.x * w.y > e.y * w.x
      ];
      if c.iter().all(|&c| c) || c.iter().all(|&c| !c) {
        sign = -sign;
      }
    }
    sign * dist.sqrt()
  }
}

/// Everything swept clockwise from `start` to `end` around `apex`.
/// Angles are measured from the positive x axis; with y pointing down, that is clockwise
/// from 3 o'clock. Unbounded, so it is only useful as an operand of [`Shape::intersection`].
#[derive(Debug, Copy, Clone)]
pub struct Sector {
  pub apex: Point2D<f32, CanvasSpace>,
  pub start: Angle<f32>,
  pub end: Angle<f32>
}

impl SDF<f32> for Sector {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let span = (self.end - self.start).radians;
    if span >= TAU {
      return f32::NEG_INFINITY;
    }
    let p = pixel - self.apex;
    let start = unit(self.start);
    let end = unit(self.end);
    // signed distances to the bounding rays, negative on the swept side
    let after_start = -start.cross(p);
    let before_end = end.cross(p);
    if span <= PI {
      after_start.max(before_end)
    } else {
      after_start.min(before_end)
    }
  }
}

fn unit(angle: Angle<f32>) -> V2<f32, CanvasSpace> {
  V2::new(angle.radians.cos(), angle.radians.sin())
}

/// Stroke of an elliptic arc inscribed in `bounds`. The stroke grows inward from the edge of
/// `bounds`, `width` units thick.
#[derive(Debug, Copy, Clone)]
pub struct Arc {
  pub bounds: Box2D<f32, CanvasSpace>,
  pub start: Angle<f32>,
  pub end: Angle<f32>,
  pub width: f32
}

impl BoundingBox<f32, CanvasSpace> for Arc {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.bounds
  }
}

impl SDF<f32> for Arc {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let sector = Sector {
      apex: self.bounds.center(),
      start: self.start,
      end: self.end
    };
    let inner = self.bounds.inflate(-self.width, -self.width);
    if inner.is_empty() {
      // stroke wider than the hole: a filled slice
      return ellipse(self.bounds)
        .intersection(sector)
        .sdf(pixel);
    }
    ellipse(self.bounds)
      .subtraction(ellipse(inner))
      .intersection(sector)
      .sdf(pixel)
  }
}
