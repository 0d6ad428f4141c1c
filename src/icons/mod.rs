//! The five toolbar icons, each a fixed list of drawing instructions.
//!
//! All geometry derives from [`SIZE`] and [`PADDING`]; every instruction is filled with [`FILL`].

use {
  crate::{
    drawing::Draw,
    geometry::{self, Shape, CanvasSpace, Polygon, Segment, Arc, RoundedRect}
  },
  euclid::{Angle, Box2D, Point2D, Vector2D as V2},
  image::{Rgba, RgbaImage}
};


/// Side of the square canvas.
pub const SIZE: u32 = 24;
pub const PADDING: u32 = 2;
/// Side of the canvas without padding.
pub const INNER: u32 = SIZE - PADDING * 2;
/// Material purple, #6200EE.
pub const FILL: Rgba<u8> = Rgba([98, 0, 238, 255]);

const STROKE: f32 = 2.0;

/// How the spokes of the settings gear are laid out.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Spokes {
  /// All eight spokes run to the same lower-left endpoint, which reproduces the icon
  /// shipped so far.
  #[default]
  Collapsed,
  /// Spokes are spread 45° apart, forming an actual gear.
  Rotated,
}

#[derive(Debug, Clone)]
pub enum Primitive {
  Polygon(Vec<Point2D<f32, CanvasSpace>>),
  Line {
    from: Point2D<f32, CanvasSpace>,
    to: Point2D<f32, CanvasSpace>,
    width: f32
  },
  /// Angles are clockwise from 3 o'clock.
  Arc {
    bounds: Box2D<f32, CanvasSpace>,
    start: Angle<f32>,
    end: Angle<f32>,
    width: f32
  },
  Rectangle(Box2D<f32, CanvasSpace>),
  RoundedRectangle {
    bounds: Box2D<f32, CanvasSpace>,
    radius: f32
  },
  Ellipse(Box2D<f32, CanvasSpace>),
}

impl Primitive {
  pub fn texture(&self, color: Rgba<u8>) -> Box<dyn Draw<RgbaImage>> {
    match *self {
      Primitive::Polygon(ref vertices) => Box::new(
        Polygon { vertices: vertices.clone() }.texture(color)),
      Primitive::Line { from, to, width } => Box::new(
        Segment { from, to, width }.texture(color)),
      Primitive::Arc { bounds, start, end, width } => Box::new(
        Arc { bounds, start, end, width }.texture(color)),
      Primitive::Rectangle(bounds) => Box::new(
        geometry::rectangle(bounds).texture(color)),
      Primitive::RoundedRectangle { bounds, radius } => Box::new(
        RoundedRect::new(bounds, radius).texture(color)),
      Primitive::Ellipse(bounds) => Box::new(
        geometry::ellipse(bounds).texture(color)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Icon {
  pub name: &'static str,
  pub primitives: Vec<Primitive>
}

impl Icon {
  /// Draw on a fresh, fully transparent canvas.
  pub fn render(&self) -> RgbaImage {
    let mut image = RgbaImage::new(SIZE, SIZE);
    self.primitives.iter()
      .for_each(|primitive| primitive
        .texture(FILL)
        .draw(&mut image));
    image
  }
}

/// Every icon, in the order they are written.
pub fn all(spokes: Spokes) -> Vec<Icon> {
  vec![home(), code(), lock(), settings(spokes), message()]
}

fn pt(x: u32, y: u32) -> Point2D<f32, CanvasSpace> {
  Point2D::new(x as f32, y as f32)
}

fn bounds(x0: u32, y0: u32, x1: u32, y1: u32) -> Box2D<f32, CanvasSpace> {
  Box2D::new(pt(x0, y0), pt(x1, y1))
}

fn line(from: Point2D<f32, CanvasSpace>, to: Point2D<f32, CanvasSpace>) -> Primitive {
  Primitive::Line { from, to, width: STROKE }
}

const S: u32 = SIZE;
const P: u32 = PADDING;
const C: u32 = SIZE / 2;

/// House silhouette: roof apex at the top, walls down to the bottom edge.
pub fn home() -> Icon {
  Icon {
    name: "home",
    primitives: vec![
      Primitive::Polygon(vec![pt(P, C), pt(C, P), pt(S - P, C), pt(S - P, S - P), pt(P, S - P)])
    ]
  }
}

/// A pair of square brackets.
pub fn code() -> Icon {
  let arm = INNER / 3;
  Icon {
    name: "code",
    primitives: vec![
      line(pt(P, P), pt(P + arm, P)),
      line(pt(P, P), pt(P, S - P)),
      line(pt(P, S - P), pt(P + arm, S - P)),

      line(pt(S - P - arm, P), pt(S - P, P)),
      line(pt(S - P, P), pt(S - P, S - P)),
      line(pt(S - P, S - P), pt(S - P - arm, S - P)),
    ]
  }
}

/// Padlock: body in the bottom half, shackle on top. The shackle is the lower half of its
/// bounds, so it dips into the body.
pub fn lock() -> Icon {
  Icon {
    name: "lock",
    primitives: vec![
      Primitive::Rectangle(bounds(P + 2, C, S - P - 2, S - P)),
      Primitive::Arc {
        bounds: bounds(P + 4, P, S - P - 4, C + 2),
        start: Angle::degrees(0.0),
        end: Angle::degrees(180.0),
        width: STROKE
      }
    ]
  }
}

/// Gear: eight spokes out of the center, and a hub.
pub fn settings(spokes: Spokes) -> Icon {
  let center = pt(C, C);
  let hub = (INNER / 3 / 2) as f32;
  let reach = (INNER / 2) as f32;

  let mut primitives = (0..8)
    .map(|i| {
      let to = match spokes {
        Spokes::Collapsed => center + V2::new(-reach, reach),
        Spokes::Rotated => {
          let angle = Angle::degrees(45.0 * i as f32);
          center + V2::new(angle.radians.cos(), angle.radians.sin()) * reach
        }
      };
      line(center, to)
    })
    .collect::<Vec<_>>();
  primitives.push(Primitive::Ellipse(Box2D::new(
    center - V2::splat(hub),
    center + V2::splat(hub)
  )));

  Icon { name: "settings", primitives }
}

/// Speech bubble with a tail at the bottom right.
pub fn message() -> Icon {
  Icon {
    name: "message",
    primitives: vec![
      Primitive::RoundedRectangle {
        bounds: bounds(P, P, S - P, S - P - 4),
        radius: 3.0
      },
      Primitive::Polygon(vec![pt(S - P - 8, S - P - 4), pt(S - P - 4, S - P + 2), pt(S - P - 12, S - P - 4)])
    ]
  }
}
