use {
  super::*,
  crate::geometry::{self, Circle, Segment},
  euclid::Vector2D as V2,
  image::{Rgba, RgbaImage},
};

const PURPLE: Rgba<u8> = Rgba([98, 0, 238, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn painted(image: &RgbaImage) -> usize {
  image.pixels().filter(|&&px| px != CLEAR).count()
}

fn b(x0: f32, y0: f32, x1: f32, y1: f32) -> Box2D<f32, CanvasSpace> {
  Box2D::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
}

#[test] fn rectangle_exact_coverage() {
  let mut image = RgbaImage::new(24, 24);
  geometry::rectangle(b(4.0, 12.0, 20.0, 22.0))
    .texture(PURPLE)
    .draw(&mut image);
  assert_eq!(painted(&image), 16 * 10);
  image.enumerate_pixels().for_each(|(x, y, &px)| {
    let inside = (4..20).contains(&x) && (12..22).contains(&y);
    assert_eq!(px, if inside { PURPLE } else { CLEAR }, "pixel ({x}, {y})");
  });
}

#[test] fn clipped() {
  let mut image = RgbaImage::new(24, 24);
  geometry::rectangle(b(-5.0, -5.0, 3.0, 3.0))
    .texture(PURPLE)
    .draw(&mut image);
  assert_eq!(painted(&image), 9);
}

#[test] fn offscreen() {
  let mut image = RgbaImage::new(24, 24);
  geometry::rectangle(b(30.0, 30.0, 40.0, 40.0))
    .texture(PURPLE)
    .draw(&mut image);
  Circle
    .scale(V2::splat(3.0))
    .translate(V2::splat(-10.0))
    .texture(PURPLE)
    .draw(&mut image);
  assert_eq!(painted(&image), 0);
}

#[test] fn hard_edge() {
  let mut image = RgbaImage::new(24, 24);
  image.put_pixel(12, 12, Rgba([255, 0, 0, 128]));
  Circle
    .scale(V2::splat(7.3))
    .translate(V2::splat(12.0))
    .texture(PURPLE)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(12, 12), PURPLE);
  assert!(image.pixels().all(|&px| px == PURPLE || px == CLEAR));
}

#[test] fn polymorphic() {
  let mut image = RgbaImage::new(24, 24);
  let shapes: Vec<Box<dyn Draw<RgbaImage>>> = vec![
    Box::new(geometry::rectangle(b(0.0, 0.0, 2.0, 2.0)).texture(PURPLE)),
    Box::new(Segment {
      from: Point2D::new(10.0, 10.0),
      to: Point2D::new(20.0, 10.0),
      width: 2.0
    }.texture(Rgba([0, 0, 255, 255])))
  ];
  shapes.iter().for_each(|shape| shape.draw(&mut image));
  assert_eq!(*image.get_pixel(1, 1), PURPLE);
  assert_eq!(*image.get_pixel(15, 9), Rgba([0, 0, 255, 255]));
  assert_eq!(shapes[0].bounding_box(), b(0.0, 0.0, 2.0, 2.0));
}
