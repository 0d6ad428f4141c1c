use {
  euclid::{Point2D, Size2D},
  image::{Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Shape, Texture, pixel_bounds},
    geometry::{BoundingBox, PixelSpace, to_canvas_space},
    sdf::SDF
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match pixel_bounds(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::new(x, y))
      .filter(|&pixel| self.sdf(to_canvas_space(pixel)) <= 0.0)
      .for_each(|pixel| image.put_pixel(pixel.x, pixel.y, self.texture));
  }
}
