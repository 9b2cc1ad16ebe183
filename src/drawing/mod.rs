//! Rasterization of a [`Layout`] through the trainer's fixed viewing frame
//! (canvas plus a 5-unit margin on every side, viewport `[-5, 105] × [-5, 45]`).
//! Circle edges are antialiased over one pixel via the circle's signed
//! distance; rows are filled in parallel.

use {
  euclid::Box2D,
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*,
  crate::{
    color::Hsl,
    geometry::{CanvasSpace, CANVAS_HEIGHT, CANVAS_WIDTH, FRAME_MARGIN, P2},
    solver::Layout
  }
};


/// Fill for circles of an uncolorized run.
const DEFAULT_INK: [u8; 3] = [0, 0, 0];
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The viewing frame in canvas units.
pub fn viewport() -> Box2D<f64, CanvasSpace> {
  Box2D::new(
    P2::new(-FRAME_MARGIN, -FRAME_MARGIN),
    P2::new(CANVAS_WIDTH + FRAME_MARGIN, CANVAS_HEIGHT + FRAME_MARGIN)
  )
}

/// Render `layout` onto a white panel. `width` sets the image width in
/// pixels; height follows from the viewport's 110:50 aspect ratio.
pub fn render(layout: &Layout, width: u32) -> RgbaImage {
  let view = viewport();
  let scale = f64::from(width) / view.width();
  let height = (view.height() * scale).round().max(1.0) as u32;
  // canvas units per pixel
  let delta = 1.0 / scale;

  let mut buffer = vec![0u8; width as usize * height as usize * 4];
  buffer
    .par_chunks_mut(width as usize * 4)
    .enumerate()
    .for_each(|(y, row)| {
      for x in 0..width as usize {
        let point = P2::new(
          view.min.x + (x as f64 + 0.5) * delta,
          view.min.y + (y as f64 + 0.5) * delta
        );
        let mut pixel = BACKGROUND;
        // circles never overlap, compositing order is irrelevant
        for circle in layout.iter() {
          let sdf = point.distance_to(circle.center) - circle.radius;
          if sdf > delta {
            continue;
          }
          let [r, g, b] = circle.fill.map_or(DEFAULT_INK, Hsl::to_rgb);
          pixel = sdf_overlay_aa(sdf, delta, pixel, Rgba([r, g, b, 255]));
        }
        row[x * 4..x * 4 + 4].copy_from_slice(&pixel.0);
      }
    });

  RgbaImage::from_raw(width, height, buffer)
    .expect("buffer is sized to the image dimensions")
}

fn sdf_overlay_aa(sdf: f64, delta: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let df = (0.5 * delta - sdf) // antialias
    .clamp(0.0, delta);
  let alpha = df / delta;
  col2.0[3] = (f64::from(col2.0[3]) * alpha) as u8;
  col1.blend(&col2);
  col1
}
