//! HSL fill colors. The trainer varies hue only; saturation and lightness are
//! pinned so random fills stay legible against a white panel.

use {
  std::fmt,
  rand::Rng
};

/// Saturation applied to every randomized fill, percent.
pub const SATURATION: f64 = 50.0;
/// Lightness applied to every randomized fill, percent.
pub const LIGHTNESS: f64 = 45.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsl {
  /// Degrees, `[0, 360)`.
  pub hue: f64,
  /// Percent, `[0, 100]`.
  pub saturation: f64,
  /// Percent, `[0, 100]`.
  pub lightness: f64
}

impl Hsl {
  /// A random fill: hue uniform over `[0, 360)`, fixed saturation
  /// and lightness.
  pub fn random(rng: &mut impl Rng) -> Self {
    Hsl {
      hue: rng.gen::<f64>() * 360.0,
      saturation: SATURATION,
      lightness: LIGHTNESS
    }
  }

  /// Standard HSL → sRGB conversion, 8 bits per channel.
  pub fn to_rgb(self) -> [u8; 3] {
    let h = (self.hue.rem_euclid(360.0)) / 60.0;
    let s = self.saturation / 100.0;
    let l = self.lightness / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
      0 => (c, x, 0.0),
      1 => (x, c, 0.0),
      2 => (0.0, c, x),
      3 => (0.0, x, c),
      4 => (x, 0.0, c),
      _ => (c, 0.0, x)
    };
    let m = l - c / 2.0;
    let chan = |v: f64| ((v + m) * 255.0).round() as u8;
    [chan(r), chan(g), chan(b)]
  }
}

/// CSS notation, as the trainer emits it: `hsl(213.7, 50%, 45%)`.
impl fmt::Display for Hsl {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    fmt.write_fmt(format_args!(
      "hsl({:.1}, {}%, {}%)", self.hue, self.saturation, self.lightness
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn primaries() {
    let red = Hsl { hue: 0.0, saturation: 100.0, lightness: 50.0 };
    assert_eq!(red.to_rgb(), [255, 0, 0]);
    let green = Hsl { hue: 120.0, saturation: 100.0, lightness: 50.0 };
    assert_eq!(green.to_rgb(), [0, 255, 0]);
    let blue = Hsl { hue: 240.0, saturation: 100.0, lightness: 50.0 };
    assert_eq!(blue.to_rgb(), [0, 0, 255]);
  }

  #[test] fn grey_at_zero_saturation() {
    let grey = Hsl { hue: 77.0, saturation: 0.0, lightness: 45.0 };
    let [r, g, b] = grey.to_rgb();
    assert_eq!(r, g);
    assert_eq!(g, b);
  }

  #[test] fn css_notation() {
    let fill = Hsl { hue: 213.72, saturation: 50.0, lightness: 45.0 };
    assert_eq!(fill.to_string(), "hsl(213.7, 50%, 45%)");
  }
}
