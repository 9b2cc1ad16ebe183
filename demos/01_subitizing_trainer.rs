/// Generate a random subitizing layout and rasterize it through the
/// trainer's fixed viewing frame.

use {
  subitize::{
    console::{Intercept, LogSink, Stdout},
    drawing,
    solver::Rejection2D
  },
  anyhow::Result,
  rand::SeedableRng,
  std::time::Instant
};

fn main() -> Result<()> {
  let path = "out.png";
  let t0 = Instant::now();
  let mut sink = Intercept::new(Stdout);

  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let layout = Rejection2D::default().generate(&mut rng, 12, true)?;
  drawing::render(&layout, 880).save(path)?;

  sink.log(&format!(
    "{} circles placed and drawn: {}ms",
    layout.len(),
    t0.elapsed().as_millis()
  ));
  Ok(())
}
