/// The trainer panel glue without a rasterizer: console interception and
/// fullscreen negotiation around repeated layout "clicks".

use {
  subitize::{
    console::{Intercept, LogSink, Stdout},
    fullscreen::{FullscreenProvider, Toggle},
    generate_layout
  },
  anyhow::Result
};

struct HostWindow {
  active: bool
}

impl FullscreenProvider for HostWindow {
  fn name(&self) -> &'static str { "host-window" }
  fn available(&self) -> bool { true }
  fn enter(&mut self) { self.active = true; }
  fn exit(&mut self) { self.active = false; }
  fn active(&self) -> bool { self.active }
}

fn main() -> Result<()> {
  let mut sink = Intercept::new(Stdout);
  let mut toggle = Toggle::new(vec![Box::new(HostWindow { active: false })]);

  // each "click" replaces the previous layout wholesale
  for _ in 0..3 {
    let layout = generate_layout(6, true)?;
    sink.log(&format!(
      "layout: {} circles, min separation {:?}",
      layout.len(),
      layout.min_pairwise_distance()
    ));
  }

  toggle.toggle(&mut sink);
  sink.log(&format!("fullscreen button now reads: {}", toggle.label()));
  toggle.toggle(&mut sink);
  sink.log(&format!("fullscreen button now reads: {}", toggle.label()));

  let captured = sink.lines.len();
  sink.log(&format!("panel captured {} lines", captured));
  Ok(())
}
