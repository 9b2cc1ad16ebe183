//! Host fullscreen capability negotiation.
//!
//! The original trainer chained vendor-prefixed fullscreen entry points and
//! fell back to a "not supported" log line. Here the chain is explicit: probe
//! a prioritized list of [`FullscreenProvider`]s at initialization and keep
//! the first one that reports itself available.

use crate::console::LogSink;

pub trait FullscreenProvider {
  fn name(&self) -> &'static str;
  /// Probed once, at selection time.
  fn available(&self) -> bool;
  fn enter(&mut self);
  fn exit(&mut self);
  fn active(&self) -> bool;
}

/// First available provider, in list order.
pub fn select(
  providers: Vec<Box<dyn FullscreenProvider>>
) -> Option<Box<dyn FullscreenProvider>> {
  providers.into_iter().find(|p| p.available())
}

/// The panel's fullscreen button: tracks state through the selected provider
/// and exposes the label to print on it.
pub struct Toggle {
  provider: Option<Box<dyn FullscreenProvider>>
}

impl Toggle {
  pub fn new(providers: Vec<Box<dyn FullscreenProvider>>) -> Self {
    Toggle { provider: select(providers) }
  }

  /// Enter or leave fullscreen; without a provider, reports the missing
  /// capability through `sink` and stays inactive.
  pub fn toggle(&mut self, sink: &mut impl LogSink) {
    match &mut self.provider {
      Some(p) if p.active() => p.exit(),
      Some(p) => p.enter(),
      None => sink.log("Error: Fullscreen not supported")
    }
  }

  pub fn is_active(&self) -> bool {
    self.provider.as_ref().map_or(false, |p| p.active())
  }

  pub fn label(&self) -> &'static str {
    if self.is_active() { "Exit Fullscreen" } else { "Fullscreen" }
  }
}
