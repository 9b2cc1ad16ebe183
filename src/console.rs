//! Diagnostic output as an injectable sink.
//!
//! The original trainer live-debugged itself by monkey-patching the global
//! `console.log` to mirror every line into a panel before forwarding to the
//! native logger. A patched global needs a re-initialization guard and leaks
//! across the whole page; a sink passed by value needs neither. [`Intercept`]
//! is the panel: it records each line and forwards it to the wrapped sink.

pub trait LogSink {
  fn log(&mut self, line: &str);
}

/// Plain pass-through to standard output.
#[derive(Debug, Default)]
pub struct Stdout;

impl LogSink for Stdout {
  fn log(&mut self, line: &str) {
    println!("{}", line);
  }
}

/// Records every logged line in order, then forwards it downstream.
#[derive(Debug, Default)]
pub struct Intercept<S> {
  pub lines: Vec<String>,
  inner: S
}

impl<S> Intercept<S> {
  pub fn new(inner: S) -> Self {
    Intercept { lines: vec![], inner }
  }

  pub fn into_inner(self) -> S {
    self.inner
  }
}

impl<S: LogSink> LogSink for Intercept<S> {
  fn log(&mut self, line: &str) {
    self.lines.push(line.to_string());
    self.inner.log(line);
  }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
  fn log(&mut self, line: &str) {
    (**self).log(line)
  }
}
